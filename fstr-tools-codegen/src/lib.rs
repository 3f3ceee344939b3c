//! Code generation facilities for the FlashString build. Generates C preprocessor
//! text which gets redirected into header files consumed by the C++ side.

use std::fmt::Write;

/// Generates a `DEFINE_FSTR_ARRAY` invocation holding `count` integers, where
/// element `i` is `i * step`.
pub fn int_array(name: &str, c_type: &str, count: usize, step: usize) -> String {
   let mut buffer = format!("DEFINE_FSTR_ARRAY({}, {}, ", name, c_type);
   for i in 0..count {
      if i > 0 {
         buffer.push(',');
      }
      let _ = write!(buffer, "{}", i * step);
   }
   buffer.push_str(" )");
   buffer
}

/// Generates an X macro definition mapping zero-based indices to string literals.
///
/// Words are placed between double quotes verbatim; a word that itself contains
/// a quote or backslash produces output the preprocessor will choke on.
pub fn string_map<'a>(name: &str, words: impl Iterator<Item = &'a str>) -> String {
   let mut buffer = format!("#define {}(XX) ", name);
   for (i, word) in words.enumerate() {
      if i > 0 {
         buffer.push_str(" \\\n  ");
      }
      let _ = write!(buffer, "XX({}, \"{}\")", i, word);
   }
   buffer
}

/// Generates the `FSTR_VA_NARGS` macro pair, which counts up to `count` variadic
/// arguments.
///
/// The public macro pads the caller's arguments with a descending sequence, so
/// the parameter that lines up with `N` in the implementation macro receives the
/// number of arguments actually passed. `count` is expected to be at least 1;
/// with 0 the placeholder list collapses and the pair cannot count anything.
pub fn va_nargs(count: usize) -> String {
   let mut buffer = String::from("#define FSTR_VA_NARGS_IMPL(");
   for i in 1..=count {
      let _ = write!(buffer, "_{}, ", i);
   }
   buffer.push_str("N, ...) N\n");

   buffer.push_str("#define FSTR_VA_NARGS(...) FSTR_VA_NARGS_IMPL(__VA_ARGS__, ");
   for i in (1..=count).rev() {
      let _ = write!(buffer, "{}", i);
      if i > 1 {
         buffer.push_str(", ");
      }
   }
   buffer.push(')');
   buffer
}
