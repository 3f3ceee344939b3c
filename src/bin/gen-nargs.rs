//! Generates the macro pair used to count the arguments of a variadic macro.
//!
//! Required for Clang; GCC has a better way.

use std::num::NonZeroUsize;

use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "gen-nargs")]
struct Args {
   /// The maximum number of arguments the macro can count. Must be at least 1.
   #[structopt(long, default_value = "2048")]
   count: NonZeroUsize,
}

fn main() {
   let args = Args::from_args();
   println!("{}", fstr_tools_codegen::va_nargs(args.count.get()));
}
