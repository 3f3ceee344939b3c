//! Test data generator for the FlashString test suite.
//!
//! Emits a large constant integer array and a string table macro built from the
//! Sming project's README. Redirect standard output into a header file to use
//! the result.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "gen-test-data")]
struct Args {
   /// Reads the word list from the given file instead of `$SMING_HOME/README.rst`.
   #[structopt(long)]
   doc: Option<PathBuf>,
}

fn main() {
   if let Err(error) = run(Args::from_args()) {
      eprintln!("{} {:#}", "error:".red().bold(), error);
      std::process::exit(1);
   }
}

fn run(args: Args) -> anyhow::Result<()> {
   let stdout = std::io::stdout();
   let mut out = stdout.lock();

   // The array block does not depend on the document, so it goes out before the
   // file is even opened.
   writeln!(out, "{}", fstr_tools_codegen::int_array("largeIntArray", "int", 1000, 123))?;
   writeln!(out)?;

   let path = match args.doc {
      Some(path) => path,
      None => document_path()?,
   };
   let text = std::fs::read_to_string(&path)
      .with_context(|| format!("cannot read {}", path.display()))?;

   writeln!(out, "{}", fstr_tools_codegen::string_map("LARGE_STRING_MAP", text.split_whitespace()))?;
   writeln!(out)?;

   Ok(())
}

fn document_path() -> anyhow::Result<PathBuf> {
   let home = std::env::var("SMING_HOME")
      .map_err(|_| anyhow::anyhow!("cannot resolve ${{SMING_HOME}}/README.rst: SMING_HOME is not set"))?;
   Ok(PathBuf::from(home).join("README.rst"))
}
