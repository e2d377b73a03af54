//! Thin CLI front-end: flags in, passwords out on stdout.

mod flags;
mod parse;

pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use std::process::ExitCode;

use zeroize::Zeroize;

use passgen::pass::charset;

const HELP: &str = "\
passgen - random password generator

Usage: passgen [OPTIONS]

Options:
  -l, --length <N>      Password length (default 10)
  -n, --number <N>      How many passwords to generate (default 1)
      --numbers         Include digits
      --symbols         Include symbols
      --strict          Require one character from each enabled class
      --exclude-similar Drop visually similar characters (ilLI|`oO0)
      --no-uppercase    Exclude uppercase letters
      --no-lowercase    Do not require lowercase in strict mode
  -i, --info            Print pool size and entropy estimate to stderr
  -h, --help            Show this help
  -v, --version         Show version";

pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if flags.help {
        println!("{}", HELP);
        return ExitCode::SUCCESS;
    }
    if flags.version {
        println!("passgen {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let options = flags.to_options();
    let count = flags.count.unwrap_or(1);

    if flags.info {
        let pool_size = charset::size(&options);
        let entropy = options.length as f64 * (pool_size as f64).log2();
        eprintln!("Pool: {} chars | Entropy: {:.1} bits", pool_size, entropy);
    }

    match passgen::generate_many(count, &options) {
        Ok(mut passwords) => {
            for password in &mut passwords {
                println!("{}", password);
                password.zeroize();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
