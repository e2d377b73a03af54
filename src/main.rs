use std::env;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
