use clap::Parser;
use imgcmp::cli::Args;
use imgcmp::logger::{self, Verbosity};
use imgcmp::{run, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let verbosity = args.verbosity();

    if let Err(e) = logger::init(verbosity) {
        eprintln!("Warning: {}", e);
    }

    let config = Config::from_env(args.root)
        .with_jobs(args.jobs)
        .with_progress(verbosity != Verbosity::Quiet);

    match run(&config) {
        Ok(outcome) => {
            println!("{}", outcome.message());
            if let Some(detail) = outcome.detail() {
                println!("{}", detail);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
