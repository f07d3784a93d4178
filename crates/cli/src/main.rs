use std::process::ExitCode;

use clap::Parser;
use flagparse_cli::cli_args::Args;
use flagparse_core::error::Result;
use flagparse_core::help::StdoutSink;

fn execute() -> Result<()> {
    let args = Args::parse();
    let rendered = flagparse_cli::run(&args, &mut StdoutSink)?;
    print!("{rendered}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
