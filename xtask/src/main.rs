use clap::Parser;
use std::process::ExitCode;

mod app;
mod cli;
mod config;
mod error;
mod tasks;
mod util;

fn main() -> ExitCode {
    let cli = crate::cli::Cli::parse();
    crate::util::logging::init(cli.verbose);

    match crate::app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// A failed step's own exit code, otherwise 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<crate::error::StepError>()
        .map_or(1, crate::error::StepError::exit_code);
    u8::try_from(code).unwrap_or(1)
}
