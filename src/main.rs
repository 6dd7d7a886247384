use mockexam::commands::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    commands::init_tracing();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => commands::report_failure(&err),
    }
}
