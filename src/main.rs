use std::process::ExitCode;

use regionkit::RegionError;

fn main() -> ExitCode {
    match regionkit::run() {
        Ok(()) => ExitCode::SUCCESS,
        // The report has already been printed to stdout.
        Err(RegionError::ValidationFailed { .. }) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
