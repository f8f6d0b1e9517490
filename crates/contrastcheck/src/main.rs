use std::io::Write;
use std::process::ExitCode;

use contrastcheck::report::{write_report, STATUS_COLORS};
use tracing::error;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Diagnostics go to stderr, leaving stdout to the report.
    let stderr_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contrastcheck=warn"));
    tracing_subscriber::registry()
        .with(stderr_log.with_filter(env_filter))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = write_report(&mut out, STATUS_COLORS)
        .and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
