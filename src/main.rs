use anyhow::anyhow;
use pdfimg::output::OutputFormatter;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() {
    if let Err(err) = init_tracing() {
        eprintln!("failed to initialise logging: {err:#}");
    }

    if let Err(err) = pdfimg::run() {
        tracing::debug!(error = ?err, "operation failed");
        OutputFormatter::default().error(&format!("Error: {err}"));
    }
}
