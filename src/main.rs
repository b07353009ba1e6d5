use std::io;
use std::process;

use clap::Parser;
use plot_scaling::cli::{execute_command, output, Cli, CliError};
use plot_scaling::config::Settings;
use plot_scaling::infrastructure::ServiceContainer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    // --help, --version and unknown arguments exit here
    let cli = Cli::parse();

    setup_logging();

    if let Err(e) = run(&cli) {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = Settings::load()?;
    tracing::debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    let stdout = io::stdout();
    let outcome = execute_command(cli, &container, &mut stdout.lock())?;
    tracing::info!("done: {:?}", outcome);
    Ok(())
}

/// Log to stderr so stdout only carries the report. Level comes from `RUST_LOG`.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!("logging initialized");
}
