use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use swift_format_guard::cli::Cli;
use swift_format_guard::commands::run_lint;

/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    std::process::exit(run_lint(&cli));
}
