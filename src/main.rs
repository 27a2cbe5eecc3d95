use std::io;

use clap::Parser;
use library_catalog::{Cli, Config, Library, Menu, Result, TransactionLogger};
use tracing_subscriber::EnvFilter;

/// Initialize tracing from the configured level; `RUST_LOG` wins when set.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn initialize_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    initialize_tracing(&config);

    if !config.color {
        colored::control::set_override(false);
    }

    let mut library = Library::with_history_limit(config.history_limit);
    library.register_observer(Box::new(TransactionLogger));
    tracing::debug!(?config, "starting library catalog");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut library, stdin.lock(), stdout.lock(), &config).run()
}
