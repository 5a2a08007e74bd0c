//! CLI entry point - the composition root.
//!
//! Wires environment loading, logging, and the parsed arguments
//! together, then dispatches to the fetch handler. Errors map to
//! sysexits-style exit codes via `CliError::exit_code`.

use clap::Parser;

use freshio_cli::{Cli, handlers};

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match handlers::fetch::FetchArgs::from_cli(cli) {
        Ok(args) => handlers::fetch::execute(args).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
