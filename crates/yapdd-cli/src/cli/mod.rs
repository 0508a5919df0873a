//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // `pdd config` must keep working on a broken file so it can be repaired
    let config = match cli.command {
        Commands::Config(_) => Config::load().unwrap_or_default(),
        _ => Config::load()?,
    };

    // Flags and env vars win over the config file
    let ctx = commands::Context {
        token: cli.token.or_else(|| config.token.clone()),
        oauth_token: cli.oauth_token.or_else(|| config.oauth_token.clone()),
        base_url: cli.base_url.or_else(|| config.base_url.clone()),
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::List { domain } => commands::records::list(ctx, &domain).await,
        Commands::Add(args) => commands::records::add(ctx, args).await,
        Commands::Edit(args) => commands::records::edit(ctx, args).await,
        Commands::Del { domain, record_id } => {
            commands::records::delete(ctx, &domain, record_id).await
        }
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
