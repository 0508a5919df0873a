//! `pdd config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::{mask_secret, Config};
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    if ctx.output_format == OutputFormat::Json {
        let masked = Config {
            token: config.token.as_deref().map(mask_secret),
            oauth_token: config.oauth_token.as_deref().map(mask_secret),
            ..config
        };
        println!("{}", serde_json::to_string_pretty(&masked)?);
        return Ok(());
    }

    let not_set = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!(
        "  {} {}",
        "token:".bold(),
        config.token.as_deref().map_or_else(not_set, mask_secret)
    );
    println!(
        "  {} {}",
        "oauth_token:".bold(),
        config.oauth_token.as_deref().map_or_else(not_set, mask_secret)
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or_default()
    );
    println!(
        "  {} {}",
        "base_url:".bold(),
        config.base_url.unwrap_or_else(|| yapdd::DEFAULT_BASE_URL.to_string())
    );

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "replacing unreadable config file");
        Config::default()
    });
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
