use anyhow::{Context, Result};
use chat_markup_config::Config;
use chat_markup_engine::{ParseOptions, parse};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process;

mod cli;
mod render;

use cli::Cli;

/// Merges config file settings and command-line overrides into parse options.
fn parse_options(cli: &Cli, config: Option<&Config>) -> Result<ParseOptions> {
    let mut options = ParseOptions::new();

    if let Some(config) = config {
        if let Some(names) = config.emoji_whitelist()? {
            log::debug!("{} emoji names from config", names.len());
            options = options.with_emoji_names(names);
        }
        options.max_nesting = config.max_nesting;
    }

    if !cli.emoji.is_empty() {
        options = options.with_emoji_names(cli.emoji.iter().cloned());
    }
    if cli.known_emoji {
        options = options.with_emoji_names(
            emojis::iter().flat_map(|emoji| emoji.shortcodes().map(str::to_string)),
        );
    }
    if let Some(max) = cli.max_nesting {
        options.max_nesting = Some(max);
    }

    Ok(options)
}

/// The `--config` file, which must exist, or else the optional default one.
fn load_config(cli: &Cli) -> Result<Option<Config>> {
    let Some(config_path) = &cli.config else {
        log::debug!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?);
    };

    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_from_path(config_path)?
        .with_context(|| format!("config file not found: {}", config_path.display()))?;
    Ok(Some(config))
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let options = parse_options(&cli, config.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.message.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read message from stdin")?;
            let nodes = parse(&line, &options);
            writeln!(out, "{}", render::render(&nodes, cli.format)?)?;
        }
    } else {
        let message = cli.message.join(" ");
        let nodes = parse(&message, &options);
        writeln!(out, "{}", render::render(&nodes, cli.format)?)?;
    }

    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
