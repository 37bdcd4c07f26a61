//! Aula - static site generator for the Flutter Avanzado course site.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod core;
mod embed;
mod generator;
mod homepage;
mod logger;
mod nav;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::{SiteConfig, init_config};
use generator::{build_feed, build_sitemap};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    crate::core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Build { .. } => build_all(&config),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Validate { .. } => cli::validate::validate_site(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}

/// Build the site, then generate feed and sitemap in parallel.
fn build_all(config: &SiteConfig) -> Result<()> {
    let built = build_site(config)?;

    let (feed_result, sitemap_result) = rayon::join(
        || build_feed(config, &built.pages),
        || build_sitemap(config, &built.pages),
    );
    feed_result?;
    sitemap_result?;
    Ok(())
}
