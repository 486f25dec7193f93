//! recipebox CLI Application
//!
//! Command-line front end for the recipebox recipe manager.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use recipebox_core::CookbookBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        close_delay_ms,
        timeout_ms,
        command,
    } = Args::parse();

    let cookbook = CookbookBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize cookbook")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(
        cookbook,
        renderer,
        Cli::submission_config(close_delay_ms, timeout_ms),
    );

    info!("recipebox started");

    match command {
        Some(Recipe { command }) => cli.handle_recipe_command(command).await,
        Some(Special { command }) => cli.handle_special_command(command).await,
        Some(Format(args)) => cli.format_amount(args),
        None => cli.list_recipes().await,
    }
}
