//! Inkwell CLI binary.
//!
//! This binary drives a manga project file through each generation stage:
//! - Create a project from a story script
//! - Extract assets, render references, build the storyboard
//! - Render the cover and pages, then export the images

use clap::Parser;
use inkwell::{GeminiClient, InkwellConfig, InkwellResult, MangaStudio};
use tracing_subscriber::EnvFilter;

mod cli;

fn load_config(path: Option<&std::path::Path>) -> InkwellResult<InkwellConfig> {
    match path {
        Some(path) => InkwellConfig::from_file(path),
        None => InkwellConfig::load(),
    }
}

fn studio(config: &InkwellConfig) -> InkwellResult<MangaStudio<GeminiClient>> {
    MangaStudio::from_config(GeminiClient::new(&config.gemini)?, config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, InitOptions, handle_assets, handle_export, handle_init, handle_portraits,
        handle_render, handle_storyboard, handle_validate,
    };

    // Load .env before anything reads GEMINI_API_KEY
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Init {
            story,
            title,
            out,
            color_mode,
            medium,
            pages,
            style_ref,
            volume,
            artist,
            force,
        } => {
            handle_init(InitOptions {
                story,
                title,
                out,
                color_mode: color_mode.into(),
                medium: medium.into(),
                pages,
                style_ref,
                volume,
                artist,
                force,
            })?;
        }

        Commands::Assets { project, policy } => {
            handle_assets(&studio(&config)?, &project, policy.map(Into::into)).await?;
        }

        Commands::Portraits { project, force } => {
            handle_portraits(&studio(&config)?, &project, force).await?;
        }

        Commands::Storyboard { project, policy } => {
            handle_storyboard(&studio(&config)?, &project, policy.map(Into::into)).await?;
        }

        Commands::Render {
            project,
            concurrency,
            skip_cover,
        } => {
            handle_render(&studio(&config)?, &project, concurrency, skip_cover).await?;
        }

        Commands::Export { project, out } => {
            handle_export(&project, &out)?;
        }

        Commands::Validate { project } => {
            handle_validate(&project)?;
        }
    }

    Ok(())
}
