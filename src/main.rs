mod cli;

use cutlist::{
    config,
    metadata::{FanOut, MovieService},
    server,
};
use cutlist_core::ReleaseYear;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

/// Load config, overlay CLI overrides, and build the TMDB-backed service.
///
/// Fails before any network activity when the API key is missing.
fn prepare(config_path: Option<&Path>) -> Result<(config::Config, MovieService)> {
    let config = config::load_config_or_default(config_path)?;
    let movies = MovieService::from_config(&config)
        .context("Cannot start without TMDB credentials")?;

    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    Ok((config, movies))
}

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let (mut config, movies) = prepare(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting cutlist server");
    server::start_server(config, movies).await
}

async fn fetch_movies(
    year: &str,
    page: u32,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let year: ReleaseYear = year.parse()?;
    let (_config, movies) = prepare(config_path)?;

    let result = movies
        .movies_by_year(year, Some(page))
        .await
        .with_context(|| format!("Failed to fetch movies for {year} (page {page})"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{:<40} {:<20} {:>5}  Editors", "Title", "Released", "Vote");
    for movie in &result {
        let editors = if movie.editors.is_empty() {
            "-".to_string()
        } else {
            movie.editors.join(", ")
        };
        println!(
            "{:<40} {:<20} {:>5.1}  {}",
            movie.title, movie.release_date, movie.vote_average, editors
        );
    }
    println!("\n{} movies", result.len());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "cutlist=debug,cutlist_core=debug,tower_http=debug".to_string()
        } else {
            "cutlist=info,cutlist_core=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Movies { year, page, json } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(fetch_movies(&year, page, json, cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("cutlist {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => println!("Validating config: {:?}", p),
        None => println!("No config file specified, checking default locations"),
    }

    let config = config::load_config_or_default(path)?;
    println!("✓ Configuration is valid");
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  TMDB base URL: {}", config.tmdb.base_url);
    println!(
        "  TMDB API key: {}",
        if config.api_key().is_ok() { "set" } else { "missing" }
    );
    match FanOut::from_limit(config.tmdb.max_concurrent_credits).limit() {
        Some(n) => println!("  Credits fan-out: at most {n} concurrent"),
        None => println!("  Credits fan-out: unbounded"),
    }
    match config.tmdb.request_timeout_secs {
        0 => println!("  Request timeout: none"),
        secs => println!("  Request timeout: {secs}s"),
    }

    let warnings = config.validate();
    for warning in &warnings {
        println!("  ! {warning}");
    }

    Ok(())
}
