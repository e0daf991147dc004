mod cli;

use davshelf::server::{self, AppContext};
use davshelf_core::Config;
use davshelf_parser::guess_title;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env before reading RUST_LOG so it can set the filter too
    let dotenv_result = dotenvy::dotenv();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "davshelf=trace,davshelf_core=debug,tower_http=debug".to_string()
        } else {
            "davshelf=info,davshelf_core=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenv_result {
        if !e.not_found() {
            tracing::warn!("Failed to load .env file: {}", e);
        }
    }

    match cli.command {
        Commands::Start { host, port } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            for warning in config.validate() {
                tracing::warn!("Config warning: {warning}");
            }

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(server::start_server(config))
        }
        Commands::List { player, json } => {
            let config = load_config(cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(list(config, player.as_deref(), json))
        }
        Commands::GuessTitle { filenames } => {
            for filename in filenames {
                println!("{}", guess_title(&filename));
            }
            Ok(())
        }
        Commands::Validate => validate_config(cli.config.as_deref()),
        Commands::Version => {
            println!("davshelf {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    config.apply_process_env();
    Ok(config)
}

async fn list(config: Config, player: Option<&str>, json: bool) -> Result<()> {
    let ctx = AppContext::new(config);
    let player = ctx.resolve_player(player);
    let items = ctx.catalog.items(player).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No media files found.");
        return Ok(());
    }

    for item in &items {
        println!("{}", item.title);
        println!("  File: {}", item.filename);
        if !item.description.is_empty() {
            println!("  {}", item.description);
        }
        if let Some(ref poster) = item.poster_url {
            println!("  Poster: {}", poster);
        }
        println!("  Play ({}): {}", player.id, item.play_link);
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    match path {
        Some(p) => println!("Validating config: {:?}", p),
        None => println!("No config file specified, using defaults and environment"),
    }

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("✓ Configuration is valid");
    } else {
        for warning in &warnings {
            println!("⚠ {}", warning);
        }
    }

    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  Default player: {}", config.server.default_player);
    match config.webdav.endpoint() {
        Some(url) if config.webdav.is_live() => println!("  WebDAV: {} (credentials set)", url),
        Some(url) => println!("  WebDAV: {} (incomplete, using fixture)", url),
        None => println!(
            "  WebDAV: not configured, fixture {}",
            config.webdav.fixture_path.display()
        ),
    }
    println!(
        "  TMDB: {}",
        if config.tmdb.api_key().is_some() {
            "API key set"
        } else {
            "disabled (no API key)"
        }
    );

    Ok(())
}
