use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use babynames::cli::{Cli, Commands};
use babynames::config::{Config, Credentials};
use babynames::controller::Controller;
use babynames::generation::{GeminiBackend, NameGenerationClient};
use babynames::logging::{init_file_tracing, init_stderr_tracing};
use babynames::model::{NameRecord, RequestParameters};
use babynames::share::Sharer;
use babynames::storage::{FavoritesStore, FileStore, KeyValueStore, MemoryStore};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        init_stderr_tracing();
    } else {
        init_file_tracing();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let favorites = open_favorites(&config, cli.ephemeral);

    // Listing favorites works without a credential.
    if let Some(Commands::Favorites { json }) = &cli.command {
        print_records(&favorites.load(), *json)?;
        return Ok(ExitCode::SUCCESS);
    }

    let api_key = Credentials::resolve(&config).context("Gemini API key is not configured")?;
    let backend = GeminiBackend::new(&config.gemini, api_key)
        .context("Failed to build Gemini client")?;
    let generator = Arc::new(NameGenerationClient::new(backend));

    let mut controller = Controller::new(
        generator,
        favorites,
        Sharer::from_config(&config.share),
        Duration::from_secs(config.share.notification_seconds),
    );
    controller.load_favorites();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Some(Commands::Generate {
            culture,
            letter,
            json,
        }) => {
            let params = match RequestParameters::new(&culture, &letter) {
                Ok(params) => params,
                Err(err) => {
                    eprintln!("{err}");
                    return Ok(ExitCode::FAILURE);
                }
            };

            runtime.block_on(controller.generate(params));

            let state = controller.state();
            if let Some(message) = &state.error {
                eprintln!("{message}");
                return Ok(ExitCode::FAILURE);
            }
            print_records(&state.generated, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Favorites { .. }) => Ok(ExitCode::SUCCESS),
        None => {
            babynames::ui::run(controller, &config.ui, runtime.handle().clone())
                .context("Terminal UI failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn open_favorites(config: &Config, ephemeral: bool) -> FavoritesStore {
    let store: Arc<dyn KeyValueStore> = if ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        let dir = config.storage.resolved_data_dir();
        tracing::debug!(dir = %dir.display(), "Using favorites directory");
        Arc::new(FileStore::new(dir))
    };
    FavoritesStore::new(store)
}

fn print_records(records: &[NameRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No names.");
        return Ok(());
    }
    for record in records {
        println!("{}: {}", record.name, record.meaning);
        println!("    image: {}", describe_image(&record.image_url));
    }
    Ok(())
}

/// Short description of an image URI; data URIs are far too long to print.
fn describe_image(uri: &str) -> String {
    match uri.split_once(',') {
        Some((meta, payload)) if meta.starts_with("data:") => {
            let mime = meta
                .trim_start_matches("data:")
                .trim_end_matches(";base64");
            format!("{mime}, {} base64 chars", payload.len())
        }
        _ => uri.to_string(),
    }
}
