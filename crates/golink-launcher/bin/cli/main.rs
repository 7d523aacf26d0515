mod cli;

use crate::cli::{Command, LogFormatArg, StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use golink_core::{AliasStore, NavigationAdapter, OpenMode};
use golink_launcher::{CommandNavigator, PrintNavigator, Session, SessionOptions};
use golink_storage::{FileStore, InMemoryStore, SeededStore};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        storage_backend = %config.storage,
        store_path = %config.store_path.display(),
        opener = ?config.opener,
        "starting golink"
    );

    let options = SessionOptions::builder()
        .suggest_limit(config.suggest_limit)
        .build();

    match (config.storage, config.opener) {
        (StorageBackendArg::File, Some(program)) => {
            let store = SeededStore::new(FileStore::new(&config.store_path));
            run(store, opener(program), options, config.command).await
        }
        (StorageBackendArg::File, None) => {
            let store = SeededStore::new(FileStore::new(&config.store_path));
            run(store, PrintNavigator, options, config.command).await
        }
        (StorageBackendArg::InMemory, Some(program)) => {
            let store = SeededStore::new(InMemoryStore::new());
            run(store, opener(program), options, config.command).await
        }
        (StorageBackendArg::InMemory, None) => {
            let store = SeededStore::new(InMemoryStore::new());
            run(store, PrintNavigator, options, config.command).await
        }
    }
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormatArg::Pretty => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}

fn opener(program: String) -> CommandNavigator {
    CommandNavigator::builder().program(program).build()
}

async fn run<S: AliasStore, N: NavigationAdapter>(
    store: S,
    navigator: N,
    options: SessionOptions,
    command: Command,
) -> anyhow::Result<()> {
    let mut session = Session::start(store, navigator, options).await;

    match command {
        Command::Suggest { query, limit } => {
            let suggestions = match limit {
                Some(limit) => golink_core::suggest(session.mapping(), &query, limit),
                None => session.suggest(&query),
            };
            for suggestion in suggestions {
                println!("{}", suggestion.description());
            }
        }
        Command::Go { alias, mode } => {
            session
                .go(&alias, OpenMode::from_disposition(&mode))
                .await?;
        }
        Command::Resolve { alias } => {
            println!("{}", session.lookup(&alias)?);
        }
        Command::Add { alias, destination } => {
            let (alias, destination) = session.add(&alias, &destination).await?;
            println!("{alias}:{destination}");
        }
        Command::Remove { alias } => {
            if !session.remove(&alias).await? {
                anyhow::bail!("go link \"{}\" does not exist", alias.trim());
            }
        }
        Command::List => {
            let text = session.export_text();
            if !text.is_empty() {
                println!("{text}");
            }
        }
        Command::Import { file } => {
            let text = match file {
                Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?,
                _ => {
                    let mut text = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut text)
                        .await
                        .context("failed to read go links from stdin")?;
                    text
                }
            };
            let count = session.replace_from_text(&text).await?;
            println!("saved {count} go link(s)");
        }
        Command::Hint => {
            if let Some(hint) = session.hint() {
                println!("{hint}");
            }
        }
    }

    Ok(())
}
