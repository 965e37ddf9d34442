use clap::Parser;
use directories::ProjectDirs;
use miniwiki::config::WikiConfig;
use miniwiki::error::{Result, WikiError};
use miniwiki::store::fs::FileStore;
use miniwiki::web;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("miniwiki=info,tower_http=info")),
        )
        .init();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let config = WikiConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone()).with_file_ext(config.get_file_ext());

    info!(
        data_dir = %data_dir.display(),
        file_ext = config.get_file_ext(),
        "Starting wiki server"
    );

    let runtime = tokio::runtime::Runtime::new().map_err(WikiError::Io)?;
    runtime.block_on(web::serve(store, cli.bind))
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "miniwiki", "miniwiki")
        .ok_or_else(|| WikiError::Store("Could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}
