mod builder;
mod cli;
mod config;
mod errors;
mod models;
mod persistence;
mod storage;
mod store;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cmd;
use crate::config::Config;
use crate::persistence::ResumePersistence;
use crate::storage::FileStorage;

fn main() -> Result<ExitCode> {
    let cmd = Cmd::parse();

    let config = Config::from_env()?;

    // Logs go to stderr so `show --json` output stays pipeable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let storage = FileStorage::with_quota(&config.storage_dir, config.storage_quota_bytes);
    info!("Using resume storage at {}", storage.root().display());

    let mut persistence = ResumePersistence::new(storage);
    Ok(if cli::run(cmd, &mut persistence)? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
