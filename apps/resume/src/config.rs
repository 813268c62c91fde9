use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::storage::DEFAULT_QUOTA_BYTES;

/// Runtime configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub storage_quota_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            storage_dir: lookup("RESUME_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".resume-builder")),
            storage_quota_bytes: match lookup("RESUME_STORAGE_QUOTA_BYTES") {
                Some(raw) => raw.parse::<usize>().with_context(|| {
                    format!("RESUME_STORAGE_QUOTA_BYTES must be a byte count, got '{raw}'")
                })?,
                None => DEFAULT_QUOTA_BYTES,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
