use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the site runs with no configuration at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// JSON content file. The embedded content is used when unset.
    pub content_path: Option<PathBuf>,
    /// Holds `profile.jpg` and project thumbnails; served under `/assets`.
    pub assets_dir: PathBuf,
    /// Directory the resume PDF is read from.
    pub resume_dir: PathBuf,
    pub rust_log: String,
}

pub const PROFILE_IMAGE: &str = "profile.jpg";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            content_path: optional_env("CONTENT_PATH").map(PathBuf::from),
            assets_dir: optional_env("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets")),
            resume_dir: optional_env("RESUME_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn resume_path(&self, filename: &str) -> PathBuf {
        self.resume_dir.join(filename)
    }

    pub fn profile_image_path(&self) -> PathBuf {
        self.assets_dir.join(PROFILE_IMAGE)
    }

    pub fn asset_path(&self, relative: &str) -> PathBuf {
        self.assets_dir.join(Path::new(relative))
    }
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
