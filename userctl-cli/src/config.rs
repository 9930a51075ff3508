//! Environment loading
//!
//! A `.env` file in the current directory is read before argument parsing so
//! its values can feed clap's `env` fallbacks. Variables already present in
//! the process environment win over the file.

use std::path::PathBuf;

/// Outcome of looking for `./.env`
#[derive(Debug)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    Missing,
    Unreadable(dotenvy::Error),
}

/// Load `./.env` if present. Never fails; problems are reported later.
pub fn load_dotenv() -> DotenvStatus {
    match dotenvy::dotenv() {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(e) if e.not_found() => DotenvStatus::Missing,
        Err(e) => DotenvStatus::Unreadable(e),
    }
}

/// Log where configuration came from. Call after tracing is initialised.
pub fn report_dotenv(status: &DotenvStatus) {
    match status {
        DotenvStatus::Loaded(path) => {
            tracing::info!("Loaded configuration from {}", path.display())
        }
        DotenvStatus::Missing => {
            tracing::debug!("No .env file found, using environment variables only")
        }
        DotenvStatus::Unreadable(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}
