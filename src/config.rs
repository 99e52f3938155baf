use std::collections::HashSet;
use std::env;

use crate::constants::{
    ALLOWED_EXTENSIONS, DEV_SECRET_KEY, ENTRIES_PER_PAGE, MAX_CONTENT_LENGTH, UPLOAD_FOLDER,
};

/// Application settings, resolved once at startup and shared read-only.
///
/// Construct via [`Config::load`] at process start and pass references to
/// whatever needs settings; never mutate a shared instance. Per-request
/// overrides belong in a clone, not in the shared value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub secret_key: String,
    /// Unconditionally on; the app has no production profile yet.
    pub debug: bool,
    pub max_content_length: usize,
    pub upload_folder: String,
    pub allowed_extensions: HashSet<String>,
    pub entries_per_page: usize,
}

impl Config {
    /// Loads `.env` (if present) and resolves settings from the process
    /// environment. Infallible: a missing SECRET_KEY is the normal
    /// development case, not an error.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Resolves settings from the environment as-is, without reading any
    /// `.env` file.
    pub fn from_env() -> Self {
        let secret_key = match env::var("SECRET_KEY") {
            // An empty SECRET_KEY counts as unset.
            Ok(value) if !value.is_empty() => value,
            _ => {
                tracing::warn!("SECRET_KEY not set, using development fallback");
                DEV_SECRET_KEY.to_string()
            }
        };

        Self {
            secret_key,
            debug: true,
            max_content_length: MAX_CONTENT_LENGTH,
            upload_folder: UPLOAD_FOLDER.to_string(),
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            entries_per_page: ENTRIES_PER_PAGE,
        }
    }

    /// Whether a file extension (lowercase, without the dot) is accepted
    /// for upload. Callers lowercase user-supplied extensions first.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.contains(extension)
    }
}
