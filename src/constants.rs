/// Application-wide constants
/// All magic numbers and constant values should be defined here

/// Fallback secret key used when SECRET_KEY is unset.
/// Only suitable for local development.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Maximum request body size in bytes (16 MB)
pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Directory where uploaded images are stored, relative to the working directory
pub const UPLOAD_FOLDER: &str = "static/uploads";

/// Image extensions accepted for upload (lowercase, no leading dot)
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Number of diary entries shown per page
pub const ENTRIES_PER_PAGE: usize = 12;
