//! Error types for the session, storage and catalog loading layers.
//!
//! Catalog operations themselves (filter, sort, add, delete) have no error
//! path and never return one of these.

use thiserror::Error;

/// Credential check failure. Displays as the message shown on the login form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// A persisted session token that could not be turned back into an identity.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),

    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not a valid identity: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value slot failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failure to read a song list from disk.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid song list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected add-song form input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SongFormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Year must be a whole number")]
    InvalidYear,
}

/// Role check failures for catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Admin role required")]
    Forbidden,
}
