//! Configuration management for the genre recommendation web app.
//!
//! This module handles loading and validating configuration values from
//! environment variables and an optional `.env` file. Configuration is read
//! once at startup into a [`Config`] value that is shared with the request
//! handlers, so a missing credential stops the process before the server
//! binds instead of failing on the first request.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

/// Default endpoint for the client-credentials token exchange.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default base URL for the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default bind address for the web frontend.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

/// Runtime configuration, loaded once at startup.
///
/// The two credential fields have no defaults and must be present in the
/// environment. The endpoint URLs default to the public Spotify endpoints
/// and are only overridden to point the client somewhere else, e.g. at a
/// local stub while testing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client ID from the Spotify developer dashboard (`SPOTIFY_CLIENT_ID`).
    pub client_id: String,
    /// Client secret from the Spotify developer dashboard (`SPOTIFY_CLIENT_SECRET`).
    pub client_secret: String,
    /// Token exchange endpoint (`SPOTIFY_API_TOKEN_URL`).
    pub token_url: String,
    /// Web API base URL (`SPOTIFY_API_URL`).
    pub api_url: String,
    /// Bind address for the web frontend (`SERVER_ADDRESS`).
    pub server_addr: String,
    /// Directory holding the saved-track store (`GENREC_DATA_DIR`).
    pub data_dir: PathBuf,
}

impl Config {
    /// Builds a [`Config`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `SPOTIFY_CLIENT_ID` or
    /// `SPOTIFY_CLIENT_SECRET` is unset or blank. Everything else falls
    /// back to a default.
    ///
    /// # Example
    ///
    /// ```
    /// use genrec::config::Config;
    ///
    /// let config = Config::from_env().unwrap_or_else(|e| {
    ///     eprintln!("Configuration error: {}", e);
    ///     std::process::exit(1);
    /// });
    /// ```
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            client_id: require("SPOTIFY_CLIENT_ID", env::var("SPOTIFY_CLIENT_ID").ok())?,
            client_secret: require(
                "SPOTIFY_CLIENT_SECRET",
                env::var("SPOTIFY_CLIENT_SECRET").ok(),
            )?,
            token_url: or_default(env::var("SPOTIFY_API_TOKEN_URL").ok(), DEFAULT_TOKEN_URL),
            api_url: or_default(env::var("SPOTIFY_API_URL").ok(), DEFAULT_API_URL),
            server_addr: or_default(env::var("SERVER_ADDRESS").ok(), DEFAULT_SERVER_ADDR),
            data_dir: data_dir(env::var("GENREC_DATA_DIR").ok()),
        })
    }
}

/// Validates that a required variable is present and non-blank.
fn require(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{name} must be set"))),
    }
}

/// Returns the variable value, or the default when unset or blank.
fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Resolves the data directory, preferring the override and falling back
/// to `genrec/` under the platform-specific local data directory.
fn data_dir(value: Option<String>) -> PathBuf {
    match value {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("genrec");
            path
        }
    }
}
