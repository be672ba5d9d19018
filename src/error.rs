//! Error types shared across the application.
//!
//! Fatal configuration problems terminate the process at startup; everything
//! else is surfaced to the browser as a flash message while the detailed
//! error goes to the console.

use thiserror::Error;

/// A convenient Result type alias using the application [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The client-credentials token exchange was rejected or returned
    /// an unusable body.
    #[error("token exchange failed: {0}")]
    Auth(String),

    /// The catalog search endpoint rejected the request.
    #[error("catalog search failed: {0}")]
    Catalog(String),

    /// Transport-level HTTP failure (connect, timeout, malformed body).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A short, presentable message for the web frontend. Wire details and
    /// upstream status codes stay out of the browser.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Auth(_) => {
                "Could not authenticate with the music catalog. Check the Spotify credentials and try again."
            }
            Error::Catalog(_) => "The catalog search failed. Please try again in a moment.",
            _ => "Something went wrong while fetching recommendations. Please try again.",
        }
    }
}
