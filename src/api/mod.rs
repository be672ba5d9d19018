//! # API Module
//!
//! This module provides the HTTP handlers for the genre recommendation
//! web frontend. It implements the page handlers for searching the
//! catalog, keeping a list of saved tracks, and health monitoring.
//!
//! ## Overview
//!
//! The API module is the web interface layer of the application. Every
//! page is plain server-rendered HTML; form posts answer either with a
//! results page or with a redirect carrying a flash message in the query
//! string, so the frontend works without any client-side scripting.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`index`] - Landing page with the genre picker and flash messages
//! - [`recommend`] - Accepts the picker form and renders sampled tracks
//!
//! ### Saved Tracks
//!
//! - [`save_track`] - Persists one recommended track, then redirects
//! - [`list_saved`] - Lists everything saved so far
//! - [`delete_saved`] - Removes one saved track, then redirects
//!
//! ### Monitoring
//!
//! - [`health`] - Health check returning application status and version
//!   information for monitoring systems
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is implemented as an async function that plugs into Axum's
//! routing system; shared state (configuration and the saved-track store)
//! arrives through `Extension` layers.
//!
//! ## Failure Behavior
//!
//! Handlers never surface wire-level errors to the browser. Upstream
//! failures are logged to the console and turned into a redirect with a
//! short flash message; only the fatal startup path terminates the
//! process.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use genrec::api::{index, recommend};
//!
//! let app = Router::new()
//!     .route("/", get(index))
//!     .route("/recommend", post(recommend));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::management`] - Recommendation pipeline and saved-track store
//! - [`crate::spotify`] - Spotify API integration

mod health;
mod index;
mod recommend;
mod saved;
pub mod views;

pub use health::health;
pub use index::index;
pub use recommend::recommend;
pub use saved::delete_saved;
pub use saved::list_saved;
pub use saved::save_track;
