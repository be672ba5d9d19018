//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! genre recommendation frontend. It covers app-level authentication and
//! catalog search, handling all HTTP communication, wire formats, and
//! error mapping in one place so higher layers only deal with typed
//! results.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (HTTP handlers, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 Client Credentials)
//!     └── Catalog Search (Genre-filtered track search)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **App-Level Tokens**: No user authorization, the app authenticates as itself
//! - **Stateless Exchange**: A fresh token per search, nothing cached or refreshed
//! - **Basic Authorization**: Credentials travel base64-encoded in the request header
//!
//! ### Catalog Search Module
//!
//! [`search`] - Handles genre-filtered track search:
//! - **Field Filters**: Queries use the `genre:"<name>"` search filter
//! - **Fixed Pool Size**: Always requests the API maximum of 50 tracks
//! - **Record Extraction**: Flattens raw catalog items into display records
//!
//! ## API Coverage
//!
//! The module covers the following Spotify Web API endpoints:
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /search` - Track search with genre filtering
//!
//! ## Error Types
//!
//! All functions return the crate-wide [`Result`](crate::error::Result):
//! - [`Error::Auth`](crate::error::Error::Auth) - Rejected or unusable token exchange
//! - [`Error::Catalog`](crate::error::Error::Catalog) - Rejected search request
//! - [`Error::Http`](crate::error::Error::Http) - Transport failures and timeouts
//!
//! ## Configuration Integration
//!
//! Endpoint URLs and credentials come from the application
//! [`Config`](crate::config::Config), so tests can point both submodules
//! at a local stub server instead of the public API.

pub mod auth;
pub mod search;
