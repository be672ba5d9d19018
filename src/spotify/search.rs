use std::time::Duration;

use reqwest::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    types::{RawTrack, SearchResponse, TrackRecord},
    utils,
};

/// Number of tracks requested from the catalog per search. The sampling
/// step downstream picks from this pool, so it stays at the API maximum
/// regardless of how many tracks the user asked for.
pub const SEARCH_POOL_SIZE: u32 = 50;

/// Market the search is scoped to.
pub const SEARCH_MARKET: &str = "KR";

/// Maximum time to wait for the search endpoint before giving up.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the candidate track pool for a genre from the Spotify Web API.
///
/// Issues a track search filtered with the `genre:"<genre>"` field filter
/// against the configured API base URL. The query is sent as proper query
/// parameters so genres containing spaces or quotes arrive intact.
///
/// # Arguments
///
/// * `config` - Runtime configuration carrying the API base URL
/// * `genre` - Genre name exactly as chosen by the user
/// * `token` - Bearer token from the client-credentials exchange
///
/// # Returns
///
/// Returns the raw track items in the order the catalog returned them.
/// A genre with no matches yields an empty vector, not an error.
///
/// # Errors
///
/// - [`Error::Catalog`] if the endpoint answers with a non-success status
/// - [`Error::Http`] for transport failures, including the 10 second timeout
pub async fn search_genre_pool(
    config: &Config,
    genre: &str,
    token: &str,
) -> Result<Vec<RawTrack>> {
    let api_url = format!("{uri}/search", uri = &config.api_url);
    let genre_filter = format!("genre:\"{genre}\"");
    let pool_size = SEARCH_POOL_SIZE.to_string();

    let client = Client::new();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("q", genre_filter.as_str()),
            ("market", SEARCH_MARKET),
            ("type", "track"),
            ("limit", pool_size.as_str()),
        ])
        .timeout(SEARCH_TIMEOUT)
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::Catalog(format!(
            "search endpoint returned status {}",
            res.status()
        )));
    }

    let res = res.json::<SearchResponse>().await?;

    Ok(res.tracks.items)
}

/// Flattens a raw catalog track into the record the frontend renders.
///
/// Artist names are joined with `", "` into a single display string. Album
/// name, artwork URL, and the Spotify link are optional; a raw track missing
/// any of them simply yields `None` for that field.
pub fn extract_track(raw: &RawTrack) -> TrackRecord {
    let artists = raw
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(", ");

    let album = raw
        .album
        .as_ref()
        .and_then(|album| utils::none_if_empty(album.name.clone()));

    let image = raw
        .album
        .as_ref()
        .and_then(|album| album.images.first())
        .and_then(|image| utils::none_if_empty(image.url.clone()));

    let url = raw
        .external_urls
        .spotify
        .clone()
        .and_then(utils::none_if_empty);

    TrackRecord {
        name: raw.name.clone(),
        artists,
        album,
        image,
        url,
    }
}
