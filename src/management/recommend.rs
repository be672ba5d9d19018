use crate::{config::Config, error::Result, spotify, types::TrackRecord, utils};

/// How many tracks a recommendation returns when the user leaves the
/// count field alone.
pub const DEFAULT_LIMIT: usize = 10;

/// Produces up to `limit` randomly sampled tracks for a genre.
///
/// Runs the full recommendation pipeline: a fresh client-credentials
/// token, one catalog search for the candidate pool, extraction into
/// display records, and a uniform random sample without replacement.
/// When the pool already fits within `limit` it is returned as-is, in
/// the order the catalog produced it.
///
/// A genre the catalog knows no tracks for yields `Ok` with an empty
/// vector; only authentication and search failures are errors.
pub async fn search_tracks_by_genre(
    config: &Config,
    genre: &str,
    limit: usize,
) -> Result<Vec<TrackRecord>> {
    let token = spotify::auth::request_token(config).await?;
    let pool = spotify::search::search_genre_pool(config, genre, &token).await?;

    let records: Vec<TrackRecord> = pool.iter().map(spotify::search::extract_track).collect();
    if records.is_empty() {
        return Ok(Vec::new());
    }

    Ok(utils::sample_up_to(records, limit))
}
