mod recommend;
mod store;

pub use recommend::DEFAULT_LIMIT;
pub use recommend::search_tracks_by_genre;
pub use store::SavedTrackStore;
