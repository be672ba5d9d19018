use std::{io::ErrorKind, path::PathBuf};

use tokio::sync::Mutex;

use crate::{
    error::Result,
    types::{SavedTrack, TrackRecord},
    utils,
};

/// Persistent collection of tracks the user chose to keep. One JSON file,
/// guarded by a mutex so concurrent handlers never interleave writes.
pub struct SavedTrackStore {
    path: PathBuf,
    records: Mutex<Vec<SavedTrack>>,
}

impl SavedTrackStore {
    /// Opens the store at `path`, loading any previously saved records.
    /// A missing file is an empty store; a present but unreadable file
    /// is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    /// Appends a record under a fresh id and returns the id. Duplicates
    /// are allowed; every insert stands on its own.
    pub async fn insert(&self, record: TrackRecord) -> Result<String> {
        let id = utils::generate_record_id();

        let mut records = self.records.lock().await;
        records.push(SavedTrack {
            id: id.clone(),
            name: record.name,
            artists: record.artists,
            album: record.album,
            image: record.image,
            url: record.url,
        });
        self.persist(&records).await?;

        Ok(id)
    }

    /// Returns all saved records in insertion order.
    pub async fn list_all(&self) -> Vec<SavedTrack> {
        self.records.lock().await.clone()
    }

    /// Removes the record with the given id. An unknown id leaves the
    /// store untouched and is not an error.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().await;

        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(()); // unknown id, nothing to do
        }

        self.persist(&records).await
    }

    async fn persist(&self, records: &[SavedTrack]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(records)?;
        async_fs::write(&self.path, json).await?;

        Ok(())
    }
}
