use genrec::management::SavedTrackStore;
use genrec::types::TrackRecord;
use tempfile::TempDir;

// Helper function to create a fully populated test record
fn create_test_record(name: &str) -> TrackRecord {
    TrackRecord {
        name: name.to_string(),
        artists: "Artist A, Artist B".to_string(),
        album: Some(format!("{} - The Album", name)),
        image: Some("https://images.example/cover.jpg".to_string()),
        url: Some("https://open.spotify.com/track/abc".to_string()),
    }
}

#[tokio::test]
async fn test_open_without_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = SavedTrackStore::open(dir.path().join("saved-tracks.json"))
        .await
        .unwrap();

    assert!(store.list_all().await.is_empty());
}

#[tokio::test]
async fn test_insert_and_list() {
    let dir = TempDir::new().unwrap();
    let store = SavedTrackStore::open(dir.path().join("saved-tracks.json"))
        .await
        .unwrap();

    let id = store.insert(create_test_record("Dreams")).await.unwrap();

    // Insert hands back the generated id
    assert_eq!(id.len(), 24);

    let saved = store.list_all().await;
    assert_eq!(saved.len(), 1);

    // All record fields survive the round trip
    assert_eq!(saved[0].id, id);
    assert_eq!(saved[0].name, "Dreams");
    assert_eq!(saved[0].artists, "Artist A, Artist B");
    assert_eq!(saved[0].album.as_deref(), Some("Dreams - The Album"));
    assert_eq!(
        saved[0].image.as_deref(),
        Some("https://images.example/cover.jpg")
    );
    assert_eq!(
        saved[0].url.as_deref(),
        Some("https://open.spotify.com/track/abc")
    );
}

#[tokio::test]
async fn test_duplicate_saves_get_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let store = SavedTrackStore::open(dir.path().join("saved-tracks.json"))
        .await
        .unwrap();

    let first = store.insert(create_test_record("Dreams")).await.unwrap();
    let second = store.insert(create_test_record("Dreams")).await.unwrap();

    // Saving the same track twice keeps both copies under their own ids
    assert_ne!(first, second);
    assert_eq!(store.list_all().await.len(), 2);
}

#[tokio::test]
async fn test_delete_removes_only_the_matching_record() {
    let dir = TempDir::new().unwrap();
    let store = SavedTrackStore::open(dir.path().join("saved-tracks.json"))
        .await
        .unwrap();

    let first = store.insert(create_test_record("Dreams")).await.unwrap();
    let second = store.insert(create_test_record("Islands")).await.unwrap();

    store.delete(&first).await.unwrap();

    let saved = store.list_all().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, second);
    assert_eq!(saved[0].name, "Islands");
}

#[tokio::test]
async fn test_delete_unknown_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let store = SavedTrackStore::open(dir.path().join("saved-tracks.json"))
        .await
        .unwrap();

    store.insert(create_test_record("Dreams")).await.unwrap();

    // Deleting an id that was never handed out succeeds and changes nothing
    store.delete("no-such-id").await.unwrap();
    assert_eq!(store.list_all().await.len(), 1);
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved-tracks.json");

    let first_id;
    {
        let store = SavedTrackStore::open(&path).await.unwrap();
        first_id = store.insert(create_test_record("Dreams")).await.unwrap();
        store.insert(create_test_record("Islands")).await.unwrap();
    }

    let reopened = SavedTrackStore::open(&path).await.unwrap();
    let saved = reopened.list_all().await;

    // Insertion order and ids are stable across restarts
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].id, first_id);
    assert_eq!(saved[0].name, "Dreams");
    assert_eq!(saved[1].name, "Islands");
}

#[tokio::test]
async fn test_absent_optional_fields_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved-tracks.json");

    let record = TrackRecord {
        name: "Untitled Demo".to_string(),
        artists: "".to_string(),
        album: None,
        image: None,
        url: None,
    };

    {
        let store = SavedTrackStore::open(&path).await.unwrap();
        store.insert(record).await.unwrap();
    }

    let reopened = SavedTrackStore::open(&path).await.unwrap();
    let saved = reopened.list_all().await;

    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Untitled Demo");
    assert_eq!(saved[0].album, None);
    assert_eq!(saved[0].image, None);
    assert_eq!(saved[0].url, None);
}
