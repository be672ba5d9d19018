use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<RawTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    #[serde(default)]
    pub album: Option<RawAlbum>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArtist {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAlbum {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<RawImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    pub artists: String,
    pub album: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub album: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendForm {
    pub genre: String,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveForm {
    pub name: String,
    pub artists: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteForm {
    pub id: String,
}
