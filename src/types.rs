use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// A song as the catalog describes it.
///
/// Only the id is required. Everything else the API sent is kept verbatim so
/// the gateway hands records back exactly as it received them. Field names
/// differ between endpoints, so the accessors try the known spellings in turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SongRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn title(&self) -> &str {
        ["title", "name", "song"]
            .iter()
            .find_map(|key| self.text(key))
            .unwrap_or("Unknown")
    }

    pub fn artists(&self) -> &str {
        ["primary_artists", "primaryArtists", "singers"]
            .iter()
            .find_map(|key| self.text(key))
            .or_else(|| {
                self.fields
                    .get("more_info")
                    .and_then(|info| info.get("singers"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or("Unknown")
    }

    pub fn encrypted_media_url(&self) -> Option<&str> {
        self.text("encrypted_media_url")
    }

    pub fn media_preview_url(&self) -> Option<&str> {
        self.text("media_preview_url")
    }

    /// `Title - Artists`, used both for display and as the download name.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.title(), self.artists())
    }
}

/// Body of `/remove_favorite`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongRef {
    pub id: String,
}

/// `autocomplete.get` envelope; songs live under `songs.data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub songs: AutocompleteSongs,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteSongs {
    #[serde(default)]
    pub data: Vec<SongRecord>,
}

/// `webapi.get` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebapiSongResponse {
    #[serde(default)]
    pub songs: Vec<SongRecord>,
}

/// `song.generateAuthToken` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthTokenResponse {
    #[serde(default)]
    pub auth_url: Option<String>,
}

/// Target quality for media URLs, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitrate {
    Kbps320,
    Kbps160,
    Kbps96,
}

impl Bitrate {
    /// Probe order used whenever no authorized URL is available.
    pub const LADDER: [Bitrate; 3] = [Bitrate::Kbps320, Bitrate::Kbps160, Bitrate::Kbps96];

    pub fn kbps(self) -> u32 {
        match self {
            Bitrate::Kbps320 => 320,
            Bitrate::Kbps160 => 160,
            Bitrate::Kbps96 => 96,
        }
    }
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kbps())
    }
}

#[derive(Tabled)]
pub struct SongTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub title: String,
    pub artists: String,
    pub id: String,
}

impl SongTableRow {
    pub fn from_record(index: usize, song: &SongRecord) -> Self {
        Self {
            index,
            title: song.title().to_string(),
            artists: song.artists().to_string(),
            id: song.id.clone(),
        }
    }
}
