//! One-time page payload describing the signed-in user and their saved song.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("bootstrap payload not found in page")]
    Missing,
    #[error("bootstrap payload is not valid JSON: {0}")]
    Malformed(String),
    #[error("bootstrap payload marks a song as saved but has no {0}")]
    IncompleteSong(&'static str),
}

/// Song picked by the backend from the user's saved artists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSong {
    pub name: String,
    pub artist: String,
    pub image_url: Option<String>,
    /// Not every track has a preview clip.
    pub preview_url: Option<String>,
    pub genius_url: Option<String>,
}

/// Immutable snapshot built once at mount.
///
/// `saved_song` is `Some` exactly when the payload's `has_artists_saved` was
/// true, so song fields can't be read when nothing is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSnapshot {
    pub username: String,
    pub saved_song: Option<SavedSong>,
}

/// Payload as the backend renders it. Song fields are `null` when nothing is
/// saved.
#[derive(Deserialize)]
struct RawPayload {
    username: String,
    has_artists_saved: bool,
    #[serde(default)]
    song_name: Option<String>,
    #[serde(default)]
    song_artist: Option<String>,
    #[serde(default)]
    song_image_url: Option<String>,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    genius_url: Option<String>,
}

impl BootstrapSnapshot {
    pub fn from_json(payload: &str) -> Result<Self, BootstrapError> {
        let raw: RawPayload =
            serde_json::from_str(payload).map_err(|e| BootstrapError::Malformed(e.to_string()))?;

        let saved_song = if raw.has_artists_saved {
            Some(SavedSong {
                name: raw
                    .song_name
                    .ok_or(BootstrapError::IncompleteSong("song_name"))?,
                artist: raw
                    .song_artist
                    .ok_or(BootstrapError::IncompleteSong("song_artist"))?,
                image_url: raw.song_image_url,
                preview_url: raw.preview_url,
                genius_url: raw.genius_url,
            })
        } else {
            None
        };

        Ok(Self {
            username: raw.username,
            saved_song,
        })
    }

    pub fn has_artists_saved(&self) -> bool {
        self.saved_song.is_some()
    }
}
