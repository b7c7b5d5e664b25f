//! Render-ready projections of the page state

use tunepick_common::{BootstrapSnapshot, StatusTone};

/// Shown in place of the song panel when the user has nothing saved.
pub const NO_SAVED_SONG_MESSAGE: &str =
    "Looks like you do not have anything saved! Use the form below!";

pub const LYRICS_LINK_TEXT: &str = "Click here to see lyrics!";

/// Cover art is rendered as a fixed square.
pub const COVER_SIZE_PX: u32 = 300;

/// What the lower half of the page shows.
#[derive(Clone, Debug, PartialEq)]
pub enum SongSection {
    Placeholder { message: &'static str },
    Song {
        heading: String,
        artist: String,
        image_url: Option<String>,
        preview_url: Option<String>,
        lyrics_url: Option<String>,
    },
}

impl SongSection {
    pub fn from_snapshot(snapshot: &BootstrapSnapshot) -> Self {
        match &snapshot.saved_song {
            Some(song) => SongSection::Song {
                heading: song.name.clone(),
                artist: song.artist.clone(),
                image_url: song.image_url.clone(),
                preview_url: song.preview_url.clone(),
                lyrics_url: song.genius_url.clone(),
            },
            None => SongSection::Placeholder {
                message: NO_SAVED_SONG_MESSAGE,
            },
        }
    }
}

/// Tailwind classes for the status line.
pub fn status_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Neutral => "text-gray-300",
        StatusTone::Rejected => "text-yellow-300",
        StatusTone::Error => "text-red-300",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunepick_common::SavedSong;

    #[test]
    fn test_placeholder_when_nothing_saved() {
        let snapshot = BootstrapSnapshot {
            username: "dana".into(),
            saved_song: None,
        };
        assert_eq!(
            SongSection::from_snapshot(&snapshot),
            SongSection::Placeholder {
                message: "Looks like you do not have anything saved! Use the form below!"
            }
        );
    }

    #[test]
    fn test_song_heading_uses_song_name() {
        let snapshot = BootstrapSnapshot {
            username: "dana".into(),
            saved_song: Some(SavedSong {
                name: "Test".into(),
                artist: "Someone".into(),
                image_url: None,
                preview_url: Some("https://p.scdn.co/preview".into()),
                genius_url: None,
            }),
        };
        match SongSection::from_snapshot(&snapshot) {
            SongSection::Song {
                heading,
                preview_url,
                ..
            } => {
                assert!(heading.contains("Test"));
                assert_eq!(preview_url.as_deref(), Some("https://p.scdn.co/preview"));
            }
            other => panic!("expected song panel, got {other:?}"),
        }
    }
}
