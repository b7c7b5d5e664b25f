//! tunepick-common - Dioxus-free core of the favorite-artist page
//!
//! Holds the draft list editor, the save round-trip types and the bootstrap
//! snapshot so they can be tested without a renderer or a browser.

mod bootstrap;
mod draft;
mod editor;
pub mod endpoints;
mod save;

pub use bootstrap::{BootstrapError, BootstrapSnapshot, SavedSong};
pub use draft::DraftArtistList;
pub use editor::{EditorAction, EditorState, PendingSave, SaveState, StatusMessage, StatusTone};
pub use save::{
    submit_draft, ArtistSaver, SaveError, SaveOutcome, SaveRequest, SaveResponse, SaveTicket,
};
