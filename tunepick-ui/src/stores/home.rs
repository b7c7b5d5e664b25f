//! Home page store

use dioxus::prelude::*;
use tunepick_common::{BootstrapSnapshot, EditorState};

/// State for the home page
#[derive(Clone, Debug, PartialEq, Store)]
pub struct HomeState {
    /// Read once at mount, never written afterwards
    pub snapshot: BootstrapSnapshot,
    /// Draft list, input box, status line and save progress
    pub editor: EditorState,
}

impl HomeState {
    pub fn new(snapshot: BootstrapSnapshot) -> Self {
        Self {
            snapshot,
            editor: EditorState::new(),
        }
    }
}
