//! Shared UI components

pub mod button;
pub mod draft_list;
pub mod error_display;
pub mod home;
pub mod song_panel;
pub mod text_input;
pub mod user_header;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use draft_list::DraftListView;
pub use error_display::ErrorDisplay;
pub use home::HomeView;
pub use song_panel::SongPanelView;
pub use text_input::TextInput;
pub use user_header::UserHeaderView;
