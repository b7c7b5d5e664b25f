//! Draft artist list with per-row delete controls

use crate::components::ChromelessButton;
use dioxus::prelude::*;
use tracing::debug;

/// Rows are keyed by position since the same id may appear more than once.
#[component]
pub fn DraftListView(artists: Vec<String>, on_remove: EventHandler<String>) -> Element {
    rsx! {
        ul { class: "space-y-1 my-3",
            for (index, artist_id) in artists.into_iter().enumerate() {
                DraftRow { key: "{index}", artist_id, on_remove }
            }
        }
    }
}

#[component]
fn DraftRow(artist_id: String, on_remove: EventHandler<String>) -> Element {
    let label = format!("Remove {artist_id}");
    let id = artist_id.clone();

    rsx! {
        li { class: "flex items-center gap-2 text-gray-300 font-mono",
            span { "{artist_id}" }
            ChromelessButton {
                class: Some("deleteArtist px-2 text-gray-500 hover:text-red-400".to_string()),
                aria_label: Some(label),
                onclick: move |_| {
                    debug!("Remove clicked for draft row {id:?}");
                    on_remove.call(id.clone());
                },
                "x"
            }
        }
    }
}
