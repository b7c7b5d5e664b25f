//! Saved song panel (or the empty-state placeholder)

use crate::display_types::{SongSection, COVER_SIZE_PX, LYRICS_LINK_TEXT};
use dioxus::prelude::*;

#[component]
pub fn SongPanelView(section: SongSection) -> Element {
    match section {
        SongSection::Placeholder { message } => rsx! {
            h2 { class: "text-xl text-gray-400 mt-10", "{message}" }
        },
        SongSection::Song {
            heading,
            artist,
            image_url,
            preview_url,
            lyrics_url,
        } => rsx! {
            section { class: "mt-10 space-y-3",
                h2 { class: "text-2xl font-semibold text-white", "{heading}" }
                h3 { class: "text-lg text-gray-400", "{artist}" }
                if let Some(src) = image_url {
                    div {
                        img {
                            class: "rounded-lg",
                            src,
                            width: "{COVER_SIZE_PX}",
                            height: "{COVER_SIZE_PX}",
                            alt: "song",
                        }
                    }
                }
                if let Some(src) = preview_url {
                    div {
                        audio { controls: true,
                            source { src }
                        }
                    }
                }
                if let Some(href) = lyrics_url {
                    a { class: "text-indigo-400 hover:text-indigo-300", href, "{LYRICS_LINK_TEXT}" }
                }
            }
        },
    }
}
