//! Error display component

use dioxus::prelude::*;

/// Boxed error notice
#[component]
pub fn ErrorDisplay(title: String, message: String) -> Element {
    rsx! {
        div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            p { class: "font-semibold", "{title}" }
            p { class: "text-sm mt-1", "{message}" }
        }
    }
}
