//! Artist id text input

use dioxus::prelude::*;

/// Controlled monospace text input. `on_submit` fires when Enter is pressed.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] on_submit: EventHandler<()>,
    #[props(default)] aria_label: Option<&'static str>,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: "w-full px-3 py-2 bg-gray-800/50 rounded-lg focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 font-mono",
            value: "{value}",
            aria_label,
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    on_submit.call(());
                }
            },
        }
    }
}
