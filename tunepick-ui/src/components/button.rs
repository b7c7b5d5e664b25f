//! Reusable button component

use dioxus::prelude::*;

/// Unstyled button carrying the loading behavior. `Button` and the per-row
/// delete control build on it.
#[component]
pub fn ChromelessButton(
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled: loading,
            aria_label: aria_label.as_deref(),
            aria_disabled: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !loading {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - for primary actions
    Primary,
    /// Gray background - for secondary actions
    Secondary,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
    };

    let base = "inline-flex items-center gap-2 px-4 py-2 rounded-lg transition-colors";
    let computed_class = match &class {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            loading,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
