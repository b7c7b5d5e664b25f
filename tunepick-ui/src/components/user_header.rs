//! Username header with the sign-out form

use dioxus::prelude::*;
use tunepick_common::endpoints::SIGNOUT_PATH;

/// The sign-out form is a plain POST; the browser follows the redirect.
#[component]
pub fn UserHeaderView(username: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between mb-8",
            h1 { class: "text-3xl font-bold text-white", "{username}" }
            form { action: SIGNOUT_PATH, method: "post",
                button {
                    class: "signOut px-3 py-1.5 text-sm rounded-lg bg-gray-700 hover:bg-gray-600 text-gray-300",
                    r#type: "submit",
                    "Sign out"
                }
            }
        }
    }
}
