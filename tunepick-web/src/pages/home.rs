use crate::api::{ApiConfig, HttpArtistSaver};
use crate::bootstrap::read_bootstrap;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::error;
use tunepick_common::{submit_draft, BootstrapSnapshot, EditorAction, PendingSave};
use tunepick_ui::stores::{HomeState, HomeStateStoreExt};
use tunepick_ui::{ErrorDisplay, HomeView};

#[component]
pub fn Home() -> Element {
    // Read once per mount; the hook caches the result across re-renders.
    let bootstrap = use_hook(read_bootstrap);

    match bootstrap {
        Ok(snapshot) => rsx! {
            HomePage { snapshot }
        },
        Err(e) => {
            error!("Failed to read bootstrap payload: {e}");
            rsx! {
                div { class: "container mx-auto max-w-2xl py-10 px-4",
                    ErrorDisplay {
                        title: "Could not load your page".to_string(),
                        message: e.to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn HomePage(snapshot: BootstrapSnapshot) -> Element {
    let state = use_store(move || HomeState::new(snapshot));
    let saver = use_hook(|| Rc::new(HttpArtistSaver::new(ApiConfig::from_window())));

    rsx! {
        HomeView {
            state,
            on_input_change: move |value: String| {
                state.editor().write().apply(EditorAction::InputChanged(value));
            },
            on_add: move |_| {
                state.editor().write().apply(EditorAction::AddPending);
            },
            on_remove: move |artist_id: String| {
                state.editor().write().apply(EditorAction::Remove(artist_id));
            },
            on_save: move |_| {
                let pending = state.editor().write().apply(EditorAction::Submit);
                let Some(PendingSave { ticket, request }) = pending else {
                    return;
                };
                let saver = saver.clone();
                spawn(async move {
                    let outcome = submit_draft(&*saver, ticket, request).await;
                    state
                        .editor()
                        .write()
                        .apply(EditorAction::SaveFinished { ticket, outcome });
                });
            },
        }
    }
}
