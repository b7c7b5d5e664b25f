//! Home view - pure rendering, no network access
//!
//! Accepts `ReadStore<HomeState>` and reports edits through callbacks; the
//! owner applies them to the store.

use crate::components::{
    Button, ButtonVariant, DraftListView, SongPanelView, TextInput, UserHeaderView,
};
use crate::display_types::{status_class, SongSection};
use crate::stores::home::{HomeState, HomeStateStoreExt};
use dioxus::prelude::*;

#[component]
pub fn HomeView(
    state: ReadStore<HomeState>,
    on_input_change: EventHandler<String>,
    on_add: EventHandler<()>,
    on_remove: EventHandler<String>,
    on_save: EventHandler<()>,
) -> Element {
    let snapshot = state.snapshot().read().clone();
    let editor = state.editor().read().clone();

    let section = SongSection::from_snapshot(&snapshot);
    let is_saving = editor.is_saving();
    let status_tone = status_class(editor.status.tone);
    let status_text = editor.status.text;

    rsx! {
        div { class: "container mx-auto max-w-2xl py-10 px-4",
            UserHeaderView { username: snapshot.username }

            h1 { class: "text-2xl font-bold text-white mb-2", "Add a favorite artist ID:" }
            p { class: "min-h-6 {status_tone}", "{status_text}" }

            div { class: "bg-gray-800 rounded-lg p-6",
                div { class: "flex gap-3",
                    TextInput {
                        value: editor.pending_input,
                        on_input: move |v| on_input_change.call(v),
                        on_submit: move |_| on_add.call(()),
                        aria_label: "Artist ID",
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: Some("addArtist".to_string()),
                        onclick: move |_| on_add.call(()),
                        "Add Artist"
                    }
                }

                DraftListView { artists: editor.draft.to_vec(), on_remove }

                Button {
                    variant: ButtonVariant::Primary,
                    loading: is_saving,
                    onclick: move |_| on_save.call(()),
                    if is_saving {
                        "Saving..."
                    } else {
                        "Save"
                    }
                }
            }

            SongPanelView { section }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::NO_SAVED_SONG_MESSAGE;
    use crate::test_support::tag_contents;
    use tunepick_common::{BootstrapSnapshot, EditorAction, SavedSong, StatusMessage, StatusTone};

    #[component]
    fn Harness(initial: HomeState) -> Element {
        let state = use_store(move || initial);
        rsx! {
            HomeView {
                state,
                on_input_change: |_| {},
                on_add: |_| {},
                on_remove: |_| {},
                on_save: |_| {},
            }
        }
    }

    fn render(initial: HomeState) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { initial });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn nothing_saved() -> HomeState {
        HomeState::new(BootstrapSnapshot {
            username: "dana".into(),
            saved_song: None,
        })
    }

    fn with_draft(mut state: HomeState, ids: &[&str]) -> HomeState {
        for id in ids {
            state.editor.apply(EditorAction::InputChanged(id.to_string()));
            state.editor.apply(EditorAction::AddPending);
        }
        state
    }

    #[test]
    fn test_nothing_saved_shows_placeholder() {
        let html = render(nothing_saved());

        assert!(tag_contents(&html, "h1").iter().any(|h| h.contains("dana")));
        assert!(tag_contents(&html, "h2")
            .iter()
            .any(|h| h.contains(NO_SAVED_SONG_MESSAGE)));
        assert!(tag_contents(&html, "section").is_empty());
        assert!(!html.contains("<audio"));
    }

    #[test]
    fn test_saved_song_heading() {
        let html = render(HomeState::new(BootstrapSnapshot {
            username: "dana".into(),
            saved_song: Some(SavedSong {
                name: "Test".into(),
                artist: "Someone".into(),
                image_url: None,
                preview_url: None,
                genius_url: None,
            }),
        }));

        let headings = tag_contents(&html, "h2");
        assert!(headings.iter().any(|h| h.contains("Test")));
        assert!(headings.iter().all(|h| !h.contains("Someone")));
        assert!(!html.contains(NO_SAVED_SONG_MESSAGE));
    }

    #[test]
    fn test_each_draft_row_has_one_delete_control() {
        let html = render(with_draft(nothing_saved(), &["a", "b", "a"]));

        assert_eq!(tag_contents(&html, "li").len(), 3);
        assert_eq!(html.matches("deleteArtist").count(), 3);
        assert_eq!(html.matches(r#"aria-label="Remove a""#).count(), 2);
        assert_eq!(html.matches(r#"aria-label="Remove b""#).count(), 1);
    }

    #[test]
    fn test_empty_draft_renders_no_rows() {
        let html = render(nothing_saved());
        assert!(tag_contents(&html, "li").is_empty());
        assert!(!html.contains("deleteArtist"));
    }

    #[test]
    fn test_status_tone_reaches_markup() {
        let mut state = nothing_saved();
        state.editor.status = StatusMessage {
            text: "Invalid artist ID entered".into(),
            tone: StatusTone::Rejected,
        };
        let html = render(state);

        let status = tag_contents(&html, "p");
        assert!(status.iter().any(|p| p.contains("Invalid artist ID entered")));
        assert!(html.contains("text-yellow-300"));
        assert!(!html.contains("text-red-300"));
    }

    #[test]
    fn test_save_button_shows_progress_while_in_flight() {
        let mut state = with_draft(nothing_saved(), &["a"]);
        assert!(state.editor.apply(EditorAction::Submit).is_some());
        let html = render(state);

        assert!(html.contains("Saving..."));
        assert!(!tag_contents(&html, "button").iter().any(|b| b == "Save"));
    }
}
