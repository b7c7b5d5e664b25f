pub mod api;
pub mod bootstrap;
pub mod pages;

use dioxus::prelude::*;
use pages::Home;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Home {} }
    }
}

#[cfg(test)]
mod tests {
    use tunepick_common::StatusTone;
    use tunepick_ui::status_class;

    const STYLESHEET: &str = include_str!("../assets/main.css");

    #[test]
    fn test_stylesheet_defines_every_status_tone() {
        let tones = [StatusTone::Neutral, StatusTone::Rejected, StatusTone::Error];
        for tone in tones {
            let rule = format!(".{} {{", status_class(tone));
            assert!(STYLESHEET.contains(&rule), "main.css has no rule for {tone:?}");
        }

        let classes: Vec<_> = tones.into_iter().map(status_class).collect();
        assert_eq!(classes.len(), 3);
        assert!(classes[0] != classes[1] && classes[1] != classes[2] && classes[0] != classes[2]);
    }
}
