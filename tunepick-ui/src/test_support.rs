//! Helpers for asserting on server-rendered markup

/// Inner markup of every `<tag ...>...</tag>` element, in document order.
pub fn tag_contents(html: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut found = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        // skip longer tag names sharing the prefix, e.g. <h2 vs <h20
        if !after.starts_with('>') && !after.starts_with(' ') {
            rest = after;
            continue;
        }
        let Some(body_start) = after.find('>') else {
            break;
        };
        let body = &after[body_start + 1..];
        let Some(end) = body.find(&close) else {
            break;
        };
        found.push(body[..end].to_string());
        rest = &body[end + close.len()..];
    }

    found
}

#[test]
fn test_tag_contents() {
    let html = r#"<div><h2 class="x">One</h2><h3>Two</h3><h2>Three</h2></div>"#;
    assert_eq!(tag_contents(html, "h2"), vec!["One", "Three"]);
    assert_eq!(tag_contents(html, "h3"), vec!["Two"]);
    assert!(tag_contents(html, "img").is_empty());
}
