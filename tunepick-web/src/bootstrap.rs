//! Reads the payload the backend renders into the page.

use tracing::{info, warn};
use tunepick_common::endpoints::BOOTSTRAP_ELEMENT_ID;
use tunepick_common::{BootstrapError, BootstrapSnapshot};

fn payload_text() -> Option<String> {
    let document = web_sys_x::window()?.document()?;
    document
        .get_element_by_id(BOOTSTRAP_ELEMENT_ID)?
        .text_content()
}

/// Parse the `<script id="data">` payload. Called once per mount.
pub fn read_bootstrap() -> Result<BootstrapSnapshot, BootstrapError> {
    let text = payload_text().ok_or_else(|| {
        warn!("No #{BOOTSTRAP_ELEMENT_ID} element in page");
        BootstrapError::Missing
    })?;
    let snapshot = BootstrapSnapshot::from_json(&text)?;
    info!(
        "Bootstrapped page for {} (song saved: {})",
        snapshot.username,
        snapshot.has_artists_saved()
    );
    Ok(snapshot)
}
