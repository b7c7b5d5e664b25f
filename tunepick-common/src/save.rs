//! Save round-trip: wire types, the transport seam and the outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Identifies one save request so a late completion can be told apart from
/// the one currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaveTicket(pub u64);

impl SaveTicket {
    pub fn next(self) -> Self {
        SaveTicket(self.0 + 1)
    }
}

/// Body of `POST /save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub new_artist: Vec<String>,
}

/// Body returned by the save endpoint.
///
/// `status` is the backend's application-level code (200 or 401), carried in
/// the JSON body independently of the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub reason: String,
    #[serde(default)]
    pub status: Option<u16>,
}

impl SaveResponse {
    pub fn is_accepted(&self) -> bool {
        self.status.is_none_or(|s| s == 200)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server returned HTTP {0}")]
    HttpStatus(u16),
    #[error("could not read response: {0}")]
    Decode(String),
}

/// Result of one save request as seen by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The backend answered with a reason. `accepted` is false when it
    /// rejected the ids at the application level.
    Saved { reason: String, accepted: bool },
    /// No usable response arrived.
    Failed(SaveError),
}

impl From<Result<SaveResponse, SaveError>> for SaveOutcome {
    fn from(result: Result<SaveResponse, SaveError>) -> Self {
        match result {
            Ok(response) => {
                let accepted = response.is_accepted();
                SaveOutcome::Saved {
                    reason: response.reason,
                    accepted,
                }
            }
            Err(e) => SaveOutcome::Failed(e),
        }
    }
}

/// Transport used to deliver a [`SaveRequest`].
///
/// The web app implements this over HTTP; tests use an in-memory recorder.
#[allow(async_fn_in_trait)]
pub trait ArtistSaver {
    async fn save(&self, request: &SaveRequest) -> Result<SaveResponse, SaveError>;
}

/// Send one save request and fold the result into a [`SaveOutcome`].
///
/// Exactly one call to the saver is made: no retry, no timeout.
pub async fn submit_draft<S: ArtistSaver>(
    saver: &S,
    ticket: SaveTicket,
    request: SaveRequest,
) -> SaveOutcome {
    info!(
        "Submitting save {:?} with {} artist id(s)",
        ticket,
        request.new_artist.len()
    );
    let outcome = SaveOutcome::from(saver.save(&request).await);
    match &outcome {
        SaveOutcome::Saved { reason, accepted } => {
            info!("Save {:?} answered (accepted: {accepted}): {reason}", ticket);
        }
        SaveOutcome::Failed(e) => warn!("Save {:?} failed: {e}", ticket),
    }
    outcome
}
