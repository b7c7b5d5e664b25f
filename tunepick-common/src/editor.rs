//! Reducer for the artist editor: draft list, input box, status line and the
//! in-flight save.

use crate::draft::DraftArtistList;
use crate::save::{SaveOutcome, SaveRequest, SaveTicket};
use tracing::{debug, info, warn};

/// How the status line should be presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Neutral,
    /// The backend answered but refused the ids.
    Rejected,
    /// The request never produced a usable answer.
    Error,
}

/// Message shown above the editor. Only a finished save overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

/// Save progress. At most one request is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    /// `sent` is the draft as it was when the request was built.
    InFlight { ticket: SaveTicket, sent: Vec<String> },
}

/// A request the caller must send, produced by [`EditorAction::Submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub ticket: SaveTicket,
    pub request: SaveRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// The add-artist input changed.
    InputChanged(String),
    /// Commit the input box to the draft list and clear it.
    AddPending,
    /// Remove every draft entry equal to the id.
    Remove(String),
    /// Start a save of the current draft.
    Submit,
    /// A save finished.
    SaveFinished {
        ticket: SaveTicket,
        outcome: SaveOutcome,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub draft: DraftArtistList,
    pub pending_input: String,
    pub status: StatusMessage,
    pub save: SaveState,
    last_ticket: SaveTicket,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.save, SaveState::InFlight { .. })
    }

    /// Reducer form of [`EditorState::apply`], discarding any save command.
    pub fn reduce(mut self, action: EditorAction) -> Self {
        self.apply(action);
        self
    }

    /// Apply an action. Returns the request to send when a save was started.
    pub fn apply(&mut self, action: EditorAction) -> Option<PendingSave> {
        match action {
            EditorAction::InputChanged(value) => {
                self.pending_input = value;
                None
            }
            EditorAction::AddPending => {
                let artist_id = std::mem::take(&mut self.pending_input);
                debug!("Adding artist id {artist_id:?} to draft");
                self.draft.add(artist_id);
                None
            }
            EditorAction::Remove(artist_id) => {
                let removed = self.draft.remove(&artist_id);
                debug!("Removed {removed} draft entr(ies) for {artist_id:?}");
                None
            }
            EditorAction::Submit => self.begin_save(),
            EditorAction::SaveFinished { ticket, outcome } => {
                self.finish_save(ticket, outcome);
                None
            }
        }
    }

    fn begin_save(&mut self) -> Option<PendingSave> {
        if let SaveState::InFlight { ticket, .. } = &self.save {
            warn!("Save {:?} still in flight, ignoring submit", ticket);
            return None;
        }

        let ticket = self.last_ticket.next();
        self.last_ticket = ticket;
        let sent = self.draft.to_vec();
        self.save = SaveState::InFlight {
            ticket,
            sent: sent.clone(),
        };

        Some(PendingSave {
            ticket,
            request: SaveRequest { new_artist: sent },
        })
    }

    fn finish_save(&mut self, ticket: SaveTicket, outcome: SaveOutcome) {
        let sent = match std::mem::take(&mut self.save) {
            SaveState::InFlight {
                ticket: in_flight,
                sent,
            } if in_flight == ticket => sent,
            other => {
                debug!("Dropping stale completion for save {:?}", ticket);
                self.save = other;
                return;
            }
        };

        match outcome {
            SaveOutcome::Saved { reason, accepted } => {
                info!("Save {:?} completed, clearing sent ids from draft", ticket);
                self.status = StatusMessage {
                    text: reason,
                    tone: if accepted {
                        StatusTone::Neutral
                    } else {
                        StatusTone::Rejected
                    },
                };
                self.draft.discard_sent(&sent);
            }
            SaveOutcome::Failed(e) => {
                self.status = StatusMessage {
                    text: format!("Failed to save: {e}"),
                    tone: StatusTone::Error,
                };
            }
        }
    }
}
