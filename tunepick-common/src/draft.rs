/// Ordered list of artist ids the user is composing before a save.
///
/// Duplicates are kept and insertion order is preserved. Removal is by value
/// and drops every equal entry, not just the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftArtistList {
    artists: Vec<String>,
}

impl DraftArtistList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an id to the end of the list. No validation is done.
    pub fn add(&mut self, artist_id: impl Into<String>) {
        self.artists.push(artist_id.into());
    }

    /// Remove all entries equal to `artist_id`. Returns how many were dropped.
    pub fn remove(&mut self, artist_id: &str) -> usize {
        let before = self.artists.len();
        self.artists.retain(|a| a != artist_id);
        before - self.artists.len()
    }

    /// Drop one entry per id in `sent`, leaving anything added since.
    pub fn discard_sent(&mut self, sent: &[String]) {
        for artist_id in sent {
            if let Some(pos) = self.artists.iter().position(|a| a == artist_id) {
                self.artists.remove(pos);
            }
        }
    }

    pub fn clear(&mut self) {
        self.artists.clear();
    }

    /// Snapshot of the entries, in order.
    pub fn to_vec(&self) -> Vec<String> {
        self.artists.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DraftArtistList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            artists: iter.into_iter().map(Into::into).collect(),
        }
    }
}
