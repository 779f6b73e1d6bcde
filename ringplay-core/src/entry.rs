use std::fmt::Display;

/// A named reference to a playable media item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Display key used for lookups. Not required to be unique.
    pub name: String,
    /// Opaque path or URI handed to the playback engine
    pub location: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Identity of one node inside a [`CircularPlaylist`](crate::playlist::CircularPlaylist).
///
/// Two entries with the same name still get distinct ids. The generation makes a
/// handle to a removed node stale even after its slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    pub(crate) slot: usize,
    pub(crate) generation: u32,
}
