//! Circular playlist
//!
//! Entries live in an arena of slots. Ring links are two parallel index vectors,
//! `next` and `prev`, and removed slots go on a free list for reuse. The cursor
//! (`current`) is a slot index that every mutation keeps pointing at a live node.

use rand::Rng;

use crate::entry::{Entry, EntryId};

/// Doubly linked ring of entries with a single movable cursor
#[derive(Debug, Clone, Default)]
pub struct CircularPlaylist {
    entries: Vec<Option<Entry>>,
    next: Vec<usize>,
    prev: Vec<usize>,
    generations: Vec<u32>,
    free: Vec<usize>,
    head: Option<usize>,
    current: Option<usize>,
    len: usize,
}

impl CircularPlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the ring
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append an entry at the tail, just before head.
    ///
    /// The first entry added to an empty ring becomes both head and current.
    pub fn add(&mut self, name: impl Into<String>, location: impl Into<String>) -> EntryId {
        let slot = self.alloc(Entry::new(name, location));

        match self.head {
            None => {
                self.next[slot] = slot;
                self.prev[slot] = slot;
                self.head = Some(slot);
                self.current = Some(slot);
            }
            Some(head) => {
                let tail = self.prev[head];
                self.next[tail] = slot;
                self.prev[slot] = tail;
                self.next[slot] = head;
                self.prev[head] = slot;
            }
        }

        self.len += 1;
        log::debug!("playlist: added slot {} ({} entries)", slot, self.len);

        EntryId {
            slot,
            generation: self.generations[slot],
        }
    }

    /// Remove the first entry (scanning from head) whose name equals `name`.
    ///
    /// If that entry was current, the cursor moves to its successor, or to nothing
    /// when the ring becomes empty.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(slot) => {
                self.unlink(slot);
                log::debug!("playlist: removed {:?} ({} entries left)", name, self.len);
                true
            }
            None => false,
        }
    }

    /// Move the cursor to its successor and return the new current entry
    pub fn advance(&mut self) -> Option<&Entry> {
        let current = self.current?;
        let next = self.next[current];
        self.current = Some(next);
        self.entry(next)
    }

    /// Move the cursor to its predecessor and return the new current entry
    pub fn retreat(&mut self) -> Option<&Entry> {
        let current = self.current?;
        let prev = self.prev[current];
        self.current = Some(prev);
        self.entry(prev)
    }

    pub fn current(&self) -> Option<&Entry> {
        self.entry(self.current?)
    }

    /// Identity of the node under the cursor
    pub fn current_id(&self) -> Option<EntryId> {
        let slot = self.current?;
        Some(EntryId {
            slot,
            generation: self.generations[slot],
        })
    }

    /// Offset of the cursor from head, in ring order
    pub fn current_position(&self) -> Option<usize> {
        let current = self.current?;
        let mut slot = self.head?;
        for index in 0..self.len {
            if slot == current {
                return Some(index);
            }
            slot = self.next[slot];
        }
        None
    }

    /// Look up a node by identity. Handles to removed nodes return `None`.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        if *self.generations.get(id.slot)? != id.generation {
            return None;
        }
        self.entry(id.slot)
    }

    /// Jump to a uniformly chosen index using the thread-local generator
    pub fn random_jump(&mut self) -> Option<&Entry> {
        self.random_jump_with(&mut rand::rng())
    }

    /// Jump to an index drawn uniformly from `[0, len)` with the given generator.
    ///
    /// The index is walked from head, so selection is uniform over positions.
    pub fn random_jump_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Entry> {
        if self.len == 0 {
            return None;
        }
        let index = rng.random_range(0..self.len);
        let slot = self.nth_slot(index)?;
        self.current = Some(slot);
        log::debug!("playlist: random jump to index {}", index);
        self.entry(slot)
    }

    /// Point the cursor at the first entry named `name`.
    ///
    /// The cursor stays where it was on a miss.
    pub fn find_by_name(&mut self, name: &str) -> Option<&Entry> {
        let slot = self.position(name)?;
        self.current = Some(slot);
        self.entry(slot)
    }

    /// Entries in ring order, starting at head
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            slot: self.head,
            remaining: self.len,
        }
    }

    /// Snapshot of all entries in ring order, starting at head
    pub fn to_list(&self) -> Vec<Entry> {
        self.iter().cloned().collect()
    }

    fn entry(&self, slot: usize) -> Option<&Entry> {
        self.entries.get(slot)?.as_ref()
    }

    fn alloc(&mut self, entry: Entry) -> usize {
        if let Some(slot) = self.free.pop() {
            self.entries[slot] = Some(entry);
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push(Some(entry));
        self.next.push(slot);
        self.prev.push(slot);
        self.generations.push(0);
        slot
    }

    /// Bounded scan from head: at most `len` hops, stopping early back at head.
    fn position(&self, name: &str) -> Option<usize> {
        let head = self.head?;
        let mut slot = head;
        for _ in 0..self.len {
            if self.entry(slot).is_some_and(|entry| entry.name == name) {
                return Some(slot);
            }
            slot = self.next[slot];
            if slot == head {
                break;
            }
        }
        None
    }

    fn nth_slot(&self, index: usize) -> Option<usize> {
        let mut slot = self.head?;
        for _ in 0..index {
            slot = self.next[slot];
        }
        Some(slot)
    }

    fn unlink(&mut self, slot: usize) {
        if self.len == 1 {
            self.head = None;
            self.current = None;
        } else {
            let prev = self.prev[slot];
            let next = self.next[slot];
            self.next[prev] = next;
            self.prev[next] = prev;

            if self.head == Some(slot) {
                self.head = Some(next);
            }
            if self.current == Some(slot) {
                self.current = Some(next);
            }
        }

        self.entries[slot] = None;
        self.next[slot] = slot;
        self.prev[slot] = slot;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free.push(slot);
        self.len -= 1;
    }
}

/// Iterator over a playlist in ring order
pub struct Iter<'a> {
    playlist: &'a CircularPlaylist,
    slot: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.slot?;
        self.remaining -= 1;
        self.slot = Some(self.playlist.next[slot]);
        self.playlist.entry(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CircularPlaylist {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn abc() -> CircularPlaylist {
        let mut playlist = CircularPlaylist::new();
        playlist.add("a", "/a");
        playlist.add("b", "/b");
        playlist.add("c", "/c");
        playlist
    }

    fn names(playlist: &CircularPlaylist) -> Vec<String> {
        playlist.iter().map(|e| e.name.clone()).collect()
    }

    fn current_name(playlist: &CircularPlaylist) -> Option<String> {
        playlist.current().map(|e| e.name.clone())
    }

    /// Walk both directions and check the ring closes after exactly `len` hops.
    fn assert_ring_consistent(playlist: &CircularPlaylist) {
        let Some(head) = playlist.head else {
            assert_eq!(playlist.len(), 0);
            assert!(playlist.current.is_none());
            return;
        };
        let mut forward = head;
        let mut backward = head;
        for step in 0..playlist.len() {
            assert!(playlist.entries[forward].is_some());
            assert!(playlist.entries[backward].is_some());
            assert_eq!(playlist.prev[playlist.next[forward]], forward);
            forward = playlist.next[forward];
            backward = playlist.prev[backward];
            if step + 1 < playlist.len() {
                assert_ne!(forward, head);
                assert_ne!(backward, head);
            }
        }
        assert_eq!(forward, head);
        assert_eq!(backward, head);
        let current = playlist.current.expect("current set on non-empty ring");
        assert!(playlist.entries[current].is_some());
    }

    #[test]
    fn add_keeps_insertion_order_and_first_is_current() {
        let playlist = abc();
        assert_eq!(names(&playlist), ["a", "b", "c"]);
        assert_eq!(current_name(&playlist).as_deref(), Some("a"));
        assert_eq!(playlist.len(), 3);
        assert_ring_consistent(&playlist);
    }

    #[test]
    fn advance_wraps_around() {
        let mut playlist = abc();
        assert_eq!(playlist.advance().map(|e| e.name.as_str()), Some("b"));
        assert_eq!(playlist.advance().map(|e| e.name.as_str()), Some("c"));
        assert_eq!(playlist.advance().map(|e| e.name.as_str()), Some("a"));
    }

    #[test]
    fn retreat_wraps_around() {
        let mut playlist = abc();
        assert_eq!(playlist.retreat().map(|e| e.name.as_str()), Some("c"));
        assert_eq!(playlist.retreat().map(|e| e.name.as_str()), Some("b"));
    }

    #[test]
    fn remove_middle_relinks_neighbors() {
        let mut playlist = abc();
        assert!(playlist.remove("b"));
        assert_eq!(playlist.len(), 2);
        assert_eq!(names(&playlist), ["a", "c"]);
        assert_eq!(playlist.advance().map(|e| e.name.as_str()), Some("c"));
        assert_eq!(playlist.advance().map(|e| e.name.as_str()), Some("a"));
        assert_ring_consistent(&playlist);
    }

    #[test]
    fn remove_current_moves_cursor_to_successor() {
        let mut playlist = abc();
        playlist.advance();
        assert!(playlist.remove("b"));
        assert_eq!(current_name(&playlist).as_deref(), Some("c"));

        playlist.advance();
        assert!(playlist.remove("a"));
        assert_eq!(current_name(&playlist).as_deref(), Some("c"));
        assert_eq!(names(&playlist), ["c"]);
        assert_ring_consistent(&playlist);
    }

    #[test]
    fn remove_head_moves_head() {
        let mut playlist = abc();
        playlist.advance();
        assert!(playlist.remove("a"));
        assert_eq!(names(&playlist), ["b", "c"]);
        assert_eq!(current_name(&playlist).as_deref(), Some("b"));
    }

    #[test]
    fn removing_sole_entry_empties_ring() {
        let mut playlist = CircularPlaylist::new();
        playlist.add("only", "/only");
        assert!(playlist.remove("only"));
        assert!(playlist.is_empty());
        assert!(playlist.current().is_none());
        assert!(playlist.to_list().is_empty());
        assert_ring_consistent(&playlist);
    }

    #[test]
    fn remove_miss_returns_false() {
        let mut playlist = abc();
        assert!(!playlist.remove("zzz"));
        assert_eq!(playlist.len(), 3);
        assert!(!CircularPlaylist::new().remove("a"));
    }

    #[test]
    fn empty_ring_operations_are_no_ops() {
        let mut playlist = CircularPlaylist::new();
        assert!(playlist.advance().is_none());
        assert!(playlist.retreat().is_none());
        assert!(playlist.current().is_none());
        assert!(playlist.random_jump().is_none());
        assert!(playlist.find_by_name("a").is_none());
        assert!(playlist.current_id().is_none());
        assert_eq!(playlist.iter().len(), 0);
    }

    #[test]
    fn find_by_name_moves_cursor_only_on_hit() {
        let mut playlist = abc();
        assert_eq!(playlist.find_by_name("c").map(|e| e.location.as_str()), Some("/c"));
        assert_eq!(current_name(&playlist).as_deref(), Some("c"));
        assert_eq!(playlist.current_position(), Some(2));

        assert!(playlist.find_by_name("missing").is_none());
        assert_eq!(current_name(&playlist).as_deref(), Some("c"));
    }

    #[test]
    fn duplicate_names_resolve_to_first_match() {
        let mut playlist = CircularPlaylist::new();
        playlist.add("dup", "/one");
        playlist.add("other", "/other");
        playlist.add("dup", "/two");

        assert_eq!(playlist.find_by_name("dup").map(|e| e.location.as_str()), Some("/one"));
        assert!(playlist.remove("dup"));
        assert_eq!(playlist.find_by_name("dup").map(|e| e.location.as_str()), Some("/two"));
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn stale_ids_do_not_resolve_after_slot_reuse() {
        let mut playlist = CircularPlaylist::new();
        let first = playlist.add("a", "/a");
        assert_eq!(playlist.get(first).map(|e| e.name.as_str()), Some("a"));

        assert!(playlist.remove("a"));
        let second = playlist.add("b", "/b");
        assert_eq!(first.slot, second.slot);
        assert!(playlist.get(first).is_none());
        assert_eq!(playlist.get(second).map(|e| e.name.as_str()), Some("b"));
        assert_eq!(playlist.current_id(), Some(second));
    }

    #[test]
    fn adds_after_removals_keep_order() {
        let mut playlist = abc();
        playlist.remove("a");
        playlist.remove("c");
        playlist.add("d", "/d");
        playlist.add("e", "/e");
        assert_eq!(names(&playlist), ["b", "d", "e"]);
        assert_ring_consistent(&playlist);
    }

    #[test]
    fn seeded_random_jump_is_deterministic() {
        let mut left = abc();
        let mut right = abc();
        let mut left_rng = StdRng::seed_from_u64(7);
        let mut right_rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let l = left.random_jump_with(&mut left_rng).cloned();
            let r = right.random_jump_with(&mut right_rng).cloned();
            assert!(l.is_some());
            assert_eq!(l, r);
            assert_eq!(left.current().cloned(), l);
        }
    }
}
