use indexmap::IndexMap;

use crate::cursor::{Cursor, Source, Step};

/// [`Cursor`] over the key set of a string-keyed mapping, independent of the
/// mapping's values.
///
/// The key list is snapshotted at construction, so the traversal length is
/// fixed for the life of the cursor. The borrow held on the map additionally
/// keeps it immutable while the cursor is live. Keys are produced in the
/// mapping's insertion order, which [`IndexMap`] preserves.
pub struct KeyCursor<'a> {
    keys: Vec<&'a str>,
    pos: usize,
}

impl<'a> KeyCursor<'a> {
    pub fn new<V>(map: &'a IndexMap<String, V>) -> Self {
        Self {
            keys: map.keys().map(String::as_str).collect(),
            pos: 0,
        }
    }
}

impl<'a> Cursor for KeyCursor<'a> {
    type Item = &'a str;

    fn advance(&mut self) -> Step<&'a str> {
        match self.keys.get(self.pos).copied() {
            Some(key) => {
                self.pos += 1;
                Step::Yield(key)
            }
            None => Step::Done,
        }
    }
}

impl<'a, V: 'a> Source<'a> for IndexMap<String, V> {
    type Cursor = KeyCursor<'a>;

    fn cursor(&'a self) -> KeyCursor<'a> {
        KeyCursor::new(self)
    }
}
