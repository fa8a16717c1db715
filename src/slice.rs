use crate::cursor::{Cursor, Source, Step};

/// [`Cursor`] over a borrowed slice, yielding elements in storage order
/// starting at position 0.
pub struct SliceCursor<'a, T> {
    source: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(source: &'a [T]) -> Self {
        Self { source, pos: 0 }
    }

    /// position of the next element to produce
    ///
    /// equals the source length once the cursor is exhausted
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> Step<&'a T> {
        match self.source.get(self.pos) {
            Some(item) => {
                self.pos += 1;
                Step::Yield(item)
            }
            None => Step::Done,
        }
    }
}

impl<'a, T: 'a> Source<'a> for [T] {
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&'a self) -> SliceCursor<'a, T> {
        SliceCursor::new(self)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        cursor::{Cursor, Source, Step},
        slice::SliceCursor,
    };

    #[test]
    fn test_yields_every_element_in_storage_order() {
        let data = [1, 2, 3, 4, 5];
        let mut cursor = SliceCursor::new(&data);

        for expected in &data {
            assert_eq!(cursor.advance(), Step::Yield(expected));
        }
        assert_eq!(cursor.advance(), Step::Done);
    }

    #[test]
    fn test_empty_source_exhausts_on_first_advance() {
        let data: [u8; 0] = [];
        let mut cursor = SliceCursor::new(&data);

        assert!(cursor.advance().is_done());
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let data = ["a", "b", "c"];
        let mut cursor = data.cursor();

        cursor.for_each(|_| {});

        for _ in 0..10 {
            assert_eq!(cursor.advance(), Step::Done);
        }
    }

    #[test]
    fn test_position_counts_up_and_stops_at_length() {
        let data = [10, 20];
        let mut cursor = SliceCursor::new(&data);
        assert_eq!(cursor.pos(), 0);

        cursor.advance();
        assert_eq!(cursor.pos(), 1);

        cursor.advance();
        assert_eq!(cursor.pos(), 2);

        // advancing past the end never moves the position
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_source_factory_restarts_traversal() {
        let data = ["a", "b", "c"];

        let mut first = data.cursor();
        let mut seen = Vec::new();
        first.for_each(|s| seen.push(*s));
        assert_eq!(seen, vec!["a", "b", "c"]);

        // a fresh cursor starts over at position 0
        assert_eq!(data.cursor().advance(), Step::Yield(&"a"));
    }
}
