/// Outcome of a single [`Cursor::advance`] call.
///
/// Exhaustion is a normal terminal state, not a failure. The two-variant shape
/// guarantees a value is never produced together with the done signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    /// the traversal produced its next element
    Yield(T),
    /// the traversal is exhausted, terminal for the life of the cursor
    Done,
}

impl<T> Step<T> {
    /// get the produced element, or [`None`] if the traversal is exhausted
    pub fn value(self) -> Option<T> {
        match self {
            Step::Yield(item) => Some(item),
            Step::Done => None,
        }
    }

    /// check whether this step marks exhaustion
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

/// Stateful pull-based traversal over one fixed source collection.
///
/// A cursor is bound to its source at construction and mutated only by its own
/// [`Cursor::advance`]; its position is monotonically non-decreasing and never
/// exceeds the source length. There is no rewind and no way to duplicate
/// traversal state, restarting requires constructing a new cursor from the
/// source.
///
/// Once the source is exhausted every further call returns [`Step::Done`].
/// Advancing past the end is not an error and must never panic.
pub trait Cursor {
    type Item;

    /// produce the next element, or [`Step::Done`] once the source is exhausted
    fn advance(&mut self) -> Step<Self::Item>;

    /// drive this cursor to exhaustion, feeding each produced element to
    /// `consumer` in traversal order
    ///
    /// the consumer runs exactly once per remaining element and never after
    /// exhaustion, so on an already exhausted cursor it does not run at all
    fn for_each<F>(&mut self, mut consumer: F)
    where
        F: FnMut(Self::Item),
    {
        while let Step::Yield(item) = self.advance() {
            consumer(item);
        }
    }

    /// fallible [`Cursor::for_each`]
    ///
    /// stops at the first consumer error and propagates it, leaving the cursor
    /// positioned just past the rejected element
    fn try_for_each<F, E>(&mut self, mut consumer: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        while let Step::Yield(item) = self.advance() {
            consumer(item)?;
        }

        Ok(())
    }
}

/// A collection which can hand out cursors over its contents.
///
/// The lifetime ties each cursor to a borrow of the source, so the source
/// stays immutable for as long as any cursor over it is live.
pub trait Source<'a> {
    type Cursor: Cursor;

    /// construct a fresh cursor positioned before the first element
    fn cursor(&'a self) -> Self::Cursor;
}
