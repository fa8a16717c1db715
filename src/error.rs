use thiserror::Error;

/// Errors surfaced by cursor consumers and source lookup.
///
/// Traversal exhaustion is never an error, a cursor reports it through its
/// terminal [`Step::Done`](crate::Step::Done) state instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrideError {
    #[error("no dataset named {0:?} is registered")]
    UnknownSource(String),

    #[error("reading {1} at position {0} is outside the accepted range")]
    OutOfRange(usize, i64),
}
