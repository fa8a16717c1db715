//! Pull-based sequence cursors.
//!
//! A [`Cursor`] traverses one fixed source collection, producing one element
//! per [`Cursor::advance`] until it reports [`Step::Done`]; exhaustion is a
//! terminal state, not an error, and advancing an exhausted cursor keeps
//! reporting [`Step::Done`]. Two producers are provided: [`SliceCursor`] over
//! an indexed sequence, and [`KeyCursor`] over the key set of a string-keyed
//! mapping. Collections hand out cursors through the [`Source`] factory trait.

mod cursor;
mod error;
mod keys;
mod log;
mod slice;

pub use cursor::{Cursor, Source, Step};
pub use error::StrideError;
pub use keys::KeyCursor;
pub use log::{LogLevel, Logger};
pub use slice::SliceCursor;
