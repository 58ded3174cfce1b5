pub mod author;
pub mod book;

use std::fmt;

pub use author::{Author, AuthorBuilder};
pub use book::Book;

/// Renders an optional value, printing `null` when it is absent.
pub(crate) struct Nullable<'a, T: ?Sized>(pub Option<&'a T>);

impl<T: fmt::Display + ?Sized> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}
