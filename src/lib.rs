//! A contiguous, growable array with explicit capacity management.
//!
//! [`DynamicArray`] owns a single buffer, grows it by doubling, and exposes
//! cursor-based editing ([`Cursor`], [`RevCursor`]) alongside the usual slice
//! access. Growth is fallible: every operation that may allocate returns
//! [`Result`].

mod array;
mod cursor;
mod error;
mod iter;
mod raw;

pub use array::{DynamicArray, MAX_CAPACITY};
pub use cursor::{Cursor, RevCursor};
pub use error::{Error, Result};
pub use iter::IntoIter;

/// Builds a [`DynamicArray`] sized exactly to its contents.
///
/// `dynamic_array![a, b, c]` holds the listed elements in order and
/// `dynamic_array![value; n]` holds `n` copies of `value`.
///
/// # Panics
///
/// If the contents exceed [`MAX_CAPACITY`] or cannot be allocated.
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        match $crate::DynamicArray::from_elem($n, &$elem) {
            Ok(array) => array,
            Err(err) => panic!("{}", err),
        }
    };
    ($($x:expr),+ $(,)?) => {
        match $crate::DynamicArray::try_from_iter([$($x),+]) {
            Ok(array) => array,
            Err(err) => panic!("{}", err),
        }
    };
}

#[cfg(test)]
mod tests;
