use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::array::DynamicArray;
use crate::raw::RawBuffer;

/// Owning iterator over the elements of a [`DynamicArray`].
///
/// Elements not yet yielded are dropped together with the iterator, and the
/// buffer is released after them.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is initialized and owned by the iterator.
        unsafe { slice::from_raw_parts(self.slot(self.start), self.end - self.start) }
    }

    fn slot(&self, index: usize) -> *mut T {
        self.buf.as_ptr().wrapping_add(index)
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_raw_parts();
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            let index = self.start;
            self.start += 1;
            // SAFETY: the slot is initialized and leaves the live range here.
            Some(unsafe { ptr::read(self.slot(index)) })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            self.end -= 1;
            // SAFETY: the slot is initialized and leaves the live range here.
            Some(unsafe { ptr::read(self.slot(self.end)) })
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(self.slot(self.start), self.end - self.start);
        // SAFETY: the remaining elements are initialized and never yielded.
        unsafe { ptr::drop_in_place(remaining) };
    }
}
