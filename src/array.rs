use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice;

use crate::cursor::{Cursor, RevCursor};
use crate::error::{Error, Result};
use crate::raw::RawBuffer;

/// Largest number of slots a [`DynamicArray`] will ever allocate.
pub const MAX_CAPACITY: usize = 100_000;

/// A contiguous, growable array with explicit capacity management.
///
/// Elements live in `[0, len)` of a single owned buffer of `capacity` slots.
/// Appending at full capacity doubles the buffer (an empty array goes to one
/// slot), so a run of appends costs amortized *O*(1) each. Capacity never
/// exceeds [`MAX_CAPACITY`]; growth past it fails with
/// [`Error::CapacityExceeded`] and leaves the array as it was.
///
/// Positions are expressed with [`Cursor`] and [`RevCursor`], which carry
/// the invalidation rules of raw pointers (see their docs).
///
/// The array performs no synchronization. It is `Send`/`Sync` when `T` is,
/// and mutation from several threads needs an external lock.
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    generation: u64,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Nothing is allocated.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            generation: 0,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] above [`MAX_CAPACITY`],
    /// [`Error::AllocationFailure`] if the allocator refuses.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        check_limit(capacity)?;
        Ok(Self {
            buf: RawBuffer::allocate(capacity)?,
            len: 0,
            generation: 0,
        })
    }

    /// Creates an array of `len` default values, sized exactly.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::with_capacity`].
    pub fn with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len)?;
        array.fill_to(len, T::default);
        Ok(array)
    }

    /// Creates an array of `len` copies of `value`, sized exactly.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::with_capacity`].
    pub fn from_elem(len: usize, value: &T) -> Result<Self>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len)?;
        array.fill_to(len, || value.clone());
        Ok(array)
    }

    /// Creates an array holding copies of `items` in order, sized exactly.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::with_capacity`].
    pub fn from_slice(items: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::try_from_iter(items.iter().cloned())
    }

    /// Creates an array from a sequence of known length, sized exactly.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::with_capacity`].
    pub fn try_from_iter<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let mut array = Self::with_capacity(items.len())?;
        for item in items {
            array.push_back(item)?;
        }
        Ok(array)
    }

    /// Moves the elements out into a new array, leaving `self` empty and
    /// unallocated. No element is copied.
    pub fn take(&mut self) -> Self {
        let next = self.generation.wrapping_add(1);
        let taken = mem::take(self);
        self.generation = next;
        taken
    }

    /// Releases the current elements and adopts those of `other`, which is
    /// left empty and unallocated.
    pub fn move_from(&mut self, other: &mut Self) {
        let next = self.generation.wrapping_add(1);
        *self = other.take();
        self.generation = next;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The fixed upper bound on capacity, [`MAX_CAPACITY`].
    pub const fn max_size(&self) -> usize {
        MAX_CAPACITY
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice().get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// # Errors
    ///
    /// [`Error::OutOfRange`] on an empty array.
    pub fn front(&self) -> Result<&T> {
        self.at(0)
    }

    /// # Errors
    ///
    /// [`Error::OutOfRange`] on an empty array.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.at_mut(0)
    }

    /// # Errors
    ///
    /// [`Error::OutOfRange`] on an empty array.
    pub fn back(&self) -> Result<&T> {
        self.at(self.len.saturating_sub(1))
    }

    /// # Errors
    ///
    /// [`Error::OutOfRange`] on an empty array.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.at_mut(self.len.saturating_sub(1))
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index` must be below `len`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len`.
        unsafe { &*self.slot(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index` must be below `len`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len`.
        unsafe { &mut *self.slot(index) }
    }

    /// Start of the buffer, or null while nothing is allocated.
    pub fn data(&self) -> *const T {
        if self.buf.is_allocated() {
            self.buf.as_ptr()
        } else {
            ptr::null()
        }
    }

    /// Mutable start of the buffer, or null while nothing is allocated.
    pub fn data_mut(&mut self) -> *mut T {
        if self.buf.is_allocated() {
            self.buf.as_ptr()
        } else {
            ptr::null_mut()
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is non-null and aligned
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` makes the access unique.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Grows the buffer to exactly `new_capacity` slots. Never shrinks.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] above [`MAX_CAPACITY`],
    /// [`Error::AllocationFailure`] if the allocator refuses. The array is
    /// unchanged on error.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// Shrinks the buffer to exactly `len` slots, releasing it when empty.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the allocator refuses; the array is
    /// unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity() != self.len {
            self.reallocate(self.len)?;
        }
        Ok(())
    }

    /// Appends `value`, doubling the capacity when full.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] when the array already holds
    /// [`MAX_CAPACITY`] elements, [`Error::AllocationFailure`] if growth
    /// fails. `value` is dropped and the array is unchanged on error.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.grow_for_append()?;
        self.write_next(value);
        Ok(())
    }

    /// Appends an element built from `args` directly in its slot.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::push_back`].
    pub fn emplace_back<A: Into<T>>(&mut self, args: A) -> Result<&mut T> {
        self.grow_for_append()?;
        let index = self.len;
        self.write_next(args.into());
        // SAFETY: the slot at `index` was just initialized.
        Ok(unsafe { &mut *self.slot(index) })
    }

    /// Removes the last element and returns it.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: the slot at the old `len - 1` is initialized and now out of reach.
            Some(unsafe { ptr::read(self.slot(self.len)) })
        }
    }

    /// Builds an element from `args` at `pos`, shifting the tail right.
    /// Growth follows the append policy. Returns the new element's position.
    ///
    /// # Panics
    ///
    /// If `pos` lies past `end()`.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::push_back`].
    pub fn emplace<A: Into<T>>(&mut self, pos: Cursor, args: A) -> Result<Cursor> {
        // The offset must be taken before growth replaces the buffer `pos` points into.
        let offset = self.insert_offset(pos);
        self.grow_for_append()?;
        Ok(self.insert_one(offset, args.into()))
    }

    /// Inserts `value` at `pos`, shifting the tail right. Returns the
    /// position of the inserted element.
    ///
    /// # Panics
    ///
    /// If `pos` lies past `end()`.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::push_back`].
    pub fn insert(&mut self, pos: Cursor, value: T) -> Result<Cursor> {
        let offset = self.insert_offset(pos);
        self.grow_for_insert(1)?;
        Ok(self.insert_one(offset, value))
    }

    /// Inserts `count` copies of `value` at `pos`. Returns the position of
    /// the first inserted element.
    ///
    /// # Panics
    ///
    /// If `pos` lies past `end()`.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] when `len + count` exceeds
    /// [`MAX_CAPACITY`], [`Error::AllocationFailure`] if growth fails.
    pub fn insert_n(&mut self, pos: Cursor, count: usize, value: &T) -> Result<Cursor>
    where
        T: Clone,
    {
        let offset = self.insert_offset(pos);
        self.grow_for_insert(count)?;
        let mut gap = Gap::open(self, offset, count);
        while gap.filled < gap.count {
            gap.fill(value.clone());
        }
        drop(gap);
        Ok(self.invalidate_at(offset))
    }

    /// Inserts every element of `items`, in order, at `pos`. Returns the
    /// position of the first inserted element.
    ///
    /// Capacity is sized from the reported length up front. A sequence that
    /// ends early leaves no hole; one that runs long is cut at its reported
    /// length.
    ///
    /// # Panics
    ///
    /// If `pos` lies past `end()`.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::insert_n`].
    pub fn insert_range<I>(&mut self, pos: Cursor, items: I) -> Result<Cursor>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let offset = self.insert_offset(pos);
        let items = items.into_iter();
        let count = items.len();
        self.grow_for_insert(count)?;
        let mut gap = Gap::open(self, offset, count);
        for item in items.take(count) {
            gap.fill(item);
        }
        drop(gap);
        Ok(self.invalidate_at(offset))
    }

    /// Removes the element at `pos`, shifting the tail left. Returns the
    /// position now holding the following element (`end()` if it was last).
    ///
    /// # Panics
    ///
    /// If `pos` does not refer to an element.
    pub fn erase(&mut self, pos: Cursor) -> Cursor {
        let offset = self.offset_of(pos);
        assert!(offset < self.len, "Index out of bounds");
        self.erase_offsets(offset, offset + 1)
    }

    /// Removes the elements in `[first, last)`. Returns `first`'s position in
    /// the shortened array.
    ///
    /// # Panics
    ///
    /// If the range is reversed or reaches past `end()`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        let start = self.offset_of(first);
        let end = self.offset_of(last);
        assert!(start <= end && end <= self.len, "Index out of bounds");
        self.erase_offsets(start, end)
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: `[0, len)` was initialized and is out of reach now.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), len)) };
        self.invalidate();
    }

    /// Drops the elements from `len` onwards. No-op when `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let removed = self.len - len;
        self.len = len;
        // SAFETY: `[len, len + removed)` was initialized and is out of reach now.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.slot(len), removed)) };
        self.invalidate();
    }

    /// Resizes to `count` elements, filling new slots with copies of `value`.
    ///
    /// Growing reserves exactly `count` slots when the buffer is too small;
    /// shrinking only truncates.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::reserve`].
    pub fn resize(&mut self, count: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        if count > self.len {
            self.reserve(count)?;
            self.fill_to(count, || value.clone());
        } else {
            self.truncate(count);
        }
        Ok(())
    }

    /// Resizes to `count` elements, filling new slots with `T::default()`.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::reserve`].
    pub fn resize_default(&mut self, count: usize) -> Result<()>
    where
        T: Default,
    {
        if count > self.len {
            self.reserve(count)?;
            self.fill_to(count, T::default);
        } else {
            self.truncate(count);
        }
        Ok(())
    }

    /// Exchanges buffers with `other` in *O*(1). Nothing is copied or allocated.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
        self.invalidate();
        other.invalidate();
    }

    pub fn begin(&self) -> Cursor {
        Cursor::new(0, self.generation)
    }

    pub fn end(&self) -> Cursor {
        Cursor::new(self.len, self.generation)
    }

    pub fn cbegin(&self) -> Cursor {
        self.begin()
    }

    pub fn cend(&self) -> Cursor {
        self.end()
    }

    /// Refers to the last element; its base is `end()`.
    pub fn rbegin(&self) -> RevCursor {
        RevCursor::new(self.len, self.generation)
    }

    /// One before the first element; its base is `begin()`.
    pub fn rend(&self) -> RevCursor {
        RevCursor::new(0, self.generation)
    }

    pub fn crbegin(&self) -> RevCursor {
        self.rbegin()
    }

    pub fn crend(&self) -> RevCursor {
        self.rend()
    }

    /// The elements in `[first, last)`.
    ///
    /// # Panics
    ///
    /// If the range is reversed or reaches past `end()`.
    pub fn range(&self, first: Cursor, last: Cursor) -> &[T] {
        let start = self.offset_of(first);
        let end = self.offset_of(last);
        assert!(start <= end && end <= self.len, "Index out of bounds");
        &self.as_slice()[start..end]
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        (mem::replace(&mut this.buf, RawBuffer::new()), this.len)
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    fn slot(&self, index: usize) -> *mut T {
        self.buf.as_ptr().wrapping_add(index)
    }

    fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: `len < capacity`, so the slot is allocated and unoccupied.
        unsafe { ptr::write(self.slot(self.len), value) };
        self.len += 1;
    }

    // `len` grows one slot at a time, so a panicking `next` leaves a valid array.
    fn fill_to(&mut self, target: usize, mut next: impl FnMut() -> T) {
        debug_assert!(target <= self.capacity());
        while self.len < target {
            self.write_next(next());
        }
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn invalidate_at(&mut self, offset: usize) -> Cursor {
        self.invalidate();
        Cursor::new(offset, self.generation)
    }

    fn offset_of(&self, pos: Cursor) -> usize {
        debug_assert_eq!(
            pos.generation(),
            self.generation,
            "Cursor used after the array was modified"
        );
        pos.offset()
    }

    fn insert_offset(&self, pos: Cursor) -> usize {
        let offset = self.offset_of(pos);
        assert!(offset <= self.len, "Index out of bounds");
        offset
    }

    /// The single place where the buffer identity changes.
    fn reallocate(&mut self, target: usize) -> Result<()> {
        check_limit(target)?;
        debug_assert!(target >= self.len);
        self.buf.resize(target)?;
        self.invalidate();
        Ok(())
    }

    fn grow_for_append(&mut self) -> Result<()> {
        let cap = self.capacity();
        if self.len < cap {
            return Ok(());
        }
        let target = if cap == 0 { 1 } else { cap.saturating_mul(2) };
        self.grow_to(self.len + 1, target)
    }

    // Doubles the required total rather than the shortfall.
    fn grow_for_insert(&mut self, count: usize) -> Result<()> {
        let required = self.len.saturating_add(count);
        if required <= self.capacity() {
            return Ok(());
        }
        self.grow_to(required, required.saturating_mul(2))
    }

    fn grow_to(&mut self, required: usize, target: usize) -> Result<()> {
        check_limit(required)?;
        self.reallocate(target.min(MAX_CAPACITY))
    }

    fn insert_one(&mut self, offset: usize, value: T) -> Cursor {
        debug_assert!(self.len < self.capacity());
        // SAFETY: there is a free slot past the tail, so shifting `[offset, len)`
        // right by one stays in bounds; the freed slot is written right away.
        unsafe {
            ptr::copy(self.slot(offset), self.slot(offset + 1), self.len - offset);
            ptr::write(self.slot(offset), value);
        }
        self.len += 1;
        self.invalidate_at(offset)
    }

    fn erase_offsets(&mut self, start: usize, end: usize) -> Cursor {
        let tail = self.len - end;
        // A panicking destructor leaks the tail instead of dropping it twice.
        self.len = start;
        // SAFETY: `[start, end)` is initialized and out of reach; the tail is
        // moved over it afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.slot(start), end - start));
            ptr::copy(self.slot(end), self.slot(start), tail);
        }
        self.len = start + tail;
        self.invalidate_at(start)
    }
}

fn check_limit(capacity: usize) -> Result<()> {
    if capacity > MAX_CAPACITY {
        log::debug!("rejected growth to {capacity} slots");
        return Err(Error::CapacityExceeded {
            requested: capacity,
            max: MAX_CAPACITY,
        });
    }
    Ok(())
}

/// A run of `count` unoccupied slots at `start`, opened by shifting the tail
/// right.
///
/// While the gap is open the array's `len` stops at `start`. Dropping the gap
/// moves the tail back over any slots left unfilled and restores `len`, so a
/// panic or a short sequence never leaves a hole.
struct Gap<'a, T> {
    array: &'a mut DynamicArray<T>,
    start: usize,
    count: usize,
    filled: usize,
    tail: usize,
}

impl<'a, T> Gap<'a, T> {
    fn open(array: &'a mut DynamicArray<T>, start: usize, count: usize) -> Self {
        debug_assert!(array.len + count <= array.capacity());
        let tail = array.len - start;
        // SAFETY: `len + count <= capacity`, so the shifted tail stays in bounds.
        unsafe { ptr::copy(array.slot(start), array.slot(start + count), tail) };
        array.len = start;
        Self {
            array,
            start,
            count,
            filled: 0,
            tail,
        }
    }

    fn fill(&mut self, value: T) {
        debug_assert!(self.filled < self.count);
        // SAFETY: slots in `[start + filled, start + count)` are unoccupied.
        unsafe { ptr::write(self.array.slot(self.start + self.filled), value) };
        self.filled += 1;
    }
}

impl<T> Drop for Gap<'_, T> {
    fn drop(&mut self) {
        let written_end = self.start + self.filled;
        if self.filled < self.count {
            // SAFETY: both ranges lie within the buffer; `ptr::copy` allows overlap.
            unsafe {
                ptr::copy(
                    self.array.slot(self.start + self.count),
                    self.array.slot(written_end),
                    self.tail,
                );
            }
        }
        self.array.len = written_end + self.tail;
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is initialized; the buffer frees the memory afterwards.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len)) };
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Copies the elements into a buffer sized to `len`; spare capacity is
    /// not carried over.
    fn clone(&self) -> Self {
        let mut copy = Self {
            buf: RawBuffer::allocate_or_abort(self.len),
            len: 0,
            generation: 0,
        };
        for item in self {
            copy.write_next(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        let next = self.generation.wrapping_add(1);
        *self = source.clone();
        self.generation = next;
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

/// Subscript access. Out-of-bounds indices are a caller bug and panic like
/// slice indexing; use [`DynamicArray::at`] for a checked result.
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Cursor> for DynamicArray<T> {
    type Output = T;

    fn index(&self, pos: Cursor) -> &T {
        let offset = self.offset_of(pos);
        &self.as_slice()[offset]
    }
}

impl<T> IndexMut<Cursor> for DynamicArray<T> {
    fn index_mut(&mut self, pos: Cursor) -> &mut T {
        let offset = self.offset_of(pos);
        &mut self.as_mut_slice()[offset]
    }
}

impl<T> Index<RevCursor> for DynamicArray<T> {
    type Output = T;

    fn index(&self, pos: RevCursor) -> &T {
        let base = self.offset_of(pos.base());
        assert!(base > 0, "Index out of bounds");
        &self.as_slice()[base - 1]
    }
}

impl<T> IndexMut<RevCursor> for DynamicArray<T> {
    fn index_mut(&mut self, pos: RevCursor) -> &mut T {
        let base = self.offset_of(pos.base());
        assert!(base > 0, "Index out of bounds");
        &mut self.as_mut_slice()[base - 1]
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Equal lengths, then element by element; stops at the first mismatch.
impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Each element followed by a single space: `[1, 2, 3]` renders as `"1 2 3 "`.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self {
            write!(f, "{item} ")?;
        }
        Ok(())
    }
}
