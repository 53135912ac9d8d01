use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A position inside a [`DynamicArray`](crate::DynamicArray), counted from
/// `begin()`.
///
/// A cursor does not borrow the array it came from, so it can be handed
/// back to mutating operations such as `insert` or `erase`. In exchange it
/// follows the invalidation rules of a raw pointer: any operation that
/// reallocates or shifts elements (growth, insert, emplace, erase, clear,
/// truncation, swap) invalidates every cursor taken before it. Debug builds
/// detect the use of a stale cursor and panic; release builds do not check.
///
/// Cursors compare by position only.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    offset: usize,
    generation: u64,
}

impl Cursor {
    pub(crate) const fn new(offset: usize, generation: u64) -> Self {
        Self { offset, generation }
    }

    /// Distance from `begin()`.
    pub const fn offset(self) -> usize {
        self.offset
    }

    pub(crate) const fn generation(self) -> u64 {
        self.generation
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Cursor {}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Hash for Cursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(self, n: usize) -> Cursor {
        Cursor::new(self.offset + n, self.generation)
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    fn sub(self, n: usize) -> Cursor {
        assert!(n <= self.offset, "Cursor moved before begin");
        Cursor::new(self.offset - n, self.generation)
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

impl Sub for Cursor {
    type Output = isize;

    fn sub(self, rhs: Cursor) -> isize {
        self.offset as isize - rhs.offset as isize
    }
}

/// A position for walking a [`DynamicArray`](crate::DynamicArray) back to
/// front.
///
/// A reverse cursor wraps a forward position, its [`base`](RevCursor::base),
/// and refers to the element just before it: `rbegin()` has `end()` as its
/// base and refers to the last element, `rend()` has `begin()` as its base.
/// Advancing a reverse cursor moves its base towards the front.
///
/// The invalidation rules of [`Cursor`] apply unchanged.
#[derive(Debug, Clone, Copy)]
pub struct RevCursor {
    base: usize,
    generation: u64,
}

impl RevCursor {
    pub(crate) const fn new(base: usize, generation: u64) -> Self {
        Self { base, generation }
    }

    /// The forward position one past the referenced element.
    pub const fn base(self) -> Cursor {
        Cursor::new(self.base, self.generation)
    }
}

impl From<Cursor> for RevCursor {
    fn from(cursor: Cursor) -> Self {
        RevCursor::new(cursor.offset, cursor.generation)
    }
}

impl PartialEq for RevCursor {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for RevCursor {}

impl PartialOrd for RevCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RevCursor {
    // Further along in reverse order means closer to the front.
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}

impl Hash for RevCursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
    }
}

impl Add<usize> for RevCursor {
    type Output = RevCursor;

    fn add(self, n: usize) -> RevCursor {
        assert!(n <= self.base, "Cursor moved past rend");
        RevCursor::new(self.base - n, self.generation)
    }
}

impl AddAssign<usize> for RevCursor {
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

impl Sub<usize> for RevCursor {
    type Output = RevCursor;

    fn sub(self, n: usize) -> RevCursor {
        RevCursor::new(self.base + n, self.generation)
    }
}

impl SubAssign<usize> for RevCursor {
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

impl Sub for RevCursor {
    type Output = isize;

    fn sub(self, rhs: RevCursor) -> isize {
        rhs.base as isize - self.base as isize
    }
}
