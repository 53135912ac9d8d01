use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// Exclusively owned storage for `cap` slots of `T`.
///
/// The buffer knows nothing about which slots hold live values: dropping it
/// releases the memory and nothing else. Zero-sized layouts (no capacity, or
/// a zero-sized `T`) never touch the allocator and keep a dangling pointer.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer owns its slots, so moving it across threads moves the `T`s.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access to the buffer only hands out shared access to the `T`s.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn allocate(cap: usize) -> Result<Self> {
        let mut buf = Self::new();
        buf.resize(cap)?;
        Ok(buf)
    }

    /// Like [`RawBuffer::allocate`], for callers that cannot report errors.
    pub(crate) fn allocate_or_abort(cap: usize) -> Self {
        match Self::allocate(cap) {
            Ok(buf) => buf,
            Err(_) => match Layout::array::<T>(cap) {
                Ok(layout) => alloc::handle_alloc_error(layout),
                Err(_) => panic!("Capacity overflow"),
            },
        }
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// True when a real allocation backs the buffer.
    pub(crate) fn is_allocated(&self) -> bool {
        self.cap != 0 && size_of::<T>() != 0
    }

    /// Moves the slots to a block of exactly `new_cap` slots.
    ///
    /// Slot contents are carried over bitwise up to `min(cap, new_cap)`. On
    /// error the current block is left untouched.
    pub(crate) fn resize(&mut self, new_cap: usize) -> Result<()> {
        if new_cap == self.cap {
            return Ok(());
        }

        let failure = Error::AllocationFailure { capacity: new_cap };
        let new_layout = Layout::array::<T>(new_cap).map_err(|_| {
            log::debug!("layout for {new_cap} slots overflows");
            failure
        })?;
        let old_layout = Layout::array::<T>(self.cap).map_err(|_| failure)?;

        let new_ptr = if new_layout.size() == 0 {
            if old_layout.size() != 0 {
                // SAFETY: `ptr` was allocated with `old_layout`.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
            }
            NonNull::dangling()
        } else {
            let raw = if old_layout.size() == 0 {
                // SAFETY: `new_layout` has a non-zero size.
                unsafe { alloc::alloc(new_layout) }
            } else {
                // SAFETY: `ptr` was allocated with `old_layout`, and the new size
                // comes from a valid layout with the same alignment.
                unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
            };
            match NonNull::new(raw.cast::<T>()) {
                Some(ptr) => ptr,
                None => {
                    log::debug!("allocator refused {} bytes", new_layout.size());
                    return Err(failure);
                }
            }
        };

        log::trace!("storage moved: {} -> {} slots", self.cap, new_cap);
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            if layout.size() != 0 {
                log::trace!("storage released: {} slots", self.cap);
                // SAFETY: `ptr` was allocated with this layout and is released only here.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
    }
}
