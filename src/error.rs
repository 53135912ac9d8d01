use thiserror::Error;

/// Failures reported by [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Checked access with an index outside `[0, len)`.
    #[error("Accessing out of bounds: index {index} with length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Growth would need more slots than the array may ever hold.
    #[error("Capacity exceeded: {requested} slots requested, maximum is {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// The allocator could not provide storage for `capacity` slots.
    #[error("Allocation failed for {capacity} slots")]
    AllocationFailure { capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
