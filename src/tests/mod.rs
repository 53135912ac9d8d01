use super::*;
use crossbeam::scope;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
struct Droppable(Arc<AtomicUsize>);

impl Drop for Droppable {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Panics once its shared clone budget runs out.
#[derive(Debug)]
struct Fragile {
    id: u32,
    budget: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        if self.budget.load(Ordering::SeqCst) == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.fetch_sub(1, Ordering::SeqCst);
        Self {
            id: self.id,
            budget: self.budget.clone(),
            drops: self.drops.clone(),
        }
    }
}

impl Drop for Fragile {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Reports a length it does not honour.
struct Misreported {
    items: std::vec::IntoIter<i32>,
    claimed: usize,
}

impl Iterator for Misreported {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.claimed, Some(self.claimed))
    }
}

impl ExactSizeIterator for Misreported {}

#[test]
fn test_basic_push_pop() {
    let mut v = DynamicArray::new();
    v.push_back(1).unwrap();
    v.push_back(2).unwrap();
    v.push_back(3).unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v[0], 1);
    assert_eq!(v[1], 2);
    assert_eq!(v[2], 3);
    assert_eq!(v.pop_back(), Some(3));
    assert_eq!(v.pop_back(), Some(2));
    assert_eq!(v.pop_back(), Some(1));
    assert_eq!(v.pop_back(), None);
}

#[test]
fn test_insert_erase() {
    let mut v = DynamicArray::new();
    v.push_back(1).unwrap();
    v.push_back(3).unwrap();
    v.insert(v.begin() + 1, 2).unwrap();
    assert_eq!(v.as_ref(), &[1, 2, 3]);
    let next = v.erase(v.begin() + 1);
    assert_eq!(v[next], 3);
    assert_eq!(v.as_ref(), &[1, 3]);
}

#[test]
fn test_grow_and_shrink() {
    let mut v = DynamicArray::with_capacity(2).unwrap();
    assert_eq!(v.capacity(), 2);
    v.push_back(1).unwrap();
    v.push_back(2).unwrap();
    v.push_back(3).unwrap();
    assert_eq!(v.capacity(), 4);
    v.shrink_to_fit().unwrap();
    assert_eq!(v.capacity(), 3);
    v.pop_back();
    v.pop_back();
    v.pop_back();
    v.shrink_to_fit().unwrap();
    assert_eq!(v.capacity(), 0);
    assert!(v.data().is_null());
}

#[test]
fn test_raii_drop() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let mut v = DynamicArray::new();
        for _ in 0..10 {
            v.push_back(Droppable(counter.clone())).unwrap();
        }
    }
    assert_eq!(counter.load(Ordering::SeqCst), 10);
}

#[test]
fn test_clear_drops_elements_and_keeps_capacity() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..5 {
        v.push_back(Droppable(counter.clone())).unwrap();
    }
    let capacity = v.capacity();
    v.clear();
    assert_eq!(counter.load(Ordering::SeqCst), 5);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), capacity);
    assert!(!v.data().is_null());
    drop(v);
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[test]
fn test_truncate_and_erase_drop_removed_elements() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..8 {
        v.push_back(Droppable(counter.clone())).unwrap();
    }
    v.truncate(6);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
    v.erase(v.begin());
    assert_eq!(counter.load(Ordering::SeqCst), 3);
    v.erase_range(v.begin() + 1, v.begin() + 3);
    assert_eq!(counter.load(Ordering::SeqCst), 5);
    assert_eq!(v.len(), 3);
    drop(v);
    assert_eq!(counter.load(Ordering::SeqCst), 8);
}

#[test]
fn test_into_iter_drops_unconsumed() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..4 {
        v.push_back(Droppable(counter.clone())).unwrap();
    }
    let mut iter = v.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(iter.len(), 2);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
    drop(iter);
    assert_eq!(counter.load(Ordering::SeqCst), 4);
}

#[test]
fn test_iterators() {
    let mut v = DynamicArray::new();
    v.push_back(10).unwrap();
    v.push_back(20).unwrap();
    v.push_back(30).unwrap();

    let mut sum = 0;
    for &x in &v {
        sum += x;
    }
    assert_eq!(sum, 60);

    for x in &mut v {
        *x += 1;
    }
    assert_eq!(v[0], 11);

    let collected: Vec<i32> = v.into_iter().collect();
    assert_eq!(collected, vec![11, 21, 31]);
}

#[test]
fn test_concurrency() {
    let mut v = DynamicArray::new();
    for i in 0..100 {
        v.push_back(i).unwrap();
    }

    scope(|s| {
        s.spawn(|_| {
            for x in &v {
                let _ = *x;
            }
        });
        s.spawn(|_| {
            assert_eq!(v.iter().sum::<i32>(), 4950);
        });
    })
    .unwrap();
}

#[test]
fn test_push_without_reallocation_keeps_cursors() {
    let mut v: DynamicArray<i32> = DynamicArray::with_capacity(4).unwrap();
    v.push_back(1).unwrap();
    let generation = v.generation();
    let first = v.begin();
    v.push_back(2).unwrap();
    assert_eq!(v.generation(), generation);
    assert_eq!(v[first], 1);
}

#[test]
fn test_invalidating_operations_bump_generation() {
    let mut v = dynamic_array![1, 2, 3, 4];
    let mut last = v.generation();
    let mut bumped = |v: &DynamicArray<i32>| {
        let changed = v.generation() != last;
        last = v.generation();
        changed
    };

    v.push_back(5).unwrap();
    assert!(bumped(&v));
    v.insert(v.begin(), 0).unwrap();
    assert!(bumped(&v));
    v.erase(v.begin());
    assert!(bumped(&v));
    v.truncate(2);
    assert!(bumped(&v));
    v.clear();
    assert!(bumped(&v));
    let mut other = dynamic_array![9];
    v.swap_with(&mut other);
    assert!(bumped(&v));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "Cursor used after the array was modified")]
fn test_stale_cursor_detected() {
    let mut v = dynamic_array![1, 2, 3];
    let stale = v.begin();
    v.push_back(4).unwrap();
    let _ = v[stale];
}

#[test]
fn test_capacity_limit() {
    assert_eq!(
        DynamicArray::<u8>::with_capacity(MAX_CAPACITY + 1).unwrap_err(),
        Error::CapacityExceeded {
            requested: MAX_CAPACITY + 1,
            max: MAX_CAPACITY
        }
    );

    let mut v = DynamicArray::<u8>::new();
    assert!(matches!(
        v.reserve(MAX_CAPACITY + 1),
        Err(Error::CapacityExceeded { .. })
    ));
    assert_eq!(v.capacity(), 0);
    assert!(matches!(
        v.resize(MAX_CAPACITY + 1, 0),
        Err(Error::CapacityExceeded { .. })
    ));
    assert!(v.is_empty());
}

#[test]
fn test_growth_clamped_to_limit() {
    let mut v = DynamicArray::from_elem(60_000, &0u8).unwrap();
    v.push_back(1).unwrap();
    assert_eq!(v.capacity(), MAX_CAPACITY);

    let mut full = DynamicArray::from_elem(MAX_CAPACITY, &0u8).unwrap();
    assert_eq!(
        full.push_back(1),
        Err(Error::CapacityExceeded {
            requested: MAX_CAPACITY + 1,
            max: MAX_CAPACITY
        })
    );
    assert_eq!(full.len(), MAX_CAPACITY);
    assert_eq!(full.capacity(), MAX_CAPACITY);
    assert!(full.insert_n(full.begin(), 1, &7).is_err());
    assert_eq!(full[0], 0);
}

#[test]
fn test_allocation_failure_leaves_array_untouched() {
    type Huge = [u64; 1 << 40];
    let mut v: DynamicArray<Huge> = DynamicArray::new();
    assert_eq!(
        v.reserve(2_000),
        Err(Error::AllocationFailure { capacity: 2_000 })
    );
    assert_eq!(v.capacity(), 0);
    assert!(v.data().is_null());
}

#[test]
fn test_insert_n_with_panicking_clone_keeps_array_valid() {
    let budget = Arc::new(AtomicUsize::new(usize::MAX));
    let drops = Arc::new(AtomicUsize::new(0));
    let make = |id| Fragile {
        id,
        budget: budget.clone(),
        drops: drops.clone(),
    };

    let mut v = DynamicArray::new();
    for id in 1..=3 {
        v.push_back(make(id)).unwrap();
    }
    let value = make(9);
    budget.store(1, Ordering::SeqCst);

    let result = panic::catch_unwind(AssertUnwindSafe(|| v.insert_n(v.begin() + 1, 3, &value)));
    assert!(result.is_err());

    let ids: Vec<u32> = v.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 9, 2, 3]);
    assert!(v.len() <= v.capacity());

    drop(v);
    drop(value);
    assert_eq!(drops.load(Ordering::SeqCst), 5);
}

#[test]
fn test_insert_range_with_misreported_length() {
    let mut short = dynamic_array![1, 2, 3];
    let items = Misreported {
        items: vec![7, 8].into_iter(),
        claimed: 4,
    };
    let pos = short.insert_range(short.begin() + 1, items).unwrap();
    assert_eq!(short, [1, 7, 8, 2, 3]);
    assert_eq!(short[pos], 7);
    assert_eq!(short.capacity(), 14);

    let mut long = dynamic_array![1, 2, 3];
    let items = Misreported {
        items: vec![7, 8].into_iter(),
        claimed: 1,
    };
    long.insert_range(long.begin() + 1, items).unwrap();
    assert_eq!(long, [1, 7, 2, 3]);
}

#[test]
fn test_zero_sized_elements() {
    let mut v = DynamicArray::new();
    for _ in 0..5 {
        v.push_back(()).unwrap();
    }
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 8);
    assert!(v.data().is_null());
    v.erase(v.begin());
    v.insert_n(v.end(), 2, &()).unwrap();
    assert_eq!(v.len(), 6);
    v.shrink_to_fit().unwrap();
    assert_eq!(v.capacity(), 6);
    assert_eq!(v.into_iter().count(), 6);
}

#[test]
fn test_take_leaves_source_unallocated() {
    let mut source = dynamic_array![String::from("a"), String::from("b")];
    let before = source.generation();
    let moved = source.take();
    assert_eq!(moved, [String::from("a"), String::from("b")]);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 0);
    assert!(source.data().is_null());
    assert_ne!(source.generation(), before);

    let mut never_allocated: DynamicArray<String> = DynamicArray::new();
    let empty = never_allocated.take();
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

#[test]
#[should_panic(expected = "Index out of bounds")]
fn test_out_of_bounds_erase() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    v.erase(v.begin());
}

#[test]
#[should_panic(expected = "Index out of bounds")]
fn test_out_of_bounds_insert() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    let _ = v.insert(v.begin() + 1, 10);
}
