//! Identity-keyed memoization for derived dashboard values
//!
//! The snapshot store replaces collections wholesale, so an `Arc`'s identity
//! is a reliable change marker: same allocation, same data. The memo keeps a
//! clone of the input `Arc` in its slot, which pins the allocation and makes
//! `Arc::ptr_eq` safe as the comparison - a freed snapshot's address can
//! never be reused while it is still the cache key.

use std::sync::Arc;

use parking_lot::Mutex;

/// Single-slot cache keyed by input snapshot identity
#[derive(Debug)]
pub struct Memo<T, V> {
    slot: Mutex<Option<(Arc<Vec<T>>, Arc<V>)>>,
}

impl<T, V> Memo<T, V> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value for `input`, computing it if the snapshot changed
    pub fn get_or_compute(
        &self,
        input: &Arc<Vec<T>>,
        compute: impl FnOnce(&[T]) -> V,
    ) -> Arc<V> {
        let mut slot = self.slot.lock();

        if let Some((cached_input, value)) = slot.as_ref() {
            if Arc::ptr_eq(cached_input, input) {
                return Arc::clone(value);
            }
        }

        let value = Arc::new(compute(input));
        *slot = Some((Arc::clone(input), Arc::clone(&value)));
        value
    }
}

impl<T, V> Default for Memo<T, V> {
    fn default() -> Self {
        Self::new()
    }
}
