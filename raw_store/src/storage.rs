use bytemuck::{Pod, Zeroable};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::StoreError;

/// The low-level storage backend: an exclusively owned `Vec<T>`.
///
/// Every growing operation is funneled through the fallible
/// `try_reserve` API so that allocation failure becomes a
/// [`StoreError`] for the caller instead of an abort.
#[derive(Debug, Clone)]
pub struct Storage<T: Pod> {
    items: Vec<T>,
}

impl<T: Pod> Storage<T> {
    /// Create empty in-memory storage. Never allocates.
    pub const fn new_in_memory() -> Self {
        Storage { items: Vec::new() }
    }

    /// Allocates storage for exactly `len` zero-initialized elements.
    pub fn zeroed(len: usize) -> Result<Self, StoreError> {
        let mut items = Vec::new();
        items.try_reserve_exact(len)?;
        items.resize(len, T::zeroed());
        Ok(Storage { items })
    }

    /// Copies a slice into fresh in-memory storage.
    pub fn from_slice(values: &[T]) -> Self {
        Storage {
            items: values.to_vec(),
        }
    }

    /// Return element count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push an element, growing through the fallible allocator path.
    pub fn push(&mut self, value: T) -> Result<(), StoreError> {
        self.items.try_reserve(1)?;
        self.items.push(value);
        Ok(())
    }

    /// Read a reference to element `index`.
    pub fn get(&self, index: usize) -> Result<&T, StoreError> {
        self.items.get(index).ok_or(StoreError::OutOfBounds(index))
    }

    /// Read a mutable reference to element `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::OutOfBounds(index));
        }
        Ok(&mut self.items[index])
    }

    /// Grows or shrinks to exactly `new_len` elements.
    ///
    /// New slots are zero-initialized; shrinking releases the excess
    /// allocation. On allocation failure the contents and length are
    /// left untouched.
    pub fn resize_exact(&mut self, new_len: usize) -> Result<(), StoreError> {
        if new_len > self.items.len() {
            self.items.try_reserve_exact(new_len - self.items.len())?;
            self.items.resize(new_len, T::zeroed());
        } else {
            self.items.truncate(new_len);
            self.items.shrink_to_fit();
        }
        Ok(())
    }

    /// Overwrites every element with zeroes.
    pub fn fill_zero(&mut self) {
        self.items.fill(T::zeroed());
    }

    /// Append elements from a slice.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), StoreError> {
        self.items.try_reserve(values.len())?;
        self.items.extend_from_slice(values);
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}
