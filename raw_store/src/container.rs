use crate::{StoreError, Storage};
use bytemuck::Pod;

/// High-level container for typed elements backed by owned storage.
///
/// `Container<T>` is a thin, unified interface over [`Storage`], where `T`
/// must implement [`bytemuck::Pod`] (Plain Old Data) so elements can be
/// zero-initialized and resized in bulk.
///
/// # Examples
///
/// ```
/// use raw_store::Container;
/// use bytemuck_derive::{Pod, Zeroable};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
/// struct Packet {
///     id: u32,
///     value: f32,
/// }
///
/// let mut container = Container::<Packet>::new();
///
/// container.push(Packet { id: 1, value: 10.0 }).unwrap();
/// container.push(Packet { id: 2, value: 20.0 }).unwrap();
///
/// assert_eq!(container.len(), 2);
/// assert_eq!(container.get(0).unwrap().id, 1);
///
/// container.write(0, Packet { id: 99, value: 99.0 }).unwrap();
/// assert_eq!(container.get(0).unwrap().id, 99);
/// ```
#[derive(Debug, Clone)]
pub struct Container<T: Pod> {
    storage: Storage<T>,
}

impl<T: Pod> Container<T> {
    /// Creates an empty container. Never allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_store::Container;
    ///
    /// let container = Container::<u8>::new();
    /// assert!(container.is_empty());
    /// ```
    pub const fn new() -> Self {
        Container {
            storage: Storage::new_in_memory(),
        }
    }

    /// Creates a container of exactly `len` zero-initialized elements.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Alloc`] when the allocator cannot satisfy
    /// the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_store::Container;
    ///
    /// let container = Container::<u8>::zeroed(16).unwrap();
    /// assert_eq!(container.len(), 16);
    /// assert!(container.iter().all(|&b| b == 0));
    /// ```
    pub fn zeroed(len: usize) -> Result<Self, StoreError> {
        Ok(Container {
            storage: Storage::zeroed(len)?,
        })
    }

    /// Creates a container from a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_store::Container;
    ///
    /// let container = Container::from_slice(&[1u8, 2, 3]);
    /// assert_eq!(container.len(), 3);
    /// assert_eq!(container[1], 2);
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        Container {
            storage: Storage::from_slice(values),
        }
    }

    /// Returns the number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the container contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, StoreError> {
        self.storage.get(index)
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, StoreError> {
        self.storage.get_mut(index)
    }

    /// Writes a value to the element at the given index.
    ///
    /// Convenience equivalent to `*container.get_mut(index)? = value`.
    pub fn write(&mut self, index: usize, value: T) -> Result<(), StoreError> {
        let slot = self.storage.get_mut(index)?;
        *slot = value;
        Ok(())
    }

    /// Appends an element to the back of the container.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Alloc`] when growing the buffer fails.
    pub fn push(&mut self, value: T) -> Result<(), StoreError> {
        self.storage.push(value)
    }

    /// Extend with elements from a slice.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), StoreError> {
        self.storage.extend_from_slice(values)
    }

    /// Grows or shrinks the container to exactly `new_len` elements.
    ///
    /// New slots are zero-initialized; shrinking releases the excess
    /// allocation rather than keeping it around. On allocation failure
    /// the contents and length are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_store::Container;
    ///
    /// let mut container = Container::from_slice(&[1u8, 2]);
    /// container.resize_exact(4).unwrap();
    /// assert_eq!(container.as_slice(), &[1, 2, 0, 0]);
    ///
    /// container.resize_exact(1).unwrap();
    /// assert_eq!(container.as_slice(), &[1]);
    /// ```
    pub fn resize_exact(&mut self, new_len: usize) -> Result<(), StoreError> {
        self.storage.resize_exact(new_len)
    }

    /// Overwrites every element with zeroes in one bulk pass.
    pub fn fill_zero(&mut self) {
        self.storage.fill_zero();
    }

    /// Returns an immutable slice view of all elements.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns a mutable slice view of all elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Returns an iterator over elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over elements.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

// Implement Index for convenient access
impl<T: Pod> core::ops::Index<usize> for Container<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<T: Pod> core::ops::IndexMut<usize> for Container<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("index out of bounds")
    }
}

impl<T: Pod> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}
