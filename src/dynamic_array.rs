//! DynamicArray: growable contiguous sequence of `i32`.
//!
//! The buffer always holds exactly `capacity` slots; only `[0, len)` is
//! live. Capacity starts at `INITIAL_CAPACITY`, doubles when a push finds
//! the buffer full, and never shrinks: `pop_back` only shortens `len`.

use core::fmt;

/// Capacity of a new array and the floor for `with_capacity`.
pub const INITIAL_CAPACITY: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArrayError {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: isize, len: usize },
}

#[derive(Clone)]
pub struct DynamicArray {
    buf: Box<[i32]>,
    len: usize,
}

fn allocate(capacity: usize) -> Box<[i32]> {
    core::iter::repeat(0).take(capacity).collect()
}

impl DynamicArray {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Empty array with room for `capacity` elements, at least
    /// `INITIAL_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: allocate(capacity.max(INITIAL_CAPACITY)),
            len: 0,
        }
    }

    // Move the live prefix into a fresh buffer; the old one is dropped.
    fn reallocate(&mut self, new_capacity: usize) {
        log::trace!(
            "reallocating dynamic array from {} to {new_capacity} slots",
            self.capacity()
        );
        let mut next = allocate(new_capacity);
        next[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = next;
    }

    /// Append `value`, doubling the capacity first if the buffer is full.
    pub fn push_back(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.reallocate(self.capacity() * 2);
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Drop the last element. Does nothing on an empty array.
    pub fn pop_back(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    fn checked(&self, index: isize) -> Result<usize, ArrayError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.len)
            .ok_or(ArrayError::OutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn get(&self, index: isize) -> Result<i32, ArrayError> {
        let i = self.checked(index)?;
        Ok(self.buf[i])
    }

    pub fn set(&mut self, index: isize, value: i32) -> Result<(), ArrayError> {
        let i = self.checked(index)?;
        self.buf[i] = value;
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.len
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.buf[..self.len].iter(),
        }
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<i32> for DynamicArray {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl FromIterator<i32> for DynamicArray {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live elements of a `DynamicArray`, front to back.
pub struct Iter<'a> {
    it: core::slice::Iter<'a, i32>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.it.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<i32> {
        self.it.next_back().copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}
