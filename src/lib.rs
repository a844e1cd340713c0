//! A fixed capacity byte ring buffer over caller supplied storage.
//!
//! `ByteFifo` is meant for places where heap churn is unwelcome, such as an
//! interrupt handler feeding a serial receive queue. One producer calls
//! `write`, one consumer calls `read`, and every operation is `O(1)` and
//! allocation free.
//!
//! The buffer does not own a fixed array type. It runs over any [`Storage`]:
//! a borrowed `&mut [u8]`, an owned `[u8; N]`, a `Vec<u8>` or, with the
//! `use_generic_array` feature, a `GenericArray`. Only the first `capacity`
//! bytes of the storage are ever touched.
//!
//! # Feature Flags
//! The **bytefifo** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; adds the `Heap` control block allocator, `Vec`/`Box`
//!     storage and `std::error::Error` impls
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it as fifo storage.
//!
//!
//! - `tracing`
//!   - Optional
//!   - Emit `tracing` debug events when a configuration is rejected.
//!
//! # Capacity
//!
//! The capacity must be a power of two, at most [`MAX_CAPACITY`]. Cursors are
//! 16 bit counters that wrap at 65536; keeping the capacity at or below half
//! of that keeps "full" and "empty" distinguishable.
//!
//! # Contract
//!
//! `write`, `read` and `peek` do not check fullness or emptiness. Writing
//! to a full fifo overwrites the oldest unread byte, reading an empty one
//! returns whatever stale byte sits in the slot. Consult `is_full`,
//! `is_empty` or `fill_count` first, or use the checked `try_write`,
//! `try_read` and `get`.
//!
//! # Examples
//! ```
//! use bytefifo::ByteFifo;
//!
//! let mut mem = [0u8; 8];
//! let mut fifo = ByteFifo::new(&mut mem[..], 8).unwrap();
//!
//! fifo.write(b'o');
//! fifo.write(b'k');
//! assert_eq!(fifo.fill_count(), 2);
//! assert_eq!(fifo.peek(1), b'k');
//!
//! assert_eq!(fifo.read(), b'o');
//! assert_eq!(fifo.read(), b'k');
//! assert!(fifo.is_empty());
//! ```
//!
//! # Checked access
//! ```
//! use bytefifo::ByteFifo;
//!
//! let mut fifo = ByteFifo::new([0u8; 2], 2).unwrap();
//!
//! assert!(fifo.try_write(1).is_ok());
//! assert!(fifo.try_write(2).is_ok());
//! assert_eq!(fifo.try_write(3).unwrap_err().element, 3);
//!
//! assert_eq!(fifo.get(1), Some(2));
//! assert_eq!(fifo.get(2), None);
//! assert_eq!(fifo.iter().collect::<Vec<_>>(), vec![1, 2]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

use core::fmt;
use core::mem;

#[macro_use]
mod utils;
mod control;
pub mod error;
mod iter;
mod storage;

#[cfg(feature = "std")]
pub use control::Heap;
pub use control::{ControlAlloc, FifoSettings};
pub use error::{CapacityError, InitError};
pub use iter::Iter;
pub use storage::Storage;

use utils::{count, is_power_of_two, slot, slot_at};

/// Largest supported capacity.
///
/// Every power of two a `u16` can hold is at most this value.
pub const MAX_CAPACITY: u16 = 0x8000;

/// A fixed capacity byte ring buffer.
///
/// The fifo holds its storage and two 16 bit cursors. The byte at logical
/// position `p` lives at `storage[p & (capacity - 1)]`.
///
/// It never frees anything. Borrowed storage goes back to its owner when the
/// fifo is dropped; owned storage can be taken back with `into_storage`.
pub struct ByteFifo<S: Storage> {
    storage: S,
    mask: u16,
    write_cursor: u16,
    read_cursor: u16,
}

impl<S: Storage> ByteFifo<S> {
    fn validate(storage: &S, capacity: u16) -> Result<u16, InitError> {
        let len = storage.len();
        if len == 0 || !is_power_of_two(capacity) || len < capacity as usize {
            debug_event!(capacity, storage_len = len, "rejected fifo arguments");
            return Err(InitError::InvalidArguments);
        }
        debug_assert!(capacity <= MAX_CAPACITY);
        Ok(capacity - 1)
    }

    #[inline]
    fn buffer_read(&self, idx: usize) -> u8 {
        debug_assert!(idx <= self.mask as usize);
        // SAFETY: idx <= mask < capacity <= storage.len(), checked at
        // construction, and `Storage` promises a stable length.
        unsafe { *self.storage.as_slice().get_unchecked(idx) }
    }

    #[inline]
    fn buffer_write(&mut self, idx: usize, byte: u8) {
        debug_assert!(idx <= self.mask as usize);
        // SAFETY: same bound as `buffer_read`.
        unsafe { *self.storage.as_mut_slice().get_unchecked_mut(idx) = byte }
    }

    /// Creates an empty fifo over the first `capacity` bytes of `storage`.
    ///
    /// # Errors
    ///
    /// `InitError::InvalidArguments` if `storage` is empty, `capacity` is zero
    /// or not a power of two, or `storage` is shorter than `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytefifo::{ByteFifo, InitError};
    ///
    /// assert!(ByteFifo::new([0u8; 4], 4).is_ok());
    /// assert_eq!(ByteFifo::new([0u8; 4], 3).unwrap_err(), InitError::InvalidArguments);
    /// assert_eq!(ByteFifo::new([0u8; 4], 8).unwrap_err(), InitError::InvalidArguments);
    /// ```
    pub fn new(storage: S, capacity: u16) -> Result<ByteFifo<S>, InitError> {
        let mask = Self::validate(&storage, capacity)?;
        Ok(ByteFifo {
            storage,
            mask,
            write_cursor: 0,
            read_cursor: 0,
        })
    }

    /// Re-initializes this fifo in place over new storage.
    ///
    /// On success both cursors are zero and the previous storage is returned.
    /// On failure `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Same as `ByteFifo::new`.
    pub fn init(&mut self, storage: S, capacity: u16) -> Result<S, InitError> {
        let mask = Self::validate(&storage, capacity)?;
        self.mask = mask;
        self.write_cursor = 0;
        self.read_cursor = 0;
        Ok(mem::replace(&mut self.storage, storage))
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> u16 {
        self.mask + 1
    }

    /// Appends `byte`.
    ///
    /// Does not check for room: on a full fifo this overwrites the oldest
    /// unread byte and the fill count no longer means anything until
    /// `reset`.
    #[inline]
    pub fn write(&mut self, byte: u8) {
        let idx = slot(self.write_cursor, self.mask);
        self.buffer_write(idx, byte);
        self.write_cursor = self.write_cursor.wrapping_add(1);
    }

    /// Removes and returns the oldest byte.
    ///
    /// Does not check for data: on an empty fifo this returns the stale byte
    /// in the slot and still advances the read cursor.
    #[inline]
    pub fn read(&mut self) -> u8 {
        let byte = self.buffer_read(slot(self.read_cursor, self.mask));
        self.read_cursor = self.read_cursor.wrapping_add(1);
        byte
    }

    /// Returns the byte `offset` places past the oldest one, without
    /// consuming anything.
    ///
    /// `offset` wraps within the ring window; offsets at or beyond
    /// `fill_count()` return stale bytes.
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.buffer_read(slot_at(self.read_cursor, offset, self.mask))
    }

    /// Appends `byte` if there is room.
    ///
    /// # Errors
    ///
    /// Hands `byte` back in a `CapacityError` when the fifo is full.
    #[inline]
    pub fn try_write(&mut self, byte: u8) -> Result<(), CapacityError<u8>> {
        if self.is_full() {
            return Err(CapacityError { element: byte });
        }
        self.write(byte);
        Ok(())
    }

    /// Removes and returns the oldest byte, or `None` if the fifo is empty.
    #[inline]
    pub fn try_read(&mut self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.read())
        }
    }

    /// Returns the byte `offset` places past the oldest one, or `None` if
    /// `offset` is not below `fill_count()`.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<u8> {
        if offset < self.fill_count() as usize {
            Some(self.peek(offset))
        } else {
            None
        }
    }

    /// Discards all unread bytes. The storage is left as it is.
    #[inline]
    pub fn reset(&mut self) {
        self.read_cursor = self.write_cursor;
    }

    /// Returns `true` if the fifo holds `capacity()` unread bytes.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.fill_count() == self.capacity()
    }

    /// Returns `true` if there is nothing to read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.write_cursor == self.read_cursor
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub fn fill_count(&self) -> u16 {
        count(self.read_cursor, self.write_cursor)
    }

    /// Returns the number of bytes that can be written before the fifo is
    /// full.
    #[inline]
    pub fn free_space(&self) -> u16 {
        // wrapping: an overrun fifo must not panic here
        self.capacity().wrapping_sub(self.fill_count())
    }

    /// Returns a front-to-back iterator over the unread bytes.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        let ring = &self.storage.as_slice()[..self.capacity() as usize];
        Iter::new(ring, self.mask, self.read_cursor, self.write_cursor)
    }

    /// Returns a reference to the backing storage.
    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the fifo and returns its backing storage.
    #[inline]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: Storage> fmt::Debug for ByteFifo<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, S: Storage> IntoIterator for &'a ByteFifo<S> {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
