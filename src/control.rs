//! Control block placement for `ByteFifo::allocate`.
//!
//! The fifo never allocates on its own. A caller that wants the control block
//! somewhere other than its own stack frame passes a `ControlAlloc`
//! capability inside `FifoSettings`, and the fifo asks it exactly once, after
//! every argument has been validated.

use core::ops::DerefMut;

use crate::error::InitError;
use crate::storage::Storage;
use crate::ByteFifo;

/// Configuration bundle consumed by `ByteFifo::allocate`.
#[derive(Debug)]
pub struct FifoSettings<A, S> {
    /// Where the control block goes.
    pub allocator: A,
    /// Backing storage for the ring window.
    pub storage: S,
    /// Ring capacity in bytes; a power of two no larger than the storage.
    pub capacity: u16,
}

/// Capability for placing a `ByteFifo` control block.
///
/// The returned handle owns (or exclusively borrows) the control block; the
/// party holding the handle is responsible for releasing it.
pub trait ControlAlloc<S: Storage> {
    /// Handle through which the placed fifo is used.
    type Handle: DerefMut<Target = ByteFifo<S>>;

    /// Places `fifo`, or returns `None` if no room is available.
    fn alloc(self, fifo: ByteFifo<S>) -> Option<Self::Handle>;
}

/// Places the control block on the global heap.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Heap;

#[cfg(feature = "std")]
impl<S: Storage> ControlAlloc<S> for Heap {
    type Handle = Box<ByteFifo<S>>;

    #[inline]
    fn alloc(self, fifo: ByteFifo<S>) -> Option<Box<ByteFifo<S>>> {
        Some(Box::new(fifo))
    }
}

/// A caller-owned slot, for targets without a heap.
///
/// Refuses when the slot is already occupied.
impl<'s, S: Storage> ControlAlloc<S> for &'s mut Option<ByteFifo<S>> {
    type Handle = &'s mut ByteFifo<S>;

    #[inline]
    fn alloc(self, fifo: ByteFifo<S>) -> Option<&'s mut ByteFifo<S>> {
        if self.is_some() {
            return None;
        }
        Some(self.insert(fifo))
    }
}

impl<S: Storage> ByteFifo<S> {
    /// Validates `settings` and places a new, empty fifo through its
    /// allocator.
    ///
    /// Argument checks are the same as `ByteFifo::new` and run before the
    /// allocator is consulted, so an invalid configuration never allocates.
    ///
    /// # Errors
    ///
    /// `InitError::InvalidArguments` for bad storage or capacity,
    /// `InitError::AllocationFailed` if the allocator refuses.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytefifo::{ByteFifo, FifoSettings, InitError};
    ///
    /// let mut slot = None;
    /// let fifo = ByteFifo::allocate(FifoSettings {
    ///     allocator: &mut slot,
    ///     storage: [0u8; 8],
    ///     capacity: 8,
    /// });
    /// assert!(fifo.is_ok());
    ///
    /// let again = ByteFifo::allocate(FifoSettings {
    ///     allocator: &mut slot,
    ///     storage: [0u8; 8],
    ///     capacity: 8,
    /// });
    /// assert_eq!(again.unwrap_err(), InitError::AllocationFailed);
    /// ```
    pub fn allocate<A>(settings: FifoSettings<A, S>) -> Result<A::Handle, InitError>
        where A: ControlAlloc<S>
    {
        let FifoSettings { allocator, storage, capacity } = settings;
        let fifo = ByteFifo::new(storage, capacity)?;
        match allocator.alloc(fifo) {
            Some(handle) => Ok(handle),
            None => {
                debug_event!(capacity, "control block allocator refused");
                Err(InitError::AllocationFailed)
            }
        }
    }
}
