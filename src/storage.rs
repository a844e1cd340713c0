//! Backing storage for `ByteFifo`.

/// Trait for byte regions a `ByteFifo` can run over.
///
/// The fifo indexes into the returned slices without bounds checks, so an
/// implementation must return slices of the same length on every call for
/// as long as it lives.
pub unsafe trait Storage {
    /// Returns the storage as a byte slice.
    fn as_slice(&self) -> &[u8];

    /// Returns the storage as a mutable byte slice.
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Returns the number of bytes in the storage.
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

unsafe impl<'a> Storage for &'a mut [u8] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

unsafe impl<'a, const N: usize> Storage for &'a mut [u8; N] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        &self[..]
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self[..]
    }
}

unsafe impl<const N: usize> Storage for [u8; N] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "std")]
unsafe impl Storage for Box<[u8]> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

// The fifo owns the `Vec` outright and never changes its length.
#[cfg(feature = "std")]
unsafe impl Storage for Vec<u8> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Storage;
    use generic_array::{ArrayLength, GenericArray};

    unsafe impl<N> Storage for GenericArray<u8, N>
    where
        N: ArrayLength<u8>,
    {
        #[inline(always)]
        fn as_slice(&self) -> &[u8] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [u8] {
            GenericArray::as_mut_slice(self)
        }
    }
}
