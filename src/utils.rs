/// Number of bytes between two cursors, modulo 65536.
#[inline]
pub fn count(read: u16, write: u16) -> u16 {
    write.wrapping_sub(read)
}

/// Physical index of a logical position.
#[inline]
pub fn slot(pos: u16, mask: u16) -> usize {
    (pos & mask) as usize
}

/// Physical index of `offset` bytes past `pos`.
///
/// Only the low bits survive the mask, so truncating `offset` first gives
/// the same slot as full-width addition.
#[inline]
pub fn slot_at(pos: u16, offset: usize, mask: u16) -> usize {
    slot(pos.wrapping_add(offset as u16), mask)
}

#[inline]
pub fn is_power_of_two(n: u16) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Emits a `tracing` debug event when the `tracing` feature is on.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}
