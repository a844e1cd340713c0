use core::iter::FusedIterator;

use crate::utils::{count, slot};

/// `ByteFifo` iterator over the unread bytes, oldest first.
///
/// Created by `ByteFifo::iter`; it does not move the read cursor.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    ring: &'a [u8],
    mask: u16,
    tail: u16,
    head: u16,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(ring: &'a [u8], mask: u16, tail: u16, head: u16) -> Iter<'a> {
        debug_assert_eq!(ring.len(), mask as usize + 1);
        Iter { ring, mask, tail, head }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.tail == self.head {
            return None;
        }
        let byte = self.ring[slot(self.tail, self.mask)];
        self.tail = self.tail.wrapping_add(1);
        Some(byte)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = count(self.tail, self.head) as usize;
        (len, Some(len))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        if self.tail == self.head {
            return None;
        }
        self.head = self.head.wrapping_sub(1);
        Some(self.ring[slot(self.head, self.mask)])
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

#[cfg(test)]
mod tests {
    use crate::ByteFifo;

    #[test]
    fn iter_does_not_consume() {
        let mut fifo = ByteFifo::new([0u8; 4], 4).unwrap();
        fifo.write(1);
        fifo.write(2);
        fifo.write(3);

        let mut iter = fifo.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 2);
        assert_eq!(fifo.fill_count(), 3);
        assert_eq!(fifo.peek(0), 1);
    }

    #[test]
    fn iter_both_ends_across_wrap() {
        let mut fifo = ByteFifo::new([0u8; 4], 4).unwrap();
        for i in 0..3 {
            fifo.write(i);
            fifo.read();
        }
        for i in 10..14 {
            fifo.write(i);
        }

        let mut iter = fifo.iter();
        assert_eq!(iter.next_back(), Some(13));
        assert_eq!(iter.next(), Some(10));
        assert_eq!(iter.next_back(), Some(12));
        assert_eq!(iter.next(), Some(11));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let rev: Vec<u8> = (&fifo).into_iter().rev().collect();
        assert_eq!(rev, vec![13, 12, 11, 10]);
    }

    #[test]
    fn iter_empty() {
        let fifo = ByteFifo::new([0u8; 2], 2).unwrap();
        assert_eq!(fifo.iter().count(), 0);
        assert_eq!(fifo.iter().size_hint(), (0, Some(0)));
    }
}
