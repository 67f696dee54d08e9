//! Found-number tracking as a 100-bit set.

use crate::types::BOARD_SIZE;

/// Set of numbers found so far (bit `n` set = number `n` found)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelectedNumbers {
    bits: u128,
}

impl SelectedNumbers {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Add `number`; returns true if it was not already present.
    ///
    /// Numbers outside 0..99 are ignored.
    pub fn insert(&mut self, number: u8) -> bool {
        if number >= BOARD_SIZE {
            return false;
        }
        let mask = 1u128 << number;
        let added = self.bits & mask == 0;
        self.bits |= mask;
        added
    }

    pub fn contains(&self, number: u8) -> bool {
        number < BOARD_SIZE && self.bits & (1u128 << number) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..BOARD_SIZE).filter(move |&n| self.contains(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = SelectedNumbers::new();
        assert!(set.is_empty());
        assert!(set.insert(0));
        assert!(set.insert(99));
        assert!(!set.insert(0));
        assert!(set.contains(0));
        assert!(set.contains(99));
        assert!(!set.contains(50));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut set = SelectedNumbers::new();
        assert!(!set.insert(100));
        assert!(!set.insert(255));
        assert!(!set.contains(100));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_ascending() {
        let mut set = SelectedNumbers::new();
        for n in [42, 3, 77, 0] {
            set.insert(n);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 42, 77]);
    }

    #[test]
    fn test_full_set() {
        let mut set = SelectedNumbers::new();
        for n in 0..100 {
            set.insert(n);
        }
        assert_eq!(set.len(), 100);
    }
}
