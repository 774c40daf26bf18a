//! Occurrence counts for digits 1-9.

use serde::{Deserialize, Serialize};

/// Counts for digits 1..=9. Index 0 holds digit 1. Digit 0 is never counted.
///
/// Histograms are values: the mutating-looking helpers return a new histogram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitHistogram([u32; 9]);

impl DigitHistogram {
    pub const fn empty() -> Self {
        Self([0; 9])
    }

    /// Count every non-zero decimal digit in `s`.
    pub fn from_digits(s: &str) -> Self {
        let mut counts = [0u32; 9];
        for d in s.chars().filter_map(|c| c.to_digit(10)) {
            if d > 0 {
                counts[d as usize - 1] += 1;
            }
        }
        Self(counts)
    }

    pub const fn from_counts(counts: [u32; 9]) -> Self {
        Self(counts)
    }

    /// Count for `digit`; 0 for anything outside 1..=9.
    pub fn get(&self, digit: u8) -> u32 {
        match digit {
            1..=9 => self.0[digit as usize - 1],
            _ => 0,
        }
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.get(digit) > 0
    }

    /// New histogram with one more occurrence of `digit`. Out-of-range
    /// digits (0, master numbers) leave it unchanged.
    pub fn with_added(&self, digit: u8) -> Self {
        let mut next = *self;
        if (1..=9).contains(&digit) {
            next.0[digit as usize - 1] += 1;
        }
        next
    }

    /// New histogram with one occurrence of `digit` removed (saturating).
    pub fn without(&self, digit: u8) -> Self {
        let mut next = *self;
        if (1..=9).contains(&digit) {
            let slot = &mut next.0[digit as usize - 1];
            *slot = slot.saturating_sub(1);
        }
        next
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub const fn counts(&self) -> &[u32; 9] {
        &self.0
    }

    /// `(digit, count)` pairs in digit order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.0.iter().enumerate().map(|(i, c)| (i as u8 + 1, *c))
    }

    /// Digits present at least twice, in digit order.
    pub fn dominant_digits(&self) -> Vec<u8> {
        self.iter().filter(|(_, c)| *c >= 2).map(|(d, _)| d).collect()
    }

    /// Digits with no occurrence, in digit order.
    pub fn missing_digits(&self) -> Vec<u8> {
        self.iter().filter(|(_, c)| *c == 0).map(|(d, _)| d).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_are_not_counted() {
        let h = DigitHistogram::from_digits("05052005");
        assert_eq!(h.get(5), 3);
        assert_eq!(h.get(2), 1);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn add_and_remove_are_pure() {
        let h = DigitHistogram::empty();
        let added = h.with_added(7).with_added(7);
        assert_eq!(h.get(7), 0);
        assert_eq!(added.get(7), 2);
        assert_eq!(added.without(7).get(7), 1);
        assert_eq!(h.without(7), h);
    }

    #[test]
    fn out_of_range_ignored() {
        let h = DigitHistogram::empty().with_added(0).with_added(11);
        assert_eq!(h.total(), 0);
        assert_eq!(h.get(11), 0);
    }

    #[test]
    fn dominant_and_missing() {
        let h = DigitHistogram::from_digits("22041987");
        assert_eq!(h.dominant_digits(), vec![2]);
        assert_eq!(h.missing_digits(), vec![3, 5, 6]);
    }
}
