// unicode/range.rs - Binary-search classification over partitioned code-point ranges.

use std::ops::RangeInclusive;

use crate::codepoint::{is_valid_scalar, CodePoint, MAX_CODE_POINT};
use crate::error::{Result, UnicodeError};

/// Maps every scalar value to the label of the range that contains it.
///
/// `starts` holds strictly increasing range boundaries beginning at 0;
/// entry `k` covers `starts[k]..starts[k + 1]` (the last entry runs to
/// U+10FFFF) and carries `labels[k]`.
///
/// ```
/// use ucharclass::unicode::RangeClassifier;
///
/// static DIGITS: RangeClassifier<'static, bool> =
///     RangeClassifier::new(&[0x00, 0x30, 0x3A], &[false, true, false]);
///
/// assert_eq!(DIGITS.classify('7' as u32), Ok(true));
/// assert_eq!(DIGITS.classify('x' as u32), Ok(false));
/// assert!(DIGITS.classify(0x110000).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RangeClassifier<'a, L> {
    starts: &'a [CodePoint],
    labels: &'a [L],
}

impl<'a, L> RangeClassifier<'a, L> {
    /// Wraps a boundary table and its parallel label table.
    ///
    /// Panics unless the tables have equal non-zero length, `starts[0] == 0`,
    /// and the boundaries strictly increase up to at most U+10FFFF. In a
    /// `static` initializer the check runs at compile time.
    pub const fn new(starts: &'a [CodePoint], labels: &'a [L]) -> Self {
        assert!(starts.len() == labels.len(), "boundary and label tables differ in length");
        assert!(!starts.is_empty(), "empty range table");
        assert!(starts[0] == 0, "range table must start at U+0000");
        let mut k = 1;
        while k < starts.len() {
            assert!(starts[k - 1] < starts[k], "range boundaries must strictly increase");
            k += 1;
        }
        assert!(starts[starts.len() - 1] <= MAX_CODE_POINT, "range boundary past U+10FFFF");
        RangeClassifier { starts, labels }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always false; a valid table has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Inclusive scalar range of entry `k`, or `None` past the end.
    pub fn entry_range(&self, k: usize) -> Option<RangeInclusive<CodePoint>> {
        let first = *self.starts.get(k)?;
        let last = match self.starts.get(k + 1) {
            Some(next) => next - 1,
            None => MAX_CODE_POINT,
        };
        Some(first..=last)
    }

    /// Index of the entry containing `cp`.
    ///
    /// Keeps `top > current >= bottom` and `cp >= starts[bottom]`, halving
    /// the window until it holds one entry.
    #[inline]
    fn search(&self, cp: CodePoint) -> usize {
        let starts = self.starts;
        let mut bottom = 0;
        let mut top = starts.len();
        let mut current = top / 2;
        while top - bottom > 1 {
            if cp >= starts[current] {
                bottom = current;
            } else {
                top = current;
            }
            current = (top + bottom) / 2;
        }
        current
    }
}

impl<'a, L: Copy> RangeClassifier<'a, L> {
    /// Label of the range containing `cp`.
    ///
    /// Fails with [`UnicodeError::InvalidCodePoint`] above U+10FFFF.
    pub fn classify(&self, cp: CodePoint) -> Result<L> {
        if !is_valid_scalar(cp) {
            return Err(UnicodeError::InvalidCodePoint(cp));
        }
        Ok(self.labels[self.search(cp)])
    }

    /// [`classify`](Self::classify) for values already known to be valid.
    #[inline]
    pub(crate) fn classify_valid(&self, cp: CodePoint) -> L {
        self.labels[self.search(cp)]
    }

    /// Every entry as `(range, label)`, in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (RangeInclusive<CodePoint>, L)> + 'a {
        let table = *self;
        table.labels.iter().enumerate().filter_map(move |(k, &label)| {
            table.entry_range(k).map(|range| (range, label))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear<L: Copy>(starts: &[CodePoint], labels: &[L], cp: CodePoint) -> L {
        let k = starts.iter().rposition(|&s| s <= cp).unwrap();
        labels[k]
    }

    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u32 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (self.0 >> 33) as u32
        }
    }

    #[test]
    fn single_entry_table() {
        let table = RangeClassifier::new(&[0], &['x']);
        assert_eq!(table.classify(0), Ok('x'));
        assert_eq!(table.classify(MAX_CODE_POINT), Ok('x'));
        assert_eq!(table.entry_range(0), Some(0..=MAX_CODE_POINT));
        assert_eq!(table.entry_range(1), None);
    }

    #[test]
    fn boundaries_belong_to_following_entry() {
        let starts = [0, 0x80, 0x100];
        let table = RangeClassifier::new(&starts, &[0u8, 1, 2]);
        assert_eq!(table.classify(0x7F), Ok(0));
        assert_eq!(table.classify(0x80), Ok(1));
        assert_eq!(table.classify(0xFF), Ok(1));
        assert_eq!(table.classify(0x100), Ok(2));
        assert_eq!(table.classify(MAX_CODE_POINT), Ok(2));
        assert_eq!(
            table.classify(MAX_CODE_POINT + 1),
            Err(UnicodeError::InvalidCodePoint(0x110000))
        );
    }

    #[test]
    fn entries_cover_the_code_space() {
        let starts = [0, 0x41, 0x5B, 0x10000];
        let table = RangeClassifier::new(&starts, &[0, 1, 0, 2]);
        let mut next = 0;
        for (range, _) in table.entries() {
            assert_eq!(*range.start(), next);
            next = range.end() + 1;
        }
        assert_eq!(next, MAX_CODE_POINT + 1);
        assert_eq!(table.entries().count(), table.len());
    }

    #[test]
    fn binary_search_agrees_with_linear_scan() {
        let mut rng = Lcg(0x5EED);
        for _ in 0..50 {
            let mut starts = vec![0u32];
            let count = 1 + rng.next() % 300;
            for _ in 0..count {
                starts.push(rng.next() % (MAX_CODE_POINT + 1));
            }
            starts.sort_unstable();
            starts.dedup();
            let labels: Vec<u32> = (0..starts.len() as u32).collect();
            let table = RangeClassifier::new(&starts, &labels);

            for &s in &starts {
                for cp in [s, s.saturating_sub(1), (s + 1).min(MAX_CODE_POINT)] {
                    assert_eq!(table.classify(cp), Ok(linear(&starts, &labels, cp)));
                }
            }
            for _ in 0..200 {
                let cp = rng.next() % (MAX_CODE_POINT + 1);
                assert_eq!(table.classify(cp), Ok(linear(&starts, &labels, cp)));
            }
        }
    }

    #[test]
    #[should_panic(expected = "strictly increase")]
    fn rejects_unsorted_boundaries() {
        RangeClassifier::new(&[0, 0x20, 0x10], &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "start at U+0000")]
    fn rejects_missing_zero_boundary() {
        RangeClassifier::new(&[0x10], &[0]);
    }

    #[test]
    #[should_panic(expected = "differ in length")]
    fn rejects_mismatched_tables() {
        RangeClassifier::new(&[0, 0x10], &[0]);
    }
}
