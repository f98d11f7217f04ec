// scanner.rs - Walk UTF-16 code-unit sequences by whole scalar values.
//
// A valid (high, low) pair is always consumed as one scalar. Any other
// surrogate is a lone surrogate and is returned as its raw 16-bit value,
// never rejected.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use bitflags::bitflags;

use crate::codepoint::*;
use crate::error::{Result, UnicodeError};

// === Sequence trait ===

/// Random-access storage of UTF-16 code units.
///
/// Implemented for slices, arrays, `Vec<u16>` and `VecDeque<u16>`. Callers
/// of `unit_at` guarantee `index < unit_len()`.
pub trait CodeUnitSeq {
    /// Number of code units in the sequence.
    fn unit_len(&self) -> usize;

    /// The code unit at `index`.
    fn unit_at(&self, index: usize) -> CodeUnit;
}

impl CodeUnitSeq for [CodeUnit] {
    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn unit_at(&self, index: usize) -> CodeUnit {
        self[index]
    }
}

impl<const N: usize> CodeUnitSeq for [CodeUnit; N] {
    #[inline]
    fn unit_len(&self) -> usize {
        N
    }

    #[inline]
    fn unit_at(&self, index: usize) -> CodeUnit {
        self[index]
    }
}

impl CodeUnitSeq for Vec<CodeUnit> {
    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn unit_at(&self, index: usize) -> CodeUnit {
        self[index]
    }
}

impl CodeUnitSeq for VecDeque<CodeUnit> {
    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn unit_at(&self, index: usize) -> CodeUnit {
        self[index]
    }
}

// === Unchecked stepping ===
// Bounds are validated by the public entry points.

/// Scalar starting at `index`, where `index < limit <= seq.unit_len()`.
#[inline]
fn scalar_at_unchecked<S: CodeUnitSeq + ?Sized>(seq: &S, index: usize, limit: usize) -> CodePoint {
    let high = seq.unit_at(index);
    if is_high_surrogate(high) && index + 1 < limit {
        let low = seq.unit_at(index + 1);
        if is_low_surrogate(low) {
            return compose(high, low);
        }
    }
    high as CodePoint
}

/// Scalar ending just before `index`, where `start < index <= seq.unit_len()`.
#[inline]
fn scalar_before_unchecked<S: CodeUnitSeq + ?Sized>(seq: &S, index: usize, start: usize) -> CodePoint {
    let low = seq.unit_at(index - 1);
    if is_low_surrogate(low) && index - 1 > start {
        let high = seq.unit_at(index - 2);
        if is_high_surrogate(high) {
            return compose(high, low);
        }
    }
    low as CodePoint
}

/// Index one scalar forward from `index` (`index < limit`).
#[inline]
fn step_forward<S: CodeUnitSeq + ?Sized>(seq: &S, index: usize, limit: usize) -> usize {
    let mut next = index + 1;
    if is_high_surrogate(seq.unit_at(index)) && next < limit && is_low_surrogate(seq.unit_at(next)) {
        next += 1;
    }
    next
}

/// Index one scalar backward from `index` (`index > start`).
#[inline]
fn step_backward<S: CodeUnitSeq + ?Sized>(seq: &S, index: usize, start: usize) -> usize {
    let mut prev = index - 1;
    if is_low_surrogate(seq.unit_at(prev)) && prev > start && is_high_surrogate(seq.unit_at(prev - 1)) {
        prev -= 1;
    }
    prev
}

fn check_sub_range<S: CodeUnitSeq + ?Sized>(seq: &S, start: usize, limit: usize) -> Result<()> {
    let len = seq.unit_len();
    if limit > len {
        return Err(UnicodeError::out_of_range(limit, 0, len));
    }
    if start > limit {
        return Err(UnicodeError::out_of_range(start, 0, limit));
    }
    Ok(())
}

// === Reading scalars ===

/// Scalar value starting at `index`.
///
/// A high surrogate followed by a low surrogate yields the composed
/// supplementary scalar; any other unit is returned unchanged.
///
/// ```
/// use ucharclass::scanner::scalar_at;
///
/// let units = [0x0041, 0xD83D, 0xDE00, 0xD800];
/// assert_eq!(scalar_at(&units, 0).unwrap(), 0x41);
/// assert_eq!(scalar_at(&units, 1).unwrap(), 0x1F600);
/// assert_eq!(scalar_at(&units, 2).unwrap(), 0xDE00); // trailing half on its own
/// assert_eq!(scalar_at(&units, 3).unwrap(), 0xD800); // lone high surrogate
/// assert!(scalar_at(&units, 4).is_err());
/// ```
pub fn scalar_at<S: CodeUnitSeq + ?Sized>(seq: &S, index: usize) -> Result<CodePoint> {
    scalar_at_bounded(seq, index, seq.unit_len())
}

/// [`scalar_at`] that treats `limit` as the end of the sequence: a high
/// surrogate at `limit - 1` is never paired.
pub fn scalar_at_bounded<S: CodeUnitSeq + ?Sized>(
    seq: &S,
    index: usize,
    limit: usize,
) -> Result<CodePoint> {
    let len = seq.unit_len();
    if limit > len {
        return Err(UnicodeError::out_of_range(limit, 0, len));
    }
    if index >= limit {
        return Err(UnicodeError::out_of_range(index, 0, limit));
    }
    Ok(scalar_at_unchecked(seq, index, limit))
}

/// Scalar value ending just before `index`.
///
/// A low surrogate preceded by a high surrogate yields the composed
/// supplementary scalar; any other unit is returned unchanged.
pub fn scalar_before<S: CodeUnitSeq + ?Sized>(seq: &S, index: usize) -> Result<CodePoint> {
    scalar_before_bounded(seq, index, 0)
}

/// [`scalar_before`] that treats `start` as the beginning of the sequence:
/// a low surrogate at `start` is never paired.
pub fn scalar_before_bounded<S: CodeUnitSeq + ?Sized>(
    seq: &S,
    index: usize,
    start: usize,
) -> Result<CodePoint> {
    let len = seq.unit_len();
    if index <= start || index > len {
        return Err(UnicodeError::out_of_range(index, start, len));
    }
    Ok(scalar_before_unchecked(seq, index, start))
}

// === Counting and offsetting ===

/// Number of scalar values in the whole sequence.
pub fn count_scalars<S: CodeUnitSeq + ?Sized>(seq: &S) -> usize {
    count_unchecked(seq, 0, seq.unit_len())
}

/// Number of scalar values in `start..limit`.
///
/// Each valid surrogate pair counts once; each lone surrogate counts once.
///
/// ```
/// use ucharclass::scanner::count_scalars_in;
///
/// let units = [0xD800, 0xDC00, 0x0041];
/// assert_eq!(count_scalars_in(&units, 0, 3).unwrap(), 2);
/// assert_eq!(count_scalars_in(&units, 1, 3).unwrap(), 2); // pair split by start
/// assert!(count_scalars_in(&units, 2, 1).is_err());
/// ```
pub fn count_scalars_in<S: CodeUnitSeq + ?Sized>(seq: &S, start: usize, limit: usize) -> Result<usize> {
    check_sub_range(seq, start, limit)?;
    Ok(count_unchecked(seq, start, limit))
}

fn count_unchecked<S: CodeUnitSeq + ?Sized>(seq: &S, start: usize, limit: usize) -> usize {
    let mut count = limit - start;
    let mut i = start;
    while i < limit {
        let unit = seq.unit_at(i);
        i += 1;
        if is_high_surrogate(unit) && i < limit && is_low_surrogate(seq.unit_at(i)) {
            count -= 1;
            i += 1;
        }
    }
    count
}

/// Index reached by moving `delta` scalar values from `index`.
///
/// Positive `delta` moves forward, negative moves backward. Surrogate pairs
/// are stepped over as a unit.
///
/// ```
/// use ucharclass::scanner::offset_by_scalars;
///
/// let units = [0x0061, 0xD83D, 0xDE00, 0x0062];
/// assert_eq!(offset_by_scalars(&units, 0, 2).unwrap(), 3);
/// assert_eq!(offset_by_scalars(&units, 3, -1).unwrap(), 1);
/// assert!(offset_by_scalars(&units, 0, 4).is_err());
/// ```
pub fn offset_by_scalars<S: CodeUnitSeq + ?Sized>(seq: &S, index: usize, delta: isize) -> Result<usize> {
    offset_by_scalars_in(seq, 0, seq.unit_len(), index, delta)
}

/// [`offset_by_scalars`] confined to `start..limit`.
///
/// Fails if `index` lies outside `start..=limit` or if fewer than `|delta|`
/// scalars remain in the requested direction.
pub fn offset_by_scalars_in<S: CodeUnitSeq + ?Sized>(
    seq: &S,
    start: usize,
    limit: usize,
    index: usize,
    delta: isize,
) -> Result<usize> {
    check_sub_range(seq, start, limit)?;
    if index < start || index > limit {
        return Err(UnicodeError::out_of_range(index, start, limit));
    }

    let mut pos = index;
    if delta >= 0 {
        for _ in 0..delta.unsigned_abs() {
            if pos >= limit {
                return Err(UnicodeError::out_of_range(index, start, limit));
            }
            pos = step_forward(seq, pos, limit);
        }
    } else {
        for _ in 0..delta.unsigned_abs() {
            if pos <= start {
                return Err(UnicodeError::out_of_range(index, start, limit));
            }
            pos = step_backward(seq, pos, start);
        }
    }
    Ok(pos)
}

// === Iteration ===

/// Iterator over the scalar values of a code-unit slice.
///
/// Lone surrogates are yielded as their raw values. Iterates from both
/// ends; the two ends never split a surrogate pair between them.
#[derive(Clone, Debug)]
pub struct Scalars<'a> {
    units: &'a [CodeUnit],
    front: usize,
    back: usize,
}

/// Iterate the scalar values of `units`.
///
/// ```
/// use ucharclass::scanner::scalars;
///
/// let units = [0x0068, 0xD83D, 0xDE00, 0xDC00];
/// let forward: Vec<u32> = scalars(&units).collect();
/// assert_eq!(forward, vec![0x68, 0x1F600, 0xDC00]);
/// let backward: Vec<u32> = scalars(&units).rev().collect();
/// assert_eq!(backward, vec![0xDC00, 0x1F600, 0x68]);
/// ```
pub fn scalars(units: &[CodeUnit]) -> Scalars<'_> {
    Scalars { units, front: 0, back: units.len() }
}

impl<'a> Scalars<'a> {
    /// Unit index of the next scalar `next()` would yield.
    pub fn offset(&self) -> usize {
        self.front
    }

    /// The code units not yet consumed from either end.
    pub fn as_units(&self) -> &'a [CodeUnit] {
        &self.units[self.front..self.back]
    }
}

impl Iterator for Scalars<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        if self.front >= self.back {
            return None;
        }
        let cp = scalar_at_unchecked(self.units, self.front, self.back);
        self.front += units_needed(cp);
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl DoubleEndedIterator for Scalars<'_> {
    fn next_back(&mut self) -> Option<CodePoint> {
        if self.front >= self.back {
            return None;
        }
        let cp = scalar_before_unchecked(self.units, self.back, self.front);
        self.back -= units_needed(cp);
        Some(cp)
    }
}

impl FusedIterator for Scalars<'_> {}

// === Well-formedness ===

bitflags! {
    /// What a single pass over a code-unit sequence found.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SequenceFlags: u8 {
        /// At least one unit is `>= 0x80`.
        const NON_ASCII = 1 << 0;
        /// At least one valid surrogate pair.
        const SUPPLEMENTARY = 1 << 1;
        /// A high surrogate not followed by a low surrogate.
        const LONE_HIGH_SURROGATE = 1 << 2;
        /// A low surrogate not preceded by a high surrogate.
        const LONE_LOW_SURROGATE = 1 << 3;
    }
}

impl SequenceFlags {
    /// True when no lone surrogate was seen, i.e. the sequence is valid UTF-16.
    pub fn is_well_formed(self) -> bool {
        !self.intersects(SequenceFlags::LONE_HIGH_SURROGATE | SequenceFlags::LONE_LOW_SURROGATE)
    }
}

/// Scan the whole sequence once and report what it contains.
pub fn inspect<S: CodeUnitSeq + ?Sized>(seq: &S) -> SequenceFlags {
    let len = seq.unit_len();
    let mut flags = SequenceFlags::empty();
    let mut i = 0;
    while i < len {
        let unit = seq.unit_at(i);
        if unit >= 0x80 {
            flags |= SequenceFlags::NON_ASCII;
        }
        if is_high_surrogate(unit) {
            if i + 1 < len && is_low_surrogate(seq.unit_at(i + 1)) {
                flags |= SequenceFlags::SUPPLEMENTARY;
                i += 2;
                continue;
            }
            flags |= SequenceFlags::LONE_HIGH_SURROGATE;
        } else if is_low_surrogate(unit) {
            flags |= SequenceFlags::LONE_LOW_SURROGATE;
        }
        i += 1;
    }
    flags
}

/// Is the sequence well-formed UTF-16 (no lone surrogates)?
pub fn is_well_formed<S: CodeUnitSeq + ?Sized>(seq: &S) -> bool {
    inspect(seq).is_well_formed()
}
