// codepoint.rs - Scalar value / UTF-16 code unit conversions.
//
// Surrogate arithmetic follows the Unicode Standard, section 3.9 (D91):
//   scalar = ((high - 0xD800) << 10) + (low - 0xDC00) + 0x10000

use smallvec::{smallvec, SmallVec};

use crate::error::{Result, UnicodeError};

// === Types ===

/// A Unicode scalar value (code point), `0..=0x10FFFF` when valid.
pub type CodePoint = u32;

/// A 16-bit UTF-16 code unit.
pub type CodeUnit = u16;

/// The one or two code units encoding a single scalar value.
/// Always stored inline.
pub type EncodedUnits = SmallVec<[CodeUnit; 2]>;

// === Constants ===

pub const MIN_CODE_POINT: CodePoint = 0x000000;
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;
pub const MAX_BMP_CODE_POINT: CodePoint = 0xFFFF;
pub const MIN_SUPPLEMENTARY_CODE_POINT: CodePoint = 0x010000;

pub const MIN_HIGH_SURROGATE: CodeUnit = 0xD800;
pub const MAX_HIGH_SURROGATE: CodeUnit = 0xDBFF;
pub const MIN_LOW_SURROGATE: CodeUnit = 0xDC00;
pub const MAX_LOW_SURROGATE: CodeUnit = 0xDFFF;
pub const MIN_SURROGATE: CodeUnit = MIN_HIGH_SURROGATE;
pub const MAX_SURROGATE: CodeUnit = MAX_LOW_SURROGATE;

// high = (cp >> 10) + HIGH_SURROGATE_BASE for any supplementary cp
const HIGH_SURROGATE_BASE: CodePoint =
    MIN_HIGH_SURROGATE as CodePoint - (MIN_SUPPLEMENTARY_CODE_POINT >> 10);

// === Scalar predicates ===

/// Is `cp` a Unicode scalar value (`0..=0x10FFFF`)?
///
/// Surrogate code points are valid scalars here; only the range is checked.
#[inline]
pub const fn is_valid_scalar(cp: CodePoint) -> bool {
    cp <= MAX_CODE_POINT
}

/// Does `cp` fit in a single code unit?
#[inline]
pub const fn is_bmp(cp: CodePoint) -> bool {
    cp <= MAX_BMP_CODE_POINT
}

/// Is `cp` a valid scalar that needs a surrogate pair?
#[inline]
pub const fn is_supplementary(cp: CodePoint) -> bool {
    cp >= MIN_SUPPLEMENTARY_CODE_POINT && cp <= MAX_CODE_POINT
}

/// Number of code units needed to encode `cp`: 2 for `cp >= 0x10000`, else 1.
///
/// Does not validate `cp`; pair with [`is_valid_scalar`] when that matters.
#[inline]
pub const fn units_needed(cp: CodePoint) -> usize {
    if cp >= MIN_SUPPLEMENTARY_CODE_POINT {
        2
    } else {
        1
    }
}

// === Code unit predicates ===

#[inline]
pub const fn is_high_surrogate(unit: CodeUnit) -> bool {
    unit >= MIN_HIGH_SURROGATE && unit <= MAX_HIGH_SURROGATE
}

#[inline]
pub const fn is_low_surrogate(unit: CodeUnit) -> bool {
    unit >= MIN_LOW_SURROGATE && unit <= MAX_LOW_SURROGATE
}

#[inline]
pub const fn is_surrogate(unit: CodeUnit) -> bool {
    unit >= MIN_SURROGATE && unit <= MAX_SURROGATE
}

/// Is `(high, low)` a well-formed surrogate pair, in that order?
#[inline]
pub const fn is_surrogate_pair(high: CodeUnit, low: CodeUnit) -> bool {
    is_high_surrogate(high) && is_low_surrogate(low)
}

// === Pair arithmetic ===

/// Combine a surrogate pair into its supplementary scalar value.
///
/// The result is only meaningful when [`is_surrogate_pair`] holds; other
/// inputs give an unspecified value (but never panic).
///
/// ```
/// use ucharclass::codepoint::compose;
///
/// assert_eq!(compose(0xD800, 0xDC00), 0x10000);
/// assert_eq!(compose(0xDBFF, 0xDFFF), 0x10FFFF);
/// ```
#[inline]
pub const fn compose(high: CodeUnit, low: CodeUnit) -> CodePoint {
    ((high as CodePoint).wrapping_sub(MIN_HIGH_SURROGATE as CodePoint) << 10)
        .wrapping_add((low as CodePoint).wrapping_sub(MIN_LOW_SURROGATE as CodePoint))
        .wrapping_add(MIN_SUPPLEMENTARY_CODE_POINT)
}

/// Leading (high) surrogate of a supplementary scalar value.
#[inline]
pub const fn high_surrogate(cp: CodePoint) -> CodeUnit {
    ((cp >> 10).wrapping_add(HIGH_SURROGATE_BASE)) as CodeUnit
}

/// Trailing (low) surrogate of a supplementary scalar value.
#[inline]
pub const fn low_surrogate(cp: CodePoint) -> CodeUnit {
    ((cp & 0x3FF) + MIN_LOW_SURROGATE as CodePoint) as CodeUnit
}

/// Split a supplementary scalar value into `(high, low)`; the inverse of
/// [`compose`]. Unspecified (but non-panicking) for BMP input.
#[inline]
pub const fn decompose(cp: CodePoint) -> (CodeUnit, CodeUnit) {
    (high_surrogate(cp), low_surrogate(cp))
}

// === Encoding ===

/// Encode `cp` as one code unit (BMP) or a surrogate pair (supplementary).
///
/// Surrogate code points in the BMP encode as themselves.
///
/// ```
/// use ucharclass::codepoint::encode;
///
/// assert_eq!(encode(0x41).unwrap().as_slice(), &[0x41]);
/// assert_eq!(encode(0x1F600).unwrap().as_slice(), &[0xD83D, 0xDE00]);
/// assert!(encode(0x110000).is_err());
/// ```
pub fn encode(cp: CodePoint) -> Result<EncodedUnits> {
    if is_bmp(cp) {
        Ok(smallvec![cp as CodeUnit])
    } else if is_valid_scalar(cp) {
        let (high, low) = decompose(cp);
        Ok(smallvec![high, low])
    } else {
        Err(UnicodeError::InvalidCodePoint(cp))
    }
}

/// Encode `cp` into `dst` starting at `index`, returning the number of
/// units written (1 or 2).
///
/// Fails with `IndexOutOfRange` if the encoding does not fit; nothing is
/// written in that case.
pub fn encode_into(cp: CodePoint, dst: &mut [CodeUnit], index: usize) -> Result<usize> {
    if !is_valid_scalar(cp) {
        return Err(UnicodeError::InvalidCodePoint(cp));
    }
    let len = units_needed(cp);
    match index.checked_add(len) {
        Some(end) if end <= dst.len() => {}
        _ => return Err(UnicodeError::out_of_range(index, 0, dst.len())),
    }

    if len == 1 {
        dst[index] = cp as CodeUnit;
    } else {
        let (high, low) = decompose(cp);
        dst[index] = high;
        dst[index + 1] = low;
    }
    Ok(len)
}

/// Encode a sequence of scalar values into a new code-unit vector.
///
/// Fails on the first invalid scalar; the output is sized exactly.
pub fn encode_all(cps: &[CodePoint]) -> Result<Vec<CodeUnit>> {
    let mut len = 0;
    for &cp in cps {
        if !is_valid_scalar(cp) {
            return Err(UnicodeError::InvalidCodePoint(cp));
        }
        len += units_needed(cp);
    }

    let mut out = Vec::with_capacity(len);
    for &cp in cps {
        if is_bmp(cp) {
            out.push(cp as CodeUnit);
        } else {
            let (high, low) = decompose(cp);
            out.push(high);
            out.push(low);
        }
    }
    Ok(out)
}
