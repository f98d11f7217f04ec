// scanner_test.rs - Integration tests for scalar-aware sequence scanning.

use std::collections::VecDeque;

use ucharclass::error::UnicodeError;
use ucharclass::scanner::*;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// === scalar_at / scalar_before ===

#[test]
fn lone_high_surrogate_is_returned_raw() {
    assert_eq!(scalar_at(&[0xD800u16], 0), Ok(0xD800));
}

#[test]
fn trailing_high_surrogate_is_returned_raw() {
    let units = [0x41u16, 0xDBFF];
    assert_eq!(scalar_at(&units, 1), Ok(0xDBFF));
}

#[test]
fn scalar_at_walks_like_chars() {
    let text = "a\u{E9}\u{1F600}z\u{10FFFF}";
    let units = utf16(text);
    let mut index = 0;
    for c in text.chars() {
        assert_eq!(scalar_at(&units, index), Ok(c as u32));
        index += c.len_utf16();
    }
    assert_eq!(index, units.len());
}

#[test]
fn scalar_before_walks_like_reversed_chars() {
    let text = "\u{1F600}x\u{10437}";
    let units = utf16(text);
    let mut index = units.len();
    for c in text.chars().rev() {
        assert_eq!(scalar_before(&units, index), Ok(c as u32));
        index -= c.len_utf16();
    }
    assert_eq!(index, 0);
}

#[test]
fn scalar_before_leading_low_surrogate() {
    assert_eq!(scalar_before(&[0xDC00u16, 0x41], 1), Ok(0xDC00));
}

#[test]
fn scalar_at_out_of_range() {
    let units = utf16("ab");
    assert!(matches!(
        scalar_at(&units, 2),
        Err(UnicodeError::IndexOutOfRange { index: 2, start: 0, limit: 2 })
    ));
    let empty: Vec<u16> = Vec::new();
    assert!(scalar_at(&empty, 0).is_err());
    assert!(scalar_before(&empty, 0).is_err());
}

// === count_scalars ===

#[test]
fn count_pair_then_ascii() {
    assert_eq!(count_scalars(&[0xD800u16, 0xDC00, 0x0041]), 2);
}

#[test]
fn count_matches_chars() {
    for text in ["", "plain", "\u{1F600}\u{1F601}", "mixed \u{10000} and \u{FFFF}"] {
        assert_eq!(count_scalars(&utf16(text)), text.chars().count(), "{:?}", text);
    }
}

#[test]
fn count_lone_surrogates_once_each() {
    assert_eq!(count_scalars(&[0xDC00u16, 0xD800]), 2);
    assert_eq!(count_scalars(&[0xD800u16, 0xD800, 0xDC00]), 2);
}

#[test]
fn count_sub_range_splits_pairs() {
    let units = [0xD800u16, 0xDC00, 0xD801, 0xDC01];
    assert_eq!(count_scalars_in(&units, 0, 4), Ok(2));
    assert_eq!(count_scalars_in(&units, 1, 3), Ok(2));
    assert_eq!(count_scalars_in(&units, 0, 3), Ok(2));
    assert!(count_scalars_in(&units, 3, 2).is_err());
    assert!(count_scalars_in(&units, 0, 5).is_err());
}

// === offset_by_scalars ===

#[test]
fn offset_is_inverted_by_negative_offset() {
    let units = utf16("h\u{1F600}llo \u{10437}\u{10438}!");
    let total = count_scalars(&units);
    for start_scalar in 0..=total {
        let i = offset_by_scalars(&units, 0, start_scalar as isize).unwrap();
        for k in 0..=(total - start_scalar) {
            let forward = offset_by_scalars(&units, i, k as isize).unwrap();
            assert_eq!(offset_by_scalars(&units, forward, -(k as isize)), Ok(i));
        }
    }
}

#[test]
fn offset_past_end_fails() {
    let units = utf16("\u{1F600}a");
    assert_eq!(offset_by_scalars(&units, 0, 2), Ok(3));
    assert!(matches!(
        offset_by_scalars(&units, 0, 3),
        Err(UnicodeError::IndexOutOfRange { index: 0, start: 0, limit: 3 })
    ));
    assert!(offset_by_scalars(&units, 3, -3).is_err());
}

#[test]
fn offset_with_lone_surrogates() {
    let units = [0xDC00u16, 0xD800, 0x41];
    assert_eq!(offset_by_scalars(&units, 0, 3), Ok(3));
    assert_eq!(offset_by_scalars(&units, 3, -3), Ok(0));
}

#[test]
fn offset_in_sub_range() {
    let units = utf16("ab\u{1F600}cd");
    assert_eq!(offset_by_scalars_in(&units, 2, 5, 2, 2), Ok(5));
    assert!(offset_by_scalars_in(&units, 2, 5, 2, 3).is_err());
    assert!(offset_by_scalars_in(&units, 2, 5, 6, 0).is_err());
    assert!(offset_by_scalars_in(&units, 2, 7, 2, 0).is_err());
}

// === Iteration ===

#[test]
fn scalars_forward_and_backward() {
    let text = "x\u{1F600}y\u{10FFFF}";
    let units = utf16(text);
    let expected: Vec<u32> = text.chars().map(|c| c as u32).collect();
    assert_eq!(scalars(&units).collect::<Vec<_>>(), expected);
    let mut reversed = expected.clone();
    reversed.reverse();
    assert_eq!(scalars(&units).rev().collect::<Vec<_>>(), reversed);
}

#[test]
fn scalars_matches_std_lossless_decode() {
    let units = [0x61u16, 0xD800, 0x62, 0xDC00, 0xD83D, 0xDE00];
    let ours: Vec<u32> = scalars(&units).collect();
    let std: Vec<u32> = char::decode_utf16(units.iter().copied())
        .map(|r| match r {
            Ok(c) => c as u32,
            Err(e) => e.unpaired_surrogate() as u32,
        })
        .collect();
    assert_eq!(ours, std);
}

#[test]
fn scalars_offset_tracks_position() {
    let units = utf16("\u{1F600}ab");
    let mut it = scalars(&units);
    let mut offsets = vec![it.offset()];
    while it.next().is_some() {
        offsets.push(it.offset());
    }
    assert_eq!(offsets, vec![0, 2, 3, 4]);
}

// === Well-formedness ===

#[test]
fn inspect_reports_content() {
    assert!(inspect(&utf16("ascii")).is_empty());
    let flags = inspect(&utf16("caf\u{E9} \u{1F600}"));
    assert_eq!(flags, SequenceFlags::NON_ASCII | SequenceFlags::SUPPLEMENTARY);
    assert!(flags.is_well_formed());

    let flags = inspect(&[0x41u16, 0xDC00]);
    assert!(flags.contains(SequenceFlags::LONE_LOW_SURROGATE));
    assert!(!flags.contains(SequenceFlags::LONE_HIGH_SURROGATE));
}

#[test]
fn well_formed_agrees_with_std() {
    let cases: [&[u16]; 5] = [
        &[],
        &[0x41, 0xD83D, 0xDE00],
        &[0xD83D],
        &[0xDE00, 0xD83D],
        &[0xD83D, 0xD83D, 0xDE00],
    ];
    for units in cases {
        let std_ok = char::decode_utf16(units.iter().copied()).all(|r| r.is_ok());
        assert_eq!(is_well_formed(units), std_ok, "{:X?}", units);
    }
}

// === Sequence types ===

#[test]
fn works_over_every_sequence_type() {
    let array = [0xD83Du16, 0xDE00, 0x41];
    let slice: &[u16] = &array;
    let vec = array.to_vec();
    let deque: VecDeque<u16> = array.iter().copied().collect();

    assert_eq!(count_scalars(&array), 2);
    assert_eq!(count_scalars(slice), 2);
    assert_eq!(count_scalars(&vec), 2);
    assert_eq!(count_scalars(&deque), 2);
    assert_eq!(scalar_before(&deque, 2), Ok(0x1F600));
    assert_eq!(offset_by_scalars(&deque, 0, 1), Ok(2));
}
