// prelude.rs - Convenient re-exports of the everyday API.
//
//! # Prelude
//!
//! ```
//! use ucharclass::prelude::*;
//!
//! let units = encode(0x10437).unwrap();
//! assert_eq!(units.as_slice(), &[0xD801, 0xDC37]);
//! assert_eq!(classify_script(0x10437).unwrap(), Script::Deseret);
//! ```

pub use crate::codepoint::{
    compose, decompose, encode, encode_all, encode_into, is_bmp, is_high_surrogate,
    is_low_surrogate, is_supplementary, is_surrogate, is_surrogate_pair, is_valid_scalar,
    units_needed, CodePoint, CodeUnit,
};
pub use crate::error::{Result, UnicodeError};
pub use crate::scanner::{
    count_scalars, count_scalars_in, inspect, is_well_formed, offset_by_scalars,
    offset_by_scalars_in, scalar_at, scalar_at_bounded, scalar_before, scalar_before_bounded,
    scalars, CodeUnitSeq, SequenceFlags,
};
pub use crate::unicode::{
    block_by_name, classify_block, classify_block_unit, classify_script, classify_script_unit,
    script_by_name, Block, Script,
};
