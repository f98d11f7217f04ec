//! # ucharclass
//!
//! UTF-16 surrogate arithmetic, scalar-aware scanning of code-unit
//! sequences, and Unicode block and script classification.
//!
//! Scalar values are plain `u32` ([`CodePoint`](codepoint::CodePoint)) and
//! code units plain `u16`. Sequences may contain lone surrogates: the
//! scanner hands them back as their raw values instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use ucharclass::prelude::*;
//!
//! let units: Vec<u16> = "a😀".encode_utf16().collect();
//! assert_eq!(count_scalars(&units), 2);
//! assert_eq!(scalar_at(&units, 1).unwrap(), 0x1F600);
//!
//! assert_eq!(classify_block(0x1F600).unwrap(), Some(Block::Emoticons));
//! assert_eq!(classify_script(0x0416).unwrap(), Script::Cyrillic);
//! assert_eq!("Latin".parse::<Script>().unwrap(), Script::Latin);
//! ```
//!
//! Invalid input is reported, never guessed:
//!
//! ```rust
//! use ucharclass::prelude::*;
//!
//! assert_eq!(encode(0x110000), Err(UnicodeError::InvalidCodePoint(0x110000)));
//! assert!(matches!(
//!     scalar_at(&[0x41u16], 1),
//!     Err(UnicodeError::IndexOutOfRange { index: 1, .. })
//! ));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`codepoint`] | Scalar/surrogate predicates, compose, decompose, encode |
//! | [`scanner`] | Reading, counting and offsetting over code-unit sequences |
//! | [`unicode`] | Range classifiers for blocks and scripts, lookup by name |
//! | [`error`] | [`UnicodeError`](error::UnicodeError) and `Result` alias |
//!
//! Block and script tables are generated at build time from the
//! UCD-format files in `data/`. Set `UCHARCLASS_UCD_DIR` to a directory
//! holding `Blocks.txt`, `Scripts.txt` and `PropertyValueAliases.txt` (for
//! example an unpacked UCD release) to build against it instead; the
//! crate's own `data/BlockAliases.txt` is used either way.

pub mod codepoint;
pub mod error;
pub mod prelude;
pub mod scanner;
pub mod unicode;

pub use error::{Result, UnicodeError};
