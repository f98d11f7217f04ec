// unicode/block.rs - Unicode blocks: named, contiguous code-point ranges.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;

use super::names::NameRegistry;
use super::range::RangeClassifier;
use crate::codepoint::CodePoint;
use crate::error::{Result, UnicodeError};

pub(crate) struct BlockInfo {
    name: &'static str,
    first: CodePoint,
    last: CodePoint,
}

include!(concat!(env!("OUT_DIR"), "/blocks.rs"));

/// Block table. Code points outside every block map to `None`.
pub static BLOCK_RANGES: RangeClassifier<'static, Option<Block>> =
    RangeClassifier::new(&BLOCK_STARTS, &BLOCK_LABELS);

impl Block {
    fn info(self) -> &'static BlockInfo {
        &BLOCK_INFO[self as usize]
    }

    /// Display name as in Blocks.txt, e.g. `"Latin Extended-A"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Inclusive code-point range of the block.
    ///
    /// ```
    /// use ucharclass::unicode::Block;
    ///
    /// assert_eq!(Block::BasicLatin.range(), 0x0000..=0x007F);
    /// ```
    pub fn range(self) -> RangeInclusive<CodePoint> {
        let info = self.info();
        info.first..=info.last
    }

    /// Every block, in code-point order.
    pub fn all() -> &'static [Block] {
        &ALL_BLOCKS
    }

    /// Block containing `c`, if any.
    pub fn of(c: char) -> Option<Block> {
        BLOCK_RANGES.classify_valid(c as CodePoint)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Block {
    type Err = UnicodeError;

    fn from_str(s: &str) -> Result<Block> {
        block_by_name(s)
    }
}

fn registry() -> &'static NameRegistry<Block> {
    static REGISTRY: OnceLock<NameRegistry<Block>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut reg = NameRegistry::new();
        for &block in Block::all() {
            reg.register(block.name(), block);
        }
        for &(alias, block) in BLOCK_ALIASES.iter() {
            reg.register(alias, block);
        }
        let reg = reg.finish();
        tracing::debug!(names = reg.len(), blocks = ALL_BLOCKS.len(), "built block name registry");
        reg
    })
}

/// Block registered under `name`.
///
/// Matching ignores case, spaces, hyphens and underscores. Historical names
/// such as `"Greek"` and short aliases such as `"ASCII"` are accepted.
///
/// ```
/// use ucharclass::unicode::{block_by_name, Block};
///
/// assert_eq!(block_by_name("BASIC_LATIN"), Ok(Block::BasicLatin));
/// assert_eq!(block_by_name("Greek"), Ok(Block::GreekAndCoptic));
/// assert!(block_by_name("Klingon").is_err());
/// ```
pub fn block_by_name(name: &str) -> Result<Block> {
    registry()
        .lookup(name)
        .ok_or_else(|| UnicodeError::UnknownName(name.to_string()))
}

/// Block containing the scalar value `cp`, or `None` outside every block.
///
/// ```
/// use ucharclass::unicode::{classify_block, Block};
///
/// assert_eq!(classify_block(0x0041), Ok(Some(Block::BasicLatin)));
/// assert_eq!(classify_block(0x1F600), Ok(Some(Block::Emoticons)));
/// assert_eq!(classify_block(0x2FE0), Ok(None));
/// assert!(classify_block(0x110000).is_err());
/// ```
pub fn classify_block(cp: CodePoint) -> Result<Option<Block>> {
    BLOCK_RANGES.classify(cp)
}

/// Block of a single code unit, read as a BMP scalar value.
pub fn classify_block_unit(unit: u16) -> Option<Block> {
    BLOCK_RANGES.classify_valid(unit as CodePoint)
}
