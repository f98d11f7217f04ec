// unicode/mod.rs - Block and script classification of scalar values.
//
// Both properties partition the code space into ranges. The tables are
// generated by build.rs from UCD-format files in data/ and checked when
// the classifier statics are evaluated at compile time.

mod block;
mod names;
mod range;
mod script;

pub use block::{block_by_name, classify_block, classify_block_unit, Block, BLOCK_RANGES};
pub use range::RangeClassifier;
pub use script::{classify_script, classify_script_unit, script_by_name, Script, SCRIPT_RANGES};
