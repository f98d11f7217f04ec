// unicode/script.rs - Unicode scripts, with ISO 15924 codes.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::names::NameRegistry;
use super::range::RangeClassifier;
use crate::codepoint::CodePoint;
use crate::error::{Result, UnicodeError};

pub(crate) struct ScriptInfo {
    name: &'static str,
    code: &'static str,
    aliases: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/scripts.rs"));

/// Script table. Unassigned, surrogate and private-use code points map to
/// [`Script::Unknown`].
pub static SCRIPT_RANGES: RangeClassifier<'static, Script> =
    RangeClassifier::new(&SCRIPT_STARTS, &SCRIPT_LABELS);

impl Script {
    fn info(self) -> &'static ScriptInfo {
        &SCRIPT_INFO[self as usize]
    }

    /// UCD long name, e.g. `"Old_Italic"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Four-letter ISO 15924 code, e.g. `"Ital"`.
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// Every script, ordered by ISO 15924 code.
    pub fn all() -> &'static [Script] {
        &ALL_SCRIPTS
    }

    /// Script of `c`.
    pub fn of(c: char) -> Script {
        SCRIPT_RANGES.classify_valid(c as CodePoint)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = UnicodeError;

    fn from_str(s: &str) -> Result<Script> {
        script_by_name(s)
    }
}

fn registry() -> &'static NameRegistry<Script> {
    static REGISTRY: OnceLock<NameRegistry<Script>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut reg = NameRegistry::new();
        for &script in Script::all() {
            let info = script.info();
            reg.register(info.name, script);
            reg.register(info.code, script);
            for alias in info.aliases {
                reg.register(alias, script);
            }
        }
        let reg = reg.finish();
        tracing::debug!(names = reg.len(), scripts = ALL_SCRIPTS.len(), "built script name registry");
        reg
    })
}

/// Script registered under `name`: its long name, ISO 15924 code or an
/// alias. Matching ignores case, spaces, hyphens and underscores.
///
/// ```
/// use ucharclass::unicode::{script_by_name, Script};
///
/// assert_eq!(script_by_name("old italic"), Ok(Script::OldItalic));
/// assert_eq!(script_by_name("Cyrl"), Ok(Script::Cyrillic));
/// assert_eq!(script_by_name("Qaac"), Ok(Script::Coptic));
/// assert!(script_by_name("Elvish").is_err());
/// ```
pub fn script_by_name(name: &str) -> Result<Script> {
    registry()
        .lookup(name)
        .ok_or_else(|| UnicodeError::UnknownName(name.to_string()))
}

/// Script of the scalar value `cp`.
///
/// Total over U+0000..=U+10FFFF; code points with no script are
/// [`Script::Unknown`].
///
/// ```
/// use ucharclass::unicode::{classify_script, Script};
///
/// assert_eq!(classify_script(0x0041), Ok(Script::Latin));
/// assert_eq!(classify_script(0x0300), Ok(Script::Inherited));
/// assert_eq!(classify_script(0xE000), Ok(Script::Unknown));
/// assert!(classify_script(0x110000).is_err());
/// ```
pub fn classify_script(cp: CodePoint) -> Result<Script> {
    SCRIPT_RANGES.classify(cp)
}

/// Script of a single code unit, read as a BMP scalar value.
///
/// Surrogate units are [`Script::Unknown`].
pub fn classify_script_unit(unit: u16) -> Script {
    SCRIPT_RANGES.classify_valid(unit as CodePoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_table_matches_enum_order() {
        for (k, &script) in Script::all().iter().enumerate() {
            assert_eq!(script as usize, k);
            assert_eq!(script.code().len(), 4, "{}", script);
        }
    }

    #[test]
    fn codes_and_names() {
        assert_eq!(Script::Latin.code(), "Latn");
        assert_eq!(Script::OldItalic.name(), "Old_Italic");
        assert_eq!(Script::Common.code(), "Zyyy");
        assert_eq!(Script::Unknown.code(), "Zzzz");
        assert_eq!(Script::Han.to_string(), "Han");
    }

    #[test]
    fn every_name_and_code_parses() {
        for &script in Script::all() {
            assert_eq!(script.name().parse::<Script>(), Ok(script));
            assert_eq!(script.code().parse::<Script>(), Ok(script));
        }
    }

    #[test]
    fn surrogates_and_private_use_are_unknown() {
        assert_eq!(classify_script_unit(0xD800), Script::Unknown);
        assert_eq!(classify_script_unit(0xDFFF), Script::Unknown);
        assert_eq!(classify_script(0xF0000), Ok(Script::Unknown));
        assert_eq!(classify_script(0x10FFFF), Ok(Script::Unknown));
    }

    #[test]
    fn char_variant() {
        assert_eq!(Script::of('Ж'), Script::Cyrillic);
        assert_eq!(Script::of('あ'), Script::Hiragana);
        assert_eq!(Script::of('1'), Script::Common);
    }
}
