// build.rs -- Generate the block and script tables from UCD-format data files.
//
// UCD inputs (in `data/`, or the directory named by UCHARCLASS_UCD_DIR):
//   Blocks.txt                 block ranges and names
//   Scripts.txt                script ranges
//   PropertyValueAliases.txt   script long names, ISO 15924 codes, aliases
//
// Crate input (always in `data/`, not part of the UCD):
//   BlockAliases.txt           extra lookup names for blocks
//
// Outputs (in OUT_DIR): blocks.rs, scripts.rs, included by src/unicode/.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CODE_POINT: u32 = 0x10FFFF;

// === Data file parsing ===

fn crate_data_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap()).join("data")
}

fn ucd_dir() -> PathBuf {
    match env::var_os("UCHARCLASS_UCD_DIR") {
        Some(dir) => PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap()).join(dir),
        None => crate_data_dir(),
    }
}

/// Calls `f` with the `;`-separated, trimmed fields of every data line.
/// Comments (`#` to end of line) and blank lines are skipped.
fn parse_file<F: FnMut(&[&str])>(dir: &Path, name: &str, mut f: F) {
    let path = dir.join(name);
    println!("cargo:rerun-if-changed={}", path.display());
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));

    for line in text.lines() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        f(&fields);
    }
}

fn parse_range(s: &str) -> (u32, u32) {
    let parse = |hex: &str| {
        u32::from_str_radix(hex, 16).unwrap_or_else(|_| panic!("bad code point {:?}", hex))
    };
    let (first, last) = match s.split_once("..") {
        Some((a, b)) => (parse(a), parse(b)),
        None => (parse(s), parse(s)),
    };
    assert!(first <= last && last <= MAX_CODE_POINT, "bad range {:?}", s);
    (first, last)
}

// === Identifiers ===

/// "Latin Extended-A" -> "LatinExtendedA", "CJK Strokes" -> "CjkStrokes"
fn block_ident(name: &str) -> String {
    let mut ident = String::new();
    for word in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            ident.push(first.to_ascii_uppercase());
            ident.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    ident
}

/// "Old_Italic" -> "OldItalic", "SignWriting" -> "SignWriting"
fn script_ident(long_name: &str) -> String {
    let mut ident = String::new();
    for word in long_name.split('_') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            ident.push(first.to_ascii_uppercase());
            ident.extend(chars);
        }
    }
    ident
}

// === Range tables ===

/// Sorts `ranges`, fills every gap in 0..=MAX_CODE_POINT with `fill` and
/// merges neighbours carrying the same label. Returns the start boundary
/// of each resulting entry with its label.
fn partition<T: Clone + PartialEq>(mut ranges: Vec<(u32, u32, T)>, fill: T) -> Vec<(u32, T)> {
    ranges.sort_by_key(|r| r.0);

    let mut out: Vec<(u32, T)> = Vec::with_capacity(ranges.len() * 2);
    let mut push = |start: u32, label: T| {
        let same = matches!(out.last(), Some((_, prev)) if *prev == label);
        if !same {
            out.push((start, label));
        }
    };

    let mut next = 0u32;
    for (first, last, label) in ranges {
        assert!(first >= next, "overlapping range at {:04X}", first);
        if first > next {
            push(next, fill.clone());
        }
        push(first, label);
        next = last + 1;
    }
    if next <= MAX_CODE_POINT {
        push(next, fill);
    }
    out
}

fn write_starts(out: &mut String, name: &str, table: &[(u32, String)]) {
    writeln!(out, "pub(crate) static {}: [CodePoint; {}] = [", name, table.len()).unwrap();
    for chunk in table.chunks(8) {
        out.push_str("   ");
        for (start, _) in chunk {
            write!(out, " 0x{:04X},", start).unwrap();
        }
        out.push('\n');
    }
    out.push_str("];\n\n");
}

fn write_labels(out: &mut String, name: &str, ty: &str, table: &[(u32, String)]) {
    writeln!(out, "pub(crate) static {}: [{}; {}] = [", name, ty, table.len()).unwrap();
    for (start, label) in table {
        writeln!(out, "    {}, // {:04X}", label, start).unwrap();
    }
    out.push_str("];\n\n");
}

// === Blocks ===

struct BlockRow {
    first: u32,
    last: u32,
    name: String,
    ident: String,
}

fn generate_blocks(dir: &Path, alias_dir: &Path, out_dir: &Path) {
    let mut blocks: Vec<BlockRow> = Vec::new();
    parse_file(dir, "Blocks.txt", |fields| {
        assert_eq!(fields.len(), 2, "malformed Blocks.txt line: {:?}", fields);
        let (first, last) = parse_range(fields[0]);
        let name = fields[1].to_string();
        let ident = block_ident(&name);
        blocks.push(BlockRow { first, last, name, ident });
    });
    blocks.sort_by_key(|b| b.first);

    let mut aliases: Vec<(String, String)> = Vec::new();
    parse_file(alias_dir, "BlockAliases.txt", |fields| {
        assert_eq!(fields.len(), 2, "malformed BlockAliases.txt line: {:?}", fields);
        let target = blocks
            .iter()
            .find(|b| b.name == fields[1])
            .unwrap_or_else(|| panic!("alias {:?} names unknown block {:?}", fields[0], fields[1]));
        aliases.push((fields[0].to_string(), target.ident.clone()));
    });

    let mut out = String::new();
    out.push_str("// @generated by build.rs from Blocks.txt and BlockAliases.txt\n\n");

    out.push_str("/// A Unicode block: a named, contiguous range of code points.\n");
    out.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]\n");
    out.push_str("pub enum Block {\n");
    for b in &blocks {
        writeln!(out, "    /// {}, U+{:04X}..U+{:04X}.", b.name, b.first, b.last).unwrap();
        writeln!(out, "    {},", b.ident).unwrap();
    }
    out.push_str("}\n\n");

    writeln!(out, "pub(crate) static ALL_BLOCKS: [Block; {}] = [", blocks.len()).unwrap();
    for b in &blocks {
        writeln!(out, "    Block::{},", b.ident).unwrap();
    }
    out.push_str("];\n\n");

    writeln!(out, "pub(crate) static BLOCK_INFO: [BlockInfo; {}] = [", blocks.len()).unwrap();
    for b in &blocks {
        writeln!(
            out,
            "    BlockInfo {{ name: {:?}, first: 0x{:04X}, last: 0x{:04X} }},",
            b.name, b.first, b.last
        )
        .unwrap();
    }
    out.push_str("];\n\n");

    let ranges = blocks
        .iter()
        .map(|b| (b.first, b.last, format!("Some(Block::{})", b.ident)))
        .collect();
    let table = partition(ranges, "None".to_string());
    write_starts(&mut out, "BLOCK_STARTS", &table);
    write_labels(&mut out, "BLOCK_LABELS", "Option<Block>", &table);

    writeln!(out, "pub(crate) static BLOCK_ALIASES: [(&str, Block); {}] = [", aliases.len()).unwrap();
    for (alias, ident) in &aliases {
        writeln!(out, "    ({:?}, Block::{}),", alias, ident).unwrap();
    }
    out.push_str("];\n");

    fs::write(out_dir.join("blocks.rs"), out).unwrap();
}

// === Scripts ===

struct ScriptRow {
    code: String,
    long_name: String,
    aliases: Vec<String>,
    ident: String,
}

fn generate_scripts(dir: &Path, out_dir: &Path) {
    let mut scripts: Vec<ScriptRow> = Vec::new();
    parse_file(dir, "PropertyValueAliases.txt", |fields| {
        if fields[0] != "sc" {
            return;
        }
        assert!(fields.len() >= 3, "malformed sc line: {:?}", fields);
        scripts.push(ScriptRow {
            code: fields[1].to_string(),
            long_name: fields[2].to_string(),
            aliases: fields[3..].iter().map(|s| s.to_string()).collect(),
            ident: script_ident(fields[2]),
        });
    });
    assert!(
        scripts.iter().any(|s| s.long_name == "Unknown"),
        "PropertyValueAliases.txt has no Unknown script"
    );

    let mut ranges: Vec<(u32, u32, String)> = Vec::new();
    parse_file(dir, "Scripts.txt", |fields| {
        assert!(fields.len() >= 2, "malformed Scripts.txt line: {:?}", fields);
        let (first, last) = parse_range(fields[0]);
        let script = scripts
            .iter()
            .find(|s| s.long_name == fields[1])
            .unwrap_or_else(|| panic!("Scripts.txt names unknown script {:?}", fields[1]));
        ranges.push((first, last, format!("Script::{}", script.ident)));
    });

    let mut out = String::new();
    out.push_str("// @generated by build.rs from Scripts.txt and PropertyValueAliases.txt\n\n");

    out.push_str("/// A Unicode script, as assigned by the `Script` character property.\n");
    out.push_str("///\n");
    out.push_str("/// Code points with no assigned script belong to [`Script::Unknown`].\n");
    out.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]\n");
    out.push_str("pub enum Script {\n");
    for s in &scripts {
        writeln!(out, "    /// {} ({}).", s.long_name, s.code).unwrap();
        writeln!(out, "    {},", s.ident).unwrap();
    }
    out.push_str("}\n\n");

    writeln!(out, "pub(crate) static ALL_SCRIPTS: [Script; {}] = [", scripts.len()).unwrap();
    for s in &scripts {
        writeln!(out, "    Script::{},", s.ident).unwrap();
    }
    out.push_str("];\n\n");

    writeln!(out, "pub(crate) static SCRIPT_INFO: [ScriptInfo; {}] = [", scripts.len()).unwrap();
    for s in &scripts {
        writeln!(
            out,
            "    ScriptInfo {{ name: {:?}, code: {:?}, aliases: &{:?} }},",
            s.long_name, s.code, s.aliases
        )
        .unwrap();
    }
    out.push_str("];\n\n");

    let table = partition(ranges, "Script::Unknown".to_string());
    write_starts(&mut out, "SCRIPT_STARTS", &table);
    write_labels(&mut out, "SCRIPT_LABELS", "Script", &table);

    fs::write(out_dir.join("scripts.rs"), out).unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=UCHARCLASS_UCD_DIR");

    let ucd = ucd_dir();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    generate_blocks(&ucd, &crate_data_dir(), &out_dir);
    generate_scripts(&ucd, &out_dir);
}
