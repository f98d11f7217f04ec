// unicode/names.rs - Loose-matching name lookup for blocks and scripts.
//
// Names are compared after normalization: ASCII letters uppercased and
// ' ', '-', '_' removed, so "Basic Latin", "BASIC_LATIN" and "basiclatin"
// all find the same entry.

use smallvec::SmallVec;

/// Normalized lookup key. Almost every name fits inline.
pub(crate) type NameKey = SmallVec<[u8; 64]>;

/// Normalize `name` for lookup; `None` if it contains non-ASCII characters.
pub(crate) fn normalize(name: &str) -> Option<NameKey> {
    let mut key = NameKey::new();
    for &b in name.as_bytes() {
        match b {
            b' ' | b'-' | b'_' => continue,
            0x80..=0xFF => return None,
            _ => key.push(b.to_ascii_uppercase()),
        }
    }
    Some(key)
}

/// Sorted table of normalized names, searched by binary search.
///
/// Filled with [`register`](Self::register), then sealed with
/// [`finish`](Self::finish). Immutable afterwards.
#[derive(Debug)]
pub(crate) struct NameRegistry<L> {
    entries: Vec<(Box<[u8]>, L)>,
}

impl<L: Copy + PartialEq + std::fmt::Debug> NameRegistry<L> {
    pub(crate) fn new() -> Self {
        NameRegistry { entries: Vec::new() }
    }

    /// Add `name` (canonical name or alias) for `label`.
    pub(crate) fn register(&mut self, name: &str, label: L) {
        match normalize(name) {
            Some(key) => self.entries.push((key.into_vec().into_boxed_slice(), label)),
            None => debug_assert!(false, "non-ASCII name {:?}", name),
        }
    }

    /// Sort the entries and collapse duplicate keys.
    ///
    /// Two different labels under one key is a data error.
    pub(crate) fn finish(mut self) -> Self {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self.entries.dedup_by(|b, a| {
            if a.0 != b.0 {
                return false;
            }
            debug_assert!(
                a.1 == b.1,
                "name {:?} maps to both {:?} and {:?}",
                String::from_utf8_lossy(&a.0),
                a.1,
                b.1
            );
            true
        });
        self.entries.shrink_to_fit();
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Label registered under `name`, after normalization.
    pub(crate) fn lookup(&self, name: &str) -> Option<L> {
        let key = normalize(name)?;
        self.entries
            .binary_search_by(|(k, _)| k[..].cmp(&key[..]))
            .ok()
            .map(|idx| self.entries[idx].1)
    }
}
