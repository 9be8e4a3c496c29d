//! Attributes: named byte blobs attached to classes, fields and methods.

use indexmap::IndexMap;

use crate::constant_pool::{ConstantPool, CpIndex, PoolError};

/// A raw attribute as read from the class file.
///
/// The payload is never interpreted here; consumers that understand a
/// particular attribute decode `data()` themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeInfo {
    name_index: CpIndex,
    length: u32,
    data: Box<[u8]>,
}

impl AttributeInfo {
    pub fn new(name_index: CpIndex, length: u32, data: impl Into<Box<[u8]>>) -> Self {
        Self {
            name_index,
            length,
            data: data.into(),
        }
    }

    pub fn name_index(&self) -> CpIndex {
        self.name_index
    }

    /// Length declared in the attribute header. Not checked against `data`.
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn name<'p>(&self, pool: &'p ConstantPool) -> Result<&'p str, PoolError> {
        pool.utf8_str(self.name_index)
    }
}

/// Staged construction of one [`AttributeInfo`].
#[derive(Debug, Default)]
pub struct AttributeBuilder {
    name_index: CpIndex,
    length: u32,
    data: Vec<u8>,
}

impl AttributeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_index(mut self, index: CpIndex) -> Self {
        self.name_index = index;
        self
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    pub fn data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> AttributeInfo {
        AttributeInfo::new(self.name_index, self.length, self.data)
    }
}

/// Ordered attributes with a by-name index.
///
/// Names are resolved once, when the set is built. The index is derived
/// from the entries and never patched afterwards. An entry whose name does
/// not resolve stays in [`iter`](Self::iter) but cannot be found by name.
#[derive(Clone, Debug, Default)]
pub struct AttributeSet {
    entries: Vec<AttributeInfo>,
    /// Resolved name to positions in `entries`, in first-appearance order.
    by_name: IndexMap<String, Vec<usize>>,
    unresolved: usize,
}

impl AttributeSet {
    pub fn new(entries: Vec<AttributeInfo>, pool: &ConstantPool) -> Self {
        let mut by_name: IndexMap<String, Vec<usize>> = IndexMap::new();
        let mut unresolved = 0;

        for (pos, entry) in entries.iter().enumerate() {
            match entry.name(pool) {
                Ok(name) => by_name.entry(name.to_owned()).or_default().push(pos),
                Err(err) => {
                    log::debug!("attribute {pos} has no resolvable name: {err}");
                    unresolved += 1;
                }
            }
        }

        Self {
            entries,
            by_name,
            unresolved,
        }
    }

    /// Whether an attribute with this name is present.
    ///
    /// Accepts raw text or an [`AttributeName`](jclass_core::AttributeName).
    pub fn has(&self, name: impl AsRef<str>) -> bool {
        self.by_name.contains_key(name.as_ref())
    }

    /// Attributes sharing `name`, in file order.
    pub fn get(&self, name: impl AsRef<str>) -> impl Iterator<Item = &AttributeInfo> {
        let positions = self
            .by_name
            .get(name.as_ref())
            .map(Vec::as_slice)
            .unwrap_or_default();
        positions.iter().map(|&pos| &self.entries[pos])
    }

    /// Distinct resolved names, in first-appearance order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// All attributes in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries missing from the name index.
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a AttributeInfo;
    type IntoIter = std::slice::Iter<'a, AttributeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
