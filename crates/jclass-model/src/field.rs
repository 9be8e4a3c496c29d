//! Fields and the by-name field index.

use std::collections::HashMap;

use jclass_core::AccessFlags;

use crate::attribute::{AttributeInfo, AttributeSet};
use crate::constant_pool::{ConstantPool, CpIndex, PoolError};

/// A field as read from the class file, before its attributes are indexed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub access_flags: AccessFlags,
    pub name_index: CpIndex,
    pub descriptor_index: CpIndex,
    pub attributes: Vec<AttributeInfo>,
}

/// Staged construction of one [`FieldInfo`].
#[derive(Debug, Default)]
pub struct FieldBuilder {
    access_flags: u16,
    name_index: CpIndex,
    descriptor_index: CpIndex,
    attributes: Vec<AttributeInfo>,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_flags(mut self, flags: u16) -> Self {
        self.access_flags = flags;
        self
    }

    pub fn name_index(mut self, index: CpIndex) -> Self {
        self.name_index = index;
        self
    }

    pub fn descriptor_index(mut self, index: CpIndex) -> Self {
        self.descriptor_index = index;
        self
    }

    pub fn attributes(mut self, attributes: Vec<AttributeInfo>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn build(self) -> FieldInfo {
        FieldInfo {
            access_flags: AccessFlags::from_raw(self.access_flags),
            name_index: self.name_index,
            descriptor_index: self.descriptor_index,
            attributes: self.attributes,
        }
    }
}

/// A field of a frozen class file.
#[derive(Clone, Debug)]
pub struct Field {
    access_flags: AccessFlags,
    name_index: CpIndex,
    descriptor_index: CpIndex,
    attributes: AttributeSet,
}

impl Field {
    fn from_info(info: FieldInfo, pool: &ConstantPool) -> Self {
        Self {
            access_flags: info.access_flags,
            name_index: info.name_index,
            descriptor_index: info.descriptor_index,
            attributes: AttributeSet::new(info.attributes, pool),
        }
    }

    pub fn access_flags(&self) -> AccessFlags {
        self.access_flags
    }

    pub fn is_public(&self) -> bool {
        self.access_flags.is_public()
    }

    pub fn is_protected(&self) -> bool {
        self.access_flags.is_protected()
    }

    pub fn is_static(&self) -> bool {
        self.access_flags.is_static()
    }

    pub fn is_final(&self) -> bool {
        self.access_flags.is_final()
    }

    pub fn name_index(&self) -> CpIndex {
        self.name_index
    }

    pub fn descriptor_index(&self) -> CpIndex {
        self.descriptor_index
    }

    /// Resolved name.
    ///
    /// `pool` must be the pool of the class file this field came from; any
    /// other pool yields unrelated text. [`ClassFile::field_name`] supplies
    /// the right one.
    ///
    /// [`ClassFile::field_name`]: crate::ClassFile::field_name
    pub fn name<'p>(&self, pool: &'p ConstantPool) -> Result<&'p str, PoolError> {
        pool.utf8_str(self.name_index)
    }

    /// Resolved descriptor. Same pool contract as [`name`](Self::name).
    pub fn descriptor<'p>(&self, pool: &'p ConstantPool) -> Result<&'p str, PoolError> {
        pool.utf8_str(self.descriptor_index)
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

/// Fields in file order, indexed by resolved name.
///
/// Field names should be unique; if a malformed file repeats one, the last
/// field wins the index while both stay in [`iter`](Self::iter).
#[derive(Clone, Debug, Default)]
pub struct FieldSet {
    fields: Vec<Field>,
    by_name: HashMap<String, usize>,
    unresolved: usize,
}

impl FieldSet {
    /// Index raw fields, resolving their keys and attribute names against `pool`.
    pub fn new(infos: Vec<FieldInfo>, pool: &ConstantPool) -> Self {
        let fields: Vec<Field> = infos
            .into_iter()
            .map(|info| Field::from_info(info, pool))
            .collect();
        let mut by_name = HashMap::with_capacity(fields.len());
        let mut unresolved = 0;
        for (pos, field) in fields.iter().enumerate() {
            match field.name(pool) {
                Ok(name) => {
                    by_name.insert(name.to_owned(), pos);
                }
                Err(err) => {
                    log::debug!("field {pos} has no resolvable name: {err}");
                    unresolved += 1;
                }
            }
        }
        Self {
            fields,
            by_name,
            unresolved,
        }
    }

    pub fn by_name(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name).map(|&pos| &self.fields[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields missing from the name index.
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
