//! Methods and the by-signature method index.

use std::collections::HashMap;

use jclass_core::AccessFlags;

use crate::attribute::{AttributeInfo, AttributeSet};
use crate::constant_pool::{ConstantPool, CpIndex, PoolError};

/// A method as read from the class file, before its attributes are indexed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodInfo {
    pub access_flags: AccessFlags,
    pub name_index: CpIndex,
    pub descriptor_index: CpIndex,
    pub attributes: Vec<AttributeInfo>,
}

/// Staged construction of one [`MethodInfo`].
#[derive(Debug, Default)]
pub struct MethodBuilder {
    access_flags: u16,
    name_index: CpIndex,
    descriptor_index: CpIndex,
    attributes: Vec<AttributeInfo>,
}

impl MethodBuilder {
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

    pub fn build(self) -> MethodInfo {
        MethodInfo {
            access_flags: AccessFlags::from_raw(self.access_flags),
            name_index: self.name_index,
            descriptor_index: self.descriptor_index,
            attributes: self.attributes,
        }
    }
}

/// A method of a frozen class file.
#[derive(Clone, Debug)]
pub struct Method {
    access_flags: AccessFlags,
    name_index: CpIndex,
    descriptor_index: CpIndex,
    attributes: AttributeSet,
}

impl Method {
    fn from_info(info: MethodInfo, pool: &ConstantPool) -> Self {
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

    pub fn is_abstract(&self) -> bool {
        self.access_flags.is_abstract()
    }

    pub fn name_index(&self) -> CpIndex {
        self.name_index
    }

    pub fn descriptor_index(&self) -> CpIndex {
        self.descriptor_index
    }

    /// Resolved name.
    ///
    /// `pool` must be the pool of the class file this method came from; any
    /// other pool yields unrelated text. [`ClassFile::method_name`] supplies
    /// the right one.
    ///
    /// [`ClassFile::method_name`]: crate::ClassFile::method_name
    pub fn name<'p>(&self, pool: &'p ConstantPool) -> Result<&'p str, PoolError> {
        pool.utf8_str(self.name_index)
    }

    /// Resolved descriptor. Same pool contract as [`name`](Self::name).
    pub fn descriptor<'p>(&self, pool: &'p ConstantPool) -> Result<&'p str, PoolError> {
        pool.utf8_str(self.descriptor_index)
    }

    /// Name followed by descriptor, e.g. `run(I)V`. Unique within a class.
    /// Same pool contract as [`name`](Self::name).
    pub fn signature(&self, pool: &ConstantPool) -> Result<String, PoolError> {
        let name = self.name(pool)?;
        let descriptor = self.descriptor(pool)?;
        Ok(format!("{name}{descriptor}"))
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

/// Methods in file order, indexed by signature.
///
/// Overloads have distinct signatures and are indexed separately. There is
/// no lookup by bare name. A repeated signature keeps the last method in the
/// index and both in [`iter`](Self::iter).
#[derive(Clone, Debug, Default)]
pub struct MethodSet {
    methods: Vec<Method>,
    by_signature: HashMap<String, usize>,
    unresolved: usize,
}

impl MethodSet {
    /// Index raw methods, resolving their keys and attribute names against `pool`.
    pub fn new(infos: Vec<MethodInfo>, pool: &ConstantPool) -> Self {
        let methods: Vec<Method> = infos
            .into_iter()
            .map(|info| Method::from_info(info, pool))
            .collect();
        let mut by_signature = HashMap::with_capacity(methods.len());
        let mut unresolved = 0;
        for (pos, method) in methods.iter().enumerate() {
            match method.signature(pool) {
                Ok(signature) => {
                    by_signature.insert(signature, pos);
                }
                Err(err) => {
                    log::debug!("method {pos} has no resolvable signature: {err}");
                    unresolved += 1;
                }
            }
        }
        Self {
            methods,
            by_signature,
            unresolved,
        }
    }

    pub fn by_signature(&self, signature: &str) -> Option<&Method> {
        self.by_signature.get(signature).map(|&pos| &self.methods[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Method> {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Number of methods missing from the signature index.
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }
}

impl<'a> IntoIterator for &'a MethodSet {
    type Item = &'a Method;
    type IntoIter = std::slice::Iter<'a, Method>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
