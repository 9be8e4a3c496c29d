//! Staged construction of a [`ClassFile`].
//!
//! The reader feeds raw wire values in file order; nothing is validated
//! here. [`ClassFileBuilder::build`] moves everything into a frozen
//! [`ClassFile`], resolving set keys and attribute names against the pool on
//! the way. A builder builds once.

use jclass_core::AccessFlags;

use crate::attribute::{AttributeBuilder, AttributeInfo, AttributeSet};
use crate::class_file::ClassFile;
use crate::constant_pool::{ConstantPool, CpIndex};
use crate::field::{FieldBuilder, FieldInfo, FieldSet};
use crate::method::{MethodBuilder, MethodInfo, MethodSet};

/// Builder misuse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("class file builder already built")]
    DoubleBuild,
}

/// Values collected before freezing.
#[derive(Debug, Default)]
struct Parts {
    magic: u32,
    minor: u16,
    major: u16,
    pool: ConstantPool,
    access_flags: u16,
    this_class: CpIndex,
    super_class: CpIndex,
    interfaces: Vec<CpIndex>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    attributes: Vec<AttributeInfo>,
    valid: bool,
    extraneous_data: bool,
    digest: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct ClassFileBuilder {
    /// `None` once built.
    parts: Option<Parts>,
}

impl Default for ClassFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassFileBuilder {
    pub fn new() -> Self {
        Self {
            parts: Some(Parts::default()),
        }
    }

    pub fn new_field(&self) -> FieldBuilder {
        FieldBuilder::new()
    }

    pub fn new_method(&self) -> MethodBuilder {
        MethodBuilder::new()
    }

    pub fn new_attribute(&self) -> AttributeBuilder {
        AttributeBuilder::new()
    }

    /// Whether [`build`](Self::build) has already run.
    pub fn is_built(&self) -> bool {
        self.parts.is_none()
    }

    fn with_parts(&mut self, set: impl FnOnce(&mut Parts)) -> &mut Self {
        match self.parts.as_mut() {
            Some(parts) => set(parts),
            None => log::warn!("class file builder used after build; value ignored"),
        }
        self
    }

    pub fn magic(&mut self, magic: u32) -> &mut Self {
        self.with_parts(|p| p.magic = magic)
    }

    pub fn minor(&mut self, minor: u16) -> &mut Self {
        self.with_parts(|p| p.minor = minor)
    }

    pub fn major(&mut self, major: u16) -> &mut Self {
        self.with_parts(|p| p.major = major)
    }

    /// The populated pool. Must be set before `build` for names to resolve.
    pub fn constant_pool(&mut self, pool: ConstantPool) -> &mut Self {
        self.with_parts(|p| p.pool = pool)
    }

    pub fn access_flags(&mut self, flags: u16) -> &mut Self {
        self.with_parts(|p| p.access_flags = flags)
    }

    pub fn this_class(&mut self, index: CpIndex) -> &mut Self {
        self.with_parts(|p| p.this_class = index)
    }

    pub fn super_class(&mut self, index: CpIndex) -> &mut Self {
        self.with_parts(|p| p.super_class = index)
    }

    pub fn interfaces(&mut self, interfaces: Vec<CpIndex>) -> &mut Self {
        self.with_parts(|p| p.interfaces = interfaces)
    }

    pub fn fields(&mut self, fields: Vec<FieldInfo>) -> &mut Self {
        self.with_parts(|p| p.fields = fields)
    }

    pub fn methods(&mut self, methods: Vec<MethodInfo>) -> &mut Self {
        self.with_parts(|p| p.methods = methods)
    }

    pub fn attributes(&mut self, attributes: Vec<AttributeInfo>) -> &mut Self {
        self.with_parts(|p| p.attributes = attributes)
    }

    pub fn valid(&mut self, valid: bool) -> &mut Self {
        self.with_parts(|p| p.valid = valid)
    }

    pub fn extraneous_data(&mut self, extraneous: bool) -> &mut Self {
        self.with_parts(|p| p.extraneous_data = extraneous)
    }

    pub fn digest(&mut self, digest: Vec<u8>) -> &mut Self {
        self.with_parts(|p| p.digest = Some(digest))
    }

    /// Freeze the collected parts.
    ///
    /// # Errors
    /// [`BuildError::DoubleBuild`] on any call after the first. Class files
    /// returned earlier are unaffected.
    pub fn build(&mut self) -> Result<ClassFile, BuildError> {
        let parts = self.parts.take().ok_or(BuildError::DoubleBuild)?;
        let pool = parts.pool;

        let fields = FieldSet::new(parts.fields, &pool);
        let methods = MethodSet::new(parts.methods, &pool);
        let attributes = AttributeSet::new(parts.attributes, &pool);

        log::debug!(
            "class file {:?} frozen: {} pool slots, {} fields, {} methods, {} attributes",
            pool.resolved_class_name(parts.this_class),
            pool.len(),
            fields.len(),
            methods.len(),
            attributes.len(),
        );

        Ok(ClassFile {
            magic: parts.magic,
            minor: parts.minor,
            major: parts.major,
            pool,
            access_flags: AccessFlags::from_raw(parts.access_flags),
            this_class: parts.this_class,
            super_class: parts.super_class,
            interfaces: parts.interfaces,
            fields,
            methods,
            attributes,
            valid: parts.valid,
            extraneous_data: parts.extraneous_data,
            digest: parts.digest.map(Vec::into_boxed_slice),
        })
    }
}
