//! The frozen class file aggregate.
//!
//! A [`ClassFile`] is produced only by [`ClassFileBuilder`](crate::ClassFileBuilder)
//! and never changes afterwards, so it can be shared across threads for
//! read-only queries. Names are not cached: every accessor resolves through
//! the constant pool and reports failures to the caller.

use std::borrow::Cow;
use std::fmt;

use jclass_core::{AccessFlags, ClassKind, release_label};

use crate::attribute::{AttributeInfo, AttributeSet};
use crate::builder::ClassFileBuilder;
use crate::constant_pool::{ConstantPool, CpIndex, PoolError};
use crate::field::{Field, FieldSet};
use crate::method::{Method, MethodSet};

/// Magic number at the start of every class file.
pub const CLASS_MAGIC: u32 = 0xCAFE_BABE;

#[derive(Clone, Debug)]
pub struct ClassFile {
    pub(crate) magic: u32,
    pub(crate) minor: u16,
    pub(crate) major: u16,
    pub(crate) pool: ConstantPool,
    pub(crate) access_flags: AccessFlags,
    pub(crate) this_class: CpIndex,
    pub(crate) super_class: CpIndex,
    pub(crate) interfaces: Vec<CpIndex>,
    pub(crate) fields: FieldSet,
    pub(crate) methods: MethodSet,
    pub(crate) attributes: AttributeSet,
    pub(crate) valid: bool,
    pub(crate) extraneous_data: bool,
    pub(crate) digest: Option<Box<[u8]>>,
}

impl ClassFile {
    pub fn builder() -> ClassFileBuilder {
        ClassFileBuilder::new()
    }

    pub fn constant_pool(&self) -> &ConstantPool {
        &self.pool
    }

    /// Header word as read; [`CLASS_MAGIC`] for well-formed input.
    pub fn magic(&self) -> u32 {
        self.magic
    }

    pub fn minor_version(&self) -> u16 {
        self.minor
    }

    pub fn major_version(&self) -> u16 {
        self.major
    }

    /// Java release label for the major version, e.g. `"17"`.
    pub fn release(&self) -> Cow<'static, str> {
        release_label(self.major)
    }

    pub fn access_flags(&self) -> AccessFlags {
        self.access_flags
    }

    pub fn is_public(&self) -> bool {
        self.access_flags.is_public()
    }

    pub fn is_final(&self) -> bool {
        self.access_flags.is_final()
    }

    pub fn is_interface(&self) -> bool {
        self.access_flags.is_interface()
    }

    pub fn is_enum(&self) -> bool {
        self.access_flags.is_enum()
    }

    /// Neither interface nor enum.
    pub fn is_class(&self) -> bool {
        !self.is_enum() && !self.is_interface()
    }

    pub fn kind(&self) -> ClassKind {
        ClassKind::classify(self.access_flags)
    }

    pub fn this_class(&self) -> CpIndex {
        self.this_class
    }

    /// Superclass reference; [`CpIndex::NONE`] for `java/lang/Object` and modules.
    pub fn super_class(&self) -> CpIndex {
        self.super_class
    }

    pub fn interfaces(&self) -> &[CpIndex] {
        &self.interfaces
    }

    /// Internal name of this class, e.g. `com/acme/Widget`.
    pub fn name(&self) -> Result<&str, PoolError> {
        self.pool.resolved_class_name(self.this_class)
    }

    /// Dotted package name.
    ///
    /// `Some("")` for a class in the default package. `None` when the name
    /// itself does not resolve.
    pub fn package_name(&self) -> Option<String> {
        let name = self.name().ok()?;
        match name.rfind('/') {
            Some(slash) => Some(name[..slash].replace('/', ".")),
            None => Some(String::new()),
        }
    }

    /// Name without package; nested class separators become dots.
    pub fn short_name(&self) -> Option<String> {
        let name = self.name().ok()?;
        let simple = name.rsplit('/').next().unwrap_or(name);
        Some(simple.replace('$', "."))
    }

    /// Superclass internal name, or `None` when there is no superclass.
    pub fn super_class_name(&self) -> Result<Option<&str>, PoolError> {
        if self.super_class.is_none() {
            return Ok(None);
        }
        self.pool.resolved_class_name(self.super_class).map(Some)
    }

    /// Interface names in declaration order, each resolved independently.
    pub fn interface_names(&self) -> impl Iterator<Item = Result<&str, PoolError>> {
        self.interfaces
            .iter()
            .map(|&index| self.pool.resolved_class_name(index))
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.by_name(name)
    }

    pub fn method_by_signature(&self, signature: &str) -> Option<&Method> {
        self.methods.by_signature(signature)
    }

    /// Name of one of this class's fields, resolved against its own pool.
    pub fn field_name(&self, field: &Field) -> Result<&str, PoolError> {
        field.name(&self.pool)
    }

    pub fn field_descriptor(&self, field: &Field) -> Result<&str, PoolError> {
        field.descriptor(&self.pool)
    }

    /// Name of one of this class's methods, resolved against its own pool.
    pub fn method_name(&self, method: &Method) -> Result<&str, PoolError> {
        method.name(&self.pool)
    }

    pub fn method_descriptor(&self, method: &Method) -> Result<&str, PoolError> {
        method.descriptor(&self.pool)
    }

    pub fn method_signature(&self, method: &Method) -> Result<String, PoolError> {
        method.signature(&self.pool)
    }

    /// Name of an attribute of this class or one of its members.
    pub fn attribute_name(&self, attribute: &AttributeInfo) -> Result<&str, PoolError> {
        attribute.name(&self.pool)
    }

    /// Whether the reader judged the input well formed.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Whether bytes followed the last attribute.
    pub fn extraneous_data(&self) -> bool {
        self.extraneous_data
    }

    /// Content digest recorded by the reader, if any.
    pub fn digest(&self) -> Option<&[u8]> {
        self.digest.as_deref()
    }
}

impl fmt::Display for ClassFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Ok(name) => f.write_str(name),
            Err(_) => write!(f, "<unresolved {}>", self.this_class),
        }
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClassFile>();
};
