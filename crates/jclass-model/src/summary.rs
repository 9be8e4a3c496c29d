//! Serializable snapshot of a class file's resolved view.
//!
//! Each value is resolved on its own; a name that fails to resolve becomes
//! `None` and the rest of the summary is still filled in. The superclass
//! also records why it failed, since `None` there can mean a root class.

use serde::Serialize;

use jclass_core::{AccessFlags, ClassKind};

use crate::attribute::AttributeSet;
use crate::class_file::ClassFile;
use crate::constant_pool::PoolError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub name: Option<String>,
    pub package: Option<String>,
    pub short_name: Option<String>,
    pub kind: ClassKind,
    pub access_flags: u16,
    pub version: VersionSummary,
    /// `None` both for a root class and when resolution failed; see
    /// `super_class_error` for the latter.
    pub super_class: Option<String>,
    pub super_class_error: Option<String>,
    pub interfaces: Vec<Option<String>>,
    pub fields: Vec<MemberSummary>,
    pub methods: Vec<MemberSummary>,
    pub attributes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionSummary {
    pub major: u16,
    pub minor: u16,
    pub release: String,
}

/// A field or method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub access_flags: u16,
    pub name: Option<String>,
    pub descriptor: Option<String>,
    pub attributes: Vec<String>,
}

fn owned(result: Result<&str, PoolError>) -> Option<String> {
    result.ok().map(str::to_owned)
}

fn attribute_names(attributes: &AttributeSet) -> Vec<String> {
    attributes.names().map(str::to_owned).collect()
}

impl MemberSummary {
    fn new(
        flags: AccessFlags,
        name: Result<&str, PoolError>,
        descriptor: Result<&str, PoolError>,
        attributes: &AttributeSet,
    ) -> Self {
        Self {
            access_flags: flags.bits(),
            name: owned(name),
            descriptor: owned(descriptor),
            attributes: attribute_names(attributes),
        }
    }
}

impl ClassSummary {
    pub fn from_class(class: &ClassFile) -> Self {
        let fields = class
            .fields()
            .iter()
            .map(|f| {
                MemberSummary::new(
                    f.access_flags(),
                    class.field_name(f),
                    class.field_descriptor(f),
                    f.attributes(),
                )
            })
            .collect();

        let methods = class
            .methods()
            .iter()
            .map(|m| {
                MemberSummary::new(
                    m.access_flags(),
                    class.method_name(m),
                    class.method_descriptor(m),
                    m.attributes(),
                )
            })
            .collect();

        let (super_class, super_class_error) = match class.super_class_name() {
            Ok(name) => (name.map(str::to_owned), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            name: owned(class.name()),
            package: class.package_name(),
            short_name: class.short_name(),
            kind: class.kind(),
            access_flags: class.access_flags().bits(),
            version: VersionSummary {
                major: class.major_version(),
                minor: class.minor_version(),
                release: class.release().into_owned(),
            },
            super_class,
            super_class_error,
            interfaces: class.interface_names().map(owned).collect(),
            fields,
            methods,
            attributes: attribute_names(class.attributes()),
        }
    }
}

impl From<&ClassFile> for ClassSummary {
    fn from(class: &ClassFile) -> Self {
        Self::from_class(class)
    }
}
