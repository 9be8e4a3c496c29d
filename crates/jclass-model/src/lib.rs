#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Index-resolved model of compiled class files.
//!
//! A class file is a graph whose nodes refer to each other only through
//! integer indices into one shared constant pool. This crate holds that
//! graph and resolves the indices on demand:
//! - [`ConstantPool`]: tagged entries with typed, per-hop checked resolution
//! - [`AttributeSet`], [`FieldSet`], [`MethodSet`]: ordered, indexed views
//! - [`ClassFile`]: the frozen aggregate, built once by [`ClassFileBuilder`]
//! - [`dump`] and [`ClassSummary`]: text and serializable renderings
//!
//! Decoding bytes into builder calls is left to the caller.

pub mod attribute;
pub mod builder;
pub mod class_file;
pub mod constant_pool;
pub mod dump;
pub mod field;
pub mod method;
pub mod summary;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod field_tests;
#[cfg(test)]
mod method_tests;
#[cfg(test)]
mod summary_tests;

pub use attribute::{AttributeBuilder, AttributeInfo, AttributeSet};
pub use builder::{BuildError, ClassFileBuilder};
pub use class_file::{CLASS_MAGIC, ClassFile};
pub use constant_pool::{
    Constant, ConstantKind, ConstantPool, CpIndex, MAX_INDEX, PoolError, PoolOverflow,
};
pub use dump::dump;
pub use field::{Field, FieldBuilder, FieldInfo, FieldSet};
pub use method::{Method, MethodBuilder, MethodInfo, MethodSet};
pub use summary::{ClassSummary, MemberSummary, VersionSummary};

pub use jclass_core::{AccessFlags, AttributeName, ClassKind, Colors, release_label};
