#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared vocabulary for the jclass class file model.
//!
//! Everything here is independent of the constant pool:
//! - **Access flags**: the `u16` bitset carried by classes, fields and methods
//! - **Classification**: class / interface / enum derived from flags
//! - **Releases**: major format version to Java release label
//! - **Attribute names**: the closed set of recognized attribute names
//! - **Colors**: palette for human-readable dumps

pub mod access;
pub mod attribute_name;
pub mod colors;
pub mod release;


pub use access::{AccessFlags, ClassKind};
pub use attribute_name::{AttributeName, UnknownAttributeName};
pub use colors::Colors;
pub use release::release_label;
