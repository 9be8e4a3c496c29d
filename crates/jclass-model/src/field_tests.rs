//! Tests for fields and the field index.

use jclass_core::{AccessFlags, AttributeName};

use crate::constant_pool::{CpIndex, PoolError};
use crate::field::{FieldBuilder, FieldSet};
use crate::test_utils::{PoolFixture, widget};

#[test]
fn builder_keeps_raw_flag_bits() {
    let info = FieldBuilder::new()
        .access_flags(0x8019)
        .name_index(CpIndex(3))
        .descriptor_index(CpIndex(4))
        .build();

    assert_eq!(info.access_flags.bits(), 0x8019);
    assert_eq!(info.name_index, CpIndex(3));
    assert_eq!(info.descriptor_index, CpIndex(4));
    assert!(info.attributes.is_empty());
}

#[test]
fn lookup_by_name() {
    let class = widget();
    let pool = class.constant_pool();

    let field = class.field_by_name("NAME").unwrap();
    assert_eq!(field.descriptor(pool).unwrap(), "Ljava/lang/String;");
    assert!(field.is_public());
    assert!(field.is_static());
    assert!(field.is_final());
    assert!(field.attributes().has(AttributeName::ConstantValue));

    let count = class.field_by_name("count").unwrap();
    assert_eq!(count.access_flags(), AccessFlags::PRIVATE);
    assert!(!count.is_public());
    assert!(count.attributes().is_empty());
}

#[test]
fn missing_name_is_none() {
    let class = widget();

    assert!(class.field_by_name("size").is_none());
    assert!(class.field_by_name("").is_none());
}

#[test]
fn empty_set() {
    let fx = PoolFixture::new();
    let set = FieldSet::new(vec![], &fx.pool);

    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert!(set.by_name("anything").is_none());
    assert_eq!(set.unresolved(), 0);
    assert_eq!(set.iter().count(), 0);
}

#[test]
fn iteration_keeps_file_order() {
    let class = widget();
    let pool = class.constant_pool();

    let names: Vec<&str> = class
        .fields()
        .iter()
        .map(|f| f.name(pool).unwrap())
        .collect();
    assert_eq!(names, vec!["count", "NAME"]);
}

#[test]
fn repeated_name_last_wins() {
    let mut fx = PoolFixture::new();
    let first = fx.field(0x0001, "value", "I", vec![]);
    let second = fx.field(0x0002, "value", "J", vec![]);
    let set = FieldSet::new(vec![first, second], &fx.pool);

    assert_eq!(set.len(), 2);
    assert_eq!(set.unresolved(), 0);
    let field = set.by_name("value").unwrap();
    assert_eq!(field.descriptor(&fx.pool).unwrap(), "J");
    assert!(field.access_flags().contains(AccessFlags::PRIVATE));
}

#[test]
fn unresolvable_name_is_iterated_but_not_indexed() {
    let mut fx = PoolFixture::new();
    let good = fx.field(0x0000, "ok", "Z", vec![]);
    let descriptor = fx.utf8("I");
    let bad = FieldBuilder::new()
        .name_index(CpIndex(50))
        .descriptor_index(descriptor)
        .build();
    let set = FieldSet::new(vec![bad, good], &fx.pool);

    assert_eq!(set.len(), 2);
    assert_eq!(set.unresolved(), 1);
    assert!(set.by_name("ok").is_some());

    let first = set.iter().next().unwrap();
    assert!(matches!(
        first.name(&fx.pool),
        Err(PoolError::IndexOutOfRange { .. })
    ));
    assert_eq!(first.descriptor(&fx.pool).unwrap(), "I");
}
