//! Tests for methods and the signature index.

use jclass_core::AttributeName;

use crate::constant_pool::{CpIndex, PoolError};
use crate::method::{MethodBuilder, MethodSet};
use crate::test_utils::{PoolFixture, widget};

#[test]
fn overloads_are_indexed_separately() {
    let class = widget();
    let pool = class.constant_pool();

    let plain = class.method_by_signature("run()V").unwrap();
    let with_int = class.method_by_signature("run(I)V").unwrap();

    assert_eq!(plain.descriptor(pool).unwrap(), "()V");
    assert_eq!(with_int.descriptor(pool).unwrap(), "(I)V");
    assert_eq!(plain.name_index(), with_int.name_index());
}

#[test]
fn bare_name_is_not_a_key() {
    let class = widget();

    assert!(class.method_by_signature("run").is_none());
    assert!(class.method_by_signature("run(J)V").is_none());
}

#[test]
fn signature_concatenates_name_and_descriptor() {
    let class = widget();
    let pool = class.constant_pool();

    let signatures: Vec<String> = class
        .methods()
        .iter()
        .map(|m| m.signature(pool).unwrap())
        .collect();
    insta::assert_debug_snapshot!(signatures, @r#"
    [
        "<init>()V",
        "run()V",
        "run(I)V",
    ]
    "#);
}

#[test]
fn flags_and_attributes() {
    let class = widget();
    let init = class.method_by_signature("<init>()V").unwrap();

    assert!(init.is_public());
    assert!(!init.is_static());
    assert!(!init.is_abstract());
    assert!(!init.is_protected());
    assert!(init.attributes().has(AttributeName::Code));
    assert_eq!(init.attributes().get("Code").count(), 1);
}

#[test]
fn abstract_method_without_code() {
    let mut fx = PoolFixture::new();
    let info = fx.method(0x0401, "apply", "(Ljava/lang/Object;)V", vec![]);
    let set = MethodSet::new(vec![info], &fx.pool);

    let method = set.by_signature("apply(Ljava/lang/Object;)V").unwrap();
    assert!(method.is_abstract());
    assert!(!method.attributes().has(AttributeName::Code));
}

#[test]
fn repeated_signature_last_wins() {
    let mut fx = PoolFixture::new();
    let first = fx.method(0x0001, "go", "()V", vec![]);
    let second = fx.method(0x0008, "go", "()V", vec![]);
    let set = MethodSet::new(vec![first, second], &fx.pool);

    assert_eq!(set.len(), 2);
    assert!(set.by_signature("go()V").unwrap().is_static());
}

#[test]
fn unresolvable_descriptor_fails_signature() {
    let mut fx = PoolFixture::new();
    let name = fx.utf8("broken");
    let class = fx.class("Owner");
    let info = MethodBuilder::new()
        .access_flags(0x0001)
        .name_index(name)
        .descriptor_index(class)
        .build();
    let set = MethodSet::new(vec![info], &fx.pool);

    assert_eq!(set.len(), 1);
    assert_eq!(set.unresolved(), 1);
    assert!(set.by_signature("broken").is_none());

    let method = set.iter().next().unwrap();
    let err = method.signature(&fx.pool).unwrap_err();
    assert_eq!(err.index(), class);
    assert!(matches!(err, PoolError::WrongConstantKind { .. }));
}

#[test]
fn empty_set() {
    let fx = PoolFixture::new();
    let set = MethodSet::new(vec![], &fx.pool);

    assert!(set.is_empty());
    assert_eq!(set.unresolved(), 0);
    assert!(set.by_signature("<init>()V").is_none());
    assert_eq!((&set).into_iter().count(), 0);
}

#[test]
fn default_builder_points_at_slot_zero() {
    let info = MethodBuilder::new().build();

    assert_eq!(info.name_index, CpIndex::NONE);
    assert!(info.access_flags.is_empty());
}
