use serde_json::json;

use jclass_core::ClassKind;

use crate::builder::ClassFileBuilder;
use crate::constant_pool::CpIndex;
use crate::summary::ClassSummary;
use crate::test_utils::{PoolFixture, widget};

#[test]
fn widget_summary() {
    let class = widget();
    let summary = ClassSummary::from(&class);

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "name": "com/acme/Widget",
            "package": "com.acme",
            "short_name": "Widget",
            "kind": "class",
            "access_flags": 0x0021,
            "version": { "major": 61, "minor": 0, "release": "17" },
            "super_class": "java/lang/Object",
            "super_class_error": null,
            "interfaces": ["java/lang/Runnable"],
            "fields": [
                { "access_flags": 2, "name": "count", "descriptor": "I", "attributes": [] },
                {
                    "access_flags": 25,
                    "name": "NAME",
                    "descriptor": "Ljava/lang/String;",
                    "attributes": ["ConstantValue"]
                }
            ],
            "methods": [
                { "access_flags": 1, "name": "<init>", "descriptor": "()V", "attributes": ["Code"] },
                { "access_flags": 1, "name": "run", "descriptor": "()V", "attributes": ["Code"] },
                { "access_flags": 1, "name": "run", "descriptor": "(I)V", "attributes": ["Code"] }
            ],
            "attributes": ["SourceFile"]
        })
    );
}

#[test]
fn failures_become_null() {
    let mut fx = PoolFixture::new();
    let text = fx.utf8("Loose");
    let good = fx.field(0x0001, "ok", "I", vec![]);
    let class = ClassFileBuilder::new()
        .major(44)
        .access_flags(0x4011)
        .constant_pool(fx.pool)
        .this_class(text)
        .super_class(CpIndex(30))
        .interfaces(vec![text])
        .fields(vec![good])
        .build()
        .unwrap();

    let summary = ClassSummary::from_class(&class);

    assert_eq!(summary.name, None);
    assert_eq!(summary.package, None);
    assert_eq!(summary.short_name, None);
    assert_eq!(summary.super_class, None);
    assert_eq!(
        summary.super_class_error.as_deref(),
        Some("constant pool index #30 out of range (4 slots)")
    );
    assert_eq!(summary.interfaces, vec![None]);
    assert_eq!(summary.kind, ClassKind::Enum);
    assert_eq!(summary.version.release, "unknown");
    assert_eq!(summary.fields[0].name.as_deref(), Some("ok"));
    assert!(summary.methods.is_empty());
}

#[test]
fn root_class_has_no_super_and_no_error() {
    let mut fx = PoolFixture::new();
    let this = fx.class("java/lang/Object");
    let class = ClassFileBuilder::new()
        .constant_pool(fx.pool)
        .this_class(this)
        .build()
        .unwrap();

    let summary = ClassSummary::from_class(&class);

    assert_eq!(summary.super_class, None);
    assert_eq!(summary.super_class_error, None);
    assert_eq!(summary.package.as_deref(), Some("java.lang"));
}
