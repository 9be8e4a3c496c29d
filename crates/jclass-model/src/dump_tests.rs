use jclass_core::Colors;

use crate::attribute::AttributeInfo;
use crate::builder::ClassFileBuilder;
use crate::constant_pool::{ConstantPool, CpIndex};
use crate::dump::dump;
use crate::field::FieldBuilder;
use crate::test_utils::widget;

#[test]
fn widget_dump() {
    let class = widget();

    insta::assert_snapshot!(dump(&class, Colors::OFF), @r##"
    [class]
    name = com/acme/Widget
    kind = class
    flags = 0x0021
    version = 61.0 (release 17)
    super = java/lang/Object
    interface = java/lang/Runnable

    [constants]
    #01 Utf8 "com/acme/Widget"
    #02 Class #01  ; com/acme/Widget
    #03 Utf8 "java/lang/Object"
    #04 Class #03  ; java/lang/Object
    #05 Utf8 "java/lang/Runnable"
    #06 Class #05  ; java/lang/Runnable
    #07 Utf8 "count"
    #08 Utf8 "I"
    #09 Utf8 "ConstantValue"
    #10 Utf8 "NAME"
    #11 Utf8 "Ljava/lang/String;"
    #12 Utf8 "hello"
    #13 String #12  ; "hello"
    #14 Long 1099511627776
    #16 Utf8 "Code"
    #17 Utf8 "<init>"
    #18 Utf8 "()V"
    #19 Utf8 "run"
    #20 Utf8 "(I)V"
    #21 NameAndType #19:#18  ; run:()V
    #22 Methodref #02.#21  ; com/acme/Widget@run
    #23 Utf8 "SourceFile"
    #24 Utf8 "Widget.java"

    [fields]
    0x0002 count: I
    0x0019 NAME: Ljava/lang/String; [ConstantValue]

    [methods]
    0x0001 <init>()V [Code]
    0x0001 run()V [Code]
    0x0001 run(I)V [Code]

    [attributes]
    SourceFile (2 bytes)
    "##);
}

#[test]
fn broken_references_render_inline() {
    let mut pool = ConstantPool::new();
    let text = pool.add_utf8(b"Broken".to_vec()).unwrap();
    let dangling = pool.add_class(CpIndex(9)).unwrap();
    let field = FieldBuilder::new()
        .name_index(dangling)
        .descriptor_index(text)
        .build();

    let class = ClassFileBuilder::new()
        .constant_pool(pool)
        .this_class(text)
        .fields(vec![field])
        .attributes(vec![AttributeInfo::new(CpIndex(7), 3, vec![1, 2, 3])])
        .build()
        .unwrap();

    insta::assert_snapshot!(dump(&class, Colors::OFF), @r#"
    [class]
    name = <error: constant pool entry #1 expected Class found Utf8>
    kind = class
    flags = 0x0000
    version = 0.0 (release unknown)
    super = none

    [constants]
    #1 Utf8 "Broken"
    #2 Class #9  ; <error: constant pool index #9 out of range (3 slots)>

    [fields]
    0x0000 <error: constant pool entry #2 expected Utf8 found Class>: Broken

    [methods]

    [attributes]
    <error: constant pool index #7 out of range (3 slots)> (3 bytes)
    "#);
}

#[test]
fn colors_wrap_values() {
    let class = widget();
    let c = Colors::new(true);
    assert!(c.is_enabled());
    let out = dump(&class, c);

    assert!(out.contains(&format!("{}[class]{}", c.key, c.reset)));
    assert!(out.contains(&format!("name = {}com/acme/Widget{}", c.value, c.reset)));
    assert!(!dump(&class, Colors::OFF).contains('\x1b'));
}
