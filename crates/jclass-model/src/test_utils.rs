//! Fixtures shared by unit tests.

use std::collections::HashMap;

use crate::attribute::AttributeInfo;
use crate::builder::ClassFileBuilder;
use crate::class_file::{CLASS_MAGIC, ClassFile};
use crate::constant_pool::{ConstantPool, CpIndex};
use crate::field::{FieldBuilder, FieldInfo};
use crate::method::{MethodBuilder, MethodInfo};

/// Appends entries to a pool with string-typed helpers.
///
/// Utf8 entries are deduplicated like a compiler would.
#[derive(Debug, Default)]
pub struct PoolFixture {
    pub pool: ConstantPool,
    utf8: HashMap<String, CpIndex>,
}

impl PoolFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utf8(&mut self, text: &str) -> CpIndex {
        if let Some(&index) = self.utf8.get(text) {
            return index;
        }
        let index = self.pool.add_utf8(text.as_bytes().to_vec()).unwrap();
        self.utf8.insert(text.to_string(), index);
        index
    }

    pub fn class(&mut self, name: &str) -> CpIndex {
        let name = self.utf8(name);
        self.pool.add_class(name).unwrap()
    }

    pub fn attribute(&mut self, name: &str, data: &[u8]) -> AttributeInfo {
        let name = self.utf8(name);
        AttributeInfo::new(name, data.len() as u32, data.to_vec())
    }

    pub fn field(
        &mut self,
        flags: u16,
        name: &str,
        descriptor: &str,
        attributes: Vec<AttributeInfo>,
    ) -> FieldInfo {
        let name = self.utf8(name);
        let descriptor = self.utf8(descriptor);
        FieldBuilder::new()
            .access_flags(flags)
            .name_index(name)
            .descriptor_index(descriptor)
            .attributes(attributes)
            .build()
    }

    pub fn method(
        &mut self,
        flags: u16,
        name: &str,
        descriptor: &str,
        attributes: Vec<AttributeInfo>,
    ) -> MethodInfo {
        let name = self.utf8(name);
        let descriptor = self.utf8(descriptor);
        MethodBuilder::new()
            .access_flags(flags)
            .name_index(name)
            .descriptor_index(descriptor)
            .attributes(attributes)
            .build()
    }
}

/// `public class com.acme.Widget implements Runnable`, with two fields, an
/// overloaded `run`, and a few extra constants.
pub fn widget() -> ClassFile {
    let mut fx = PoolFixture::new();
    let this = fx.class("com/acme/Widget");
    let sup = fx.class("java/lang/Object");
    let runnable = fx.class("java/lang/Runnable");

    let count = fx.field(0x0002, "count", "I", vec![]);
    let constant_value = fx.attribute("ConstantValue", &[0x00, 0x0d]);
    let name = fx.field(0x0019, "NAME", "Ljava/lang/String;", vec![constant_value]);

    let hello = fx.utf8("hello");
    fx.pool.add_string(hello).unwrap();
    fx.pool.add_long(1 << 40).unwrap();

    let code = fx.attribute("Code", &[0; 4]);
    let init = fx.method(0x0001, "<init>", "()V", vec![code.clone()]);
    let run = fx.method(0x0001, "run", "()V", vec![code.clone()]);
    let run_int = fx.method(0x0001, "run", "(I)V", vec![code]);

    let run_name = fx.utf8("run");
    let void = fx.utf8("()V");
    let nat = fx.pool.add_name_and_type(run_name, void).unwrap();
    fx.pool.add_methodref(this, nat).unwrap();

    let source_file = fx.attribute("SourceFile", &[0x00, 0x18]);
    fx.utf8("Widget.java");

    ClassFileBuilder::new()
        .magic(CLASS_MAGIC)
        .minor(0)
        .major(61)
        .constant_pool(fx.pool)
        .access_flags(0x0021)
        .this_class(this)
        .super_class(sup)
        .interfaces(vec![runnable])
        .fields(vec![count, name])
        .methods(vec![init, run, run_int])
        .attributes(vec![source_file])
        .valid(true)
        .build()
        .unwrap()
}
