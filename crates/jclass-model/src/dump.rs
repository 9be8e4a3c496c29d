//! Human-readable class file dump for debugging and tests.
//!
//! Sections appear in a fixed order: `[class]`, `[constants]`, `[fields]`,
//! `[methods]`, `[attributes]`. A reference that fails to resolve is printed
//! inline as `<error: ...>` and the dump carries on with the next entry.

use std::fmt::{self, Display};

use jclass_core::Colors;

use crate::attribute::AttributeSet;
use crate::class_file::ClassFile;
use crate::constant_pool::{Constant, ConstantPool, CpIndex, PoolError};

/// Render `class` as text.
pub fn dump(class: &ClassFile, colors: Colors) -> String {
    Dump { class, colors }.to_string()
}

/// Digits needed to print indices below `count`.
fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

/// Resolved value, or an inline error marker.
fn or_error<T: Display>(result: Result<T, PoolError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => format!("<error: {err}>"),
    }
}

struct Dump<'a> {
    class: &'a ClassFile,
    colors: Colors,
}

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.class_section(f)?;
        writeln!(f)?;
        self.constants_section(f)?;
        writeln!(f)?;
        self.fields_section(f)?;
        writeln!(f)?;
        self.methods_section(f)?;
        writeln!(f)?;
        self.attributes_section(f)
    }
}

impl Dump<'_> {
    fn pool(&self) -> &ConstantPool {
        self.class.constant_pool()
    }

    fn header(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        let c = &self.colors;
        writeln!(f, "{}[{title}]{}", c.key, c.reset)
    }

    fn class_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let class = self.class;
        self.header(f, "class")?;
        writeln!(f, "name = {}{}{}", c.value, or_error(class.name()), c.reset)?;
        writeln!(f, "kind = {}", class.kind())?;
        writeln!(f, "flags = {}{}{}", c.dim, class.access_flags(), c.reset)?;
        writeln!(
            f,
            "version = {}.{} (release {})",
            class.major_version(),
            class.minor_version(),
            class.release()
        )?;
        let super_name = match class.super_class_name() {
            Ok(Some(name)) => name.to_string(),
            Ok(None) => "none".to_string(),
            Err(err) => format!("<error: {err}>"),
        };
        writeln!(f, "super = {super_name}")?;
        for name in class.interface_names() {
            writeln!(f, "interface = {}", or_error(name))?;
        }
        Ok(())
    }

    fn constants_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let pool = self.pool();
        let w = width_for_count(pool.len());
        self.header(f, "constants")?;
        for (index, entry) in pool.iter() {
            write!(f, "{}#{:0w$}{} ", c.dim, index.get(), c.reset)?;
            self.constant(f, index, entry, w)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn constant(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: CpIndex,
        entry: &Constant,
        w: usize,
    ) -> fmt::Result {
        let pool = self.pool();
        let kind = entry.kind();
        match entry {
            Constant::Utf8(bytes) => write!(f, "{kind} {:?}", String::from_utf8_lossy(bytes)),
            Constant::Integer(_) => write!(f, "{kind} {}", or_error(pool.integer_constant(index))),
            Constant::Float(_) => write!(f, "{kind} {}", or_error(pool.float_constant(index))),
            Constant::Long(_) => write!(f, "{kind} {}", or_error(pool.long_constant(index))),
            Constant::Double(_) => write!(f, "{kind} {}", or_error(pool.double_constant(index))),
            Constant::Class { name_index } => write!(
                f,
                "{kind} #{:0w$}  ; {}",
                name_index.get(),
                or_error(pool.resolved_class_name(index))
            ),
            Constant::String { string_index } => write!(
                f,
                "{kind} #{:0w$}  ; {}",
                string_index.get(),
                or_error(pool.resolved_string_constant(index).map(|s| format!("{s:?}")))
            ),
            Constant::Fieldref {
                class_index,
                name_and_type_index,
            } => write!(
                f,
                "{kind} #{:0w$}.#{:0w$}  ; {}",
                class_index.get(),
                name_and_type_index.get(),
                or_error(pool.resolved_field_reference(index))
            ),
            Constant::Methodref {
                class_index,
                name_and_type_index,
            } => write!(
                f,
                "{kind} #{:0w$}.#{:0w$}  ; {}",
                class_index.get(),
                name_and_type_index.get(),
                or_error(pool.resolved_method_reference(index))
            ),
            Constant::InterfaceMethodref {
                class_index,
                name_and_type_index,
            } => write!(
                f,
                "{kind} #{:0w$}.#{:0w$}  ; {}",
                class_index.get(),
                name_and_type_index.get(),
                or_error(pool.resolved_interface_method_reference(index))
            ),
            Constant::NameAndType {
                name_index,
                descriptor_index,
            } => write!(
                f,
                "{kind} #{:0w$}:#{:0w$}  ; {}:{}",
                name_index.get(),
                descriptor_index.get(),
                or_error(pool.utf8_str(*name_index)),
                or_error(pool.utf8_str(*descriptor_index))
            ),
            Constant::MethodHandle {
                reference_kind,
                reference_index,
            } => write!(f, "{kind} {reference_kind} #{:0w$}", reference_index.get()),
            Constant::MethodType { descriptor_index } => write!(
                f,
                "{kind} #{:0w$}  ; {}",
                descriptor_index.get(),
                or_error(pool.utf8_str(*descriptor_index))
            ),
            Constant::InvokeDynamic {
                bootstrap_method_attr_index,
                name_and_type_index,
            } => write!(
                f,
                "{kind} {bootstrap_method_attr_index} #{:0w$}",
                name_and_type_index.get()
            ),
            Constant::Module { name_index } | Constant::Package { name_index } => write!(
                f,
                "{kind} #{:0w$}  ; {}",
                name_index.get(),
                or_error(pool.utf8_str(*name_index))
            ),
            Constant::Unknown { tag } => write!(f, "{kind} tag={tag}"),
        }
    }

    /// ` [Code, Signature]`, or nothing for an empty set.
    fn attribute_names(&self, f: &mut fmt::Formatter<'_>, attributes: &AttributeSet) -> fmt::Result {
        if attributes.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = attributes
            .iter()
            .map(|attr| or_error(self.class.attribute_name(attr)))
            .collect();
        write!(f, " [{}]", names.join(", "))
    }

    fn fields_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let class = self.class;
        self.header(f, "fields")?;
        for field in class.fields() {
            write!(
                f,
                "{}{}{} {}{}{}: {}",
                c.dim,
                field.access_flags(),
                c.reset,
                c.value,
                or_error(class.field_name(field)),
                c.reset,
                or_error(class.field_descriptor(field))
            )?;
            self.attribute_names(f, field.attributes())?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn methods_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let class = self.class;
        self.header(f, "methods")?;
        for method in class.methods() {
            write!(
                f,
                "{}{}{} {}{}{}",
                c.dim,
                method.access_flags(),
                c.reset,
                c.value,
                or_error(class.method_signature(method)),
                c.reset
            )?;
            self.attribute_names(f, method.attributes())?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn attributes_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        self.header(f, "attributes")?;
        for attr in self.class.attributes() {
            writeln!(
                f,
                "{}{}{} ({} bytes)",
                c.value,
                or_error(self.class.attribute_name(attr)),
                c.reset,
                attr.length()
            )?;
        }
        Ok(())
    }
}
