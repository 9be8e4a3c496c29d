//! The constant pool: a 1-indexed table of tagged entries.
//!
//! The pool is filled once, append-only, in file order, and is read-only
//! afterwards. Every other part of the model refers to it through
//! [`CpIndex`] handles and resolves them on demand.
//!
//! Indices are `u16`, so the table ends at `#65535`. An `add_*` call that
//! would need a slot past it fails with [`PoolOverflow`] and leaves the pool
//! unchanged.
//!
//! Resolution is typed per hop: each step checks the slot it lands on holds
//! the kind it needs and reports the offending index otherwise.

mod entry;
mod error;


pub use entry::{Constant, ConstantKind, CpIndex};
pub use error::{PoolError, PoolOverflow};

/// Highest index a class file can address.
pub const MAX_INDEX: usize = u16::MAX as usize;

/// Contents of one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot {
    /// Never populated (slot 0, and slots past the cursor).
    Vacant,
    Entry(Constant),
    /// Second slot of a Long or Double.
    Reserved,
}

/// Shared symbol table of a class file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantPool {
    slots: Vec<Slot>,
    /// Index of the last populated slot (0 when nothing was added).
    cursor: usize,
}

impl Default for ConstantPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantPool {
    /// An empty pool with only the unusable slot 0.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// A pool sized for the declared `constant_pool_count`.
    ///
    /// The count covers slot 0, so a count of `n` leaves room for indices
    /// `1..n`. Appending past it grows the table.
    pub fn with_capacity(count: u16) -> Self {
        let len = usize::from(count).max(1);
        Self {
            slots: vec![Slot::Vacant; len],
            cursor: 0,
        }
    }

    pub fn add_utf8(&mut self, bytes: impl Into<Box<[u8]>>) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Utf8(bytes.into()))
    }

    pub fn add_integer(&mut self, bytes: u32) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Integer(bytes))
    }

    pub fn add_float(&mut self, bytes: u32) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Float(bytes))
    }

    /// Appends a Long, consuming this slot and the next.
    pub fn add_long(&mut self, bytes: u64) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Long(bytes))
    }

    /// Appends a Double, consuming this slot and the next.
    pub fn add_double(&mut self, bytes: u64) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Double(bytes))
    }

    pub fn add_class(&mut self, name_index: CpIndex) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Class { name_index })
    }

    pub fn add_string(&mut self, string_index: CpIndex) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::String { string_index })
    }

    pub fn add_fieldref(
        &mut self,
        class_index: CpIndex,
        name_and_type_index: CpIndex,
    ) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Fieldref {
            class_index,
            name_and_type_index,
        })
    }

    pub fn add_methodref(
        &mut self,
        class_index: CpIndex,
        name_and_type_index: CpIndex,
    ) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Methodref {
            class_index,
            name_and_type_index,
        })
    }

    pub fn add_interface_methodref(
        &mut self,
        class_index: CpIndex,
        name_and_type_index: CpIndex,
    ) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::InterfaceMethodref {
            class_index,
            name_and_type_index,
        })
    }

    pub fn add_name_and_type(
        &mut self,
        name_index: CpIndex,
        descriptor_index: CpIndex,
    ) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::NameAndType {
            name_index,
            descriptor_index,
        })
    }

    pub fn add_method_handle(
        &mut self,
        reference_kind: u8,
        reference_index: CpIndex,
    ) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::MethodHandle {
            reference_kind,
            reference_index,
        })
    }

    pub fn add_method_type(&mut self, descriptor_index: CpIndex) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::MethodType { descriptor_index })
    }

    pub fn add_invoke_dynamic(
        &mut self,
        bootstrap_method_attr_index: u16,
        name_and_type_index: CpIndex,
    ) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::InvokeDynamic {
            bootstrap_method_attr_index,
            name_and_type_index,
        })
    }

    pub fn add_module(&mut self, name_index: CpIndex) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Module { name_index })
    }

    pub fn add_package(&mut self, name_index: CpIndex) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Package { name_index })
    }

    /// Appends a placeholder for an entry whose tag was not recognized.
    pub fn add_unknown(&mut self, tag: u8) -> Result<CpIndex, PoolOverflow> {
        self.insert(Constant::Unknown { tag })
    }

    /// Store `entry` at the next index, plus a reserved slot for wide kinds.
    fn insert(&mut self, entry: Constant) -> Result<CpIndex, PoolOverflow> {
        let kind = entry.kind();
        let last = self.cursor + usize::from(kind.width());
        if last > MAX_INDEX {
            return Err(PoolOverflow { kind });
        }
        let index = CpIndex::try_from_usize(self.cursor + 1).ok_or(PoolOverflow { kind })?;
        self.cursor += 1;
        log::trace!("constant {index}: {kind} {entry:?}");
        self.put(Slot::Entry(entry));

        if kind.width() == 2 {
            self.cursor += 1;
            log::trace!("constant #{}: reserved", self.cursor);
            self.put(Slot::Reserved);
        }
        Ok(index)
    }

    fn put(&mut self, slot: Slot) {
        if self.cursor < self.slots.len() {
            self.slots[self.cursor] = slot;
        } else {
            self.slots.push(slot);
        }
    }

    /// Number of slots, including slot 0 and any declared but unfilled ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no entry has been added yet.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Index the next `add_*` call will assign, or `None` once every index
    /// up to `#65535` is taken.
    pub fn next_index(&self) -> Option<CpIndex> {
        CpIndex::try_from_usize(self.cursor + 1)
    }

    /// Populated entries in index order. Reserved and vacant slots are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (CpIndex, &Constant)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Slot::Entry(entry) => CpIndex::try_from_usize(i).map(|index| (index, entry)),
                Slot::Vacant | Slot::Reserved => None,
            })
    }

    fn slot(&self, index: CpIndex) -> Result<&Slot, PoolError> {
        self.slots
            .get(usize::from(index.0))
            .ok_or(PoolError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    /// The entry at `index`, whatever its kind.
    pub fn entry(&self, index: CpIndex) -> Result<&Constant, PoolError> {
        match self.slot(index)? {
            Slot::Entry(entry) => Ok(entry),
            Slot::Vacant | Slot::Reserved => Err(PoolError::SlotEmpty { index }),
        }
    }

    /// Kind at `index`. A Long/Double's trailing slot reports `Empty`.
    pub fn entry_kind(&self, index: CpIndex) -> Result<ConstantKind, PoolError> {
        match self.slot(index)? {
            Slot::Entry(entry) => Ok(entry.kind()),
            Slot::Reserved => Ok(ConstantKind::Empty),
            Slot::Vacant => Err(PoolError::SlotEmpty { index }),
        }
    }

    fn mismatch(index: CpIndex, expected: ConstantKind, entry: &Constant) -> PoolError {
        PoolError::WrongConstantKind {
            index,
            expected,
            actual: entry.kind(),
        }
    }

    /// Utf8 index named by a Class entry.
    pub fn class_reference(&self, index: CpIndex) -> Result<CpIndex, PoolError> {
        match self.entry(index)? {
            Constant::Class { name_index } => Ok(*name_index),
            other => Err(Self::mismatch(index, ConstantKind::Class, other)),
        }
    }

    /// Utf8 index named by a String entry.
    pub fn string_reference(&self, index: CpIndex) -> Result<CpIndex, PoolError> {
        match self.entry(index)? {
            Constant::String { string_index } => Ok(*string_index),
            other => Err(Self::mismatch(index, ConstantKind::String, other)),
        }
    }

    /// `(name_index, descriptor_index)` of a NameAndType entry.
    pub fn name_and_type(&self, index: CpIndex) -> Result<(CpIndex, CpIndex), PoolError> {
        match self.entry(index)? {
            Constant::NameAndType {
                name_index,
                descriptor_index,
            } => Ok((*name_index, *descriptor_index)),
            other => Err(Self::mismatch(index, ConstantKind::NameAndType, other)),
        }
    }

    pub fn utf8_bytes(&self, index: CpIndex) -> Result<&[u8], PoolError> {
        match self.entry(index)? {
            Constant::Utf8(bytes) => Ok(&bytes[..]),
            other => Err(Self::mismatch(index, ConstantKind::Utf8, other)),
        }
    }

    /// Decoded text of a Utf8 entry.
    pub fn utf8_str(&self, index: CpIndex) -> Result<&str, PoolError> {
        let bytes = self.utf8_bytes(index)?;
        std::str::from_utf8(bytes).map_err(|_| PoolError::InvalidUtf8 { index })
    }

    /// Class entry, then its Utf8 name.
    pub fn resolved_class_name(&self, index: CpIndex) -> Result<&str, PoolError> {
        let name_index = self.class_reference(index)?;
        self.utf8_str(name_index)
    }

    /// String entry, then its Utf8 text.
    pub fn resolved_string_constant(&self, index: CpIndex) -> Result<&str, PoolError> {
        let string_index = self.string_reference(index)?;
        self.utf8_str(string_index)
    }

    /// `owner@member` identity of a Methodref entry.
    pub fn resolved_method_reference(&self, index: CpIndex) -> Result<String, PoolError> {
        match self.entry(index)? {
            Constant::Methodref {
                class_index,
                name_and_type_index,
            } => self.member_identity(*class_index, *name_and_type_index),
            other => Err(Self::mismatch(index, ConstantKind::Methodref, other)),
        }
    }

    /// `owner@member` identity of a Fieldref entry.
    pub fn resolved_field_reference(&self, index: CpIndex) -> Result<String, PoolError> {
        match self.entry(index)? {
            Constant::Fieldref {
                class_index,
                name_and_type_index,
            } => self.member_identity(*class_index, *name_and_type_index),
            other => Err(Self::mismatch(index, ConstantKind::Fieldref, other)),
        }
    }

    /// `owner@member` identity of an InterfaceMethodref entry.
    pub fn resolved_interface_method_reference(&self, index: CpIndex) -> Result<String, PoolError> {
        match self.entry(index)? {
            Constant::InterfaceMethodref {
                class_index,
                name_and_type_index,
            } => self.member_identity(*class_index, *name_and_type_index),
            other => Err(Self::mismatch(index, ConstantKind::InterfaceMethodref, other)),
        }
    }

    fn member_identity(
        &self,
        class_index: CpIndex,
        name_and_type_index: CpIndex,
    ) -> Result<String, PoolError> {
        let owner = self.resolved_class_name(class_index)?;
        let (name_index, _) = self.name_and_type(name_and_type_index)?;
        let member = self.utf8_str(name_index)?;
        Ok(format!("{owner}@{member}"))
    }

    pub fn integer_constant(&self, index: CpIndex) -> Result<i32, PoolError> {
        match self.entry(index)? {
            Constant::Integer(bytes) => Ok(*bytes as i32),
            other => Err(Self::mismatch(index, ConstantKind::Integer, other)),
        }
    }

    pub fn float_constant(&self, index: CpIndex) -> Result<f32, PoolError> {
        match self.entry(index)? {
            Constant::Float(bytes) => Ok(f32::from_bits(*bytes)),
            other => Err(Self::mismatch(index, ConstantKind::Float, other)),
        }
    }

    pub fn long_constant(&self, index: CpIndex) -> Result<i64, PoolError> {
        match self.entry(index)? {
            Constant::Long(bytes) => Ok(*bytes as i64),
            other => Err(Self::mismatch(index, ConstantKind::Long, other)),
        }
    }

    pub fn double_constant(&self, index: CpIndex) -> Result<f64, PoolError> {
        match self.entry(index)? {
            Constant::Double(bytes) => Ok(f64::from_bits(*bytes)),
            other => Err(Self::mismatch(index, ConstantKind::Double, other)),
        }
    }
}
