//! Constant pool entry definitions.

use std::fmt;

/// Index into the constant pool.
///
/// Index 0 is never a valid reference; [`CpIndex::NONE`] stands for "absent"
/// where the format allows it (a missing superclass).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CpIndex(pub u16);

impl CpIndex {
    pub const NONE: Self = Self(0);

    #[inline]
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// `None` when `raw` does not fit in a `u16`.
    #[inline]
    pub fn try_from_usize(raw: usize) -> Option<Self> {
        u16::try_from(raw).ok().map(Self)
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u16> for CpIndex {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CpIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a constant pool slot.
///
/// `Empty` is the slot right after a Long or Double. It has no wire tag and
/// can never be resolved.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ConstantKind {
    Utf8,
    Integer,
    Float,
    Long,
    Double,
    Class,
    String,
    Fieldref,
    Methodref,
    InterfaceMethodref,
    NameAndType,
    MethodHandle,
    MethodType,
    InvokeDynamic,
    Module,
    Package,
    Unknown,
    Empty,
}

impl ConstantKind {
    /// Map a wire tag to its kind. Unrecognized tags are `Unknown`.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            1 => Self::Utf8,
            3 => Self::Integer,
            4 => Self::Float,
            5 => Self::Long,
            6 => Self::Double,
            7 => Self::Class,
            8 => Self::String,
            9 => Self::Fieldref,
            10 => Self::Methodref,
            11 => Self::InterfaceMethodref,
            12 => Self::NameAndType,
            15 => Self::MethodHandle,
            16 => Self::MethodType,
            18 => Self::InvokeDynamic,
            19 => Self::Module,
            20 => Self::Package,
            _ => Self::Unknown,
        }
    }

    /// Wire tag, if the kind has one.
    pub fn tag(self) -> Option<u8> {
        let tag = match self {
            Self::Utf8 => 1,
            Self::Integer => 3,
            Self::Float => 4,
            Self::Long => 5,
            Self::Double => 6,
            Self::Class => 7,
            Self::String => 8,
            Self::Fieldref => 9,
            Self::Methodref => 10,
            Self::InterfaceMethodref => 11,
            Self::NameAndType => 12,
            Self::MethodHandle => 15,
            Self::MethodType => 16,
            Self::InvokeDynamic => 18,
            Self::Module => 19,
            Self::Package => 20,
            Self::Unknown | Self::Empty => return None,
        };
        Some(tag)
    }

    /// Number of slots an entry of this kind occupies.
    pub fn width(self) -> u16 {
        match self {
            Self::Long | Self::Double => 2,
            _ => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "Utf8",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Long => "Long",
            Self::Double => "Double",
            Self::Class => "Class",
            Self::String => "String",
            Self::Fieldref => "Fieldref",
            Self::Methodref => "Methodref",
            Self::InterfaceMethodref => "InterfaceMethodref",
            Self::NameAndType => "NameAndType",
            Self::MethodHandle => "MethodHandle",
            Self::MethodType => "MethodType",
            Self::InvokeDynamic => "InvokeDynamic",
            Self::Module => "Module",
            Self::Package => "Package",
            Self::Unknown => "Unknown",
            Self::Empty => "Empty",
        }
    }
}

impl fmt::Display for ConstantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A populated constant pool entry, holding its raw wire fields.
///
/// Numeric constants keep their big-endian bit patterns; typed accessors on
/// [`ConstantPool`](super::ConstantPool) reinterpret them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constant {
    Utf8(Box<[u8]>),
    Integer(u32),
    Float(u32),
    Long(u64),
    Double(u64),
    Class {
        name_index: CpIndex,
    },
    String {
        string_index: CpIndex,
    },
    Fieldref {
        class_index: CpIndex,
        name_and_type_index: CpIndex,
    },
    Methodref {
        class_index: CpIndex,
        name_and_type_index: CpIndex,
    },
    InterfaceMethodref {
        class_index: CpIndex,
        name_and_type_index: CpIndex,
    },
    NameAndType {
        name_index: CpIndex,
        descriptor_index: CpIndex,
    },
    MethodHandle {
        reference_kind: u8,
        reference_index: CpIndex,
    },
    MethodType {
        descriptor_index: CpIndex,
    },
    InvokeDynamic {
        bootstrap_method_attr_index: u16,
        name_and_type_index: CpIndex,
    },
    Module {
        name_index: CpIndex,
    },
    Package {
        name_index: CpIndex,
    },
    /// Entry with a tag the reader did not recognize.
    Unknown {
        tag: u8,
    },
}

impl Constant {
    pub fn kind(&self) -> ConstantKind {
        match self {
            Self::Utf8(_) => ConstantKind::Utf8,
            Self::Integer(_) => ConstantKind::Integer,
            Self::Float(_) => ConstantKind::Float,
            Self::Long(_) => ConstantKind::Long,
            Self::Double(_) => ConstantKind::Double,
            Self::Class { .. } => ConstantKind::Class,
            Self::String { .. } => ConstantKind::String,
            Self::Fieldref { .. } => ConstantKind::Fieldref,
            Self::Methodref { .. } => ConstantKind::Methodref,
            Self::InterfaceMethodref { .. } => ConstantKind::InterfaceMethodref,
            Self::NameAndType { .. } => ConstantKind::NameAndType,
            Self::MethodHandle { .. } => ConstantKind::MethodHandle,
            Self::MethodType { .. } => ConstantKind::MethodType,
            Self::InvokeDynamic { .. } => ConstantKind::InvokeDynamic,
            Self::Module { .. } => ConstantKind::Module,
            Self::Package { .. } => ConstantKind::Package,
            Self::Unknown { .. } => ConstantKind::Unknown,
        }
    }
}
