//! Access flag bitsets and class classification.

use std::fmt;

use serde::Serialize;

bitflags::bitflags! {
    /// Access flags as stored in a class file.
    ///
    /// The same bit positions are reused with different meanings for classes,
    /// fields and methods, so several constants share a value. Unknown bits are
    /// retained: [`AccessFlags::from_raw`] never drops bits the reader saw.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        /// `ACC_SUPER` on classes.
        const SUPER = 0x0020;
        /// `ACC_SYNCHRONIZED` on methods.
        const SYNCHRONIZED = 0x0020;
        /// `ACC_VOLATILE` on fields.
        const VOLATILE = 0x0040;
        /// `ACC_BRIDGE` on methods.
        const BRIDGE = 0x0040;
        /// `ACC_TRANSIENT` on fields.
        const TRANSIENT = 0x0080;
        /// `ACC_VARARGS` on methods.
        const VARARGS = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
        /// `ACC_MODULE` on classes.
        const MODULE = 0x8000;
        /// `ACC_MANDATED` on parameters and module items.
        const MANDATED = 0x8000;
    }
}

impl AccessFlags {
    /// Wrap a raw wire value, keeping every bit.
    #[inline]
    pub fn from_raw(raw: u16) -> Self {
        Self::from_bits_retain(raw)
    }

    #[inline]
    pub fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }

    #[inline]
    pub fn is_private(self) -> bool {
        self.contains(Self::PRIVATE)
    }

    #[inline]
    pub fn is_protected(self) -> bool {
        self.contains(Self::PROTECTED)
    }

    #[inline]
    pub fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    #[inline]
    pub fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    #[inline]
    pub fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    #[inline]
    pub fn is_interface(self) -> bool {
        self.contains(Self::INTERFACE)
    }

    #[inline]
    pub fn is_enum(self) -> bool {
        self.contains(Self::ENUM)
    }
}

impl From<u16> for AccessFlags {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for AccessFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.bits())
    }
}

/// Classification of a class file derived from its access flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Unknown,
}

impl ClassKind {
    /// Classify by flag bits, in fixed priority order.
    ///
    /// Neither interface nor enum set is a class. Otherwise enum wins over
    /// interface, so a malformed input carrying both bits is an enum.
    /// `Unknown` is kept as the fall-through for flag kinds not modeled yet.
    pub fn classify(flags: AccessFlags) -> Self {
        if !flags.is_interface() && !flags.is_enum() {
            return Self::Class;
        }
        if flags.is_enum() {
            return Self::Enum;
        }
        if flags.is_interface() {
            return Self::Interface;
        }
        Self::Unknown
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
