//! Constant pool resolution errors.

use super::entry::{ConstantKind, CpIndex};

/// An append that would need a slot past `#65535`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("constant pool is full: no room for a {kind} entry past #65535")]
pub struct PoolOverflow {
    pub kind: ConstantKind,
}

/// A single resolution hop failed.
///
/// Multi-hop resolutions return the error of the first failing hop unchanged,
/// so the index named here is always the slot that broke the chain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("constant pool entry {index} expected {expected} found {actual}")]
    WrongConstantKind {
        index: CpIndex,
        expected: ConstantKind,
        actual: ConstantKind,
    },
    #[error("constant pool slot {index} is empty")]
    SlotEmpty { index: CpIndex },
    #[error("constant pool index {index} out of range ({len} slots)")]
    IndexOutOfRange { index: CpIndex, len: usize },
    #[error("constant pool entry {index} is not valid UTF-8")]
    InvalidUtf8 { index: CpIndex },
}

impl PoolError {
    /// Index of the slot that failed to resolve.
    pub fn index(&self) -> CpIndex {
        match self {
            Self::WrongConstantKind { index, .. }
            | Self::SlotEmpty { index }
            | Self::IndexOutOfRange { index, .. }
            | Self::InvalidUtf8 { index } => *index,
        }
    }
}
