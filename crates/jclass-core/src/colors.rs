//! ANSI palette for class file dumps.
//!
//! Three roles plus reset:
//! - Key: section headers and entry labels
//! - Value: resolved names and literals
//! - Dim: raw indices, flags and error markers

/// Color palette passed to dump rendering.
///
/// Uses only standard 16-color ANSI codes so output reads on light and dark
/// terminals alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub key: &'static str,
    pub value: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        key: "\x1b[34m",
        value: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        key: "",
        value: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
