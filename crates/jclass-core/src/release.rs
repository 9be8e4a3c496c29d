//! Mapping from class file major version to Java release label.

use std::borrow::Cow;

/// First major version produced by a Java compiler.
pub const FIRST_JAVA_MAJOR: u16 = 45;

/// Major version of Java 6; every later release adds one.
const JAVA_6_MAJOR: u16 = 50;

/// Human-readable release label for a major version.
///
/// Anything below 45 is not a Java class file and maps to `"unknown"`.
/// From 50 on the label is the release number (`50` is `"6"`, `65` is `"21"`).
pub fn release_label(major: u16) -> Cow<'static, str> {
    match major {
        m if m < FIRST_JAVA_MAJOR => Cow::Borrowed("unknown"),
        45 | 46 => Cow::Borrowed("1.2"),
        47 => Cow::Borrowed("1.3"),
        48 => Cow::Borrowed("1.4"),
        49 => Cow::Borrowed("5.0"),
        m => Cow::Owned((6 + u32::from(m - JAVA_6_MAJOR)).to_string()),
    }
}
