//! Well-known attribute names.
//!
//! The set is closed over the releases the model supports. Attributes with
//! other names are still kept by the model; they just have no symbolic name.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

macro_rules! attribute_names {
    ($($variant:ident => $since:literal),* $(,)?) => {
        /// A recognized attribute name.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum AttributeName {
            $($variant,)*
        }

        impl AttributeName {
            /// Every recognized name, in declaration order.
            pub const ALL: &'static [AttributeName] = &[$(AttributeName::$variant,)*];

            /// The name exactly as it appears in a class file.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(AttributeName::$variant => stringify!($variant),)*
                }
            }

            /// Java release whose class files introduced this attribute
            /// within the supported range.
            pub fn since_release(self) -> u8 {
                match self {
                    $(AttributeName::$variant => $since,)*
                }
            }
        }
    };
}

attribute_names! {
    ConstantValue => 7,
    Code => 7,
    StackMapTable => 7,
    Exceptions => 7,
    InnerClasses => 7,
    EnclosingMethod => 7,
    Synthetic => 7,
    Signature => 7,
    SourceFile => 7,
    SourceDebugExtension => 7,
    LineNumberTable => 7,
    LocalVariableTable => 7,
    LocalVariableTypeTable => 7,
    Deprecated => 7,
    RuntimeVisibleAnnotations => 7,
    RuntimeInvisibleAnnotations => 7,
    RuntimeVisibleParameterAnnotations => 7,
    RuntimeInvisibleParameterAnnotations => 7,
    AnnotationDefault => 7,
    BootstrapMethods => 7,
    MethodParameters => 9,
    Module => 9,
    ModulePackages => 9,
    ModuleMainClass => 9,
    NestHost => 11,
    NestMembers => 11,
    Record => 16,
    PermittedSubclasses => 17,
}

/// Text that is not a recognized attribute name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized attribute name: {0:?}")]
pub struct UnknownAttributeName(pub String);

impl FromStr for AttributeName {
    type Err = UnknownAttributeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownAttributeName(s.to_string()))
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
