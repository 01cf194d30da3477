use core::fmt;

/// The tag of a [`Value`](crate::Value): which payload it currently carries.
///
/// Ordering follows declaration order, so scalars sort before strings and
/// strings before composites.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// No value is wrapped.
    Null,

    /// Unsigned 8-bit byte.
    Byte,

    /// Signed 32-bit integer.
    Int,

    /// Unsigned 32-bit integer.
    UnsignedInt,

    /// Single-precision float.
    Float,

    /// Double-precision float.
    Double,

    /// Boolean.
    Bool,

    /// Owned UTF-8 string.
    String,

    /// Ordered sequence of values.
    Vector,

    /// String-keyed mapping of values.
    Map,

    /// Integer-keyed mapping of values.
    IntKeyMap,
}

impl Kind {
    pub const fn is_null(self) -> bool {
        matches!(self, Kind::Null)
    }

    /// Numeric kinds, excluding `Bool`.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Kind::Byte | Kind::Int | Kind::UnsignedInt | Kind::Float | Kind::Double
        )
    }

    /// Numeric kinds and `Bool`: everything stored inline.
    pub const fn is_scalar(self) -> bool {
        self.is_numeric() || matches!(self, Kind::Bool)
    }

    pub const fn is_composite(self) -> bool {
        matches!(self, Kind::Vector | Kind::Map | Kind::IntKeyMap)
    }

    /// Kinds whose payload owns an allocation.
    pub const fn is_heap_backed(self) -> bool {
        matches!(self, Kind::String) || self.is_composite()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Byte => "byte",
            Kind::Int => "int",
            Kind::UnsignedInt => "unsigned int",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Vector => "vector",
            Kind::Map => "map",
            Kind::IntKeyMap => "int key map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ord() {
        assert!(Kind::Null < Kind::Byte);
        assert!(Kind::Bool < Kind::String);
        assert!(Kind::String < Kind::Vector);
        assert!(Kind::Map < Kind::IntKeyMap);
    }

    #[test]
    fn test_kind_classes() {
        assert!(Kind::Double.is_numeric());
        assert!(!Kind::Bool.is_numeric());
        assert!(Kind::Bool.is_scalar());
        assert!(!Kind::String.is_scalar());
        assert!(Kind::String.is_heap_backed());
        assert!(!Kind::String.is_composite());
        assert!(Kind::IntKeyMap.is_composite());
        assert!(!Kind::Null.is_heap_backed());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::UnsignedInt.to_string(), "unsigned int");
        assert_eq!(Kind::Vector.to_string(), "vector");
    }
}
