//! Literal-style value construction.
//!
//! # Example
//!
//! ```
//! use fyd_values::{value, Kind};
//!
//! let config = value!({
//!     "name" => "demo",
//!     "ports" => [8080, 8081],
//!     "limits" => { 1 => 0.5, 2 => (-1) },
//!     "parent" => null,
//! });
//!
//! assert_eq!(config.kind(), Kind::Map);
//! let limits = &config.as_value_map().unwrap()["limits"];
//! assert_eq!(limits.kind(), Kind::IntKeyMap);
//! ```

/// Macro for constructing values with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `null` | `Value::Null` |
/// | `[a, b, ...]` | Vector, elements recurse |
/// | `{ "k" => v, ... }` | Map (string keys) |
/// | `{ 1 => v, ... }` | IntKeyMap (`i32` keys) |
/// | `{}` | Empty Map |
/// | `(expr)` | `Value::from(expr)`, parentheses dropped |
/// | any expression | `Value::from(expr)` |
///
/// Elements and map values are single token trees, so an expression made of
/// several tokens must be parenthesised: `value!([(-1), (x + 1)])`.
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    ([]) => {
        $crate::Value::Vector($crate::ValueVector::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::Vector($crate::shim::vec![$($crate::value!($elem)),+])
    };

    ({}) => {
        $crate::Value::Map($crate::shim::Box::default())
    };

    ({ $($key:expr => $val:tt),+ $(,)? }) => {
        <$crate::Value as ::core::iter::FromIterator<_>>::from_iter([
            $(($key, $crate::value!($val))),+
        ])
    };

    (($($inner:tt)+)) => {
        $crate::Value::from($($inner)+)
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
