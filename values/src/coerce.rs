//! Typed accessors.
//!
//! Scalar accessors coerce: any non-composite value converts to any scalar
//! or string kind by a fixed rule. Composite accessors never coerce and
//! fail with [`ValueError::WrongKind`] unless the kind matches.

use alloc::string::{String, ToString};

use crate::{Kind, Value, ValueError, ValueMap, ValueMapIntKey, ValueResult, ValueVector};

macro_rules! numeric_accessor {
    ($(#[$meta:meta])* $name:ident -> $ty:ty, $kind:expr, $parse:ident) => {
        $(#[$meta])*
        #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
        pub fn $name(&self) -> ValueResult<$ty> {
            match self {
                Value::Null => Ok(0 as $ty),
                Value::Byte(v) => Ok(*v as $ty),
                Value::Int(v) => Ok(*v as $ty),
                Value::UnsignedInt(v) => Ok(*v as $ty),
                Value::Float(v) => Ok(*v as $ty),
                Value::Double(v) => Ok(*v as $ty),
                Value::Bool(v) => Ok(u8::from(*v) as $ty),
                Value::String(s) => Ok($parse(s) as $ty),
                Value::Vector(_) | Value::Map(_) | Value::IntKeyMap(_) => {
                    Err(ValueError::wrong_kind($kind, self.kind()))
                }
            }
        }
    };
}

impl Value {
    numeric_accessor! {
        /// Coerce to a byte. Wider integers wrap; floats truncate and saturate.
        as_byte -> u8, Kind::Byte, parse_int_prefix
    }

    numeric_accessor! {
        /// Coerce to a signed integer.
        ///
        /// ```
        /// use fyd_values::Value;
        ///
        /// assert_eq!(Value::from(2.9f64).as_int(), Ok(2));
        /// assert_eq!(Value::from(true).as_int(), Ok(1));
        /// assert_eq!(Value::from(" -17 apples").as_int(), Ok(-17));
        /// ```
        as_int -> i32, Kind::Int, parse_int_prefix
    }

    numeric_accessor! {
        as_unsigned_int -> u32, Kind::UnsignedInt, parse_int_prefix
    }

    numeric_accessor! {
        as_float -> f32, Kind::Float, parse_float_prefix
    }

    numeric_accessor! {
        /// Coerce to a double. Strings contribute their leading decimal
        /// float, or `0.0` if they do not start with one.
        as_double -> f64, Kind::Double, parse_float_prefix
    }

    /// Coerce to a boolean.
    ///
    /// Numbers are `true` when nonzero. Strings are `false` only when empty,
    /// `"0"` or `"false"`.
    pub fn as_bool(&self) -> ValueResult<bool> {
        match self {
            Value::Null => Ok(false),
            Value::Byte(v) => Ok(*v != 0),
            Value::Int(v) => Ok(*v != 0),
            Value::UnsignedInt(v) => Ok(*v != 0),
            Value::Float(v) => Ok(*v != 0.0),
            Value::Double(v) => Ok(*v != 0.0),
            Value::Bool(v) => Ok(*v),
            Value::String(s) => Ok(!matches!(s.as_str(), "" | "0" | "false")),
            Value::Vector(_) | Value::Map(_) | Value::IntKeyMap(_) => {
                Err(ValueError::wrong_kind(Kind::Bool, self.kind()))
            }
        }
    }

    /// Coerce to a string: the canonical text of a scalar, or an empty
    /// string for `Null`.
    pub fn as_string(&self) -> ValueResult<String> {
        match self {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s.clone()),
            Value::Vector(_) | Value::Map(_) | Value::IntKeyMap(_) => {
                Err(ValueError::wrong_kind(Kind::String, self.kind()))
            }
            scalar => Ok(scalar.to_string()),
        }
    }

    /// Borrow the string payload without coercion.
    pub fn as_str(&self) -> ValueResult<&str> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(ValueError::wrong_kind(Kind::String, other.kind())),
        }
    }

    pub fn as_value_vector(&self) -> ValueResult<&ValueVector> {
        match self {
            Value::Vector(items) => Ok(items),
            other => Err(ValueError::wrong_kind(Kind::Vector, other.kind())),
        }
    }

    /// Mutable view of the elements, for in-place edits.
    pub fn as_value_vector_mut(&mut self) -> ValueResult<&mut ValueVector> {
        match self {
            Value::Vector(items) => Ok(items),
            other => Err(ValueError::wrong_kind(Kind::Vector, other.kind())),
        }
    }

    pub fn as_value_map(&self) -> ValueResult<&ValueMap> {
        match self {
            Value::Map(map) => Ok(&**map),
            other => Err(ValueError::wrong_kind(Kind::Map, other.kind())),
        }
    }

    pub fn as_value_map_mut(&mut self) -> ValueResult<&mut ValueMap> {
        match self {
            Value::Map(map) => Ok(&mut **map),
            other => Err(ValueError::wrong_kind(Kind::Map, other.kind())),
        }
    }

    pub fn as_int_key_map(&self) -> ValueResult<&ValueMapIntKey> {
        match self {
            Value::IntKeyMap(map) => Ok(&**map),
            other => Err(ValueError::wrong_kind(Kind::IntKeyMap, other.kind())),
        }
    }

    pub fn as_int_key_map_mut(&mut self) -> ValueResult<&mut ValueMapIntKey> {
        match self {
            Value::IntKeyMap(map) => Ok(&mut **map),
            other => Err(ValueError::wrong_kind(Kind::IntKeyMap, other.kind())),
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading decimal integer of `s`, after optional whitespace and sign.
/// No digits yields `0`; overflow wraps.
fn parse_int_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = &rest.as_bytes()[..count_digits(rest.as_bytes())];
    if digits.is_empty() {
        tracing::trace!(input = s, "no integer prefix, coercing to zero");
        return 0;
    }

    let magnitude = digits.iter().fold(0i64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0'))
    });
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Longest leading decimal float of `s` (sign, digits, fraction, exponent),
/// or `inf`/`nan`. Anything else yields `0.0`.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let negative = bytes.first() == Some(&b'-');

    let special = &s[end..];
    if special.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("inf")) {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if special.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("nan")) {
        return f64::NAN;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        tracing::trace!(input = s, "no float prefix, coercing to zero");
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;
    use crate::value;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), 42);
        assert_eq!(parse_int_prefix("  -7xyz"), -7);
        assert_eq!(parse_int_prefix("+13"), 13);
        assert_eq!(parse_int_prefix("3.9"), 3);
        assert_eq!(parse_int_prefix(""), 0);
        assert_eq!(parse_int_prefix("abc"), 0);
        assert_eq!(parse_int_prefix("-"), 0);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("2.5"), 2.5);
        assert_eq!(parse_float_prefix(" -0.25 rest"), -0.25);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("2E-2x"), 0.02);
        assert_eq!(parse_float_prefix("."), 0.0);
        assert_eq!(parse_float_prefix("x1"), 0.0);
        assert_eq!(parse_float_prefix("-inf"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("NaN").is_nan());
    }

    #[test]
    fn test_composite_accessor_errors() {
        init_test_logging();

        let v = value!([1]);
        assert_eq!(
            v.as_int(),
            Err(ValueError::WrongKind {
                expected: Kind::Int,
                found: Kind::Vector,
            })
        );
        assert_eq!(
            v.as_value_map().unwrap_err().expected(),
            Some(Kind::Map)
        );
    }
}
