use alloc::{boxed::Box, string::String, vec::Vec};

use hashbrown::HashMap;

use crate::{Kind, ValueError, ValueResult};

pub type ValueVector = Vec<Value>;
pub type ValueMap = HashMap<String, Value>;
pub type ValueMapIntKey = HashMap<i32, Value>;

/// A dynamically typed value.
///
/// Holds one scalar, a string, or a composite of further values. Every
/// variant owns its payload: cloning is a deep copy and no two values ever
/// share storage.
///
/// # Example
///
/// ```
/// use fyd_values::{Kind, Value};
///
/// let v = Value::from(42);
/// assert_eq!(v.kind(), Kind::Int);
/// assert_eq!(v.as_int(), Ok(42));
/// assert_eq!(v.as_string().unwrap(), "42");
/// assert!(v.as_value_vector().is_err());
/// ```
#[derive(Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Byte(u8),
    Int(i32),
    UnsignedInt(u32),
    Float(f32),
    Double(f64),
    Bool(bool),
    String(String),
    Vector(ValueVector),
    // Maps are boxed to keep `Value` at four words.
    Map(Box<ValueMap>),
    IntKeyMap(Box<ValueMapIntKey>),
}

static_assertions::const_assert!(
    core::mem::size_of::<Value>() <= 4 * core::mem::size_of::<usize>()
);
static_assertions::assert_impl_all!(Value: Send, Sync);

impl Value {
    pub const NULL: Value = Value::Null;

    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Byte(_) => Kind::Byte,
            Value::Int(_) => Kind::Int,
            Value::UnsignedInt(_) => Kind::UnsignedInt,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::Vector(_) => Kind::Vector,
            Value::Map(_) => Kind::Map,
            Value::IntKeyMap(_) => Kind::IntKeyMap,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The empty value of `kind`: zero for numbers, `false`, or an empty
    /// string or container.
    pub fn empty_of(kind: Kind) -> Value {
        match kind {
            Kind::Null => Value::Null,
            Kind::Byte => Value::Byte(0),
            Kind::Int => Value::Int(0),
            Kind::UnsignedInt => Value::UnsignedInt(0),
            Kind::Float => Value::Float(0.0),
            Kind::Double => Value::Double(0.0),
            Kind::Bool => Value::Bool(false),
            Kind::String => Value::String(String::new()),
            Kind::Vector => Value::Vector(ValueVector::new()),
            Kind::Map => Value::Map(Box::default()),
            Kind::IntKeyMap => Value::IntKeyMap(Box::default()),
        }
    }

    /// Move the content out, leaving the empty value of the same kind behind.
    ///
    /// ```
    /// use fyd_values::{value, Kind, Value};
    ///
    /// let mut src = value!([1, 2]);
    /// let dst = src.take();
    /// assert_eq!(dst, value!([1, 2]));
    /// assert_eq!(src.kind(), Kind::Vector);
    /// assert!(src.as_value_vector().unwrap().is_empty());
    /// ```
    pub fn take(&mut self) -> Value {
        let empty = Value::empty_of(self.kind());
        core::mem::replace(self, empty)
    }

    /// Replace the content wholesale. The old payload is dropped.
    ///
    /// Accepts anything a `Value` can be built from, so passing a container
    /// by reference copies it and passing it by value transfers it.
    pub fn assign(&mut self, value: impl Into<Value>) -> &mut Self {
        *self = value.into();
        self
    }

    /// Copy-assign from `other`, reusing this value's allocations when both
    /// sides hold the same heap-backed kind.
    pub fn assign_from(&mut self, other: &Value) -> &mut Self {
        self.clone_from(other);
        self
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> ValueResult<Value> {
        Ok(match self {
            Value::String(s) => Value::String(try_clone_string(s)?),
            Value::Vector(items) => {
                let mut out = ValueVector::new();
                out.try_reserve_exact(items.len())
                    .map_err(|_| ValueError::allocation_failed(Kind::Vector))?;
                for item in items {
                    out.push(item.try_clone()?);
                }
                Value::Vector(out)
            }
            Value::Map(map) => {
                let mut out = ValueMap::default();
                out.try_reserve(map.len())
                    .map_err(|_| ValueError::allocation_failed(Kind::Map))?;
                for (key, item) in map.iter() {
                    out.insert(try_clone_string(key)?, item.try_clone()?);
                }
                Value::Map(Box::new(out))
            }
            Value::IntKeyMap(map) => {
                let mut out = ValueMapIntKey::default();
                out.try_reserve(map.len())
                    .map_err(|_| ValueError::allocation_failed(Kind::IntKeyMap))?;
                for (key, item) in map.iter() {
                    out.insert(*key, item.try_clone()?);
                }
                Value::IntKeyMap(Box::new(out))
            }
            scalar => scalar.clone(),
        })
    }

    /// Fallible copy assignment. On error `self` is left untouched.
    pub fn try_assign_from(&mut self, other: &Value) -> ValueResult<&mut Self> {
        *self = other.try_clone()?;
        Ok(self)
    }
}

fn try_clone_string(s: &str) -> ValueResult<String> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())
        .map_err(|_| ValueError::allocation_failed(Kind::String))?;
    out.push_str(s);
    Ok(out)
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Byte(v) => Value::Byte(*v),
            Value::Int(v) => Value::Int(*v),
            Value::UnsignedInt(v) => Value::UnsignedInt(*v),
            Value::Float(v) => Value::Float(*v),
            Value::Double(v) => Value::Double(*v),
            Value::Bool(v) => Value::Bool(*v),
            Value::String(s) => Value::String(s.clone()),
            Value::Vector(items) => Value::Vector(items.clone()),
            Value::Map(map) => Value::Map(map.clone()),
            Value::IntKeyMap(map) => Value::IntKeyMap(map.clone()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Value::String(dst), Value::String(src)) => dst.clone_from(src),
            (Value::Vector(dst), Value::Vector(src)) => dst.clone_from(src),
            (Value::Map(dst), Value::Map(src)) => dst.clone_from(src),
            (Value::IntKeyMap(dst), Value::IntKeyMap(src)) => dst.clone_from(src),
            (dst, src) => *dst = src.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        // Kinds must match: Int(3) and Double(3.0) are different values.
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UnsignedInt(a), Value::UnsignedInt(b)) => a == b,
            // All NaNs are equal so that equality stays reflexive.
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Double(a), Value::Double(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::IntKeyMap(a), Value::IntKeyMap(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_default_is_null() {
        let v = Value::default();
        assert!(v.is_null());
        assert_eq!(v.kind(), Kind::Null);
        assert_eq!(v, Value::NULL);
    }

    #[test]
    fn test_clone_from_reuses_string_buffer() {
        let mut dst = Value::from(String::with_capacity(64));
        let Value::String(s) = &dst else {
            panic!("expected a string");
        };
        let before = s.as_ptr();

        dst.assign_from(&Value::from("short"));

        let Value::String(s) = &dst else {
            panic!("expected a string");
        };
        assert_eq!(s, "short");
        assert_eq!(s.as_ptr(), before);
    }

    #[test]
    fn test_clone_from_across_kinds() {
        let mut dst = value!([1, 2, 3]);
        dst.assign_from(&Value::from(true));
        assert_eq!(dst, Value::Bool(true));
    }

    #[test]
    fn test_try_clone_is_deep() {
        let src = value!({ "a" => [1, 2], "b" => "text" });
        let copy = src.try_clone().unwrap();
        assert_eq!(copy, src);
    }

    #[test]
    fn test_nan_equals_itself() {
        let v = Value::Double(f64::NAN);
        assert_eq!(v, v.clone());
        assert_eq!(Value::Float(f32::NAN), Value::Float(-f32::NAN));
        assert_eq!(Value::Double(0.0), Value::Double(-0.0));
    }
}
