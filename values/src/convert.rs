//! Building values from Rust data.
//!
//! Containers passed by reference are deep-copied; containers passed by
//! value are moved in without touching their elements.

use alloc::{boxed::Box, string::String};

use crate::{Value, ValueMap, ValueMapIntKey, ValueVector};

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )+
    };
}

impl_from_scalar! {
    u8 => Byte,
    i32 => Int,
    u32 => UnsignedInt,
    f32 => Float,
    f64 => Double,
    bool => Bool,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<ValueVector> for Value {
    fn from(value: ValueVector) -> Self {
        Value::Vector(value)
    }
}

impl From<&ValueVector> for Value {
    fn from(value: &ValueVector) -> Self {
        Value::Vector(value.clone())
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(Box::new(value))
    }
}

impl From<&ValueMap> for Value {
    fn from(value: &ValueMap) -> Self {
        Value::Map(Box::new(value.clone()))
    }
}

impl From<ValueMapIntKey> for Value {
    fn from(value: ValueMapIntKey) -> Self {
        Value::IntKeyMap(Box::new(value))
    }
}

impl From<&ValueMapIntKey> for Value {
    fn from(value: &ValueMapIntKey) -> Self {
        Value::IntKeyMap(Box::new(value.clone()))
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

/// `None` becomes [`Value::Null`].
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "std")]
impl<S> From<std::collections::HashMap<String, Value, S>> for Value {
    fn from(value: std::collections::HashMap<String, Value, S>) -> Self {
        Value::Map(Box::new(value.into_iter().collect()))
    }
}

#[cfg(feature = "std")]
impl<S> From<std::collections::HashMap<i32, Value, S>> for Value {
    fn from(value: std::collections::HashMap<i32, Value, S>) -> Self {
        Value::IntKeyMap(Box::new(value.into_iter().collect()))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Vector(iter.into_iter().collect())
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for alloc::string::String {}
    impl Sealed for &str {}
    impl Sealed for i32 {}
}

/// Key types a mapping value can be collected from.
///
/// String keys produce a [`Value::Map`], `i32` keys a [`Value::IntKeyMap`].
pub trait MapKey: private::Sealed + Sized {
    #[doc(hidden)]
    fn collect_entries<I: Iterator<Item = (Self, Value)>>(entries: I) -> Value;
}

impl MapKey for String {
    fn collect_entries<I: Iterator<Item = (Self, Value)>>(entries: I) -> Value {
        Value::Map(Box::new(entries.collect()))
    }
}

impl MapKey for &str {
    fn collect_entries<I: Iterator<Item = (Self, Value)>>(entries: I) -> Value {
        Value::Map(Box::new(
            entries.map(|(key, value)| (String::from(key), value)).collect(),
        ))
    }
}

impl MapKey for i32 {
    fn collect_entries<I: Iterator<Item = (Self, Value)>>(entries: I) -> Value {
        Value::IntKeyMap(Box::new(entries.collect()))
    }
}

impl<K: MapKey> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        K::collect_entries(iter.into_iter())
    }
}
