//! fyd - one uniform type for dynamically typed data
//!
//! # Overview
//!
//! `fyd` lets loosely typed data travel through statically typed code
//! without a wrapper type per shape. Common uses:
//!
//! - Configuration trees
//! - Deserialized records, as the in-memory form behind a codec
//! - Call arguments and results whose shape is only known at runtime
//!
//! # Quick Start
//!
//! ```
//! use fyd::{value, Kind, Value};
//!
//! let v = Value::from(42);
//! assert_eq!(v.kind(), Kind::Int);
//! assert_eq!(v.as_int(), Ok(42));
//! assert_eq!(v.as_string().unwrap(), "42");
//!
//! let seq = value!([1, 2, 3]);
//! assert_eq!(seq.description(), "[1, 2, 3]");
//! ```
//!
//! # Accessors
//!
//! Scalar accessors (`as_int`, `as_double`, `as_string`, ...) coerce between
//! scalar kinds by a fixed rule and only fail for composites. Composite
//! accessors (`as_value_vector`, `as_value_map`, `as_int_key_map` and their
//! `_mut` forms) never coerce. Every failure is a [`ValueError`]:
//!
//! ```
//! use fyd::{Kind, Value, ValueError};
//!
//! let err = Value::from(42).as_value_vector().unwrap_err();
//! assert_eq!(
//!     err,
//!     ValueError::WrongKind { expected: Kind::Vector, found: Kind::Int }
//! );
//! ```
//!
//! # Copy and transfer
//!
//! `clone` is a deep copy. Moving a value transfers it; [`Value::take`]
//! transfers out of a place that stays usable, leaving the empty value of
//! the same kind behind.

pub use fyd_values::{
    Kind, MapKey, Value, ValueError, ValueMap, ValueMapIntKey, ValueResult, ValueVector, value,
};
