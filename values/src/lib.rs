//! A single dynamically typed value container.
//!
//! [`Value`] holds a byte, a signed or unsigned integer, a float, a double,
//! a boolean, a string, or a composite of further values: a vector, a
//! string-keyed map or an integer-keyed map. Values nest to any depth.
//!
//! ```
//! use fyd_values::{value, Value};
//!
//! let mut original = value!({ "a" => 1, "b" => 2 });
//! let mut copy = original.clone();
//! copy.as_value_map_mut().unwrap().insert("a".into(), Value::from(99));
//!
//! assert_eq!(original.as_value_map().unwrap()["a"], Value::from(1));
//! assert_ne!(copy, original);
//!
//! let moved = original.take();
//! assert!(original.as_value_map().unwrap().is_empty());
//! assert_eq!(moved.as_value_map().unwrap().len(), 2);
//! ```
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Paths used by `value!` so it expands the same way in `no_std` callers.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, vec};
}

mod coerce;
mod convert;
mod describe;
mod dynamic;
mod error;
mod kind;
mod macros;

pub use convert::MapKey;
pub use dynamic::{Value, ValueMap, ValueMapIntKey, ValueVector};
pub use error::{ValueError, ValueResult};
pub use kind::Kind;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub(crate) mod test_utils {
    /// Initialize a tracing subscriber that writes through the test harness.
    ///
    /// Honours `RUST_LOG`; defaults to `debug`.
    pub(crate) fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
