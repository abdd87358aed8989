//! value-adapter-equal - Deep structural equality for adapter values.
//!
//! [`DeepEqual`] is the comparison the adapter runs between an incoming
//! high-level value and the value it last parsed. It differs from
//! [`PartialEq`] in one place that matters for user input: two `NaN`
//! floats are equal, so a value that failed to parse into a number still
//! round-trips through the adapter.
//!
//! With the `json` feature, [`deep_equal`] compares [`serde_json::Value`]
//! trees with strict type checking.

mod deep_equal;
#[cfg(feature = "json")]
mod json;

pub use deep_equal::DeepEqual;
#[cfg(feature = "json")]
pub use json::deep_equal;
