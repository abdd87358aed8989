//! value-adapter - Keep a raw low-level edit while a canonical high-level
//! value round-trips through the rest of the system.
//!
//! A text field bound to a number is the usual case: the user types `"10."`,
//! the field reports `10` upward, and on the next render the field is handed
//! `10` again. Re-deriving the text would show `"10"` and eat the decimal
//! point. [`Adapter`] remembers the last raw value it was given and returns it
//! verbatim as long as the incoming high-level value still deep-equals what
//! that raw value parsed to.
//!
//! # Overview
//!
//! - [`Adapter`] - infallible `display`/`parse` pair plus memoized state
//! - [`TryAdapter`] - the same reconciliation for fallible functions
//! - [`Memo`] - the tagged unset/set state both adapters carry
//! - [`codec`] - ready-made text codecs for numeric fields
//!
//! # Example
//!
//! ```
//! use value_adapter::Adapter;
//! use value_adapter::codec::parse_leading_int;
//!
//! let mut field = Adapter::new(
//!     |n: &Option<i64>| n.map(|n| n.to_string()).unwrap_or_default(),
//!     |s: &String| parse_leading_int(s),
//! );
//!
//! assert_eq!(field.read(&Some(5)), "5");
//! let parsed = field.write("10.".to_string());
//! assert_eq!(parsed, Some(10));
//! assert_eq!(field.read(&parsed), "10.");
//! ```

mod adapter;
pub mod codec;
mod memo;
mod try_adapter;

pub use adapter::Adapter;
pub use codec::{Codec, FnCodec, FnTryCodec, TryCodec};
pub use memo::Memo;
pub use try_adapter::TryAdapter;
pub use value_adapter_equal::{impl_deep_equal_via_partial_eq, DeepEqual};
