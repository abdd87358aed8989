use value_adapter_equal::DeepEqual;

use crate::codec::{Codec, FnCodec};
use crate::memo::{impl_memo_accessors, Memo};

/// Bidirectional adapter between a high-level value and the raw low-level
/// value a user is editing.
///
/// The caller drives it with two calls per interaction:
/// - [`Adapter::write`] when the user edits: stores the raw value and returns
///   what it parses to.
/// - [`Adapter::read`] when the high-level value may have changed: returns
///   the stored raw value if `high` still deep-equals its parse result,
///   otherwise a fresh `display(high)`.
///
/// ```
/// use value_adapter::Adapter;
///
/// let mut doubled = Adapter::new(|n: &i64| n * 2, |d: &i64| d.div_euclid(2));
/// assert_eq!(doubled.write(11), 5);
/// assert_eq!(doubled.read(&5), 11);
/// assert_eq!(doubled.read(&6), 12);
/// ```
pub struct Adapter<C: Codec> {
    codec: C,
    memo: Memo<C::Low, C::High>,
}

impl<H, L, D, P> Adapter<FnCodec<H, L, D, P>>
where
    D: Fn(&H) -> L,
    P: Fn(&L) -> H,
{
    pub fn new(display: D, parse: P) -> Self {
        Self::with_codec(FnCodec::new(display, parse))
    }
}

impl<C: Codec> Adapter<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            memo: Memo::Unset,
        }
    }

    /// Low-level value to show for `high`.
    ///
    /// Never mutates state; repeated calls with the same `high` return the
    /// same value until the next [`Adapter::write`].
    pub fn read(&self, high: &C::High) -> C::Low
    where
        C::High: DeepEqual,
        C::Low: Clone,
    {
        match self.memo.matches(high) {
            Some(low) => {
                log::trace!(target: "value_adapter", "read: memo hit, reusing raw value");
                low.clone()
            }
            None => {
                log::trace!(
                    target: "value_adapter",
                    "read: memo miss (set: {}), displaying",
                    self.memo.is_set()
                );
                self.codec.display(high)
            }
        }
    }

    /// Records a raw edit and returns its parse result.
    ///
    /// `parse` runs before anything is stored, so a panicking `parse` leaves
    /// the previous state in place.
    pub fn write(&mut self, low: C::Low) -> C::High
    where
        C::High: Clone,
    {
        let parsed = self.codec.parse(&low);
        log::trace!(target: "value_adapter", "write: memo updated");
        self.memo.set(low, parsed.clone());
        parsed
    }
}

impl_memo_accessors!(Adapter, Codec);
