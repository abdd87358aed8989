use value_adapter_equal::DeepEqual;

use crate::codec::{FnTryCodec, TryCodec};
use crate::memo::{impl_memo_accessors, Memo};

/// [`Adapter`](crate::Adapter) for fallible `display`/`parse` functions.
///
/// Errors come back exactly as the codec produced them. A failed
/// [`TryAdapter::try_write`] stores nothing, so the memoized parse result
/// always belongs to the memoized raw value.
pub struct TryAdapter<C: TryCodec> {
    codec: C,
    memo: Memo<C::Low, C::High>,
}

impl<H, L, E, D, P> TryAdapter<FnTryCodec<H, L, E, D, P>>
where
    D: Fn(&H) -> Result<L, E>,
    P: Fn(&L) -> Result<H, E>,
{
    pub fn new(display: D, parse: P) -> Self {
        Self::with_codec(FnTryCodec::new(display, parse))
    }
}

impl<C: TryCodec> TryAdapter<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            memo: Memo::Unset,
        }
    }

    /// Memoized raw value on a hit, otherwise `display(high)`. `display` is
    /// not called on a hit, so it cannot fail there.
    pub fn try_read(&self, high: &C::High) -> Result<C::Low, C::Error>
    where
        C::High: DeepEqual,
        C::Low: Clone,
    {
        if let Some(low) = self.memo.matches(high) {
            log::trace!(target: "value_adapter", "try_read: memo hit, reusing raw value");
            return Ok(low.clone());
        }
        log::trace!(
            target: "value_adapter",
            "try_read: memo miss (set: {}), displaying",
            self.memo.is_set()
        );
        self.codec.try_display(high)
    }

    pub fn try_write(&mut self, low: C::Low) -> Result<C::High, C::Error>
    where
        C::High: Clone,
    {
        let parsed = match self.codec.try_parse(&low) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::debug!(target: "value_adapter", "try_write: parse failed, memo kept");
                return Err(err);
            }
        };
        log::trace!(target: "value_adapter", "try_write: memo updated");
        self.memo.set(low, parsed.clone());
        Ok(parsed)
    }
}

impl_memo_accessors!(TryAdapter, TryCodec);
