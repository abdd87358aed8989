use value_adapter_equal::DeepEqual;

/// Memoized state of an adapter.
///
/// `Unset` sits outside the high-level value space, so no value handed to
/// `read` can ever match it, whatever that value is (`None`, `NaN`, an empty
/// map). The raw value and its parse result share one variant and are
/// replaced together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Memo<L, H> {
    #[default]
    Unset,
    Set {
        low: L,
        parsed: H,
    },
}

impl<L, H> Memo<L, H> {
    pub fn is_set(&self) -> bool {
        matches!(self, Memo::Set { .. })
    }

    /// Last raw value written, if any.
    pub fn low(&self) -> Option<&L> {
        match self {
            Memo::Unset => None,
            Memo::Set { low, .. } => Some(low),
        }
    }

    /// Parse result of [`Memo::low`], if any.
    pub fn parsed(&self) -> Option<&H> {
        match self {
            Memo::Unset => None,
            Memo::Set { parsed, .. } => Some(parsed),
        }
    }

    pub(crate) fn set(&mut self, low: L, parsed: H) {
        *self = Memo::Set { low, parsed };
    }
}

impl<L, H: DeepEqual> Memo<L, H> {
    /// Returns the memoized raw value when `high` deep-equals the last parse
    /// result.
    pub fn matches(&self, high: &H) -> Option<&L> {
        match self {
            Memo::Set { low, parsed } if parsed.deep_equal(high) => Some(low),
            _ => None,
        }
    }
}

/// Accessors, `Default` and `Debug` shared by the adapter types, which all
/// hold a `codec: C` and a `memo: Memo<C::Low, C::High>`.
macro_rules! impl_memo_accessors {
    ($adapter:ident, $codec:ident) => {
        impl<C: $codec> $adapter<C> {
            /// Whether a write has succeeded at least once.
            pub fn is_set(&self) -> bool {
                self.memo.is_set()
            }

            pub fn low(&self) -> Option<&C::Low> {
                self.memo.low()
            }

            pub fn last_parsed(&self) -> Option<&C::High> {
                self.memo.parsed()
            }

            pub fn memo(&self) -> &$crate::Memo<C::Low, C::High> {
                &self.memo
            }

            pub fn codec(&self) -> &C {
                &self.codec
            }
        }

        impl<C: $codec + Default> Default for $adapter<C> {
            fn default() -> Self {
                Self::with_codec(C::default())
            }
        }

        impl<C: $codec> std::fmt::Debug for $adapter<C>
        where
            C::Low: std::fmt::Debug,
            C::High: std::fmt::Debug,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($adapter))
                    .field("memo", &self.memo)
                    .finish_non_exhaustive()
            }
        }
    };
}

pub(crate) use impl_memo_accessors;
