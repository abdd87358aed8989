use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

/// Structural equality over plain values.
///
/// Implementations compare contents, never identity: two distinct
/// allocations holding equal data are equal. Floats follow the adapter's
/// policy where `NaN` equals `NaN`.
///
/// # Examples
///
/// ```
/// use value_adapter_equal::DeepEqual;
///
/// assert!(f64::NAN.deep_equal(&f64::NAN));
/// assert!(vec![Some(1), None].deep_equal(&vec![Some(1), None]));
/// assert!(!Some(0).deep_equal(&None));
/// ```
pub trait DeepEqual {
    fn deep_equal(&self, other: &Self) -> bool;
}

/// Implements [`DeepEqual`] by delegating to [`PartialEq`].
///
/// Only use this for types whose `PartialEq` is already structural and
/// reflexive (no float fields).
#[macro_export]
macro_rules! impl_deep_equal_via_partial_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DeepEqual for $ty {
                #[inline]
                fn deep_equal(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

impl_deep_equal_via_partial_eq!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
);

macro_rules! impl_float {
    ($($ty:ty),+) => {
        $(
            impl DeepEqual for $ty {
                #[inline]
                fn deep_equal(&self, other: &Self) -> bool {
                    if self.is_nan() {
                        return other.is_nan();
                    }
                    self == other
                }
            }
        )+
    };
}

impl_float!(f32, f64);

impl<T: DeepEqual + ?Sized> DeepEqual for &T {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        (**self).deep_equal(*other)
    }
}

impl<T: DeepEqual + ?Sized> DeepEqual for Box<T> {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        (**self).deep_equal(&**other)
    }
}

impl<T: DeepEqual + ?Sized> DeepEqual for Rc<T> {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        (**self).deep_equal(&**other)
    }
}

impl<T: DeepEqual + ?Sized> DeepEqual for Arc<T> {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        (**self).deep_equal(&**other)
    }
}

impl<T: DeepEqual> DeepEqual for Option<T> {
    fn deep_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.deep_equal(b),
            _ => false,
        }
    }
}

impl<T: DeepEqual> DeepEqual for [T] {
    fn deep_equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other).all(|(a, b)| a.deep_equal(b))
    }
}

impl<T: DeepEqual, const N: usize> DeepEqual for [T; N] {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        self.as_slice().deep_equal(other.as_slice())
    }
}

impl<T: DeepEqual> DeepEqual for Vec<T> {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        self.as_slice().deep_equal(other.as_slice())
    }
}

impl<T: DeepEqual> DeepEqual for VecDeque<T> {
    fn deep_equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other).all(|(a, b)| a.deep_equal(b))
    }
}

impl<K: Ord, V: DeepEqual> DeepEqual for BTreeMap<K, V> {
    fn deep_equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        for (key, val_a) in self {
            match other.get(key) {
                Some(val_b) => {
                    if !val_a.deep_equal(val_b) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

impl<K: Eq + Hash, V: DeepEqual, S: BuildHasher> DeepEqual for HashMap<K, V, S> {
    fn deep_equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        for (key, val_a) in self {
            match other.get(key) {
                Some(val_b) => {
                    if !val_a.deep_equal(val_b) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

// Set members are keys, so `Eq` already is the structural rule.
impl<T: Ord> DeepEqual for BTreeSet<T> {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: Eq + Hash, S: BuildHasher> DeepEqual for HashSet<T, S> {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! impl_tuple {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: DeepEqual),+> DeepEqual for ($($name,)+) {
            #[inline]
            fn deep_equal(&self, other: &Self) -> bool {
                $(self.$idx.deep_equal(&other.$idx))&&+
            }
        }
    };
}

impl_tuple!(A 0);
impl_tuple!(A 0, B 1);
impl_tuple!(A 0, B 1, C 2);
impl_tuple!(A 0, B 1, C 2, D 3);
impl_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
