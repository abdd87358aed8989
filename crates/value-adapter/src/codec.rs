//! `display`/`parse` pairs.
//!
//! [`Codec`] and [`TryCodec`] are the seams the adapters are generic over.
//! Closures plug in through [`FnCodec`] and [`FnTryCodec`]; the rest of this
//! module holds text codecs for numeric form fields.

use std::marker::PhantomData;

use thiserror::Error;

/// Infallible pair of approximate inverses between a high-level value and
/// its low-level representation.
pub trait Codec {
    type High;
    type Low;

    fn display(&self, high: &Self::High) -> Self::Low;
    fn parse(&self, low: &Self::Low) -> Self::High;
}

/// Fallible counterpart of [`Codec`]. Errors are handed back to the caller
/// untouched.
pub trait TryCodec {
    type High;
    type Low;
    type Error;

    fn try_display(&self, high: &Self::High) -> Result<Self::Low, Self::Error>;
    fn try_parse(&self, low: &Self::Low) -> Result<Self::High, Self::Error>;
}

/// [`Codec`] built from two closures.
pub struct FnCodec<H, L, D, P> {
    display: D,
    parse: P,
    _marker: PhantomData<fn(&H, &L) -> (H, L)>,
}

impl<H, L, D, P> FnCodec<H, L, D, P>
where
    D: Fn(&H) -> L,
    P: Fn(&L) -> H,
{
    pub fn new(display: D, parse: P) -> Self {
        Self {
            display,
            parse,
            _marker: PhantomData,
        }
    }
}

impl<H, L, D, P> Codec for FnCodec<H, L, D, P>
where
    D: Fn(&H) -> L,
    P: Fn(&L) -> H,
{
    type High = H;
    type Low = L;

    #[inline]
    fn display(&self, high: &H) -> L {
        (self.display)(high)
    }

    #[inline]
    fn parse(&self, low: &L) -> H {
        (self.parse)(low)
    }
}

/// [`TryCodec`] built from two fallible closures sharing one error type.
pub struct FnTryCodec<H, L, E, D, P> {
    display: D,
    parse: P,
    _marker: PhantomData<fn(&H, &L) -> Result<(H, L), E>>,
}

impl<H, L, E, D, P> FnTryCodec<H, L, E, D, P>
where
    D: Fn(&H) -> Result<L, E>,
    P: Fn(&L) -> Result<H, E>,
{
    pub fn new(display: D, parse: P) -> Self {
        Self {
            display,
            parse,
            _marker: PhantomData,
        }
    }
}

impl<H, L, E, D, P> TryCodec for FnTryCodec<H, L, E, D, P>
where
    D: Fn(&H) -> Result<L, E>,
    P: Fn(&L) -> Result<H, E>,
{
    type High = H;
    type Low = L;
    type Error = E;

    #[inline]
    fn try_display(&self, high: &H) -> Result<L, E> {
        (self.display)(high)
    }

    #[inline]
    fn try_parse(&self, low: &L) -> Result<H, E> {
        (self.parse)(low)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("empty input")]
    Empty,
    #[error("invalid integer: {input:?}")]
    InvalidInteger { input: String },
}

/// Parses the leading integer of `s`.
///
/// Leading whitespace and one sign are accepted, then either a `0x`/`0X`
/// prefix with the longest run of hex digits, or the longest run of ASCII
/// decimal digits. Whatever follows is ignored, so `"10."` and `"7px"` parse.
/// Returns `None` when there are no digits or the value overflows `i64`.
///
/// Examples:
/// - `"42" -> Some(42)`
/// - `"  -3abc" -> Some(-3)`
/// - `"10." -> Some(10)`
/// - `"0x1f" -> Some(31)`
/// - `"abc" -> None`
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits = rest.bytes().take_while(|b| char::from(*b).is_digit(radix)).count();
    if digits == 0 {
        return None;
    }
    let mut value: i64 = 0;
    for c in rest[..digits].chars() {
        let d = i64::from(c.to_digit(radix)?);
        value = value.checked_mul(i64::from(radix))?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }
    Some(value)
}

/// Parses the leading decimal float of `s`, `NaN` when there is none.
///
/// Accepts an optional sign, digits with at most one `.`, and an exponent
/// only when it is followed by digits. `"Infinity"` spellings are accepted
/// after the sign.
pub fn parse_leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    // A trailing '.' is part of the literal for Rust's parser too ("10." is valid).
    s[..end].parse().unwrap_or(f64::NAN)
}

/// Integer text field where an unparsable edit becomes `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientInt;

impl Codec for LenientInt {
    type High = Option<i64>;
    type Low = String;

    fn display(&self, high: &Option<i64>) -> String {
        match high {
            Some(n) => n.to_string(),
            None => String::new(),
        }
    }

    fn parse(&self, low: &String) -> Option<i64> {
        parse_leading_int(low)
    }
}

/// Float text field; unparsable edits become `NaN`, which displays as empty.
/// Infinities display with the `Infinity` spelling [`parse_leading_float`] reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatText;

impl Codec for FloatText {
    type High = f64;
    type Low = String;

    fn display(&self, high: &f64) -> String {
        if high.is_nan() {
            String::new()
        } else if high.is_infinite() {
            let sign = if high.is_sign_negative() { "-" } else { "" };
            format!("{sign}Infinity")
        } else {
            high.to_string()
        }
    }

    fn parse(&self, low: &String) -> f64 {
        parse_leading_float(low)
    }
}

/// Integer text field that rejects anything but a whole, trimmed integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictInt;

impl TryCodec for StrictInt {
    type High = i64;
    type Low = String;
    type Error = CodecError;

    fn try_display(&self, high: &i64) -> Result<String, CodecError> {
        Ok(high.to_string())
    }

    fn try_parse(&self, low: &String) -> Result<i64, CodecError> {
        let trimmed = low.trim();
        if trimmed.is_empty() {
            return Err(CodecError::Empty);
        }
        trimmed.parse().map_err(|_| CodecError::InvalidInteger {
            input: low.clone(),
        })
    }
}
