//! Base-10 integer literal conversion.
//!
//! Grammar: an optional single `+` or `-`, then one or more ASCII digits.
//! Nothing else is accepted: no whitespace, no separators, no radix prefix.
//!
//! The literal is validated before the value is computed, so a malformed
//! literal always reports a [`FormatError`] even when its digit prefix would
//! already overflow the target type.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

mod sealed {
    pub trait Sealed {}
}

/// Signed integer widths the converter can produce.
///
/// Sealed: the range bookkeeping in [`OverflowBound`] assumes every target
/// fits in `i64`.
///
/// ```compile_fail
/// use intconv_types::convert_to;
///
/// let _ = convert_to::<u64>("1");
/// ```
pub trait TargetInt:
    sealed::Sealed + FromStr<Err = ParseIntError> + Copy + fmt::Debug + fmt::Display
{
    const NAME: &'static str;
    const MIN: i64;
    const MAX: i64;
}

macro_rules! target_int {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl TargetInt for $ty {
                const NAME: &'static str = stringify!($ty);
                const MIN: i64 = <$ty>::MIN as i64;
                const MAX: i64 = <$ty>::MAX as i64;
            }
        )*
    };
}

target_int!(i8, i16, i32, i64);

/// Leading sign of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            _ => None,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => f.write_str("+"),
            Sign::Minus => f.write_str("-"),
        }
    }
}

/// Why a literal failed the integer grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("input is empty")]
    Empty,
    #[error("sign '{sign}' is not followed by any digits")]
    MissingDigits { sign: Sign },
    /// `index` is the byte offset of the first offending character.
    #[error("unexpected character {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
}

/// The limit a well-formed literal crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowBound {
    AboveMax { max: i64 },
    BelowMin { min: i64 },
}

impl fmt::Display for OverflowBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowBound::AboveMax { max } => write!(f, "greater than {max}"),
            OverflowBound::BelowMin { min } => write!(f, "less than {min}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("invalid integer literal {input:?}")]
    Format {
        input: String,
        #[source]
        reason: FormatError,
    },
    #[error("integer literal {input:?} does not fit in {target}: value is {bound}")]
    Overflow {
        input: String,
        target: &'static str,
        bound: OverflowBound,
    },
}

impl ConvertError {
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            ConvertError::Format { input, .. } | ConvertError::Overflow { input, .. } => input,
        }
    }

    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, ConvertError::Format { .. })
    }

    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, ConvertError::Overflow { .. })
    }

    #[must_use]
    pub const fn format_error(&self) -> Option<&FormatError> {
        match self {
            ConvertError::Format { reason, .. } => Some(reason),
            ConvertError::Overflow { .. } => None,
        }
    }

    #[must_use]
    pub const fn overflow_bound(&self) -> Option<OverflowBound> {
        match self {
            ConvertError::Overflow { bound, .. } => Some(*bound),
            ConvertError::Format { .. } => None,
        }
    }
}

/// Check `input` against the literal grammar and return its sign.
fn scan(input: &str) -> Result<Option<Sign>, FormatError> {
    let Some(first) = input.chars().next() else {
        return Err(FormatError::Empty);
    };
    let sign = Sign::from_char(first);
    // Both sign characters are a single byte.
    let offset = usize::from(sign.is_some());
    let digits = &input[offset..];

    if let Some((index, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(FormatError::InvalidDigit {
            index: index + offset,
            found,
        });
    }

    match sign {
        Some(sign) if digits.is_empty() => Err(FormatError::MissingDigits { sign }),
        _ => Ok(sign),
    }
}

/// Convert a base-10 literal into any supported signed width.
pub fn convert_to<T: TargetInt>(input: &str) -> Result<T, ConvertError> {
    let sign = scan(input).map_err(|reason| ConvertError::Format {
        input: input.to_string(),
        reason,
    })?;

    // The grammar is already satisfied, so the only remaining failure is range.
    let value = input.parse::<T>().map_err(|_| ConvertError::Overflow {
        input: input.to_string(),
        target: T::NAME,
        bound: match sign {
            Some(Sign::Minus) => OverflowBound::BelowMin { min: T::MIN },
            Some(Sign::Plus) | None => OverflowBound::AboveMax { max: T::MAX },
        },
    })?;

    tracing::trace!(input, width = T::NAME, %value, "converted integer literal");
    Ok(value)
}

/// Convert a base-10 literal into an `i32`.
///
/// ```
/// use intconv_types::convert_to_int;
///
/// assert_eq!(convert_to_int("-42").unwrap(), -42);
/// assert!(convert_to_int("2147483648").unwrap_err().is_overflow());
/// ```
pub fn convert_to_int(input: &str) -> Result<i32, ConvertError> {
    convert_to::<i32>(input)
}
