//! CLDR plural operands.
//!
//! Operands are derived from the decimal *text* of a value so that visible
//! trailing fraction zeros survive: `"1.50"` has `v = 2, w = 1` while the
//! float `1.5` has `v = 1, w = 1`. Floats use Rust's shortest round-trip
//! rendering, which never produces an exponent.

use std::fmt;
use std::str::FromStr;

use fixed_decimal::{CompactDecimal, FixedDecimal, Sign};
use thiserror::Error;
use writeable::{LengthHint, Writeable};

use crate::locale_data::LocaleData;
use crate::types::{PluralCategory, Value};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a decimal number")]
pub struct InvalidNumber(pub String);

/// The operand set CLDR plural rules are written against.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralOperands {
    /// Absolute value.
    pub n: f64,
    /// Integer digits of `n`.
    pub i: u64,
    /// Visible fraction digit count, with trailing zeros.
    pub v: usize,
    /// Visible fraction digit count, without trailing zeros.
    pub w: usize,
    /// Visible fraction digits, with trailing zeros.
    pub f: u64,
    /// Visible fraction digits, without trailing zeros.
    pub t: u64,
    /// Compact decimal exponent.
    pub e: i32,
    pub is_negative: bool,
    integer_digits: String,
    fraction_digits: String,
}

impl PluralOperands {
    pub fn zero() -> Self {
        Self::from_digits(false, "0", "", 0)
    }

    pub fn from_i64(value: i64) -> Self {
        let digits = value.unsigned_abs().to_string();
        Self::from_digits(value < 0, &digits, "", 0)
    }

    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        let negative = value < 0.0;
        value
            .abs()
            .to_string()
            .parse::<Self>()
            .map(|operands| Self {
                is_negative: negative,
                ..operands
            })
            .unwrap_or_else(|_| Self::zero())
    }

    /// Operands of a numeric argument, or `None` when the value is not a number.
    pub fn from_numeric(value: &Value) -> Option<Self> {
        match value {
            Value::Int(value) => Some(Self::from_i64(*value)),
            Value::Float(value) if value.is_finite() => Some(Self::from_f64(*value)),
            Value::Str(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Operands of any argument; non-numeric values count as zero.
    pub fn from_value(value: &Value) -> Self {
        Self::from_numeric(value).unwrap_or_else(Self::zero)
    }

    /// The signed value as a float.
    pub fn as_f64(&self) -> f64 {
        if self.is_negative { -self.n } else { self.n }
    }

    pub fn is_zero(&self) -> bool {
        self.i == 0 && self.t == 0
    }

    /// Numeric equality on the full decimal digits; trailing fraction zeros
    /// are ignored, so `1` equals `1.0`.
    pub fn same_value(&self, other: &Self) -> bool {
        let negative = |operands: &Self| operands.is_negative && !operands.is_zero();
        negative(self) == negative(other)
            && self.integer_digits == other.integer_digits
            && self.fraction_digits.trim_end_matches('0') == other.fraction_digits.trim_end_matches('0')
    }

    /// Subtracts an integer offset, keeping the visible fraction digits.
    pub fn with_offset(&self, offset: i64) -> Self {
        if offset == 0 {
            return self.clone();
        }
        let scale = self.fraction_digits.len() as u32;
        let magnitude = format!("{}{}", self.integer_digits, self.fraction_digits);
        let scaled = match (magnitude.parse::<i128>(), 10i128.checked_pow(scale)) {
            (Ok(value), Some(factor)) => {
                let value = if self.is_negative { -value } else { value };
                value.checked_sub(i128::from(offset).saturating_mul(factor))
            }
            _ => None,
        };
        let Some(scaled) = scaled else {
            return Self::from_f64(self.as_f64() - offset as f64);
        };
        let digits = format!("{:0>width$}", scaled.unsigned_abs(), width = scale as usize + 1);
        let (integer, fraction) = digits.split_at(digits.len() - scale as usize);
        Self::from_digits(scaled < 0, integer, fraction, 0)
    }

    /// The value as a [`FixedDecimal`], keeping visible trailing zeros.
    pub fn to_fixed_decimal(&self) -> FixedDecimal {
        let text = if self.fraction_digits.is_empty() {
            self.integer_digits.clone()
        } else {
            format!("{}.{}", self.integer_digits, self.fraction_digits)
        };
        let mut decimal = text.parse::<FixedDecimal>().unwrap_or_default();
        if self.is_negative && !self.is_zero() {
            decimal.set_sign(Sign::Negative);
        }
        decimal
    }

    /// The unsigned value as a significand and compact exponent when `e > 0`.
    /// The significand keeps the value's integer zeros, so `v` is unchanged.
    pub fn to_compact_decimal(&self) -> Option<CompactDecimal> {
        let exponent = u8::try_from(self.e).ok().filter(|e| *e > 0)?;
        let mut significand = self.to_fixed_decimal();
        significand.set_sign(Sign::None);
        significand.multiply_pow10(-i16::from(exponent));
        Some(CompactDecimal::from_significand_and_exponent(significand, exponent))
    }

    fn from_digits(is_negative: bool, integer: &str, fraction: &str, e: i32) -> Self {
        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let trimmed_fraction = fraction.trim_end_matches('0');
        let n = if fraction.is_empty() {
            integer.parse::<f64>()
        } else {
            format!("{integer}.{fraction}").parse::<f64>()
        }
        .unwrap_or(0.0);
        Self {
            n,
            i: saturating_digits(integer),
            v: fraction.len(),
            w: trimmed_fraction.len(),
            f: saturating_digits(fraction),
            t: saturating_digits(trimmed_fraction),
            e,
            is_negative,
            integer_digits: integer.to_string(),
            fraction_digits: fraction.to_string(),
        }
    }
}

fn saturating_digits(digits: &str) -> u64 {
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

impl FromStr for PluralOperands {
    type Err = InvalidNumber;

    /// Accepts `-1.50`, `+3`, `.5`, `5.`, and exponents written `1.2e3` or `1.2c3`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidNumber(input.to_string());
        let trimmed = input.trim();
        let (is_negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (mantissa, exponent) = match unsigned.find(['e', 'E', 'c', 'C']) {
            Some(index) => {
                let exponent = unsigned[index + 1..]
                    .parse::<i32>()
                    .map_err(|_| invalid())?;
                (&unsigned[..index], exponent)
            }
            None => (unsigned, 0),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty())
            || !all_digits(integer)
            || !all_digits(fraction)
            || exponent.unsigned_abs() > 1000
        {
            return Err(invalid());
        }
        if exponent == 0 {
            return Ok(Self::from_digits(is_negative, integer, fraction, 0));
        }

        let digits = format!("{integer}{fraction}");
        let point = integer.len() as i64 + i64::from(exponent);
        let (integer, fraction) = if point >= digits.len() as i64 {
            let zeros = "0".repeat(point as usize - digits.len());
            (format!("{digits}{zeros}"), String::new())
        } else if point <= 0 {
            ("0".to_string(), format!("{}{digits}", "0".repeat(point.unsigned_abs() as usize)))
        } else {
            let (head, tail) = digits.split_at(point as usize);
            (head.to_string(), tail.to_string())
        };
        Ok(Self::from_digits(is_negative, &integer, &fraction, exponent))
    }
}

impl Writeable for PluralOperands {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.is_negative && !self.is_zero() {
            sink.write_char('-')?;
        }
        sink.write_str(&self.integer_digits)?;
        if !self.fraction_digits.is_empty() {
            sink.write_char('.')?;
            sink.write_str(&self.fraction_digits)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let sign = usize::from(self.is_negative && !self.is_zero());
        let point = usize::from(!self.fraction_digits.is_empty());
        LengthHint::exact(
            sign + self.integer_digits.len() + point + self.fraction_digits.len(),
        )
    }
}

writeable::impl_display_with_writeable!(PluralOperands);

/// Plural category of `operands` under the locale's cardinal or ordinal rules.
pub fn category_of(
    data: &dyn LocaleData,
    locale: &str,
    operands: &PluralOperands,
    ordinal: bool,
) -> PluralCategory {
    data.plural_category(locale, operands, ordinal)
        .unwrap_or(PluralCategory::Other)
}
