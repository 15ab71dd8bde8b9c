//! Rendering numbers according to a [`NumberFormatSpec`].
//!
//! Values travel as [`FixedDecimal`] so that scaling, rounding and padding
//! never go through binary floating point. Digit shaping and grouping are
//! left to [`LocaleData::format_decimal`]; signs, exponents and affixes are
//! assembled here from [`NumberSymbols`] and the unit tables.

use fixed_decimal::{FixedDecimal, RoundingIncrement, Sign};

use crate::locale::ResolvedLocale;
use crate::locale_data::{DataKind, LATIN_DIGITS, LocaleData, NumberSymbols, fill_pattern};
use crate::operands::{PluralOperands, category_of};
use crate::skeleton::{
    DigitRange, Grouping, Notation, NumberFormatSpec, NumberUnit, RoundingMode, RoundingPriority,
    SignDisplay, UnitWidth, parse_currency_code, parse_decimal_pattern,
};
use crate::types::PluralCategory;

/// Resolves a named number style or ICU decimal pattern.
///
/// `::` skeletons are parsed by the pattern parser and never reach this
/// function. Returns `None` for text that is neither a known style nor a
/// decimal pattern.
pub fn spec_for_style(style: &str) -> Option<NumberFormatSpec> {
    let style = style.trim();
    match style {
        "integer" => return Some(NumberFormatSpec::integer()),
        "percent" => return Some(NumberFormatSpec::percent()),
        "currency" => return Some(NumberFormatSpec::currency(None)),
        "ordinal" => {
            return Some(NumberFormatSpec {
                ordinal: true,
                ..NumberFormatSpec::integer()
            });
        }
        _ => {}
    }
    if let Some(code) = style
        .strip_prefix("currency/")
        .or_else(|| style.strip_prefix("currency:"))
    {
        return parse_currency_code(code.trim()).map(|code| NumberFormatSpec::currency(Some(code)));
    }
    parse_decimal_pattern(style)
}

/// How a value is rounded and padded before rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Precision {
    Unlimited,
    Fraction(DigitRange),
    Significant(DigitRange),
    Combined {
        fraction: DigitRange,
        significant: DigitRange,
        priority: RoundingPriority,
    },
    Increment(f64),
    /// Whole numbers once there are two integer digits, two significant digits below that.
    Compact,
}

impl Precision {
    fn for_spec(spec: &NumberFormatSpec, currency_digits: Option<u8>) -> Self {
        if spec.unlimited_precision {
            return Precision::Unlimited;
        }
        if let Some(increment) = spec.rounding_increment {
            return Precision::Increment(increment);
        }
        match (spec.fraction_digits, spec.significant_digits) {
            (Some(fraction), Some(significant)) => {
                return Precision::Combined {
                    fraction,
                    significant,
                    priority: spec.rounding_priority,
                };
            }
            (Some(fraction), None) => return Precision::Fraction(fraction),
            (None, Some(significant)) => return Precision::Significant(significant),
            (None, None) => {}
        }
        let currency_digits = currency_digits.map(|digits| DigitRange::exactly(u16::from(digits)));
        match currency_digits {
            Some(digits) if spec.currency_precision => Precision::Fraction(digits),
            _ if spec.notation.is_compact() => Precision::Compact,
            Some(digits) => Precision::Fraction(digits),
            None => match spec.unit {
                NumberUnit::Percent | NumberUnit::Permille => {
                    Precision::Fraction(DigitRange::exactly(0))
                }
                _ => Precision::Fraction(DigitRange::between(0, 3)),
            },
        }
    }
}

fn position(digits: u16) -> i16 {
    i16::try_from(digits).unwrap_or(i16::MAX)
}

fn round_at(
    decimal: &mut FixedDecimal,
    position: i16,
    mode: RoundingMode,
    increment: RoundingIncrement,
) {
    match mode {
        RoundingMode::Ceiling => decimal.ceil_to_increment(position, increment),
        RoundingMode::Floor => decimal.floor_to_increment(position, increment),
        RoundingMode::Down => decimal.trunc_to_increment(position, increment),
        RoundingMode::Up => decimal.expand_to_increment(position, increment),
        RoundingMode::HalfEven => decimal.half_even_to_increment(position, increment),
        RoundingMode::HalfDown => decimal.half_trunc_to_increment(position, increment),
        RoundingMode::HalfUp => decimal.half_expand_to_increment(position, increment),
        RoundingMode::Unnecessary => {}
    }
}

/// Lowest digit position kept when `max` significant digits are allowed.
fn significant_position(decimal: &FixedDecimal, max: u16) -> i16 {
    decimal
        .nonzero_magnitude_start()
        .saturating_sub(position(max))
        .saturating_add(1)
}

fn pad_significant(decimal: &mut FixedDecimal, min: u16) {
    if min > 0 {
        decimal.pad_end(significant_position(decimal, min).min(0));
    }
}

fn round_fraction(decimal: &mut FixedDecimal, range: DigitRange, mode: RoundingMode) {
    if let Some(max) = range.max {
        round_at(decimal, -position(max), mode, RoundingIncrement::MultiplesOf1);
    }
    decimal.trim_end();
    decimal.pad_end(-position(range.min));
}

fn round_significant(decimal: &mut FixedDecimal, range: DigitRange, mode: RoundingMode) {
    if let Some(max) = range.max {
        let at = significant_position(decimal, max);
        round_at(decimal, at, mode, RoundingIncrement::MultiplesOf1);
    }
    decimal.trim_end();
    pad_significant(decimal, range.min);
}

/// Splits an increment such as `0.05` into the position of its last digit
/// and the multiple that digit is rounded to.
fn increment_parts(increment: f64) -> Option<(i16, RoundingIncrement)> {
    let decimal: FixedDecimal = increment.to_string().parse().ok()?;
    let start = decimal.nonzero_magnitude_start();
    let end = decimal.nonzero_magnitude_end();
    let multiple = match (start - end, decimal.digit_at(start), decimal.digit_at(end)) {
        (0, 1, _) => RoundingIncrement::MultiplesOf1,
        (0, 2, _) => RoundingIncrement::MultiplesOf2,
        (0, 5, _) => RoundingIncrement::MultiplesOf5,
        (1, 2, 5) => RoundingIncrement::MultiplesOf25,
        _ => return None,
    };
    Some((end, multiple))
}

fn to_f64(decimal: &FixedDecimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}

fn from_f64(value: f64) -> FixedDecimal {
    if !value.is_finite() {
        return FixedDecimal::from(0);
    }
    value.to_string().parse().unwrap_or_default()
}

fn round_increment(decimal: &mut FixedDecimal, increment: f64, mode: RoundingMode) {
    if increment.is_nan() || increment <= 0.0 {
        return;
    }
    let digits = from_f64(increment).nonzero_magnitude_end().min(0);
    match increment_parts(increment) {
        Some((at, multiple)) => round_at(decimal, at, mode, multiple),
        None => {
            let quotient = to_f64(decimal) / increment;
            let steps = match mode {
                RoundingMode::Ceiling => quotient.ceil(),
                RoundingMode::Floor => quotient.floor(),
                RoundingMode::Down => quotient.trunc(),
                RoundingMode::Up => quotient.abs().ceil().copysign(quotient),
                RoundingMode::Unnecessary => quotient,
                RoundingMode::HalfUp => quotient.round(),
                RoundingMode::HalfEven | RoundingMode::HalfDown => quotient.round_ties_even(),
            };
            *decimal = from_f64(steps * increment);
            // clears binary noise such as 0.8999999999999999
            decimal.half_even(digits);
        }
    }
    decimal.trim_end();
    decimal.pad_end(digits);
}

fn apply_precision(decimal: &mut FixedDecimal, precision: Precision, spec: &NumberFormatSpec) {
    let mode = spec.rounding_mode;
    match precision {
        Precision::Unlimited => {}
        Precision::Fraction(range) => round_fraction(decimal, range, mode),
        Precision::Significant(range) => round_significant(decimal, range, mode),
        Precision::Combined {
            fraction,
            significant,
            priority,
        } => {
            let fraction_at = fraction.max.map(|max| -position(max));
            let significant_at = significant.max.map(|max| significant_position(decimal, max));
            // `None` is an unlimited side; `bool` records whether the fraction side won.
            let (at, fraction_wins) = match (priority, fraction_at, significant_at) {
                (_, None, None) => (None, true),
                (RoundingPriority::Relaxed, None, _) => (None, true),
                (RoundingPriority::Relaxed, _, None) => (None, false),
                (RoundingPriority::Strict, Some(at), None) => (Some(at), true),
                (RoundingPriority::Strict, None, Some(at)) => (Some(at), false),
                (RoundingPriority::Relaxed, Some(f), Some(s)) => (Some(f.min(s)), f <= s),
                (RoundingPriority::Strict, Some(f), Some(s)) => (Some(f.max(s)), f >= s),
            };
            if let Some(at) = at {
                round_at(decimal, at, mode, RoundingIncrement::MultiplesOf1);
            }
            decimal.trim_end();
            if fraction_wins {
                decimal.pad_end(-position(fraction.min));
            } else {
                pad_significant(decimal, significant.min);
            }
        }
        Precision::Increment(increment) => round_increment(decimal, increment, mode),
        Precision::Compact => {
            if decimal.nonzero_magnitude_start() >= 1 {
                round_fraction(decimal, DigitRange::exactly(0), mode);
            } else {
                round_significant(decimal, DigitRange::between(0, 2), mode);
            }
        }
    }
    let whole = decimal.is_zero() || decimal.nonzero_magnitude_end() >= 0;
    if spec.hide_whole_fraction && whole {
        decimal.trim_end();
    }
}

/// Replaces ASCII digits in text this module produced itself.
fn localize_digits(text: &str, digits: [char; 10]) -> String {
    if digits == LATIN_DIGITS {
        return text.to_string();
    }
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => digits[d as usize],
            _ => c,
        })
        .collect()
}

/// Puts a currency symbol into a `¤` pattern, spacing alphabetic symbols
/// away from the number.
fn place_currency(pattern: &str, symbol: &str, number: &str) -> String {
    let starts_alpha = symbol.chars().next().is_some_and(char::is_alphabetic);
    let ends_alpha = symbol.chars().last().is_some_and(char::is_alphabetic);
    let pattern = if ends_alpha && pattern.contains("¤{0}") {
        pattern.replacen("¤{0}", "¤\u{a0}{0}", 1)
    } else if starts_alpha && pattern.contains("{0}¤") {
        pattern.replacen("{0}¤", "{0}\u{a0}¤", 1)
    } else {
        pattern.to_string()
    };
    fill_pattern(&pattern.replace('¤', symbol), &[number])
}

/// Formats numbers for one resolved locale.
#[derive(Clone, Copy)]
pub struct NumberFormatter<'a> {
    data: &'a dyn LocaleData,
    locale: &'a ResolvedLocale,
    default_currency: &'a str,
}

impl<'a> NumberFormatter<'a> {
    pub fn new(data: &'a dyn LocaleData, locale: &'a ResolvedLocale, default_currency: &'a str) -> Self {
        Self {
            data,
            locale,
            default_currency,
        }
    }

    fn locale_for(&self, kind: DataKind) -> &'a str {
        self.locale.for_kind(self.data, kind)
    }

    /// Cardinal plural category of a rendered value.
    pub fn category(&self, decimal: &FixedDecimal) -> PluralCategory {
        match decimal.to_string().parse::<PluralOperands>() {
            Ok(operands) => category_of(self.data, self.locale_for(DataKind::Plurals), &operands, false),
            Err(_) => PluralCategory::Other,
        }
    }

    /// The locale default format, as used for `#`.
    pub fn format_default(&self, value: &PluralOperands) -> String {
        self.format(value, &NumberFormatSpec::default())
    }

    pub fn format(&self, value: &PluralOperands, spec: &NumberFormatSpec) -> String {
        let locale = self.locale_for(DataKind::Numbers);
        let symbols = self.data.number_symbols(locale);
        let mut decimal = value.to_fixed_decimal();
        Self::scale(&mut decimal, spec);

        let currency = match &spec.unit {
            NumberUnit::Currency(Some(code)) => Some(code.to_string()),
            NumberUnit::Currency(None) => Some(self.default_currency.to_ascii_uppercase()),
            _ => None,
        };
        let currency_digits = currency.as_deref().map(|code| self.data.currency_digits(code));
        let precision = Precision::for_spec(spec, currency_digits);

        let mut number = match spec.notation {
            Notation::Standard => {
                apply_precision(&mut decimal, precision, spec);
                self.render_digits(locale, &decimal, spec)
            }
            Notation::Scientific | Notation::Engineering => {
                let exponent = Self::scientific(&mut decimal, precision, spec);
                let mut number = self.render_digits(locale, &decimal, spec);
                number.push_str(&self.exponent_text(locale, exponent, spec, &symbols));
                number
            }
            Notation::CompactShort | Notation::CompactLong => {
                let exponent = self.compact(locale, &mut decimal, precision, spec);
                let digits = self.render_digits(locale, &decimal, spec);
                let long = spec.notation == Notation::CompactLong;
                let category = self.category(&decimal);
                match self.data.compact_pattern(locale, exponent, long, category) {
                    Some(pattern) if exponent > 0 && pattern.exponent == exponent => {
                        fill_pattern(&pattern.pattern, &[&digits])
                    }
                    _ => digits,
                }
            }
        };

        if spec.ordinal {
            number = self.ordinal_suffix(&decimal, number);
        }
        let number = format!("{}{number}{}", spec.prefix, spec.suffix);
        let category = self.category(&decimal);
        let mut text = match &spec.unit {
            NumberUnit::None => number,
            NumberUnit::Percent => fill_pattern(&symbols.percent_pattern, &[&number]),
            NumberUnit::Permille => fill_pattern(&symbols.permille_pattern, &[&number]),
            NumberUnit::Currency(_) => {
                let code = currency.as_deref().unwrap_or(self.default_currency);
                self.currency_affix(&number, code, spec.unit_width, category, &symbols)
            }
            NumberUnit::Measure(unit) => {
                self.unit_affix(&number, unit, spec.per_unit.as_deref(), spec.unit_width, category)
            }
        };
        if let (NumberUnit::None | NumberUnit::Percent | NumberUnit::Permille, Some(per)) =
            (&spec.unit, spec.per_unit.as_deref())
        {
            text = format!("{text}/{}", self.per_unit_label(per, spec.unit_width));
        }
        let is_currency = matches!(spec.unit, NumberUnit::Currency(_));
        let mut text = Self::apply_sign(text, &decimal, spec.sign_display, &symbols, is_currency);
        for token in &spec.literal_tokens {
            text.push(' ');
            text.push_str(token);
        }
        text
    }

    /// Formats `start`–`end`; equal renderings collapse into one approximate value.
    pub fn format_range(
        &self,
        start: &PluralOperands,
        end: &PluralOperands,
        spec: &NumberFormatSpec,
    ) -> String {
        let symbols = self.data.number_symbols(self.locale_for(DataKind::Numbers));
        let ends = NumberFormatSpec {
            literal_tokens: Vec::new(),
            ..spec.clone()
        };
        let first = self.format(start, &ends);
        let second = self.format(end, &ends);
        let mut text = if first == second {
            fill_pattern(&symbols.approximately_pattern, &[&first])
        } else {
            fill_pattern(&symbols.range_pattern, &[&first, &second])
        };
        for token in &spec.literal_tokens {
            text.push(' ');
            text.push_str(token);
        }
        text
    }

    fn scale(decimal: &mut FixedDecimal, spec: &NumberFormatSpec) {
        let factor = spec.scale.unwrap_or(match spec.unit {
            NumberUnit::Percent => 100.0,
            NumberUnit::Permille => 1000.0,
            _ => 1.0,
        });
        if factor == 1.0 {
            return;
        }
        let exponent = factor.abs().log10().round();
        if factor > 0.0 && 10f64.powi(exponent as i32) == factor {
            decimal.multiply_pow10(exponent as i16);
        } else {
            *decimal = from_f64(to_f64(decimal) * factor);
        }
    }

    /// Normalizes `decimal` to a mantissa and returns its exponent.
    fn scientific(decimal: &mut FixedDecimal, precision: Precision, spec: &NumberFormatSpec) -> i16 {
        let engineering = spec.notation == Notation::Engineering;
        let normalize = |magnitude: i16| {
            if engineering {
                magnitude.div_euclid(3) * 3
            } else {
                magnitude
            }
        };
        let original = decimal.clone();
        let mut exponent = if decimal.is_zero() {
            0
        } else {
            normalize(decimal.nonzero_magnitude_start())
        };
        decimal.multiply_pow10(-exponent);
        apply_precision(decimal, precision, spec);
        if !decimal.is_zero() {
            // 9.99 may round up to 10.0
            let rounded = normalize(decimal.nonzero_magnitude_start().saturating_add(exponent));
            if rounded != exponent {
                exponent = rounded;
                *decimal = original;
                decimal.multiply_pow10(-exponent);
                apply_precision(decimal, precision, spec);
            }
        }
        exponent
    }

    /// Divides `decimal` by its compact exponent and returns that exponent.
    fn compact(
        &self,
        locale: &str,
        decimal: &mut FixedDecimal,
        precision: Precision,
        spec: &NumberFormatSpec,
    ) -> i16 {
        let long = spec.notation == Notation::CompactLong;
        let exponent_for = |magnitude: i16| {
            self.data
                .compact_pattern(locale, magnitude, long, PluralCategory::Other)
                .map_or(0, |pattern| pattern.exponent)
        };
        let original = decimal.clone();
        let mut magnitude = decimal.nonzero_magnitude_start();
        let mut exponent = 0;
        for _ in 0..2 {
            exponent = exponent_for(magnitude);
            *decimal = original.clone();
            decimal.multiply_pow10(-exponent);
            apply_precision(decimal, precision, spec);
            // 999 999 rounds to 1000K, which belongs in the next row
            let rounded = decimal.nonzero_magnitude_start().saturating_add(exponent);
            if decimal.is_zero() || exponent_for(rounded) == exponent {
                break;
            }
            magnitude = rounded;
        }
        exponent
    }

    /// Applies integer width, then renders the unsigned digits.
    fn render_digits(&self, locale: &str, decimal: &FixedDecimal, spec: &NumberFormatSpec) -> String {
        let mut digits = decimal.clone();
        digits.set_sign(Sign::None);
        if let Some(max) = spec.max_integer_digits {
            digits.set_max_position(position(max));
        }
        if spec.min_integer_digits > 1 {
            digits.pad_start(position(spec.min_integer_digits));
        }
        let mut text = self.data.format_decimal(locale, &digits, spec.grouping);
        let fraction_only = !digits.is_zero() && digits.nonzero_magnitude_start() < 0;
        if spec.min_integer_digits == 0 && fraction_only {
            let mut chars = text.chars();
            if chars.next().is_some_and(|c| c.to_digit(10) == Some(0) || c == self.data.digits(locale)[0]) {
                text = chars.as_str().to_string();
            }
        }
        if spec.decimal_always && *digits.magnitude_range().start() >= 0 {
            text.push_str(&self.decimal_separator(locale));
        }
        text
    }

    fn decimal_separator(&self, locale: &str) -> String {
        let mut sample = FixedDecimal::from(15);
        sample.multiply_pow10(-1);
        let text = self.data.format_decimal(locale, &sample, Grouping::Off);
        let mut chars = text.chars();
        chars.next();
        chars.next_back();
        chars.as_str().to_string()
    }

    fn exponent_text(
        &self,
        locale: &str,
        exponent: i16,
        spec: &NumberFormatSpec,
        symbols: &NumberSymbols,
    ) -> String {
        let sign = match spec.exponent_sign {
            _ if exponent < 0 => symbols.minus_sign.as_str(),
            SignDisplay::Always | SignDisplay::AccountingAlways => symbols.plus_sign.as_str(),
            SignDisplay::ExceptZero | SignDisplay::AccountingExceptZero if exponent > 0 => {
                symbols.plus_sign.as_str()
            }
            _ => "",
        };
        let width = usize::from(spec.exponent_digits.max(1));
        let digits = format!("{:0>width$}", exponent.unsigned_abs());
        format!(
            "{}{sign}{}",
            symbols.exponent_separator,
            localize_digits(&digits, self.data.digits(locale))
        )
    }

    fn ordinal_suffix(&self, decimal: &FixedDecimal, number: String) -> String {
        let mut absolute = decimal.clone();
        absolute.set_sign(Sign::None);
        let Ok(operands) = absolute.to_string().parse::<PluralOperands>() else {
            return number;
        };
        let locale = self.locale_for(DataKind::Plurals);
        let category = category_of(self.data, locale, &operands, true);
        match self.data.ordinal_pattern(self.locale_for(DataKind::Numbers), category) {
            Some(pattern) => fill_pattern(&pattern, &[&number]),
            None => number,
        }
    }

    fn currency_affix(
        &self,
        number: &str,
        code: &str,
        width: UnitWidth,
        category: PluralCategory,
        symbols: &NumberSymbols,
    ) -> String {
        let locale = self.locale_for(DataKind::Currencies);
        let display = self.data.currency_display(locale, code, width, category);
        match width {
            UnitWidth::Hidden => number.to_string(),
            UnitWidth::FullName => {
                let name = display.unwrap_or_else(|| code.to_string());
                format!("{number} {name}")
            }
            UnitWidth::Narrow | UnitWidth::Short | UnitWidth::IsoCode => {
                let symbol = display.unwrap_or_else(|| {
                    tracing::warn!(code, locale, "no currency symbol, using the ISO code");
                    code.to_string()
                });
                place_currency(&symbols.currency_pattern, &symbol, number)
            }
        }
    }

    fn unit_affix(
        &self,
        number: &str,
        unit: &str,
        per_unit: Option<&str>,
        width: UnitWidth,
        category: PluralCategory,
    ) -> String {
        let locale = self.locale_for(DataKind::Units);
        if let Some(per) = per_unit {
            let compound = format!("{unit}-per-{per}");
            if let Some(pattern) = self.data.unit_pattern(locale, &compound, width, category) {
                return fill_pattern(&pattern, &[number]);
            }
        }
        let text = match self.data.unit_pattern(locale, unit, width, category) {
            Some(pattern) => fill_pattern(&pattern, &[number]),
            None => {
                tracing::warn!(unit, locale, "unknown unit, using its identifier");
                format!("{number} {unit}")
            }
        };
        match per_unit {
            Some(per) => format!("{text}/{}", self.per_unit_label(per, width)),
            None => text,
        }
    }

    /// The unit's singular pattern without its number, e.g. `h` for `hour`.
    fn per_unit_label(&self, unit: &str, width: UnitWidth) -> String {
        let locale = self.locale_for(DataKind::Units);
        self.data
            .unit_pattern(locale, unit, width, PluralCategory::One)
            .map(|pattern| pattern.replace("{0}", "").trim().to_string())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| unit.to_string())
    }

    fn apply_sign(
        text: String,
        decimal: &FixedDecimal,
        display: SignDisplay,
        symbols: &NumberSymbols,
        is_currency: bool,
    ) -> String {
        let zero = decimal.is_zero();
        let negative = !zero && decimal.sign() == Sign::Negative;
        let plus = match display {
            SignDisplay::Always | SignDisplay::AccountingAlways => !negative,
            SignDisplay::ExceptZero | SignDisplay::AccountingExceptZero => !negative && !zero,
            _ => false,
        };
        let minus = negative && display != SignDisplay::Never;
        if minus && display.is_accounting() && is_currency {
            format!("({text})")
        } else if minus {
            format!("{}{text}", symbols.minus_sign)
        } else if plus {
            format!("{}{text}", symbols.plus_sign)
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale_data::BuiltinLocaleData;
    use crate::skeleton::parse_skeleton;

    fn format_in(locale: &str, value: &str, spec: &NumberFormatSpec) -> String {
        let data = BuiltinLocaleData::new();
        let resolved = ResolvedLocale::new(locale, "en", &data).expect("locale has data");
        let formatter = NumberFormatter::new(&data, &resolved, "USD");
        let operands: PluralOperands = value.parse().expect("valid decimal");
        formatter.format(&operands, spec)
    }

    fn skeleton(text: &str) -> NumberFormatSpec {
        let spec = parse_skeleton(text);
        assert!(spec.literal_tokens.is_empty(), "not a skeleton: {text}");
        spec
    }

    fn en(value: &str, skeleton_text: &str) -> String {
        format_in("en", value, &skeleton(skeleton_text))
    }

    #[test]
    fn test_default_format() {
        assert_eq!(en("1234.5678", ""), "1,234.568");
        assert_eq!(en("1.50", ""), "1.5");
        assert_eq!(en("-42", ""), "-42");
        assert_eq!(en("0", ""), "0");
    }

    #[test]
    fn test_percent_scales_by_hundred() {
        assert_eq!(en("0.1234", "percent .00"), "12.34%");
        assert_eq!(en("0.75", "percent"), "75%");
        assert_eq!(en("0.5", "%x100"), "50%");
        assert_eq!(format_in("de", "0.5", &NumberFormatSpec::percent()), "50\u{a0}%");
    }

    #[test]
    fn test_sign_display() {
        assert_eq!(en("-42", "sign-never"), "42");
        assert_eq!(en("5", "sign-always"), "+5");
        assert_eq!(en("0", "sign-except-zero"), "0");
        assert_eq!(en("-5", "currency/USD sign-accounting"), "($5.00)");
        assert_eq!(en("-5", "sign-accounting"), "-5");
    }

    #[test]
    fn test_currency() {
        assert_eq!(en("19.99", "currency/USD"), "$19.99");
        assert_eq!(en("25", "currency/EUR"), "€25.00");
        assert_eq!(en("1234.5", "currency/JPY"), "¥1,234");
        assert_eq!(en("5", "currency/CHF"), "CHF\u{a0}5.00");
        assert_eq!(en("1", "currency/USD unit-width-full-name"), "1.00 US dollars");
        assert_eq!(en("3", "currency/EUR unit-width-iso-code"), "EUR\u{a0}3.00");
        assert_eq!(format_in("de", "1234.5", &skeleton("currency/EUR")), "1.234,50\u{a0}€");
        assert_eq!(format_in("en", "7", &NumberFormatSpec::currency(None)), "$7.00");
    }

    #[test]
    fn test_fraction_and_significant_digits() {
        assert_eq!(en("1234.5", ".00"), "1,234.50");
        assert_eq!(en("0.012345", "@@"), "0.012");
        assert_eq!(en("5", "@@@"), "5.00");
        assert_eq!(en("1.23456", ".####/@@s"), "1.2");
        assert_eq!(en("1.23456", ".#/@@@r"), "1.23");
        assert_eq!(en("5", ".00/w"), "5");
        assert_eq!(en("5.5", ".00/w"), "5.50");
        assert_eq!(en("2.5", "precision-integer"), "2");
        assert_eq!(en("3.5", "precision-integer"), "4");
        assert_eq!(en("2.5", "precision-integer rounding-mode-half-up"), "3");
        assert_eq!(en("1.234", "precision-increment/0.05"), "1.25");
    }

    #[test]
    fn test_integer_width_and_grouping() {
        assert_eq!(en("42", "0000"), "0042");
        assert_eq!(en("12345", "integer-width/##00"), "2,345");
        assert_eq!(en("1234567", "group-off"), "1234567");
        assert_eq!(en("0.5", "integer-width/*"), ".5");
    }

    #[test]
    fn test_notations() {
        assert_eq!(en("1200", "scientific"), "1.2E3");
        assert_eq!(en("0.00012", "E00"), "1.2E-04");
        assert_eq!(en("12345", "engineering"), "12.345E3");
        assert_eq!(en("1234", "compact-short"), "1.2K");
        assert_eq!(en("1500000", "K"), "1.5M");
        assert_eq!(en("999999", "K"), "1M");
        assert_eq!(en("42", "K"), "42");
        assert_eq!(en("2000000", "compact-long"), "2 million");
        assert_eq!(format_in("de", "5000", &skeleton("compact-short")), "5.000");
    }

    #[test]
    fn test_units_and_ordinals() {
        assert_eq!(en("5", "measure-unit/length-kilometer"), "5 km");
        assert_eq!(en("1", "unit/kilometer unit-width-full-name"), "1 kilometer");
        assert_eq!(en("3", "unit/furlong"), "3 furlong");
        assert_eq!(en("60", "unit/kilometer per-measure-unit/hour"), "60 km/h");
        assert_eq!(en("1", "ordinal"), "1st");
        assert_eq!(en("22", "ordinal"), "22nd");
        assert_eq!(en("13", "ordinal"), "13th");
    }

    #[test]
    fn test_named_styles_and_patterns() {
        let integer = spec_for_style("integer").expect("style");
        assert_eq!(format_in("en", "19.99", &integer), "20");
        let pattern = spec_for_style("#,##0.00").expect("pattern");
        assert_eq!(format_in("en", "1234.5", &pattern), "1,234.50");
        let currency = spec_for_style("currency/eur").expect("currency");
        assert_eq!(format_in("en", "2", &currency), "€2.00");
        let literal = spec_for_style("#,##0 'pts'").expect("pattern");
        assert_eq!(format_in("en", "1500", &literal), "1,500 pts");
        assert!(spec_for_style("bogus").is_none());
    }

    #[test]
    fn test_ranges() {
        let data = BuiltinLocaleData::new();
        let resolved = ResolvedLocale::new("en", "en", &data).expect("locale has data");
        let formatter = NumberFormatter::new(&data, &resolved, "USD");
        let spec = NumberFormatSpec::default();
        let three = PluralOperands::from_i64(3);
        let five = PluralOperands::from_i64(5);
        assert_eq!(formatter.format_range(&three, &five, &spec), "3–5");
        assert_eq!(formatter.format_range(&five, &five, &spec), "~5");
        let tagged = parse_skeleton("percent pts");
        assert_eq!(formatter.format_range(&three, &five, &tagged), "300%–500% pts");
    }

    #[test]
    fn test_unknown_skeleton_tokens_follow_the_number() {
        assert_eq!(format_in("en", "0.5", &parse_skeleton("percent bogus-token")), "50% bogus-token");
        assert_eq!(format_in("en", "-3", &parse_skeleton("+! what ever")), "-3 what ever");
    }
}
