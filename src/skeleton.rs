//! ICU number skeletons and decimal patterns.
//!
//! Both syntaxes compile into the same [`NumberFormatSpec`]. Skeletons are
//! space-separated stems, each optionally followed by `/`-separated options,
//! in either verbose (`currency/EUR unit-width-narrow`) or concise
//! (`%x100 .00 +!`) form.

use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, one_of},
    combinator::{all_consuming, map, opt, value},
    multi::many0_count,
    sequence::{pair, preceded, tuple},
};
use tinystr::TinyAsciiStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Standard,
    Scientific,
    Engineering,
    CompactShort,
    CompactLong,
}

impl Notation {
    pub fn is_compact(self) -> bool {
        matches!(self, Notation::CompactShort | Notation::CompactLong)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    #[default]
    Auto,
    Always,
    Never,
    ExceptZero,
    Negative,
    Accounting,
    AccountingAlways,
    AccountingExceptZero,
    AccountingNegative,
}

impl SignDisplay {
    pub fn is_accounting(self) -> bool {
        matches!(
            self,
            SignDisplay::Accounting
                | SignDisplay::AccountingAlways
                | SignDisplay::AccountingExceptZero
                | SignDisplay::AccountingNegative
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grouping {
    Off,
    Min2,
    #[default]
    Auto,
    Always,
    OnAligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitWidth {
    Narrow,
    #[default]
    Short,
    FullName,
    IsoCode,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NumberUnit {
    #[default]
    None,
    Percent,
    Permille,
    /// `None` picks the locale's default currency.
    Currency(Option<TinyAsciiStr<3>>),
    Measure(String),
}

/// Where the precision settings came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecisionSource {
    #[default]
    Default,
    Pattern,
    Skeleton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    Ceiling,
    Floor,
    Down,
    Up,
    #[default]
    HalfEven,
    HalfDown,
    HalfUp,
    Unnecessary,
}

/// How fraction and significant digit limits combine when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPriority {
    /// The limit keeping more digits wins.
    Relaxed,
    /// The limit keeping fewer digits wins.
    #[default]
    Strict,
}

/// A minimum and optional maximum digit count; `max: None` is unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRange {
    pub min: u16,
    pub max: Option<u16>,
}

impl DigitRange {
    pub fn exactly(count: u16) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    pub fn between(min: u16, max: u16) -> Self {
        Self {
            min,
            max: Some(max.max(min)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatSpec {
    pub notation: Notation,
    /// Minimum exponent digits for scientific and engineering notation.
    pub exponent_digits: u16,
    pub exponent_sign: SignDisplay,
    pub sign_display: SignDisplay,
    pub grouping: Grouping,
    pub min_integer_digits: u16,
    /// Higher integer digits are truncated away.
    pub max_integer_digits: Option<u16>,
    pub fraction_digits: Option<DigitRange>,
    pub significant_digits: Option<DigitRange>,
    pub rounding_priority: RoundingPriority,
    /// Drop the fraction entirely when the rounded value is whole.
    pub hide_whole_fraction: bool,
    pub rounding_increment: Option<f64>,
    /// Fraction digits follow the currency's minor unit.
    pub currency_precision: bool,
    pub unlimited_precision: bool,
    pub rounding_mode: RoundingMode,
    pub scale: Option<f64>,
    pub unit: NumberUnit,
    pub per_unit: Option<String>,
    pub unit_width: UnitWidth,
    pub decimal_always: bool,
    pub ordinal: bool,
    /// Literal affixes from decimal patterns.
    pub prefix: String,
    pub suffix: String,
    /// Skeleton tokens that were not understood, written after the number.
    pub literal_tokens: Vec<String>,
    pub precision_source: PrecisionSource,
}

impl Default for NumberFormatSpec {
    fn default() -> Self {
        Self {
            notation: Notation::default(),
            exponent_digits: 1,
            exponent_sign: SignDisplay::default(),
            sign_display: SignDisplay::default(),
            grouping: Grouping::default(),
            min_integer_digits: 1,
            max_integer_digits: None,
            fraction_digits: None,
            significant_digits: None,
            rounding_priority: RoundingPriority::default(),
            hide_whole_fraction: false,
            rounding_increment: None,
            currency_precision: false,
            unlimited_precision: false,
            rounding_mode: RoundingMode::default(),
            scale: None,
            unit: NumberUnit::default(),
            per_unit: None,
            unit_width: UnitWidth::default(),
            decimal_always: false,
            ordinal: false,
            prefix: String::new(),
            suffix: String::new(),
            literal_tokens: Vec::new(),
            precision_source: PrecisionSource::default(),
        }
    }
}

impl NumberFormatSpec {
    pub fn integer() -> Self {
        Self {
            fraction_digits: Some(DigitRange::exactly(0)),
            precision_source: PrecisionSource::Skeleton,
            ..Self::default()
        }
    }

    pub fn percent() -> Self {
        Self {
            unit: NumberUnit::Percent,
            ..Self::default()
        }
    }

    pub fn currency(code: Option<TinyAsciiStr<3>>) -> Self {
        Self {
            unit: NumberUnit::Currency(code),
            ..Self::default()
        }
    }

    fn has_explicit_precision(&self) -> bool {
        self.fraction_digits.is_some()
            || self.significant_digits.is_some()
            || self.rounding_increment.is_some()
            || self.currency_precision
            || self.unlimited_precision
    }
}

pub fn parse_currency_code(code: &str) -> Option<TinyAsciiStr<3>> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    TinyAsciiStr::<3>::from_str(code)
        .ok()
        .map(|code| code.to_ascii_uppercase())
}

fn count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn hash_run(input: &str) -> IResult<&str, usize> {
    many0_count(char('#'))(input)
}

fn zero_run(input: &str) -> IResult<&str, usize> {
    many0_count(char('0'))(input)
}

/// `.00##`, `.0*`, `.0+`
fn fraction_stem(input: &str) -> IResult<&str, DigitRange> {
    map(
        preceded(char('.'), tuple((zero_run, hash_run, opt(one_of("*+"))))),
        |(zeros, hashes, unlimited)| DigitRange {
            min: count(zeros),
            max: match unlimited {
                Some(_) => None,
                None => Some(count(zeros + hashes)),
            },
        },
    )(input)
}

/// `@@#`, `@@*`, `@@+`
fn significant_stem(input: &str) -> IResult<&str, DigitRange> {
    map(
        tuple((many0_count(char('@')), hash_run, opt(one_of("*+")))),
        |(ats, hashes, unlimited)| DigitRange {
            min: count(ats),
            max: match unlimited {
                Some(_) => None,
                None => Some(count(ats + hashes)),
            },
        },
    )(input)
}

/// `E0`, `EE00`, `E+!0`
fn exponent_stem(input: &str) -> IResult<&str, (Notation, Option<SignDisplay>, usize)> {
    tuple((
        alt((
            value(Notation::Engineering, tag("EE")),
            value(Notation::Scientific, tag("E")),
        )),
        opt(alt((
            value(SignDisplay::Always, tag("+!")),
            value(SignDisplay::ExceptZero, tag("+?")),
        ))),
        map(pair(char('0'), zero_run), |(_, rest)| rest + 1),
    ))(input)
}

/// `+00`, `*00`, `##00`
fn integer_width_option(input: &str) -> IResult<&str, (u16, Option<u16>)> {
    alt((
        map(preceded(one_of("*+"), zero_run), |zeros| (count(zeros), None)),
        map(pair(hash_run, zero_run), |(hashes, zeros)| {
            (count(zeros), Some(count(hashes + zeros)))
        }),
    ))(input)
}

fn full<'a, T>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
    input: &'a str,
) -> Option<T> {
    all_consuming(parser)(input).ok().map(|(_, parsed)| parsed)
}

fn sign_token(stem: &str) -> Option<SignDisplay> {
    let sign = match stem {
        "sign-auto" => SignDisplay::Auto,
        "sign-always" | "+!" => SignDisplay::Always,
        "sign-never" | "+_" => SignDisplay::Never,
        "sign-except-zero" | "+?" => SignDisplay::ExceptZero,
        "sign-negative" | "+-" => SignDisplay::Negative,
        "sign-accounting" | "()" => SignDisplay::Accounting,
        "sign-accounting-always" | "()!" => SignDisplay::AccountingAlways,
        "sign-accounting-except-zero" | "()?" => SignDisplay::AccountingExceptZero,
        "sign-accounting-negative" | "()-" => SignDisplay::AccountingNegative,
        _ => return None,
    };
    Some(sign)
}

fn grouping_token(stem: &str) -> Option<Grouping> {
    let grouping = match stem {
        "group-off" | ",_" => Grouping::Off,
        "group-min2" | ",?" => Grouping::Min2,
        "group-auto" => Grouping::Auto,
        "group-on-aligned" => Grouping::OnAligned,
        "group-thousands" | ",!" => Grouping::Always,
        _ => return None,
    };
    Some(grouping)
}

fn rounding_token(stem: &str) -> Option<RoundingMode> {
    let mode = match stem.strip_prefix("rounding-mode-")? {
        "ceiling" => RoundingMode::Ceiling,
        "floor" => RoundingMode::Floor,
        "down" => RoundingMode::Down,
        "up" => RoundingMode::Up,
        "half-even" => RoundingMode::HalfEven,
        "half-down" => RoundingMode::HalfDown,
        "half-up" => RoundingMode::HalfUp,
        "unnecessary" => RoundingMode::Unnecessary,
        _ => return None,
    };
    Some(mode)
}

fn unit_width_token(stem: &str) -> Option<UnitWidth> {
    let width = match stem.strip_prefix("unit-width-")? {
        "narrow" => UnitWidth::Narrow,
        "short" => UnitWidth::Short,
        "full-name" => UnitWidth::FullName,
        "iso-code" => UnitWidth::IsoCode,
        "hidden" => UnitWidth::Hidden,
        _ => return None,
    };
    Some(width)
}

/// Strips the CLDR unit type, so `length-kilometer` becomes `kilometer`.
fn measure_unit_id(id: &str) -> String {
    const TYPES: &[&str] = &[
        "acceleration", "angle", "area", "concentr", "consumption", "digital", "duration",
        "electric", "energy", "force", "frequency", "graphics", "length", "light", "mass", "power",
        "pressure", "speed", "temperature", "torque", "volume",
    ];
    let id = id.to_ascii_lowercase();
    match id.split_once('-') {
        Some((kind, rest)) if TYPES.contains(&kind) && !rest.is_empty() => rest.to_string(),
        _ => id,
    }
}

fn apply_fraction_options(spec: &mut NumberFormatSpec, options: &[&str]) -> Option<()> {
    for option in options {
        match *option {
            "w" => spec.hide_whole_fraction = true,
            _ => {
                let (rest, priority) = match option.strip_suffix('r') {
                    Some(rest) => (rest, RoundingPriority::Relaxed),
                    None => match option.strip_suffix('s') {
                        Some(rest) => (rest, RoundingPriority::Strict),
                        None if option.ends_with('*') => (*option, RoundingPriority::Relaxed),
                        None => (*option, RoundingPriority::Strict),
                    },
                };
                if !rest.starts_with('@') {
                    return None;
                }
                spec.significant_digits = Some(full(significant_stem, rest)?);
                spec.rounding_priority = priority;
            }
        }
    }
    Some(())
}

/// Applies one `stem/option/...` token; `None` when it is not understood.
fn apply_token(spec: &mut NumberFormatSpec, token: &str) -> Option<()> {
    let mut parts = token.split('/');
    let stem = parts.next()?;
    let options: Vec<&str> = parts.collect();
    let no_options = options.is_empty();

    if let Some(sign) = sign_token(stem).filter(|_| no_options) {
        spec.sign_display = sign;
        return Some(());
    }
    if let Some(grouping) = grouping_token(stem).filter(|_| no_options) {
        spec.grouping = grouping;
        return Some(());
    }
    if let Some(mode) = rounding_token(stem).filter(|_| no_options) {
        spec.rounding_mode = mode;
        return Some(());
    }
    if let Some(width) = unit_width_token(stem).filter(|_| no_options) {
        spec.unit_width = width;
        return Some(());
    }
    if stem.starts_with('.') {
        spec.fraction_digits = Some(full(fraction_stem, stem)?);
        return apply_fraction_options(spec, &options);
    }
    if stem.starts_with('@') && no_options {
        spec.significant_digits = Some(full(significant_stem, stem)?);
        return Some(());
    }
    if stem.starts_with('E') && no_options {
        let (notation, sign, digits) = full(exponent_stem, stem)?;
        spec.notation = notation;
        spec.exponent_sign = sign.unwrap_or_default();
        spec.exponent_digits = count(digits);
        return Some(());
    }
    if !stem.is_empty() && stem.bytes().all(|b| b == b'0') && no_options {
        spec.min_integer_digits = count(stem.len());
        return Some(());
    }

    match (stem, options.as_slice()) {
        ("notation-simple", []) => spec.notation = Notation::Standard,
        ("compact-short" | "K", []) => spec.notation = Notation::CompactShort,
        ("compact-long" | "KK", []) => spec.notation = Notation::CompactLong,
        ("scientific" | "engineering", options) => {
            spec.notation = if stem == "scientific" {
                Notation::Scientific
            } else {
                Notation::Engineering
            };
            for option in options {
                if let Some(digits) = option.strip_prefix("*e").or_else(|| option.strip_prefix("+e")) {
                    if !digits.bytes().all(|b| b == b'e') {
                        return None;
                    }
                    spec.exponent_digits = count(digits.len() + 1);
                } else {
                    spec.exponent_sign = sign_token(option)?;
                }
            }
        }
        ("percent" | "%", []) => spec.unit = NumberUnit::Percent,
        ("%x100", []) => {
            spec.unit = NumberUnit::Percent;
            spec.scale = Some(100.0);
        }
        ("permille", []) => spec.unit = NumberUnit::Permille,
        ("base-unit", []) => spec.unit = NumberUnit::None,
        ("currency", [code]) => spec.unit = NumberUnit::Currency(Some(parse_currency_code(code)?)),
        ("measure-unit" | "unit", [id]) if !id.is_empty() => {
            spec.unit = NumberUnit::Measure(measure_unit_id(id));
        }
        ("per-measure-unit", [id]) if !id.is_empty() => spec.per_unit = Some(measure_unit_id(id)),
        ("scale", [factor]) => {
            let factor = factor.parse::<f64>().ok().filter(|f| f.is_finite())?;
            spec.scale = Some(factor);
        }
        ("precision-integer", options) => {
            spec.fraction_digits = Some(DigitRange::exactly(0));
            apply_fraction_options(spec, options)?;
        }
        ("precision-unlimited", []) => spec.unlimited_precision = true,
        ("precision-currency-standard" | "precision-currency-cash", []) => {
            spec.currency_precision = true;
        }
        ("precision-increment", [increment]) => {
            let increment = increment.parse::<f64>().ok().filter(|f| *f > 0.0)?;
            spec.rounding_increment = Some(increment);
        }
        ("integer-width", [width]) => {
            let (min, max) = full(integer_width_option, width)?;
            spec.min_integer_digits = min;
            spec.max_integer_digits = max;
        }
        ("integer-width-trunc", []) => {
            spec.min_integer_digits = 0;
            spec.max_integer_digits = Some(0);
        }
        ("decimal-auto", []) => spec.decimal_always = false,
        ("decimal-always", []) => spec.decimal_always = true,
        ("latin", []) => {}
        ("numbering-system", [system]) if system.eq_ignore_ascii_case("latn") => {}
        ("ordinal", []) => spec.ordinal = true,
        _ => return None,
    }
    Some(())
}

/// Parses the body of a `::` number skeleton.
///
/// An empty body is the locale default format. Tokens that are not
/// understood leave the spec untouched and are kept in
/// [`NumberFormatSpec::literal_tokens`].
pub fn parse_skeleton(text: &str) -> NumberFormatSpec {
    let mut spec = NumberFormatSpec::default();
    for token in text.split_whitespace() {
        let mut applied = spec.clone();
        if apply_token(&mut applied, token).is_some() {
            spec = applied;
        } else {
            tracing::warn!(skeleton = text, token, "unrecognized number skeleton token");
            spec.literal_tokens.push(token.to_string());
        }
    }
    if spec.has_explicit_precision() {
        spec.precision_source = PrecisionSource::Skeleton;
    }
    spec
}

/// Parses an ICU decimal pattern such as `#,##0.00`, `0.0%` or `¤#,##0.00`.
///
/// Only the positive subpattern is read. Returns `None` when the text has
/// no digit placeholders.
pub fn parse_decimal_pattern(pattern: &str) -> Option<NumberFormatSpec> {
    let positive = pattern.split(';').next().unwrap_or(pattern);
    let mut spec = NumberFormatSpec {
        grouping: Grouping::Off,
        precision_source: PrecisionSource::Pattern,
        ..NumberFormatSpec::default()
    };
    let mut prefix = String::new();
    let mut suffix = String::new();
    let mut body = String::new();
    let mut in_quote = false;
    let mut chars = positive.chars().peekable();
    while let Some(c) = chars.next() {
        let seen_body = !body.is_empty();
        let in_suffix = !suffix.is_empty();
        let affix = if seen_body { &mut suffix } else { &mut prefix };
        if in_quote {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    affix.push('\'');
                } else {
                    in_quote = false;
                }
            } else {
                affix.push(c);
            }
            continue;
        }
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    affix.push('\'');
                } else {
                    in_quote = true;
                }
            }
            '#' | '0'..='9' | '@' | ',' | '.' if !in_suffix => body.push(c),
            'E' if seen_body && !in_suffix => body.push(c),
            '+' if body.ends_with('E') => body.push(c),
            '%' => spec.unit = NumberUnit::Percent,
            '‰' => spec.unit = NumberUnit::Permille,
            '¤' => {
                let mut signs = 1;
                while chars.peek() == Some(&'¤') {
                    chars.next();
                    signs += 1;
                }
                spec.unit = NumberUnit::Currency(None);
                spec.unit_width = match signs {
                    1 => UnitWidth::Short,
                    2 => UnitWidth::IsoCode,
                    3 => UnitWidth::FullName,
                    _ => UnitWidth::Narrow,
                };
            }
            _ => affix.push(c),
        }
    }
    if !body.contains(['#', '0', '@']) {
        return None;
    }

    let (mantissa, exponent) = match body.split_once('E') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (body.as_str(), None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if integer.contains(',') {
        spec.grouping = Grouping::Auto;
    }
    if integer.contains('@') {
        let ats = integer.matches('@').count();
        let hashes = integer.chars().skip_while(|c| *c != '@').filter(|c| *c == '#').count();
        spec.significant_digits = Some(DigitRange::between(count(ats), count(ats + hashes)));
    } else {
        spec.min_integer_digits = count(integer.matches('0').count());
        let zeros = fraction.matches('0').count();
        let hashes = fraction.matches('#').count();
        spec.fraction_digits = Some(DigitRange::between(count(zeros), count(zeros + hashes)));
        spec.decimal_always = mantissa.ends_with('.');
    }
    if let Some(exponent) = exponent {
        let (sign, digits) = match exponent.strip_prefix('+') {
            Some(digits) => (SignDisplay::Always, digits),
            None => (SignDisplay::Auto, exponent),
        };
        let integer_places = integer.chars().filter(|c| matches!(c, '#' | '0')).count();
        spec.notation = if integer.contains('#') && integer_places > 1 {
            Notation::Engineering
        } else {
            Notation::Scientific
        };
        spec.exponent_sign = sign;
        spec.exponent_digits = count(digits.matches('0').count().max(1));
    }
    spec.prefix = prefix;
    spec.suffix = suffix;
    Some(spec)
}
