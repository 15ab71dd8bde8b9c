//! Leaf helpers used by the evaluator: HTML escaping, flattening of nested
//! arguments, and ISO-8601 duration parsing.

use nom::{
    IResult,
    character::complete::{digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    multi::{many0, many1},
    sequence::{pair, preceded},
};

use crate::types::{Arguments, Value};

/// Escapes `& < > " '` for HTML. Numeric references and common named ones
/// (`&amp;`, `&#39;`, `&#x27;`) are left alone so values are never escaped twice.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (index, c) in text.char_indices() {
        match c {
            '&' if starts_with_entity(&text[index..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Named references treated as already escaped. Anything else spelled
/// `&name;` is escaped like plain text.
const NAMED_ENTITIES: &[&str] = &[
    "amp", "lt", "gt", "quot", "apos", "nbsp", "copy", "reg", "trade", "hellip", "mdash", "ndash",
    "lsquo", "rsquo", "ldquo", "rdquo", "laquo", "raquo", "bull", "middot", "deg", "euro", "pound",
    "yen", "cent", "sect", "para", "times", "divide", "plusmn", "shy", "thinsp", "ensp", "emsp",
];

/// Whether `text` (starting at `&`) begins with a known named or a numeric character reference.
fn starts_with_entity(text: &str) -> bool {
    let Some(end) = text.find(';') else {
        return false;
    };
    let body = &text[1..end];
    if let Some(numeric) = body.strip_prefix('#') {
        return match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => !numeric.is_empty() && numeric.bytes().all(|b| b.is_ascii_digit()),
        };
    }
    NAMED_ENTITIES.contains(&body)
}

/// Flattens nested [`Value::Map`] arguments into keys joined by `separator`,
/// so `{user: {name: "X"}}` becomes `user__name`. Non-map values are kept as is.
///
/// Uses an explicit worklist, so arbitrarily deep input cannot exhaust the stack.
pub fn flatten_arguments(arguments: &Arguments, separator: &str) -> Arguments {
    let mut flat = Arguments::new();
    let mut pending: Vec<(String, &Value)> = arguments
        .iter()
        .map(|(key, value)| (key.clone(), value))
        .collect();
    while let Some((key, value)) = pending.pop() {
        match value {
            Value::Map(entries) => pending.extend(
                entries
                    .iter()
                    .map(|(child, value)| (format!("{key}{separator}{child}"), value)),
            ),
            value => flat.insert(key, value.clone()),
        }
    }
    flat
}

/// A duration split into calendar and clock units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DurationParts {
    pub negative: bool,
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl DurationParts {
    /// Splits a second count into days, hours, minutes and seconds.
    pub fn from_seconds(total: f64) -> Self {
        if !total.is_finite() {
            return Self::default();
        }
        let mut rest = total.abs();
        let days = (rest / 86_400.0).floor();
        rest -= days * 86_400.0;
        let hours = (rest / 3_600.0).floor();
        rest -= hours * 3_600.0;
        let minutes = (rest / 60.0).floor();
        rest -= minutes * 60.0;
        Self {
            negative: total < 0.0,
            days,
            hours,
            minutes,
            seconds: rest,
            ..Self::default()
        }
    }

    /// Approximate length in seconds; years are 365 days and months 30.
    pub fn total_seconds(&self) -> f64 {
        let total = self.years * 31_536_000.0
            + self.months * 2_592_000.0
            + self.weeks * 604_800.0
            + self.days * 86_400.0
            + self.hours * 3_600.0
            + self.minutes * 60.0
            + self.seconds;
        if self.negative { -total } else { total }
    }

    /// Unit ids and amounts, largest first.
    pub fn units(&self) -> [(&'static str, f64); 7] {
        [
            ("year", self.years),
            ("month", self.months),
            ("week", self.weeks),
            ("day", self.days),
            ("hour", self.hours),
            ("minute", self.minutes),
            ("second", self.seconds),
        ]
    }
}

fn amount(input: &str) -> IResult<&str, f64> {
    let (rest, text) = recognize(pair(digit1, opt(pair(one_of(".,"), digit1))))(input)?;
    let value = text.replace(',', ".").parse::<f64>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
    })?;
    Ok((rest, value))
}

fn iso_duration(input: &str) -> IResult<&str, (bool, Vec<(f64, char)>, Option<Vec<(f64, char)>>)> {
    let (input, sign) = opt(one_of("+-"))(input)?;
    let (input, _) = one_of("Pp")(input)?;
    let (input, date) = many0(pair(amount, one_of("YMWD")))(input)?;
    let (input, time) = opt(preceded(one_of("Tt"), many1(pair(amount, one_of("HMS")))))(input)?;
    Ok((input, (sign == Some('-'), date, time)))
}

/// Parses ISO-8601 durations such as `P1DT2H30M`, `PT45S` or `-P2W`.
///
/// Designators must appear in order and at most once; a decimal comma is accepted.
pub fn parse_iso_duration(text: &str) -> Option<DurationParts> {
    let (_, (negative, date, time)) = all_consuming(iso_duration)(text.trim()).ok()?;
    if date.is_empty() && time.is_none() {
        return None;
    }
    let mut parts = DurationParts {
        negative,
        ..DurationParts::default()
    };
    let mut last = 0;
    let components = date
        .into_iter()
        .map(|(value, unit)| (value, unit, false))
        .chain(time.into_iter().flatten().map(|(value, unit)| (value, unit, true)));
    for (value, unit, in_time) in components {
        let (rank, slot) = match (unit, in_time) {
            ('Y', false) => (1, &mut parts.years),
            ('M', false) => (2, &mut parts.months),
            ('W', false) => (3, &mut parts.weeks),
            ('D', false) => (4, &mut parts.days),
            ('H', true) => (5, &mut parts.hours),
            ('M', true) => (6, &mut parts.minutes),
            ('S', true) => (7, &mut parts.seconds),
            _ => return None,
        };
        if rank <= last {
            return None;
        }
        last = rank;
        *slot = value;
    }
    Some(parts)
}
