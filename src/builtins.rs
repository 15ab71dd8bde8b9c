//! The built-in typed formatters other than `date`/`time`: `number`,
//! `numberRange`, `list`, `relativeTime` and `duration`.
//!
//! Every formatter degrades to the argument's plain string when the value
//! or the style cannot be used.

use crate::extensions::{DurationParts, parse_iso_duration};
use crate::locale::ResolvedLocale;
use crate::locale_data::{DataKind, ListType, LocaleData, RelativeField, Width, fill_pattern};
use crate::number::{NumberFormatter, spec_for_style};
use crate::operands::{PluralOperands, category_of};
use crate::skeleton::{NumberFormatSpec, UnitWidth};
use crate::types::{FormatStyle, PluralCategory, Value};

/// The number spec a `number` or `numberRange` style asks for, or `None`
/// when the style is not understood.
pub fn number_spec(style: Option<&FormatStyle>) -> Option<NumberFormatSpec> {
    match style {
        None => Some(NumberFormatSpec::default()),
        Some(FormatStyle::NumberSkeleton(spec)) => Some(spec.clone()),
        Some(FormatStyle::Text(text)) if text.trim().is_empty() => Some(NumberFormatSpec::default()),
        Some(FormatStyle::Text(text)) => spec_for_style(text),
        Some(FormatStyle::DateSkeleton(_)) => None,
    }
}

#[derive(Clone, Copy)]
pub struct Builtins<'a> {
    data: &'a dyn LocaleData,
    locale: &'a ResolvedLocale,
    numbers: NumberFormatter<'a>,
}

impl<'a> Builtins<'a> {
    pub fn new(data: &'a dyn LocaleData, locale: &'a ResolvedLocale, numbers: NumberFormatter<'a>) -> Self {
        Self {
            data,
            locale,
            numbers,
        }
    }

    fn locale_for(&self, kind: DataKind) -> &'a str {
        self.locale.for_kind(self.data, kind)
    }

    pub fn number(&self, value: &Value, style: Option<&FormatStyle>) -> String {
        let Some(operands) = PluralOperands::from_numeric(value) else {
            return value.to_plain_string();
        };
        match number_spec(style) {
            Some(spec) => self.numbers.format(&operands, &spec),
            None => {
                tracing::warn!(?style, "unusable number style, rendering plain value");
                value.to_plain_string()
            }
        }
    }

    /// `{r, numberRange}` over a two-element list.
    pub fn number_range(&self, value: &Value, style: Option<&FormatStyle>) -> String {
        let bounds = match value {
            Value::List(items) if items.len() == 2 => {
                PluralOperands::from_numeric(&items[0]).zip(PluralOperands::from_numeric(&items[1]))
            }
            _ => None,
        };
        match (bounds, number_spec(style)) {
            (Some((start, end)), Some(spec)) => self.numbers.format_range(&start, &end, &spec),
            _ => value.to_plain_string(),
        }
    }

    /// `{xs, list [, type] [width]}`; a scalar is a one-item list.
    pub fn list(&self, value: &Value, style: Option<&str>) -> String {
        let mut list_type = ListType::default();
        let mut width = Width::default();
        for word in style.unwrap_or_default().split_whitespace() {
            let word = word.to_ascii_lowercase();
            if let Some(parsed) = ListType::parse(&word) {
                list_type = parsed;
            } else if let Some(parsed) = Width::parse(&word) {
                width = parsed;
            } else {
                tracing::warn!(word = %word, "unknown list style word");
            }
        }
        let items: Vec<String> = match value {
            Value::List(items) => items.iter().map(Value::to_plain_string).collect(),
            Value::Null => Vec::new(),
            value => vec![value.to_plain_string()],
        };
        self.join(&items, list_type, width)
    }

    /// Joins items with the locale's pair, start, middle and end patterns.
    fn join(&self, items: &[String], list_type: ListType, width: Width) -> String {
        let locale = self.locale_for(DataKind::Lists);
        let patterns = self
            .data
            .list_patterns(locale, list_type, width)
            .or_else(|| self.data.list_patterns(locale, list_type, Width::Long));
        let Some(patterns) = patterns else {
            tracing::warn!(locale, ?list_type, "no list patterns, joining with commas");
            return items.join(", ");
        };
        match items {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => fill_pattern(&patterns.pair, &[first.as_str(), second.as_str()]),
            [first, middle @ .., last] => {
                let Some((before_last, middle)) = middle.split_last() else {
                    return String::new();
                };
                let mut joined = fill_pattern(&patterns.end, &[before_last.as_str(), last.as_str()]);
                for item in middle.iter().rev() {
                    joined = fill_pattern(&patterns.middle, &[item.as_str(), joined.as_str()]);
                }
                fill_pattern(&patterns.start, &[first.as_str(), joined.as_str()])
            }
        }
    }

    /// `{n, relativeTime, field [width] [auto]}`; negative offsets are in the past.
    pub fn relative_time(&self, value: &Value, style: Option<&str>) -> String {
        let Some(operands) = PluralOperands::from_numeric(value) else {
            return value.to_plain_string();
        };
        let mut field = None;
        let mut width = Width::default();
        let mut auto = false;
        for word in style.unwrap_or_default().split_whitespace() {
            if word.eq_ignore_ascii_case("auto") {
                auto = true;
            } else if let Some(parsed) = Width::parse(&word.to_ascii_lowercase()) {
                width = parsed;
            } else if let Some(parsed) = RelativeField::parse(word) {
                field = Some(parsed);
            } else {
                tracing::warn!(word, "unknown relativeTime style word");
            }
        }
        let Some(field) = field else {
            tracing::warn!(?style, "relativeTime without a field, rendering plain value");
            return value.to_plain_string();
        };

        let locale = self.locale_for(DataKind::RelativeTime);
        if auto && operands.v == 0 {
            let offset = i64::try_from(operands.i).ok().map(|i| if operands.is_negative { -i } else { i });
            let literal = offset.and_then(|offset| {
                self.data
                    .relative_time_literal(locale, field, width, offset)
                    .or_else(|| self.data.relative_time_literal(locale, field, Width::Long, offset))
            });
            if let Some(literal) = literal {
                return literal;
            }
        }

        let future = !operands.is_negative;
        let mut magnitude = operands.clone();
        magnitude.is_negative = false;
        let category = category_of(self.data, self.locale_for(DataKind::Plurals), &magnitude, false);
        let number = self.numbers.format_default(&magnitude);
        let pattern = [(width, category), (Width::Long, category)]
            .into_iter()
            .chain([width, Width::Long].map(|w| (w, PluralCategory::Other)))
            .find_map(|(w, c)| self.data.relative_time_pattern(locale, field, w, future, c));
        match pattern {
            Some(pattern) => fill_pattern(&pattern, &[&number]),
            None => {
                tracing::warn!(locale, ?field, "no relative-time pattern, rendering plain number");
                number
            }
        }
    }

    /// `{d, duration [, long|short|narrow|timer]}` over seconds or ISO-8601 text.
    pub fn duration(&self, value: &Value, style: Option<&str>) -> String {
        let parts = match value {
            Value::Str(text) => parse_iso_duration(text)
                .or_else(|| text.trim().parse::<f64>().ok().map(DurationParts::from_seconds)),
            value => PluralOperands::from_numeric(value)
                .map(|seconds| DurationParts::from_seconds(seconds.as_f64())),
        };
        let Some(parts) = parts else {
            return value.to_plain_string();
        };
        let style = style.map(str::trim).unwrap_or("timer").to_ascii_lowercase();
        let (unit_width, list_width) = match style.as_str() {
            "long" => (UnitWidth::FullName, Width::Long),
            "short" => (UnitWidth::Short, Width::Short),
            "narrow" => (UnitWidth::Narrow, Width::Narrow),
            "timer" | "" => return self.timer(&parts),
            other => {
                tracing::warn!(style = other, "unknown duration style, using timer");
                return self.timer(&parts);
            }
        };

        let mut pieces: Vec<String> = parts
            .units()
            .into_iter()
            .filter(|(_, amount)| *amount != 0.0)
            .map(|(unit, amount)| self.unit_amount(unit, amount, unit_width))
            .collect();
        if pieces.is_empty() {
            pieces.push(self.unit_amount("second", 0.0, unit_width));
        }
        let joined = self.join(&pieces, ListType::Unit, list_width);
        if parts.negative {
            let minus = self.data.number_symbols(self.locale_for(DataKind::Numbers)).minus_sign;
            format!("{minus}{joined}")
        } else {
            joined
        }
    }

    fn unit_amount(&self, unit: &str, amount: f64, width: UnitWidth) -> String {
        let operands = PluralOperands::from_f64(amount);
        let number = self.numbers.format_default(&operands);
        let category = category_of(self.data, self.locale_for(DataKind::Plurals), &operands, false);
        match self
            .data
            .unit_pattern(self.locale_for(DataKind::Units), unit, width, category)
        {
            Some(pattern) => fill_pattern(&pattern, &[&number]),
            None => format!("{number} {unit}"),
        }
    }

    /// `h:mm:ss`, with days folded into hours and fractional seconds dropped.
    fn timer(&self, parts: &DurationParts) -> String {
        let total = parts.total_seconds().abs().trunc() as u64;
        let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
        let sign = if parts.negative && total > 0 { "-" } else { "" };
        let text = format!("{sign}{hours}:{minutes:02}:{seconds:02}");
        let digits = self.data.digits(self.locale_for(DataKind::Numbers));
        text.chars()
            .map(|c| c.to_digit(10).map_or(c, |d| digits[d as usize]))
            .collect()
    }
}
