//! Date and time rendering from CLDR patterns.
//!
//! Arguments carry no time zone; every value is treated as UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::locale::ResolvedLocale;
use crate::locale_data::{DataKind, DateTimeStyle, LATIN_DIGITS, LocaleData, NameWidth, fill_pattern};
use crate::types::{FormatStyle, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    Date,
    Time,
    DateTime,
}

impl DateKind {
    pub fn from_formatter(name: &str) -> Option<Self> {
        match name {
            "date" => Some(DateKind::Date),
            "time" => Some(DateKind::Time),
            "datetime" => Some(DateKind::DateTime),
            _ => None,
        }
    }
}

/// Reads a date argument: a [`Value::DateTime`], epoch milliseconds, or
/// ISO-8601 / RFC 3339 text.
pub fn parse_date_argument(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::DateTime(value) => Some(*value),
        Value::Int(millis) => from_epoch_millis(*millis),
        Value::Float(millis) if millis.is_finite() => from_epoch_millis(millis.trunc() as i64),
        Value::Str(text) => parse_date_text(text.trim()),
        _ => None,
    }
}

fn from_epoch_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|value| value.naive_utc())
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    if let Some(value) = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(value);
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_time(chrono::NaiveTime::MIN));
    }
    text.parse::<i64>().ok().and_then(from_epoch_millis)
}

fn name_width(count: usize) -> NameWidth {
    match count {
        4 => NameWidth::Wide,
        5 => NameWidth::Narrow,
        _ => NameWidth::Abbreviated,
    }
}

fn padded(value: impl std::fmt::Display, width: usize) -> String {
    format!("{value:0>width$}")
}

/// Formats dates and times for one resolved locale.
#[derive(Clone, Copy)]
pub struct DateFormatter<'a> {
    data: &'a dyn LocaleData,
    locale: &'a ResolvedLocale,
}

impl<'a> DateFormatter<'a> {
    pub fn new(data: &'a dyn LocaleData, locale: &'a ResolvedLocale) -> Self {
        Self { data, locale }
    }

    fn dates_locale(&self) -> &'a str {
        self.locale.for_kind(self.data, DataKind::Dates)
    }

    /// Formats `value` for a `date`, `time` or `datetime` placeholder.
    ///
    /// The style is a width keyword, a CLDR pattern, or a `::` skeleton;
    /// without one the medium style is used.
    pub fn format(&self, value: &NaiveDateTime, kind: DateKind, style: Option<&FormatStyle>) -> String {
        let pattern = match style {
            None => self.style_pattern(kind, DateTimeStyle::Medium),
            Some(FormatStyle::DateSkeleton(skeleton)) => Some(self.skeleton_pattern(skeleton)),
            Some(style) => {
                let text = match style {
                    FormatStyle::Text(text) => text.as_str(),
                    _ => "",
                };
                match DateTimeStyle::parse(text) {
                    Some(width) => self.style_pattern(kind, width),
                    None if text.trim().is_empty() => self.style_pattern(kind, DateTimeStyle::Medium),
                    None => Some(text.to_string()),
                }
            }
        };
        match pattern {
            Some(pattern) => self.render_pattern(&pattern, value),
            None => {
                tracing::warn!(locale = self.dates_locale(), ?kind, "no date patterns, using ISO 8601");
                let iso = match kind {
                    DateKind::Date => "%Y-%m-%d",
                    DateKind::Time => "%H:%M:%S",
                    DateKind::DateTime => "%Y-%m-%d %H:%M:%S",
                };
                value.format(iso).to_string()
            }
        }
    }

    /// Pattern for `style`, trying the nearest defined style when it is missing.
    fn style_pattern(&self, kind: DateKind, style: DateTimeStyle) -> Option<String> {
        let locale = self.dates_locale();
        let first = |lookup: &dyn Fn(DateTimeStyle) -> Option<String>| {
            style.fallbacks().into_iter().find_map(lookup)
        };
        match kind {
            DateKind::Date => first(&|s| self.data.date_pattern(locale, s)),
            DateKind::Time => first(&|s| self.data.time_pattern(locale, s)),
            DateKind::DateTime => {
                let date = first(&|s| self.data.date_pattern(locale, s))?;
                let time = first(&|s| self.data.time_pattern(locale, s))?;
                let glue = first(&|s| self.data.datetime_pattern(locale, s))
                    .unwrap_or_else(|| "{1} {0}".to_string());
                Some(fill_pattern(&glue, &[time.as_str(), date.as_str()]))
            }
        }
    }

    /// Maps a skeleton to a locale pattern, composing one when the locale has no match.
    fn skeleton_pattern(&self, skeleton: &str) -> String {
        let locale = self.dates_locale();
        if let Some(pattern) = self.data.skeleton_pattern(locale, skeleton) {
            return pattern;
        }
        let prefers_h12 = self
            .data
            .time_pattern(locale, DateTimeStyle::Short)
            .is_none_or(|pattern| pattern.contains('h'));
        let mut date_fields: Vec<String> = Vec::new();
        let mut time_fields: Vec<String> = Vec::new();
        let mut twelve_hour = false;
        for (letter, count) in field_runs(skeleton) {
            let field = letter.to_string().repeat(count);
            match letter {
                'G' | 'y' | 'Q' | 'M' | 'L' | 'E' | 'c' | 'd' => date_fields.push(field),
                'j' | 'h' | 'K' if letter != 'j' || prefers_h12 => {
                    twelve_hour = true;
                    time_fields.push(if letter == 'j' { "h".repeat(count) } else { field });
                }
                'j' => time_fields.push("H".repeat(count.max(2))),
                'H' | 'k' => time_fields.push(field),
                'm' | 's' => time_fields.push(letter.to_string().repeat(count.max(2))),
                _ => {}
            }
        }
        let numeric = date_fields
            .iter()
            .all(|field| !field.starts_with(['E', 'c', 'G']) && field.len() <= 2);
        let date = date_fields.join(if numeric { "/" } else { " " });
        let mut time = time_fields.join(":");
        if twelve_hour {
            time.push_str(" a");
        }
        match (date.is_empty(), time.is_empty()) {
            (false, false) => {
                let glue = self
                    .data
                    .datetime_pattern(locale, DateTimeStyle::Medium)
                    .unwrap_or_else(|| "{1} {0}".to_string());
                fill_pattern(&glue, &[time.as_str(), date.as_str()])
            }
            (false, true) => date,
            _ => time,
        }
    }

    /// Interprets CLDR pattern letters; quoted text is copied verbatim.
    pub fn render_pattern(&self, pattern: &str, value: &NaiveDateTime) -> String {
        let locale = self.dates_locale();
        let digits = self.data.digits(locale);
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                while let Some(q) = chars.next() {
                    if q != '\'' {
                        out.push(q);
                    } else if chars.peek() == Some(&'\'') {
                        chars.next();
                        out.push('\'');
                    } else {
                        break;
                    }
                }
                continue;
            }
            if !c.is_ascii_alphabetic() {
                out.push(c);
                continue;
            }
            let mut count = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                count += 1;
            }
            match self.field(locale, c, count, value) {
                Some(Field::Number(text)) => out.push_str(&localize(&text, digits)),
                Some(Field::Text(text)) => out.push_str(&text),
                None => out.push_str(&c.to_string().repeat(count)),
            }
        }
        out
    }

    fn field(&self, locale: &str, letter: char, count: usize, value: &NaiveDateTime) -> Option<Field> {
        let data = self.data;
        let field = match letter {
            'G' => {
                let common_era = value.year() > 0;
                let name = data
                    .era_name(locale, common_era, name_width(count))
                    .unwrap_or_else(|| if common_era { "AD" } else { "BC" }.to_string());
                Field::Text(name)
            }
            'y' | 'u' => {
                let year = value.year();
                let year = if letter == 'y' && year <= 0 { 1 - year } else { year };
                match count {
                    2 => Field::Number(padded(year.rem_euclid(100), 2)),
                    _ => Field::Number(padded(year, count)),
                }
            }
            'Q' | 'q' if count <= 2 => Field::Number(padded(value.month0() / 3 + 1, count)),
            'M' | 'L' => match count {
                1 | 2 => Field::Number(padded(value.month(), count)),
                _ => Field::Text(
                    data.month_name(locale, value.month(), name_width(count))
                        .unwrap_or_else(|| value.month().to_string()),
                ),
            },
            'd' => Field::Number(padded(value.day(), count)),
            'D' => Field::Number(padded(value.ordinal(), count)),
            'E' | 'c' | 'e' if count >= 3 || letter == 'E' => Field::Text(
                data.weekday_name(locale, value.weekday(), name_width(count))
                    .unwrap_or_else(|| value.format("%a").to_string()),
            ),
            'c' | 'e' => Field::Number(padded(value.weekday().number_from_sunday(), count)),
            'a' | 'b' | 'B' => {
                let pm = value.hour() >= 12;
                Field::Text(
                    data.day_period(locale, pm)
                        .unwrap_or_else(|| if pm { "PM" } else { "AM" }.to_string()),
                )
            }
            'h' => Field::Number(padded(value.hour12().1, count)),
            'H' => Field::Number(padded(value.hour(), count)),
            'k' => Field::Number(padded(if value.hour() == 0 { 24 } else { value.hour() }, count)),
            'K' => Field::Number(padded(value.hour() % 12, count)),
            'm' => Field::Number(padded(value.minute(), count)),
            's' => Field::Number(padded(value.second(), count)),
            'S' => {
                let nanos = padded(value.nanosecond() % 1_000_000_000, 9);
                let mut fraction: String = nanos.chars().take(count).collect();
                while fraction.len() < count {
                    fraction.push('0');
                }
                Field::Number(fraction)
            }
            'z' | 'v' | 'V' => Field::Text(
                if count >= 4 { "Coordinated Universal Time" } else { "UTC" }.to_string(),
            ),
            'O' => Field::Text("GMT".to_string()),
            'Z' => Field::Text(if count == 4 { "GMT" } else { "+0000" }.to_string()),
            'X' => Field::Text("Z".to_string()),
            'x' => Field::Text("+00".to_string()),
            _ => return None,
        };
        Some(field)
    }
}

enum Field {
    Number(String),
    Text(String),
}

fn localize(text: &str, digits: [char; 10]) -> String {
    if digits == LATIN_DIGITS {
        return text.to_string();
    }
    text.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| digits[d as usize]))
        .collect()
}

/// Consecutive runs of the same letter in a skeleton, e.g. `yMMMd` gives
/// `y`, `MMM`, `d`.
fn field_runs(skeleton: &str) -> Vec<(char, usize)> {
    let mut runs: Vec<(char, usize)> = Vec::new();
    for c in skeleton.chars().filter(char::is_ascii_alphabetic) {
        match runs.last_mut() {
            Some((letter, count)) if *letter == c => *count += 1,
            _ => runs.push((c, 1)),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale_data::BuiltinLocaleData;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|date| date.and_hms_opt(14, 7, 9))
            .expect("valid date")
    }

    fn format_in(locale: &str, kind: DateKind, style: Option<FormatStyle>) -> String {
        let data = BuiltinLocaleData::new();
        let resolved = ResolvedLocale::new(locale, "en", &data).expect("locale has data");
        DateFormatter::new(&data, &resolved).format(&sample(), kind, style.as_ref())
    }

    fn text(style: &str) -> Option<FormatStyle> {
        Some(FormatStyle::Text(style.to_string()))
    }

    #[test]
    fn test_named_styles() {
        assert_eq!(format_in("en", DateKind::Date, None), "Mar 5, 2024");
        assert_eq!(format_in("en", DateKind::Date, text("short")), "3/5/24");
        assert_eq!(format_in("en", DateKind::Date, text("full")), "Tuesday, March 5, 2024");
        assert_eq!(format_in("en", DateKind::Time, text("short")), "2:07 PM");
        assert_eq!(format_in("de", DateKind::Date, text("medium")), "05.03.2024");
        assert_eq!(format_in("de", DateKind::Time, None), "14:07:09");
    }

    #[test]
    fn test_datetime_glue() {
        assert_eq!(format_in("en", DateKind::DateTime, text("short")), "3/5/24, 2:07 PM");
        assert_eq!(
            format_in("en", DateKind::DateTime, text("long")),
            "March 5, 2024 at 2:07:09 PM UTC"
        );
    }

    #[test]
    fn test_custom_patterns() {
        assert_eq!(format_in("en", DateKind::Date, text("yyyy-MM-dd")), "2024-03-05");
        assert_eq!(format_in("en", DateKind::Date, text("EEE, d MMM ''yy")), "Tue, 5 Mar '24");
        assert_eq!(format_in("en", DateKind::Time, text("HH:mm 'o''clock'")), "14:07 o'clock");
        assert_eq!(format_in("en", DateKind::Time, text("h:mm:ss.SSS a")), "2:07:09.000 PM");
        assert_eq!(format_in("fr", DateKind::Date, text("EEEE d MMMM")), "mardi 5 mars");
    }

    #[test]
    fn test_skeletons() {
        let skeleton = |text: &str| Some(FormatStyle::DateSkeleton(text.to_string()));
        assert_eq!(format_in("en", DateKind::Date, skeleton("yMMMd")), "Mar 5, 2024");
        assert_eq!(format_in("de", DateKind::Date, skeleton("yMMMd")), "5. März 2024");
        assert_eq!(format_in("en", DateKind::Time, skeleton("Hm")), "14:07");
        // no table entry, so the fields are composed in skeleton order
        assert_eq!(format_in("en", DateKind::Date, skeleton("dMy")), "5/3/2024");
        assert_eq!(format_in("en", DateKind::Time, skeleton("jm")), "2:07 PM");
    }

    #[test]
    fn test_argument_forms() {
        let expected = Some(sample());
        assert_eq!(parse_date_argument(&Value::from("2024-03-05T14:07:09")), expected);
        assert_eq!(parse_date_argument(&Value::from("2024-03-05T14:07:09Z")), expected);
        assert_eq!(parse_date_argument(&Value::from("2024-03-05T16:07:09+02:00")), expected);
        assert_eq!(parse_date_argument(&Value::Int(1_709_647_629_000)), expected);
        assert_eq!(
            parse_date_argument(&Value::from("2024-03-05")).map(|d| d.date()),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_date_argument(&Value::from("next tuesday")), None);
        assert_eq!(parse_date_argument(&Value::Bool(true)), None);
    }
}
