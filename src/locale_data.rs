//! The locale-data backend boundary.
//!
//! The formatter never owns CLDR data itself; everything locale-specific is
//! queried through [`LocaleData`]. Every query takes an already-resolved
//! locale identifier (see [`crate::locale`]) and returns `None` when the
//! backend has nothing for it, leaving the fallback policy to the caller.

use std::cell::RefCell;

use chrono::Weekday;
use fixed_decimal::FixedDecimal;
use icu::decimal::FixedDecimalFormatter;
use icu::decimal::options::{FixedDecimalFormatterOptions, GroupingStrategy};
use icu::locid::Locale;
use icu::plurals::PluralRules;

use crate::cldr;
use crate::operands::PluralOperands;
use crate::skeleton::{Grouping, UnitWidth};
use crate::types::PluralCategory;

pub const LATIN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// The kinds of data a locale is resolved for independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Plurals,
    Numbers,
    Dates,
    Currencies,
    Units,
    Lists,
    RelativeTime,
}

impl DataKind {
    pub const ALL: [DataKind; 7] = [
        DataKind::Plurals,
        DataKind::Numbers,
        DataKind::Dates,
        DataKind::Currencies,
        DataKind::Units,
        DataKind::Lists,
        DataKind::RelativeTime,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeStyle {
    Short,
    Medium,
    Long,
    Full,
}

impl DateTimeStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Some(DateTimeStyle::Short),
            "medium" => Some(DateTimeStyle::Medium),
            "long" => Some(DateTimeStyle::Long),
            "full" => Some(DateTimeStyle::Full),
            _ => None,
        }
    }

    /// This style followed by the remaining styles, nearest first.
    pub fn fallbacks(self) -> [DateTimeStyle; 4] {
        use DateTimeStyle::{Full, Long, Medium, Short};
        match self {
            Short => [Short, Medium, Long, Full],
            Medium => [Medium, Short, Long, Full],
            Long => [Long, Medium, Full, Short],
            Full => [Full, Long, Medium, Short],
        }
    }
}

/// Width of month, weekday and era names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameWidth {
    Abbreviated,
    Wide,
    Narrow,
}

/// Width of list and relative-time patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Width {
    #[default]
    Long,
    Short,
    Narrow,
}

impl Width {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "long" => Some(Width::Long),
            "short" => Some(Width::Short),
            "narrow" => Some(Width::Narrow),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListType {
    #[default]
    Conjunction,
    Disjunction,
    Unit,
}

impl ListType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "conjunction" | "and" => Some(ListType::Conjunction),
            "disjunction" | "or" => Some(ListType::Disjunction),
            "unit" => Some(ListType::Unit),
            _ => None,
        }
    }
}

/// CLDR list patterns; each one joins `{0}` and `{1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPatterns {
    pub pair: String,
    pub start: String,
    pub middle: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeField {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Weekday(Weekday),
}

impl RelativeField {
    pub fn parse(s: &str) -> Option<Self> {
        let field = match s.to_ascii_lowercase().trim_end_matches('s') {
            "year" => RelativeField::Year,
            "quarter" => RelativeField::Quarter,
            "month" => RelativeField::Month,
            "week" => RelativeField::Week,
            "day" => RelativeField::Day,
            "hour" => RelativeField::Hour,
            "minute" => RelativeField::Minute,
            "second" => RelativeField::Second,
            "monday" => RelativeField::Weekday(Weekday::Mon),
            "tuesday" => RelativeField::Weekday(Weekday::Tue),
            "wednesday" => RelativeField::Weekday(Weekday::Wed),
            "thursday" => RelativeField::Weekday(Weekday::Thu),
            "friday" => RelativeField::Weekday(Weekday::Fri),
            "saturday" => RelativeField::Weekday(Weekday::Sat),
            "sunday" => RelativeField::Weekday(Weekday::Sun),
            _ => return None,
        };
        Some(field)
    }
}

/// Locale number symbols and affix patterns; `{0}` marks the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSymbols {
    pub minus_sign: String,
    pub plus_sign: String,
    pub percent_pattern: String,
    pub permille_pattern: String,
    /// `¤` marks the currency symbol.
    pub currency_pattern: String,
    pub exponent_separator: String,
    pub approximately_pattern: String,
    pub range_pattern: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            percent_pattern: "{0}%".to_string(),
            permille_pattern: "{0}‰".to_string(),
            currency_pattern: "¤{0}".to_string(),
            exponent_separator: "E".to_string(),
            approximately_pattern: "~{0}".to_string(),
            range_pattern: "{0}–{1}".to_string(),
        }
    }
}

/// A compact-notation pattern chosen for a value's magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactPattern {
    /// Power of ten the value is divided by before rendering.
    pub exponent: i16,
    pub pattern: String,
}

/// Substitutes `{0}`, `{1}`, ... in a CLDR pattern. Unknown indices stay verbatim.
pub fn fill_pattern(pattern: &str, args: &[&str]) -> String {
    let mut filled = String::with_capacity(pattern.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let argument = tail
            .find('}')
            .and_then(|end| Some((end, *args.get(tail[..end].parse::<usize>().ok()?)?)));
        match argument {
            Some((end, arg)) => {
                filled.push_str(arg);
                rest = &tail[end + 1..];
            }
            None => {
                filled.push('{');
                rest = tail;
            }
        }
    }
    filled.push_str(rest);
    filled
}

/// A provider of CLDR-style locale data.
///
/// Only [`has_data`](LocaleData::has_data) and
/// [`plural_category`](LocaleData::plural_category) are required; every
/// other query defaults to "no data", which the formatter degrades around.
pub trait LocaleData: Send + Sync {
    /// Whether `locale` (exactly, without fallback) has data of `kind`.
    fn has_data(&self, locale: &str, kind: DataKind) -> bool;

    fn plural_category(
        &self,
        locale: &str,
        operands: &PluralOperands,
        ordinal: bool,
    ) -> Option<PluralCategory>;

    /// Renders an unsigned decimal with locale separators and grouping.
    fn format_decimal(&self, _locale: &str, value: &FixedDecimal, _grouping: Grouping) -> String {
        value.to_string()
    }

    fn number_symbols(&self, _locale: &str) -> NumberSymbols {
        NumberSymbols::default()
    }

    fn digits(&self, _locale: &str) -> [char; 10] {
        LATIN_DIGITS
    }

    fn compact_pattern(
        &self,
        _locale: &str,
        _magnitude: i16,
        _long: bool,
        _category: PluralCategory,
    ) -> Option<CompactPattern> {
        None
    }

    /// Pattern placing `{0}` next to an ordinal marker, e.g. `{0}nd`.
    fn ordinal_pattern(&self, _locale: &str, _category: PluralCategory) -> Option<String> {
        None
    }

    fn date_pattern(&self, _locale: &str, _style: DateTimeStyle) -> Option<String> {
        None
    }

    fn time_pattern(&self, _locale: &str, _style: DateTimeStyle) -> Option<String> {
        None
    }

    /// Glue pattern with `{1}` for the date and `{0}` for the time.
    fn datetime_pattern(&self, _locale: &str, _style: DateTimeStyle) -> Option<String> {
        None
    }

    fn skeleton_pattern(&self, _locale: &str, _skeleton: &str) -> Option<String> {
        None
    }

    fn month_name(&self, _locale: &str, _month: u32, _width: NameWidth) -> Option<String> {
        None
    }

    fn weekday_name(&self, _locale: &str, _weekday: Weekday, _width: NameWidth) -> Option<String> {
        None
    }

    fn day_period(&self, _locale: &str, _pm: bool) -> Option<String> {
        None
    }

    fn era_name(&self, _locale: &str, _common_era: bool, _width: NameWidth) -> Option<String> {
        None
    }

    /// Symbol, narrow symbol or display name of an ISO 4217 code.
    fn currency_display(
        &self,
        _locale: &str,
        _code: &str,
        _width: UnitWidth,
        _category: PluralCategory,
    ) -> Option<String> {
        None
    }

    fn currency_digits(&self, code: &str) -> u8 {
        cldr::currency_digits(code)
    }

    /// Unit pattern with `{0}` for the number, e.g. `{0} km`.
    fn unit_pattern(
        &self,
        _locale: &str,
        _unit: &str,
        _width: UnitWidth,
        _category: PluralCategory,
    ) -> Option<String> {
        None
    }

    fn list_patterns(&self, _locale: &str, _list_type: ListType, _width: Width) -> Option<ListPatterns> {
        None
    }

    fn relative_time_pattern(
        &self,
        _locale: &str,
        _field: RelativeField,
        _width: Width,
        _future: bool,
        _category: PluralCategory,
    ) -> Option<String> {
        None
    }

    /// Phrase for small offsets, e.g. `yesterday` for day `-1`.
    fn relative_time_literal(
        &self,
        _locale: &str,
        _field: RelativeField,
        _width: Width,
        _offset: i64,
    ) -> Option<String> {
        None
    }
}

thread_local! {
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, bool, PluralRules)>> = const { RefCell::new(Vec::new()) };
    static DECIMAL_FORMATTER_CACHE: RefCell<Vec<(String, GroupingStrategy, FixedDecimalFormatter)>> =
        const { RefCell::new(Vec::new()) };
}

/// Locale data backed by ICU4X compiled data for plural rules and decimal
/// formatting, and by embedded CLDR tables for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocaleData;

impl BuiltinLocaleData {
    pub fn new() -> Self {
        Self
    }

    fn icu_locale(locale: &str) -> Option<Locale> {
        match locale.parse::<Locale>() {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!(locale, error = ?err, "locale rejected by ICU4X");
                None
            }
        }
    }

    fn with_plural_rules<T>(
        locale: &str,
        ordinal: bool,
        f: impl FnOnce(&PluralRules) -> T,
    ) -> Option<T> {
        PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, _, rules)) = cache
                .iter()
                .find(|(code, kind, _)| code == locale && *kind == ordinal)
            {
                return Some(f(rules));
            }
            let icu_locale = Self::icu_locale(locale)?;
            let data_locale = (&icu_locale).into();
            let built = if ordinal {
                PluralRules::try_new_ordinal(&data_locale)
            } else {
                PluralRules::try_new_cardinal(&data_locale)
            };
            let rules = match built {
                Ok(rules) => rules,
                Err(err) => {
                    tracing::warn!(locale, ordinal, error = ?err, "plural rules unavailable");
                    return None;
                }
            };
            let result = f(&rules);
            cache.push((locale.to_string(), ordinal, rules));
            Some(result)
        })
    }
}

fn grouping_strategy(grouping: Grouping) -> GroupingStrategy {
    match grouping {
        Grouping::Off => GroupingStrategy::Never,
        Grouping::Min2 => GroupingStrategy::Min2,
        Grouping::Always => GroupingStrategy::Always,
        Grouping::Auto | Grouping::OnAligned => GroupingStrategy::Auto,
    }
}

impl LocaleData for BuiltinLocaleData {
    fn has_data(&self, locale: &str, kind: DataKind) -> bool {
        match kind {
            DataKind::Plurals | DataKind::Numbers => cldr::ICU_LOCALES.contains(&locale),
            _ => cldr::table_locale(locale, kind),
        }
    }

    fn plural_category(
        &self,
        locale: &str,
        operands: &PluralOperands,
        ordinal: bool,
    ) -> Option<PluralCategory> {
        let compact = operands.to_compact_decimal();
        let mut decimal = operands.to_fixed_decimal();
        decimal.set_sign(fixed_decimal::Sign::None);
        Self::with_plural_rules(locale, ordinal, |rules| {
            let category = match &compact {
                Some(compact) => rules.category_for(compact),
                None => rules.category_for(&decimal),
            };
            PluralCategory::from(category)
        })
    }

    fn format_decimal(&self, locale: &str, value: &FixedDecimal, grouping: Grouping) -> String {
        let strategy = grouping_strategy(grouping);
        let formatted = DECIMAL_FORMATTER_CACHE.with_borrow_mut(|cache| {
            if let Some((_, _, formatter)) = cache
                .iter()
                .find(|(code, cached, _)| code == locale && *cached == strategy)
            {
                return Some(formatter.format_to_string(value));
            }
            let icu_locale = Self::icu_locale(locale)?;
            let mut options = FixedDecimalFormatterOptions::default();
            options.grouping_strategy = strategy;
            match FixedDecimalFormatter::try_new(&(&icu_locale).into(), options) {
                Ok(formatter) => {
                    let formatted = formatter.format_to_string(value);
                    cache.push((locale.to_string(), strategy, formatter));
                    Some(formatted)
                }
                Err(err) => {
                    tracing::warn!(locale, error = ?err, "decimal symbols unavailable");
                    None
                }
            }
        });
        formatted.unwrap_or_else(|| value.to_string())
    }

    fn number_symbols(&self, locale: &str) -> NumberSymbols {
        cldr::number_symbols(locale)
    }

    fn compact_pattern(
        &self,
        locale: &str,
        magnitude: i16,
        long: bool,
        category: PluralCategory,
    ) -> Option<CompactPattern> {
        cldr::compact_pattern(locale, magnitude, long, category)
    }

    fn ordinal_pattern(&self, locale: &str, category: PluralCategory) -> Option<String> {
        cldr::ordinal_pattern(locale, category).map(str::to_string)
    }

    fn date_pattern(&self, locale: &str, style: DateTimeStyle) -> Option<String> {
        cldr::date_pattern(locale, style).map(str::to_string)
    }

    fn time_pattern(&self, locale: &str, style: DateTimeStyle) -> Option<String> {
        cldr::time_pattern(locale, style).map(str::to_string)
    }

    fn datetime_pattern(&self, locale: &str, style: DateTimeStyle) -> Option<String> {
        cldr::datetime_pattern(locale, style).map(str::to_string)
    }

    fn skeleton_pattern(&self, locale: &str, skeleton: &str) -> Option<String> {
        cldr::skeleton_pattern(locale, skeleton).map(str::to_string)
    }

    fn month_name(&self, locale: &str, month: u32, width: NameWidth) -> Option<String> {
        cldr::month_name(locale, month, width).map(str::to_string)
    }

    fn weekday_name(&self, locale: &str, weekday: Weekday, width: NameWidth) -> Option<String> {
        cldr::weekday_name(locale, weekday, width).map(str::to_string)
    }

    fn day_period(&self, locale: &str, pm: bool) -> Option<String> {
        cldr::day_period(locale, pm).map(str::to_string)
    }

    fn era_name(&self, locale: &str, common_era: bool, width: NameWidth) -> Option<String> {
        cldr::era_name(locale, common_era, width).map(str::to_string)
    }

    fn currency_display(
        &self,
        locale: &str,
        code: &str,
        width: UnitWidth,
        category: PluralCategory,
    ) -> Option<String> {
        cldr::currency_display(locale, code, width, category)
    }

    fn unit_pattern(
        &self,
        locale: &str,
        unit: &str,
        width: UnitWidth,
        category: PluralCategory,
    ) -> Option<String> {
        cldr::unit_pattern(locale, unit, width, category)
    }

    fn list_patterns(&self, locale: &str, list_type: ListType, width: Width) -> Option<ListPatterns> {
        cldr::list_patterns(locale, list_type, width)
    }

    fn relative_time_pattern(
        &self,
        locale: &str,
        field: RelativeField,
        width: Width,
        future: bool,
        category: PluralCategory,
    ) -> Option<String> {
        cldr::relative_time_pattern(locale, field, width, future, category)
    }

    fn relative_time_literal(
        &self,
        locale: &str,
        field: RelativeField,
        width: Width,
        offset: i64,
    ) -> Option<String> {
        cldr::relative_time_literal(locale, field, width, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plural_rules() {
        let data = BuiltinLocaleData::new();
        let category = |locale: &str, value: &str, ordinal: bool| {
            let operands: PluralOperands = value.parse().expect("valid decimal");
            data.plural_category(locale, &operands, ordinal)
        };
        assert_eq!(category("en", "1", false), Some(PluralCategory::One));
        assert_eq!(category("en", "1.0", false), Some(PluralCategory::Other));
        assert_eq!(category("en", "2", false), Some(PluralCategory::Other));
        assert_eq!(category("ru", "3", false), Some(PluralCategory::Few));
        assert_eq!(category("ru", "5", false), Some(PluralCategory::Many));
        assert_eq!(category("en", "2", true), Some(PluralCategory::Two));
        assert_eq!(category("en", "23", true), Some(PluralCategory::Few));
        assert_eq!(category("en", "11", true), Some(PluralCategory::Other));
    }

    #[test]
    fn test_builtin_plural_rules_see_compact_exponent() {
        let data = BuiltinLocaleData::new();
        let category = |value: &str| {
            let operands: PluralOperands = value.parse().expect("valid decimal");
            data.plural_category("fr", &operands, false)
        };
        assert_eq!(category("1.5c6"), Some(PluralCategory::Many));
        assert_eq!(category("1500000"), Some(PluralCategory::Other));
        assert_eq!(category("1c6"), Some(PluralCategory::Many));
        assert_eq!(category("1.2e3"), Some(PluralCategory::Other));
        assert_eq!(category("1"), Some(PluralCategory::One));
    }

    #[test]
    fn test_builtin_decimal_grouping() {
        let data = BuiltinLocaleData::new();
        let value: FixedDecimal = "1234567.5".parse().expect("valid decimal");
        assert_eq!(data.format_decimal("en", &value, Grouping::Auto), "1,234,567.5");
        assert_eq!(data.format_decimal("en", &value, Grouping::Off), "1234567.5");
        assert_eq!(data.format_decimal("de", &value, Grouping::Auto), "1.234.567,5");
    }

    #[test]
    fn test_has_data_is_exact_and_per_kind() {
        let data = BuiltinLocaleData::new();
        assert!(data.has_data("en", DataKind::Plurals));
        assert!(!data.has_data("en-US", DataKind::Plurals));
        assert!(data.has_data("pl", DataKind::Plurals));
        assert!(!data.has_data("pl", DataKind::Dates));
        assert!(data.has_data("de", DataKind::RelativeTime));
        assert!(!data.has_data("ja", DataKind::RelativeTime));
    }

    #[test]
    fn test_style_fallbacks_start_with_requested_style() {
        assert_eq!(DateTimeStyle::Full.fallbacks()[1], DateTimeStyle::Long);
        assert_eq!(DateTimeStyle::parse(" Medium "), Some(DateTimeStyle::Medium));
        assert_eq!(DateTimeStyle::parse("yyyy"), None);
    }

    #[test]
    fn test_fills_numbered_placeholders() {
        assert_eq!(fill_pattern("{1}, {0}", &["time", "date"]), "date, time");
        assert_eq!(fill_pattern("{0}–{1}", &["3", "5"]), "3–5");
        assert_eq!(fill_pattern("{0} {2} {x}", &["a"]), "a {2} {x}");
    }

    #[test]
    fn test_relative_field_accepts_plurals() {
        assert_eq!(RelativeField::parse("days"), Some(RelativeField::Day));
        assert_eq!(RelativeField::parse("Monday"), Some(RelativeField::Weekday(Weekday::Mon)));
        assert_eq!(RelativeField::parse("fortnight"), None);
    }
}
