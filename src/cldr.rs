//! Embedded CLDR tables used by [`BuiltinLocaleData`](crate::BuiltinLocaleData).
//!
//! Plural rules and decimal symbols come from ICU4X compiled data for every
//! locale in [`ICU_LOCALES`]. The tables below cover the remaining data kinds
//! for a handful of locales; anything else resolves through the fallback
//! chain.

use chrono::Weekday;

use crate::locale_data::{
    CompactPattern, DataKind, DateTimeStyle, ListPatterns, ListType, NameWidth, NumberSymbols,
    RelativeField, Width,
};
use crate::skeleton::UnitWidth;
use crate::types::PluralCategory;

/// Locales whose plural rules and decimal symbols are taken from ICU4X.
pub const ICU_LOCALES: &[&str] = &[
    "ar", "cs", "cy", "da", "de", "el", "en", "es", "fi", "fr", "ga", "he", "hi", "hu", "id", "it",
    "ja", "ko", "lt", "lv", "nb", "nl", "pl", "pt", "ro", "ru", "sk", "sl", "sv", "th", "tr", "uk",
    "vi", "zh",
];

const TABLE_LOCALES: &[&str] = &["en", "de", "fr", "es", "ru", "ja"];
const UNIT_LOCALES: &[&str] = &["en", "de", "fr"];
const RELATIVE_LOCALES: &[&str] = &["en", "de", "fr", "es"];

pub fn table_locale(locale: &str, kind: DataKind) -> bool {
    match kind {
        DataKind::Plurals | DataKind::Numbers => ICU_LOCALES.contains(&locale),
        DataKind::Dates | DataKind::Currencies | DataKind::Lists => TABLE_LOCALES.contains(&locale),
        DataKind::Units => UNIT_LOCALES.contains(&locale),
        DataKind::RelativeTime => RELATIVE_LOCALES.contains(&locale),
    }
}

fn category_index(category: PluralCategory) -> usize {
    usize::from(category != PluralCategory::One)
}

// Numbers

pub fn number_symbols(locale: &str) -> NumberSymbols {
    let mut symbols = NumberSymbols::default();
    let (percent, currency, approximately, range) = match locale {
        "de" | "ru" => ("{0}\u{a0}%", "{0}\u{a0}¤", "≈{0}", "{0}–{1}"),
        "fr" => ("{0}\u{202f}%", "{0}\u{a0}¤", "≃{0}", "{0}–{1}"),
        "es" => ("{0}\u{a0}%", "{0}\u{a0}¤", "~{0}", "{0}-{1}"),
        "ja" => ("{0}%", "¤{0}", "約{0}", "{0}～{1}"),
        _ => return symbols,
    };
    symbols.percent_pattern = percent.to_string();
    symbols.currency_pattern = currency.to_string();
    symbols.approximately_pattern = approximately.to_string();
    symbols.range_pattern = range.to_string();
    symbols
}

/// `(exponent, one, other)` rows, ascending by exponent.
type CompactTable = &'static [(i16, &'static str, &'static str)];

const EN_COMPACT_SHORT: CompactTable = &[
    (3, "{0}K", "{0}K"),
    (6, "{0}M", "{0}M"),
    (9, "{0}B", "{0}B"),
    (12, "{0}T", "{0}T"),
];
const EN_COMPACT_LONG: CompactTable = &[
    (3, "{0} thousand", "{0} thousand"),
    (6, "{0} million", "{0} million"),
    (9, "{0} billion", "{0} billion"),
    (12, "{0} trillion", "{0} trillion"),
];
const DE_COMPACT_SHORT: CompactTable = &[
    (6, "{0}\u{a0}Mio.", "{0}\u{a0}Mio."),
    (9, "{0}\u{a0}Mrd.", "{0}\u{a0}Mrd."),
    (12, "{0}\u{a0}Bio.", "{0}\u{a0}Bio."),
];
const DE_COMPACT_LONG: CompactTable = &[
    (3, "{0} Tausend", "{0} Tausend"),
    (6, "{0} Million", "{0} Millionen"),
    (9, "{0} Milliarde", "{0} Milliarden"),
    (12, "{0} Billion", "{0} Billionen"),
];
const FR_COMPACT_SHORT: CompactTable = &[
    (3, "{0}\u{a0}k", "{0}\u{a0}k"),
    (6, "{0}\u{a0}M", "{0}\u{a0}M"),
    (9, "{0}\u{a0}Md", "{0}\u{a0}Md"),
    (12, "{0}\u{a0}Bn", "{0}\u{a0}Bn"),
];
const FR_COMPACT_LONG: CompactTable = &[
    (3, "{0} mille", "{0} mille"),
    (6, "{0} million", "{0} millions"),
    (9, "{0} milliard", "{0} milliards"),
    (12, "{0} billion", "{0} billions"),
];
const ES_COMPACT_SHORT: CompactTable = &[
    (3, "{0}\u{a0}mil", "{0}\u{a0}mil"),
    (6, "{0}\u{a0}M", "{0}\u{a0}M"),
    (9, "{0}\u{a0}mil\u{a0}M", "{0}\u{a0}mil\u{a0}M"),
    (12, "{0}\u{a0}B", "{0}\u{a0}B"),
];
const ES_COMPACT_LONG: CompactTable = &[
    (3, "{0} mil", "{0} mil"),
    (6, "{0} millón", "{0} millones"),
    (9, "{0} mil millones", "{0} mil millones"),
    (12, "{0} billón", "{0} billones"),
];
const RU_COMPACT_SHORT: CompactTable = &[
    (3, "{0}\u{a0}тыс.", "{0}\u{a0}тыс."),
    (6, "{0}\u{a0}млн", "{0}\u{a0}млн"),
    (9, "{0}\u{a0}млрд", "{0}\u{a0}млрд"),
    (12, "{0}\u{a0}трлн", "{0}\u{a0}трлн"),
];
const JA_COMPACT: CompactTable = &[(4, "{0}万", "{0}万"), (8, "{0}億", "{0}億"), (12, "{0}兆", "{0}兆")];

pub fn compact_pattern(
    locale: &str,
    magnitude: i16,
    long: bool,
    category: PluralCategory,
) -> Option<CompactPattern> {
    let table = match (locale, long) {
        ("en", false) => EN_COMPACT_SHORT,
        ("en", true) => EN_COMPACT_LONG,
        ("de", false) => DE_COMPACT_SHORT,
        ("de", true) => DE_COMPACT_LONG,
        ("fr", false) => FR_COMPACT_SHORT,
        ("fr", true) => FR_COMPACT_LONG,
        ("es", false) => ES_COMPACT_SHORT,
        ("es", true) => ES_COMPACT_LONG,
        ("ru", _) => RU_COMPACT_SHORT,
        ("ja", _) => JA_COMPACT,
        _ => return None,
    };
    // Past the largest exponent the last row still applies, giving "1000T".
    let (exponent, one, other) = table
        .iter()
        .rev()
        .find(|(exponent, _, _)| *exponent <= magnitude)?;
    let pattern = if category == PluralCategory::One { one } else { other };
    Some(CompactPattern {
        exponent: *exponent,
        pattern: pattern.to_string(),
    })
}

pub fn ordinal_pattern(locale: &str, category: PluralCategory) -> Option<&'static str> {
    let pattern = match (locale, category) {
        ("en", PluralCategory::One) => "{0}st",
        ("en", PluralCategory::Two) => "{0}nd",
        ("en", PluralCategory::Few) => "{0}rd",
        ("en", _) => "{0}th",
        ("de", _) => "{0}.",
        ("fr", PluralCategory::One) => "{0}er",
        ("fr", _) => "{0}e",
        ("es", _) => "{0}.º",
        ("ru", _) => "{0}-й",
        ("ja", _) => "第{0}",
        _ => return None,
    };
    Some(pattern)
}

// Dates

struct DateSymbols {
    /// Abbreviated, wide, narrow.
    months: [[&'static str; 12]; 3],
    /// Sunday first; abbreviated, wide, narrow.
    weekdays: [[&'static str; 7]; 3],
    periods: [&'static str; 2],
    /// Before and after the epoch; abbreviated, wide, narrow.
    eras: [[&'static str; 2]; 3],
    /// Short, medium, long, full.
    date: [&'static str; 4],
    time: [&'static str; 4],
    glue: [&'static str; 4],
    skeletons: &'static [(&'static str, &'static str)],
}

static EN_DATES: DateSymbols = DateSymbols {
    months: [
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
        [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ],
        ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    ],
    weekdays: [
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
        ["S", "M", "T", "W", "T", "F", "S"],
    ],
    periods: ["AM", "PM"],
    eras: [["BC", "AD"], ["Before Christ", "Anno Domini"], ["B", "A"]],
    date: ["M/d/yy", "MMM d, y", "MMMM d, y", "EEEE, MMMM d, y"],
    time: ["h:mm a", "h:mm:ss a", "h:mm:ss a z", "h:mm:ss a zzzz"],
    glue: ["{1}, {0}", "{1}, {0}", "{1} 'at' {0}", "{1} 'at' {0}"],
    skeletons: &[
        ("d", "d"),
        ("Ed", "d E"),
        ("EEEE", "cccc"),
        ("Hm", "HH:mm"),
        ("Hms", "HH:mm:ss"),
        ("hm", "h:mm a"),
        ("hms", "h:mm:ss a"),
        ("Md", "M/d"),
        ("MEd", "E, M/d"),
        ("MMM", "LLL"),
        ("MMMd", "MMM d"),
        ("MMMEd", "E, MMM d"),
        ("MMMMd", "MMMM d"),
        ("ms", "mm:ss"),
        ("y", "y"),
        ("yM", "M/y"),
        ("yMd", "M/d/y"),
        ("yMEd", "E, M/d/y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "MMM d, y"),
        ("yMMMEd", "E, MMM d, y"),
        ("yMMMM", "MMMM y"),
        ("yMMMMd", "MMMM d, y"),
    ],
};

static DE_DATES: DateSymbols = DateSymbols {
    months: [
        [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
            "Dez.",
        ],
        [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    ],
    weekdays: [
        ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
        ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
        ["S", "M", "D", "M", "D", "F", "S"],
    ],
    periods: ["AM", "PM"],
    eras: [["v. Chr.", "n. Chr."], ["v. Chr.", "n. Chr."], ["v. Chr.", "n. Chr."]],
    date: ["dd.MM.yy", "dd.MM.y", "d. MMMM y", "EEEE, d. MMMM y"],
    time: ["HH:mm", "HH:mm:ss", "HH:mm:ss z", "HH:mm:ss zzzz"],
    glue: ["{1}, {0}", "{1}, {0}", "{1} 'um' {0}", "{1} 'um' {0}"],
    skeletons: &[
        ("Hm", "HH:mm"),
        ("Hms", "HH:mm:ss"),
        ("Md", "d.M."),
        ("MMMd", "d. MMM"),
        ("MMMMd", "d. MMMM"),
        ("yM", "M/y"),
        ("yMd", "d.M.y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "d. MMM y"),
        ("yMMMM", "MMMM y"),
    ],
};

static FR_DATES: DateSymbols = DateSymbols {
    months: [
        [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
        [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    ],
    weekdays: [
        ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
        ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
        ["D", "L", "M", "M", "J", "V", "S"],
    ],
    periods: ["AM", "PM"],
    eras: [
        ["av. J.-C.", "ap. J.-C."],
        ["avant Jésus-Christ", "après Jésus-Christ"],
        ["av. J.-C.", "ap. J.-C."],
    ],
    date: ["dd/MM/y", "d MMM y", "d MMMM y", "EEEE d MMMM y"],
    time: ["HH:mm", "HH:mm:ss", "HH:mm:ss z", "HH:mm:ss zzzz"],
    glue: ["{1} {0}", "{1}, {0}", "{1} 'à' {0}", "{1} 'à' {0}"],
    skeletons: &[
        ("Hm", "HH:mm"),
        ("Md", "dd/MM"),
        ("MMMd", "d MMM"),
        ("yMd", "dd/MM/y"),
        ("yMMMd", "d MMM y"),
        ("yMMMM", "MMMM y"),
    ],
};

static ES_DATES: DateSymbols = DateSymbols {
    months: [
        ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic"],
        [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
            "octubre", "noviembre", "diciembre",
        ],
        ["E", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    ],
    weekdays: [
        ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
        ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
        ["D", "L", "M", "X", "J", "V", "S"],
    ],
    periods: ["a.\u{a0}m.", "p.\u{a0}m."],
    eras: [["a. C.", "d. C."], ["antes de Cristo", "después de Cristo"], ["a. C.", "d. C."]],
    date: ["d/M/yy", "d MMM y", "d 'de' MMMM 'de' y", "EEEE, d 'de' MMMM 'de' y"],
    time: ["H:mm", "H:mm:ss", "H:mm:ss z", "H:mm:ss (zzzz)"],
    glue: ["{1}, {0}", "{1}, {0}", "{1}, {0}", "{1}, {0}"],
    skeletons: &[("Hm", "H:mm"), ("MMMd", "d MMM"), ("yMMMd", "d MMM y")],
};

static RU_DATES: DateSymbols = DateSymbols {
    months: [
        [
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        [
            "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
            "октября", "ноября", "декабря",
        ],
        ["Я", "Ф", "М", "А", "М", "И", "И", "А", "С", "О", "Н", "Д"],
    ],
    weekdays: [
        ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
        ["воскресенье", "понедельник", "вторник", "среда", "четверг", "пятница", "суббота"],
        ["В", "П", "В", "С", "Ч", "П", "С"],
    ],
    periods: ["AM", "PM"],
    eras: [
        ["до н. э.", "н. э."],
        ["до Рождества Христова", "от Рождества Христова"],
        ["до н.э.", "н.э."],
    ],
    date: ["dd.MM.y", "d MMM y 'г'.", "d MMMM y 'г'.", "EEEE, d MMMM y 'г'."],
    time: ["HH:mm", "HH:mm:ss", "HH:mm:ss z", "HH:mm:ss zzzz"],
    glue: ["{1}, {0}", "{1}, {0}", "{1}, {0}", "{1}, {0}"],
    skeletons: &[("Hm", "HH:mm"), ("yMMMd", "d MMM y 'г'.")],
};

static JA_DATES: DateSymbols = DateSymbols {
    months: [
        ["1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月"],
        ["1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月"],
        ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"],
    ],
    weekdays: [
        ["日", "月", "火", "水", "木", "金", "土"],
        ["日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日"],
        ["日", "月", "火", "水", "木", "金", "土"],
    ],
    periods: ["午前", "午後"],
    eras: [["紀元前", "西暦"], ["紀元前", "西暦"], ["BC", "AD"]],
    date: ["y/MM/dd", "y/MM/dd", "y年M月d日", "y年M月d日EEEE"],
    time: ["H:mm", "H:mm:ss", "H:mm:ss z", "H時mm分ss秒 zzzz"],
    glue: ["{1} {0}", "{1} {0}", "{1} {0}", "{1} {0}"],
    skeletons: &[("Hm", "H:mm"), ("MMMd", "M月d日"), ("yMMMd", "y年M月d日")],
};

fn date_symbols(locale: &str) -> Option<&'static DateSymbols> {
    match locale {
        "en" => Some(&EN_DATES),
        "de" => Some(&DE_DATES),
        "fr" => Some(&FR_DATES),
        "es" => Some(&ES_DATES),
        "ru" => Some(&RU_DATES),
        "ja" => Some(&JA_DATES),
        _ => None,
    }
}

fn style_index(style: DateTimeStyle) -> usize {
    match style {
        DateTimeStyle::Short => 0,
        DateTimeStyle::Medium => 1,
        DateTimeStyle::Long => 2,
        DateTimeStyle::Full => 3,
    }
}

fn width_index(width: NameWidth) -> usize {
    match width {
        NameWidth::Abbreviated => 0,
        NameWidth::Wide => 1,
        NameWidth::Narrow => 2,
    }
}

pub fn date_pattern(locale: &str, style: DateTimeStyle) -> Option<&'static str> {
    date_symbols(locale).map(|symbols| symbols.date[style_index(style)])
}

pub fn time_pattern(locale: &str, style: DateTimeStyle) -> Option<&'static str> {
    date_symbols(locale).map(|symbols| symbols.time[style_index(style)])
}

pub fn datetime_pattern(locale: &str, style: DateTimeStyle) -> Option<&'static str> {
    date_symbols(locale).map(|symbols| symbols.glue[style_index(style)])
}

pub fn skeleton_pattern(locale: &str, skeleton: &str) -> Option<&'static str> {
    date_symbols(locale)?
        .skeletons
        .iter()
        .find(|(key, _)| *key == skeleton)
        .map(|(_, pattern)| *pattern)
}

pub fn month_name(locale: &str, month: u32, width: NameWidth) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    date_symbols(locale)?.months[width_index(width)].get(index).copied()
}

pub fn weekday_name(locale: &str, weekday: Weekday, width: NameWidth) -> Option<&'static str> {
    let index = weekday.num_days_from_sunday() as usize;
    date_symbols(locale)?.weekdays[width_index(width)].get(index).copied()
}

pub fn day_period(locale: &str, pm: bool) -> Option<&'static str> {
    date_symbols(locale).map(|symbols| symbols.periods[usize::from(pm)])
}

pub fn era_name(locale: &str, common_era: bool, width: NameWidth) -> Option<&'static str> {
    date_symbols(locale).map(|symbols| symbols.eras[width_index(width)][usize::from(common_era)])
}

// Currencies

const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("TWD", "NT$"),
    ("USD", "US$"),
    ("VND", "₫"),
];

const LOCAL_CURRENCY_SYMBOLS: &[(&str, &str, &str)] = &[
    ("en", "USD", "$"),
    ("de", "USD", "$"),
    ("fr", "USD", "$US"),
    ("fr", "CAD", "$CA"),
    ("fr", "AUD", "$AU"),
    ("ru", "USD", "$"),
    ("ru", "RUB", "₽"),
    ("ja", "USD", "$"),
    ("ja", "JPY", "￥"),
    ("ja", "CNY", "元"),
];

const NARROW_CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "$"),
    ("CAD", "$"),
    ("CNY", "¥"),
    ("HKD", "$"),
    ("JPY", "¥"),
    ("MXN", "$"),
    ("NZD", "$"),
    ("RUB", "₽"),
    ("TWD", "$"),
    ("USD", "$"),
];

/// `(locale, code, one, other)`.
const CURRENCY_NAMES: &[(&str, &str, &str, &str)] = &[
    ("en", "USD", "US dollar", "US dollars"),
    ("en", "EUR", "euro", "euros"),
    ("en", "GBP", "British pound", "British pounds"),
    ("en", "JPY", "Japanese yen", "Japanese yen"),
    ("en", "CHF", "Swiss franc", "Swiss francs"),
    ("en", "CAD", "Canadian dollar", "Canadian dollars"),
    ("en", "CNY", "Chinese yuan", "Chinese yuan"),
    ("en", "RUB", "Russian ruble", "Russian rubles"),
    ("en", "INR", "Indian rupee", "Indian rupees"),
    ("de", "USD", "US-Dollar", "US-Dollar"),
    ("de", "EUR", "Euro", "Euro"),
    ("de", "GBP", "Britisches Pfund", "Britische Pfund"),
    ("de", "JPY", "Japanischer Yen", "Japanische Yen"),
    ("de", "CHF", "Schweizer Franken", "Schweizer Franken"),
    ("fr", "USD", "dollar des États-Unis", "dollars des États-Unis"),
    ("fr", "EUR", "euro", "euros"),
    ("fr", "GBP", "livre sterling", "livres sterling"),
    ("fr", "JPY", "yen japonais", "yens japonais"),
    ("fr", "CHF", "franc suisse", "francs suisses"),
    ("es", "USD", "dólar estadounidense", "dólares estadounidenses"),
    ("es", "EUR", "euro", "euros"),
    ("es", "GBP", "libra esterlina", "libras esterlinas"),
    ("es", "JPY", "yen", "yenes"),
    ("ja", "USD", "米ドル", "米ドル"),
    ("ja", "EUR", "ユーロ", "ユーロ"),
    ("ja", "JPY", "日本円", "日本円"),
];

fn lookup<'a>(table: &'a [(&'a str, &'a str)], code: &str) -> Option<&'a str> {
    table.iter().find(|(key, _)| *key == code).map(|(_, value)| *value)
}

fn currency_symbol(locale: &str, code: &str) -> Option<&'static str> {
    LOCAL_CURRENCY_SYMBOLS
        .iter()
        .find(|(lang, key, _)| *lang == locale && *key == code)
        .map(|(_, _, symbol)| *symbol)
        .or_else(|| lookup(CURRENCY_SYMBOLS, code))
}

pub fn currency_display(
    locale: &str,
    code: &str,
    width: UnitWidth,
    category: PluralCategory,
) -> Option<String> {
    if !TABLE_LOCALES.contains(&locale) {
        return None;
    }
    let display = match width {
        UnitWidth::IsoCode => Some(code),
        UnitWidth::Hidden => Some(""),
        UnitWidth::Short => Some(currency_symbol(locale, code).unwrap_or(code)),
        UnitWidth::Narrow => lookup(NARROW_CURRENCY_SYMBOLS, code)
            .or_else(|| currency_symbol(locale, code))
            .or(Some(code)),
        UnitWidth::FullName => CURRENCY_NAMES
            .iter()
            .find(|(lang, key, _, _)| *lang == locale && *key == code)
            .map(|(_, _, one, other)| if category_index(category) == 0 { *one } else { *other }),
    };
    display.map(str::to_string)
}

/// ISO 4217 minor-unit digits.
pub fn currency_digits(code: &str) -> u8 {
    match code {
        "CLP" | "ISK" | "JPY" | "KRW" | "UGX" | "VND" | "XAF" | "XOF" => 0,
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

// Units

/// `(unit, narrow, short one, short other, long one, long other)`.
type UnitTable = &'static [(&'static str, &'static str, &'static str, &'static str, &'static str, &'static str)];

const EN_UNITS: UnitTable = &[
    ("meter", "{0}m", "{0} m", "{0} m", "{0} meter", "{0} meters"),
    ("kilometer", "{0}km", "{0} km", "{0} km", "{0} kilometer", "{0} kilometers"),
    ("centimeter", "{0}cm", "{0} cm", "{0} cm", "{0} centimeter", "{0} centimeters"),
    ("millimeter", "{0}mm", "{0} mm", "{0} mm", "{0} millimeter", "{0} millimeters"),
    ("mile", "{0}mi", "{0} mi", "{0} mi", "{0} mile", "{0} miles"),
    ("foot", "{0}′", "{0} ft", "{0} ft", "{0} foot", "{0} feet"),
    ("inch", "{0}″", "{0} in", "{0} in", "{0} inch", "{0} inches"),
    ("kilogram", "{0}kg", "{0} kg", "{0} kg", "{0} kilogram", "{0} kilograms"),
    ("gram", "{0}g", "{0} g", "{0} g", "{0} gram", "{0} grams"),
    ("pound", "{0}lb", "{0} lb", "{0} lb", "{0} pound", "{0} pounds"),
    ("liter", "{0}L", "{0} L", "{0} L", "{0} liter", "{0} liters"),
    ("milliliter", "{0}mL", "{0} mL", "{0} mL", "{0} milliliter", "{0} milliliters"),
    ("year", "{0}y", "{0} yr", "{0} yrs", "{0} year", "{0} years"),
    ("month", "{0}m", "{0} mth", "{0} mths", "{0} month", "{0} months"),
    ("week", "{0}w", "{0} wk", "{0} wks", "{0} week", "{0} weeks"),
    ("day", "{0}d", "{0} day", "{0} days", "{0} day", "{0} days"),
    ("hour", "{0}h", "{0} hr", "{0} hr", "{0} hour", "{0} hours"),
    ("minute", "{0}m", "{0} min", "{0} min", "{0} minute", "{0} minutes"),
    ("second", "{0}s", "{0} sec", "{0} sec", "{0} second", "{0} seconds"),
    ("millisecond", "{0}ms", "{0} ms", "{0} ms", "{0} millisecond", "{0} milliseconds"),
    ("byte", "{0}B", "{0} byte", "{0} byte", "{0} byte", "{0} bytes"),
    ("kilobyte", "{0}kB", "{0} kB", "{0} kB", "{0} kilobyte", "{0} kilobytes"),
    ("megabyte", "{0}MB", "{0} MB", "{0} MB", "{0} megabyte", "{0} megabytes"),
    ("gigabyte", "{0}GB", "{0} GB", "{0} GB", "{0} gigabyte", "{0} gigabytes"),
    ("terabyte", "{0}TB", "{0} TB", "{0} TB", "{0} terabyte", "{0} terabytes"),
    ("celsius", "{0}°C", "{0}°C", "{0}°C", "{0} degree Celsius", "{0} degrees Celsius"),
    ("fahrenheit", "{0}°", "{0}°F", "{0}°F", "{0} degree Fahrenheit", "{0} degrees Fahrenheit"),
    ("kilometer-per-hour", "{0}km/h", "{0} km/h", "{0} km/h", "{0} kilometer per hour", "{0} kilometers per hour"),
    ("mile-per-hour", "{0}mph", "{0} mph", "{0} mph", "{0} mile per hour", "{0} miles per hour"),
    ("percent", "{0}%", "{0}%", "{0}%", "{0} percent", "{0} percent"),
];

const DE_UNITS: UnitTable = &[
    ("meter", "{0} m", "{0} m", "{0} m", "{0} Meter", "{0} Meter"),
    ("kilometer", "{0} km", "{0} km", "{0} km", "{0} Kilometer", "{0} Kilometer"),
    ("kilogram", "{0} kg", "{0} kg", "{0} kg", "{0} Kilogramm", "{0} Kilogramm"),
    ("gram", "{0} g", "{0} g", "{0} g", "{0} Gramm", "{0} Gramm"),
    ("liter", "{0} l", "{0} l", "{0} l", "{0} Liter", "{0} Liter"),
    ("year", "{0} J.", "{0} J.", "{0} J.", "{0} Jahr", "{0} Jahre"),
    ("month", "{0} M.", "{0} Mon.", "{0} Mon.", "{0} Monat", "{0} Monate"),
    ("week", "{0} W.", "{0} Wo.", "{0} Wo.", "{0} Woche", "{0} Wochen"),
    ("day", "{0} T.", "{0} Tg.", "{0} Tg.", "{0} Tag", "{0} Tage"),
    ("hour", "{0} Std.", "{0} Std.", "{0} Std.", "{0} Stunde", "{0} Stunden"),
    ("minute", "{0} Min.", "{0} Min.", "{0} Min.", "{0} Minute", "{0} Minuten"),
    ("second", "{0} Sek.", "{0} Sek.", "{0} Sek.", "{0} Sekunde", "{0} Sekunden"),
    ("celsius", "{0}°C", "{0} °C", "{0} °C", "{0} Grad Celsius", "{0} Grad Celsius"),
    ("kilometer-per-hour", "{0} km/h", "{0} km/h", "{0} km/h", "{0} Kilometer pro Stunde", "{0} Kilometer pro Stunde"),
];

const FR_UNITS: UnitTable = &[
    ("meter", "{0}m", "{0} m", "{0} m", "{0} mètre", "{0} mètres"),
    ("kilometer", "{0}km", "{0} km", "{0} km", "{0} kilomètre", "{0} kilomètres"),
    ("kilogram", "{0}kg", "{0} kg", "{0} kg", "{0} kilogramme", "{0} kilogrammes"),
    ("gram", "{0}g", "{0} g", "{0} g", "{0} gramme", "{0} grammes"),
    ("liter", "{0}l", "{0} l", "{0} l", "{0} litre", "{0} litres"),
    ("year", "{0}a", "{0} a", "{0} a", "{0} an", "{0} ans"),
    ("month", "{0}m.", "{0} m.", "{0} m.", "{0} mois", "{0} mois"),
    ("week", "{0}sem.", "{0} sem.", "{0} sem.", "{0} semaine", "{0} semaines"),
    ("day", "{0}j", "{0} j", "{0} j", "{0} jour", "{0} jours"),
    ("hour", "{0}h", "{0} h", "{0} h", "{0} heure", "{0} heures"),
    ("minute", "{0}min", "{0} min", "{0} min", "{0} minute", "{0} minutes"),
    ("second", "{0}s", "{0} s", "{0} s", "{0} seconde", "{0} secondes"),
    ("celsius", "{0}°C", "{0} °C", "{0} °C", "{0} degré Celsius", "{0} degrés Celsius"),
];

pub fn unit_pattern(
    locale: &str,
    unit: &str,
    width: UnitWidth,
    category: PluralCategory,
) -> Option<String> {
    let table = match locale {
        "en" => EN_UNITS,
        "de" => DE_UNITS,
        "fr" => FR_UNITS,
        _ => return None,
    };
    let &(_, narrow, short_one, short_other, long_one, long_other) =
        table.iter().find(|row| row.0 == unit)?;
    let one = category_index(category) == 0;
    let pattern = match width {
        UnitWidth::Narrow => narrow,
        UnitWidth::FullName if one => long_one,
        UnitWidth::FullName => long_other,
        UnitWidth::Hidden => "{0}",
        UnitWidth::Short | UnitWidth::IsoCode if one => short_one,
        UnitWidth::Short | UnitWidth::IsoCode => short_other,
    };
    Some(pattern.to_string())
}

// Lists

fn patterns(pair: &str, start: &str, middle: &str, end: &str) -> ListPatterns {
    ListPatterns {
        pair: pair.to_string(),
        start: start.to_string(),
        middle: middle.to_string(),
        end: end.to_string(),
    }
}

fn joined(word: &str) -> ListPatterns {
    let last = format!("{{0}} {word} {{1}}");
    patterns(&last, "{0}, {1}", "{0}, {1}", &last)
}

pub fn list_patterns(locale: &str, list_type: ListType, width: Width) -> Option<ListPatterns> {
    let list = match (locale, list_type, width) {
        ("en", ListType::Conjunction, Width::Long) => {
            patterns("{0} and {1}", "{0}, {1}", "{0}, {1}", "{0}, and {1}")
        }
        ("en", ListType::Conjunction, Width::Short) => {
            patterns("{0} & {1}", "{0}, {1}", "{0}, {1}", "{0}, & {1}")
        }
        ("en", ListType::Conjunction, Width::Narrow) => {
            patterns("{0}, {1}", "{0}, {1}", "{0}, {1}", "{0}, {1}")
        }
        ("en", ListType::Disjunction, _) => {
            patterns("{0} or {1}", "{0}, {1}", "{0}, {1}", "{0}, or {1}")
        }
        ("en", ListType::Unit, Width::Narrow) => patterns("{0} {1}", "{0} {1}", "{0} {1}", "{0} {1}"),
        ("en", ListType::Unit, _) => patterns("{0}, {1}", "{0}, {1}", "{0}, {1}", "{0}, {1}"),
        ("de", ListType::Conjunction, _) => joined("und"),
        ("de", ListType::Disjunction, _) => joined("oder"),
        ("fr", ListType::Conjunction, _) => joined("et"),
        ("fr", ListType::Disjunction, _) => joined("ou"),
        ("es", ListType::Conjunction, _) => joined("y"),
        ("es", ListType::Disjunction, _) => joined("o"),
        ("ru", ListType::Conjunction, _) => joined("и"),
        ("ru", ListType::Disjunction, _) => joined("или"),
        ("de", ListType::Unit, Width::Long) => joined("und"),
        ("fr", ListType::Unit, Width::Long) => joined("et"),
        ("es", ListType::Unit, Width::Long) => joined("y"),
        ("de" | "fr" | "es" | "ru", ListType::Unit, Width::Short) => {
            patterns("{0}, {1}", "{0}, {1}", "{0}, {1}", "{0}, {1}")
        }
        ("de" | "fr" | "es" | "ru", ListType::Unit, _) => {
            patterns("{0} {1}", "{0} {1}", "{0} {1}", "{0} {1}")
        }
        ("ja", ListType::Disjunction, _) => {
            patterns("{0}または{1}", "{0}、{1}", "{0}、{1}", "{0}、または{1}")
        }
        ("ja", ListType::Unit, _) => patterns("{0} {1}", "{0} {1}", "{0} {1}", "{0} {1}"),
        ("ja", ListType::Conjunction, _) => {
            patterns("{0}、{1}", "{0}、{1}", "{0}、{1}", "{0}、{1}")
        }
        _ => return None,
    };
    Some(list)
}

// Relative time

/// `(field, future one, future other, past one, past other)`.
type RelativeTable = &'static [(RelativeField, &'static str, &'static str, &'static str, &'static str)];

const EN_RELATIVE_LONG: RelativeTable = &[
    (RelativeField::Year, "in {0} year", "in {0} years", "{0} year ago", "{0} years ago"),
    (RelativeField::Quarter, "in {0} quarter", "in {0} quarters", "{0} quarter ago", "{0} quarters ago"),
    (RelativeField::Month, "in {0} month", "in {0} months", "{0} month ago", "{0} months ago"),
    (RelativeField::Week, "in {0} week", "in {0} weeks", "{0} week ago", "{0} weeks ago"),
    (RelativeField::Day, "in {0} day", "in {0} days", "{0} day ago", "{0} days ago"),
    (RelativeField::Hour, "in {0} hour", "in {0} hours", "{0} hour ago", "{0} hours ago"),
    (RelativeField::Minute, "in {0} minute", "in {0} minutes", "{0} minute ago", "{0} minutes ago"),
    (RelativeField::Second, "in {0} second", "in {0} seconds", "{0} second ago", "{0} seconds ago"),
];

const EN_RELATIVE_SHORT: RelativeTable = &[
    (RelativeField::Year, "in {0} yr.", "in {0} yr.", "{0} yr. ago", "{0} yr. ago"),
    (RelativeField::Quarter, "in {0} qtr.", "in {0} qtrs.", "{0} qtr. ago", "{0} qtrs. ago"),
    (RelativeField::Month, "in {0} mo.", "in {0} mo.", "{0} mo. ago", "{0} mo. ago"),
    (RelativeField::Week, "in {0} wk.", "in {0} wk.", "{0} wk. ago", "{0} wk. ago"),
    (RelativeField::Day, "in {0} day", "in {0} days", "{0} day ago", "{0} days ago"),
    (RelativeField::Hour, "in {0} hr.", "in {0} hr.", "{0} hr. ago", "{0} hr. ago"),
    (RelativeField::Minute, "in {0} min.", "in {0} min.", "{0} min. ago", "{0} min. ago"),
    (RelativeField::Second, "in {0} sec.", "in {0} sec.", "{0} sec. ago", "{0} sec. ago"),
];

const EN_RELATIVE_NARROW: RelativeTable = &[
    (RelativeField::Year, "in {0}y", "in {0}y", "{0}y ago", "{0}y ago"),
    (RelativeField::Quarter, "in {0}q", "in {0}q", "{0}q ago", "{0}q ago"),
    (RelativeField::Month, "in {0}mo", "in {0}mo", "{0}mo ago", "{0}mo ago"),
    (RelativeField::Week, "in {0}w", "in {0}w", "{0}w ago", "{0}w ago"),
    (RelativeField::Day, "in {0}d", "in {0}d", "{0}d ago", "{0}d ago"),
    (RelativeField::Hour, "in {0}h", "in {0}h", "{0}h ago", "{0}h ago"),
    (RelativeField::Minute, "in {0}m", "in {0}m", "{0}m ago", "{0}m ago"),
    (RelativeField::Second, "in {0}s", "in {0}s", "{0}s ago", "{0}s ago"),
];

const DE_RELATIVE: RelativeTable = &[
    (RelativeField::Year, "in {0} Jahr", "in {0} Jahren", "vor {0} Jahr", "vor {0} Jahren"),
    (RelativeField::Quarter, "in {0} Quartal", "in {0} Quartalen", "vor {0} Quartal", "vor {0} Quartalen"),
    (RelativeField::Month, "in {0} Monat", "in {0} Monaten", "vor {0} Monat", "vor {0} Monaten"),
    (RelativeField::Week, "in {0} Woche", "in {0} Wochen", "vor {0} Woche", "vor {0} Wochen"),
    (RelativeField::Day, "in {0} Tag", "in {0} Tagen", "vor {0} Tag", "vor {0} Tagen"),
    (RelativeField::Hour, "in {0} Stunde", "in {0} Stunden", "vor {0} Stunde", "vor {0} Stunden"),
    (RelativeField::Minute, "in {0} Minute", "in {0} Minuten", "vor {0} Minute", "vor {0} Minuten"),
    (RelativeField::Second, "in {0} Sekunde", "in {0} Sekunden", "vor {0} Sekunde", "vor {0} Sekunden"),
];

const FR_RELATIVE: RelativeTable = &[
    (RelativeField::Year, "dans {0} an", "dans {0} ans", "il y a {0} an", "il y a {0} ans"),
    (RelativeField::Quarter, "dans {0} trimestre", "dans {0} trimestres", "il y a {0} trimestre", "il y a {0} trimestres"),
    (RelativeField::Month, "dans {0} mois", "dans {0} mois", "il y a {0} mois", "il y a {0} mois"),
    (RelativeField::Week, "dans {0} semaine", "dans {0} semaines", "il y a {0} semaine", "il y a {0} semaines"),
    (RelativeField::Day, "dans {0} jour", "dans {0} jours", "il y a {0} jour", "il y a {0} jours"),
    (RelativeField::Hour, "dans {0} heure", "dans {0} heures", "il y a {0} heure", "il y a {0} heures"),
    (RelativeField::Minute, "dans {0} minute", "dans {0} minutes", "il y a {0} minute", "il y a {0} minutes"),
    (RelativeField::Second, "dans {0} seconde", "dans {0} secondes", "il y a {0} seconde", "il y a {0} secondes"),
];

const ES_RELATIVE: RelativeTable = &[
    (RelativeField::Year, "dentro de {0} año", "dentro de {0} años", "hace {0} año", "hace {0} años"),
    (RelativeField::Quarter, "dentro de {0} trimestre", "dentro de {0} trimestres", "hace {0} trimestre", "hace {0} trimestres"),
    (RelativeField::Month, "dentro de {0} mes", "dentro de {0} meses", "hace {0} mes", "hace {0} meses"),
    (RelativeField::Week, "dentro de {0} semana", "dentro de {0} semanas", "hace {0} semana", "hace {0} semanas"),
    (RelativeField::Day, "dentro de {0} día", "dentro de {0} días", "hace {0} día", "hace {0} días"),
    (RelativeField::Hour, "dentro de {0} hora", "dentro de {0} horas", "hace {0} hora", "hace {0} horas"),
    (RelativeField::Minute, "dentro de {0} minuto", "dentro de {0} minutos", "hace {0} minuto", "hace {0} minutos"),
    (RelativeField::Second, "dentro de {0} segundo", "dentro de {0} segundos", "hace {0} segundo", "hace {0} segundos"),
];

pub fn relative_time_pattern(
    locale: &str,
    field: RelativeField,
    width: Width,
    future: bool,
    category: PluralCategory,
) -> Option<String> {
    let one = category_index(category) == 0;
    if let RelativeField::Weekday(weekday) = field {
        if locale != "en" {
            return None;
        }
        let name = weekday_name(locale, weekday, NameWidth::Wide)?;
        let name = if one { name.to_string() } else { format!("{name}s") };
        return Some(if future { format!("in {{0}} {name}") } else { format!("{{0}} {name} ago") });
    }
    let table = match (locale, width) {
        ("en", Width::Long) => EN_RELATIVE_LONG,
        ("en", Width::Short) => EN_RELATIVE_SHORT,
        ("en", Width::Narrow) => EN_RELATIVE_NARROW,
        ("de", _) => DE_RELATIVE,
        ("fr", _) => FR_RELATIVE,
        ("es", _) => ES_RELATIVE,
        _ => return None,
    };
    let &(_, future_one, future_other, past_one, past_other) =
        table.iter().find(|row| row.0 == field)?;
    let pattern = match (future, one) {
        (true, true) => future_one,
        (true, false) => future_other,
        (false, true) => past_one,
        (false, false) => past_other,
    };
    Some(pattern.to_string())
}

const EN_RELATIVE_LITERALS: &[(RelativeField, i64, &str)] = &[
    (RelativeField::Year, -1, "last year"),
    (RelativeField::Year, 0, "this year"),
    (RelativeField::Year, 1, "next year"),
    (RelativeField::Quarter, -1, "last quarter"),
    (RelativeField::Quarter, 0, "this quarter"),
    (RelativeField::Quarter, 1, "next quarter"),
    (RelativeField::Month, -1, "last month"),
    (RelativeField::Month, 0, "this month"),
    (RelativeField::Month, 1, "next month"),
    (RelativeField::Week, -1, "last week"),
    (RelativeField::Week, 0, "this week"),
    (RelativeField::Week, 1, "next week"),
    (RelativeField::Day, -1, "yesterday"),
    (RelativeField::Day, 0, "today"),
    (RelativeField::Day, 1, "tomorrow"),
    (RelativeField::Hour, 0, "this hour"),
    (RelativeField::Minute, 0, "this minute"),
    (RelativeField::Second, 0, "now"),
];

const EN_RELATIVE_SHORT_LITERALS: &[(RelativeField, i64, &str)] = &[
    (RelativeField::Year, -1, "last yr."),
    (RelativeField::Year, 0, "this yr."),
    (RelativeField::Year, 1, "next yr."),
    (RelativeField::Quarter, -1, "last qtr."),
    (RelativeField::Quarter, 0, "this qtr."),
    (RelativeField::Quarter, 1, "next qtr."),
    (RelativeField::Month, -1, "last mo."),
    (RelativeField::Month, 0, "this mo."),
    (RelativeField::Month, 1, "next mo."),
    (RelativeField::Week, -1, "last wk."),
    (RelativeField::Week, 0, "this wk."),
    (RelativeField::Week, 1, "next wk."),
];

const DE_RELATIVE_LITERALS: &[(RelativeField, i64, &str)] = &[
    (RelativeField::Year, -1, "letztes Jahr"),
    (RelativeField::Year, 0, "dieses Jahr"),
    (RelativeField::Year, 1, "nächstes Jahr"),
    (RelativeField::Month, -1, "letzten Monat"),
    (RelativeField::Month, 0, "diesen Monat"),
    (RelativeField::Month, 1, "nächsten Monat"),
    (RelativeField::Week, -1, "letzte Woche"),
    (RelativeField::Week, 0, "diese Woche"),
    (RelativeField::Week, 1, "nächste Woche"),
    (RelativeField::Day, -2, "vorgestern"),
    (RelativeField::Day, -1, "gestern"),
    (RelativeField::Day, 0, "heute"),
    (RelativeField::Day, 1, "morgen"),
    (RelativeField::Day, 2, "übermorgen"),
    (RelativeField::Second, 0, "jetzt"),
];

const FR_RELATIVE_LITERALS: &[(RelativeField, i64, &str)] = &[
    (RelativeField::Year, -1, "l’année dernière"),
    (RelativeField::Year, 0, "cette année"),
    (RelativeField::Year, 1, "l’année prochaine"),
    (RelativeField::Month, -1, "le mois dernier"),
    (RelativeField::Month, 0, "ce mois-ci"),
    (RelativeField::Month, 1, "le mois prochain"),
    (RelativeField::Week, -1, "la semaine dernière"),
    (RelativeField::Week, 0, "cette semaine"),
    (RelativeField::Week, 1, "la semaine prochaine"),
    (RelativeField::Day, -2, "avant-hier"),
    (RelativeField::Day, -1, "hier"),
    (RelativeField::Day, 0, "aujourd’hui"),
    (RelativeField::Day, 1, "demain"),
    (RelativeField::Day, 2, "après-demain"),
    (RelativeField::Second, 0, "maintenant"),
];

const ES_RELATIVE_LITERALS: &[(RelativeField, i64, &str)] = &[
    (RelativeField::Year, -1, "el año pasado"),
    (RelativeField::Year, 0, "este año"),
    (RelativeField::Year, 1, "el próximo año"),
    (RelativeField::Month, -1, "el mes pasado"),
    (RelativeField::Month, 0, "este mes"),
    (RelativeField::Month, 1, "el próximo mes"),
    (RelativeField::Week, -1, "la semana pasada"),
    (RelativeField::Week, 0, "esta semana"),
    (RelativeField::Week, 1, "la próxima semana"),
    (RelativeField::Day, -2, "anteayer"),
    (RelativeField::Day, -1, "ayer"),
    (RelativeField::Day, 0, "hoy"),
    (RelativeField::Day, 1, "mañana"),
    (RelativeField::Day, 2, "pasado mañana"),
    (RelativeField::Second, 0, "ahora"),
];

pub fn relative_time_literal(
    locale: &str,
    field: RelativeField,
    width: Width,
    offset: i64,
) -> Option<String> {
    if let RelativeField::Weekday(weekday) = field {
        if locale != "en" {
            return None;
        }
        let name = weekday_name(locale, weekday, NameWidth::Wide)?;
        let phrase = match offset {
            -1 => "last",
            0 => "this",
            1 => "next",
            _ => return None,
        };
        return Some(format!("{phrase} {name}"));
    }
    let find = |table: &[(RelativeField, i64, &'static str)]| {
        table
            .iter()
            .find(|(key, value, _)| *key == field && *value == offset)
            .map(|(_, _, phrase)| phrase.to_string())
    };
    match (locale, width) {
        ("en", Width::Long) => find(EN_RELATIVE_LITERALS),
        ("en", _) => find(EN_RELATIVE_SHORT_LITERALS).or_else(|| find(EN_RELATIVE_LITERALS)),
        ("de", _) => find(DE_RELATIVE_LITERALS),
        ("fr", _) => find(FR_RELATIVE_LITERALS),
        ("es", _) => find(ES_RELATIVE_LITERALS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_rows_by_magnitude() {
        let short = |locale, magnitude| compact_pattern(locale, magnitude, false, PluralCategory::Other);
        assert_eq!(short("en", 2), None);
        assert_eq!(short("en", 4).map(|p| (p.exponent, p.pattern)), Some((3, "{0}K".to_string())));
        assert_eq!(short("en", 16).map(|p| p.exponent), Some(12));
        assert_eq!(short("de", 4), None);
        assert_eq!(short("de", 7).map(|p| p.exponent), Some(6));
        assert_eq!(short("ja", 5).map(|p| p.exponent), Some(4));
    }

    #[test]
    fn test_currency_widths() {
        let display = |locale, code, width| currency_display(locale, code, width, PluralCategory::Other);
        assert_eq!(display("en", "USD", UnitWidth::Short).as_deref(), Some("$"));
        assert_eq!(display("fr", "USD", UnitWidth::Short).as_deref(), Some("$US"));
        assert_eq!(display("en", "CAD", UnitWidth::Narrow).as_deref(), Some("$"));
        assert_eq!(display("en", "XYZ", UnitWidth::Short).as_deref(), Some("XYZ"));
        assert_eq!(display("en", "EUR", UnitWidth::FullName).as_deref(), Some("euros"));
        assert_eq!(display("pl", "EUR", UnitWidth::Short), None);
        assert_eq!(currency_digits("JPY"), 0);
        assert_eq!(currency_digits("KWD"), 3);
        assert_eq!(currency_digits("EUR"), 2);
    }

    #[test]
    fn test_date_names() {
        assert_eq!(month_name("en", 1, NameWidth::Wide), Some("January"));
        assert_eq!(month_name("en", 13, NameWidth::Wide), None);
        assert_eq!(month_name("en", 0, NameWidth::Wide), None);
        assert_eq!(weekday_name("de", Weekday::Mon, NameWidth::Wide), Some("Montag"));
        assert_eq!(skeleton_pattern("en", "yMMMd"), Some("MMM d, y"));
    }

    #[test]
    fn test_weekday_relative_patterns_are_generated() {
        let field = RelativeField::Weekday(Weekday::Fri);
        assert_eq!(
            relative_time_pattern("en", field, Width::Long, false, PluralCategory::Other).as_deref(),
            Some("{0} Fridays ago")
        );
        assert_eq!(relative_time_literal("en", field, Width::Long, 1).as_deref(), Some("next Friday"));
    }
}
