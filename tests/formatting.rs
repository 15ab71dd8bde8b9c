use std::sync::Arc;

use icu_message_format::{
    Arguments, BuiltinLocaleData, DataKind, FormatError, FormatterOptions, LocaleData, MessageFormatter, PluralCategory,
    PluralOperands, TagRegistry, Value, params,
};

fn english() -> MessageFormatter {
    MessageFormatter::new("en", FormatterOptions::default()).expect("en has data")
}

/// Delegates to the builtin data but only admits the listed locales.
struct OnlyLocales(&'static [&'static str]);

impl LocaleData for OnlyLocales {
    fn has_data(&self, locale: &str, kind: DataKind) -> bool {
        self.0.contains(&locale) && BuiltinLocaleData.has_data(locale, kind)
    }

    fn plural_category(&self, locale: &str, operands: &PluralOperands, ordinal: bool) -> Option<PluralCategory> {
        BuiltinLocaleData.plural_category(locale, operands, ordinal)
    }
}

#[test]
fn escaped_quote_unescapes_once() {
    let result = english().format_message("It''s a test", &Arguments::new());
    assert_eq!(result, Ok("It's a test".to_string()));
}

#[test]
fn quoted_pound_is_literal_in_plural_body() {
    let formatter = english();
    assert_eq!(
        formatter.format_message("{n, plural, other {'#' x}}", &params!("n" => 3)),
        Ok("# x".to_string())
    );
    assert_eq!(
        formatter.format_message("{n, plural, one {# '#'} other {# items, rank '#'1}}", &params!("n" => 4)),
        Ok("4 items, rank #1".to_string())
    );
}

#[test]
fn exact_match_precedes_category() {
    let pattern = "{n, plural, =1 {exactly one} one {one item} other {other}}";
    assert_eq!(
        english().format_message(pattern, &params!("n" => 1)),
        Ok("exactly one".to_string())
    );
}

#[test]
fn offset_applies_to_pound_only() {
    let formatter = english();
    let pattern = "{count, plural, offset:2 =5 {five} other {# more}}";
    assert_eq!(formatter.format_message(pattern, &params!("count" => 5)), Ok("five".to_string()));
    assert_eq!(formatter.format_message(pattern, &params!("count" => 6)), Ok("4 more".to_string()));
    assert_eq!(
        formatter.format_message("{count, plural, offset:2 other {# more}}", &params!("count" => 5)),
        Ok("3 more".to_string())
    );
}

#[test]
fn missing_other_only_fails_when_needed() {
    let formatter = english();
    let pattern = "{count, plural, one {# item}}";
    let err = formatter
        .format_message(pattern, &params!("count" => 5))
        .expect_err("5 has no case");
    assert!(err.to_string().contains("'other' option not found"));
    assert_eq!(formatter.format_message(pattern, &params!("count" => 1)), Ok("1 item".to_string()));
}

#[test]
fn locale_fallback_ordering() {
    let data = Arc::new(OnlyLocales(&["en"]));
    let formatter = MessageFormatter::with_data("en-US", FormatterOptions::default(), data.clone())
        .expect("en-US falls back to en");
    assert_eq!(formatter.locale().for_kind(data.as_ref(), DataKind::Plurals), "en");
    assert_eq!(
        formatter.format_message("{n, plural, one {# day} other {# days}}", &params!("n" => 1)),
        Ok("1 day".to_string())
    );

    let unknown = MessageFormatter::with_data("xx-YY", FormatterOptions::default(), data.clone())
        .expect("fallback has data");
    assert_eq!(unknown.locale().primary(), "en");

    let none = MessageFormatter::with_data(
        "xx-YY",
        FormatterOptions::default().with_fallback_locale("zz"),
        Arc::new(OnlyLocales(&[])),
    );
    assert!(none.is_err());
}

#[test]
fn regional_locale_uses_parent_data() {
    let formatter = MessageFormatter::new("de-AT", FormatterOptions::default()).expect("de has data");
    assert_eq!(
        formatter.format_message("{n, number}", &params!("n" => 1234.5)),
        Ok("1.234,5".to_string())
    );
    assert_eq!(
        formatter.format_message("{xs, list}", &params!("xs" => Value::List(vec!["a".into(), "b".into()]))),
        Ok("a und b".to_string())
    );
}

#[test]
fn tag_nesting_and_mismatch() {
    let tags = TagRegistry::new()
        .register("a", |children: &str| format!("[{children}]"))
        .register("b", |children: &str| format!("({children})"));
    let formatter = english().with_tags(tags);
    assert_eq!(formatter.format_message("<a><b>x</b></a>", &Arguments::new()), Ok("[(x)]".to_string()));
    assert!(matches!(
        formatter.format_message("<bold>text</italic>", &Arguments::new()),
        Err(FormatError::Syntax(_))
    ));
}

#[test]
fn skeletons() {
    let formatter = english();
    assert_eq!(
        formatter.format_message("{v, number, ::percent .00}", &params!("v" => 0.1234)),
        Ok("12.34%".to_string())
    );
    let negative = formatter
        .format_message("{v, number, ::sign-never}", &params!("v" => -42))
        .expect("formats");
    assert!(!negative.contains('-'));
}

#[test]
fn three_level_nesting_scopes_pound() {
    let pattern = "{n, plural, \
        one {{g, select, female {{r, select, admin {# admin she} other {# she}}} other {# they}}} \
        other {{g, select, female {{r, select, admin {# admins her} other {# her}}} other {# them}}}}";
    let formatter = english();
    let cases = [
        (1, "female", "admin", "# admin she"),
        (1, "male", "admin", "# they"),
        (3, "female", "admin", "# admins her"),
        (3, "female", "user", "# her"),
        (3, "x", "user", "# them"),
    ];
    for (n, g, r, expected) in cases {
        let result = formatter.format_message(pattern, &params!("n" => n, "g" => g, "r" => r));
        assert_eq!(result.as_deref(), Ok(expected), "n={n} g={g} r={r}");
    }

    let scoped = "{n, plural, other {# {m, plural, other {# inner}} # outer}}";
    assert_eq!(
        formatter.format_message(scoped, &params!("n" => 2, "m" => 9)),
        Ok("2 9 inner 2 outer".to_string())
    );
}

#[test]
fn concurrent_formatting_is_isolated() {
    let formatter = english();
    let pattern = "{name} has {n, plural, one {# message} other {# messages}}";
    std::thread::scope(|scope| {
        for thread in 0..8i64 {
            let formatter = &formatter;
            scope.spawn(move || {
                for i in 0..200i64 {
                    let n = thread * 1000 + i;
                    let name = format!("user{thread}");
                    let result = formatter
                        .format_message(pattern, &params!("name" => name.as_str(), "n" => n))
                        .expect("formats");
                    let noun = if n == 1 { "message" } else { "messages" };
                    let number = formatter
                        .format_message("{n, number}", &params!("n" => n))
                        .expect("formats");
                    assert_eq!(result, format!("{name} has {number} {noun}"));
                }
            });
        }
    });
}

#[test]
fn html_and_complex_entry_points() {
    let formatter = english();
    let args = params!("who" => serde_json::json!({"name": "<Ann & Bo>"}));
    assert_eq!(
        formatter.format_complex_message("Hi {who__name}", &args),
        Ok("Hi <Ann & Bo>".to_string())
    );
    assert_eq!(
        formatter.format_html_message("<em>{x}</em>", &params!("x" => "a<b")),
        Ok("<em>a&lt;b</em>".to_string())
    );
}
