use std::sync::Arc;

use thiserror::Error;

use crate::builtins::Builtins;
use crate::cache::PatternCache;
use crate::datetime::{DateFormatter, DateKind, parse_date_argument};
use crate::extensions::{escape_html, flatten_arguments};
use crate::locale::{LocaleError, ResolvedLocale};
use crate::locale_data::{BuiltinLocaleData, DataKind, LocaleData};
use crate::number::NumberFormatter;
use crate::operands::{PluralOperands, category_of};
use crate::parser::{DEFAULT_MAX_DEPTH, ParseError, ParseErrorKind};
use crate::registry::{FormatterRegistry, TagRegistry};
use crate::types::{
    Arguments, FormatterCall, Message, MessageElement, PluralCategory, PluralExpression,
    PluralSelector, SelectExpression, TagElement, Value,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Syntax(ParseError),
    #[error("{construct}: 'other' option not found")]
    MissingOther { construct: &'static str },
    #[error("missing required variable '{name}'")]
    MissingVariable { name: String },
    #[error("pattern nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl From<ParseError> for FormatError {
    fn from(error: ParseError) -> Self {
        match error.kind {
            ParseErrorKind::NestingTooDeep { limit } => FormatError::NestingTooDeep { limit },
            ParseErrorKind::Syntax | ParseErrorKind::Tag => FormatError::Syntax(error),
        }
    }
}

/// Settings fixed when a [`MessageFormatter`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Last entry of every locale chain.
    pub fallback_locale: String,
    /// Fail on missing or null variables instead of rendering nothing.
    pub require_all_variables: bool,
    /// Joins nested keys in [`MessageFormatter::format_complex_message`].
    pub nested_key_separator: String,
    /// Applies to parsing and evaluation alike.
    pub max_nesting_depth: usize,
    /// ISO 4217 code used by `{x, number, currency}`.
    pub currency: String,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            fallback_locale: "en".to_string(),
            require_all_variables: false,
            nested_key_separator: "__".to_string(),
            max_nesting_depth: DEFAULT_MAX_DEPTH,
            currency: "USD".to_string(),
        }
    }
}

impl FormatterOptions {
    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    pub fn with_require_all_variables(mut self, require: bool) -> Self {
        self.require_all_variables = require;
        self
    }

    pub fn with_nested_key_separator(mut self, separator: impl Into<String>) -> Self {
        self.nested_key_separator = separator.into();
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into().to_ascii_uppercase();
        self
    }
}

/// Formats patterns for one locale.
///
/// A formatter is immutable once built and can be shared across threads;
/// parsed patterns are cached for its whole lifetime.
pub struct MessageFormatter {
    data: Arc<dyn LocaleData>,
    locale: ResolvedLocale,
    options: FormatterOptions,
    formatters: FormatterRegistry,
    tags: TagRegistry,
    cache: PatternCache,
}

impl MessageFormatter {
    /// Builds a formatter backed by [`BuiltinLocaleData`].
    pub fn new(locale: &str, options: FormatterOptions) -> Result<Self, LocaleError> {
        Self::with_data(locale, options, Arc::new(BuiltinLocaleData::new()))
    }

    /// Fails when neither `locale`, its parents, nor the fallback locale has any data.
    pub fn with_data(
        locale: &str,
        options: FormatterOptions,
        data: Arc<dyn LocaleData>,
    ) -> Result<Self, LocaleError> {
        let locale = ResolvedLocale::new(locale, &options.fallback_locale, data.as_ref())?;
        Ok(Self {
            data,
            locale,
            options,
            formatters: FormatterRegistry::new(),
            tags: TagRegistry::new(),
            cache: PatternCache::new(),
        })
    }

    pub fn with_formatters(mut self, formatters: FormatterRegistry) -> Self {
        self.formatters = formatters;
        self
    }

    pub fn with_tags(mut self, tags: TagRegistry) -> Self {
        self.tags = tags;
        self
    }

    pub fn locale(&self) -> &ResolvedLocale {
        &self.locale
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Parses `pattern`, reusing the cached tree when it was seen before.
    pub fn parse(&self, pattern: &str) -> Result<Arc<Message>, FormatError> {
        Ok(self.cache.get_or_parse(pattern, self.options.max_nesting_depth)?)
    }

    pub fn format_message(&self, pattern: &str, arguments: &Arguments) -> Result<String, FormatError> {
        let message = self.parse(pattern)?;
        self.format_parsed(&message, arguments)
    }

    /// Like [`format_message`](Self::format_message), with nested map
    /// arguments addressable as `outer__inner`.
    pub fn format_complex_message(
        &self,
        pattern: &str,
        arguments: &Arguments,
    ) -> Result<String, FormatError> {
        let flat = flatten_arguments(arguments, &self.options.nested_key_separator);
        self.format_message(pattern, &flat)
    }

    /// Escapes argument values for HTML and keeps unhandled tags as markup.
    pub fn format_html_message(
        &self,
        pattern: &str,
        arguments: &Arguments,
    ) -> Result<String, FormatError> {
        let message = self.parse(pattern)?;
        self.evaluator(arguments, true).render(&message, None, 0)
    }

    /// Evaluates an already parsed message.
    pub fn format_parsed(&self, message: &Message, arguments: &Arguments) -> Result<String, FormatError> {
        self.evaluator(arguments, false).render(message, None, 0)
    }

    fn evaluator<'a>(&'a self, arguments: &'a Arguments, html: bool) -> Evaluator<'a> {
        let data = self.data.as_ref();
        let numbers = NumberFormatter::new(data, &self.locale, &self.options.currency);
        Evaluator {
            formatter: self,
            data,
            arguments,
            html,
            numbers,
            builtins: Builtins::new(data, &self.locale, numbers),
            dates: DateFormatter::new(data, &self.locale),
        }
    }
}

static NULL: Value = Value::Null;

/// One evaluation of a message against one argument set.
struct Evaluator<'a> {
    formatter: &'a MessageFormatter,
    data: &'a dyn LocaleData,
    arguments: &'a Arguments,
    html: bool,
    numbers: NumberFormatter<'a>,
    builtins: Builtins<'a>,
    dates: DateFormatter<'a>,
}

impl Evaluator<'_> {
    fn render(&self, message: &Message, pound: Option<&PluralOperands>, depth: usize) -> Result<String, FormatError> {
        let limit = self.formatter.options.max_nesting_depth;
        if depth > limit {
            return Err(FormatError::NestingTooDeep { limit });
        }
        let mut result = String::new();
        for element in &message.elements {
            match element {
                MessageElement::Text(text) => result.push_str(text),
                MessageElement::Parameter(name) => {
                    if let Some(value) = self.lookup(name)? {
                        result.push_str(&self.escaped(value.to_plain_string()));
                    }
                }
                MessageElement::Pound => match pound {
                    Some(operands) => result.push_str(&self.numbers.format_default(operands)),
                    None => result.push('#'),
                },
                MessageElement::Formatter(call) => {
                    let formatted = self.format_call(call)?;
                    result.push_str(&self.escaped(formatted));
                }
                MessageElement::Plural(plural) => result.push_str(&self.plural(plural, depth)?),
                MessageElement::Select(select) => result.push_str(&self.select(select, depth)?),
                MessageElement::Tag(tag) => result.push_str(&self.tag(tag, pound, depth)?),
            }
        }
        Ok(result)
    }

    /// The non-null value of `name`; an error when variables are required.
    fn lookup(&self, name: &str) -> Result<Option<&Value>, FormatError> {
        match self.arguments.get(name) {
            Some(value) if !value.is_null() => Ok(Some(value)),
            _ if self.formatter.options.require_all_variables => Err(FormatError::MissingVariable {
                name: name.to_string(),
            }),
            _ => Ok(None),
        }
    }

    fn escaped(&self, text: String) -> String {
        if self.html { escape_html(&text) } else { text }
    }

    fn format_call(&self, call: &FormatterCall) -> Result<String, FormatError> {
        let value = self.lookup(&call.parameter)?.unwrap_or(&NULL);
        let style = call.style.as_ref();
        let text_style = style.and_then(|style| style.as_text());
        let name = call.formatter.to_ascii_lowercase();
        let formatted = match name.as_str() {
            "number" => self.builtins.number(value, style),
            "date" | "time" | "datetime" => {
                let kind = DateKind::from_formatter(&name).unwrap_or(DateKind::DateTime);
                match parse_date_argument(value) {
                    Some(date) => self.dates.format(&date, kind, style),
                    None => {
                        if !value.is_null() {
                            tracing::warn!(parameter = %call.parameter, "unparseable date argument");
                        }
                        value.to_plain_string()
                    }
                }
            }
            "list" => self.builtins.list(value, text_style),
            "duration" => self.builtins.duration(value, text_style),
            "relativetime" => self.builtins.relative_time(value, text_style),
            "numberrange" => self.builtins.number_range(value, style),
            _ => match self.formatter.formatters.get(&name) {
                Some(custom) => custom.format(value, text_style, self.formatter.locale.primary()),
                None => {
                    tracing::warn!(formatter = %call.formatter, "no formatter registered, rendering plain value");
                    value.to_plain_string()
                }
            },
        };
        Ok(formatted)
    }

    fn plural(&self, plural: &PluralExpression, depth: usize) -> Result<String, FormatError> {
        let operands = self
            .lookup(&plural.parameter)?
            .map_or_else(PluralOperands::zero, PluralOperands::from_value);
        let offset = operands.with_offset(plural.offset);

        let exact = plural.cases.iter().find(|case| {
            matches!(&case.selector, PluralSelector::Exact(exact) if exact.same_value(&operands))
        });
        let case = match exact {
            Some(case) => Some(case),
            None => {
                let locale = self.formatter.locale.for_kind(self.data, DataKind::Plurals);
                let category = category_of(self.data, locale, &offset, plural.ordinal);
                tracing::trace!(
                    parameter = %plural.parameter,
                    category = category.as_str(),
                    ordinal = plural.ordinal,
                    "plural category selected"
                );
                let matching = |wanted: PluralCategory| {
                    plural
                        .cases
                        .iter()
                        .find(|case| case.selector == PluralSelector::Category(wanted))
                };
                matching(category).or_else(|| matching(PluralCategory::Other))
            }
        };
        let Some(case) = case else {
            return Err(FormatError::MissingOther {
                construct: plural.construct_name(),
            });
        };
        self.render(&case.message, Some(&offset), depth + 1)
    }

    fn select(&self, select: &SelectExpression, depth: usize) -> Result<String, FormatError> {
        let key = self
            .lookup(&select.parameter)?
            .map(Value::to_plain_string)
            .unwrap_or_default();
        let case = select
            .cases
            .iter()
            .find(|case| case.selector == key)
            .or_else(|| select.cases.iter().find(|case| case.selector == "other"));
        let Some(case) = case else {
            return Err(FormatError::MissingOther { construct: "select" });
        };
        self.render(&case.message, None, depth + 1)
    }

    fn tag(&self, tag: &TagElement, pound: Option<&PluralOperands>, depth: usize) -> Result<String, FormatError> {
        let children = self.render(&tag.children, pound, depth + 1)?;
        if let Some(handler) = self.formatter.tags.get(&tag.name) {
            return Ok(handler.render(&children));
        }
        if !self.html {
            return Ok(children);
        }
        let name = &tag.name;
        let attributes = &tag.attributes;
        Ok(if tag.self_closing {
            format!("<{name}{attributes}/>")
        } else {
            format!("<{name}{attributes}>{children}</{name}>")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::types::{PluralCase, SelectCase};

    fn english() -> MessageFormatter {
        MessageFormatter::new("en", FormatterOptions::default()).expect("en has data")
    }

    fn format(pattern: &str, arguments: Arguments) -> Result<String, FormatError> {
        english().format_message(pattern, &arguments)
    }

    fn text(s: &str) -> Message {
        Message::new(vec![MessageElement::Text(s.to_string())])
    }

    #[test]
    fn test_format_text_only() {
        let message = text("Hello world");
        let result = english().format_parsed(&message, &params!());
        assert_eq!(result, Ok("Hello world".to_string()));
    }

    #[test]
    fn test_format_parameters() {
        let message = Message::new(vec![
            MessageElement::Text("Hello ".to_string()),
            MessageElement::Parameter("firstName".to_string()),
            MessageElement::Text(" ".to_string()),
            MessageElement::Parameter("lastName".to_string()),
            MessageElement::Text("!".to_string()),
        ]);
        let result = english().format_parsed(
            &message,
            &params!("firstName" => "Alice", "lastName" => "Johnson"),
        );
        assert_eq!(result, Ok("Hello Alice Johnson!".to_string()));
    }

    #[test]
    fn test_missing_parameter_renders_empty() {
        assert_eq!(format("Hello {name}!", params!()), Ok("Hello !".to_string()));
        assert_eq!(format("[{name}]", params!("name" => Value::Null)), Ok("[]".to_string()));
    }

    #[test]
    fn test_missing_parameter_strict() {
        let strict = MessageFormatter::new("en", FormatterOptions::default().with_require_all_variables(true))
            .expect("en has data");
        let result = strict.format_message("{greeting} {name}", &params!("name" => "Bo"));
        assert_eq!(
            result,
            Err(FormatError::MissingVariable {
                name: "greeting".to_string()
            })
        );
        let plural = strict.format_message("{n, plural, other {#}}", &params!());
        assert!(matches!(plural, Err(FormatError::MissingVariable { name }) if name == "n"));
    }

    #[test]
    fn test_format_plural() {
        let plural_expr = PluralExpression {
            parameter: "count".to_string(),
            offset: 0,
            ordinal: false,
            cases: vec![
                PluralCase {
                    selector: PluralSelector::Category(PluralCategory::One),
                    message: text("1 item"),
                },
                PluralCase {
                    selector: PluralSelector::Category(PluralCategory::Other),
                    message: Message::new(vec![MessageElement::Pound, MessageElement::Text(" items".to_string())]),
                },
            ],
        };
        let message = Message::new(vec![
            MessageElement::Text("You have ".to_string()),
            MessageElement::Plural(plural_expr),
            MessageElement::Text(" in your cart.".to_string()),
        ]);
        let formatter = english();
        assert_eq!(
            formatter.format_parsed(&message, &params!("count" => 1)),
            Ok("You have 1 item in your cart.".to_string())
        );
        assert_eq!(
            formatter.format_parsed(&message, &params!("count" => 1234)),
            Ok("You have 1,234 items in your cart.".to_string())
        );
    }

    #[test]
    fn test_exact_match_wins_over_category() {
        let pattern = "{n, plural, =1 {exactly one} one {one item} other {other}}";
        assert_eq!(format(pattern, params!("n" => 1)), Ok("exactly one".to_string()));
        assert_eq!(format(pattern, params!("n" => "1.0")), Ok("exactly one".to_string()));
        assert_eq!(format(pattern, params!("n" => 2)), Ok("other".to_string()));
    }

    #[test]
    fn test_exact_match_beyond_float_precision() {
        let pattern = "{n, plural, =9007199254740993 {exact} other {other}}";
        assert_eq!(format(pattern, params!("n" => 9_007_199_254_740_992i64)), Ok("other".to_string()));
        assert_eq!(format(pattern, params!("n" => 9_007_199_254_740_993i64)), Ok("exact".to_string()));
        assert_eq!(
            format("{n, plural, =0.5 {half} other {other}}", params!("n" => "0.50")),
            Ok("half".to_string())
        );
    }

    #[test]
    fn test_offset() {
        let pattern = "{count, plural, offset:2 =2 {just us} one {us and one more} other {us and # more}}";
        assert_eq!(format(pattern, params!("count" => 2)), Ok("just us".to_string()));
        assert_eq!(format(pattern, params!("count" => 3)), Ok("us and one more".to_string()));
        assert_eq!(format(pattern, params!("count" => 5)), Ok("us and 3 more".to_string()));
    }

    #[test]
    fn test_missing_other() {
        let pattern = "{count, plural, one {# item}}";
        let err = format(pattern, params!("count" => 5)).expect_err("no case matches 5");
        assert_eq!(err, FormatError::MissingOther { construct: "plural" });
        assert!(err.to_string().contains("'other' option not found"));
        assert_eq!(format(pattern, params!("count" => 1)), Ok("1 item".to_string()));

        let select = format("{g, select, a {A}}", params!("g" => "b")).expect_err("no case matches");
        assert!(select.to_string().starts_with("select:"));
    }

    #[test]
    fn test_plural_uses_locale_rules() {
        let pattern = "{n, plural, one {# файл} few {# файла} many {# файлов} other {# файла}}";
        let russian = MessageFormatter::new("ru", FormatterOptions::default()).expect("ru has data");
        let render = |n: i64| russian.format_message(pattern, &params!("n" => n));
        assert_eq!(render(1), Ok("1 файл".to_string()));
        assert_eq!(render(3), Ok("3 файла".to_string()));
        assert_eq!(render(11), Ok("11 файлов".to_string()));
        assert_eq!(render(21), Ok("21 файл".to_string()));
    }

    #[test]
    fn test_fraction_digits_affect_category() {
        let pattern = "{n, plural, one {one} other {other}}";
        assert_eq!(format(pattern, params!("n" => "1")), Ok("one".to_string()));
        assert_eq!(format(pattern, params!("n" => "1.0")), Ok("other".to_string()));
        assert_eq!(format(pattern, params!("n" => "abc")), Ok("other".to_string()));
    }

    #[test]
    fn test_selectordinal() {
        let pattern = "{n, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}";
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 22, 103]
            .into_iter()
            .map(|n| format(pattern, params!("n" => n)).expect("formats"))
            .collect();
        assert_eq!(rendered, ["1st", "2nd", "3rd", "4th", "11th", "22nd", "103rd"]);
    }

    #[test]
    fn test_format_select() {
        let select_expr = SelectExpression {
            parameter: "gender".to_string(),
            cases: vec![
                SelectCase {
                    selector: "male".to_string(),
                    message: text("He likes this."),
                },
                SelectCase {
                    selector: "female".to_string(),
                    message: text("She likes this."),
                },
                SelectCase {
                    selector: "other".to_string(),
                    message: text("They like this."),
                },
            ],
        };
        let message = Message::new(vec![MessageElement::Select(select_expr)]);
        let formatter = english();
        let render = |gender: &str| formatter.format_parsed(&message, &params!("gender" => gender));
        assert_eq!(render("male"), Ok("He likes this.".to_string()));
        assert_eq!(render("female"), Ok("She likes this.".to_string()));
        assert_eq!(render("nonbinary"), Ok("They like this.".to_string()));
    }

    #[test]
    fn test_nested_constructs_scope_pound() {
        let pattern = "{n, plural, one {{g, select, f {her # #} other {their # #}}} other {# {g, select, f {hers} other {{k, select, x {# x} other {deep}}}}}}";
        assert_eq!(format(pattern, params!("n" => 1, "g" => "f")), Ok("her # #".to_string()));
        assert_eq!(format(pattern, params!("n" => 4, "g" => "m", "k" => "x")), Ok("4 # x".to_string()));
        assert_eq!(format(pattern, params!("n" => 4, "g" => "m", "k" => "y")), Ok("4 deep".to_string()));
    }

    #[test]
    fn test_nested_plurals_use_their_own_value() {
        let pattern = "{a, plural, other {# and {b, plural, other {#}}}}";
        assert_eq!(format(pattern, params!("a" => 1, "b" => 7)), Ok("1 and 7".to_string()));
    }

    #[test]
    fn test_number_formatter_styles() {
        let args = params!("n" => 1234.5, "r" => 0.1234, "p" => "19.99");
        assert_eq!(format("{n, number}", args.clone()), Ok("1,234.5".to_string()));
        assert_eq!(format("{n, number, integer}", args.clone()), Ok("1,234".to_string()));
        assert_eq!(format("{r, number, ::percent .00}", args.clone()), Ok("12.34%".to_string()));
        assert_eq!(format("{p, number, currency}", args.clone()), Ok("$19.99".to_string()));
        assert_eq!(format("{p, number, currency/EUR}", args.clone()), Ok("€19.99".to_string()));
        assert_eq!(format("{n, number, ::sign-never}", params!("n" => -42)), Ok("42".to_string()));
        assert_eq!(format("{n, number, ::bogus-token}", args.clone()), Ok("1,234.5 bogus-token".to_string()));
        assert_eq!(
            format("{r, number, ::percent bogus-token}", params!("r" => 0.5)),
            Ok("50% bogus-token".to_string())
        );
    }

    #[test]
    fn test_default_currency_option() {
        let euros = MessageFormatter::new("en", FormatterOptions::default().with_currency("eur"))
            .expect("en has data");
        let result = euros.format_message("{p, number, currency}", &params!("p" => 3));
        assert_eq!(result, Ok("€3.00".to_string()));
    }

    #[test]
    fn test_date_formatters() {
        let args = params!("d" => "2024-03-05T14:07:09");
        assert_eq!(format("{d, date}", args.clone()), Ok("Mar 5, 2024".to_string()));
        assert_eq!(format("{d, time, short}", args.clone()), Ok("2:07 PM".to_string()));
        assert_eq!(format("{d, date, ::yMMMd}", args.clone()), Ok("Mar 5, 2024".to_string()));
        assert_eq!(format("{d, date, yyyy}", args), Ok("2024".to_string()));
        assert_eq!(format("{d, date}", params!("d" => "whenever")), Ok("whenever".to_string()));
    }

    #[test]
    fn test_other_builtins() {
        let args = params!(
            "xs" => Value::List(vec!["a".into(), "b".into(), "c".into()]),
            "days" => -1,
            "range" => Value::List(vec![3.into(), 5.into()]),
            "secs" => 3725,
        );
        assert_eq!(format("{xs, list}", args.clone()), Ok("a, b, and c".to_string()));
        assert_eq!(format("{days, relativeTime, day auto}", args.clone()), Ok("yesterday".to_string()));
        assert_eq!(format("{range, numberRange}", args.clone()), Ok("3–5".to_string()));
        assert_eq!(format("{secs, duration}", args), Ok("1:02:05".to_string()));
    }

    #[test]
    fn test_custom_formatters() {
        let formatters = FormatterRegistry::new().register(
            "Shout",
            |value: &Value, style: Option<&str>, locale: &str| {
                format!("{}{}@{locale}", value.to_plain_string().to_uppercase(), style.unwrap_or(""))
            },
        );
        let formatter = english().with_formatters(formatters);
        let args = params!("w" => "hey");
        assert_eq!(formatter.format_message("{w, shout, !}", &args), Ok("HEY!@en".to_string()));
        assert_eq!(formatter.format_message("{w, SHOUT}", &args), Ok("HEY@en".to_string()));
        assert_eq!(formatter.format_message("{w, whisper}", &args), Ok("hey".to_string()));
    }

    #[test]
    fn test_tags() {
        let tags = TagRegistry::new()
            .register("a", |children: &str| format!("[{children}]"))
            .register("b", |children: &str| format!("({children})"));
        let formatter = english().with_tags(tags);
        assert_eq!(formatter.format_message("<a><b>x</b></a>", &params!()), Ok("[(x)]".to_string()));
        assert_eq!(formatter.format_message("<A>y</A>", &params!()), Ok("[y]".to_string()));
        assert_eq!(formatter.format_message("<i>{n}</i>", &params!("n" => 2)), Ok("2".to_string()));
        assert!(matches!(
            formatter.format_message("<bold>text</italic>", &params!()),
            Err(FormatError::Syntax(error)) if error.tag.as_deref() == Some("italic")
        ));
    }

    #[test]
    fn test_html_message() {
        let tags = TagRegistry::new().register("b", |children: &str| format!("<strong>{children}</strong>"));
        let formatter = english().with_tags(tags);
        let args = params!("name" => "<Tom & \"Jerry\">", "safe" => "&amp;");
        let result = formatter.format_html_message(
            "<b>{name}</b> <a href=\"/u\">{safe}</a><br/>",
            &args,
        );
        assert_eq!(
            result,
            Ok("<strong>&lt;Tom &amp; &quot;Jerry&quot;&gt;</strong> <a href=\"/u\">&amp;</a><br/>".to_string())
        );
        assert_eq!(
            formatter.format_message("<i>{name}</i>", &args),
            Ok("<Tom & \"Jerry\">".to_string())
        );
    }

    #[test]
    fn test_complex_message() {
        let args = params!(
            "user" => serde_json::json!({"name": "Ada", "stats": {"posts": 3}}),
        );
        let formatter = english();
        let result = formatter.format_complex_message(
            "{user__name} wrote {user__stats__posts, plural, one {# post} other {# posts}}",
            &args,
        );
        assert_eq!(result, Ok("Ada wrote 3 posts".to_string()));

        let dotted = MessageFormatter::new("en", FormatterOptions::default().with_nested_key_separator("_"))
            .expect("en has data");
        assert_eq!(dotted.format_complex_message("{user_name}", &args), Ok("Ada".to_string()));
    }

    #[test]
    fn test_syntax_errors_surface() {
        let err = format("Hello {name", params!()).expect_err("unclosed");
        let FormatError::Syntax(parse) = err else {
            panic!("expected a syntax error");
        };
        assert_eq!((parse.line, parse.column), (1, 7));
    }

    #[test]
    fn test_nesting_limit_applies_to_evaluation() {
        let mut message = text("leaf");
        for _ in 0..10 {
            message = Message::new(vec![MessageElement::Select(SelectExpression {
                parameter: "x".to_string(),
                cases: vec![SelectCase {
                    selector: "other".to_string(),
                    message,
                }],
            })]);
        }
        let shallow = MessageFormatter::new("en", FormatterOptions::default().with_max_nesting_depth(5))
            .expect("en has data");
        assert_eq!(
            shallow.format_parsed(&message, &params!()),
            Err(FormatError::NestingTooDeep { limit: 5 })
        );
        assert_eq!(english().format_parsed(&message, &params!()), Ok("leaf".to_string()));

        let pattern = format!("{}x{}", "{a, select, other {".repeat(8), "}}".repeat(8));
        assert_eq!(
            shallow.format_message(&pattern, &params!()),
            Err(FormatError::NestingTooDeep { limit: 5 })
        );
    }

    #[test]
    fn test_locale_error() {
        struct NoData;
        impl LocaleData for NoData {
            fn has_data(&self, _: &str, _: DataKind) -> bool {
                false
            }
            fn plural_category(&self, _: &str, _: &PluralOperands, _: bool) -> Option<PluralCategory> {
                None
            }
        }
        let err = MessageFormatter::with_data("xx-YY", FormatterOptions::default(), Arc::new(NoData))
            .err()
            .expect("nothing resolvable");
        assert_eq!(err.tried, ["xx-YY", "xx", "en"]);
    }
}
