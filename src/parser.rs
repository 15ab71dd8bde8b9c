use std::borrow::Cow;

use nom::{
    IResult,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    error::{ErrorKind, ParseError as NomParseError},
    sequence::{pair, preceded},
};
use thiserror::Error;

use crate::operands::PluralOperands;
use crate::skeleton::parse_skeleton;
use crate::types::{
    FormatStyle, FormatterCall, Message, MessageElement, PluralCase, PluralCategory,
    PluralExpression, PluralSelector, SelectCase, SelectExpression, TagElement,
};

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Syntax,
    Tag,
    NestingTooDeep { limit: usize },
}

/// A malformed pattern. Line and column are 1-based and count characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    /// The offending tag name, for tag errors.
    pub tag: Option<String>,
}

#[derive(Debug)]
struct SyntaxError<'a> {
    input: &'a str,
    kind: ParseErrorKind,
    message: Cow<'static, str>,
    tag: Option<String>,
}

impl<'a> SyntaxError<'a> {
    fn new(input: &'a str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            input,
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            tag: None,
        }
    }

    fn with_tag(mut self, name: &str) -> Self {
        self.kind = ParseErrorKind::Tag;
        self.tag = Some(name.to_string());
        self
    }
}

impl<'a> NomParseError<&'a str> for SyntaxError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Self::new(input, format!("Unexpected input ({})", kind.description()))
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }
}

type PResult<'a, T> = IResult<&'a str, T, SyntaxError<'a>>;

fn failure<T>(error: SyntaxError<'_>) -> PResult<'_, T> {
    Err(nom::Err::Failure(error))
}

fn unclosed(open: &str) -> SyntaxError<'_> {
    SyntaxError::new(open, "Expected '}' to close '{'")
}

/// Reports `message` at `at`, or an unclosed brace at `open` when input ran out.
fn expected<'a>(open: &'a str, at: &'a str, message: &'static str) -> SyntaxError<'a> {
    if at.is_empty() {
        unclosed(open)
    } else {
        SyntaxError::new(at, message)
    }
}

fn ws(input: &str) -> PResult<'_, &str> {
    multispace0(input)
}

fn argument_name(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '$'))(input)
}

fn argument_type(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| c.is_alphanumeric() || matches!(c, '_' | '-'))(input)
}

fn case_key(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '{' && c != '}')(input)
}

fn exact_number(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))(input)
}

fn offset_value(input: &str) -> PResult<'_, &str> {
    preceded(
        pair(tag("offset:"), multispace0),
        recognize(pair(opt(one_of("+-")), digit1)),
    )(input)
}

fn tag_name(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))(input)
}

fn opening_tag_start(input: &str) -> bool {
    let mut chars = input.chars();
    chars.next() == Some('<') && chars.next().is_some_and(char::is_alphabetic)
}

fn closing_tag_start(input: &str) -> bool {
    input
        .strip_prefix("</")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_alphabetic() || c == '>')
}

/// Consumes a quote at the start of `input`, appending what it stands for.
fn quoted<'a>(input: &'a str, text: &mut String) -> &'a str {
    let after = &input[1..];
    match after.chars().next() {
        Some('\'') => {
            text.push('\'');
            &after[1..]
        }
        Some('{' | '}' | '#' | '<') => {
            let mut rest = after;
            loop {
                let Some(index) = rest.find('\'') else {
                    // unterminated quotes run to the end of the pattern
                    text.push_str(rest);
                    return &rest[rest.len()..];
                };
                text.push_str(&rest[..index]);
                let tail = &rest[index + 1..];
                match tail.strip_prefix('\'') {
                    Some(tail) => {
                        text.push('\'');
                        rest = tail;
                    }
                    None => return tail,
                }
            }
        }
        _ => {
            text.push('\'');
            after
        }
    }
}

fn literal_text(input: &str, pound: bool) -> PResult<'_, String> {
    let mut text = String::new();
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        match c {
            '{' | '}' => break,
            '#' if pound => break,
            '<' if rest.len() < input.len() && (opening_tag_start(rest) || closing_tag_start(rest)) => {
                break;
            }
            '\'' => rest = quoted(rest, &mut text),
            _ => {
                text.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    Ok((rest, text))
}

fn push_text(elements: &mut Vec<MessageElement>, text: String) {
    if text.is_empty() {
        return;
    }
    match elements.last_mut() {
        Some(MessageElement::Text(previous)) => previous.push_str(&text),
        _ => elements.push(MessageElement::Text(text)),
    }
}

fn classify_style(formatter: &str, style: &str) -> FormatStyle {
    match style.strip_prefix("::") {
        Some(skeleton) => match formatter {
            "number" | "numberrange" => FormatStyle::NumberSkeleton(parse_skeleton(skeleton)),
            "date" | "time" | "datetime" => FormatStyle::DateSkeleton(skeleton.trim().to_string()),
            _ => FormatStyle::Text(style.to_string()),
        },
        None => FormatStyle::Text(style.to_string()),
    }
}

#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    depth: usize,
    /// `#` is a substitution point.
    pound: bool,
    /// A `}` ends the current message.
    in_body: bool,
    open_tag: Option<&'a str>,
}

impl<'a> Context<'a> {
    fn root() -> Self {
        Self {
            depth: 0,
            pound: false,
            in_body: false,
            open_tag: None,
        }
    }

    fn case_body(self, pound: bool) -> Self {
        Self {
            depth: self.depth + 1,
            pound,
            in_body: true,
            open_tag: None,
        }
    }

    fn tag_children(self, name: &'a str) -> Self {
        Self {
            depth: self.depth + 1,
            open_tag: Some(name),
            ..self
        }
    }
}

struct PatternParser<'s> {
    source: &'s str,
    max_depth: usize,
}

impl<'s> PatternParser<'s> {
    fn check_depth(&self, ctx: Context<'s>, at: &'s str) -> Result<(), nom::Err<SyntaxError<'s>>> {
        if ctx.depth <= self.max_depth {
            return Ok(());
        }
        let mut error = SyntaxError::new(
            at,
            format!("Nesting depth exceeds the maximum of {}", self.max_depth),
        );
        error.kind = ParseErrorKind::NestingTooDeep {
            limit: self.max_depth,
        };
        Err(nom::Err::Failure(error))
    }

    fn message(&self, mut input: &'s str, ctx: Context<'s>) -> PResult<'s, Message> {
        let mut elements = Vec::new();
        while let Some(next) = input.chars().next() {
            match next {
                '}' if ctx.in_body => break,
                '}' => return failure(SyntaxError::new(input, "Unexpected '}'")),
                '{' => {
                    let (rest, element) = self.placeholder(input, ctx)?;
                    elements.push(element);
                    input = rest;
                }
                '#' if ctx.pound => {
                    elements.push(MessageElement::Pound);
                    input = &input[1..];
                }
                '<' if closing_tag_start(input) => {
                    if ctx.open_tag.is_some() {
                        break;
                    }
                    let name = tag_name(&input[2..]).map(|(_, name)| name).unwrap_or_default();
                    return failure(
                        SyntaxError::new(input, format!("Unexpected closing tag </{name}>")).with_tag(name),
                    );
                }
                '<' if opening_tag_start(input) => {
                    let (rest, element) = self.tag_element(input, ctx)?;
                    elements.push(element);
                    input = rest;
                }
                _ => {
                    let (rest, text) = literal_text(input, ctx.pound)?;
                    push_text(&mut elements, text);
                    input = rest;
                }
            }
        }
        Ok((input, Message::new(elements)))
    }

    fn placeholder(&self, input: &'s str, ctx: Context<'s>) -> PResult<'s, MessageElement> {
        let open = input;
        let (rest, _) = ws(&input[1..])?;
        let Ok((rest, name)) = argument_name(rest) else {
            return failure(expected(open, rest, "Expected argument name"));
        };
        let parameter = name.to_string();
        let (rest, _) = ws(rest)?;
        if let Some(rest) = rest.strip_prefix('}') {
            return Ok((rest, MessageElement::Parameter(parameter)));
        }
        let Some(rest) = rest.strip_prefix(',') else {
            return failure(expected(open, rest, "Expected ',' or '}' after argument name"));
        };
        let (rest, _) = ws(rest)?;
        let Ok((rest, kind)) = argument_type(rest) else {
            return failure(expected(open, rest, "Expected argument type"));
        };
        let (rest, _) = ws(rest)?;
        let formatter = kind.to_ascii_lowercase();

        let (rest, element) = match formatter.as_str() {
            "plural" | "selectordinal" => {
                let Some(rest) = rest.strip_prefix(',') else {
                    return failure(expected(open, rest, "Expected ',' before plural cases"));
                };
                let (rest, (offset, cases)) = self.plural_cases(open, rest, ctx)?;
                let plural = PluralExpression {
                    parameter,
                    offset,
                    ordinal: formatter == "selectordinal",
                    cases,
                };
                (rest, MessageElement::Plural(plural))
            }
            "select" => {
                let Some(rest) = rest.strip_prefix(',') else {
                    return failure(expected(open, rest, "Expected ',' before select cases"));
                };
                let (rest, cases) = self.select_cases(open, rest, ctx)?;
                (rest, MessageElement::Select(SelectExpression { parameter, cases }))
            }
            _ => {
                let (rest, style) = self.style(open, rest)?;
                let call = FormatterCall {
                    parameter,
                    formatter: kind.to_string(),
                    style: style.map(|style| classify_style(&formatter, style)),
                };
                (rest, MessageElement::Formatter(call))
            }
        };

        let (rest, _) = ws(rest)?;
        match rest.strip_prefix('}') {
            Some(rest) => Ok((rest, element)),
            None => failure(expected(open, rest, "Expected '}'")),
        }
    }

    /// Raw style text after `,` up to the placeholder's closing brace.
    fn style(&self, open: &'s str, input: &'s str) -> PResult<'s, Option<&'s str>> {
        let Some(body) = input.strip_prefix(',') else {
            return Ok((input, None));
        };
        let mut depth = 0usize;
        let mut in_quote = false;
        for (index, c) in body.char_indices() {
            match c {
                '\'' => in_quote = !in_quote,
                '{' if !in_quote => depth += 1,
                '}' if !in_quote && depth > 0 => depth -= 1,
                '}' if !in_quote => {
                    let style = body[..index].trim();
                    let style = (!style.is_empty()).then_some(style);
                    return Ok((&body[index..], style));
                }
                _ => {}
            }
        }
        failure(unclosed(open))
    }

    fn case_body(&self, input: &'s str, ctx: Context<'s>) -> PResult<'s, Message> {
        let (rest, _) = ws(input)?;
        if !rest.starts_with('{') {
            return failure(SyntaxError::new(rest, "Expected '{'"));
        }
        self.check_depth(ctx, rest)?;
        let (after, message) = self.message(&rest[1..], ctx)?;
        match after.strip_prefix('}') {
            Some(after) => Ok((after, message)),
            None => failure(unclosed(rest)),
        }
    }

    fn plural_cases(
        &self,
        open: &'s str,
        input: &'s str,
        ctx: Context<'s>,
    ) -> PResult<'s, (i64, Vec<PluralCase>)> {
        let (mut rest, _) = ws(input)?;
        let mut offset = 0;
        if rest.starts_with("offset:") {
            let Ok((after, digits)) = offset_value(rest) else {
                return failure(expected(open, rest, "Expected integer after 'offset:'"));
            };
            offset = match digits.parse::<i64>() {
                Ok(offset) => offset,
                Err(_) => return failure(SyntaxError::new(rest, "Offset out of range")),
            };
            rest = after;
        }

        let mut cases: Vec<PluralCase> = Vec::new();
        loop {
            (rest, _) = ws(rest)?;
            if rest.is_empty() || rest.starts_with('}') {
                break;
            }
            let selector_at = rest;
            let (after, selector) = match rest.strip_prefix('=') {
                Some(number) => {
                    let exact = exact_number(number)
                        .ok()
                        .and_then(|(after, text)| Some((after, text.parse::<PluralOperands>().ok()?)));
                    let Some((after, value)) = exact else {
                        return failure(SyntaxError::new(rest, "Expected number after '='"));
                    };
                    (after, PluralSelector::Exact(value))
                }
                None => {
                    let Ok((after, keyword)) = case_key(rest) else {
                        return failure(SyntaxError::new(rest, "Expected case selector"));
                    };
                    let Some(category) = PluralCategory::parse(keyword) else {
                        return failure(SyntaxError::new(
                            rest,
                            format!("Invalid plural selector '{keyword}'"),
                        ));
                    };
                    (after, PluralSelector::Category(category))
                }
            };
            if cases.iter().any(|case| case.selector == selector) {
                return failure(SyntaxError::new(selector_at, "Duplicate case selector"));
            }
            let (after, message) = self.case_body(after, ctx.case_body(true))?;
            cases.push(PluralCase { selector, message });
            rest = after;
        }
        if cases.is_empty() {
            return failure(expected(open, rest, "Expected at least one case"));
        }
        Ok((rest, (offset, cases)))
    }

    fn select_cases(
        &self,
        open: &'s str,
        input: &'s str,
        ctx: Context<'s>,
    ) -> PResult<'s, Vec<SelectCase>> {
        let mut rest = input;
        let mut cases: Vec<SelectCase> = Vec::new();
        loop {
            (rest, _) = ws(rest)?;
            if rest.is_empty() || rest.starts_with('}') {
                break;
            }
            let Ok((after, key)) = case_key(rest) else {
                return failure(SyntaxError::new(rest, "Expected case selector"));
            };
            if cases.iter().any(|case| case.selector == key) {
                return failure(SyntaxError::new(rest, "Duplicate case selector"));
            }
            let (after, message) = self.case_body(after, ctx.case_body(false))?;
            cases.push(SelectCase {
                selector: key.to_string(),
                message,
            });
            rest = after;
        }
        if cases.is_empty() {
            return failure(expected(open, rest, "Expected at least one case"));
        }
        Ok((rest, cases))
    }

    fn tag_element(&self, input: &'s str, ctx: Context<'s>) -> PResult<'s, MessageElement> {
        let open = input;
        let (rest, name) = preceded(char('<'), tag_name)(input)?;
        let Some(end) = rest.find('>') else {
            return failure(SyntaxError::new(open, "Unclosed tag").with_tag(name));
        };
        let markup = &rest[..end];
        let rest = &rest[end + 1..];
        if let Some(attributes) = markup.strip_suffix('/') {
            let element = TagElement {
                name: name.to_string(),
                attributes: attributes.to_string(),
                self_closing: true,
                children: Message::default(),
            };
            return Ok((rest, MessageElement::Tag(element)));
        }

        let inner = ctx.tag_children(name);
        self.check_depth(inner, open)?;
        let (rest, children) = self.message(rest, inner)?;
        let Some(closing) = rest.strip_prefix("</") else {
            return failure(SyntaxError::new(open, "Unclosed tag").with_tag(name));
        };
        let Ok((after, closing_name)) = tag_name(closing) else {
            return failure(SyntaxError::new(rest, "Expected tag name").with_tag(name));
        };
        if !closing_name.eq_ignore_ascii_case(name) {
            return failure(
                SyntaxError::new(rest, format!("Expected </{name}> but found </{closing_name}>"))
                    .with_tag(closing_name),
            );
        }
        let (after, _) = ws(after)?;
        let Some(after) = after.strip_prefix('>') else {
            return failure(SyntaxError::new(after, "Expected '>'").with_tag(closing_name));
        };
        let element = TagElement {
            name: name.to_string(),
            attributes: markup.to_string(),
            self_closing: false,
            children,
        };
        Ok((after, MessageElement::Tag(element)))
    }

    fn error(&self, error: SyntaxError<'s>) -> ParseError {
        let offset = self.source.len().saturating_sub(error.input.len());
        let consumed = &self.source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let column = consumed
            .rsplit('\n')
            .next()
            .map_or(0, |last| last.chars().count())
            + 1;
        ParseError {
            kind: error.kind,
            message: error.message.into_owned(),
            line,
            column,
            tag: error.tag,
        }
    }
}

/// Parses a pattern with the default nesting limit.
pub fn parse_message(source: &str) -> Result<Message, ParseError> {
    parse_message_with_depth(source, DEFAULT_MAX_DEPTH)
}

pub fn parse_message_with_depth(source: &str, max_depth: usize) -> Result<Message, ParseError> {
    let parser = PatternParser { source, max_depth };
    match parser.message(source, Context::root()) {
        Ok(("", message)) => Ok(message),
        Ok((rest, _)) => Err(parser.error(SyntaxError::new(rest, "Unexpected input"))),
        Err(nom::Err::Error(error) | nom::Err::Failure(error)) => Err(parser.error(error)),
        Err(nom::Err::Incomplete(_)) => {
            Err(parser.error(SyntaxError::new(&source[source.len()..], "Incomplete pattern")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::NumberUnit;

    fn text(s: &str) -> MessageElement {
        MessageElement::Text(s.to_string())
    }

    fn elements(source: &str) -> Vec<MessageElement> {
        parse_message(source).expect("valid pattern").elements
    }

    fn error(source: &str) -> ParseError {
        parse_message(source).expect_err("invalid pattern")
    }

    #[test]
    fn test_text_and_parameters() {
        assert_eq!(
            elements("Hello, { name }!"),
            vec![text("Hello, "), MessageElement::Parameter("name".into()), text("!")]
        );
        assert!(elements("").is_empty());
    }

    #[test]
    fn test_quoting() {
        assert_eq!(elements("It''s a test"), vec![text("It's a test")]);
        assert_eq!(elements("don't"), vec![text("don't")]);
        assert_eq!(elements("'{literal}' and '<b>'"), vec![text("{literal} and <b>")]);
        assert_eq!(elements("'{it''s}'"), vec![text("{it's}")]);
        assert_eq!(elements("open '{forever"), vec![text("open {forever")]);
    }

    #[test]
    fn test_plural_with_offset_and_exact_cases() {
        let parsed = elements("{n, plural, offset:1 =0 {none} one {# item} other {# items}}");
        let [MessageElement::Plural(plural)] = parsed.as_slice() else {
            panic!("expected a plural: {parsed:?}");
        };
        assert_eq!(plural.offset, 1);
        assert!(!plural.ordinal);
        assert_eq!(plural.cases.len(), 3);
        assert_eq!(plural.cases[0].selector, PluralSelector::Exact(PluralOperands::zero()));
        assert_eq!(
            plural.cases[1].message.elements,
            vec![MessageElement::Pound, text(" item")]
        );
    }

    #[test]
    fn test_selectordinal_is_ordinal() {
        let parsed = elements("{n, selectordinal, one {#st} other {#th}}");
        assert!(matches!(&parsed[0], MessageElement::Plural(p) if p.ordinal));
    }

    #[test]
    fn test_pound_scoping() {
        assert_eq!(elements("# {n}")[0], text("# "));
        let parsed = elements("{n, plural, other {{g, select, other {#}} #}}");
        let MessageElement::Plural(plural) = &parsed[0] else {
            panic!("expected a plural");
        };
        let body = &plural.cases[0].message.elements;
        let MessageElement::Select(select) = &body[0] else {
            panic!("expected a nested select");
        };
        assert_eq!(select.cases[0].message.elements, vec![text("#")]);
        assert_eq!(body[2], MessageElement::Pound);
    }

    #[test]
    fn test_select_keys() {
        let parsed = elements("{g, select, female {she} male {he} other {they}}");
        let MessageElement::Select(select) = &parsed[0] else {
            panic!("expected a select");
        };
        let keys: Vec<&str> = select.cases.iter().map(|c| c.selector.as_str()).collect();
        assert_eq!(keys, ["female", "male", "other"]);
    }

    #[test]
    fn test_formatter_styles() {
        let parsed = elements("{d, date, short}{n, number, ::percent .00}{t, time, ::Hm}{x, upper}");
        let styles: Vec<Option<FormatStyle>> = parsed
            .iter()
            .map(|element| match element {
                MessageElement::Formatter(call) => call.style.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(styles[0], Some(FormatStyle::Text("short".into())));
        assert!(matches!(
            &styles[1],
            Some(FormatStyle::NumberSkeleton(spec)) if spec.unit == NumberUnit::Percent
        ));
        assert_eq!(styles[2], Some(FormatStyle::DateSkeleton("Hm".into())));
        assert_eq!(styles[3], None);
    }

    #[test]
    fn test_style_keeps_nested_braces() {
        let parsed = elements("{n, custom, a {b} c}");
        let MessageElement::Formatter(call) = &parsed[0] else {
            panic!("expected a formatter call");
        };
        assert_eq!(call.style, Some(FormatStyle::Text("a {b} c".into())));
    }

    #[test]
    fn test_tags() {
        let parsed = elements("<a href=\"/x\">link <b>bold</b></a><br/> <3");
        let MessageElement::Tag(link) = &parsed[0] else {
            panic!("expected a tag");
        };
        assert_eq!(link.name, "a");
        assert_eq!(link.attributes, " href=\"/x\"");
        assert!(matches!(&link.children.elements[1], MessageElement::Tag(b) if b.name == "b"));
        assert!(matches!(&parsed[1], MessageElement::Tag(br) if br.self_closing));
        assert_eq!(parsed[2], text(" <3"));
        assert_eq!(elements("<B>x</b>").len(), 1);
    }

    #[test]
    fn test_tag_errors_carry_names() {
        let mismatched = error("<bold>text</italic>");
        assert_eq!(mismatched.kind, ParseErrorKind::Tag);
        assert_eq!(mismatched.tag.as_deref(), Some("italic"));

        let unclosed = error("<b>text");
        assert!(unclosed.message.contains("Unclosed tag"));
        assert_eq!(unclosed.tag.as_deref(), Some("b"));

        let stray = error("text</i>");
        assert_eq!(stray.tag.as_deref(), Some("i"));

        let empty = error("<b>x</>");
        assert!(empty.message.contains("Expected tag name"));
    }

    #[test]
    fn test_missing_brace_reports_opening_position() {
        let err = error("Hello\n  {name");
        assert_eq!((err.line, err.column), (2, 3));
        let nested = error("{n, plural, one {x} other {y}");
        assert_eq!((nested.line, nested.column), (1, 1));
        let body = error("{n, plural, other {abc");
        assert_eq!((body.line, body.column), (1, 19));
    }

    #[test]
    fn test_case_errors() {
        assert!(error("{n, plural, one x}").message.contains("Expected '{'"));
        assert!(error("{n, plural, lots {x}}").message.contains("Invalid plural selector"));
        assert!(error("{n, select, a {x} a {y}}").message.contains("Duplicate"));
        assert!(error("{n, select, }").message.contains("at least one case"));
        assert!(error("stray }").message.contains("Unexpected '}'"));
        assert!(error("{}").message.contains("argument name"));
    }

    #[test]
    fn test_nesting_limit() {
        let depth = 70;
        let pattern = format!(
            "{}x{}",
            "{a, select, other {".repeat(depth),
            "}}".repeat(depth)
        );
        let err = error(&pattern);
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: DEFAULT_MAX_DEPTH });
        assert!(parse_message_with_depth(&pattern, 100).is_ok());
    }
}
