//! ICU MessageFormat patterns: parsing, CLDR plural selection and
//! locale-aware formatting of numbers, dates, lists and durations.
//!
//! ```
//! use icu_message_format::{FormatterOptions, MessageFormatter, params};
//!
//! let formatter = MessageFormatter::new("en-US", FormatterOptions::default()).unwrap();
//! let text = formatter
//!     .format_message("{n, plural, one {# file} other {# files}}", &params!("n" => 3))
//!     .unwrap();
//! assert_eq!(text, "3 files");
//! ```

pub mod builtins;
pub mod cache;
mod cldr;
pub mod datetime;
pub mod extensions;
pub mod formatter;
pub mod locale;
pub mod locale_data;
pub mod number;
pub mod operands;
pub mod parser;
pub mod registry;
pub mod skeleton;
pub mod types;

use thiserror::Error;

pub use formatter::{FormatError, FormatterOptions, MessageFormatter};
pub use locale::{LocaleChain, LocaleError, ResolvedLocale, normalize_locale, resolve};
pub use locale_data::{BuiltinLocaleData, DataKind, LocaleData};
pub use operands::PluralOperands;
pub use parser::{ParseError, ParseErrorKind, parse_message, parse_message_with_depth};
pub use registry::{CustomFormatter, FormatterRegistry, TagHandler, TagRegistry};
pub use skeleton::{NumberFormatSpec, parse_skeleton};
pub use types::{Arguments, Message, MessageElement, PluralCategory, Value};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MessageFormatError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("locale error: {0}")]
    Locale(#[from] LocaleError),
}

impl From<ParseError> for MessageFormatError {
    fn from(err: ParseError) -> Self {
        MessageFormatError::Format(err.into())
    }
}

/// Formats `pattern` in English with default options.
pub fn format(pattern: &str, parameters: Arguments) -> Result<String, MessageFormatError> {
    let formatter = MessageFormatter::new("en", FormatterOptions::default())?;
    let message = parse_message(pattern)?;
    Ok(formatter.format_parsed(&message, &parameters)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_interpolation() {
        let result = format("Hello {name}!", params!("name" => "World"));
        assert_eq!(result, Ok("Hello World!".to_string()));
    }

    #[test]
    fn test_multiple_parameters() {
        let result = format("{greeting} {name}{punctuation}", params!(
            "greeting" => "Hello",
            "name" => "Alice",
            "punctuation" => "!"
        ));
        assert_eq!(result, Ok("Hello Alice!".to_string()));
    }

    #[test]
    fn test_no_parameters() {
        assert_eq!(format("Hello world!", params!()), Ok("Hello world!".to_string()));
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(format("It''s a test", params!()), Ok("It's a test".to_string()));
        assert_eq!(format("'{literal}' {x}", params!("x" => 1)), Ok("{literal} 1".to_string()));
    }

    #[test]
    fn test_missing_parameter_is_empty() {
        assert_eq!(format("Hello {name}!", params!()), Ok("Hello !".to_string()));
    }

    #[test]
    fn test_plural_items() {
        let pattern = "You have {count, plural, one{1 item} other{# items}} in your cart.";
        assert_eq!(
            format(pattern, params!("count" => 1)),
            Ok("You have 1 item in your cart.".to_string())
        );
        assert_eq!(
            format(pattern, params!("count" => 5)),
            Ok("You have 5 items in your cart.".to_string())
        );
    }

    #[test]
    fn test_plural_zero_uses_exact_match() {
        let pattern = "{count, plural, =0{No items} one{1 item} other{# items}}";
        assert_eq!(format(pattern, params!("count" => 0)), Ok("No items".to_string()));
        assert_eq!(format(pattern, params!("count" => 2)), Ok("2 items".to_string()));
    }

    #[test]
    fn test_select_gender() {
        let pattern = "{gender, select, male{He likes this.} female{She likes this.} other{They like this.}}";
        assert_eq!(format(pattern, params!("gender" => "male")), Ok("He likes this.".to_string()));
        assert_eq!(format(pattern, params!("gender" => "female")), Ok("She likes this.".to_string()));
        assert_eq!(
            format(pattern, params!("gender" => "nonbinary")),
            Ok("They like this.".to_string())
        );
    }

    #[test]
    fn test_format_with_owned_strings() {
        let name = "Bob".to_string();
        let greeting = String::from("Hi");
        let result = format("{greeting}, {name}!", params!(
            "greeting" => greeting,
            "name" => name
        ));
        assert_eq!(result, Ok("Hi, Bob!".to_string()));
    }

    #[test]
    fn test_number_styles() {
        assert_eq!(format("{count, number}", params!("count" => 42)), Ok("42".to_string()));
        assert_eq!(format("{count, number, integer}", params!("count" => "19.99")), Ok("20".to_string()));
        assert_eq!(format("{ratio, number, percent}", params!("ratio" => "0.75")), Ok("75%".to_string()));
        assert_eq!(format("{price, number, currency/EUR}", params!("price" => 25)), Ok("€25.00".to_string()));
        assert_eq!(format("{price, number, currency/SEK}", params!("price" => 100)), Ok("SEK\u{a0}100.00".to_string()));
    }

    #[test]
    fn test_errors_are_wrapped() {
        assert!(matches!(
            format("Hello {name", params!()),
            Err(MessageFormatError::Format(FormatError::Syntax(_)))
        ));
        assert!(matches!(
            format("{n, plural, one {x}}", params!("n" => 3)),
            Err(MessageFormatError::Format(FormatError::MissingOther { construct: "plural" }))
        ));
    }
}
