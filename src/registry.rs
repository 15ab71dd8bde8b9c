//! Host-supplied custom formatters and tag handlers.
//!
//! Both registries are filled before a [`crate::MessageFormatter`] is built
//! and only read afterwards. Names are matched case-insensitively.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::types::Value;

/// A formatter invoked for `{arg, name, style}` when `name` is not built in.
pub trait CustomFormatter: Send + Sync {
    fn format(&self, value: &Value, style: Option<&str>, locale: &str) -> String;
}

impl<F> CustomFormatter for F
where
    F: Fn(&Value, Option<&str>, &str) -> String + Send + Sync,
{
    fn format(&self, value: &Value, style: Option<&str>, locale: &str) -> String {
        self(value, style, locale)
    }
}

/// Receives the rendered children of a `<name>...</name>` tag.
pub trait TagHandler: Send + Sync {
    fn render(&self, children: &str) -> String;
}

impl<F> TagHandler for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render(&self, children: &str) -> String {
        self(children)
    }
}

#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: HashMap<String, Arc<dyn CustomFormatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `formatter` under `name`, replacing any earlier registration.
    pub fn register(mut self, name: &str, formatter: impl CustomFormatter + 'static) -> Self {
        self.insert(name, formatter);
        self
    }

    pub fn insert(&mut self, name: &str, formatter: impl CustomFormatter + 'static) {
        self.formatters
            .insert(name.to_lowercase(), Arc::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn CustomFormatter> {
        self.formatters.get(&name.to_lowercase()).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.formatters.keys()).finish()
    }
}

#[derive(Clone, Default)]
pub struct TagRegistry {
    handlers: HashMap<String, Arc<dyn TagHandler>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, name: &str, handler: impl TagHandler + 'static) -> Self {
        self.insert(name, handler);
        self
    }

    pub fn insert(&mut self, name: &str, handler: impl TagHandler + 'static) {
        self.handlers.insert(name.to_lowercase(), Arc::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<&dyn TagHandler> {
        self.handlers.get(&name.to_lowercase()).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let registry = FormatterRegistry::new().register("Upper", |value: &Value, _: Option<&str>, _: &str| {
            value.to_plain_string().to_uppercase()
        });
        let formatter = registry.get("UPPER").expect("registered");
        assert_eq!(formatter.format(&Value::from("abc"), None, "en"), "ABC");
        assert!(registry.get("lower").is_none());
    }

    #[test]
    fn test_later_registration_wins() {
        let tags = TagRegistry::new()
            .register("b", |children: &str| format!("<b>{children}</b>"))
            .register("B", |children: &str| format!("**{children}**"));
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("b").map(|h| h.render("x")), Some("**x**".to_string()));
    }

    #[test]
    fn test_style_and_locale_are_passed_through() {
        let registry = FormatterRegistry::new().register(
            "echo",
            |value: &Value, style: Option<&str>, locale: &str| {
                format!("{}|{}|{locale}", value.to_plain_string(), style.unwrap_or("-"))
            },
        );
        let echo = registry.get("echo").expect("registered");
        assert_eq!(echo.format(&Value::Int(3), Some("wide"), "fr"), "3|wide|fr");
        assert_eq!(echo.format(&Value::Null, None, "en"), "|-|en");
    }
}
