use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};

use crate::operands::PluralOperands;
use crate::skeleton::NumberFormatSpec;

/// A parsed pattern: the sequence of nodes making up one message or one case body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub elements: Vec<MessageElement>,
}

impl Message {
    pub fn new(elements: Vec<MessageElement>) -> Self {
        Self { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageElement {
    Text(String),
    /// `{name}` with no type.
    Parameter(String),
    /// `#` directly inside a plural or selectordinal case body.
    Pound,
    Formatter(FormatterCall),
    Plural(PluralExpression),
    Select(SelectExpression),
    Tag(TagElement),
}

/// `{name, type}` or `{name, type, style}` for any type other than plural/select.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatterCall {
    pub parameter: String,
    pub formatter: String,
    pub style: Option<FormatStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormatStyle {
    /// Style text as written, e.g. `short`, `percent` or `#,##0.00`.
    Text(String),
    /// `::` skeleton of a `number` or `numberRange` placeholder, parsed eagerly.
    NumberSkeleton(NumberFormatSpec),
    /// `::` skeleton of a date/time placeholder, resolved against locale data when formatting.
    DateSkeleton(String),
}

impl FormatStyle {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormatStyle::Text(text) => Some(text),
            FormatStyle::DateSkeleton(_) | FormatStyle::NumberSkeleton(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PluralExpression {
    pub parameter: String,
    pub offset: i64,
    pub ordinal: bool,
    pub cases: Vec<PluralCase>,
}

impl PluralExpression {
    pub fn construct_name(&self) -> &'static str {
        if self.ordinal { "selectordinal" } else { "plural" }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PluralCase {
    pub selector: PluralSelector,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PluralSelector {
    /// `=N`, compared against the value before the offset is applied.
    Exact(PluralOperands),
    Category(PluralCategory),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "two" => Some(PluralCategory::Two),
            "few" => Some(PluralCategory::Few),
            "many" => Some(PluralCategory::Many),
            "other" => Some(PluralCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl From<icu::plurals::PluralCategory> for PluralCategory {
    fn from(category: icu::plurals::PluralCategory) -> Self {
        match category {
            icu::plurals::PluralCategory::Zero => PluralCategory::Zero,
            icu::plurals::PluralCategory::One => PluralCategory::One,
            icu::plurals::PluralCategory::Two => PluralCategory::Two,
            icu::plurals::PluralCategory::Few => PluralCategory::Few,
            icu::plurals::PluralCategory::Many => PluralCategory::Many,
            icu::plurals::PluralCategory::Other => PluralCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectExpression {
    pub parameter: String,
    pub cases: Vec<SelectCase>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectCase {
    pub selector: String,
    pub message: Message,
}

/// `<name attrs>children</name>`, or `<name/>` when self-closing.
#[derive(Debug, Clone, PartialEq)]
pub struct TagElement {
    pub name: String,
    /// Raw markup between the tag name and `>`, kept for HTML output only.
    pub attributes: String,
    pub self_closing: bool,
    pub children: Message,
}

/// An argument value supplied to a formatting call.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    DateTime(NaiveDateTime),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The plain string form used for `{name}` and for every graceful fallback.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(value) => value.to_string(),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::Str(value) => value.clone(),
            Value::DateTime(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Value::List(items) => items
                .iter()
                .map(Value::to_plain_string)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Map(_) => String::new(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Int(i64::from(value))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Value::Int(value),
            Err(_) => Value::Str(value.to_string()),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::DateTime(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(value) => Value::Int(value),
                // u64 beyond i64 and floats keep their JSON text so no digits are lost
                None => Value::Str(number.to_string()),
            },
            serde_json::Value::String(value) => Value::Str(value),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Named argument values for one formatting call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    values: HashMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K: Into<String>>(pairs: Vec<(K, Value)>) -> Self {
        let mut values = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            let key = key.into();
            if values.contains_key(&key) {
                panic!("Duplicate parameter key: {key}");
            }
            values.insert(key, value);
        }
        Self { values }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Arguments {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Builds [`Arguments`] from `key => value` pairs.
#[macro_export]
macro_rules! params {
    () => {{
        $crate::types::Arguments::new()
    }};
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::types::Arguments::from_pairs(::std::vec![
            $(($key, $crate::types::Value::from($value)),)+
        ])
    };
}
