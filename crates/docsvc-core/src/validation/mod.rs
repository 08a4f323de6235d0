//! Declarative field validation.
//!
//! A [`Validator`] collects `(field, value, rules)` triples and reports the
//! first failing rule of every field as a [`FieldError`]. Rules are built
//! with the chainable [`RuleSet`] returned by [`Validator::rules`].
//!
//! ```
//! use docsvc_core::validation::Validator;
//!
//! let mut validator = Validator::new();
//! validator
//!     .set("page", 0_i64, Validator::rules().required())
//!     .set("sort_method", "up", Validator::rules().is_in(["asc", "desc"]));
//!
//! let errors = validator.validate();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].message, "validation.error.is_required");
//! ```

mod rule;

pub use rule::{Rule, RuleSet};

use serde_json::{Map, Value};

use crate::error::FieldError;

/// A value under validation.
///
/// Zero numbers and empty strings count as empty: `required` rejects
/// them and every other rule accepts them.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No value.
    Null,
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
}

impl FieldValue {
    /// Whether the value counts as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Integer(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
        }
    }

    /// Textual rendering used by pattern rules.
    pub fn as_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }

    /// Numeric rendering used by range rules. Text is parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Text(s) => s.trim().parse().ok(),
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Text(s) => Value::String(s.clone()),
            Self::Integer(n) => Value::from(*n),
            Self::Float(n) => Value::from(*n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    field: String,
    value: FieldValue,
    rules: Vec<Rule>,
}

/// Collects fields and validates them in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    scope: String,
    entries: Vec<Entry>,
}

impl Validator {
    /// Create an unscoped validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator whose errors carry `scope`.
    pub fn with_scope(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            entries: Vec::new(),
        }
    }

    /// Start an empty rule chain.
    pub fn rules() -> RuleSet {
        RuleSet::default()
    }

    /// Register a field with its rules.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
        rules: RuleSet,
    ) -> &mut Self {
        self.entries.push(Entry {
            field: field.into(),
            value: value.into(),
            rules: rules.into_rules(),
        });
        self
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every rule and return one error per failing field.
    pub fn validate(&self) -> Vec<FieldError> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let failed = entry
                    .rules
                    .iter()
                    .find_map(|rule| rule.apply(&entry.value).err())?;

                let mut data = Map::new();
                data.insert(entry.field.clone(), entry.value.to_json());
                for (key, value) in failed.options() {
                    data.insert(key.clone(), value.clone());
                }

                Some(FieldError {
                    scope: self.scope.clone(),
                    field: entry.field.clone(),
                    message: failed.message().to_string(),
                    data,
                })
            })
            .collect()
    }
}
