//! Validation rules and the chainable [`RuleSet`] builder.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use validator::{ValidateEmail, ValidateUrl};

use super::FieldValue;

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid regex"));
static ALPHA_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]*$").expect("valid regex"));
static LOWER_ALPHA_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_]*$").expect("valid regex"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("valid regex"));
static ALPHA_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("valid regex"));
static ALPHA_NUMERIC_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s]*$").expect("valid regex"));
static ALPHA_NUMERIC_SPACE_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._+&#()\-\s]*$").expect("valid regex"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z.,'\s]*$").expect("valid regex"));
static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));
static FILEPATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([/]?[\w.\-]+)+$").expect("valid regex"));
static MIME_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w]+/[\w.\-+]+)+$").expect("valid regex"));

/// What a rule checks.
#[derive(Debug, Clone)]
enum Check {
    Required,
    Empty,
    In(Vec<String>),
    NotIn(Vec<String>),
    Between(f64, f64),
    MinValue(f64),
    MaxValue(f64),
    Length(usize, usize),
    EqualTo(String),
    Matches(Regex),
    Date(String),
    Uuid,
    Email,
    Url,
    When(bool, Vec<Rule>),
}

/// A single rule: a check, the translation key reported on failure, and
/// the options echoed back in the error data.
#[derive(Debug, Clone)]
pub struct Rule {
    check: Check,
    message: String,
    options: Vec<(String, Value)>,
}

impl Rule {
    fn new(check: Check, message: &str) -> Self {
        Self {
            check,
            message: message.to_string(),
            options: Vec::new(),
        }
    }

    fn option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.push((key.to_string(), value.into()));
        self
    }

    /// Rule options echoed into the error data.
    pub fn options(&self) -> &[(String, Value)] {
        &self.options
    }

    /// Validate `value`, returning the failing rule.
    ///
    /// Every rule except `required` accepts an empty value.
    pub(crate) fn apply<'a>(&'a self, value: &FieldValue) -> Result<(), &'a Rule> {
        if let Check::When(condition, rules) = &self.check {
            if !condition {
                return Ok(());
            }
            for rule in rules {
                rule.apply(value)?;
            }
            return Ok(());
        }

        if value.is_empty() {
            return match self.check {
                Check::Required => Err(self),
                _ => Ok(()),
            };
        }

        let passed = match &self.check {
            Check::Required => true,
            Check::Empty => false,
            Check::In(allowed) => allowed.iter().any(|a| *a == value.as_text()),
            Check::NotIn(denied) => !denied.iter().any(|d| *d == value.as_text()),
            Check::Between(min, max) => value.as_number().is_some_and(|n| n >= *min && n <= *max),
            Check::MinValue(min) => value.as_number().is_some_and(|n| n >= *min),
            Check::MaxValue(max) => value.as_number().is_some_and(|n| n <= *max),
            Check::Length(min, max) => {
                let len = value.as_text().chars().count();
                len >= *min && len <= *max
            }
            Check::EqualTo(target) => value.as_text() == *target,
            Check::Matches(regex) => regex.is_match(&value.as_text()),
            Check::Date(layout) => NaiveDate::parse_from_str(&value.as_text(), layout).is_ok(),
            Check::Uuid => uuid::Uuid::parse_str(&value.as_text()).is_ok(),
            Check::Email => value.as_text().validate_email(),
            Check::Url => value.as_text().validate_url(),
            Check::When(..) => true,
        };

        if passed { Ok(()) } else { Err(self) }
    }

    /// Translation key reported on failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Chainable collection of rules for one field.
///
/// ```
/// use docsvc_core::validation::Validator;
///
/// let rules = Validator::rules().required().between(1, 25);
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    fn push(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    fn matches(self, regex: &Regex, message: &str) -> Self {
        self.push(Rule::new(Check::Matches(regex.clone()), message))
    }

    /// Apply `rules` only when `condition` holds.
    pub fn when(self, condition: bool, rules: RuleSet) -> Self {
        let message = rules
            .rules
            .first()
            .map(|r| r.message.clone())
            .unwrap_or_default();
        self.push(Rule {
            check: Check::When(condition, rules.rules),
            message,
            options: Vec::new(),
        })
    }

    /// The field must be present and non-zero.
    pub fn required(self) -> Self {
        self.push(Rule::new(Check::Required, "validation.error.is_required"))
    }

    /// The field must be empty.
    pub fn empty(self) -> Self {
        self.push(Rule::new(Check::Empty, "validation.error.must_be_empty"))
    }

    /// The field must be one of `allowed`.
    pub fn is_in<I, S>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let allowed: Vec<String> = allowed.into_iter().map(|s| s.to_string()).collect();
        let joined = allowed.join(", ");
        self.push(Rule::new(Check::In(allowed), "validation.error.must_be_in").option("Values", joined))
    }

    /// The field must not be one of `denied`.
    pub fn not_in<I, S>(self, denied: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let denied: Vec<String> = denied.into_iter().map(|s| s.to_string()).collect();
        let joined = denied.join(", ");
        self.push(
            Rule::new(Check::NotIn(denied), "validation.error.must_be_not_in").option("Values", joined),
        )
    }

    /// The numeric value must lie in `min..=max`.
    pub fn between(self, min: impl Into<f64> + Copy, max: impl Into<f64> + Copy) -> Self {
        let (lo, hi) = (min.into(), max.into());
        self.push(
            Rule::new(Check::Between(lo, hi), "validation.error.must_be_value_between")
                .option("Min", lo)
                .option("Max", hi),
        )
    }

    /// The numeric value must be at least `min`.
    pub fn min_value(self, min: impl Into<f64>) -> Self {
        let min = min.into();
        self.push(
            Rule::new(Check::MinValue(min), "validation.error.must_be_no_less_than_value")
                .option("Length", min),
        )
    }

    /// The numeric value must be at most `max`.
    pub fn max_value(self, max: impl Into<f64>) -> Self {
        let max = max.into();
        self.push(
            Rule::new(Check::MaxValue(max), "validation.error.must_be_no_more_than_value")
                .option("Length", max),
        )
    }

    /// The text length (in characters) must lie in `min..=max`.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.push(
            Rule::new(Check::Length(min, max), "validation.error.must_be_length_between")
                .option("Min", min)
                .option("Max", max),
        )
    }

    /// The value must equal the value of another field.
    pub fn equal_to(self, target_field: &str, target_value: &str) -> Self {
        self.push(
            Rule::new(
                Check::EqualTo(target_value.to_string()),
                "validation.error.must_be_equal_to",
            )
            .option("Target", format!("attributes.{target_field}")),
        )
    }

    /// Letters only.
    pub fn is_alpha(self) -> Self {
        self.matches(&ALPHA, "validation.error.must_be_alpha")
    }

    /// Letters and whitespace only.
    pub fn is_alpha_space(self) -> Self {
        self.matches(&ALPHA_SPACE, "validation.error.must_be_alpha_space")
    }

    /// Lowercase letters and underscores only.
    pub fn is_lower_alpha_underscore(self) -> Self {
        self.matches(
            &LOWER_ALPHA_UNDERSCORE,
            "validation.error.must_be_lower_alpha_underscore",
        )
    }

    /// Digits only.
    pub fn is_digit(self) -> Self {
        self.matches(&DIGIT, "validation.error.must_be_digit")
    }

    /// Letters and digits only.
    pub fn is_alpha_numeric(self) -> Self {
        self.matches(&ALPHA_NUMERIC, "validation.error.must_be_alphanumeric")
    }

    /// Letters, digits and whitespace only.
    pub fn is_alpha_numeric_space(self) -> Self {
        self.matches(&ALPHA_NUMERIC_SPACE, "validation.error.must_be_alphanumeric_space")
    }

    /// Letters, digits, whitespace and `._+&#()-`.
    pub fn is_alpha_numeric_space_and_special_character(self) -> Self {
        self.matches(
            &ALPHA_NUMERIC_SPACE_SPECIAL,
            "validation.error.must_be_alphanumeric_space_special_character",
        )
    }

    /// A person's name (`Mr. John Doe`).
    pub fn is_name(self) -> Self {
        self.matches(&NAME, "validation.error.must_be_valid_name")
    }

    /// Lowercase alphanumeric words separated by single dashes.
    pub fn is_slug(self) -> Self {
        self.matches(&SLUG, "validation.error.must_be_valid_slug")
    }

    /// `dir/file.png` or `/dir/file.png`.
    pub fn is_filepath(self) -> Self {
        self.matches(&FILEPATH, "validation.error.must_be_valid_filepath")
    }

    /// `type/subtype`.
    pub fn is_mime_type(self) -> Self {
        self.matches(&MIME_TYPE, "validation.error.must_be_valid_mime_type")
    }

    /// A date in the given `chrono` format, e.g. `%Y-%m-%d`.
    pub fn is_date(self, layout: &str) -> Self {
        self.push(
            Rule::new(Check::Date(layout.to_string()), "validation.error.must_be_date")
                .option("Layout", layout),
        )
    }

    /// A hyphenated UUID.
    pub fn is_uuid(self) -> Self {
        self.push(Rule::new(Check::Uuid, "validation.error.must_be_uuid"))
    }

    /// An email address.
    pub fn is_email(self) -> Self {
        self.push(Rule::new(Check::Email, "validation.error.must_be_email"))
    }

    /// An absolute URL.
    pub fn is_url(self) -> Self {
        self.push(Rule::new(Check::Url, "validation.error.must_be_url"))
    }

    /// Match a caller-supplied pattern; reported as `must_be_valid_<field>`.
    pub fn is_custom_regex(self, regex: &Regex, field: &str) -> Self {
        self.push(Rule::new(
            Check::Matches(regex.clone()),
            &format!("validation.error.must_be_valid_{field}"),
        ))
    }
}
