//! Declarative form validation.
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s. Validating a
//! [`FormState`] checks every field in one pass and reports the first failing
//! rule of each field, so the user sees all problems at once.

use std::collections::BTreeMap;

/// Raw keystroke-level input of one form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for fixtures.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the raw value of `name`, or `""` when the field was never set.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// `true` when every field is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.is_empty())
    }
}

/// Field-keyed messages in schema order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field.to_string(), message)),
        }
    }

    /// Drops the entry for `field`; called whenever that field changes.
    pub fn clear_field(&mut self, field: &str) {
        self.entries.retain(|(name, _)| name != field);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First message in schema order.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }
}

/// Normalization applied to a raw value before the rules run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transform {
    #[default]
    None,
    Trim,
    StripWhitespace,
}

impl Transform {
    fn apply(self, raw: &str) -> String {
        match self {
            Self::None => raw.to_string(),
            Self::Trim => raw.trim().to_string(),
            Self::StripWhitespace => raw.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }
}

/// Closed set of format predicates used by the banking forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// `^(\+234|0)\d{10}$`
    NigerianPhone,
    /// `^\d{2}/\d{2}$`
    Expiry,
    /// `^\d{3}$`
    Cvv,
    /// At least 12 digits once spaces and dashes are removed.
    CardNumber,
    /// `^\d+$`
    Digits,
    /// A single `@` with a dotted domain and no whitespace.
    Email,
}

impl Pattern {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::NigerianPhone => is_nigerian_phone(value),
            Self::Expiry => is_expiry(value),
            Self::Cvv => value.len() == 3 && all_digits(value),
            Self::CardNumber => card_digits(value).is_some_and(|d| d.len() >= 12),
            Self::Digits => all_digits(value),
            Self::Email => is_email(value),
        }
    }
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_nigerian_phone(value: &str) -> bool {
    let rest = if let Some(rest) = value.strip_prefix("+234") {
        rest
    } else if let Some(rest) = value.strip_prefix('0') {
        rest
    } else {
        return false;
    };
    rest.len() == 10 && all_digits(rest)
}

pub fn is_expiry(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'/'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// Returns the digits of a card number with separators removed, or `None`
/// when anything other than digits, spaces and dashes is present.
pub fn card_digits(value: &str) -> Option<String> {
    let mut digits = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' => {}
            _ => return None,
        }
    }
    Some(digits)
}

pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// One check on a (transformed, non-empty) value.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    MinLen { len: usize, message: &'static str },
    ExactLen { len: usize, message: &'static str },
    Pattern { pattern: Pattern, message: &'static str },
    /// Value must coerce to a finite number.
    Number { message: &'static str },
    Integer { message: &'static str },
    Positive { message: &'static str },
    Min { min: f64, message: &'static str },
    Max { max: f64, message: &'static str },
    OneOf { values: &'static [&'static str], message: &'static str },
    /// Value must equal the raw value of another field.
    SameAs { field: &'static str, message: &'static str },
    /// Checkbox must be ticked (`"true"`).
    Checked { message: &'static str },
}

impl Rule {
    fn check(&self, value: &str, form: &FormState) -> Result<(), &'static str> {
        let number = || parse_number(value);
        let (ok, message) = match self {
            Self::MinLen { len, message } => (value.chars().count() >= *len, *message),
            Self::ExactLen { len, message } => (value.chars().count() == *len, *message),
            Self::Pattern { pattern, message } => (pattern.matches(value), *message),
            Self::Number { message } => (number().is_some(), *message),
            Self::Integer { message } => (number().is_some_and(|n| n.fract() == 0.0), *message),
            Self::Positive { message } => (number().is_some_and(|n| n > 0.0), *message),
            Self::Min { min, message } => (number().is_some_and(|n| n >= *min), *message),
            Self::Max { max, message } => (number().is_some_and(|n| n <= *max), *message),
            Self::OneOf { values, message } => (values.iter().any(|v| *v == value), *message),
            Self::SameAs { field, message } => (value == form.get(field), *message),
            Self::Checked { message } => (value == "true", *message),
        };
        if ok { Ok(()) } else { Err(message) }
    }
}

/// Coerces user input to a number; empty and non-finite values yield `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    name: &'static str,
    transform: Transform,
    required: Option<&'static str>,
    rules: Vec<Rule>,
}

impl FieldSpec {
    /// Optional field with no rules.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            transform: Transform::None,
            required: None,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, form: &FormState) -> Result<(), &'static str> {
        let value = self.transform.apply(form.get(self.name));
        if value.is_empty() {
            return match self.required {
                Some(message) => Err(message),
                None => Ok(()),
            };
        }
        self.rules.iter().try_for_each(|rule| rule.check(&value, form))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldSpec::name)
    }

    /// Validates every field; never mutates `form`.
    pub fn validate(&self, form: &FormState) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in &self.fields {
            if let Err(message) = field.check(form) {
                errors.insert(field.name, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(vec![
            FieldSpec::new("phone")
                .required("Phone number is required.")
                .rule(Rule::Pattern {
                    pattern: Pattern::NigerianPhone,
                    message: "Enter a valid Nigerian phone number.",
                }),
            FieldSpec::new("amount")
                .required("Amount is required.")
                .rule(Rule::Number { message: "Amount must be a number." })
                .rule(Rule::Positive { message: "Amount must be positive." })
                .rule(Rule::Integer { message: "Amount must be a whole number." }),
            FieldSpec::new("note"),
        ])
    }

    #[test]
    fn reports_every_empty_required_field() {
        let errors = schema().validate(&FormState::new()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("phone"), Some("Phone number is required."));
        assert_eq!(errors.get("amount"), Some("Amount is required."));
        assert!(!errors.contains("note"));
    }

    #[test]
    fn first_failing_rule_wins_per_field() {
        let form = FormState::new().with("phone", "08012345678").with("amount", "-2.5");
        let errors = schema().validate(&form).unwrap_err();
        assert_eq!(errors.get("amount"), Some("Amount must be positive."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn non_numeric_amount_is_a_type_error() {
        let form = FormState::new().with("phone", "08012345678").with("amount", "abc");
        let errors = schema().validate(&form).unwrap_err();
        assert_eq!(errors.get("amount"), Some("Amount must be a number."));
    }

    #[test]
    fn validate_does_not_mutate_input() {
        let form = FormState::new().with("phone", "1234");
        let before = form.clone();
        let _ = schema().validate(&form);
        let _ = schema().validate(&form);
        assert_eq!(form, before);
    }

    #[test]
    fn phone_pattern() {
        assert!(is_nigerian_phone("08012345678"));
        assert!(is_nigerian_phone("+2348012345678"));
        assert!(!is_nigerian_phone("1234"));
        assert!(!is_nigerian_phone("0801234567"));
        assert!(!is_nigerian_phone("+234801234567a"));
    }

    #[test]
    fn card_number_pattern_strips_separators() {
        assert!(Pattern::CardNumber.matches("4111 1111 1111 1111"));
        assert!(Pattern::CardNumber.matches("4111-1111-1111"));
        assert!(!Pattern::CardNumber.matches("4111"));
        assert!(!Pattern::CardNumber.matches("4111 1111 1111 111x"));
    }

    #[test]
    fn expiry_cvv_and_email_patterns() {
        assert!(Pattern::Expiry.matches("09/27"));
        assert!(!Pattern::Expiry.matches("9/27"));
        assert!(Pattern::Cvv.matches("123"));
        assert!(!Pattern::Cvv.matches("12a"));
        assert!(Pattern::Email.matches("john.doe@example.com"));
        assert!(!Pattern::Email.matches("john@localhost"));
        assert!(!Pattern::Email.matches("@example.com"));
    }

    #[test]
    fn same_as_and_checked_rules() {
        let schema = Schema::new(vec![
            FieldSpec::new("password").required("Password is required"),
            FieldSpec::new("confirm")
                .required("Confirm password is required")
                .rule(Rule::SameAs { field: "password", message: "Passwords must match" }),
            FieldSpec::new("agree")
                .required("You must agree")
                .rule(Rule::Checked { message: "You must agree" }),
        ]);
        let form = FormState::new()
            .with("password", "secret1")
            .with("confirm", "secret2");
        let errors = schema.validate(&form).unwrap_err();
        assert_eq!(errors.get("confirm"), Some("Passwords must match"));
        assert_eq!(errors.get("agree"), Some("You must agree"));

        let form = form.with("confirm", "secret1").with("agree", "true");
        assert!(schema.validate(&form).is_ok());
    }

    #[test]
    fn clear_field_drops_only_that_entry() {
        let mut errors = schema().validate(&FormState::new()).unwrap_err();
        errors.clear_field("phone");
        assert!(!errors.contains("phone"));
        assert!(errors.contains("amount"));
        assert_eq!(errors.first(), Some("Amount is required."));
    }
}
