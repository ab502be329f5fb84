//! Field-level validation of untyped JSON payloads.
//!
//! Request schemas read each declared field through [`Payload`], which records
//! every violated constraint instead of stopping at the first one. A schema
//! builds its typed request only once [`Payload::finish`] confirms that no
//! field failed.

use serde_json::{Map, Value};

use super::errors::{FieldErrors, NON_FIELD_ERRORS};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const NO_DATA: &str = "No data provided";

const EMAIL_MAX_LENGTH: usize = 320;

pub fn max_length_message(max: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max)
}

pub fn min_length_message(min: usize) -> String {
    format!("Ensure this field has at least {} characters.", min)
}

/// Length bounds for a string field. Lengths count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl StringRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

/// A raw request body being validated field by field.
pub struct Payload<'a> {
    fields: Option<&'a Map<String, Value>>,
    errors: FieldErrors,
}

impl<'a> Payload<'a> {
    /// Wraps a parsed body. Anything other than a JSON object is a
    /// payload-level failure and every field read afterwards yields `None`.
    pub fn new(raw: &'a Value) -> Self {
        let mut errors = FieldErrors::new();
        let fields = match raw {
            Value::Object(map) => Some(map),
            Value::Null => {
                errors.add(NON_FIELD_ERRORS, NO_DATA);
                None
            }
            other => {
                errors.add(
                    NON_FIELD_ERRORS,
                    format!(
                        "Invalid data. Expected a dictionary, but got {}.",
                        json_type_name(other)
                    ),
                );
                None
            }
        };
        Self { fields, errors }
    }

    /// Reads a required string field, trimming surrounding whitespace.
    ///
    /// Numbers are accepted and converted to their textual form.
    pub fn string(&mut self, field: &str, rules: StringRules) -> Option<String> {
        let raw = self.required(field)?;
        let text = match raw {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => {
                self.errors.add(field, NOT_A_STRING);
                return None;
            }
        };

        if text.is_empty() {
            self.errors.add(field, NOT_BLANK);
            return None;
        }

        let length = text.chars().count();
        let mut valid = true;
        if let Some(max) = rules.max_length {
            if length > max {
                self.errors.add(field, max_length_message(max));
                valid = false;
            }
        }
        if let Some(min) = rules.min_length {
            if length < min {
                self.errors.add(field, min_length_message(min));
                valid = false;
            }
        }

        valid.then_some(text)
    }

    /// Reads a required email address.
    pub fn email(&mut self, field: &str) -> Option<String> {
        let value = self.string(field, StringRules::new())?;
        if is_valid_email(&value) {
            Some(value)
        } else {
            self.errors.add(field, INVALID_EMAIL);
            None
        }
    }

    /// Runs an extra check over a value that already passed its basic rules.
    ///
    /// `check` returns every violated rule; all of them are recorded.
    pub fn check(
        &mut self,
        field: &str,
        value: Option<String>,
        check: impl FnOnce(&str) -> Vec<String>,
    ) -> Option<String> {
        let value = value?;
        let violations = check(&value);
        if violations.is_empty() {
            return Some(value);
        }
        for message in violations {
            self.errors.add(field, message);
        }
        None
    }

    /// Finishes validation, building the typed request when nothing failed.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, FieldErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or_else(|| FieldErrors::single(NON_FIELD_ERRORS, "Invalid data."))
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        let fields = self.fields?;
        match fields.get(field) {
            None => {
                self.errors.add(field, REQUIRED);
                None
            }
            Some(Value::Null) => {
                self.errors.add(field, NOT_NULL);
                None
            }
            Some(value) => Some(value),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Checks an address of the form `local@domain.tld`.
///
/// The local part is a dot-atom; the domain needs at least two labels and an
/// alphabetic top-level label, except for `localhost`.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().count() > EMAIL_MAX_LENGTH {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    const ATOM_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";
    !local.is_empty()
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || ATOM_SPECIALS.contains(c))
        })
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let valid_labels = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });
    let tld = labels[labels.len() - 1];
    valid_labels && tld.chars().count() >= 2 && !tld.chars().all(|c| c.is_ascii_digit())
}
