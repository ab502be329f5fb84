//! Password strength rules applied to new and replaced passwords.

use std::sync::OnceLock;

use regex::Regex;

pub const PASSWORD_MISSING_UPPER: &str = "Password must contain at least one uppercase letter.";
pub const PASSWORD_MISSING_LOWER: &str = "Password must contain at least one lowercase letter.";
pub const PASSWORD_MISSING_DIGIT: &str = "Password must contain at least one digit.";
pub const PASSWORD_MISSING_SPECIAL: &str =
    "Password must contain at least one special character.";

/// Returns every rule `password` violates, in a fixed order.
///
/// An empty result means the password is acceptable. Length is checked
/// separately by the request schema.
pub fn violations(password: &str) -> Vec<String> {
    let rules: [(fn(&str) -> bool, &str); 4] = [
        (|p: &str| p.chars().any(|c| c.is_ascii_uppercase()), PASSWORD_MISSING_UPPER),
        (|p: &str| p.chars().any(|c| c.is_ascii_lowercase()), PASSWORD_MISSING_LOWER),
        (has_decimal_digit, PASSWORD_MISSING_DIGIT),
        (|p: &str| p.chars().any(is_special), PASSWORD_MISSING_SPECIAL),
    ];

    rules
        .iter()
        .filter(|(satisfied, _)| !satisfied(password))
        .map(|(_, message)| message.to_string())
        .collect()
}

/// Any Unicode decimal digit (`Nd`). Fractions and numerals such as `½` or
/// `Ⅻ` do not count.
fn has_decimal_digit(password: &str) -> bool {
    static DIGIT: OnceLock<Option<Regex>> = OnceLock::new();
    match DIGIT.get_or_init(|| Regex::new(r"\d").ok()) {
        Some(digit) => digit.is_match(password),
        None => password.chars().any(|c| c.is_ascii_digit()),
    }
}

/// Anything that is not a word character or whitespace.
fn is_special(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_' || c.is_whitespace())
}
