//! Character-class rules shared by the field validator.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters a name fragment may contain (possibly empty).
static NAME_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z.'\- ]*$").unwrap());

/// A complete, non-empty name.
static NAME_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z.'\- ]+$").unwrap());

/// Fragment typed into an empty phone field: digits and `+` anywhere.
static PHONE_SEED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+0-9]*$").unwrap());

/// Fragment typed into a non-empty phone field: digits only.
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").unwrap());

/// A pasted phone candidate: optional leading `+`, then digits (possibly empty).
static PHONE_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]*$").unwrap());

/// A complete, non-empty phone number.
static PHONE_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]+$").unwrap());

pub fn name_fragment_ok(text: &str) -> bool {
    NAME_FRAGMENT.is_match(text)
}

pub fn name_value_ok(text: &str) -> bool {
    NAME_VALUE.is_match(text)
}

pub fn phone_seed_ok(text: &str) -> bool {
    PHONE_SEED.is_match(text)
}

pub fn digits_ok(text: &str) -> bool {
    DIGITS.is_match(text)
}

pub fn phone_fragment_ok(text: &str) -> bool {
    PHONE_FRAGMENT.is_match(text)
}

pub fn phone_value_ok(text: &str) -> bool {
    PHONE_VALUE.is_match(text)
}

/// Count of ASCII digits, ignoring any formatting characters.
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}
