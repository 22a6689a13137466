//! The per-field validation guard.
//!
//! A [`FieldValidator`] shadows a single text input in one of two modes and
//! holds the current error state the UI binds to. Three checks exist:
//! single insertions while typing, whole pasted strings, and the complete
//! value after any change. The checks are deliberately independent; an
//! insertion can be rejected while the current value is still valid, and a
//! value can be incomplete (too few digits) even though every keystroke was
//! accepted.

use super::rules;
use std::fmt;

/// What kind of text a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMode {
    /// A person's name component: letters, spaces, apostrophes, hyphens, dots.
    Name,
    /// A phone number: digits with at most one leading `+`, 10 to 15 digits.
    Phone,
}

impl ValidationMode {
    /// Label used in user-facing error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone number",
        }
    }
}

/// Identifies which contact field an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
}

impl ContactField {
    /// The validation mode that applies to this field.
    pub fn mode(self) -> ValidationMode {
        match self {
            Self::FirstName | Self::LastName => ValidationMode::Name,
            Self::Phone => ValidationMode::Phone,
        }
    }
}

/// A validation failure tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.field, self.message)
    }
}

/// Stateful guard for a single text field.
///
/// # Example
///
/// ```
/// use contacts_manager::validation::{FieldValidator, ValidationMode};
///
/// let mut guard = FieldValidator::new(ValidationMode::Phone);
/// assert!(guard.validate_insertion("123", 0, 0, "+"));
/// assert!(!guard.validate_insertion("+123", 4, 0, "+"));
/// assert!(guard.has_error());
/// ```
#[derive(Debug, Clone)]
pub struct FieldValidator {
    mode: ValidationMode,
    error: Option<String>,
}

impl FieldValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode, error: None }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Whether the field is currently in an error state.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The current error message, empty when the field is clean.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }

    /// Check a single typed insertion.
    ///
    /// `current` is the field text before the edit, `selection_start` the
    /// caret position in characters. The replaced selection does not affect
    /// the decision; acceptance is judged against `incoming` alone, except
    /// that phone mode refuses a `+` when one is already present or the
    /// caret is not at the start.
    ///
    /// Returns `true` when the insertion should be applied. On rejection the
    /// insertion is suppressed and the error state names the offending text.
    pub fn validate_insertion(
        &mut self,
        current: &str,
        selection_start: usize,
        _selection_len: usize,
        incoming: &str,
    ) -> bool {
        if insertion_allowed(self.mode, current, selection_start, incoming) {
            self.clear_error();
            true
        } else {
            self.set_error(rejection_message(self.mode, incoming));
            false
        }
    }

    /// Check a paste replacing the given selection.
    ///
    /// Unlike insertions, the whole resulting text is validated: the pasted
    /// string is spliced over the selection and the result must match the
    /// mode's fragment rule.
    pub fn validate_paste(
        &mut self,
        current: &str,
        selection_start: usize,
        selection_len: usize,
        pasted: &str,
    ) -> bool {
        let resulting = splice(current, selection_start, selection_len, pasted);
        if paste_allowed(self.mode, &resulting) {
            self.clear_error();
            true
        } else {
            self.set_error(format!(
                "Pasted text contains invalid characters for {}.",
                self.mode.label().to_lowercase()
            ));
            false
        }
    }

    /// Check the complete value, run after any change to the field.
    ///
    /// Returns `true` when the value is valid; otherwise the error state
    /// carries the first applicable failure.
    pub fn validate_value(&mut self, text: &str) -> bool {
        match value_error(self.mode, text) {
            None => {
                self.clear_error();
                true
            }
            Some(message) => {
                self.set_error(message);
                false
            }
        }
    }

    fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Insertion rule, independent of any validator state.
pub fn insertion_allowed(
    mode: ValidationMode,
    current: &str,
    selection_start: usize,
    incoming: &str,
) -> bool {
    match mode {
        ValidationMode::Name => rules::name_fragment_ok(incoming),
        ValidationMode::Phone => {
            if current.is_empty() {
                rules::phone_seed_ok(incoming)
            } else if incoming == "+" {
                !current.contains('+') && selection_start == 0
            } else {
                rules::digits_ok(incoming)
            }
        }
    }
}

/// Paste rule over the complete resulting text.
pub fn paste_allowed(mode: ValidationMode, resulting: &str) -> bool {
    match mode {
        ValidationMode::Name => rules::name_fragment_ok(resulting),
        ValidationMode::Phone => rules::phone_fragment_ok(resulting),
    }
}

/// Whole-value rule. `None` means the value is valid.
pub fn value_error(mode: ValidationMode, text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return Some(format!("{} is required.", mode.label()));
    }

    match mode {
        ValidationMode::Name => {
            if rules::name_value_ok(text) {
                None
            } else {
                Some(format!("{} contains invalid characters.", mode.label()))
            }
        }
        ValidationMode::Phone => {
            let digits = rules::digit_count(text);
            if !(10..=15).contains(&digits) {
                Some("Phone number must be between 10 and 15 digits.".to_string())
            } else if !rules::phone_value_ok(text) {
                Some("Phone number can only contain digits and a leading '+'.".to_string())
            } else {
                None
            }
        }
    }
}

/// Validate a whole contact record before it may be committed.
///
/// Errors are keyed by [`ContactField`] so callers can attach each message
/// to the right input.
pub fn validate_contact(
    first_name: &str,
    last_name: &str,
    phone: &str,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    for (field, text) in [
        (ContactField::FirstName, first_name),
        (ContactField::LastName, last_name),
        (ContactField::Phone, phone),
    ] {
        if let Some(message) = value_error(field.mode(), text) {
            errors.push(FieldError { field, message });
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn rejection_message(mode: ValidationMode, incoming: &str) -> String {
    match mode {
        ValidationMode::Name => format!(
            "'{}' is not allowed. Only letters, spaces, apostrophes, hyphens, and dots are permitted.",
            incoming
        ),
        ValidationMode::Phone => format!(
            "'{}' is not allowed. Only digits and a single leading '+' are permitted.",
            incoming
        ),
    }
}

/// Replace the selected character range of `current` with `incoming`.
/// Out-of-range selections are clamped, matching text box behavior.
fn splice(current: &str, selection_start: usize, selection_len: usize, incoming: &str) -> String {
    let chars: Vec<char> = current.chars().collect();
    let start = selection_start.min(chars.len());
    let len = selection_len.min(chars.len() - start);

    let mut result: String = chars[..start].iter().collect();
    result.push_str(incoming);
    result.extend(chars[start + len..].iter());
    result
}
