//! Farmer registration form validation.
//!
//! Every field is checked independently so the form can show all problems at
//! once:
//! - `name`, `location`, `crops`: required (non-empty after trimming)
//! - `mobile`: required, and must be exactly 10 digits starting with 6, 7, 8 or 9

use crate::model::FarmerInput;
use std::collections::BTreeMap;
use std::fmt;

/// Registration form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Mobile,
    Location,
    Crops,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Mobile, Field::Location, Field::Crops];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Mobile => "mobile",
            Field::Location => "location",
            Field::Crops => "crops",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty after trimming
    Required(Field),
    /// Mobile is present but is not a 10-digit Indian number
    InvalidMobile,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(Field::Name) => write!(f, "Name is required"),
            FieldError::Required(Field::Mobile) => write!(f, "Mobile number is required"),
            FieldError::Required(Field::Location) => write!(f, "Location is required"),
            FieldError::Required(Field::Crops) => write!(f, "Main crops are required"),
            FieldError::InvalidMobile => write!(f, "Enter a valid 10-digit Indian mobile"),
        }
    }
}

/// Field-level errors for one form submission. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    fn insert(&mut self, field: Field, err: FieldError) {
        self.0.insert(field, err);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, err)| format!("{}: {}", field, err))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Validates a registration form, collecting every field error.
///
/// # Examples
/// ```
/// use farm2homeapp::model::FarmerInput;
/// use farm2homeapp::validation::{validate, Field};
///
/// let ok = FarmerInput::new("Ravi", "9876543210", "Hosur", "Tomato");
/// assert!(validate(&ok).is_empty());
///
/// let bad = FarmerInput::new("", "123", "Hosur", "Tomato");
/// let errors = validate(&bad);
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains(Field::Name));
/// assert!(errors.contains(Field::Mobile));
/// ```
pub fn validate(input: &FarmerInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if input.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required(Field::Name));
    }

    let mobile = input.mobile.trim();
    if mobile.is_empty() {
        errors.insert(Field::Mobile, FieldError::Required(Field::Mobile));
    } else if !is_valid_mobile(mobile) {
        errors.insert(Field::Mobile, FieldError::InvalidMobile);
    }

    if input.location.trim().is_empty() {
        errors.insert(Field::Location, FieldError::Required(Field::Location));
    }

    if input.crops.trim().is_empty() {
        errors.insert(Field::Crops, FieldError::Required(Field::Crops));
    }

    errors
}

/// Exactly ten ASCII digits, the first one in 6..=9.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let bytes = mobile.as_bytes();
    bytes.len() == 10
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, mobile: &str, location: &str, crops: &str) -> FarmerInput {
        FarmerInput::new(name, mobile, location, crops)
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        let errors = validate(&input("Ravi", "9876543210", "Hosur", "Tomato"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_mobile_rules() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("6000000000"));
        assert!(!is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("5876543210"));
        assert!(!is_valid_mobile("98765432"));
        assert!(!is_valid_mobile("98765432100"));
        assert!(!is_valid_mobile("98765-4321"));
        assert!(!is_valid_mobile("９８７６５４３２１０"));
    }

    #[test]
    fn test_mobile_is_trimmed_before_checking() {
        let errors = validate(&input("Ravi", "  9876543210 ", "Hosur", "Tomato"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_name_and_bad_mobile_yield_exactly_two_errors() {
        let errors = validate(&input("", "1234567890", "Hosur", "Tomato"));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::Name),
            Some(&FieldError::Required(Field::Name))
        );
        assert_eq!(errors.get(Field::Mobile), Some(&FieldError::InvalidMobile));
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let errors = validate(&input("   ", "\t", " ", "\n"));
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(Field::Mobile),
            Some(&FieldError::Required(Field::Mobile))
        );
    }

    #[test]
    fn test_errors_iterate_in_field_order() {
        let errors = validate(&input("", "123", "", ""));
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_messages() {
        let errors = validate(&input("", "123", "", ""));
        let messages: Vec<String> = errors.iter().map(|(_, e)| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Enter a valid 10-digit Indian mobile",
                "Location is required",
                "Main crops are required",
            ]
        );
    }
}
