//! Field-level validation rules
//!
//! Every rule is a pure function over a single field value. Rules never
//! touch form state or the view; the form validator applies their results.

use super::field::{FieldId, FormField, QueryType};
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const QUERY_TYPE_MESSAGE: &str = "please select a query type";
pub const CONSENT_MESSAGE: &str = "To submit this form, please consent to being contacted";

// local part, "@", domain, ".", suffix; no further TLD checks
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Outcome of validating one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl ValidationResult {
    pub const VALID: Self = Self {
        valid: true,
        message: None,
    };

    pub fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// Run the rule registered for the field's identifier
pub fn validate(field: &FormField) -> ValidationResult {
    match field.id {
        FieldId::FirstName | FieldId::LastName | FieldId::Message => {
            validate_required(field.as_text())
        }
        FieldId::Email => validate_email(field.as_text()),
        FieldId::QueryType => validate_query_type(field.as_choice()),
        FieldId::Consent => validate_consent(field.as_flag()),
    }
}

/// Trim whitespace, counting the byte order mark as blank too
fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn validate_required(value: &str) -> ValidationResult {
    if trim_blank(value).is_empty() {
        ValidationResult::invalid(REQUIRED_MESSAGE)
    } else {
        ValidationResult::VALID
    }
}

pub fn validate_email(value: &str) -> ValidationResult {
    let value = trim_blank(value);
    if value.is_empty() {
        return ValidationResult::invalid(REQUIRED_MESSAGE);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return ValidationResult::invalid(INVALID_EMAIL_MESSAGE);
    }
    ValidationResult::VALID
}

pub fn validate_query_type(selected: Option<QueryType>) -> ValidationResult {
    match selected {
        Some(_) => ValidationResult::VALID,
        None => ValidationResult::invalid(QUERY_TYPE_MESSAGE),
    }
}

pub fn validate_consent(checked: bool) -> ValidationResult {
    if checked {
        ValidationResult::VALID
    } else {
        ValidationResult::invalid(CONSENT_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod required {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_invalid() {
            assert_eq!(validate_required(""), ValidationResult::invalid(REQUIRED_MESSAGE));
        }

        #[test]
        fn test_whitespace_only_is_invalid() {
            assert_eq!(
                validate_required("  \t \n"),
                ValidationResult::invalid(REQUIRED_MESSAGE)
            );
        }

        #[test]
        fn test_byte_order_mark_only_is_invalid() {
            assert_eq!(
                validate_required("\u{feff}"),
                ValidationResult::invalid(REQUIRED_MESSAGE)
            );
            assert_eq!(
                validate_required(" \u{feff}\t"),
                ValidationResult::invalid(REQUIRED_MESSAGE)
            );
        }

        #[test]
        fn test_any_content_is_valid() {
            assert_eq!(validate_required(" Ann "), ValidationResult::VALID);
            assert_eq!(validate_required("x"), ValidationResult::VALID);
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_byte_order_mark_is_blank() {
            assert_eq!(
                validate_email("\u{feff}"),
                ValidationResult::invalid(REQUIRED_MESSAGE)
            );
            assert_eq!(validate_email("\u{feff}a@b.co"), ValidationResult::VALID);
            assert_eq!(
                validate_email("a\u{feff}b@c.co"),
                ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
            );
        }

        #[test]
        fn test_simple_address_is_valid() {
            assert_eq!(validate_email("a@b.co"), ValidationResult::VALID);
            assert_eq!(validate_email("ann@lee.com"), ValidationResult::VALID);
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert_eq!(validate_email("  ann@lee.com  "), ValidationResult::VALID);
        }

        #[test]
        fn test_uppercase_is_valid() {
            assert_eq!(validate_email("ANN@LEE.COM"), ValidationResult::VALID);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_email(""), ValidationResult::invalid(REQUIRED_MESSAGE));
            assert_eq!(validate_email("   "), ValidationResult::invalid(REQUIRED_MESSAGE));
        }

        #[test]
        fn test_missing_dot_suffix_is_invalid() {
            assert_eq!(
                validate_email("a@b"),
                ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
            );
        }

        #[test]
        fn test_double_at_is_invalid() {
            assert_eq!(
                validate_email("a@@b.co"),
                ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
            );
        }

        #[test]
        fn test_inner_whitespace_is_invalid() {
            assert_eq!(
                validate_email("a b@c.de"),
                ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
            );
        }

        #[test]
        fn test_missing_local_part_is_invalid() {
            assert_eq!(
                validate_email("@b.co"),
                ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
            );
        }

        #[test]
        fn test_multi_label_domain_is_valid() {
            assert_eq!(validate_email("a@mail.b.co.uk"), ValidationResult::VALID);
        }
    }

    #[test]
    fn test_query_type_requires_selection() {
        assert_eq!(
            validate_query_type(None),
            ValidationResult::invalid(QUERY_TYPE_MESSAGE)
        );
        assert_eq!(
            validate_query_type(Some(QueryType::GeneralEnquiry)),
            ValidationResult::VALID
        );
    }

    #[test]
    fn test_consent_requires_checked_box() {
        assert_eq!(validate_consent(false), ValidationResult::invalid(CONSENT_MESSAGE));
        assert_eq!(validate_consent(true), ValidationResult::VALID);
    }

    #[test]
    fn test_validate_dispatches_on_field_id() {
        let mut message = FormField::text(FieldId::Message, true);
        assert_eq!(validate(&message), ValidationResult::invalid(REQUIRED_MESSAGE));
        message.set_text("Hi".to_string());
        assert_eq!(validate(&message), ValidationResult::VALID);

        let consent = FormField::checkbox(FieldId::Consent);
        assert_eq!(validate(&consent), ValidationResult::invalid(CONSENT_MESSAGE));

        let query = FormField::radio(FieldId::QueryType);
        assert_eq!(validate(&query), ValidationResult::invalid(QUERY_TYPE_MESSAGE));
    }

    #[test]
    fn test_validate_does_not_mutate_field() {
        let field = FormField::text(FieldId::Email, false);
        let before = field.clone();
        let _ = validate(&field);
        assert_eq!(field, before);
    }
}
