// =====================================================================================
// FIELD VALIDATION - BOUNDARY CHECKS FOR FORM SUBMISSIONS
// =====================================================================================

use axum::extract::rejection::JsonRejection;
use once_cell::sync::Lazy;
use regex::Regex;

use shared_models::{AppError, ValidationIssue};

pub const RULE_REQUIRED: &str = "required";
pub const RULE_MIN_LENGTH: &str = "min_length";
pub const RULE_EMAIL: &str = "email";
pub const RULE_JSON: &str = "json";

// Local part: dot-separated runs, no leading, trailing or doubled dots, and it
// may not end in an apostrophe. Domain labels start alphanumeric.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9_'+-]+\.)*[a-z0-9_'+-]*[a-z0-9_+-]@(?:[a-z0-9][a-z0-9-]*\.)+[a-z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A body that could not be parsed at all is reported as a single issue on `body`.
pub fn rejected_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(vec![ValidationIssue::new("body", RULE_JSON, rejection.body_text())])
}

/// Collects every failing field instead of stopping at the first one.
#[derive(Debug, Default)]
pub struct FieldValidator {
    issues: Vec<ValidationIssue>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A missing field is reported under `required` with the rule's own message.
    fn present<'a>(&mut self, field: &str, value: Option<&'a str>, message: &str) -> Option<&'a str> {
        if value.is_none() {
            self.issues.push(ValidationIssue::new(field, RULE_REQUIRED, message));
        }
        value
    }

    /// Field must be present and non-empty.
    pub fn required(&mut self, field: &str, value: Option<&str>, message: &str) -> bool {
        self.min_chars(field, value, 1, message)
    }

    /// Field must be present and at least `min` characters long.
    pub fn min_chars(&mut self, field: &str, value: Option<&str>, min: usize, message: &str) -> bool {
        let Some(value) = self.present(field, value, message) else {
            return false;
        };

        if value.chars().count() < min {
            let rule = if min == 1 { RULE_REQUIRED } else { RULE_MIN_LENGTH };
            self.issues.push(ValidationIssue::new(field, rule, message));
            return false;
        }
        true
    }

    pub fn email(&mut self, field: &str, value: Option<&str>, message: &str) -> bool {
        let Some(value) = self.present(field, value, message) else {
            return false;
        };

        if !is_valid_email(value) {
            self.issues.push(ValidationIssue::new(field, RULE_EMAIL, message));
            return false;
        }
        true
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.issues))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("yemisi@dentalcare.ng"));
        assert!(is_valid_email("first.last+booking@mail.example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_local_part_dots() {
        assert!(is_valid_email("a.b.c@example.com"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email(".a@example.com"));
        assert!(!is_valid_email("a.@example.com"));
    }

    #[test]
    fn test_email_apostrophes_and_case() {
        assert!(is_valid_email("o'neil@example.com"));
        assert!(!is_valid_email("oneil'@example.com"));
        assert!(is_valid_email("Yemisi.Ade@DentalCare.NG"));
    }

    #[test]
    fn test_email_domain_labels_start_alphanumeric() {
        assert!(is_valid_email("a@x-ray.example.com"));
        assert!(!is_valid_email("a@-x.com"));
        assert!(!is_valid_email("a@example..com"));
        assert!(!is_valid_email("a@example.c0m"));
    }

    #[test]
    fn test_missing_field_is_required_issue() {
        let mut validator = FieldValidator::new();
        assert!(!validator.min_chars("phone", None, 10, "Phone number must be at least 10 digits"));

        let issues = validator.into_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "phone");
        assert_eq!(issues[0].rule, RULE_REQUIRED);
        assert_eq!(issues[0].message, "Phone number must be at least 10 digits");
    }

    #[test]
    fn test_missing_email_uses_rule_message() {
        let mut validator = FieldValidator::new();
        assert!(!validator.email("email", None, "Invalid email address"));
        assert_eq!(validator.issues()[0].rule, RULE_REQUIRED);
        assert_eq!(validator.issues()[0].message, "Invalid email address");
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        let mut validator = FieldValidator::new();
        assert!(validator.min_chars("lastName", Some("Ọ̀ṣ"), 2, "too short"));
        assert!(!validator.min_chars("firstName", Some("A"), 2, "First name must be at least 2 characters"));

        let issues = validator.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RULE_MIN_LENGTH);
        assert_eq!(issues[0].message, "First name must be at least 2 characters");
    }

    #[test]
    fn test_required_rejects_empty_string() {
        let mut validator = FieldValidator::new();
        assert!(!validator.required("service", Some(""), "Service is required"));
        assert_eq!(validator.issues()[0].rule, RULE_REQUIRED);
        assert_eq!(validator.issues()[0].message, "Service is required");
    }

    #[test]
    fn test_collects_all_failures() {
        let mut validator = FieldValidator::new();
        validator.email("email", Some("nope"), "Invalid email address");
        validator.min_chars("message", Some("hi"), 10, "Message must be at least 10 characters");
        validator.required("location", Some("Ikeja"), "Location is required");

        assert_matches!(validator.finish(), Err(AppError::Validation(issues)) if issues.len() == 2);
    }

    #[test]
    fn test_finish_ok_when_clean() {
        let mut validator = FieldValidator::new();
        validator.required("location", Some("Ikeja"), "Location is required");
        assert!(validator.is_valid());
        assert_matches!(validator.finish(), Ok(()));
    }
}
