//! Login and registration input validation.
//!
//! Both validators are pure: they take raw, untrusted form values and either
//! return a normalized typed value or every field error found in one pass.

use std::fmt;

use serde_json::Value;

use super::errors::{Field, FieldErrorKind, FieldErrors};
use super::password;
use super::rules::{self, EMAIL_RULES, NAME_RULES};

/// Raw login form values, as submitted.
#[derive(Clone, Copy)]
pub struct LoginForm<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Raw registration form values, as submitted.
///
/// `accepted_terms` keeps the submitted JSON value so that anything other than
/// a literal `true` (a string, a number, a missing key) can be rejected.
#[derive(Clone, Copy)]
pub struct RegistrationForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub accepted_terms: Option<&'a Value>,
}

/// A validated login request.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginInput {
    email: String,
    password: String,
}

impl LoginInput {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// A validated registration request.
///
/// Confirmation and terms acceptance are checked but not carried: once valid
/// they are implied by the value existing at all.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterInput {
    name: String,
    email: String,
    password: String,
}

impl RegisterInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for RegisterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Validate a login submission.
///
/// Only checks that a password was supplied; strength is enforced at
/// registration.
pub fn validate_login(form: &LoginForm<'_>) -> Result<LoginInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = check_field(Field::Email, form.email.trim(), EMAIL_RULES, &mut errors);

    if form.password.is_empty() {
        errors.push(Field::Password, FieldErrorKind::Missing);
    }

    errors.into_result(|| LoginInput {
        email: email.to_string(),
        password: form.password.to_string(),
    })
}

/// Validate a registration submission, reporting every violated field.
pub fn validate_registration(form: &RegistrationForm<'_>) -> Result<RegisterInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = check_field(Field::Name, form.name.trim(), NAME_RULES, &mut errors);
    let email = check_field(Field::Email, form.email.trim(), EMAIL_RULES, &mut errors);

    for rule in password::violations(form.password) {
        errors.push(Field::Password, FieldErrorKind::PolicyViolation(rule));
    }

    if form.confirm_password != form.password {
        errors.push(Field::ConfirmPassword, FieldErrorKind::Mismatch);
    }

    if !matches!(form.accepted_terms, Some(Value::Bool(true))) {
        errors.push(Field::AcceptedTerms, FieldErrorKind::Required);
    }

    errors.into_result(|| RegisterInput {
        name: name.to_string(),
        email: email.to_string(),
        password: form.password.to_string(),
    })
}

/// Run a field's rule table, recording its first failure. Returns the value
/// unchanged so callers can keep the normalized form.
pub(crate) fn check_field<'a>(
    field: Field,
    value: &'a str,
    table: &[rules::Rule],
    errors: &mut FieldErrors,
) -> &'a str {
    if let Some(kind) = rules::first_violation(value, table) {
        errors.push(field, kind);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::errors::PolicyRule;
    use serde_json::json;

    static TERMS: Value = Value::Bool(true);

    fn login(email: &str, password: &str) -> Result<LoginInput, FieldErrors> {
        validate_login(&LoginForm { email, password })
    }

    fn registration<'a>(
        name: &'a str,
        password: &'a str,
        confirm_password: &'a str,
        accepted_terms: Option<&'a Value>,
    ) -> RegistrationForm<'a> {
        RegistrationForm {
            name,
            email: "jane@example.com",
            password,
            confirm_password,
            accepted_terms,
        }
    }

    #[test]
    fn test_login_success_trims_email() {
        let input = login("  jane@example.com \n", "x").unwrap();
        assert_eq!(input.email(), "jane@example.com");
        assert_eq!(input.password(), "x");
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        for email in ["not-an-email", "jane@", "@example.com", "jane example@x.com"] {
            let err = login(email, "x").unwrap_err();
            assert!(
                err.contains(Field::Email, &FieldErrorKind::InvalidFormat),
                "{email}"
            );
        }
    }

    #[test]
    fn test_login_blank_email_is_missing() {
        let err = login("   ", "x").unwrap_err();
        assert!(err.contains(Field::Email, &FieldErrorKind::Missing));
    }

    #[test]
    fn test_login_rejects_stray_dots_in_local_part() {
        for email in ["a..b@example.com", ".a@example.com", "a.@example.com"] {
            let err = login(email, "x").unwrap_err();
            assert_eq!(err.len(), 1, "{email}");
            assert!(
                err.contains(Field::Email, &FieldErrorKind::InvalidFormat),
                "{email}"
            );
        }
        assert!(login("a.b.c@example.com", "x").is_ok());
    }

    /// 64-char local part and a domain of `63.63.<last>.com`.
    fn email_of_length(len: usize) -> String {
        let last = len - (64 + 1 + 63 + 1 + 63 + 1 + 4);
        format!(
            "{}@{}.{}.{}.com",
            "a".repeat(64),
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(last)
        )
    }

    #[test]
    fn test_login_email_length_bound() {
        let longest = email_of_length(254);
        assert_eq!(longest.chars().count(), 254);
        assert_eq!(login(&longest, "x").unwrap().email(), longest);

        let too_long = email_of_length(255);
        assert_eq!(too_long.chars().count(), 255);
        let err = login(&too_long, "x").unwrap_err();
        assert!(err.contains(Field::Email, &FieldErrorKind::InvalidFormat));
    }

    #[test]
    fn test_login_missing_password() {
        let err = login("a@b.com", "").unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.contains(Field::Password, &FieldErrorKind::Missing));
    }

    #[test]
    fn test_login_does_not_check_strength() {
        assert!(login("a@b.com", "weak").is_ok());
    }

    #[test]
    fn test_registration_success() {
        let form = RegistrationForm {
            name: "  Jane Doe ",
            email: " jane@example.com",
            password: "Valid123!",
            confirm_password: "Valid123!",
            accepted_terms: Some(&TERMS),
        };
        let input = validate_registration(&form).unwrap();
        assert_eq!(input.name(), "Jane Doe");
        assert_eq!(input.email(), "jane@example.com");
        assert_eq!(input.password(), "Valid123!");
    }

    #[test]
    fn test_registration_mismatch_on_confirm_field() {
        let form = registration("Jane", "Valid123!", "Different123!", Some(&TERMS));
        let err = validate_registration(&form).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.contains(Field::ConfirmPassword, &FieldErrorKind::Mismatch));

        // Reported even when the password itself is invalid.
        let form = registration("Jane", "weak", "weaker", Some(&TERMS));
        let err = validate_registration(&form).unwrap_err();
        assert!(err.contains(Field::ConfirmPassword, &FieldErrorKind::Mismatch));
    }

    #[test]
    fn test_registration_terms_must_be_literal_true() {
        let not_accepted = [
            None,
            Some(json!(false)),
            Some(json!("true")),
            Some(json!(1)),
            Some(Value::Null),
        ];
        for terms in &not_accepted {
            let form = registration("Jane", "Valid123!", "Valid123!", terms.as_ref());
            let err = validate_registration(&form).unwrap_err();
            assert!(
                err.contains(Field::AcceptedTerms, &FieldErrorKind::Required),
                "{terms:?}"
            );
        }

        let form = registration("Jane", "Valid123!", "Valid123!", Some(&TERMS));
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn test_registration_reports_every_field() {
        let form = registration("A", "weak", "weak", Some(&TERMS));
        let err = validate_registration(&form).unwrap_err();

        assert!(err.contains(Field::Name, &FieldErrorKind::TooShort { min: 2 }));
        assert!(err.for_field(Field::Password).count() > 0);
        assert!(err.contains(
            Field::Password,
            &FieldErrorKind::PolicyViolation(PolicyRule::Uppercase)
        ));
    }

    #[test]
    fn test_registration_all_fields_invalid() {
        let form = RegistrationForm {
            name: "",
            email: "nope",
            password: "",
            confirm_password: "x",
            accepted_terms: None,
        };
        let err = validate_registration(&form).unwrap_err();
        let fields: Vec<Field> = err.iter().map(|e| e.field).collect();
        for field in [
            Field::Name,
            Field::Email,
            Field::Password,
            Field::ConfirmPassword,
            Field::AcceptedTerms,
        ] {
            assert!(fields.contains(&field), "{field}");
        }
    }

    #[test]
    fn test_registration_name_boundaries() {
        let ok = registration("Al", "Valid123!", "Valid123!", Some(&TERMS));
        assert!(validate_registration(&ok).is_ok());

        let short = registration(" A ", "Valid123!", "Valid123!", Some(&TERMS));
        let err = validate_registration(&short).unwrap_err();
        assert!(err.contains(Field::Name, &FieldErrorKind::TooShort { min: 2 }));

        let max = "n".repeat(120);
        let ok = registration(&max, "Valid123!", "Valid123!", Some(&TERMS));
        assert!(validate_registration(&ok).is_ok());

        let over = "n".repeat(121);
        let long = registration(&over, "Valid123!", "Valid123!", Some(&TERMS));
        let err = validate_registration(&long).unwrap_err();
        assert!(err.contains(Field::Name, &FieldErrorKind::TooLong { max: 120 }));
    }

    #[test]
    fn test_registration_password_boundaries() {
        let eight = "Abcde1!x";
        let form = registration("Jane", eight, eight, Some(&TERMS));
        assert!(validate_registration(&form).is_ok());

        let seven = "Abcd1!x";
        let form = registration("Jane", seven, seven, Some(&TERMS));
        let err = validate_registration(&form).unwrap_err();
        assert!(err.contains(
            Field::Password,
            &FieldErrorKind::PolicyViolation(PolicyRule::Length)
        ));

        let seventy_two = format!("Aa1!{}", "x".repeat(68));
        let form = registration("Jane", &seventy_two, &seventy_two, Some(&TERMS));
        assert!(validate_registration(&form).is_ok());

        let seventy_three = format!("Aa1!{}", "x".repeat(69));
        let form = registration("Jane", &seventy_three, &seventy_three, Some(&TERMS));
        assert!(validate_registration(&form).is_err());
    }

    #[test]
    fn test_registration_is_idempotent() {
        let form = registration("A", "weak", "nope", None);
        assert_eq!(validate_registration(&form), validate_registration(&form));

        let form = registration("Jane", "Valid123!", "Valid123!", Some(&TERMS));
        assert_eq!(validate_registration(&form), validate_registration(&form));
    }

    #[test]
    fn test_debug_redacts_password() {
        let input = login("a@b.com", "hunter2").unwrap();
        let rendered = format!("{input:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[redacted]"));
    }
}
