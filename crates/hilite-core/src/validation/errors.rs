//! Field-level validation errors.

use std::fmt;

/// Input field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    AcceptedTerms,
    Bio,
    Content,
}

impl Field {
    /// Request body key of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::AcceptedTerms => "acceptedTerms",
            Field::Bio => "bio",
            Field::Content => "content",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Password confirmation",
            Field::AcceptedTerms => "Terms and conditions",
            Field::Bio => "Bio",
            Field::Content => "Content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule of the password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyRule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl PolicyRule {
    /// Stable machine-readable name of the rule.
    pub fn code(self) -> &'static str {
        match self {
            PolicyRule::Length => "length",
            PolicyRule::Uppercase => "uppercase",
            PolicyRule::Lowercase => "lowercase",
            PolicyRule::Digit => "digit",
            PolicyRule::Symbol => "symbol",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PolicyRule::Length => "Password must be between 8 and 72 characters",
            PolicyRule::Uppercase => "Password must contain at least one uppercase letter",
            PolicyRule::Lowercase => "Password must contain at least one lowercase letter",
            PolicyRule::Digit => "Password must contain at least one number",
            PolicyRule::Symbol => "Password must contain at least one special character",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Required field absent or empty.
    Missing,
    /// Present but structurally malformed (email grammar).
    InvalidFormat,
    TooShort { min: usize },
    TooLong { max: usize },
    PolicyViolation(PolicyRule),
    /// Two fields required to be equal are not.
    Mismatch,
    /// A required affirmative flag was not explicitly `true`.
    Required,
}

impl FieldErrorKind {
    /// Stable machine-readable code, used by clients to pick their own wording.
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "missing",
            FieldErrorKind::InvalidFormat => "invalid_format",
            FieldErrorKind::TooShort { .. } => "too_short",
            FieldErrorKind::TooLong { .. } => "too_long",
            FieldErrorKind::PolicyViolation(_) => "policy_violation",
            FieldErrorKind::Mismatch => "mismatch",
            FieldErrorKind::Required => "required",
        }
    }

    /// The password policy rule behind a `PolicyViolation`.
    pub fn policy_rule(&self) -> Option<PolicyRule> {
        match self {
            FieldErrorKind::PolicyViolation(rule) => Some(*rule),
            _ => None,
        }
    }
}

/// A single field and the reason it failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Human-readable message, suitable for display next to the input.
    pub fn message(&self) -> String {
        let label = self.field.label();
        match &self.kind {
            FieldErrorKind::Missing => format!("{label} is required"),
            FieldErrorKind::InvalidFormat => match self.field {
                Field::Email => "Invalid email address".to_string(),
                _ => format!("{label} has an invalid format"),
            },
            FieldErrorKind::TooShort { min } => {
                format!("{label} must be at least {min} characters")
            }
            FieldErrorKind::TooLong { max } => {
                format!("{label} must be at most {max} characters")
            }
            FieldErrorKind::PolicyViolation(rule) => rule.message().to_string(),
            FieldErrorKind::Mismatch => "Passwords do not match".to_string(),
            FieldErrorKind::Required => format!("{label} must be accepted"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Every field error produced by one validation pass.
///
/// Never empty when returned as the `Err` side of a validation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, kind: FieldErrorKind) {
        self.0.push(FieldError::new(field, kind));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Errors attached to one field, in the order they were found.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    /// Whether `field` failed with exactly `kind`.
    pub fn contains(&self, field: Field, kind: &FieldErrorKind) -> bool {
        self.for_field(field).any(|e| &e.kind == kind)
    }

    /// `Ok(build())` when nothing was collected, otherwise the collected errors.
    pub fn into_result<T>(self, build: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(build())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
