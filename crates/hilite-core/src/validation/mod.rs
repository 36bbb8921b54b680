//! Input validation, run before anything reaches the authentication service
//! or the store.
//!
//! Invalid input is a normal outcome: every validator returns `Result` with a
//! [`FieldErrors`] list, never panics.

mod content;
mod credentials;
mod errors;
pub mod password;
mod rules;

pub use content::{validate_bio, validate_post_content};
pub use credentials::{
    LoginForm, LoginInput, RegisterInput, RegistrationForm, validate_login, validate_registration,
};
pub use errors::{Field, FieldError, FieldErrorKind, FieldErrors, PolicyRule};
pub use rules::{
    BIO_MAX_LENGTH, CONTENT_MAX_LENGTH, EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
