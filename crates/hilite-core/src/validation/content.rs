//! Free-text fields: profile bio and post/comment bodies.

use super::credentials::check_field;
use super::errors::{Field, FieldErrors};
use super::rules::{BIO_RULES, CONTENT_RULES};

/// Trim and bound a bio. `None` means the bio is cleared.
pub fn validate_bio(raw: &str) -> Result<Option<String>, FieldErrors> {
    let mut errors = FieldErrors::new();
    let bio = check_field(Field::Bio, raw.trim(), BIO_RULES, &mut errors);
    errors.into_result(|| (!bio.is_empty()).then(|| bio.to_string()))
}

/// Trim and bound the body of a post or comment.
pub fn validate_post_content(raw: &str) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let content = check_field(Field::Content, raw.trim(), CONTENT_RULES, &mut errors);
    errors.into_result(|| content.to_string())
}
