//! Rule tables: per field, an ordered list of named predicates and the error
//! each one produces when it fails.

use validator::ValidateEmail;

use super::errors::FieldErrorKind;

pub const EMAIL_MAX_LENGTH: usize = 254;
pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 120;
pub const BIO_MAX_LENGTH: usize = 1000;
pub const CONTENT_MAX_LENGTH: usize = 2000;

/// A predicate over a (trimmed) field value and the error it reports.
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub kind: FieldErrorKind,
}

pub const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        kind: FieldErrorKind::Missing,
    },
    Rule {
        check: email_within_limit,
        kind: FieldErrorKind::InvalidFormat,
    },
    Rule {
        check: is_email,
        kind: FieldErrorKind::InvalidFormat,
    },
    Rule {
        check: local_part_is_dot_atom,
        kind: FieldErrorKind::InvalidFormat,
    },
];

pub const NAME_RULES: &[Rule] = &[
    Rule {
        check: name_long_enough,
        kind: FieldErrorKind::TooShort {
            min: NAME_MIN_LENGTH,
        },
    },
    Rule {
        check: name_within_limit,
        kind: FieldErrorKind::TooLong {
            max: NAME_MAX_LENGTH,
        },
    },
];

pub const BIO_RULES: &[Rule] = &[Rule {
    check: bio_within_limit,
    kind: FieldErrorKind::TooLong {
        max: BIO_MAX_LENGTH,
    },
}];

pub const CONTENT_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        kind: FieldErrorKind::Missing,
    },
    Rule {
        check: content_within_limit,
        kind: FieldErrorKind::TooLong {
            max: CONTENT_MAX_LENGTH,
        },
    },
];

/// First failing rule of the table, if any.
///
/// Field tables are ordered from coarse to fine, so only one error per field
/// is reported (a name cannot be both too short and too long).
pub fn first_violation(value: &str, rules: &[Rule]) -> Option<FieldErrorKind> {
    rules
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.kind.clone())
}

/// Length in characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn is_email(value: &str) -> bool {
    value.validate_email()
}

/// `validator` accepts stray dots in the local part; a dot-atom may not
/// start or end with `.` nor contain `..`.
fn local_part_is_dot_atom(value: &str) -> bool {
    let Some((local, _domain)) = value.rsplit_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

fn email_within_limit(value: &str) -> bool {
    char_len(value) <= EMAIL_MAX_LENGTH
}

fn name_long_enough(value: &str) -> bool {
    char_len(value) >= NAME_MIN_LENGTH
}

fn name_within_limit(value: &str) -> bool {
    char_len(value) <= NAME_MAX_LENGTH
}

fn bio_within_limit(value: &str) -> bool {
    char_len(value) <= BIO_MAX_LENGTH
}

fn content_within_limit(value: &str) -> bool {
    char_len(value) <= CONTENT_MAX_LENGTH
}
