//! Password policy, applied only when an account is created.

use super::errors::PolicyRule;
use super::rules::char_len;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 72;

/// Characters that satisfy the symbol rule.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

const POLICY: [(PolicyRule, fn(&str) -> bool); 5] = [
    (PolicyRule::Length, has_valid_length),
    (PolicyRule::Uppercase, has_uppercase),
    (PolicyRule::Lowercase, has_lowercase),
    (PolicyRule::Digit, has_digit),
    (PolicyRule::Symbol, has_symbol),
];

/// Every policy rule `password` breaks, in policy order. Empty when it passes.
pub fn violations(password: &str) -> Vec<PolicyRule> {
    POLICY
        .iter()
        .filter(|(_, check)| !check(password))
        .map(|(rule, _)| *rule)
        .collect()
}

/// Check a single rule.
pub fn satisfies(password: &str, rule: PolicyRule) -> bool {
    POLICY
        .iter()
        .find(|(r, _)| *r == rule)
        .is_some_and(|(_, check)| check(password))
}

fn has_valid_length(password: &str) -> bool {
    (MIN_LENGTH..=MAX_LENGTH).contains(&char_len(password))
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| SYMBOLS.contains(c))
}
