//! # Hi-Lite Core
//!
//! The domain layer of the Hi-Lite backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! credential validation, the feed join, and the ports infrastructure implements.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::DomainError;
pub use validation::{FieldError, FieldErrors};
