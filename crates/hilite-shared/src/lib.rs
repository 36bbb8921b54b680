//! # Hi-Lite Shared
//!
//! Wire types shared between the front-end and the API server.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, FieldErrorBody};
