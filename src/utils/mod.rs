//! Shared utilities.
//!
//! - [`errors`]: Application error type and HTTP conversion
//! - [`password`]: Password hashing capability
//! - [`response`]: Shared response payload shapes

pub mod errors;
pub mod password;
pub mod response;
