//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`random::RandomSource`]: injectable source of random indices
//! - [`string`]: UTF-8 safe string helpers

pub mod error;
pub mod random;
pub mod string;
