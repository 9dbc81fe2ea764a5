//! Application-level configuration.
//!
//! - [`GenerationParams`]: provider sampling settings and call timeout

pub mod generation_params;

pub use generation_params::GenerationParams;
