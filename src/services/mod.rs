//! Backend communication services.
//!
//! # Services
//!
//! - [`detect`] - multipart upload to the detection API and
//!   interpretation of its responses

pub mod detect;

pub use detect::*;
