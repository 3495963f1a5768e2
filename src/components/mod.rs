//! UI Components for the Firewatch application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DetectionForm`] - one upload form per detection flow
//! - [`ResultsSection`] - most recent detection result
//! - [`NotificationStack`] - transient toasts fed by [`Notifier`]

mod detect_form;
mod footer;
mod hero;
mod notifications;
mod results;

pub use detect_form::*;
pub use footer::*;
pub use hero::*;
pub use notifications::*;
pub use results::*;
