//! Schema model and shared types module.
//!
//! Field definitions, the form schema, submitted values and the
//! validation error set.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "core")]
//! use quickform::core::{FieldType, FormSchema};
//! ```

#[cfg(feature = "core")]
pub use quickform_core::*;
