//! Rendering and validation module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "forms")]
//! use quickform::forms::{FormRenderer, FormValidator};
//! ```

#[cfg(feature = "forms")]
pub use quickform_forms::*;
