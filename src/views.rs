//! Request handling module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "views")]
//! use quickform::views::FormView;
//! ```

#[cfg(feature = "views")]
pub use quickform_views::*;
