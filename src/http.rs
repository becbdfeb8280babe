//! Request/response value types module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "http")]
//! use quickform::http::{Request, Response};
//! ```

#[cfg(feature = "http")]
pub use quickform_http::*;
