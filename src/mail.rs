//! Email building and delivery module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "mail")]
//! use quickform::mail::{EmailBackend, EmailMessage, SmtpBackend};
//! ```

#[cfg(feature = "mail")]
pub use quickform_mail::*;
