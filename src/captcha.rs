//! CAPTCHA verification module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "captcha")]
//! use quickform::captcha::{CaptchaVerifier, RecaptchaVerifier};
//! ```

#[cfg(feature = "captcha")]
pub use quickform_captcha::*;
