//! Form rendering and validation for QuickForm
//!
//! Two request-scoped engines over a shared, immutable schema:
//!
//! - [`FormRenderer`] turns the schema plus the previous submission and
//!   error set into field markup, in schema order.
//! - [`FormValidator`] checks every required field (accumulating, no
//!   short-circuit), runs the CAPTCHA capability fail-closed, and
//!   detects filled honeypot fields.
//!
//! Both are pure with respect to their inputs; neither touches global
//! state.

pub mod render;
pub mod validate;

pub use quickform_core::escape_html;
pub use render::FormRenderer;
pub use validate::{CAPTCHA_RESPONSE_FIELD, FormValidator};
