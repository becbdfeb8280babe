//! Request orchestration for QuickForm
//!
//! [`FormView`] ties the pieces together for one endpoint: parse the
//! body, validate (CAPTCHA first, fail closed), re-render on errors,
//! drop trapped honeypot submissions, otherwise assemble and send the
//! email and redirect.

pub mod form_view;

pub use form_view::{FormView, HONEYPOT_REDIRECT_PARAM};
