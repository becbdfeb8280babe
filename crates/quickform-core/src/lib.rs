//! Core types for QuickForm
//!
//! This crate holds the data model shared by every other QuickForm crate:
//! - Field definitions and the closed field-type enum
//! - The form schema (ordered field map plus mail/CAPTCHA settings)
//! - Submitted values and the per-request validation error set
//! - HTML escaping used by rendering and email assembly
//!
//! The schema is loaded once (TOML or JSON), validated, and then shared
//! read-only across requests.

pub mod escape;
pub mod errors;
pub mod fields;
pub mod schema;
pub mod submission;

pub use errors::{CAPTCHA_ERROR_KEY, SchemaError, ValidationErrors};
pub use escape::escape_html;
pub use fields::{FieldDefinition, FieldType};
pub use schema::{CaptchaConfig, FormSchema, MailSettings};
pub use submission::{FormValue, Submission};
