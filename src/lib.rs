//! # QuickForm
//!
//! A configuration-driven HTML form renderer and submission mailer.
//!
//! Declare a form once — fields, recipients, CAPTCHA — and QuickForm
//! renders the markup, validates POST submissions against the same
//! schema, re-renders with error state and echoed values on failure,
//! and forwards valid submissions as an email.
//!
//! ## Feature Flags
//!
//! - `core` - Schema model, submission values, error set
//! - `forms` - Rendering and validation
//! - `captcha` - reCAPTCHA verification capability
//! - `mail` - Email building and delivery backends
//! - `http` - Request/response value types
//! - `views` - The full request-handling endpoint
//! - `full` (default) - Everything
//!
//! ## Quick start
//!
//! ```no_run
//! use quickform::core::FormSchema;
//! use quickform::mail::MemoryBackend;
//! use quickform::views::FormView;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = FormSchema::from_file("contact.toml")?;
//! let view = FormView::new(schema, Arc::new(MemoryBackend::new()));
//! // hand requests to view.dispatch(...) from your server of choice
//! # Ok(())
//! # }
//! ```

pub mod captcha;
pub mod core;
pub mod forms;
pub mod http;
pub mod mail;
pub mod views;
