//! Email building and delivery for QuickForm
//!
//! - [`EmailMessage`]: validated message value built through a builder
//! - [`EmailBackend`]: the delivery capability, with console, in-memory
//!   and SMTP (lettre) implementations
//! - [`content`]: submission-to-email assembly, including reply-to
//!   resolution
//!
//! Delivery is a single attempt; a failure surfaces as an
//! [`EmailError`] for the caller to report. Diagnostics belong in the
//! log, never in user-visible output.

pub mod backends;
pub mod content;
pub mod message;
pub mod validation;

use thiserror::Error;

pub use backends::{
	ConsoleBackend, EmailBackend, MemoryBackend, SmtpBackend, SmtpConfig, SmtpSecurity,
	backend_from_settings,
};
pub use content::{EmailContent, build_email_content, build_submission_message, resolve_reply_to};
pub use message::{EmailMessage, EmailMessageBuilder};

#[derive(Debug, Error)]
pub enum EmailError {
	#[error("Invalid email address: {0}")]
	InvalidAddress(String),

	#[error("Missing required field: {0}")]
	MissingField(String),

	#[error("Header injection attempt detected in {0}")]
	HeaderInjection(String),

	#[error("Backend error: {0}")]
	BackendError(String),

	#[error("SMTP error: {0}")]
	SmtpError(String),
}

pub type EmailResult<T> = std::result::Result<T, EmailError>;
