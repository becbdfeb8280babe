//! CAPTCHA verification for QuickForm
//!
//! The [`CaptchaVerifier`] trait is the capability boundary the
//! validator talks to; [`RecaptchaVerifier`] is the reCAPTCHA
//! `siteverify` implementation. Verifier errors are surfaced as errors,
//! never as a pass: callers fail closed.

pub mod recaptcha;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use recaptcha::RecaptchaVerifier;

#[derive(Debug, Error)]
pub enum CaptchaError {
	#[error("verification request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("malformed verifier response: {0}")]
	InvalidResponse(String),
}

pub type CaptchaResult<T> = std::result::Result<T, CaptchaError>;

/// The verifier's answer: a boolean plus the raw diagnostic payload.
#[derive(Debug, Clone)]
pub struct CaptchaOutcome {
	pub success: bool,
	pub raw: Value,
}

/// External CAPTCHA verification capability.
///
/// Takes the submitted challenge token and the caller's network
/// address; returns the verdict or an error. Timeout and retry policy
/// belong to the implementation, not to callers.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
	async fn verify(
		&self,
		response_token: &str,
		remote_ip: Option<&str>,
	) -> CaptchaResult<CaptchaOutcome>;
}
