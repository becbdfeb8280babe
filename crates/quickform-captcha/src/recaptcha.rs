use crate::{CaptchaError, CaptchaOutcome, CaptchaResult, CaptchaVerifier};
use async_trait::async_trait;
use serde_json::Value;

/// Google's verification endpoint.
pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// reCAPTCHA `siteverify` client.
///
/// Posts the secret key, response token and (when known) the caller's
/// address as form parameters and reads the JSON verdict. The secret
/// key never appears in logs or output.
///
/// # Examples
///
/// ```no_run
/// use quickform_captcha::{CaptchaVerifier, RecaptchaVerifier};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let verifier = RecaptchaVerifier::new("secret-key");
/// let outcome = verifier.verify("token-from-widget", Some("203.0.113.7")).await?;
/// if !outcome.success {
///     println!("rejected: {}", outcome.raw);
/// }
/// # Ok(())
/// # }
/// ```
pub struct RecaptchaVerifier {
	secret_key: String,
	endpoint: String,
	client: reqwest::Client,
}

impl RecaptchaVerifier {
	pub fn new(secret_key: impl Into<String>) -> Self {
		Self {
			secret_key: secret_key.into(),
			endpoint: SITEVERIFY_URL.to_string(),
			client: reqwest::Client::new(),
		}
	}

	/// Point the verifier at a different endpoint (test servers).
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
	async fn verify(
		&self,
		response_token: &str,
		remote_ip: Option<&str>,
	) -> CaptchaResult<CaptchaOutcome> {
		let mut params = vec![
			("secret", self.secret_key.as_str()),
			("response", response_token),
		];
		if let Some(ip) = remote_ip {
			params.push(("remoteip", ip));
		}

		let raw: Value = self
			.client
			.post(&self.endpoint)
			.form(&params)
			.send()
			.await?
			.json()
			.await?;

		let success = raw
			.get("success")
			.and_then(Value::as_bool)
			.ok_or_else(|| CaptchaError::InvalidResponse(raw.to_string()))?;

		if !success {
			tracing::debug!(payload = %raw, "captcha verification rejected");
		}

		Ok(CaptchaOutcome { success, raw })
	}
}
