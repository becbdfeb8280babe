use quickform_captcha::CaptchaVerifier;
use quickform_core::{FormSchema, Submission, ValidationErrors, escape_html};
use quickform_forms::{FormRenderer, FormValidator};
use quickform_http::{Request, Response};
use quickform_mail::{EmailBackend, build_submission_message};
use std::sync::Arc;

/// Query parameter appended to the success redirect when a honeypot
/// field was filled, so trapped hits can be told apart in access logs.
pub const HONEYPOT_REDIRECT_PARAM: &str = "trap";

const DELIVERY_FAILURE_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><title>Message not sent</title></head><body><p>Sorry, your message could not be sent. Please try again later.</p></body></html>\n";

/// A form endpoint over one schema.
///
/// The schema is immutable and shared; the mail backend and CAPTCHA
/// verifier are external capabilities injected at construction.
///
/// # Examples
///
/// ```
/// use quickform_core::{FieldDefinition, FieldType, FormSchema};
/// use quickform_mail::MemoryBackend;
/// use quickform_views::FormView;
/// use std::sync::Arc;
///
/// let schema = FormSchema::new(
///     vec!["sales@example.com".to_string()],
///     "website@example.com",
///     "Contact",
///     "/thanks",
/// )
/// .with_field("name", FieldDefinition::new(FieldType::Text).required());
///
/// let view = FormView::new(schema, Arc::new(MemoryBackend::new()));
/// assert_eq!(view.schema().field_count(), 1);
/// ```
pub struct FormView {
	schema: Arc<FormSchema>,
	backend: Arc<dyn EmailBackend>,
	verifier: Option<Arc<dyn CaptchaVerifier>>,
}

impl FormView {
	pub fn new(schema: FormSchema, backend: Arc<dyn EmailBackend>) -> Self {
		Self {
			schema: Arc::new(schema),
			backend,
			verifier: None,
		}
	}

	pub fn with_verifier(mut self, verifier: Arc<dyn CaptchaVerifier>) -> Self {
		self.verifier = Some(verifier);
		self
	}

	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	/// Handle one request.
	///
	/// Non-POST requests get the blank form. A POST runs the full
	/// validate → (re-render | trap | send) cycle; nothing about the
	/// request outlives this call.
	pub async fn dispatch(&self, request: &Request) -> Response {
		if !request.is_post() {
			return self.render_page(request, &Submission::new(), &ValidationErrors::new());
		}

		let submission = request.form_data();
		let validator = FormValidator::new(&self.schema);

		let errors = match (&self.verifier, self.schema.captcha_enabled()) {
			(Some(verifier), true) => {
				validator
					.validate_with_captcha(
						&submission,
						verifier.as_ref(),
						request.remote_ip().as_deref(),
					)
					.await
			}
			(None, true) => {
				// CAPTCHA enabled but no verifier wired up: fail closed.
				tracing::warn!("captcha enabled without a verifier, rejecting submission");
				let mut errors = validator.validate(&submission);
				errors.add_captcha_failure();
				errors
			}
			(_, false) => validator.validate(&submission),
		};

		if !errors.is_empty() {
			return self.render_page(request, &submission, &errors);
		}

		if validator.honeypot_triggered(&submission) {
			tracing::warn!(path = request.path(), "honeypot filled, dropping submission");
			return Response::temporary_redirect(honeypot_redirect_url(
				&self.schema.success_redirect_url,
			));
		}

		let message = match build_submission_message(&self.schema, &submission) {
			Ok(message) => message,
			Err(err) => {
				tracing::error!(error = %err, "failed to assemble submission email");
				return Response::internal_server_error().with_html_body(DELIVERY_FAILURE_PAGE);
			}
		};

		match self
			.backend
			.send_messages(std::slice::from_ref(&message))
			.await
		{
			Ok(_) => Response::temporary_redirect(&self.schema.success_redirect_url),
			Err(err) => {
				// The diagnostic stays in the log; the user gets fixed copy.
				tracing::error!(error = %err, "submission email delivery failed");
				Response::internal_server_error().with_html_body(DELIVERY_FAILURE_PAGE)
			}
		}
	}

	fn render_page(
		&self,
		request: &Request,
		submission: &Submission,
		errors: &ValidationErrors,
	) -> Response {
		let fields = FormRenderer::new(&self.schema).render(submission, errors);
		Response::html(format!(
			"<!DOCTYPE html>\n<html lang=\"en\"><head><title>{title}</title></head><body>\n<form action=\"{action}\" method=\"post\">\n{fields}<button type=\"submit\">Send</button>\n</form>\n</body></html>\n",
			title = escape_html(&self.schema.subject),
			action = escape_html(request.path()),
		))
	}
}

fn honeypot_redirect_url(base: &str) -> String {
	let separator = if base.contains('?') { '&' } else { '?' };
	format!("{base}{separator}{HONEYPOT_REDIRECT_PARAM}=1")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_honeypot_redirect_url_appends_marker() {
		assert_eq!(honeypot_redirect_url("/thanks"), "/thanks?trap=1");
		assert_eq!(
			honeypot_redirect_url("/thanks?lang=en"),
			"/thanks?lang=en&trap=1"
		);
	}
}
