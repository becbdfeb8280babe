use crate::validation::{check_header_injection, validate_email, validate_email_list};
use crate::{EmailError, EmailResult};

/// An outbound email with validated addresses.
///
/// Fields are private so construction always goes through the builder,
/// which validates; getters give read access.
///
/// # Examples
///
/// ```
/// use quickform_mail::EmailMessage;
///
/// let message = EmailMessage::builder()
///     .from("website@example.com")
///     .to(vec!["sales@example.com".to_string()])
///     .reply_to("visitor@example.com")
///     .subject("Web Site Form Submission")
///     .body("Name\r\nAda\r\n\r\n")
///     .html("<h4>Name</h4><p>Ada</p>")
///     .build()?;
///
/// assert_eq!(message.reply_to(), Some("visitor@example.com"));
/// # Ok::<(), quickform_mail::EmailError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmailMessage {
	subject: String,
	body: String,
	from_email: String,
	to: Vec<String>,
	reply_to: Option<String>,
	html_body: Option<String>,
}

impl EmailMessage {
	/// Create a new builder for constructing an `EmailMessage`.
	pub fn builder() -> EmailMessageBuilder {
		EmailMessageBuilder::default()
	}

	/// Get the subject.
	pub fn subject(&self) -> &str {
		&self.subject
	}

	/// Get the plaintext body.
	pub fn body(&self) -> &str {
		&self.body
	}

	/// Get the from email address.
	pub fn from_email(&self) -> &str {
		&self.from_email
	}

	/// Get the list of recipients.
	pub fn to(&self) -> &[String] {
		&self.to
	}

	/// Get the reply-to address, if any.
	pub fn reply_to(&self) -> Option<&str> {
		self.reply_to.as_deref()
	}

	/// Get the HTML body.
	pub fn html_body(&self) -> Option<&str> {
		self.html_body.as_deref()
	}
}

#[derive(Default)]
pub struct EmailMessageBuilder {
	subject: String,
	body: String,
	from_email: String,
	to: Vec<String>,
	reply_to: Option<String>,
	html_body: Option<String>,
}

impl EmailMessageBuilder {
	pub fn subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = subject.into();
		self
	}

	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	pub fn from(mut self, from: impl Into<String>) -> Self {
		self.from_email = from.into();
		self
	}

	pub fn to(mut self, to: Vec<String>) -> Self {
		self.to = to;
		self
	}

	/// Set the reply-to address.
	///
	/// Callers resolve reply-to before the sender is applied to the
	/// outbound message; the transport adapter keeps that ordering.
	pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
		self.reply_to = Some(reply_to.into());
		self
	}

	pub fn html(mut self, html: impl Into<String>) -> Self {
		self.html_body = Some(html.into());
		self
	}

	/// Build the message with validation.
	///
	/// Requires a sender and at least one recipient, validates every
	/// address, and rejects header injection in the subject.
	pub fn build(self) -> EmailResult<EmailMessage> {
		if self.from_email.is_empty() {
			return Err(EmailError::MissingField("from".to_string()));
		}
		if self.to.is_empty() {
			return Err(EmailError::MissingField("to".to_string()));
		}

		validate_email(&self.from_email)?;
		validate_email_list(&self.to)?;
		if let Some(reply_to) = &self.reply_to {
			validate_email(reply_to)?;
		}
		check_header_injection("subject", &self.subject)?;

		Ok(EmailMessage {
			subject: self.subject,
			body: self.body,
			from_email: self.from_email,
			to: self.to,
			reply_to: self.reply_to,
			html_body: self.html_body,
		})
	}
}
