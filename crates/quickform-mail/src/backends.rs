use crate::message::EmailMessage;
use crate::{EmailError, EmailResult};
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use quickform_core::MailSettings;
use std::sync::Mutex;
use std::time::Duration;

/// Email delivery capability.
///
/// One attempt per message, no internal retry; a failure is surfaced
/// immediately. Timeout policy belongs to the backend's transport.
#[async_trait]
pub trait EmailBackend: Send + Sync {
	/// Send the given messages, returning how many were delivered.
	async fn send_messages(&self, messages: &[EmailMessage]) -> EmailResult<usize>;
}

/// Development backend that prints each message to stdout.
pub struct ConsoleBackend;

#[async_trait]
impl EmailBackend for ConsoleBackend {
	async fn send_messages(&self, messages: &[EmailMessage]) -> EmailResult<usize> {
		for message in messages {
			println!(
				"From: {}\nTo: {}\nReply-To: {}\nSubject: {}\n\n{}\n{}",
				message.from_email(),
				message.to().join(", "),
				message.reply_to().unwrap_or("-"),
				message.subject(),
				message.body(),
				"-".repeat(70),
			);
		}
		Ok(messages.len())
	}
}

/// In-memory backend for unit tests.
///
/// # Examples
///
/// ```
/// use quickform_mail::{EmailBackend, EmailMessage, MemoryBackend};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), quickform_mail::EmailError> {
/// let backend = MemoryBackend::new();
/// let message = EmailMessage::builder()
///     .from("website@example.com")
///     .to(vec!["sales@example.com".to_string()])
///     .subject("Test")
///     .body("body")
///     .build()?;
///
/// backend.send_messages(std::slice::from_ref(&message)).await?;
/// assert_eq!(backend.sent().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MemoryBackend {
	messages: Mutex<Vec<EmailMessage>>,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of every message sent so far.
	pub fn sent(&self) -> Vec<EmailMessage> {
		self.messages
			.lock()
			.map(|messages| messages.clone())
			.unwrap_or_default()
	}
}

#[async_trait]
impl EmailBackend for MemoryBackend {
	async fn send_messages(&self, messages: &[EmailMessage]) -> EmailResult<usize> {
		let mut stored = self
			.messages
			.lock()
			.map_err(|_| EmailError::BackendError("memory backend poisoned".to_string()))?;
		stored.extend_from_slice(messages);
		Ok(messages.len())
	}
}

/// Connection security for the SMTP backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
	None,
	StartTls,
	Tls,
}

impl SmtpSecurity {
	fn from_settings(value: &str) -> EmailResult<Self> {
		match value {
			"none" => Ok(SmtpSecurity::None),
			"starttls" => Ok(SmtpSecurity::StartTls),
			"tls" => Ok(SmtpSecurity::Tls),
			other => Err(EmailError::BackendError(format!(
				"unknown smtp security `{other}`"
			))),
		}
	}
}

/// SMTP connection parameters.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
	host: String,
	port: u16,
	credentials: Option<(String, String)>,
	security: SmtpSecurity,
	timeout: Option<Duration>,
}

impl SmtpConfig {
	pub fn new(host: impl Into<String>, port: u16) -> Self {
		Self {
			host: host.into(),
			port,
			credentials: None,
			security: SmtpSecurity::StartTls,
			timeout: None,
		}
	}

	pub fn with_credentials(mut self, username: String, password: String) -> Self {
		self.credentials = Some((username, password));
		self
	}

	pub fn with_security(mut self, security: SmtpSecurity) -> Self {
		self.security = security;
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// Production SMTP backend over lettre's async transport.
pub struct SmtpBackend {
	transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpBackend {
	pub fn new(config: SmtpConfig) -> EmailResult<Self> {
		let mut builder = match config.security {
			SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
				.map_err(|err| EmailError::SmtpError(err.to_string()))?,
			SmtpSecurity::StartTls => {
				AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
					.map_err(|err| EmailError::SmtpError(err.to_string()))?
			}
			SmtpSecurity::None => {
				AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
			}
		};

		builder = builder.port(config.port).timeout(config.timeout);
		if let Some((username, password)) = config.credentials {
			builder = builder.credentials(Credentials::new(username, password));
		}

		Ok(Self {
			transport: builder.build(),
		})
	}
}

#[async_trait]
impl EmailBackend for SmtpBackend {
	async fn send_messages(&self, messages: &[EmailMessage]) -> EmailResult<usize> {
		let mut sent = 0;
		for message in messages {
			let mail = to_lettre(message)?;
			self.transport
				.send(mail)
				.await
				.map_err(|err| EmailError::SmtpError(err.to_string()))?;
			tracing::debug!(to = ?message.to(), "submission email sent");
			sent += 1;
		}
		Ok(sent)
	}
}

/// Convert to a lettre message.
///
/// Reply-To is applied before From; the resolved reply-to must already
/// be on the message by the time the sender is set.
fn to_lettre(message: &EmailMessage) -> EmailResult<lettre::Message> {
	let mut builder = lettre::Message::builder();

	if let Some(reply_to) = message.reply_to() {
		builder = builder.reply_to(parse_mailbox(reply_to)?);
	}
	builder = builder.from(parse_mailbox(message.from_email())?);
	for recipient in message.to() {
		builder = builder.to(parse_mailbox(recipient)?);
	}
	builder = builder.subject(message.subject());

	let mail = match message.html_body() {
		Some(html) => builder.multipart(MultiPart::alternative_plain_html(
			message.body().to_string(),
			html.to_string(),
		)),
		None => builder
			.header(ContentType::TEXT_PLAIN)
			.body(message.body().to_string()),
	}
	.map_err(|err| EmailError::BackendError(err.to_string()))?;

	Ok(mail)
}

fn parse_mailbox(address: &str) -> EmailResult<Mailbox> {
	address
		.parse()
		.map_err(|_| EmailError::InvalidAddress(address.to_string()))
}

/// Build a backend from the schema's mail settings.
pub fn backend_from_settings(settings: &MailSettings) -> EmailResult<Box<dyn EmailBackend>> {
	match settings.backend.as_str() {
		"console" => Ok(Box::new(ConsoleBackend)),
		"memory" => Ok(Box::new(MemoryBackend::new())),
		"smtp" => {
			let mut config = SmtpConfig::new(settings.host.clone(), settings.port)
				.with_security(SmtpSecurity::from_settings(&settings.security)?)
				.with_timeout(Duration::from_secs(settings.timeout_secs));
			if let (Some(username), Some(password)) =
				(settings.username.clone(), settings.password.clone())
			{
				config = config.with_credentials(username, password);
			}
			Ok(Box::new(SmtpBackend::new(config)?))
		}
		other => Err(EmailError::BackendError(format!(
			"unknown mail backend `{other}`"
		))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn message() -> EmailMessage {
		EmailMessage::builder()
			.from("website@example.com")
			.to(vec!["sales@example.com".to_string()])
			.subject("Test")
			.body("body")
			.build()
			.unwrap()
	}

	#[rstest]
	#[tokio::test]
	async fn test_memory_backend_stores_messages() {
		let backend = MemoryBackend::new();

		let sent = backend
			.send_messages(std::slice::from_ref(&message()))
			.await
			.unwrap();

		assert_eq!(sent, 1);
		let stored = backend.sent();
		assert_eq!(stored.len(), 1);
		assert_eq!(stored[0].subject(), "Test");
	}

	#[rstest]
	#[tokio::test]
	async fn test_console_backend_counts_messages() {
		let backend = ConsoleBackend;
		let messages = [message(), message()];

		let sent = backend.send_messages(&messages).await.unwrap();
		assert_eq!(sent, 2);
	}

	#[test]
	fn test_to_lettre_accepts_reply_to() {
		let message = EmailMessage::builder()
			.from("website@example.com")
			.to(vec!["sales@example.com".to_string()])
			.reply_to("visitor@example.com")
			.subject("Test")
			.body("body")
			.html("<p>body</p>")
			.build()
			.unwrap();

		assert!(to_lettre(&message).is_ok());
	}

	#[test]
	fn test_backend_from_settings_selectors() {
		let console = MailSettings::default();
		assert!(backend_from_settings(&console).is_ok());

		let unknown = MailSettings {
			backend: "carrier-pigeon".to_string(),
			..MailSettings::default()
		};
		assert!(matches!(
			backend_from_settings(&unknown),
			Err(EmailError::BackendError(_))
		));
	}

	#[test]
	fn test_smtp_security_from_settings() {
		assert_eq!(
			SmtpSecurity::from_settings("starttls").unwrap(),
			SmtpSecurity::StartTls
		);
		assert!(SmtpSecurity::from_settings("tsl").is_err());
	}
}
