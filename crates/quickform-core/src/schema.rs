use crate::errors::SchemaError;
use crate::fields::FieldDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// reCAPTCHA settings for a schema.
///
/// Only the site key is ever exposed in markup; the secret key is used
/// solely for the server-side verification call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptchaConfig {
	#[serde(default = "default_true")]
	pub enabled: bool,
	#[serde(default)]
	pub site_key: String,
	#[serde(default)]
	pub secret_key: String,
}

fn default_true() -> bool {
	true
}

/// Mail transport settings.
///
/// The backend selector plus the SMTP parameters the `smtp` backend
/// needs; the other backends ignore the connection fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailSettings {
	/// One of `smtp`, `console` or `memory`.
	#[serde(default = "default_backend")]
	pub backend: String,
	#[serde(default)]
	pub host: String,
	#[serde(default = "default_smtp_port")]
	pub port: u16,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub password: Option<String>,
	/// One of `none`, `starttls` or `tls`.
	#[serde(default = "default_security")]
	pub security: String,
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}

impl Default for MailSettings {
	fn default() -> Self {
		Self {
			backend: default_backend(),
			host: String::new(),
			port: default_smtp_port(),
			username: None,
			password: None,
			security: default_security(),
			timeout_secs: default_timeout_secs(),
		}
	}
}

fn default_backend() -> String {
	"console".to_string()
}

fn default_smtp_port() -> u16 {
	587
}

fn default_security() -> String {
	"starttls".to_string()
}

fn default_timeout_secs() -> u64 {
	30
}

/// The static, per-deployment declaration of form fields and
/// mail/CAPTCHA settings.
///
/// Field order in the map is render order. The schema is immutable
/// after loading and safely shareable across concurrent requests.
///
/// # Examples
///
/// ```
/// use quickform_core::{FieldDefinition, FieldType, FormSchema};
///
/// let schema = FormSchema::new(
///     vec!["sales@example.com".to_string()],
///     "website@example.com",
///     "Web Site Form Submission",
///     "/thanks",
/// )
/// .with_field("name", FieldDefinition::new(FieldType::Text).required())
/// .with_field("email", FieldDefinition::new(FieldType::Email).required());
///
/// assert_eq!(schema.field_count(), 2);
/// assert!(schema.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
	/// Recipient addresses; a config file may give a single string or a
	/// list.
	#[serde(deserialize_with = "one_or_many")]
	pub to: Vec<String>,
	pub from: String,
	#[serde(default)]
	pub reply_to: Option<String>,
	/// When set, the named field's submitted value supersedes
	/// [`reply_to`](Self::reply_to).
	#[serde(default)]
	pub reply_to_field: Option<String>,
	pub subject: String,
	pub success_redirect_url: String,
	#[serde(default)]
	pub captcha: Option<CaptchaConfig>,
	#[serde(default)]
	pub mail: Option<MailSettings>,
	#[serde(default)]
	pub fields: IndexMap<String, FieldDefinition>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum OneOrMany {
		One(String),
		Many(Vec<String>),
	}

	Ok(match OneOrMany::deserialize(deserializer)? {
		OneOrMany::One(address) => vec![address],
		OneOrMany::Many(addresses) => addresses,
	})
}

impl FormSchema {
	pub fn new(
		to: Vec<String>,
		from: impl Into<String>,
		subject: impl Into<String>,
		success_redirect_url: impl Into<String>,
	) -> Self {
		Self {
			to,
			from: from.into(),
			reply_to: None,
			reply_to_field: None,
			subject: subject.into(),
			success_redirect_url: success_redirect_url.into(),
			captcha: None,
			mail: None,
			fields: IndexMap::new(),
		}
	}

	pub fn with_field(mut self, id: impl Into<String>, field: FieldDefinition) -> Self {
		self.fields.insert(id.into(), field);
		self
	}

	pub fn with_reply_to(mut self, address: impl Into<String>) -> Self {
		self.reply_to = Some(address.into());
		self
	}

	pub fn with_reply_to_field(mut self, field_id: impl Into<String>) -> Self {
		self.reply_to_field = Some(field_id.into());
		self
	}

	pub fn with_captcha(mut self, captcha: CaptchaConfig) -> Self {
		self.captcha = Some(captcha);
		self
	}

	pub fn with_mail(mut self, mail: MailSettings) -> Self {
		self.mail = Some(mail);
		self
	}

	/// Fields in render order.
	pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDefinition)> {
		self.fields.iter().map(|(id, field)| (id.as_str(), field))
	}

	pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
		self.fields.get(id)
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	pub fn captcha_enabled(&self) -> bool {
		self.captcha.as_ref().is_some_and(|captcha| captcha.enabled)
	}

	/// Check schema invariants after loading.
	///
	/// Radio/checkbox fields need at least one option, `reply_to_field`
	/// must name a declared field, at least one recipient must be
	/// configured, and an enabled CAPTCHA needs both keys.
	pub fn validate(&self) -> Result<(), SchemaError> {
		if self.to.is_empty() {
			return Err(SchemaError::NoRecipients);
		}

		for (id, field) in self.fields() {
			if field.field_type.is_choice() && field.options.is_empty() {
				return Err(SchemaError::MissingOptions(id.to_string()));
			}
		}

		if let Some(field_id) = self.reply_to_field.as_deref()
			&& !self.fields.contains_key(field_id)
		{
			return Err(SchemaError::UnknownReplyToField(field_id.to_string()));
		}

		if let Some(captcha) = &self.captcha
			&& captcha.enabled
			&& (captcha.site_key.is_empty() || captcha.secret_key.is_empty())
		{
			return Err(SchemaError::IncompleteCaptcha);
		}

		Ok(())
	}

	/// Parse and validate a schema from TOML.
	pub fn from_toml_str(input: &str) -> Result<Self, SchemaError> {
		let schema: Self = toml::from_str(input)?;
		schema.validate()?;
		Ok(schema)
	}

	/// Parse and validate a schema from JSON.
	pub fn from_json_str(input: &str) -> Result<Self, SchemaError> {
		let schema: Self = serde_json::from_str(input)?;
		schema.validate()?;
		Ok(schema)
	}

	/// Load a schema file, dispatching on the file extension.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		match path.extension().and_then(|ext| ext.to_str()) {
			Some("toml") => Self::from_toml_str(&contents),
			Some("json") => Self::from_json_str(&contents),
			other => Err(SchemaError::UnsupportedFormat(
				other.unwrap_or("<none>").to_string(),
			)),
		}
	}
}
