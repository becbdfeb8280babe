use indexmap::IndexSet;

/// Reserved pseudo-identifier recorded when CAPTCHA verification fails.
///
/// Real field identifiers come from config; the underscore prefix keeps
/// this key out of their namespace.
pub const CAPTCHA_ERROR_KEY: &str = "_captcha";

/// The set of field identifiers that failed validation for one request.
///
/// Created empty at the start of a validate call, populated while every
/// field is checked, then consulted read-only by the re-render. Never
/// persisted. Insertion order is kept so error output follows schema
/// order.
///
/// # Examples
///
/// ```
/// use quickform_core::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// assert!(errors.is_empty());
///
/// errors.add("email");
/// assert!(errors.contains("email"));
/// assert!(!errors.contains("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
	fields: IndexSet<String>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, field_id: impl Into<String>) {
		self.fields.insert(field_id.into());
	}

	pub fn contains(&self, field_id: &str) -> bool {
		self.fields.contains(field_id)
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(String::as_str)
	}

	/// Record a CAPTCHA failure under [`CAPTCHA_ERROR_KEY`].
	pub fn add_captcha_failure(&mut self) {
		self.fields.insert(CAPTCHA_ERROR_KEY.to_string());
	}

	pub fn captcha_failed(&self) -> bool {
		self.fields.contains(CAPTCHA_ERROR_KEY)
	}
}

/// Load-time schema problems.
///
/// These surface once, when the deployment's config is read; they are
/// never produced while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("unsupported schema format: {0}")]
	UnsupportedFormat(String),

	#[error("choice field `{0}` has no options")]
	MissingOptions(String),

	#[error("reply_to_field `{0}` does not name a schema field")]
	UnknownReplyToField(String),

	#[error("no recipient addresses configured")]
	NoRecipients,

	#[error("captcha is enabled but site_key and secret_key are not both set")]
	IncompleteCaptcha,
}
