use serde::{Deserialize, Serialize};

/// The closed set of field types a schema may declare.
///
/// Dispatch on this enum is exhaustive in the renderer and validator, so
/// adding a variant is a compile-time-checked extension point. An
/// unrecognized `type` string in a config file fails schema
/// deserialization instead of silently rendering nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	Text,
	Email,
	Tel,
	Textarea,
	Radio,
	Checkbox,
}

impl FieldType {
	/// The `type` attribute for single-input fields.
	///
	/// Returns `None` for field types that render something other than a
	/// lone `<input>` element.
	pub fn html_input_type(&self) -> Option<&'static str> {
		match self {
			FieldType::Text => Some("text"),
			FieldType::Email => Some("email"),
			FieldType::Tel => Some("tel"),
			FieldType::Textarea | FieldType::Radio | FieldType::Checkbox => None,
		}
	}

	/// Whether this type renders one input per configured option.
	pub fn is_choice(&self) -> bool {
		matches!(self, FieldType::Radio | FieldType::Checkbox)
	}

	/// Whether multiple values may arrive under this field's key.
	pub fn is_multi_value(&self) -> bool {
		matches!(self, FieldType::Checkbox)
	}
}

/// One form field, keyed by its identifier in [`FormSchema`].
///
/// The identifier doubles as the HTML `id`/`name` attribute and the
/// request-body lookup key. Styling hints only affect emitted markup.
///
/// [`FormSchema`]: crate::schema::FormSchema
///
/// # Examples
///
/// ```
/// use quickform_core::{FieldDefinition, FieldType};
///
/// let field = FieldDefinition::new(FieldType::Email)
///     .with_label("Your Email Address")
///     .required()
///     .with_help_text("Enter your email address");
/// assert!(field.required);
/// assert_eq!(field.label.as_deref(), Some("Your Email Address"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
	#[serde(rename = "type")]
	pub field_type: FieldType,
	#[serde(default)]
	pub label: Option<String>,
	#[serde(default)]
	pub required: bool,
	/// Option strings for radio/checkbox fields, in render order.
	#[serde(default)]
	pub options: Vec<String>,
	/// Hidden bot-trap field: excluded from required checks, and any
	/// non-empty submitted value marks the submission as automated.
	#[serde(default)]
	pub honeypot: bool,
	#[serde(default)]
	pub help_text: Option<String>,
	#[serde(default)]
	pub wrapper_class: Option<String>,
	#[serde(default)]
	pub label_class: Option<String>,
	#[serde(default)]
	pub input_class: Option<String>,
	#[serde(default)]
	pub help_class: Option<String>,
}

impl FieldDefinition {
	pub fn new(field_type: FieldType) -> Self {
		Self {
			field_type,
			label: None,
			required: false,
			options: Vec::new(),
			honeypot: false,
			help_text: None,
			wrapper_class: None,
			label_class: None,
			input_class: None,
			help_class: None,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_options<I, S>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.options = options.into_iter().map(Into::into).collect();
		self
	}

	pub fn honeypot(mut self) -> Self {
		self.honeypot = true;
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn with_wrapper_class(mut self, class: impl Into<String>) -> Self {
		self.wrapper_class = Some(class.into());
		self
	}

	pub fn with_label_class(mut self, class: impl Into<String>) -> Self {
		self.label_class = Some(class.into());
		self
	}

	pub fn with_input_class(mut self, class: impl Into<String>) -> Self {
		self.input_class = Some(class.into());
		self
	}

	pub fn with_help_class(mut self, class: impl Into<String>) -> Self {
		self.help_class = Some(class.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_field_type_input_type() {
		assert_eq!(FieldType::Text.html_input_type(), Some("text"));
		assert_eq!(FieldType::Email.html_input_type(), Some("email"));
		assert_eq!(FieldType::Tel.html_input_type(), Some("tel"));
		assert_eq!(FieldType::Textarea.html_input_type(), None);
		assert_eq!(FieldType::Radio.html_input_type(), None);
		assert_eq!(FieldType::Checkbox.html_input_type(), None);
	}

	#[test]
	fn test_field_type_choice_and_multi_value() {
		assert!(FieldType::Radio.is_choice());
		assert!(FieldType::Checkbox.is_choice());
		assert!(!FieldType::Text.is_choice());

		assert!(FieldType::Checkbox.is_multi_value());
		assert!(!FieldType::Radio.is_multi_value());
	}

	#[test]
	fn test_field_type_deserializes_lowercase() {
		let parsed: FieldType = serde_json::from_str("\"textarea\"").unwrap();
		assert_eq!(parsed, FieldType::Textarea);
	}

	#[test]
	fn test_unknown_field_type_is_rejected() {
		let result: Result<FieldType, _> = serde_json::from_str("\"color\"");
		assert!(result.is_err());
	}

	#[test]
	fn test_field_definition_defaults() {
		let json = r#"{"type": "text"}"#;
		let field: FieldDefinition = serde_json::from_str(json).unwrap();

		assert_eq!(field.field_type, FieldType::Text);
		assert!(!field.required);
		assert!(!field.honeypot);
		assert!(field.options.is_empty());
		assert!(field.label.is_none());
	}

	#[test]
	fn test_field_definition_builder_chain() {
		let field = FieldDefinition::new(FieldType::Radio)
			.with_label("Topping")
			.with_options(["Cheese", "Pepperoni"])
			.required()
			.with_wrapper_class("form-group")
			.with_input_class("form-check-input");

		assert_eq!(field.options, vec!["Cheese", "Pepperoni"]);
		assert!(field.required);
		assert_eq!(field.wrapper_class.as_deref(), Some("form-group"));
	}
}
