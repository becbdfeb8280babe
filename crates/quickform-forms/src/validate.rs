use quickform_captcha::CaptchaVerifier;
use quickform_core::{FormSchema, Submission, ValidationErrors};

/// Submission key carrying the CAPTCHA widget's response token.
pub const CAPTCHA_RESPONSE_FIELD: &str = "g-recaptcha-response";

/// Required-field and CAPTCHA validation over a schema.
///
/// Every field is checked on every call; errors accumulate so one
/// round-trip shows the user the complete error set. Checks are pure
/// functions of the schema and submission, independent per field.
///
/// # Examples
///
/// ```
/// use quickform_core::{FieldDefinition, FieldType, FormSchema, Submission};
/// use quickform_forms::FormValidator;
///
/// let schema = FormSchema::new(
///     vec!["sales@example.com".to_string()],
///     "website@example.com",
///     "Contact",
///     "/thanks",
/// )
/// .with_field("name", FieldDefinition::new(FieldType::Text).required());
///
/// let errors = FormValidator::new(&schema).validate(&Submission::new());
/// assert!(errors.contains("name"));
/// ```
pub struct FormValidator<'a> {
	schema: &'a FormSchema,
}

impl<'a> FormValidator<'a> {
	pub fn new(schema: &'a FormSchema) -> Self {
		Self { schema }
	}

	/// Check every required field. An empty result means valid.
	pub fn validate(&self, submission: &Submission) -> ValidationErrors {
		let mut errors = ValidationErrors::new();
		self.check_fields(submission, &mut errors);
		errors
	}

	/// CAPTCHA check first, then every field check regardless.
	///
	/// A verifier error is treated exactly like an explicit rejection
	/// (fails closed); the diagnostic goes to the log, not the user.
	pub async fn validate_with_captcha(
		&self,
		submission: &Submission,
		verifier: &dyn CaptchaVerifier,
		remote_ip: Option<&str>,
	) -> ValidationErrors {
		let mut errors = ValidationErrors::new();

		if self.schema.captcha_enabled() {
			let token = submission.get_str(CAPTCHA_RESPONSE_FIELD).unwrap_or("");
			match verifier.verify(token, remote_ip).await {
				Ok(outcome) if outcome.success => {}
				Ok(outcome) => {
					tracing::warn!(payload = %outcome.raw, "captcha rejected");
					errors.add_captcha_failure();
				}
				Err(err) => {
					tracing::warn!(error = %err, "captcha verification errored, failing closed");
					errors.add_captcha_failure();
				}
			}
		}

		self.check_fields(submission, &mut errors);
		errors
	}

	/// Whether any honeypot field arrived with a non-empty value.
	///
	/// Consulted only after the error set came back empty; a hit means
	/// the caller redirects to the success destination without mailing.
	pub fn honeypot_triggered(&self, submission: &Submission) -> bool {
		self.schema.fields().any(|(id, field)| {
			field.honeypot
				&& submission
					.get(id)
					.is_some_and(|value| !value.is_blank())
		})
	}

	fn check_fields(&self, submission: &Submission, errors: &mut ValidationErrors) {
		for (id, field) in self.schema.fields() {
			if field.honeypot || !field.required {
				continue;
			}
			// Scalars must be non-empty after trimming; checkbox groups
			// need at least one element. Both rules are is_blank().
			let valid = submission.get(id).is_some_and(|value| !value.is_blank());
			if !valid {
				errors.add(id);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use quickform_core::{FieldDefinition, FieldType};

	fn schema() -> FormSchema {
		FormSchema::new(
			vec!["sales@example.com".to_string()],
			"website@example.com",
			"Contact",
			"/thanks",
		)
	}

	#[test]
	fn test_missing_required_field() {
		let schema = schema()
			.with_field("name", FieldDefinition::new(FieldType::Text).required())
			.with_field("nickname", FieldDefinition::new(FieldType::Text));

		let errors = FormValidator::new(&schema).validate(&Submission::new());
		assert!(errors.contains("name"));
		assert!(!errors.contains("nickname"));
		assert_eq!(errors.len(), 1);
	}

	#[test]
	fn test_whitespace_only_counts_as_empty() {
		let schema = schema().with_field("name", FieldDefinition::new(FieldType::Text).required());
		let mut submission = Submission::new();
		submission.insert("name", "   \t  ");

		let errors = FormValidator::new(&schema).validate(&submission);
		assert!(errors.contains("name"));
	}

	#[test]
	fn test_errors_are_independent_per_field() {
		let schema = schema()
			.with_field("a", FieldDefinition::new(FieldType::Text).required())
			.with_field("b", FieldDefinition::new(FieldType::Email).required())
			.with_field("c", FieldDefinition::new(FieldType::Textarea).required());
		let mut submission = Submission::new();
		submission.insert("b", "someone@example.com");

		let errors = FormValidator::new(&schema).validate(&submission);
		assert!(errors.contains("a"));
		assert!(!errors.contains("b"));
		assert!(errors.contains("c"));
	}

	#[test]
	fn test_required_checkbox_needs_at_least_one_selection() {
		let schema = schema().with_field(
			"toppings",
			FieldDefinition::new(FieldType::Checkbox)
				.with_options(["Cheese", "Pepperoni"])
				.required(),
		);

		let mut empty = Submission::new();
		empty.insert("toppings", Vec::<String>::new());
		let errors = FormValidator::new(&schema).validate(&empty);
		assert!(errors.contains("toppings"));

		let mut selected = Submission::new();
		selected.insert("toppings", vec!["Pepperoni"]);
		let errors = FormValidator::new(&schema).validate(&selected);
		assert!(!errors.contains("toppings"));
	}

	#[test]
	fn test_honeypot_fields_are_exempt_from_required_checks() {
		let schema = schema().with_field(
			"trap",
			FieldDefinition::new(FieldType::Text).required().honeypot(),
		);

		let errors = FormValidator::new(&schema).validate(&Submission::new());
		assert!(errors.is_empty());
	}

	#[test]
	fn test_honeypot_triggered_by_non_empty_value() {
		let schema = schema()
			.with_field("name", FieldDefinition::new(FieldType::Text).required())
			.with_field("trap", FieldDefinition::new(FieldType::Text).honeypot());
		let validator = FormValidator::new(&schema);

		let mut clean = Submission::new();
		clean.insert("name", "x");
		assert!(!validator.honeypot_triggered(&clean));

		let mut trapped = Submission::new();
		trapped.insert("name", "x");
		trapped.insert("trap", "spam");
		assert!(validator.honeypot_triggered(&trapped));

		// An empty honeypot value is a human.
		let mut empty_trap = Submission::new();
		empty_trap.insert("name", "x");
		empty_trap.insert("trap", "");
		assert!(!validator.honeypot_triggered(&empty_trap));
	}
}
