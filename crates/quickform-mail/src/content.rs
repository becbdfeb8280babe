use crate::message::EmailMessage;
use crate::EmailResult;
use quickform_core::{FormSchema, FormValue, Submission, escape_html};

/// The HTML and plaintext renditions of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
	pub html: String,
	pub plaintext: String,
}

/// Assemble the email body from a validated submission.
///
/// Fields appear in schema order, each as a heading (the label, or the
/// field id when no label is configured) followed by its value lines.
/// Sequence values keep submission arrival order, one line per value.
/// HTML lines are escaped; plaintext lines are raw, CRLF-terminated,
/// with a blank separator after each field block.
pub fn build_email_content(schema: &FormSchema, submission: &Submission) -> EmailContent {
	let mut html = String::new();
	let mut plaintext = String::new();

	for (id, field) in schema.fields() {
		let heading = field.label.as_deref().unwrap_or(id);
		html.push_str(&format!("<h4>{}</h4>", escape_html(heading)));
		plaintext.push_str(heading);
		plaintext.push_str("\r\n");

		let lines = match submission.get(id) {
			Some(value) => {
				let lines = value.to_vec();
				if lines.is_empty() { vec![""] } else { lines }
			}
			None => vec![""],
		};
		for line in lines {
			html.push_str(&format!("<p>{}</p>", escape_html(line)));
			plaintext.push_str(line);
			plaintext.push_str("\r\n");
		}

		html.push_str("<br>");
		plaintext.push_str("\r\n");
	}

	EmailContent { html, plaintext }
}

/// The reply-to address for a submission.
///
/// When the schema names a `reply_to_field`, its non-blank submitted
/// value supersedes the static `reply_to` address.
pub fn resolve_reply_to(schema: &FormSchema, submission: &Submission) -> Option<String> {
	if let Some(field_id) = schema.reply_to_field.as_deref()
		&& let Some(value) = submission.get(field_id).and_then(FormValue::as_str)
	{
		let trimmed = value.trim();
		if !trimmed.is_empty() {
			return Some(trimmed.to_string());
		}
	}
	schema.reply_to.clone()
}

/// Build the outbound message for a validated submission.
///
/// Reply-to is resolved and applied to the builder before the sender
/// address, an ordering the transport adapter relies on.
pub fn build_submission_message(
	schema: &FormSchema,
	submission: &Submission,
) -> EmailResult<EmailMessage> {
	let content = build_email_content(schema, submission);

	let mut builder = EmailMessage::builder();
	if let Some(reply_to) = resolve_reply_to(schema, submission) {
		builder = builder.reply_to(reply_to);
	}
	builder
		.from(schema.from.clone())
		.to(schema.to.clone())
		.subject(schema.subject.clone())
		.body(content.plaintext)
		.html(content.html)
		.build()
}

#[cfg(test)]
mod tests {
	use super::*;
	use quickform_core::{FieldDefinition, FieldType};

	fn schema() -> FormSchema {
		FormSchema::new(
			vec!["sales@example.com".to_string()],
			"website@example.com",
			"Web Site Form Submission",
			"/thanks",
		)
	}

	#[test]
	fn test_content_follows_schema_order_with_headings() {
		let schema = schema()
			.with_field(
				"name",
				FieldDefinition::new(FieldType::Text).with_label("Your Name"),
			)
			.with_field(
				"comments",
				FieldDefinition::new(FieldType::Textarea).with_label("Your Comments"),
			);
		let mut submission = Submission::new();
		submission.insert("name", "Ada");
		submission.insert("comments", "Hello there");

		let content = build_email_content(&schema, &submission);
		assert_eq!(
			content.html,
			"<h4>Your Name</h4><p>Ada</p><br><h4>Your Comments</h4><p>Hello there</p><br>"
		);
		assert_eq!(
			content.plaintext,
			"Your Name\r\nAda\r\n\r\nYour Comments\r\nHello there\r\n\r\n"
		);
	}

	#[test]
	fn test_html_lines_are_escaped_plaintext_raw() {
		let schema =
			schema().with_field("name", FieldDefinition::new(FieldType::Text).with_label("Name"));
		let mut submission = Submission::new();
		submission.insert("name", "<Ada & Co>");

		let content = build_email_content(&schema, &submission);
		assert!(content.html.contains("<p>&lt;Ada &amp; Co&gt;</p>"));
		assert!(content.plaintext.contains("<Ada & Co>\r\n"));
	}

	#[test]
	fn test_sequence_values_keep_arrival_order() {
		let schema = schema().with_field(
			"toppings",
			FieldDefinition::new(FieldType::Checkbox)
				.with_label("Toppings")
				.with_options(["A", "B", "C"]),
		);
		let mut submission = Submission::new();
		// Arrival order differs from option-definition order.
		submission.insert("toppings", vec!["C", "A"]);

		let content = build_email_content(&schema, &submission);
		assert!(content.html.contains("<p>C</p><p>A</p>"));
		assert!(content.plaintext.contains("Toppings\r\nC\r\nA\r\n\r\n"));
	}

	#[test]
	fn test_missing_value_renders_empty_line() {
		let schema =
			schema().with_field("name", FieldDefinition::new(FieldType::Text).with_label("Name"));

		let content = build_email_content(&schema, &Submission::new());
		assert!(content.html.contains("<h4>Name</h4><p></p>"));
	}

	#[test]
	fn test_heading_falls_back_to_field_id() {
		let schema = schema().with_field("phone", FieldDefinition::new(FieldType::Tel));

		let content = build_email_content(&schema, &Submission::new());
		assert!(content.html.contains("<h4>phone</h4>"));
	}

	#[test]
	fn test_reply_to_field_supersedes_static_address() {
		let schema = schema()
			.with_reply_to("a@example.com")
			.with_field("email", FieldDefinition::new(FieldType::Email))
			.with_reply_to_field("email");
		let mut submission = Submission::new();
		submission.insert("email", "b@example.com");

		assert_eq!(
			resolve_reply_to(&schema, &submission),
			Some("b@example.com".to_string())
		);
	}

	#[test]
	fn test_reply_to_falls_back_when_field_blank() {
		let schema = schema()
			.with_reply_to("a@example.com")
			.with_field("email", FieldDefinition::new(FieldType::Email))
			.with_reply_to_field("email");

		let mut blank = Submission::new();
		blank.insert("email", "   ");
		assert_eq!(
			resolve_reply_to(&schema, &blank),
			Some("a@example.com".to_string())
		);
		assert_eq!(
			resolve_reply_to(&schema, &Submission::new()),
			Some("a@example.com".to_string())
		);
	}

	#[test]
	fn test_submission_message_carries_resolved_reply_to() {
		let schema = schema()
			.with_reply_to("a@example.com")
			.with_field("email", FieldDefinition::new(FieldType::Email))
			.with_reply_to_field("email");
		let mut submission = Submission::new();
		submission.insert("email", "b@example.com");

		let message = build_submission_message(&schema, &submission).unwrap();
		assert_eq!(message.reply_to(), Some("b@example.com"));
		assert_eq!(message.from_email(), "website@example.com");
		assert_eq!(message.subject(), "Web Site Form Submission");
	}
}
