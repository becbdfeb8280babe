//! Full contact-form flow through the facade crate
//!
//! Loads a schema the way a deployment would (TOML), renders the form,
//! posts a submission and checks the outbound email.

use hyper::{Method, StatusCode};
use quickform::core::FormSchema;
use quickform::http::Request;
use quickform::mail::MemoryBackend;
use quickform::views::FormView;
use rstest::rstest;
use std::sync::Arc;

const CONTACT_FORM: &str = r#"
to = ["sales@example.com", "info@example.com"]
from = "website@example.com"
reply_to = "bill@example.com"
reply_to_field = "email"
subject = "Web Site Form Submission"
success_redirect_url = "/thanks"

[fields.name]
type = "text"
label = "Your Name"
required = true
wrapper_class = "form-group"
input_class = "form-control"

[fields.email]
type = "email"
label = "Your Email Address"
required = true
help_text = "Enter your email address"
help_class = "form-text text-muted"

[fields.toppings]
type = "checkbox"
label = "Toppings"
options = ["Cheese", "Pepperoni", "Olives"]

[fields.comments]
type = "textarea"
label = "Your Comments"
required = true

[fields.website]
type = "text"
honeypot = true
"#;

fn view() -> (FormView, Arc<MemoryBackend>) {
	let schema = FormSchema::from_toml_str(CONTACT_FORM).unwrap();
	let backend = Arc::new(MemoryBackend::new());
	(FormView::new(schema, backend.clone()), backend)
}

fn post(body: &str) -> Request {
	Request::builder()
		.method(Method::POST)
		.uri("/contact")
		.body(body.to_string())
		.build()
		.unwrap()
}

#[rstest]
#[tokio::test]
async fn test_blank_form_lists_every_field_in_order() {
	let (view, _) = view();
	let request = Request::builder().uri("/contact").build().unwrap();

	let body = view.dispatch(&request).await.body_text();

	let positions: Vec<usize> = ["id=\"name\"", "id=\"email\"", "id=\"toppings-1\"", "id=\"comments\""]
		.iter()
		.map(|needle| body.find(needle).unwrap())
		.collect();
	let mut sorted = positions.clone();
	sorted.sort_unstable();
	assert_eq!(positions, sorted);

	// Checkbox group: three options, multi-value name, hidden honeypot.
	assert_eq!(body.matches("name=\"toppings[]\"").count(), 3);
	assert!(body.contains("style=\"display:none\""));
}

#[rstest]
#[tokio::test]
async fn test_full_submission_round_trip() {
	let (view, backend) = view();

	let response = view
		.dispatch(&post(
			"name=Ada+Lovelace&email=ada%40example.com&toppings%5B%5D=Olives&toppings%5B%5D=Cheese&comments=Hello+%26+goodbye",
		))
		.await;

	assert_eq!(response.status, StatusCode::FOUND);
	assert_eq!(response.location(), Some("/thanks"));

	let sent = backend.sent();
	assert_eq!(sent.len(), 1);
	let message = &sent[0];

	assert_eq!(message.to(), ["sales@example.com", "info@example.com"]);
	assert_eq!(message.from_email(), "website@example.com");
	// reply_to_field wins over the static reply_to.
	assert_eq!(message.reply_to(), Some("ada@example.com"));

	let html = message.html_body().unwrap();
	assert!(html.contains("<h4>Your Name</h4><p>Ada Lovelace</p>"));
	// Sequence values in arrival order, not option order.
	assert!(html.contains("<p>Olives</p><p>Cheese</p>"));
	// HTML body is escaped, plaintext is raw.
	assert!(html.contains("Hello &amp; goodbye"));
	assert!(message.body().contains("Hello & goodbye\r\n"));
}

#[rstest]
#[tokio::test]
async fn test_failed_validation_echoes_values_back() {
	let (view, backend) = view();

	let response = view.dispatch(&post("name=Ada&comments=")).await;

	assert_eq!(response.status, StatusCode::OK);
	let body = response.body_text();
	assert!(body.contains("value=\"Ada\""));
	assert!(body.contains("Your Email Address <span class=\"field-error\">Required</span>"));
	assert!(body.contains("Your Comments <span class=\"field-error\">Required</span>"));
	assert!(backend.sent().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_honeypot_submission_is_dropped() {
	let (view, backend) = view();

	let response = view
		.dispatch(&post(
			"name=x&email=x%40example.com&comments=hi&website=http%3A%2F%2Fspam.example",
		))
		.await;

	assert_eq!(response.status, StatusCode::FOUND);
	assert_eq!(response.location(), Some("/thanks?trap=1"));
	assert!(backend.sent().is_empty());
}
