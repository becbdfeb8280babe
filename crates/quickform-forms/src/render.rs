use quickform_core::{
	FieldDefinition, FieldType, FormSchema, FormValue, Submission, ValidationErrors, escape_html,
};

/// Schema-driven form markup renderer.
///
/// Emits fields in schema order, echoing previously submitted values
/// and flagging the identifiers found in the error set. Output is a
/// pure function of the inputs: identical calls produce byte-identical
/// markup.
///
/// # Examples
///
/// ```
/// use quickform_core::{FieldDefinition, FieldType, FormSchema, Submission, ValidationErrors};
/// use quickform_forms::FormRenderer;
///
/// let schema = FormSchema::new(
///     vec!["sales@example.com".to_string()],
///     "website@example.com",
///     "Contact",
///     "/thanks",
/// )
/// .with_field(
///     "name",
///     FieldDefinition::new(FieldType::Text).with_label("Your Name").required(),
/// );
///
/// let html = FormRenderer::new(&schema).render_blank();
/// assert!(html.contains("<input type=\"text\" id=\"name\" name=\"name\" value=\"\" required>"));
/// ```
pub struct FormRenderer<'a> {
	schema: &'a FormSchema,
}

impl<'a> FormRenderer<'a> {
	pub fn new(schema: &'a FormSchema) -> Self {
		Self { schema }
	}

	/// Render the form with no prior submission and no errors.
	pub fn render_blank(&self) -> String {
		self.render(&Submission::new(), &ValidationErrors::new())
	}

	/// Render the form, echoing `submission` values and marking the
	/// fields listed in `errors`.
	pub fn render(&self, submission: &Submission, errors: &ValidationErrors) -> String {
		let mut out = String::new();

		for (id, field) in self.schema.fields() {
			if field.honeypot {
				render_honeypot(&mut out, id, field);
			} else {
				render_field(&mut out, id, field, submission, errors);
			}
		}

		if let Some(captcha) = self.schema.captcha.as_ref().filter(|captcha| captcha.enabled) {
			out.push_str(&format!(
				"<div class=\"g-recaptcha\" data-sitekey=\"{}\"></div>\n",
				escape_html(&captcha.site_key)
			));
			if errors.captcha_failed() {
				out.push_str("<div class=\"field-error\">Please complete the CAPTCHA</div>\n");
			}
		}

		out
	}
}

fn render_field(
	out: &mut String,
	id: &str,
	field: &FieldDefinition,
	submission: &Submission,
	errors: &ValidationErrors,
) {
	let wrapper = field.wrapper_class.as_deref().filter(|class| !class.is_empty());
	if let Some(class) = wrapper {
		out.push_str(&format!("<div class=\"{class}\">\n"));
	}

	if let Some(label) = field.label.as_deref() {
		let marker = if errors.contains(id) {
			" <span class=\"field-error\">Required</span>"
		} else {
			""
		};
		out.push_str(&format!(
			"<label{} for=\"{id}\">{}{marker}</label>\n",
			attr("class", field.label_class.as_deref()),
			escape_html(label)
		));
	}

	match field.field_type {
		FieldType::Text | FieldType::Email | FieldType::Tel => {
			let input_type = field.field_type.html_input_type().unwrap_or("text");
			let value = submission.get(id).and_then(FormValue::as_str).unwrap_or("");
			out.push_str(&format!(
				"<input type=\"{input_type}\" id=\"{id}\" name=\"{id}\"{} value=\"{}\"{}>\n",
				attr("class", field.input_class.as_deref()),
				escape_html(value),
				required_attr(field)
			));
		}
		FieldType::Textarea => {
			let value = submission.get(id).and_then(FormValue::as_str).unwrap_or("");
			out.push_str(&format!(
				"<textarea id=\"{id}\" name=\"{id}\"{}{}>{}</textarea>\n",
				attr("class", field.input_class.as_deref()),
				required_attr(field),
				escape_html(value)
			));
		}
		FieldType::Radio => render_choices(out, id, field, submission, "radio"),
		FieldType::Checkbox => render_choices(out, id, field, submission, "checkbox"),
	}

	if let Some(help_text) = field.help_text.as_deref() {
		out.push_str(&format!(
			"<div{}>{}</div>\n",
			attr("class", field.help_class.as_deref()),
			escape_html(help_text)
		));
	}

	if wrapper.is_some() {
		out.push_str("</div>\n");
	}
}

/// One input per option, ids suffixed with a 1-based sibling index.
/// Checkbox groups share one multi-value name (`{id}[]`).
fn render_choices(
	out: &mut String,
	id: &str,
	field: &FieldDefinition,
	submission: &Submission,
	input_type: &str,
) {
	let name = if field.field_type.is_multi_value() {
		format!("{id}[]")
	} else {
		id.to_string()
	};
	let submitted = submission.get(id);

	for (index, option) in field.options.iter().enumerate() {
		let option_id = format!("{id}-{}", index + 1);
		let checked = if submitted.is_some_and(|value| value.contains(option)) {
			" checked"
		} else {
			""
		};
		let escaped = escape_html(option);
		out.push_str(&format!(
			"<label for=\"{option_id}\"><input type=\"{input_type}\" id=\"{option_id}\" name=\"{name}\" value=\"{escaped}\"{checked}> <span>{escaped}</span></label>\n",
		));
	}
}

/// Honeypot fields are hidden from legitimate users and kept out of the
/// tab order; their submitted value is never echoed back.
fn render_honeypot(out: &mut String, id: &str, field: &FieldDefinition) {
	let label = field.label.as_deref().map(escape_html).unwrap_or_default();
	out.push_str(&format!(
		"<div style=\"display:none\"><label for=\"{id}\">{label}</label><input type=\"text\" id=\"{id}\" name=\"{id}\" tabindex=\"-1\" autocomplete=\"off\" value=\"\"></div>\n"
	));
}

fn attr(name: &str, value: Option<&str>) -> String {
	match value {
		Some(value) if !value.is_empty() => format!(" {name}=\"{value}\""),
		_ => String::new(),
	}
}

fn required_attr(field: &FieldDefinition) -> &'static str {
	if field.required { " required" } else { "" }
}
