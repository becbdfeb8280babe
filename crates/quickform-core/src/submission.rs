use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A submitted value: a single string for text-like fields, or an
/// ordered sequence for checkbox groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
	Single(String),
	Multiple(Vec<String>),
}

impl FormValue {
	/// The scalar value, if this is a [`FormValue::Single`].
	pub fn as_str(&self) -> Option<&str> {
		match self {
			FormValue::Single(value) => Some(value),
			FormValue::Multiple(_) => None,
		}
	}

	/// All values, in submission arrival order.
	pub fn to_vec(&self) -> Vec<&str> {
		match self {
			FormValue::Single(value) => vec![value.as_str()],
			FormValue::Multiple(values) => values.iter().map(String::as_str).collect(),
		}
	}

	/// Whether `needle` was submitted for this value.
	///
	/// For a scalar this is equality; for a sequence, membership.
	pub fn contains(&self, needle: &str) -> bool {
		match self {
			FormValue::Single(value) => value == needle,
			FormValue::Multiple(values) => values.iter().any(|value| value == needle),
		}
	}

	/// The type-specific emptiness rule used by required-field checks:
	/// a scalar is blank when its trimmed text is empty, a sequence is
	/// blank when it has no elements.
	pub fn is_blank(&self) -> bool {
		match self {
			FormValue::Single(value) => value.trim().is_empty(),
			FormValue::Multiple(values) => values.is_empty(),
		}
	}
}

impl From<&str> for FormValue {
	fn from(value: &str) -> Self {
		FormValue::Single(value.to_string())
	}
}

impl From<String> for FormValue {
	fn from(value: String) -> Self {
		FormValue::Single(value)
	}
}

impl From<Vec<String>> for FormValue {
	fn from(values: Vec<String>) -> Self {
		FormValue::Multiple(values)
	}
}

impl From<Vec<&str>> for FormValue {
	fn from(values: Vec<&str>) -> Self {
		FormValue::Multiple(values.into_iter().map(str::to_string).collect())
	}
}

/// The per-request body of field values supplied by an end user.
///
/// Read-only once built: validation, rendering and email assembly only
/// ever look values up by field identifier.
///
/// # Examples
///
/// ```
/// use quickform_core::{FormValue, Submission};
///
/// let submission = Submission::from_pairs([
///     ("name".to_string(), "Ada".to_string()),
///     ("toppings[]".to_string(), "Cheese".to_string()),
///     ("toppings[]".to_string(), "Olives".to_string()),
/// ]);
///
/// assert_eq!(submission.get_str("name"), Some("Ada"));
/// assert_eq!(
///     submission.get("toppings"),
///     Some(&FormValue::Multiple(vec!["Cheese".into(), "Olives".into()]))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
	values: HashMap<String, FormValue>,
}

impl Submission {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a submission from decoded body pairs.
	///
	/// A trailing `[]` on a key marks a multi-value field and is stripped
	/// from the identifier. A repeated key is also promoted to a sequence,
	/// since user agents send checkbox groups either way. Arrival order of
	/// sequence values is preserved.
	pub fn from_pairs<I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut values: HashMap<String, FormValue> = HashMap::new();
		for (key, value) in pairs {
			let (id, multi) = match key.strip_suffix("[]") {
				Some(id) => (id.to_string(), true),
				None => (key, false),
			};
			match values.entry(id) {
				Entry::Occupied(mut entry) => match entry.get_mut() {
					FormValue::Multiple(existing) => existing.push(value),
					FormValue::Single(existing) => {
						let first = std::mem::take(existing);
						*entry.get_mut() = FormValue::Multiple(vec![first, value]);
					}
				},
				Entry::Vacant(entry) => {
					entry.insert(if multi {
						FormValue::Multiple(vec![value])
					} else {
						FormValue::Single(value)
					});
				}
			}
		}
		Self { values }
	}

	pub fn insert(&mut self, id: impl Into<String>, value: impl Into<FormValue>) {
		self.values.insert(id.into(), value.into());
	}

	pub fn get(&self, id: &str) -> Option<&FormValue> {
		self.values.get(id)
	}

	/// The scalar value for `id`, if present and single-valued.
	pub fn get_str(&self, id: &str) -> Option<&str> {
		self.values.get(id).and_then(FormValue::as_str)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.values.contains_key(id)
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}
}
