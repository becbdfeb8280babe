use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue, LOCATION};
use hyper::{HeaderMap, StatusCode};

/// An outbound HTTP response.
///
/// # Examples
///
/// ```
/// use hyper::StatusCode;
/// use quickform_http::Response;
///
/// let response = Response::temporary_redirect("/thanks");
/// assert_eq!(response.status, StatusCode::FOUND);
/// assert_eq!(
///     response.headers.get("location").unwrap().to_str().unwrap(),
///     "/thanks"
/// );
/// ```
#[derive(Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// HTTP 200 OK.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// HTTP 200 OK with an HTML body.
	pub fn html(body: impl Into<String>) -> Self {
		Self::ok().with_html_body(body)
	}

	/// HTTP 302 Found (temporary redirect).
	pub fn temporary_redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location.as_ref())
	}

	/// HTTP 500 Internal Server Error.
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the response body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set an HTML body and matching content type.
	pub fn with_html_body(mut self, body: impl Into<String>) -> Self {
		self.headers.insert(
			CONTENT_TYPE,
			HeaderValue::from_static("text/html; charset=utf-8"),
		);
		self.body = Bytes::from(body.into());
		self
	}

	fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = HeaderValue::from_str(location) {
			self.headers.insert(LOCATION, value);
		}
		self
	}

	/// The Location header, when present and readable.
	pub fn location(&self) -> Option<&str> {
		self.headers.get(LOCATION).and_then(|value| value.to_str().ok())
	}

	/// The body as UTF-8 text (lossy).
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}
