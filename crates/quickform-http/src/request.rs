use crate::HttpError;
use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri};
use percent_encoding::percent_decode_str;
use quickform_core::Submission;
use std::net::SocketAddr;

/// An inbound HTTP request.
///
/// A plain value handed to the form handler; carrying it explicitly
/// replaces any ambient request/server state.
///
/// # Examples
///
/// ```
/// use hyper::Method;
/// use quickform_http::Request;
///
/// let request = Request::builder()
///     .method(Method::POST)
///     .uri("/contact")
///     .body("name=Ada&email=ada%40example.com")
///     .build()
///     .unwrap();
///
/// assert!(request.is_post());
/// let submission = request.form_data();
/// assert_eq!(submission.get_str("email"), Some("ada@example.com"));
/// ```
#[derive(Debug)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub remote_addr: Option<SocketAddr>,
}

impl Request {
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Get the request path.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	pub fn is_post(&self) -> bool {
		self.method == Method::POST
	}

	/// The peer IP as text, when the address is known.
	pub fn remote_ip(&self) -> Option<String> {
		self.remote_addr.map(|addr| addr.ip().to_string())
	}

	/// Decode the body as `application/x-www-form-urlencoded` pairs.
	///
	/// Lenient by design: pairs that fail percent-decoding are dropped
	/// rather than failing the request, so a malformed body degrades to
	/// missing values and ordinary required-field errors.
	pub fn form_data(&self) -> Submission {
		let body = String::from_utf8_lossy(&self.body);
		let pairs = body
			.split('&')
			.filter(|pair| !pair.is_empty())
			.filter_map(|pair| {
				// Split on first '=' only to preserve '=' inside values
				let mut parts = pair.splitn(2, '=');
				let key = decode_component(parts.next()?)?;
				let value = decode_component(parts.next().unwrap_or(""))?;
				Some((key, value))
			});
		Submission::from_pairs(pairs)
	}
}

fn decode_component(raw: &str) -> Option<String> {
	let unplused = raw.replace('+', " ");
	percent_decode_str(&unplused)
		.decode_utf8()
		.ok()
		.map(|decoded| decoded.into_owned())
}

#[derive(Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	headers: HeaderMap,
	body: Bytes,
	remote_addr: Option<SocketAddr>,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn remote_addr(mut self, addr: SocketAddr) -> Self {
		self.remote_addr = Some(addr);
		self
	}

	pub fn build(self) -> Result<Request, HttpError> {
		let raw_uri = self.uri.unwrap_or_else(|| "/".to_string());
		let uri: Uri = raw_uri
			.parse()
			.map_err(|_| HttpError::InvalidUri(raw_uri))?;

		Ok(Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			headers: self.headers,
			body: self.body,
			remote_addr: self.remote_addr,
		})
	}
}
