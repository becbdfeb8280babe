//! HTTP value types for QuickForm
//!
//! Explicit request and response values at the hosting-server boundary.
//! The form handler receives a [`Request`] and returns a [`Response`];
//! no ambient server state is read anywhere.

pub mod request;
pub mod response;

use thiserror::Error;

pub use request::{Request, RequestBuilder};
pub use response::Response;

#[derive(Debug, Error)]
pub enum HttpError {
	#[error("invalid URI: {0}")]
	InvalidUri(String),
}
