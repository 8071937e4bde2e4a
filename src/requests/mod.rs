//! Per-endpoint request descriptors.
//!
//! Every endpoint is a plain function returning an [`ApiRequest`] record
//! (method, path, body). Building is separated from execution so the
//! descriptors can be inspected in tests without touching the network;
//! [`crate::client::InstagramClient::execute`] turns a descriptor into an
//! actual HTTP call.

use reqwest::Method;
use uuid::Uuid;

pub mod configure_photo;
pub mod expose;
pub mod media_comments;
pub mod post_comment;
pub mod upload_photo;

/// A single endpoint call, fully described but not yet sent.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `upload/photo/`.
    pub path: String,
    /// Query string key/value pairs, percent-encoded at send time.
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

/// Body of an endpoint call.
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded` key/value pairs.
    Form(Vec<(String, String)>),
    /// `multipart/form-data` with text fields and one binary part.
    Multipart(MultipartPayload),
}

#[derive(Debug)]
pub struct MultipartPayload {
    pub text_fields: Vec<(String, String)>,
    pub file: FilePart,
}

#[derive(Debug)]
pub struct FilePart {
    /// Form field name of the binary part.
    pub name: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Generate a fresh upload identifier.
///
/// The identifier ties the upload, configure, and expose calls together.
/// A random UUID is used rather than wall-clock milliseconds so concurrent
/// uploads can never collide.
pub fn generate_upload_id() -> String {
    Uuid::new_v4().simple().to_string()
}
