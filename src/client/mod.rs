use crate::models::comment::MediaCommentsResult;
use crate::models::media::ConfigurePhotoResult;
use crate::models::StatusResult;
use crate::requests::{self, ApiRequest, RequestBody};
use log::{debug, info};
use reqwest::{Client, Error as ReqwestError};
use serde::de::DeserializeOwned;
use std::fmt;
use uuid::Uuid;

/// Base URL of Instagram's private mobile API.
pub const API_URL: &str = "https://i.instagram.com/api/v1/";

/// User agent string Instagram's Android app sends. The API rejects
/// requests carrying anything that doesn't look like the mobile app.
pub const USER_AGENT: &str =
    "Instagram 10.26.0 Android (18/4.3; 320dpi; 720x1280; Xiaomi; HM 1SW; armani; qcom; en_US)";

// Define a custom error type for handling Instagram API errors
#[derive(Debug)]
pub enum InstagramClientError {
    RequestError(ReqwestError),
    ApiError(String),
    ParseError(serde_json::Error),
    IoError(std::io::Error),
}

impl fmt::Display for InstagramClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InstagramClientError::RequestError(err) => write!(f, "Request error: {}", err),
            InstagramClientError::ApiError(msg) => write!(f, "Instagram API error: {}", msg),
            InstagramClientError::ParseError(err) => write!(f, "Parse error: {}", err),
            InstagramClientError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for InstagramClientError {}

impl From<ReqwestError> for InstagramClientError {
    fn from(err: ReqwestError) -> Self {
        InstagramClientError::RequestError(err)
    }
}

impl From<serde_json::Error> for InstagramClientError {
    fn from(err: serde_json::Error) -> Self {
        InstagramClientError::ParseError(err)
    }
}

impl From<std::io::Error> for InstagramClientError {
    fn from(err: std::io::Error) -> Self {
        InstagramClientError::IoError(err)
    }
}

/// Session state attached to every request: the device uuid used for the
/// `_uuid` body field, the csrf token, and the session cookie if one is
/// available. Obtaining these (login) is outside this crate; they come
/// from configuration.
#[derive(Debug, Clone)]
pub struct Session {
    pub uuid: String,
    pub csrf_token: String,
    pub session_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            csrf_token: String::new(),
            session_id: None,
        }
    }

    /// The `Cookie` header value for this session, or None if there is
    /// nothing to send.
    pub fn cookie_header(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(session_id) = &self.session_id {
            parts.push(format!("sessionid={}", session_id));
        }
        if !self.csrf_token.is_empty() {
            parts.push(format!("csrftoken={}", self.csrf_token));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct InstagramClient {
    pub client: Client,
    pub session: Session,
    pub user_agent: String,
    base_url: String,
}

impl InstagramClient {
    pub fn new() -> Self {
        Self::with_user_agent(USER_AGENT.to_string())
    }

    pub fn with_user_agent(user_agent: String) -> Self {
        Self {
            client: Self::get_client().unwrap(),
            session: Session::new(),
            user_agent,
            base_url: API_URL.to_string(),
        }
    }

    /// Point the client at a different API base URL. Used by tests to
    /// target a local mock server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        if !base_url.ends_with('/') {
            self.base_url = format!("{}/", base_url);
        } else {
            self.base_url = base_url;
        }
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Create a client from a configuration object
    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        debug!(
            "Creating InstagramClient with user_agent: {}",
            config.user_agent
        );
        let mut client = Self::with_user_agent(config.user_agent.clone());

        if let Some(uuid) = &config.device_uuid {
            client.session.uuid = uuid.clone();
        }
        if let Some(csrf) = &config.csrf_token {
            client.session.csrf_token = csrf.clone();
        }
        client.session.session_id = config.session_id.clone();

        if let Some(api_url) = &config.api_url {
            client = client.with_base_url(api_url.clone());
        }

        client
    }

    fn get_client() -> Result<Client, InstagramClientError> {
        Ok(Client::builder().build()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Execute an endpoint request and deserialize the JSON response.
    ///
    /// Attaches the fixed set of headers the vendor's mobile API expects,
    /// sends the request, and parses the textual response. Any response
    /// whose `status` field is not the literal "ok" (case-insensitive)
    /// becomes an `ApiError` carrying the server's message. There are no
    /// retries: transport failures propagate as `RequestError`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, InstagramClientError> {
        let url = self.url(&request.path);
        debug!("Executing {} {}", request.method, url);

        let mut req_builder = self
            .client
            .request(request.method, &url)
            .header("X-IG-Capabilities", "3Q4=")
            .header("X-IG-Connection-Type", "WIFI")
            .header("Cookie2", "$Version=1")
            .header("Accept-Language", "en-US")
            .header("Connection", "close")
            .header("User-Agent", &self.user_agent);

        if let Some(cookie) = self.session.cookie_header() {
            req_builder = req_builder.header("Cookie", cookie);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        req_builder = match request.body {
            RequestBody::Empty => req_builder,
            RequestBody::Form(fields) => req_builder.form(&fields),
            RequestBody::Multipart(payload) => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in payload.text_fields {
                    form = form.text(name, value);
                }
                let part = reqwest::multipart::Part::bytes(payload.file.bytes)
                    .file_name(payload.file.filename)
                    .mime_str("application/octet-stream")?;
                req_builder.multipart(form.part(payload.file.name, part))
            }
        };

        let response = req_builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        debug!("Response body length: {} bytes", body.len());

        let json: serde_json::Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(e) => {
                debug!("Error parsing response: {}", e);
                debug!("First 100 chars: {}", truncate_for_log(&body));
                return Err(InstagramClientError::ParseError(e));
            }
        };

        // The API reports failures through the status field of the JSON
        // body rather than the HTTP status line.
        if let Some(api_status) = json["status"].as_str() {
            if !api_status.eq_ignore_ascii_case("ok") {
                let message = json["message"].as_str().unwrap_or("unknown error");
                return Err(InstagramClientError::ApiError(format!(
                    "Server returned status '{}': {}",
                    api_status, message
                )));
            }
        } else if !status.is_success() {
            return Err(InstagramClientError::ApiError(format!(
                "Server returned error status: {}",
                status
            )));
        }

        Ok(serde_json::from_value(json)?)
    }

    /// Upload a photo with a caption.
    ///
    /// The vendor's upload protocol is a fixed three-call chain:
    /// 1. POST the image bytes as multipart form data to `upload/photo/`
    /// 2. POST a configure call associating the uploaded asset with a caption
    /// 3. POST an expose call to finalize visibility
    ///
    /// Each step fails if the response status field is not "ok"; there is
    /// no rollback of earlier steps on a later failure.
    ///
    /// # Arguments
    /// * `photo` - Raw JPEG bytes of the image to upload
    /// * `caption` - Caption text for the post
    /// * `upload_id` - Optional identifier tying the three calls together.
    ///   A random one is generated if not supplied.
    pub async fn upload_photo(
        &self,
        photo: Vec<u8>,
        caption: &str,
        upload_id: Option<String>,
    ) -> Result<ConfigurePhotoResult, InstagramClientError> {
        let upload_id = upload_id.unwrap_or_else(requests::generate_upload_id);

        info!("Uploading photo with upload_id {}", upload_id);
        let upload_result: StatusResult = self
            .execute(requests::upload_photo::build(
                &self.session,
                photo,
                &upload_id,
            ))
            .await?;
        debug!("Photo upload result: {:?}", upload_result);

        info!("Configuring uploaded photo");
        let configure_result: ConfigurePhotoResult = self
            .execute(requests::configure_photo::build(
                &self.session,
                &upload_id,
                caption,
            ))
            .await?;
        debug!("Configure photo result: {:?}", configure_result);

        info!("Exposing configured photo");
        let expose_result: StatusResult = self
            .execute(requests::expose::build(&self.session))
            .await?;
        debug!("Expose result: {:?}", expose_result);

        Ok(configure_result)
    }

    /// Fetch the comments on a media item.
    ///
    /// # Arguments
    /// * `media_id` - Numeric identifier of the media item
    /// * `max_id` - Pagination cursor from a previous response's
    ///   `next_max_id`, or None for the first page
    pub async fn fetch_media_comments(
        &self,
        media_id: u64,
        max_id: Option<&str>,
    ) -> Result<MediaCommentsResult, InstagramClientError> {
        info!("Fetching comments for media {}", media_id);
        let result: MediaCommentsResult = self
            .execute(requests::media_comments::build(media_id, max_id))
            .await?;
        debug!(
            "Fetched {} of {} comments",
            result.comments.len(),
            result.comment_count
        );
        Ok(result)
    }

    /// Post a comment on a media item.
    pub async fn post_comment(
        &self,
        media_id: u64,
        text: &str,
    ) -> Result<StatusResult, InstagramClientError> {
        info!("Posting comment on media {}", media_id);
        let result: StatusResult = self
            .execute(requests::post_comment::build(&self.session, media_id, text))
            .await?;
        debug!("Post comment result: {:?}", result);
        Ok(result)
    }
}

impl Default for InstagramClient {
    fn default() -> Self {
        Self::new()
    }
}

/// First 100 characters of a response body for debug logging. Truncates
/// on character boundaries; byte slicing would panic on multibyte UTF-8.
fn truncate_for_log(body: &str) -> String {
    body.chars().take(100).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_truncation_respects_char_boundaries() {
        // A two-byte character straddling the 100-byte mark must not panic.
        let body = format!("{}é and more trailing text", "x".repeat(99));
        let truncated = truncate_for_log(&body);
        assert_eq!(truncated.chars().count(), 100);
        assert!(truncated.ends_with('é'));
    }

    #[test]
    fn log_truncation_keeps_short_bodies() {
        assert_eq!(truncate_for_log("short"), "short");
    }
}
