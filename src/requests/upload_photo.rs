//! Photo upload endpoint: the first call of the three-call upload chain.

use crate::client::Session;
use crate::requests::{ApiRequest, FilePart, MultipartPayload, RequestBody};
use reqwest::Method;

/// Compression metadata the mobile app reports alongside every upload.
const IMAGE_COMPRESSION: &str = "{\"lib_name\":\"jt\",\"lib_version\":\"1.3.0\",\"quality\":\"87\"}";

/// Build the multipart upload request for `upload/photo/`.
///
/// The body carries exactly four text fields (`upload_id`, `_uuid`,
/// `_csrftoken`, `image_compression`) and the image bytes as a binary
/// `photo` part named `pending_media_<upload_id>.jpg`.
pub fn build(session: &Session, photo: Vec<u8>, upload_id: &str) -> ApiRequest {
    let text_fields = vec![
        ("upload_id".to_string(), upload_id.to_string()),
        ("_uuid".to_string(), session.uuid.clone()),
        ("_csrftoken".to_string(), session.csrf_token.clone()),
        ("image_compression".to_string(), IMAGE_COMPRESSION.to_string()),
    ];

    ApiRequest {
        method: Method::POST,
        path: "upload/photo/".to_string(),
        query: Vec::new(),
        body: RequestBody::Multipart(MultipartPayload {
            text_fields,
            file: FilePart {
                name: "photo".to_string(),
                filename: format!("pending_media_{}.jpg", upload_id),
                bytes: photo,
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session {
            uuid: "device-uuid".to_string(),
            csrf_token: "csrf".to_string(),
            session_id: None,
        }
    }

    #[test]
    fn builds_documented_method_and_path() {
        let request = build(&test_session(), vec![0xFF, 0xD8], "42");
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "upload/photo/");
    }

    #[test]
    fn multipart_contains_exactly_documented_fields() {
        let request = build(&test_session(), vec![0xFF, 0xD8], "42");
        let payload = match request.body {
            RequestBody::Multipart(payload) => payload,
            other => panic!("expected multipart body, got {:?}", other),
        };

        let names: Vec<&str> = payload
            .text_fields
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            ["upload_id", "_uuid", "_csrftoken", "image_compression"]
        );
        assert_eq!(payload.text_fields[0].1, "42");
        assert_eq!(payload.text_fields[1].1, "device-uuid");
        assert_eq!(payload.text_fields[2].1, "csrf");
        assert!(payload.text_fields[3].1.contains("\"quality\":\"87\""));

        assert_eq!(payload.file.name, "photo");
        assert_eq!(payload.file.filename, "pending_media_42.jpg");
        assert_eq!(payload.file.bytes, vec![0xFF, 0xD8]);
    }
}
