//! Comment creation endpoint.

use crate::client::Session;
use crate::requests::{ApiRequest, RequestBody};
use reqwest::Method;

/// Build the comment creation request for `media/<media_id>/comment/`.
pub fn build(session: &Session, media_id: u64, text: &str) -> ApiRequest {
    let fields = vec![
        ("comment_text".to_string(), text.to_string()),
        ("_uuid".to_string(), session.uuid.clone()),
        ("_csrftoken".to_string(), session.csrf_token.clone()),
    ];

    ApiRequest {
        method: Method::POST,
        path: format!("media/{}/comment/", media_id),
        query: Vec::new(),
        body: RequestBody::Form(fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_documented_form_fields() {
        let session = Session {
            uuid: "device-uuid".to_string(),
            csrf_token: "csrf".to_string(),
            session_id: None,
        };
        let request = build(&session, 99, "nice shot");

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "media/99/comment/");

        let fields = match request.body {
            RequestBody::Form(fields) => fields,
            other => panic!("expected form body, got {:?}", other),
        };
        assert_eq!(fields[0], ("comment_text".to_string(), "nice shot".to_string()));
        assert_eq!(fields[1].0, "_uuid");
        assert_eq!(fields[2].0, "_csrftoken");
    }
}
