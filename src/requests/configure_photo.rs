//! Configure endpoint: associates an uploaded asset with its caption.

use crate::client::Session;
use crate::requests::{ApiRequest, RequestBody};
use reqwest::Method;

/// Source type the mobile app reports for library uploads.
const SOURCE_TYPE: &str = "4";

/// Build the configure request for `media/configure/`.
pub fn build(session: &Session, upload_id: &str, caption: &str) -> ApiRequest {
    let fields = vec![
        ("upload_id".to_string(), upload_id.to_string()),
        ("caption".to_string(), caption.to_string()),
        ("source_type".to_string(), SOURCE_TYPE.to_string()),
        ("_uuid".to_string(), session.uuid.clone()),
        ("_csrftoken".to_string(), session.csrf_token.clone()),
    ];

    ApiRequest {
        method: Method::POST,
        path: "media/configure/".to_string(),
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
        let request = build(&session, "42", "hello world");

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "media/configure/");

        let fields = match request.body {
            RequestBody::Form(fields) => fields,
            other => panic!("expected form body, got {:?}", other),
        };
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            ["upload_id", "caption", "source_type", "_uuid", "_csrftoken"]
        );
        assert_eq!(fields[0].1, "42");
        assert_eq!(fields[1].1, "hello world");
    }
}
