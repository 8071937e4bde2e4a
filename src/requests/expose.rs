//! Expose endpoint: the final visibility call of the upload chain.
//!
//! Carries no meaningful payload beyond the session identifiers and the
//! experiment name the mobile app sends.

use crate::client::Session;
use crate::requests::{ApiRequest, RequestBody};
use reqwest::Method;

const EXPERIMENT: &str = "ig_android_profile_contextual_feed";

/// Build the expose request for `qe/expose/`.
pub fn build(session: &Session) -> ApiRequest {
    let fields = vec![
        ("id".to_string(), session.uuid.clone()),
        ("experiment".to_string(), EXPERIMENT.to_string()),
        ("_uuid".to_string(), session.uuid.clone()),
        ("_csrftoken".to_string(), session.csrf_token.clone()),
    ];

    ApiRequest {
        method: Method::POST,
        path: "qe/expose/".to_string(),
        query: Vec::new(),
        body: RequestBody::Form(fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_documented_method_and_path() {
        let session = Session::new();
        let request = build(&session);
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "qe/expose/");

        let fields = match request.body {
            RequestBody::Form(fields) => fields,
            other => panic!("expected form body, got {:?}", other),
        };
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["id", "experiment", "_uuid", "_csrftoken"]);
    }
}
