use serde::Deserialize;

pub mod comment;
pub mod media;
pub mod user;

/// Bare status/message wrapper returned by endpoints with no other payload
/// (photo upload, expose, comment creation).
#[derive(Deserialize, Debug, Clone)]
pub struct StatusResult {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResult {
    /// Whether the server reported success. The comparison is
    /// case-insensitive; the API has been observed returning both "ok"
    /// and "OK".
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_is_case_insensitive() {
        let result: StatusResult = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(result.is_ok());
        assert!(result.message.is_none());
    }

    #[test]
    fn fail_status_carries_message() {
        let result: StatusResult =
            serde_json::from_str(r#"{"status": "fail", "message": "login_required"}"#).unwrap();
        assert!(!result.is_ok());
        assert_eq!(result.message.as_deref(), Some("login_required"));
    }
}
