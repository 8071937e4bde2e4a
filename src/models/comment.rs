use crate::models::user::User;
use serde::Deserialize;
use std::collections::HashMap;

/// A single comment on a media item, mirroring the server's JSON schema.
///
/// Every field beyond `pk` and `text` is optional or defaulted: which ones
/// the server populates varies by endpoint and account state.
#[derive(Deserialize, Debug, Clone)]
pub struct Comment {
    pub pk: String,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub comment_type: i32,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub created_at_utc: i64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub bit_flags: i32,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub did_report_as_spam: bool,
    #[serde(default)]
    pub share_enabled: bool,
    #[serde(default)]
    pub media_id: Option<u64>,
    #[serde(default)]
    pub comment_like_count: i32,

    // Additional fields we don't explicitly model
    #[serde(flatten)]
    pub additional_fields: HashMap<String, serde_json::Value>,
}

impl Comment {
    /// Format a comment for display with author and timestamp
    pub fn format_summary(&self) -> String {
        let author = self
            .user
            .as_ref()
            .map(|user| user.username.as_str())
            .unwrap_or("unknown");
        format!(
            "[{}] {}: {} ({} likes)",
            self.format_timestamp(),
            author,
            self.text,
            self.comment_like_count
        )
    }

    /// Format the UTC creation timestamp as a human-readable string
    pub fn format_timestamp(&self) -> String {
        use chrono::{TimeZone, Utc};

        let timestamp = Utc
            .timestamp_opt(self.created_at_utc, 0)
            .single()
            .unwrap_or_else(Utc::now);

        timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Response of the media comments endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct MediaCommentsResult {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub comment_count: i64,
    /// The post's own caption, delivered in comment form.
    #[serde(default)]
    pub caption: Option<Comment>,
    #[serde(default)]
    pub has_more_comments: bool,
    #[serde(default)]
    pub next_max_id: Option<String>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMENT_FIXTURE: &str = r#"{
        "pk": "17890123456789",
        "user_id": 1234,
        "text": "great picture",
        "type": 0,
        "created_at": 1500000000,
        "created_at_utc": 1500000000,
        "content_type": "comment",
        "status": "Active",
        "bit_flags": 0,
        "user": {"pk": 1234, "username": "someone", "full_name": "Some One"},
        "did_report_as_spam": false,
        "share_enabled": true,
        "media_id": 99887766,
        "comment_like_count": 3
    }"#;

    #[test]
    fn parses_comment_fixture() {
        let comment: Comment = serde_json::from_str(COMMENT_FIXTURE).unwrap();
        assert_eq!(comment.pk, "17890123456789");
        assert_eq!(comment.user_id, 1234);
        assert_eq!(comment.text, "great picture");
        assert_eq!(comment.comment_type, 0);
        assert_eq!(comment.created_at_utc, 1500000000);
        assert_eq!(comment.content_type.as_deref(), Some("comment"));
        assert_eq!(comment.media_id, Some(99887766));
        assert_eq!(comment.comment_like_count, 3);
        assert!(comment.share_enabled);
        assert!(!comment.did_report_as_spam);
        assert_eq!(comment.user.as_ref().unwrap().username, "someone");
    }

    #[test]
    fn parses_comments_listing() {
        let json = format!(
            r#"{{
                "comments": [{}],
                "comment_count": 42,
                "caption": null,
                "has_more_comments": true,
                "next_max_id": "17890123",
                "status": "ok"
            }}"#,
            COMMENT_FIXTURE
        );

        let result: MediaCommentsResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.comments.len(), 1);
        assert_eq!(result.comment_count, 42);
        assert!(result.has_more_comments);
        assert_eq!(result.next_max_id.as_deref(), Some("17890123"));
        assert!(result.caption.is_none());
    }

    #[test]
    fn formats_summary_with_unknown_author() {
        let comment: Comment =
            serde_json::from_str(r#"{"pk": "1", "text": "hi"}"#).unwrap();
        let summary = comment.format_summary();
        assert!(summary.contains("unknown: hi"));
    }
}
