//! Media comments endpoint: fetches the comment list on a media item.

use crate::requests::{ApiRequest, RequestBody};
use reqwest::Method;

/// Build the comments fetch request for `media/<media_id>/comments/`.
///
/// `max_id` is the pagination cursor returned in a previous response's
/// `next_max_id` field; omit it for the first page. The cursor is carried
/// as a query pair so it gets percent-encoded at send time.
pub fn build(media_id: u64, max_id: Option<&str>) -> ApiRequest {
    let query = match max_id {
        Some(max_id) => vec![("max_id".to_string(), max_id.to_string())],
        None => Vec::new(),
    };

    ApiRequest {
        method: Method::GET,
        path: format!("media/{}/comments/", media_id),
        query,
        body: RequestBody::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_documented_method_and_path() {
        let request = build(1234567890, None);
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "media/1234567890/comments/");
        assert!(request.query.is_empty());
        assert!(matches!(request.body, RequestBody::Empty));
    }

    #[test]
    fn carries_pagination_cursor_as_query_pair() {
        let request = build(1234567890, Some("17890123"));
        assert_eq!(request.path, "media/1234567890/comments/");
        assert_eq!(
            request.query,
            vec![("max_id".to_string(), "17890123".to_string())]
        );
    }

    #[test]
    fn cursor_with_reserved_characters_is_kept_verbatim() {
        // Encoding happens at send time; the descriptor stores the raw value.
        let request = build(1234567890, Some("a+b&c=d"));
        assert_eq!(request.query[0].1, "a+b&c=d");
    }
}
