use serde::Deserialize;
use std::collections::HashMap;

/// Response of the configure call, carrying the descriptor of the media
/// item the upload produced.
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigurePhotoResult {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub media: Option<ConfiguredMedia>,
}

/// The configured media item as the server describes it.
#[derive(Deserialize, Debug, Clone)]
pub struct ConfiguredMedia {
    /// Composite identifier, e.g. "12345_6789".
    pub id: String,
    #[serde(default)]
    pub pk: Option<u64>,
    /// Shortcode used in permalink URLs.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub media_type: Option<i32>,
    #[serde(default)]
    pub taken_at: Option<i64>,

    // Additional fields we don't explicitly model
    #[serde(flatten)]
    pub additional_fields: HashMap<String, serde_json::Value>,
}

impl ConfiguredMedia {
    /// Permalink for the configured media, when the server provided a
    /// shortcode.
    pub fn permalink(&self) -> Option<String> {
        self.code
            .as_ref()
            .map(|code| format!("https://www.instagram.com/p/{}/", code))
    }
}
