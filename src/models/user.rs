use serde::Deserialize;
use std::collections::HashMap;

/// User record as embedded in comments and media responses.
///
/// Fields are optional or defaulted where the server omits them depending
/// on the endpoint; unknown fields are kept in `additional_fields`.
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub pk: u64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_verified: bool,

    // Additional fields we don't explicitly model
    #[serde(flatten)]
    pub additional_fields: HashMap<String, serde_json::Value>,
}
