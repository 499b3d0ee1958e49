//! OAuth token models for `/auth/token/create` and `/auth/token/refresh`.

use serde::{Deserialize, Serialize};

use super::de;

/// Tokens issued for a seller or dropshipper account. Both endpoints return
/// the same shape.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    /// Use while `refresh_expires_in` is positive.
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub expires_in: Option<i64>,
    /// Refresh token lifetime in seconds.
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub refresh_expires_in: Option<i64>,
    /// Access token expiry, epoch milliseconds.
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub expire_time: Option<i64>,
    /// Refresh token expiry, epoch milliseconds.
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub refresh_token_valid_time: Option<i64>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub account_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub seller_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub user_id: Option<String>,
    pub user_nick: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub havana_id: Option<String>,
    pub account_platform: Option<String>,
    pub account: Option<String>,
    pub sp: Option<String>,
    pub locale: Option<String>,
    pub request_id: Option<String>,
}

impl TokenResponse {
    /// Expiry of the access token as a UTC timestamp, when reported.
    pub fn expires_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.expire_time
            .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
    }
}
