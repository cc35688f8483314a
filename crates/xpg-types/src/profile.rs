//! User profile records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile fields consumed by summary reports.
///
/// `attrs` is a free-form attribute bag (phone number and similar);
/// the platform does not commit to its shape, so neither do we.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub audit_ratio: f64,
    #[serde(default)]
    pub total_up: i64,
    #[serde(default)]
    pub total_down: i64,
    #[serde(default)]
    pub attrs: Value,
}

impl UserProfile {
    /// First and last name joined, falling back to the login.
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.login.clone(),
        }
    }
}
