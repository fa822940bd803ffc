//! Generic acknowledgement returned by action and delete endpoints.

use serde::{Deserialize, Serialize};

/// `{result, id?, code?, reason?, details?}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleResponse {
    /// Outcome, usually `success`
    pub result: String,
    /// Identifier of the affected resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Provider code accompanying the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Provider reason accompanying the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Free-form details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SimpleResponse {
    /// Returns true when the provider reported `success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.eq_ignore_ascii_case("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_body() {
        let response: SimpleResponse = serde_json::from_str(r#"{"result":"success"}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.id, None);
    }

    #[test]
    fn parses_full_body() {
        let response: SimpleResponse = serde_json::from_str(
            r#"{"id":"abc","result":"failed","code":"x","reason":"y","details":"z"}"#,
        )
        .unwrap();
        assert!(!response.is_success());
        assert_eq!(response.id.as_deref(), Some("abc"));
        assert_eq!(response.details.as_deref(), Some("z"));
    }
}
