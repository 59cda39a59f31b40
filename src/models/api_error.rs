use serde::{Deserialize, Serialize};

/// Error body returned by the abuse API on 4xx/5xx.
/// Tool results carry the raw body verbatim; this type is only used for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Short identifier for the error
    pub code: String,
    /// Human-readable, English description of the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The specific fields and the errors found with their contents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ApiErrorField>,
    /// Stack trace; only present on development and test environments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorField {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// JSONPath of the offending field (or of the object containing it)
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_related: Option<String>,
}

impl ApiError {
    /// Best-effort parse of an upstream error body.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_errors() {
        let body = r#"{
            "code": "INVALID_BODY",
            "message": "Request body doesn't fulfill schema",
            "fields": [{ "code": "MISSING", "path": "$.source", "pathRelated": "$" }]
        }"#;

        let error = ApiError::parse(body).unwrap();
        assert_eq!(error.code, "INVALID_BODY");
        assert_eq!(error.fields[0].path, "$.source");
        assert_eq!(error.fields[0].path_related.as_deref(), Some("$"));
        assert!(error.stack.is_empty());
    }

    #[test]
    fn non_json_body_is_not_an_api_error() {
        assert_eq!(ApiError::parse("<html>502 Bad Gateway</html>"), None);
    }
}
