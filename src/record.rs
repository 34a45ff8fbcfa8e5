use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view of a captured network task
///
/// The filter engine depends only on this narrow capability set, not on any
/// concrete record type or its storage. Records are never mutated.
pub trait RequestRecord {
    /// HTTP response status code, or 0 if no response was received
    fn status_code(&self) -> i32;

    /// Full request URL, if one was captured
    fn url(&self) -> Option<&str>;

    /// Raw HTTP method string, if one was captured
    fn http_method(&self) -> Option<&str>;
}

/// Concrete captured-request record used by the CLI and the demo data set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub status_code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RequestRecord for TaskRecord {
    fn status_code(&self) -> i32 {
        self.status_code
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn http_method(&self) -> Option<&str> {
        self.method.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: TaskRecord = serde_json::from_str(r#"{"status_code": 200}"#).unwrap();
        assert_eq!(record.status_code(), 200);
        assert_eq!(record.url(), None);
        assert_eq!(record.http_method(), None);
    }
}
