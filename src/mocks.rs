//! Built-in sample records for the demo harness and tests
//!
//! Deterministic and constructed on demand; no ambient shared state.

use crate::record::TaskRecord;
use chrono::{DateTime, TimeZone, Utc};

/// A fixed set of captured-request samples covering the interesting cases:
/// every filterable field populated, mixed hosts/methods/status classes,
/// plus a record with a malformed URL and one that never got a response.
pub fn demo_records() -> Vec<TaskRecord> {
    vec![
        record("https://api.example.com/v1/login", "POST", 200, 0),
        record("https://api.example.com/v1/login", "POST", 401, 12),
        record("https://api.example.com/v1/profile", "GET", 200, 25),
        record("https://api.example.com/v1/profile/avatar.png", "GET", 304, 26),
        record("https://api.example.com/v1/profile", "PATCH", 204, 40),
        record("https://cdn.example.com/assets/app.css", "GET", 200, 41),
        record("https://api.example.com/v1/uploads", "PUT", 201, 55),
        record("https://api.example.com/v1/uploads/9f2c", "DELETE", 500, 58),
        record("wss://live.example.com/v1/feed", "WEBSOCKET", 101, 60),
        record("https://other.test/health", "HEAD", 200, 75),
        record("https://other.test/metrics", "TRACE", 405, 76),
        record("not a url", "GET", 200, 80),
        TaskRecord {
            url: Some("https://api.example.com/v1/slow".to_string()),
            method: Some("GET".to_string()),
            status_code: 0,
            created_at: Some(base_time(90)),
        },
    ]
}

fn record(url: &str, method: &str, status_code: i32, offset: u32) -> TaskRecord {
    TaskRecord {
        url: Some(url.to_string()),
        method: Some(method.to_string()),
        status_code,
        created_at: Some(base_time(offset)),
    }
}

// offset is seconds past the capture start, so it may exceed a minute
fn base_time(offset: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30 + offset / 60, offset % 60)
        .single()
        .expect("valid demo timestamp")
}
