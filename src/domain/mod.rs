//! Domain types and pure logic shared by the gateway operations.

pub mod events;
pub mod image;
pub mod task;

use chrono::Utc;

/// Current time as epoch milliseconds, the timestamp unit used throughout
/// (object keys, task records, event payloads).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
