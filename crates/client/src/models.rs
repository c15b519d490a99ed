// API Data Model
//
// Typed mirrors of the backend DTOs. Field names follow the backend's
// camelCase JSON; timestamps use its `yyyy-MM-dd HH:mm:ss` format with an
// ISO-8601 fallback for fields the backend leaves unformatted.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope wrapping every backend body: `{code, message, data}`.
///
/// Operations return this envelope exactly as received; `data` is `None`
/// when the backend sends `null` (errors, void operations).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// User account record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub document_count: Option<i32>,
    #[serde(default, with = "backend_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "backend_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Successful login payload: the user identity plus an optional bearer
/// token when the backend issues one
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

/// Extraction task record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub task_id: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub task_name: Option<String>,
    pub document_count: Option<i32>,
    pub file_path: Option<HashMap<String, String>>,
    pub status: Option<String>,
    pub status_text: Option<String>,
    pub stage: Option<String>,
    pub progress: Option<i32>,
    pub retry_count: Option<i32>,
    #[serde(with = "backend_datetime")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(with = "backend_datetime")]
    pub end_time: Option<NaiveDateTime>,
    pub result: Option<Value>,
    pub extract_fields: Option<Value>,
    pub processing_details: Option<Value>,
    pub error_message: Option<String>,
    #[serde(with = "backend_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(with = "backend_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Point-in-time processing progress for a task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskProgress {
    pub task_id: i64,
    /// Stage names: UPLOADING, OCR_PROCESSING, QWEN_EXTRACTING, COMPLETED, FAILED
    pub stage: Option<String>,
    pub stage_text: Option<String>,
    /// Percentage 0-100
    pub progress: i32,
    pub current_file: Option<String>,
    pub processed_count: i32,
    pub total_count: i32,
    /// Estimated seconds remaining
    pub estimated_time_remaining: Option<i64>,
    pub error_message: Option<String>,
}

/// One page of a Spring Data paginated listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    /// Zero-indexed page number
    pub number: i64,
    pub size: i64,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// Serde support for the backend's `yyyy-MM-dd HH:mm:ss` timestamps.
/// Fields without the explicit backend format arrive as ISO-8601, so
/// deserialization accepts both.
pub(crate) mod backend_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, ISO_FORMAT))
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
