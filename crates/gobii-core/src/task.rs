//! The task record exchanged with the service.

use chrono::{DateTime, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};

use crate::status::TaskStatus;

/// API field names (camelCase) paired with their wire keys (`snake_case`).
///
/// [`TaskRecord`] fields are named after the wire keys, so serde applies this
/// mapping implicitly in both directions.
pub const FIELD_MAP: &[(&str, &str)] = &[
    ("id", "id"),
    ("agent", "agent"),
    ("agentId", "agent_id"),
    ("prompt", "prompt"),
    ("outputSchema", "output_schema"),
    ("status", "status"),
    ("createdAt", "created_at"),
    ("updatedAt", "updated_at"),
    ("errorMessage", "error_message"),
    ("wait", "wait"),
    ("result", "result"),
];

/// A browser-use task, either as submitted by the caller or as reported by
/// the service.
///
/// A record with no `id` has not been submitted yet. Once submitted, `id`,
/// `agent_id`, `status`, `error_message` and the timestamps are owned by the
/// service; every fetch yields a fresh record rather than updating an old one.
///
/// # Equality
///
/// `==` and [`Hash`] consider **only** `id`. Two records with the same id but
/// different status compare equal, and two unsubmitted records (both ids
/// `None`) compare equal too. Keep this in mind before putting records in a
/// `HashSet` or using them as map keys: later polls of the same task collide
/// with earlier ones. Use [`TaskRecord::same_fields`] for a full comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct TaskRecord {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Agent name chosen by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,

    /// Server-assigned agent identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    /// Instruction text for the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Expected shape of a structured result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    /// ISO-8601 creation timestamp, as sent by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// ISO-8601 last-update timestamp, as sent by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Failure reason; only set when `status` is `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Seconds the service may block before answering the submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait: Option<i64>,

    /// Task output; only set once `status` is `completed`.
    ///
    /// An absent key decodes to `None`, an explicit `null` to `Some(Value::Null)`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    #[schemars(with = "Option<serde_json::Value>")]
    pub result: Option<serde_json::Value>,
}

impl TaskRecord {
    /// Build an unsubmitted task with the given prompt.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    #[must_use]
    pub fn with_output_schema(mut self, schema: impl Into<String>) -> Self {
        self.output_schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn with_wait(mut self, seconds: i64) -> Self {
        self.wait = Some(seconds);
        self
    }

    /// Whether the service has assigned an id.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.id.is_some()
    }

    /// Whether the reported status is final.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_some_and(TaskStatus::is_terminal)
    }

    /// Parsed `created_at`, or `None` if absent or unparsable.
    #[must_use]
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Parsed `updated_at`, or `None` if absent or unparsable.
    #[must_use]
    pub fn updated_at_time(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }

    /// Field-by-field comparison, unlike `==` which only looks at `id`.
    #[must_use]
    pub fn same_fields(&self, other: &Self) -> bool {
        self.id == other.id
            && self.agent == other.agent
            && self.agent_id == other.agent_id
            && self.prompt == other.prompt
            && self.output_schema == other.output_schema
            && self.status == other.status
            && self.created_at == other.created_at
            && self.updated_at == other.updated_at
            && self.error_message == other.error_message
            && self.wait == other.wait
            && self.result == other.result
    }
}

impl PartialEq for TaskRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TaskRecord {}

impl Hash for TaskRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Keeps a present `null` distinct from a missing key.
fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// RFC 3339 first; offset-less timestamps are read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn unsubmitted_task_serializes_only_set_fields() {
        let task = TaskRecord::new("summarize this page").with_agent("research-bot");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"prompt": "summarize this page", "agent": "research-bot"})
        );
    }

    #[test]
    fn multi_word_fields_use_snake_case_keys() {
        let task = TaskRecord {
            agent_id: Some("agt-1".into()),
            output_schema: Some("{\"type\":\"string\"}".into()),
            created_at: Some("2025-01-01T00:00:00Z".into()),
            updated_at: Some("2025-01-01T00:01:00Z".into()),
            error_message: Some("boom".into()),
            ..TaskRecord::default()
        };
        let json = serde_json::to_value(&task).unwrap();
        let object = json.as_object().unwrap();

        for (api_name, wire_key) in FIELD_MAP {
            if api_name != wire_key {
                assert!(object.contains_key(*wire_key), "missing wire key {wire_key}");
                assert!(!object.contains_key(*api_name), "leaked api name {api_name}");
            }
        }
    }

    #[test]
    fn decodes_server_response_with_snake_case_keys() {
        let task: TaskRecord = serde_json::from_str(
            r#"{
                "id": "abc123",
                "agent_id": "agt-9",
                "status": "failed",
                "error_message": "page unreachable",
                "created_at": "2025-03-04T05:06:07Z"
            }"#,
        )
        .unwrap();

        assert_eq!(task.id.as_deref(), Some("abc123"));
        assert_eq!(task.agent_id.as_deref(), Some("agt-9"));
        assert_eq!(task.status, Some(TaskStatus::Failed));
        assert_eq!(task.error_message.as_deref(), Some("page unreachable"));
        assert!(task.result.is_none());
    }

    #[test]
    fn explicit_nulls_decode_as_absent() {
        let task: TaskRecord = serde_json::from_str(r#"{"id": null, "status": null}"#).unwrap();
        assert!(task.id.is_none());
        assert!(task.status.is_none());
        assert!(task.result.is_none());
    }

    #[test]
    fn null_result_is_kept_distinct_from_missing() {
        let task: TaskRecord = serde_json::from_str(r#"{"id": "a", "result": null}"#).unwrap();
        assert_eq!(task.result, Some(serde_json::Value::Null));

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json, serde_json::json!({"id": "a", "result": null}));
    }

    #[test]
    fn unknown_status_fails_to_decode() {
        let parsed = serde_json::from_str::<TaskRecord>(r#"{"id": "a", "status": "queued"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn equality_is_by_id_only() {
        let pending = TaskRecord {
            id: Some("abc".into()),
            status: Some(TaskStatus::Pending),
            ..TaskRecord::default()
        };
        let done = TaskRecord {
            id: Some("abc".into()),
            status: Some(TaskStatus::Completed),
            result: Some("done".into()),
            ..TaskRecord::default()
        };
        let other = TaskRecord {
            id: Some("xyz".into()),
            status: Some(TaskStatus::Pending),
            ..TaskRecord::default()
        };

        assert_eq!(pending, done);
        assert!(!pending.same_fields(&done));
        assert_ne!(pending, other);
    }

    #[test]
    fn unsubmitted_records_are_equal() {
        let a = TaskRecord::new("one");
        let b = TaskRecord::new("two");
        assert_eq!(a, b);
        assert!(!a.same_fields(&b));
    }

    #[test]
    fn hash_collides_for_same_id() {
        let mut set = HashSet::new();
        set.insert(TaskRecord {
            id: Some("abc".into()),
            status: Some(TaskStatus::Pending),
            ..TaskRecord::default()
        });
        let inserted = set.insert(TaskRecord {
            id: Some("abc".into()),
            status: Some(TaskStatus::Completed),
            ..TaskRecord::default()
        });
        assert!(!inserted);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn timestamps_parse_rfc3339() {
        let task = TaskRecord {
            created_at: Some("2025-03-04T05:06:07.250+02:00".into()),
            updated_at: Some("2025-03-04T05:06:07Z".into()),
            ..TaskRecord::default()
        };
        let created = task.created_at_time().unwrap();
        assert_eq!(created.hour(), 3);
        assert_eq!(created.timestamp_subsec_millis(), 250);

        let updated = task.updated_at_time().unwrap();
        assert_eq!((updated.year(), updated.month(), updated.day()), (2025, 3, 4));
    }

    #[test]
    fn timestamps_without_offset_are_utc() {
        let task = TaskRecord {
            created_at: Some("2025-03-04T05:06:07.123456".into()),
            ..TaskRecord::default()
        };
        let created = task.created_at_time().unwrap();
        assert_eq!(created.hour(), 5);
    }

    #[test]
    fn unparsable_timestamps_yield_none() {
        let task = TaskRecord {
            created_at: Some("yesterday".into()),
            updated_at: Some(String::new()),
            ..TaskRecord::default()
        };
        assert!(task.created_at_time().is_none());
        assert!(task.updated_at_time().is_none());
        assert!(TaskRecord::default().created_at_time().is_none());
    }

    #[test]
    fn lifecycle_helpers() {
        let draft = TaskRecord::new("p").with_wait(30);
        assert!(!draft.is_submitted());
        assert!(!draft.is_terminal());
        assert_eq!(draft.wait, Some(30));

        let finished = TaskRecord {
            id: Some("abc".into()),
            status: Some(TaskStatus::Cancelled),
            ..TaskRecord::default()
        };
        assert!(finished.is_submitted());
        assert!(finished.is_terminal());
    }
}
