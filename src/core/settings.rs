use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::errors::{TaskError, TaskResult};

/// Host-supplied task configuration. Created by the host before the task
/// starts and read-only thereafter. Field names on the wire follow the
/// host's convention (`TaskId`, `ParmsJsonStr`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiderSettings {
    /// Opaque task identifier, unique per run.
    #[serde(rename = "TaskId")]
    pub task_id: String,

    /// Serialized array of `{name, value}` pairs, in host order.
    #[serde(rename = "ParmsJsonStr")]
    pub parms_json: String,
}

#[derive(Debug, Deserialize)]
struct ParamEntry {
    name: String,
    value: String,
}

/// Parameter table built once at import. Insertion-ordered so the host's
/// parameter ordering stays observable.
pub type ParamTable = IndexMap<String, String>;

/// Decodes a `ParmsJsonStr` payload. Later entries overwrite earlier ones
/// with the same name. All-or-nothing: a malformed payload never yields a
/// partial table.
pub(crate) fn parse_parms(raw: &str) -> TaskResult<ParamTable> {
    let entries: Vec<ParamEntry> =
        serde_json::from_str(raw).map_err(|e| TaskError::MalformedInput(e.to_string()))?;

    let mut table = ParamTable::with_capacity(entries.len());
    for entry in entries {
        table.insert(entry.name, entry.value);
    }
    Ok(table)
}
