//! Runner domain model
//!
//! Represents a remote compute-task worker registered with the Dotscience hub.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A runner as listed by the admin API
///
/// Only the identifiers are interpreted; every other field the hub returns is
/// kept in `extra` so it survives a decode/encode cycle unchanged. Missing or
/// null identifiers decode as empty strings; such a runner still lists but
/// cannot be stopped or deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    /// Account that owns the runner
    #[serde(rename = "AccountID", default, deserialize_with = "null_as_empty")]
    pub account_id: String,

    /// Identifier of the runner within its account
    #[serde(rename = "ID", default, deserialize_with = "null_as_empty")]
    pub id: String,

    /// Fields not interpreted by this crate
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Runner {
    /// Create a runner reference from its identifiers
    ///
    /// Enough to address stop/delete endpoints without listing first.
    pub fn new(account_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            id: id.into(),
            extra: Map::new(),
        }
    }

    /// Whether both identifiers needed for per-runner endpoints are present
    pub fn is_addressable(&self) -> bool {
        !self.account_id.is_empty() && !self.id.is_empty()
    }

    /// Look up a field the hub returned beyond the identifiers
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl std::fmt::Display for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.account_id, self.id)
    }
}
