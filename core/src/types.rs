//! Domain types shared between the state layer and the HTTP client.
//!
//! These mirror the wire format of the REST fixture. Ids are opaque and
//! server-assigned; the fixture happens to use numeric ids, so [`TodoId`]
//! deserializes from either a JSON number or a JSON string.

use serde::{Deserialize, Deserializer, Serialize};

/// User id attached to records created through this client
///
/// The fixture has no authentication; every created record belongs to a
/// single fixed user.
pub const DEFAULT_USER_ID: u64 = 1;

/// Opaque identifier for a todo record, assigned by the remote service
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a `TodoId` from its textual form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the textual form of the id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The fixture serves numeric ids; treat both forms as the same
        // opaque identifier.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// A single todo record as served by the remote service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, immutable once created
    pub id: TodoId,
    /// Title/description of the todo
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

/// Payload for creating a new record (`POST /todos`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    /// Title of the new todo
    pub title: String,
    /// Owner of the record
    pub user_id: u64,
    /// Initial completed flag
    pub completed: bool,
}

impl NewTodo {
    /// Creates the default payload for a title: not completed, owned by
    /// [`DEFAULT_USER_ID`]
    #[must_use]
    pub const fn new(title: String) -> Self {
        Self {
            title,
            user_id: DEFAULT_USER_ID,
            completed: false,
        }
    }
}

/// Payload for updating the completed flag (`PATCH /todos/{id}`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedPatch {
    /// New value of the completed flag
    pub completed: bool,
}
