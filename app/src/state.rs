//! State and actions for the todo list.
//!
//! [`TodosState`] is the single source of truth the presentation layer
//! renders from: the list (in server response order), a loading flag, and
//! the last error message. [`TodoAction`] covers both the commands issued by
//! the presentation layer and the network responses fed back by effects.

use serde::{Deserialize, Serialize};
use todo_sync_core::{Todo, TodoId};

/// Error shown when fetch-all fails
pub const FETCH_ERROR: &str = "Server Error!";

/// Error shown when create fails
pub const ADD_ERROR: &str = "Can't add task. Server error.";

/// Error shown when toggle fails on the server
pub const TOGGLE_ERROR: &str = "Can't toggle status. Server error.";

/// Error shown when toggle targets an id that is not in the list
pub const TOGGLE_NOT_FOUND_ERROR: &str = "Can't toggle status. Task not found.";

/// Error shown when delete fails
pub const DELETE_ERROR: &str = "Can't delete task. Server error.";

/// State of the todo list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosState {
    /// Todo records in server response order
    pub list: Vec<Todo>,
    /// True while a fetch-all is outstanding
    pub loading: bool,
    /// Last failure message, if any
    pub error: Option<String>,
}

impl TodosState {
    /// Creates a new empty state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true when the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.list.iter().find(|todo| &todo.id == id)
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.list.iter().filter(|todo| todo.completed).count()
    }
}

/// Actions driving the todo list
///
/// `*Requested` variants are commands dispatched by the presentation layer;
/// the remaining variants are the network responses produced by effects.
/// Records only enter the list through success responses, so the list never
/// holds partially-constructed records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Command: replace the list with the server collection
    FetchRequested,
    /// Response: fetch-all returned this collection
    FetchSucceeded {
        /// Collection in server order
        todos: Vec<Todo>,
    },
    /// Response: fetch-all failed
    FetchFailed {
        /// User-visible message
        error: String,
    },

    /// Command: create a todo with this title
    AddRequested {
        /// Draft title (validated by the reducer after trimming)
        title: String,
    },
    /// Response: the server created this record
    AddSucceeded {
        /// Record with the server-assigned id
        todo: Todo,
    },
    /// Response: create failed
    AddFailed {
        /// User-visible message
        error: String,
    },

    /// Command: invert the completed flag of this record
    ToggleRequested {
        /// Target record
        id: TodoId,
    },
    /// Response: the server acknowledged the update
    ToggleSucceeded {
        /// Updated record as returned by the server
        todo: Todo,
    },
    /// Response: toggle failed
    ToggleFailed {
        /// User-visible message
        error: String,
    },

    /// Command: delete this record
    DeleteRequested {
        /// Target record
        id: TodoId,
    },
    /// Response: the server deleted the record
    DeleteSucceeded {
        /// Deleted record id
        id: TodoId,
    },
    /// Response: delete failed
    DeleteFailed {
        /// User-visible message
        error: String,
    },
}
