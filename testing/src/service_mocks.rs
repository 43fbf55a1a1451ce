//! Scripted mock for the remote todo service
//!
//! [`MockTodoService`] serves pre-scripted responses and records every call,
//! giving deterministic tests for both the reducer (which operations hit the
//! network) and full store round trips.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Test utilities document panics where critical

use std::collections::VecDeque;
use std::sync::Mutex;
use todo_sync_core::{NewTodo, ServiceError, ServiceFuture, Todo, TodoId, TodoService};

/// A recorded call to the mock service
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceCall {
    /// `list_todos` was invoked
    List,
    /// `create_todo` was invoked with this title
    Create {
        /// Title of the submitted record
        title: String,
    },
    /// `set_completed` was invoked
    SetCompleted {
        /// Target record
        id: TodoId,
        /// Requested flag value
        completed: bool,
    },
    /// `delete_todo` was invoked
    Delete {
        /// Target record
        id: TodoId,
    },
}

/// Scripted, call-recording implementation of [`TodoService`]
///
/// Responses are queued per operation and consumed in order. An operation
/// with no queued response fails with [`ServiceError::RequestFailed`], which
/// keeps "the network must not be touched" tests honest: any unexpected call
/// both shows up in [`MockTodoService::calls`] and produces a failure action.
///
/// # Example
///
/// ```
/// use todo_sync_testing::MockTodoService;
/// use todo_sync_core::{Todo, TodoId, TodoService};
///
/// # async fn example() {
/// let mock = MockTodoService::new().with_list(Ok(vec![Todo {
///     id: TodoId::new("1"),
///     title: "A".to_string(),
///     completed: false,
/// }]));
///
/// let todos = mock.list_todos().await.unwrap();
/// assert_eq!(todos.len(), 1);
/// assert_eq!(mock.call_count(), 1);
/// # }
/// ```
#[derive(Default)]
pub struct MockTodoService {
    list_results: Mutex<VecDeque<Result<Vec<Todo>, ServiceError>>>,
    create_results: Mutex<VecDeque<Result<Todo, ServiceError>>>,
    update_results: Mutex<VecDeque<Result<Todo, ServiceError>>>,
    delete_results: Mutex<VecDeque<Result<(), ServiceError>>>,
    calls: Mutex<Vec<ServiceCall>>,
}

impl MockTodoService {
    /// Create a mock with no scripted responses
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next `list_todos` call
    #[must_use]
    pub fn with_list(self, result: Result<Vec<Todo>, ServiceError>) -> Self {
        self.list_results.lock().unwrap().push_back(result);
        self
    }

    /// Queue a response for the next `create_todo` call
    #[must_use]
    pub fn with_create(self, result: Result<Todo, ServiceError>) -> Self {
        self.create_results.lock().unwrap().push_back(result);
        self
    }

    /// Queue a response for the next `set_completed` call
    #[must_use]
    pub fn with_update(self, result: Result<Todo, ServiceError>) -> Self {
        self.update_results.lock().unwrap().push_back(result);
        self
    }

    /// Queue a response for the next `delete_todo` call
    #[must_use]
    pub fn with_delete(self, result: Result<(), ServiceError>) -> Self {
        self.delete_results.lock().unwrap().push_back(result);
        self
    }

    /// All calls recorded so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls recorded so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: ServiceCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn unscripted(operation: &str) -> ServiceError {
        ServiceError::RequestFailed(format!("no scripted response for {operation}"))
    }
}

impl TodoService for MockTodoService {
    fn list_todos(&self) -> ServiceFuture<'_, Vec<Todo>> {
        self.record(ServiceCall::List);
        let result = self
            .list_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("list_todos")));
        Box::pin(async move { result })
    }

    fn create_todo(&self, new_todo: NewTodo) -> ServiceFuture<'_, Todo> {
        self.record(ServiceCall::Create {
            title: new_todo.title,
        });
        let result = self
            .create_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("create_todo")));
        Box::pin(async move { result })
    }

    fn set_completed(&self, id: TodoId, completed: bool) -> ServiceFuture<'_, Todo> {
        self.record(ServiceCall::SetCompleted { id, completed });
        let result = self
            .update_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("set_completed")));
        Box::pin(async move { result })
    }

    fn delete_todo(&self, id: TodoId) -> ServiceFuture<'_, ()> {
        self.record(ServiceCall::Delete { id });
        let result = self
            .delete_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("delete_todo")));
        Box::pin(async move { result })
    }
}
