//! Abstraction over the remote todo service.
//!
//! All network access goes through the [`TodoService`] trait so the reducer
//! and its tests never depend on a concrete HTTP client. The production
//! implementation lives in the `todo-sync-client` crate; tests use the
//! scripted mock from `todo-sync-testing`.

use crate::types::{NewTodo, Todo, TodoId};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by [`TodoService`] operations
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// Errors that can occur when talking to the remote todo service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// HTTP request failed before a response arrived
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be parsed
    #[error("response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The requested record does not exist on the server
    #[error("resource not found")]
    NotFound,

    /// Server returned a non-success status
    #[error("server error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },
}

/// Client interface to the remote todo service
///
/// Implementations must be `Send + Sync` so they can be shared across the
/// effect tasks spawned by the runtime.
///
/// # Dyn Compatibility
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of
/// `async fn` to enable trait object usage (`Arc<dyn TodoService>`). This is
/// required for the effect system where reducers create effects that capture
/// the service.
pub trait TodoService: Send + Sync {
    /// Fetch the current todo collection.
    ///
    /// Maps to `GET /todos?_limit={limit}` on the REST fixture. Returns
    /// records in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] for network failures, non-success statuses,
    /// or unparseable responses.
    fn list_todos(&self) -> ServiceFuture<'_, Vec<Todo>>;

    /// Create a new todo record.
    ///
    /// Maps to `POST /todos`. The server assigns the id; the returned record
    /// is the one to insert into local state.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] for network failures, non-success statuses,
    /// or unparseable responses.
    fn create_todo(&self, new_todo: NewTodo) -> ServiceFuture<'_, Todo>;

    /// Update the completed flag of an existing record.
    ///
    /// Maps to `PATCH /todos/{id}` with body `{"completed": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] for network failures, non-success statuses,
    /// or unparseable responses. A missing record surfaces as
    /// [`ServiceError::NotFound`].
    fn set_completed(&self, id: TodoId, completed: bool) -> ServiceFuture<'_, Todo>;

    /// Delete a record.
    ///
    /// Maps to `DELETE /todos/{id}`. Only the status matters; the body is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] for network failures or non-success statuses.
    fn delete_todo(&self, id: TodoId) -> ServiceFuture<'_, ()>;
}
