//! HTTP client for the remote todo REST fixture.
//!
//! [`TodoClient`] implements [`TodoService`] over the JSONPlaceholder-style
//! contract:
//!
//! - `GET /todos?_limit={limit}` → collection of records
//! - `POST /todos` → created record (server assigns the id)
//! - `PATCH /todos/{id}` → updated record
//! - `DELETE /todos/{id}` → success status only
//!
//! Any non-success status is mapped to a [`ServiceError`]; the state layer
//! converts those into its fixed per-operation messages.
//!
//! # Example
//!
//! ```no_run
//! use todo_sync_client::TodoClient;
//! use todo_sync_core::NewTodo;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TodoClient::from_env();
//! let todos = client.list().await?;
//! println!("fetched {} todos", todos.len());
//!
//! let created = client.create(NewTodo::new("Buy milk".to_string())).await?;
//! println!("created todo {}", created.id);
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use todo_sync_core::{
    CompletedPatch, NewTodo, ServiceError, ServiceFuture, Todo, TodoId, TodoService,
};

/// Production base URL of the REST fixture
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of records requested on fetch-all
pub const DEFAULT_FETCH_LIMIT: u32 = 10;

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "TODO_API_URL";

/// Environment variable overriding the fetch limit
pub const FETCH_LIMIT_ENV: &str = "TODO_FETCH_LIMIT";

/// REST client for the remote todo service
#[derive(Clone)]
pub struct TodoClient {
    client: Client,
    base_url: String,
    fetch_limit: u32,
}

impl TodoClient {
    /// Create a client against the production fixture
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base URL
    ///
    /// A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }

    /// Override the number of records requested on fetch-all
    #[must_use]
    pub const fn with_fetch_limit(mut self, fetch_limit: u32) -> Self {
        self.fetch_limit = fetch_limit;
        self
    }

    /// Create a client configured from the environment
    ///
    /// Reads `TODO_API_URL` and `TODO_FETCH_LIMIT`; unset or unparseable
    /// values fall back to the production defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let fetch_limit = match std::env::var(FETCH_LIMIT_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Ignoring unparseable {FETCH_LIMIT_ENV}");
                DEFAULT_FETCH_LIMIT
            }),
            Err(_) => DEFAULT_FETCH_LIMIT,
        };

        Self::with_base_url(base_url).with_fetch_limit(fetch_limit)
    }

    /// Fetch the current todo collection
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or
    /// unparseable responses.
    pub async fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        let response = self
            .client
            .get(format!("{}/todos", self.base_url))
            .query(&[("_limit", self.fetch_limit)])
            .send()
            .await
            .map_err(|e| ServiceError::RequestFailed(e.to_string()))?;

        Self::parse_json(response).await
    }

    /// Create a new todo record
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or
    /// unparseable responses.
    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo, ServiceError> {
        let response = self
            .client
            .post(format!("{}/todos", self.base_url))
            .json(&new_todo)
            .send()
            .await
            .map_err(|e| ServiceError::RequestFailed(e.to_string()))?;

        Self::parse_json(response).await
    }

    /// Update the completed flag of an existing record
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or
    /// unparseable responses.
    pub async fn update_completed(
        &self,
        id: &TodoId,
        completed: bool,
    ) -> Result<Todo, ServiceError> {
        let response = self
            .client
            .patch(format!("{}/todos/{id}", self.base_url))
            .json(&CompletedPatch { completed })
            .send()
            .await
            .map_err(|e| ServiceError::RequestFailed(e.to_string()))?;

        Self::parse_json(response).await
    }

    /// Delete a record
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or non-success statuses.
    pub async fn delete(&self, id: &TodoId) -> Result<(), ServiceError> {
        let response = self
            .client
            .delete(format!("{}/todos/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| ServiceError::RequestFailed(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ServiceError::Status {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ServiceError::ResponseParseFailed(e.to_string())),
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ServiceError::Status {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoService for TodoClient {
    fn list_todos(&self) -> ServiceFuture<'_, Vec<Todo>> {
        Box::pin(async move { self.list().await })
    }

    fn create_todo(&self, new_todo: NewTodo) -> ServiceFuture<'_, Todo> {
        Box::pin(async move { self.create(new_todo).await })
    }

    fn set_completed(&self, id: TodoId, completed: bool) -> ServiceFuture<'_, Todo> {
        Box::pin(async move { self.update_completed(&id, completed).await })
    }

    fn delete_todo(&self, id: TodoId) -> ServiceFuture<'_, ()> {
        Box::pin(async move { self.delete(&id).await })
    }
}
