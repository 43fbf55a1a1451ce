//! Todo list client synchronizing with a remote REST fixture.
//!
//! The state layer follows the store/reducer architecture: the presentation
//! layer dispatches [`TodoAction`] commands, the reducer validates them and
//! returns network effects, and the runtime feeds response actions back into
//! the store. The list is replaced wholesale on fetch and mutated in place
//! by create/toggle/delete responses; failures surface as a fixed
//! per-operation message without touching the list.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_sync_app::{TodoAction, TodosEnvironment, TodosReducer, TodosState};
//! use todo_sync_client::TodoClient;
//! use todo_sync_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodosEnvironment::new(Arc::new(TodoClient::from_env()));
//! let store = Store::new(TodosState::new(), TodosReducer::new(), env);
//!
//! // Hydrate the list
//! let mut handle = store.send(TodoAction::FetchRequested).await?;
//! handle.wait().await;
//!
//! let count = store.state(TodosState::len).await;
//! println!("fetched {count} todos");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use reducer::{TodosEnvironment, TodosReducer};
pub use state::{TodoAction, TodosState};
