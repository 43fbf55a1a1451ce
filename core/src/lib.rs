//! # Todo Sync Core
//!
//! Core traits and types for the todo-sync architecture.
//!
//! This crate provides the fundamental abstractions for the todo client's
//! state layer, built on the Reducer pattern with explicit effects.
//!
//! ## Core Concepts
//!
//! - **State**: The in-memory todo list plus loading/error flags
//! - **Action**: All possible inputs to a reducer (commands and their
//!   network responses)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! The remote REST fixture is abstracted behind the [`service::TodoService`]
//! trait so reducers never touch the network directly: they return
//! [`effect::Effect::Future`] values that the runtime executes, feeding the
//! resulting response actions back into the store.

pub mod effect;
pub mod reducer;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use effect::Effect;
pub use reducer::Reducer;
pub use service::{ServiceError, ServiceFuture, TodoService};
pub use smallvec::{SmallVec, smallvec};
pub use types::{CompletedPatch, NewTodo, Todo, TodoId};
