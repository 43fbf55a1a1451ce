//! Testing utilities for the todo-sync architecture.
//!
//! - [`ReducerTest`]: fluent Given-When-Then API for reducer tests
//! - [`assertions`]: helpers for asserting on returned effects
//! - [`MockTodoService`]: scripted, call-recording stand-in for the remote
//!   todo service

pub mod service_mocks;

pub use reducer_test::{ReducerTest, assertions};
pub use service_mocks::{MockTodoService, ServiceCall};
