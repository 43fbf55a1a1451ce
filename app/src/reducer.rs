//! Reducer logic for the todo list.
//!
//! Commands validate against current state and return network effects;
//! response actions reconcile the server's answer into the list. Failures
//! surface as the fixed per-operation messages in `state.error` and never
//! mutate the list.

use crate::state::{
    ADD_ERROR, DELETE_ERROR, FETCH_ERROR, TOGGLE_ERROR, TOGGLE_NOT_FOUND_ERROR, TodoAction,
    TodosState,
};
use std::sync::Arc;
use todo_sync_core::{Effect, NewTodo, Reducer, SmallVec, TodoService, smallvec};

/// Environment dependencies for the todos reducer
#[derive(Clone)]
pub struct TodosEnvironment {
    /// Client for the remote todo service
    pub service: Arc<dyn TodoService>,
}

impl TodosEnvironment {
    /// Creates a new `TodosEnvironment`
    #[must_use]
    pub fn new(service: Arc<dyn TodoService>) -> Self {
        Self { service }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = TodoAction;
    type Environment = TodosEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            TodoAction::FetchRequested => {
                state.loading = true;
                state.error = None;

                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.list_todos().await {
                        Ok(todos) => TodoAction::FetchSucceeded { todos },
                        Err(error) => {
                            tracing::warn!(%error, "fetch-all failed");
                            TodoAction::FetchFailed {
                                error: FETCH_ERROR.to_string(),
                            }
                        }
                    })
                })]
            }

            TodoAction::AddRequested { title } => {
                // The form refuses to submit whitespace-only drafts; a
                // command that slips through anyway is dropped here without
                // touching state or the network.
                if title.trim().is_empty() {
                    return SmallVec::new();
                }

                state.error = None;

                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.create_todo(NewTodo::new(title)).await {
                        Ok(todo) => TodoAction::AddSucceeded { todo },
                        Err(error) => {
                            tracing::warn!(%error, "create failed");
                            TodoAction::AddFailed {
                                error: ADD_ERROR.to_string(),
                            }
                        }
                    })
                })]
            }

            TodoAction::ToggleRequested { id } => {
                state.error = None;

                // Not-found fails locally, without contacting the network.
                let Some(todo) = state.get(&id) else {
                    state.error = Some(TOGGLE_NOT_FOUND_ERROR.to_string());
                    return SmallVec::new();
                };
                let completed = !todo.completed;

                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.set_completed(id, completed).await {
                        Ok(todo) => TodoAction::ToggleSucceeded { todo },
                        Err(error) => {
                            tracing::warn!(%error, "toggle failed");
                            TodoAction::ToggleFailed {
                                error: TOGGLE_ERROR.to_string(),
                            }
                        }
                    })
                })]
            }

            TodoAction::DeleteRequested { id } => {
                // Unlike the other commands, delete leaves any previous
                // error message in place.
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.delete_todo(id.clone()).await {
                        Ok(()) => TodoAction::DeleteSucceeded { id },
                        Err(error) => {
                            tracing::warn!(%error, "delete failed");
                            TodoAction::DeleteFailed {
                                error: DELETE_ERROR.to_string(),
                            }
                        }
                    })
                })]
            }

            // ========== Responses ==========
            TodoAction::FetchSucceeded { todos } => {
                state.list = todos;
                state.loading = false;
                SmallVec::new()
            }

            TodoAction::FetchFailed { error } => {
                state.error = Some(error);
                state.loading = false;
                SmallVec::new()
            }

            TodoAction::AddSucceeded { todo } => {
                state.list.push(todo);
                SmallVec::new()
            }

            TodoAction::ToggleSucceeded { todo } => {
                if let Some(existing) = state.list.iter_mut().find(|t| t.id == todo.id) {
                    existing.completed = !existing.completed;
                }
                SmallVec::new()
            }

            TodoAction::DeleteSucceeded { id } => {
                state.list.retain(|todo| todo.id != id);
                SmallVec::new()
            }

            TodoAction::AddFailed { error }
            | TodoAction::ToggleFailed { error }
            | TodoAction::DeleteFailed { error } => {
                state.error = Some(error);
                SmallVec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_sync_core::{Todo, TodoId};
    use todo_sync_testing::{MockTodoService, ReducerTest, assertions};

    fn test_env() -> TodosEnvironment {
        TodosEnvironment::new(Arc::new(MockTodoService::new()))
    }

    fn todo(id: &str, title: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            title: title.to_string(),
            completed,
        }
    }

    fn state_with(list: Vec<Todo>) -> TodosState {
        TodosState {
            list,
            loading: false,
            error: None,
        }
    }

    #[test]
    fn fetch_requested_sets_loading_and_spawns_request() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(TodosState {
                error: Some("stale".to_string()),
                ..TodosState::new()
            })
            .when_action(TodoAction::FetchRequested)
            .then_state(|state| {
                assert!(state.loading);
                assert_eq!(state.error, None);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn fetch_succeeded_replaces_entire_list() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(TodosState {
                list: vec![todo("9", "Old", true)],
                loading: true,
                error: None,
            })
            .when_action(TodoAction::FetchSucceeded {
                todos: vec![todo("1", "A", false), todo("2", "B", true)],
            })
            .then_state(|state| {
                assert_eq!(state.list, vec![todo("1", "A", false), todo("2", "B", true)]);
                assert!(!state.loading);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn fetch_failed_sets_error_and_clears_loading() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(TodosState {
                loading: true,
                ..TodosState::new()
            })
            .when_action(TodoAction::FetchFailed {
                error: FETCH_ERROR.to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.error.as_deref(), Some(FETCH_ERROR));
                assert!(!state.loading);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_requested_with_whitespace_title_is_dropped() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(TodosState::new())
            .when_action(TodoAction::AddRequested {
                title: "   ".to_string(),
            })
            .then_state(|state| {
                assert!(state.is_empty());
                assert_eq!(state.error, None);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_requested_clears_stale_error_and_spawns_request() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(TodosState {
                error: Some("stale".to_string()),
                ..TodosState::new()
            })
            .when_action(TodoAction::AddRequested {
                title: "Buy milk".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.error, None);
                assert!(state.is_empty());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn add_succeeded_appends_server_record() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false)]))
            .when_action(TodoAction::AddSucceeded {
                todo: todo("201", "Buy milk", false),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 2);
                assert_eq!(state.list[1], todo("201", "Buy milk", false));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_failed_sets_error_and_keeps_list() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false)]))
            .when_action(TodoAction::AddFailed {
                error: ADD_ERROR.to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert_eq!(state.error.as_deref(), Some(ADD_ERROR));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_requested_unknown_id_errors_without_network() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false)]))
            .when_action(TodoAction::ToggleRequested {
                id: TodoId::new("99"),
            })
            .then_state(|state| {
                assert_eq!(state.error.as_deref(), Some(TOGGLE_NOT_FOUND_ERROR));
                assert_eq!(state.list, vec![todo("1", "A", false)]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_requested_known_id_spawns_request() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false)]))
            .when_action(TodoAction::ToggleRequested {
                id: TodoId::new("1"),
            })
            .then_state(|state| {
                // The flag flips only on the success response.
                assert!(!state.list[0].completed);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn toggle_succeeded_flips_only_the_matching_record() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false), todo("2", "B", false)]))
            .when_action(TodoAction::ToggleSucceeded {
                todo: todo("1", "A", true),
            })
            .then_state(|state| {
                assert!(state.list[0].completed);
                assert!(!state.list[1].completed);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_failed_sets_error_and_keeps_list() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false)]))
            .when_action(TodoAction::ToggleFailed {
                error: TOGGLE_ERROR.to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.list, vec![todo("1", "A", false)]);
                assert_eq!(state.error.as_deref(), Some(TOGGLE_ERROR));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn delete_requested_leaves_stale_error_in_place() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(TodosState {
                list: vec![todo("1", "A", false)],
                loading: false,
                error: Some("stale".to_string()),
            })
            .when_action(TodoAction::DeleteRequested {
                id: TodoId::new("1"),
            })
            .then_state(|state| {
                assert_eq!(state.error.as_deref(), Some("stale"));
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn delete_succeeded_removes_only_the_matching_record() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false), todo("2", "B", true)]))
            .when_action(TodoAction::DeleteSucceeded {
                id: TodoId::new("1"),
            })
            .then_state(|state| {
                assert_eq!(state.list, vec![todo("2", "B", true)]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn delete_failed_sets_error_and_keeps_list() {
        ReducerTest::new(TodosReducer::new())
            .with_env(test_env())
            .given_state(state_with(vec![todo("1", "A", false)]))
            .when_action(TodoAction::DeleteFailed {
                error: DELETE_ERROR.to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert_eq!(state.error.as_deref(), Some(DELETE_ERROR));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
