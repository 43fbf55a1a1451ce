//! The core trait for business logic.
//!
//! Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
//! They contain all state-transition logic and are deterministic and testable;
//! anything asynchronous is returned as an [`Effect`] description.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait - core abstraction for business logic
///
/// # Example
///
/// ```ignore
/// impl Reducer for TodosReducer {
///     type State = TodosState;
///     type Action = TodoAction;
///     type Environment = TodosEnvironment;
///
///     fn reduce(
///         &self,
///         state: &mut TodosState,
///         action: TodoAction,
///         env: &TodosEnvironment,
///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
///         match action {
///             TodoAction::FetchRequested => {
///                 state.loading = true;
///                 // return a network effect
///                 SmallVec::new()
///             }
///             _ => SmallVec::new(),
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects
    ///
    /// This is a pure function that:
    /// 1. Validates the action
    /// 2. Updates state in place
    /// 3. Returns effect descriptions to be executed by the runtime
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
