//! Store execution tests: state mutation, effect feedback, broadcast, and
//! shutdown behavior.

#![allow(clippy::unwrap_used)] // Test code can use unwrap

use std::time::Duration;
use todo_sync_core::{Effect, Reducer, SmallVec, smallvec};
use todo_sync_runtime::{EffectHandle, Store, StoreError};

#[derive(Clone, Debug, Default)]
struct CounterState {
    value: i64,
    last_reply: Option<i64>,
}

#[derive(Clone, Debug)]
enum CounterAction {
    Increment,
    AskDouble,
    Doubled { value: i64 },
    Hang,
}

#[derive(Clone)]
struct CounterEnv;

#[derive(Clone, Debug)]
struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = CounterEnv;

    fn reduce(
        &self,
        state: &mut CounterState,
        action: CounterAction,
        _env: &CounterEnv,
    ) -> SmallVec<[Effect<CounterAction>; 4]> {
        match action {
            CounterAction::Increment => {
                state.value += 1;
                SmallVec::new()
            }
            CounterAction::AskDouble => {
                let value = state.value;
                smallvec![Effect::future(async move {
                    Some(CounterAction::Doubled { value: value * 2 })
                })]
            }
            CounterAction::Doubled { value } => {
                state.last_reply = Some(value);
                SmallVec::new()
            }
            CounterAction::Hang => {
                smallvec![Effect::future(async {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    None
                })]
            }
        }
    }
}

fn new_store() -> Store<CounterState, CounterAction, CounterEnv, CounterReducer> {
    Store::new(CounterState::default(), CounterReducer, CounterEnv)
}

#[tokio::test]
async fn reducer_mutates_state_in_place() {
    let store = new_store();

    store.send(CounterAction::Increment).await.unwrap();
    store.send(CounterAction::Increment).await.unwrap();

    assert_eq!(store.state(|s| s.value).await, 2);
}

#[tokio::test]
async fn future_effect_feeds_action_back_into_store() {
    let store = new_store();

    store.send(CounterAction::Increment).await.unwrap();
    let mut handle = store.send(CounterAction::AskDouble).await.unwrap();
    handle.wait().await;

    assert_eq!(store.state(|s| s.last_reply).await, Some(2));
}

#[tokio::test]
async fn feedback_actions_are_broadcast_to_observers() {
    let store = new_store();
    let mut rx = store.subscribe_actions();

    let mut handle = store.send(CounterAction::AskDouble).await.unwrap();
    handle.wait().await;

    let action = rx.recv().await.unwrap();
    assert!(matches!(action, CounterAction::Doubled { value: 0 }));
}

#[tokio::test]
async fn wait_with_timeout_expires_for_hung_effect() {
    let store = new_store();

    let mut handle = store.send(CounterAction::Hang).await.unwrap();
    let result = handle
        .wait_with_timeout(Duration::from_millis(50))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn completed_handle_returns_immediately() {
    let mut handle = EffectHandle::completed();
    handle
        .wait_with_timeout(Duration::from_millis(50))
        .await
        .unwrap();
}

#[tokio::test]
async fn shutdown_rejects_new_actions() {
    let store = new_store();

    store.shutdown(Duration::from_secs(1)).await.unwrap();

    let result = store.send(CounterAction::Increment).await;
    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
}

#[tokio::test]
async fn shutdown_times_out_on_pending_effects() {
    let store = new_store();

    store.send(CounterAction::Hang).await.unwrap();

    let result = store.shutdown(Duration::from_millis(150)).await;
    assert!(matches!(result, Err(StoreError::ShutdownTimeout(1))));
}
