//! Side effect descriptions returned by reducers.
//!
//! Effects are NOT executed immediately. They are descriptions of what should
//! happen, returned from reducers and executed by the Store runtime. When an
//! effect produces an action, the runtime feeds it back into the reducer.

use std::future::Future;
use std::pin::Pin;

/// Effect type - describes a side effect to be executed
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Arbitrary async computation
    ///
    /// Returns `Option<Action>` - if `Some`, the action is fed back into the
    /// reducer. Network calls (fetch/create/toggle/delete) are expressed as
    /// this variant, with the response mapped to a success or failure action.
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
}

impl<Action> Effect<Action> {
    /// Wrap an async computation as an effect
    ///
    /// Convenience constructor that pins and boxes the future:
    ///
    /// ```ignore
    /// Effect::future(async move {
    ///     match service.list_todos().await {
    ///         Ok(todos) => Some(TodoAction::FetchSucceeded { todos }),
    ///         Err(_) => Some(TodoAction::FetchFailed { error: message }),
    ///     }
    /// })
    /// ```
    pub fn future<F>(fut: F) -> Self
    where
        F: Future<Output = Option<Action>> + Send + 'static,
    {
        Self::Future(Box::pin(fut))
    }
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn future_effect_yields_action() {
        let effect: Effect<u32> = Effect::future(async { Some(7) });
        match effect {
            Effect::Future(fut) => assert_eq!(fut.await, Some(7)),
            Effect::None => unreachable!("constructed a Future effect"),
        }
    }

    #[test]
    fn debug_formatting() {
        assert_eq!(format!("{:?}", Effect::<u32>::None), "Effect::None");
        let effect: Effect<u32> = Effect::future(async { None });
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");
    }
}
