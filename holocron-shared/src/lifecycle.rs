//! # Request lifecycle
//!
//! Every network-backed action follows the same three phases: an optional
//! start action before the call suspends, then either a success action built
//! from the transformed body or a failure action carrying a message.

use crate::request::{RequestOutcome, RequestResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use tracing::warn;

/// Receives actions for a store.
pub trait Dispatcher<A> {
    fn dispatch(&self, action: A);
}

impl<A, F> Dispatcher<A> for F
where
    F: Fn(A),
{
    fn dispatch(&self, action: A) {
        self(action);
    }
}

type Constructor<I, A> = Box<dyn FnOnce(I) -> A>;

/// The action constructors of one call site.
pub struct Lifecycle<A, T> {
    start: Option<A>,
    success: Option<Constructor<T, A>>,
    failure: Constructor<String, A>,
    fallback: String,
}

impl<A, T> Lifecycle<A, T> {
    /// A lifecycle that only reports failures.
    ///
    /// `fallback` is the failure message used when the response carries
    /// neither a 404 hint nor a status text.
    pub fn new(failure: impl FnOnce(String) -> A + 'static, fallback: impl Into<String>) -> Self {
        Self {
            start: None,
            success: None,
            failure: Box::new(failure),
            fallback: fallback.into(),
        }
    }

    /// Dispatches `action` before the call is awaited.
    #[must_use]
    pub fn starting_with(mut self, action: A) -> Self {
        self.start = Some(action);
        self
    }

    /// Dispatches `success(payload)` when the call succeeds.
    #[must_use]
    pub fn on_success(mut self, success: impl FnOnce(T) -> A + 'static) -> Self {
        self.success = Some(Box::new(success));
        self
    }
}

impl<A, T> std::fmt::Debug for Lifecycle<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("has_start", &self.start.is_some())
            .field("has_success", &self.success.is_some())
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Runs `call` through `lifecycle` and hands back the raw result.
///
/// A success body that `transform` rejects is reported through the failure
/// constructor with the fallback message.
///
/// # Errors
/// Propagates transport faults from `call` untouched; no failure action is
/// dispatched for them.
pub async fn run<A, T, D, Fut, Tr>(
    dispatcher: &D,
    call: Fut,
    lifecycle: Lifecycle<A, T>,
    transform: Tr,
) -> RequestOutcome
where
    D: Dispatcher<A> + ?Sized,
    Fut: Future<Output = RequestOutcome>,
    Tr: FnOnce(Option<Value>) -> Result<T, serde_json::Error>,
{
    let Lifecycle {
        start,
        success,
        failure,
        fallback,
    } = lifecycle;

    if let Some(action) = start {
        dispatcher.dispatch(action);
    }

    let result = call.await?;
    match &result {
        RequestResult::Success { data } => {
            if let Some(success) = success {
                match transform(data.clone()) {
                    Ok(payload) => dispatcher.dispatch(success(payload)),
                    Err(error) => {
                        warn!(%error, "response body has an unexpected shape");
                        dispatcher.dispatch(failure(fallback));
                    }
                }
            }
        }
        RequestResult::Failure(details) => {
            dispatcher.dispatch(failure(details.message(&fallback)));
        }
    }
    Ok(result)
}

/// Transform decoding the whole body into `T`.
///
/// # Errors
/// Returns an error if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(data: Option<Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(data.unwrap_or(Value::Null))
}
