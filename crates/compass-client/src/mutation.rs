use std::future::Future;
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::cache::{QueryCache, QueryKey};
use crate::error::ClientError;
use crate::notify::{Notification, Notifier};

/// Lifecycle of a single mutation hook.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationState<T> {
    Idle,
    Pending,
    Success(T),
    Error(String),
}

impl<T> MutationState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }
}

/// Shared machinery behind every mutation hook: track state, invalidate
/// dependent queries on success, notify on failure.
///
/// There is no retry and no optimistic update. Overlapping calls on one
/// instance are not guarded against; the last to finish wins the state.
pub struct Mutation<T> {
    state: Mutex<MutationState<T>>,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
    invalidates: Vec<QueryKey>,
    failure_message: String,
    success_message: Option<String>,
}

impl<T: Clone> Mutation<T> {
    pub fn new(
        cache: Arc<QueryCache>,
        notifier: Arc<dyn Notifier>,
        invalidates: Vec<QueryKey>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            state: Mutex::new(MutationState::Idle),
            cache,
            notifier,
            invalidates,
            failure_message: failure_message.into(),
            success_message: None,
        }
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn state(&self) -> MutationState<T> {
        self.lock().clone()
    }

    pub fn reset(&self) {
        *self.lock() = MutationState::Idle;
    }

    /// Drive one outbound call through the lifecycle.
    pub async fn run<Fut>(&self, call: Fut) -> Result<T, ClientError>
    where
        Fut: Future<Output = Result<T, ClientError>>,
    {
        *self.lock() = MutationState::Pending;

        match call.await {
            Ok(value) => {
                for key in &self.invalidates {
                    self.cache.invalidate(key);
                }
                if let Some(message) = &self.success_message {
                    self.notifier.notify(Notification::success(message.clone()));
                }
                *self.lock() = MutationState::Success(value.clone());
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "{}", self.failure_message);
                self.notifier
                    .notify(Notification::error(self.failure_message.clone()));
                *self.lock() = MutationState::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Record a locally rejected input. No call is made and nothing is
    /// notified; the caller renders the field errors inline.
    pub fn reject(&self, error: ClientError) -> ClientError {
        *self.lock() = MutationState::Error(error.to_string());
        error
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MutationState<T>> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
