//! Plan generation as a cancellable, time-bounded async task.

use std::future::Future;
use std::time::Duration;

use desk_core::entities::Configuration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::GenerationError;

/// Turns a draft configuration into the final one.
pub trait Planner: Send + Sync + 'static {
    fn plan(
        &self,
        draft: Configuration,
    ) -> impl Future<Output = Result<Configuration, GenerationError>> + Send;
}

/// Returns the draft unchanged after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelayPlanner {
    pub delay: Duration,
}

impl FixedDelayPlanner {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelayPlanner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Planner for FixedDelayPlanner {
    async fn plan(&self, draft: Configuration) -> Result<Configuration, GenerationError> {
        tokio::time::sleep(self.delay).await;
        Ok(draft)
    }
}

/// Sending half of a cancellation pair.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Receiving half of a cancellation pair.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Resolves once [`CancelHandle::cancel`] is called. Never resolves if the
    /// handle is dropped without cancelling.
    pub async fn cancelled(mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Run `planner` on `draft`, racing cancellation and `timeout`.
///
/// # Errors
///
/// [`GenerationError::Cancelled`] if the token fires first,
/// [`GenerationError::TimedOut`] if `timeout` elapses, or whatever the planner
/// itself returns.
pub async fn generate<P: Planner>(
    planner: &P,
    draft: Configuration,
    cancel: CancelToken,
    timeout: Duration,
) -> Result<Configuration, GenerationError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            tracing::debug!("generation cancelled");
            Err(GenerationError::Cancelled)
        }
        result = tokio::time::timeout(timeout, planner.plan(draft)) => {
            result.unwrap_or_else(|_| {
                tracing::debug!(timeout_ms = timeout.as_millis(), "generation timed out");
                Err(GenerationError::TimedOut { after: timeout })
            })
        }
    }
}

/// A generation running on its own tokio task.
#[derive(Debug)]
pub struct GenerationTask {
    cancel: CancelHandle,
    join: JoinHandle<Result<Configuration, GenerationError>>,
}

impl GenerationTask {
    /// Spawn [`generate`] on the current runtime.
    #[must_use]
    pub fn spawn<P: Planner>(planner: P, draft: Configuration, timeout: Duration) -> Self {
        let (cancel, token) = cancel_pair();
        let join = tokio::spawn(async move { generate(&planner, draft, token, timeout).await });
        Self { cancel, join }
    }

    #[must_use]
    pub const fn cancel_handle(&self) -> &CancelHandle {
        &self.cancel
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the task to finish.
    ///
    /// # Errors
    ///
    /// The task's [`GenerationError`], or [`GenerationError::Failed`] if the
    /// task panicked or was aborted.
    pub async fn wait(self) -> Result<Configuration, GenerationError> {
        self.join
            .await
            .unwrap_or_else(|e| Err(GenerationError::Failed(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingPlanner;

    impl Planner for FailingPlanner {
        async fn plan(&self, _draft: Configuration) -> Result<Configuration, GenerationError> {
            Err(GenerationError::Failed("no stock data".into()))
        }
    }

    #[tokio::test]
    async fn fixed_delay_planner_returns_draft() {
        let (_handle, token) = cancel_pair();
        let draft = Configuration {
            budget: 9000.0,
            ..Configuration::default()
        };
        let planner = FixedDelayPlanner::new(Duration::from_millis(1));
        let result = generate(&planner, draft, token, Duration::from_secs(5)).await;
        assert_eq!(result, Ok(draft));
    }

    #[tokio::test]
    async fn cancel_before_start_wins() {
        let (handle, token) = cancel_pair();
        handle.cancel();
        assert!(handle.is_cancelled());
        let planner = FixedDelayPlanner::new(Duration::from_secs(60));
        let result = generate(&planner, Configuration::default(), token, Duration::from_secs(120)).await;
        assert_eq!(result, Err(GenerationError::Cancelled));
    }

    #[tokio::test]
    async fn slow_planner_times_out() {
        let (_handle, token) = cancel_pair();
        let planner = FixedDelayPlanner::new(Duration::from_secs(60));
        let timeout = Duration::from_millis(10);
        let result = generate(&planner, Configuration::default(), token, timeout).await;
        assert_eq!(result, Err(GenerationError::TimedOut { after: timeout }));
    }

    #[tokio::test]
    async fn planner_failure_is_surfaced() {
        let (_handle, token) = cancel_pair();
        let result = generate(&FailingPlanner, Configuration::default(), token, Duration::from_secs(1)).await;
        assert!(matches!(result, Err(GenerationError::Failed(_))));
    }

    #[tokio::test]
    async fn dropped_handle_does_not_cancel() {
        let (handle, token) = cancel_pair();
        drop(handle);
        let planner = FixedDelayPlanner::new(Duration::from_millis(1));
        let result = generate(&planner, Configuration::default(), token, Duration::from_secs(5)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn spawned_task_can_be_cancelled() {
        let task = GenerationTask::spawn(
            FixedDelayPlanner::new(Duration::from_secs(60)),
            Configuration::default(),
            Duration::from_secs(120),
        );
        task.cancel();
        assert_eq!(task.wait().await, Err(GenerationError::Cancelled));
    }
}
