use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use super::{Outcome, OutcomeError, OutcomeRequest, OutcomeSource};

type Job = (OutcomeRequest, oneshot::Sender<Result<Outcome, OutcomeError>>);

/// Runs an inner outcome source on its own task.
///
/// Requests are queued over a channel and evaluated one at a time by the
/// worker task. Every request carries its own reply channel, so a caller
/// always receives the outcome for the case it sent.
pub struct WorkerOutcomeSource {
    tx: mpsc::Sender<Job>,
    handle: JoinHandle<()>,
}

impl WorkerOutcomeSource {
    /// Spawns the worker task. Must be called from within a Tokio runtime.
    pub fn spawn<S>(inner: S, capacity: usize) -> Self
    where
        S: OutcomeSource + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<Job>(capacity.max(1));

        let handle = tokio::spawn(async move {
            while let Some((request, reply)) = rx.recv().await {
                let case_id = request.case_id.clone();
                let result = inner.evaluate(request).await;
                if reply.send(result).is_err() {
                    debug!(%case_id, "outcome receiver dropped before delivery");
                }
            }
            debug!("outcome worker stopped");
        });

        Self { tx, handle }
    }

    /// Closes the request channel and waits for queued work to drain.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.handle.await;
    }

    /// Stops the worker immediately, dropping queued requests.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

#[async_trait]
impl OutcomeSource for WorkerOutcomeSource {
    async fn evaluate(&self, request: OutcomeRequest) -> Result<Outcome, OutcomeError> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((request, reply_tx))
            .await
            .map_err(|_| OutcomeError::ChannelClosed)?;

        reply_rx.await.map_err(|_| OutcomeError::ChannelClosed)?
    }
}
