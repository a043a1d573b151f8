//! The delayed-reply assistant task.

use std::time::Duration;

use brief_model::DocumentRecord;
use tokio::sync::mpsc;

use crate::responder::respond;

/// Fixed delay standing in for an external assistant call.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_secs(1);

/// Configuration for a spawned assistant worker.
#[derive(Debug, Clone)]
pub struct Assistant {
    documents: Vec<DocumentRecord>,
    delay: Duration,
}

impl Assistant {
    pub fn new(documents: Vec<DocumentRecord>) -> Self {
        Self {
            documents,
            delay: DEFAULT_REPLY_DELAY,
        }
    }

    /// Override the reply delay (tests use a few milliseconds).
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Spawn the worker task on the current tokio runtime.
    ///
    /// Queries are processed one at a time: each waits out the fixed
    /// delay, then its reply is delivered. Submitting a new query before
    /// the previous reply lands does not cancel anything; both replies
    /// arrive, in submission order.
    pub fn spawn(self) -> AssistantHandle {
        let (query_tx, mut query_rx) = mpsc::unbounded_channel::<String>();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            while let Some(query) = query_rx.recv().await {
                tokio::time::sleep(self.delay).await;
                let reply = respond(&query, &self.documents);
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
            tracing::debug!("assistant worker stopped");
        });

        AssistantHandle { query_tx, reply_rx }
    }
}

/// Handle to a spawned assistant worker.
///
/// Dropping the handle closes the query channel and stops the worker.
#[derive(Debug)]
pub struct AssistantHandle {
    query_tx: mpsc::UnboundedSender<String>,
    reply_rx: mpsc::UnboundedReceiver<String>,
}

impl AssistantHandle {
    /// Submit a query. Returns false if the worker is gone.
    pub fn ask(&self, query: impl Into<String>) -> bool {
        self.query_tx.send(query.into()).is_ok()
    }

    /// Await the next reply. `None` once the worker has stopped.
    pub async fn next_reply(&mut self) -> Option<String> {
        self.reply_rx.recv().await
    }
}
