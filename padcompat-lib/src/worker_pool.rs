//! Fixed-size task pool that drives batch detection.
//!
//! [`crate::batch::detect_all`] hands it the entries that still need a
//! verdict; each worker takes the next entry from a queue holding at most
//! one entry per worker, classifies it, and reports the outcome back in
//! completion order.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle to running classification workers and their outcomes.
///
/// A slow classification holds its worker until it returns. Dropping the
/// handle stops queueing but lets running jobs finish.
pub struct WorkerPool<R: Send + 'static> {
    result_rx: mpsc::UnboundedReceiver<R>,
    _handles: Vec<JoinHandle<()>>,
}

impl<R: Send + 'static> WorkerPool<R> {
    /// Start `n` workers (zero is treated as one) over `items`.
    ///
    /// Items are fed from a separate task, so outcomes can be read with
    /// [`recv`](Self::recv) before the last item is queued.
    pub fn start<W, F, Fut>(n: usize, items: Vec<W>, process_fn: F) -> Self
    where
        W: Send + 'static,
        F: Fn(W) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let n = n.max(1);
        let (work_tx, work_rx) = async_channel::bounded::<W>(n);
        let (result_tx, result_rx) = mpsc::unbounded_channel::<R>();
        let process_fn = Arc::new(process_fn);

        let handles: Vec<JoinHandle<()>> = (0..n)
            .map(|_| {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let process_fn = process_fn.clone();
                tokio::spawn(async move {
                    while let Ok(item) = work_rx.recv().await {
                        if result_tx.send(process_fn(item).await).is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();

        // Only workers hold senders now
        drop(result_tx);

        tokio::spawn(async move {
            for item in items {
                if work_tx.send(item).await.is_err() {
                    break;
                }
            }
        });

        Self {
            result_rx,
            _handles: handles,
        }
    }

    /// Next finished outcome, or `None` once every item is done.
    pub async fn recv(&mut self) -> Option<R> {
        self.result_rx.recv().await
    }
}

#[cfg(test)]
#[path = "tests/worker_pool_tests.rs"]
mod tests;
