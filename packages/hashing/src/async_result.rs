//! Future over a blocking hash computation

use crate::{HashError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Resolves to the outcome of a hash computation running on the blocking pool
pub struct AsyncHashResult<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T: Send + 'static> AsyncHashResult<T> {
    /// Run `op` on tokio's blocking pool
    ///
    /// Password hashing is deliberately slow, so it must never run on a
    /// runtime worker thread.
    pub(crate) fn spawn_blocking<F>(op: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(op());
        });
        Self { receiver: rx }
    }

    /// Create an `AsyncHashResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<T>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncHashResult` that yields an error
    #[must_use]
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }
}

impl<T> Future for AsyncHashResult<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => {
                Poll::Ready(Err(HashError::internal("Hash computation task dropped")))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
