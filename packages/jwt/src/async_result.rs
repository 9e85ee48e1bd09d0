//! Future over work running on a spawned task

use crate::error::{JwtError, JwtResult};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::sync::oneshot;

/// Resolves to the result a spawned JWT task sends back
pub struct AsyncJwtResult<T> {
    receiver: oneshot::Receiver<JwtResult<T>>,
}

impl<T: Send + 'static> AsyncJwtResult<T> {
    /// Run `op` on a new tokio task
    pub(crate) fn spawn<F>(op: F) -> Self
    where
        F: FnOnce() -> JwtResult<T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(op());
        });
        Self { receiver: rx }
    }
}

impl<T> Future for AsyncJwtResult<T> {
    type Output = JwtResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(JwtError::TaskFailed)),
            Poll::Pending => Poll::Pending,
        }
    }
}
