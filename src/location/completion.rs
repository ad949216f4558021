use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// A value holder that can be completed once. Clones share the same slot; the first `complete` wins.
#[derive(Debug)]
pub struct Completion<T> {
    tx: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Completion { tx: self.tx.clone() }
    }
}

impl<T> Completion<T> {
    pub fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (Completion { tx: Arc::new(Mutex::new(Some(tx))) }, rx)
    }

    /// Completes with `value`. Returns `false` if this was not the first completion or if nobody is waiting anymore.
    pub fn complete(&self, value: T) -> bool {
        let tx = self.tx.lock().unwrap_or_else(PoisonError::into_inner).take();

        let Some(tx) = tx else {
            warn!("⚠️ Ignoring a second completion of a single-shot result");
            return false;
        };

        if tx.send(value).is_err() {
            debug!("Completed a single-shot result nobody is waiting for");
            return false;
        }

        true
    }

    #[cfg(test)]
    pub fn is_completed(&self) -> bool {
        self.tx.lock().unwrap_or_else(PoisonError::into_inner).is_none()
    }
}
