//! One-shot result channel between a returning wrapper and its caller.
//!
//! The wrapper owns the [`ResultSlot`] and fills it at most once; the caller
//! keeps the [`ResultHandle`] and blocks on it. The channel provides the
//! happens-before edge between the write and the read.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::time::Duration;

use crate::error::RuntimeError;

/// Create a connected slot/handle pair.
pub fn result_slot<R>() -> (ResultSlot<R>, ResultHandle<R>) {
    let (tx, rx) = mpsc::sync_channel(1);
    (ResultSlot { tx }, ResultHandle { rx })
}

/// Producer half. Dropping it unfilled abandons the result.
#[derive(Debug)]
pub struct ResultSlot<R> {
    tx: SyncSender<R>,
}

impl<R> ResultSlot<R> {
    /// Store the result. A value nobody waits for any more is dropped.
    pub fn put(self, value: R) {
        if self.tx.send(value).is_err() {
            tracing::debug!("result discarded: handle already dropped");
        }
    }
}

/// Consumer half.
#[derive(Debug)]
pub struct ResultHandle<R> {
    rx: Receiver<R>,
}

impl<R> ResultHandle<R> {
    /// Block until the result arrives or the slot is dropped unfilled.
    pub fn wait(self) -> Result<R, RuntimeError> {
        self.rx.recv().map_err(|_| RuntimeError::Abandoned)
    }

    /// Like [`wait`](Self::wait) with a deadline. Once a value has been
    /// taken, later calls report [`RuntimeError::Abandoned`].
    pub fn wait_timeout(&self, timeout: Duration) -> Result<R, RuntimeError> {
        match self.rx.recv_timeout(timeout) {
            Ok(value) => Ok(value),
            Err(RecvTimeoutError::Timeout) => Err(RuntimeError::Timeout(timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(RuntimeError::Abandoned),
        }
    }

    /// Non-blocking take.
    pub fn try_take(&self) -> Option<R> {
        self.rx.try_recv().ok()
    }
}
