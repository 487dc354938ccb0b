use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The result slot was dropped without a value, e.g. the call panicked.
    #[error("result slot dropped before a value was stored")]
    Abandoned,

    #[error("no result within {0:?}")]
    Timeout(Duration),

    #[error("task queue is shut down")]
    Closed,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),
}
