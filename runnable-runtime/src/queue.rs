//! Single-worker task queue: the consumer side of the wrapper contract.
//!
//! Each dispatched task is moved to the worker thread and run exactly once.
//! Its [`Status`] comes back through a [`ResultHandle`], which doubles as the
//! completion signal callers synchronize on before reading results.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use crate::error::RuntimeError;
use crate::slot::{result_slot, ResultHandle, ResultSlot};
use crate::status::Status;
use crate::Runnable;

pub type Task = Box<dyn Runnable + Send>;

type Envelope = (Task, ResultSlot<Status>);

pub struct TaskQueue {
    name: String,
    tx: Option<Sender<Envelope>>,
    worker: Option<JoinHandle<()>>,
}

impl TaskQueue {
    pub fn spawn(name: impl Into<String>) -> Result<Self, RuntimeError> {
        let name = name.into();
        let (tx, rx) = mpsc::channel::<Envelope>();
        let worker_name = name.clone();
        let worker = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                for (task, done) in rx {
                    let status = task.run();
                    if status.is_ok() {
                        tracing::trace!(queue = %worker_name, "task finished");
                    } else {
                        tracing::warn!(queue = %worker_name, ?status, "task failed");
                    }
                    done.put(status);
                }
                tracing::debug!(queue = %worker_name, "worker exiting");
            })
            .map_err(RuntimeError::Spawn)?;
        Ok(Self { name, tx: Some(tx), worker: Some(worker) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hand `task` to the worker. The handle yields its status once it ran.
    pub fn dispatch(&self, task: Task) -> Result<ResultHandle<Status>, RuntimeError> {
        let tx = self.tx.as_ref().ok_or(RuntimeError::Closed)?;
        let (done, handle) = result_slot();
        tx.send((task, done)).map_err(|_| RuntimeError::Closed)?;
        Ok(handle)
    }

    /// Drain queued tasks and join the worker.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        drop(self.tx.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!(queue = %self.name, "worker thread panicked");
            }
        }
    }
}

impl Drop for TaskQueue {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("name", &self.name)
            .field("open", &self.tx.is_some())
            .finish()
    }
}
