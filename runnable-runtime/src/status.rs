use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Completion status reported by [`Runnable::run`](crate::Runnable::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a status says whether the deferred call completed"]
pub enum Status {
    /// The delegated call returned.
    Ok,
    /// The delegated call unwound. Any result slot it held was dropped unfilled.
    Panicked,
}

impl Status {
    /// Run `call`, converting an unwind into [`Status::Panicked`].
    pub fn guard<F: FnOnce()>(call: F) -> Status {
        match catch_unwind(AssertUnwindSafe(call)) {
            Ok(()) => Status::Ok,
            Err(payload) => {
                tracing::warn!(panic = panic_message(payload.as_ref()), "deferred call panicked");
                Status::Panicked
            }
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
