//! Runtime side of the deferred-call wrappers.
//!
//! The wrapper family itself (`RunnableArgs1` .. `RunnableArgs9Ret` and their
//! factories) is produced by `runnable-gen` at build time and re-exported
//! here. This crate supplies what that code names: [`Runnable`], [`Status`]
//! and [`ResultSlot`].
//!
//! ```
//! use std::sync::Arc;
//! use runnable_runtime::{result_slot, runnable_args1_ret, runnable_args2, Runnable, Status};
//!
//! struct Adder;
//! impl Adder {
//!     fn log(&self, a: u32, b: u32) { println!("{a} + {b}"); }
//!     fn add_one(&self, x: u32) -> u32 { x + 1 }
//! }
//!
//! let adder = Arc::new(Adder);
//! assert_eq!(runnable_args2(adder.clone(), Adder::log, 1, 2).run(), Status::Ok);
//!
//! let (slot, handle) = result_slot();
//! let task = runnable_args1_ret(adder, Adder::add_one, 41, slot);
//! assert!(task.run().is_ok());
//! assert_eq!(handle.wait().unwrap(), 42);
//! ```
//!
//! `run` consumes the wrapper, so a second call does not compile:
//!
//! ```compile_fail,E0382
//! use std::sync::Arc;
//! use runnable_runtime::{runnable_args1, Runnable};
//!
//! struct Counter;
//! impl Counter { fn bump(&self, _by: u32) {} }
//!
//! let task = runnable_args1(Arc::new(Counter), Counter::bump, 1);
//! let _ = task.run();
//! let _ = task.run();
//! ```

mod call;
mod error;
mod queue;
mod slot;
mod status;

pub use call::{from_fn, wrap_runnable, wrap_runnable_ret, Bound, BoundRet, Closure, Method};
pub use error::RuntimeError;
pub use queue::{Task, TaskQueue};
pub use slot::{result_slot, ResultHandle, ResultSlot};
pub use status::Status;

/// A unit of deferred work, run at most once by its consumer.
pub trait Runnable {
    fn run(self: Box<Self>) -> Status;
}

/// Output of `runnable-gen` for arities 1 to 9.
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/runnable_args.rs"));
}

pub use generated::*;
