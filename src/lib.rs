//! Generator for deferred-invocation wrappers.
//!
//! For every arity `1..max_args` and both return modes it emits a generic
//! wrapper type (callee, method, captured arguments, optional result slot)
//! with a single `run` operation, then a factory function per wrapper that
//! infers all generics from its arguments.
//!
//! ```
//! use runnable_gen::{generate, GenConfig};
//!
//! let generated = generate(&GenConfig { max_args: 3, ..GenConfig::default() }).unwrap();
//! assert_eq!(generated.declarations().len(), 8);
//! assert!(generated.render().contains("pub fn runnable_args2_ret<C, M, A0, A1, R>"));
//! ```

pub mod cli;
pub mod codegen;
pub mod config;
pub mod driver;
pub mod error;
pub mod ir;
pub mod logging;
pub mod lower;
pub mod manifest;
pub mod naming;

pub use config::GenConfig;
pub use driver::{generate, Declaration, Generated};
pub use error::GenError;
pub use ir::{DeclKind, Descriptor, Key, ReturnMode, Target};
