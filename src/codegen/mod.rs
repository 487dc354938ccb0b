//! Text emission.
//!
//! A [`Backend`] renders one [`Descriptor`] at a time into a [`Codegen`]
//! buffer. The type emitter and the factory emitter are the two required
//! methods; both read the same descriptor, so the factory always names the
//! type (and the generic list) the type emitter produced.

pub mod cpp;
pub mod rust;

use crate::config::GenConfig;
use crate::ir::{Descriptor, Target};

// ————————————————————————————————————————————————————————————————————————————
// BUFFER
// ————————————————————————————————————————————————————————————————————————————

/// Line-oriented string builder with an indentation level.
#[derive(Debug, Default)]
pub struct Codegen {
    out: String,
    indent: usize,
    unit: &'static str,
}

impl Codegen {
    pub fn new(unit: &'static str) -> Self {
        Self { out: String::new(), indent: 0, unit }
    }

    /// Write one line at the current indentation. Empty input yields a bare newline.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.out.push_str(self.unit);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Run `body` one level deeper.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent += 1;
        body(self);
        self.indent -= 1;
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

// ————————————————————————————————————————————————————————————————————————————
// BACKENDS
// ————————————————————————————————————————————————————————————————————————————

pub trait Backend {
    fn target(&self) -> Target;

    /// Fresh buffer configured for this dialect.
    fn buffer(&self) -> Codegen;

    /// Text placed before the first declaration.
    fn prelude(&self, _cg: &mut Codegen) {}

    /// Wrapper-type emitter: fields, constructor, run operation.
    fn emit_type(&self, cg: &mut Codegen, d: &Descriptor);

    /// Factory emitter: infers every generic and returns a new wrapper.
    fn emit_factory(&self, cg: &mut Codegen, d: &Descriptor);

    /// Text between the type pass and the factory pass.
    fn pass_separator(&self, _cg: &mut Codegen) {}

    /// Text placed after the last declaration.
    fn epilogue(&self, _cg: &mut Codegen) {}
}

pub fn backend_for(config: &GenConfig) -> Box<dyn Backend> {
    match config.target {
        Target::Rust => Box::new(rust::RustBackend::new(&config.runtime_path)),
        Target::Cpp => Box::new(cpp::CppBackend::new(config.include_guard.clone())),
    }
}

/// Comma-joined list, the shape every argument and parameter list takes.
pub(crate) fn comma<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub const GENERATED_BANNER: &str =
    "@generated by runnable-gen. Do not edit by hand; rerun the generator instead.";

// ------------------------------- Tests ------------------------------------ //
