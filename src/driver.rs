//! Two-pass arity loop: every wrapper type first, then every factory.
//!
//! Factories name the types, so emitting all types up front keeps the output
//! free of forward references whatever the dialect's declaration-order rules.

use indexmap::IndexMap;

use crate::codegen::{backend_for, Backend};
use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::ir::{DeclKind, Descriptor, Key, ReturnMode, Target};
use crate::lower::lower;

/// One emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub key: Key,
    pub name: String,
    pub text: String,
}

/// Result of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub config: GenConfig,
    descriptors: Vec<Descriptor>,
    declarations: Vec<Declaration>,
    prelude: String,
    separator: String,
    epilogue: String,
}

/// Keys in emission order: ascending arity, plain before capturing.
pub fn keys(max_args: usize) -> impl Iterator<Item = Key> {
    (1..max_args).flat_map(|arity| ReturnMode::ALL.into_iter().map(move |mode| Key::new(arity, mode)))
}

pub fn generate(config: &GenConfig) -> Result<Generated> {
    config.validate()?;
    let backend = backend_for(config);
    debug_assert_eq!(backend.target(), config.target);
    let descriptors: Vec<Descriptor> = keys(config.max_args).map(|key| lower(key, config.target)).collect();

    let mut names: IndexMap<(DeclKind, String), Key> = IndexMap::new();
    let mut declarations = Vec::with_capacity(descriptors.len() * 2);

    for kind in [DeclKind::Type, DeclKind::Factory] {
        for d in &descriptors {
            let decl = emit(backend.as_ref(), kind, d);
            if names.insert((kind, decl.name.clone()), d.key).is_some() {
                return Err(GenError::NameCollision { kind, name: decl.name });
            }
            tracing::debug!(%kind, name = %decl.name, arity = d.key.arity, mode = %d.key.mode, "emitted");
            declarations.push(decl);
        }
    }

    let mut prelude = backend.buffer();
    backend.prelude(&mut prelude);
    let mut separator = backend.buffer();
    backend.pass_separator(&mut separator);
    let mut epilogue = backend.buffer();
    backend.epilogue(&mut epilogue);

    tracing::info!(
        target_dialect = %config.target,
        max_args = config.max_args,
        declarations = declarations.len(),
        "generation finished"
    );

    Ok(Generated {
        config: config.clone(),
        descriptors,
        declarations,
        prelude: prelude.into_string(),
        separator: separator.into_string(),
        epilogue: epilogue.into_string(),
    })
}

fn emit(backend: &dyn Backend, kind: DeclKind, d: &Descriptor) -> Declaration {
    let mut cg = backend.buffer();
    let name = match kind {
        DeclKind::Type => {
            backend.emit_type(&mut cg, d);
            d.type_name.clone()
        }
        DeclKind::Factory => {
            backend.emit_factory(&mut cg, d);
            d.factory_name.clone()
        }
    };
    Declaration { kind, key: d.key, name, text: cg.into_string() }
}

impl Generated {
    pub fn target(&self) -> Target {
        self.config.target
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Flat ordered sequence: all types, then all factories.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn of_kind(&self, kind: DeclKind) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(move |d| d.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Full output text. Empty when nothing was generated.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut out = self.prelude.clone();
        for d in self.of_kind(DeclKind::Type) {
            out.push_str(&d.text);
        }
        out.push_str(&self.separator);
        for d in self.of_kind(DeclKind::Factory) {
            out.push_str(&d.text);
        }
        out.push_str(&self.epilogue);
        out
    }
}

// ------------------------------- Tests ------------------------------------ //
