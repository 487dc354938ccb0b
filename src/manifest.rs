//! JSON view of a generator run: which declarations exist and their shapes.
//!
//! Keyed by declaration name in emission order, so tools can look up a
//! factory and see the wrapper it builds without parsing generated source.

use indexmap::IndexMap;
use serde::Serialize;

use crate::driver::Generated;
use crate::ir::{DeclKind, Descriptor, Key, Target};

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub generator: &'static str,
    pub version: &'static str,
    pub target: Target,
    pub max_args: usize,
    pub declarations: IndexMap<String, Entry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub kind: DeclKind,
    #[serde(flatten)]
    pub key: Key,
    /// The wrapper type this declaration is or constructs.
    pub wrapper: String,
    pub generics: Vec<String>,
    pub fields: Vec<String>,
}

impl Manifest {
    pub fn from_generated(generated: &Generated) -> Self {
        let declarations = generated
            .declarations()
            .iter()
            .filter_map(|decl| {
                let d = generated.descriptors().iter().find(|d| d.key == decl.key)?;
                Some((decl.name.clone(), Entry::new(decl.kind, d)))
            })
            .collect();
        Self {
            generator: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            target: generated.target(),
            max_args: generated.config.max_args,
            declarations,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Entry {
    fn new(kind: DeclKind, d: &Descriptor) -> Self {
        Self {
            kind,
            key: d.key,
            wrapper: d.type_name.clone(),
            generics: d.generics.iter().map(|g| g.name.clone()).collect(),
            fields: d.fields.iter().map(|f| f.name.clone()).collect(),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
