//! Generator configuration.
//!
//! Layers, lowest to highest: [`GenConfig::default`], a JSON file, CLI flags.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::ir::Target;

// ------------------------------- Policy ---------------------------------- //

/// Exclusive arity bound: arities `1..DEFAULT_MAX_ARGS` are generated.
pub const DEFAULT_MAX_ARGS: usize = 10;
pub const DEFAULT_RUNTIME_PATH: &str = "crate";

static RUST_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").expect("valid regex")
});

static C_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

// ------------------------------- Config ---------------------------------- //

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Exclusive upper bound on arity. Values ≤ 1 produce no declarations.
    pub max_args: usize,
    pub target: Target,
    /// Rust path that resolves `Runnable`, `Status` and `ResultSlot`.
    pub runtime_path: String,
    /// C++ include guard; ignored by the Rust dialect.
    pub include_guard: Option<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            max_args: DEFAULT_MAX_ARGS,
            target: Target::default(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            include_guard: None,
        }
    }
}

/// Values that override a loaded config; `None` keeps what is there.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_args: Option<usize>,
    pub target: Option<Target>,
    pub runtime_path: Option<String>,
    pub include_guard: Option<String>,
}

impl GenConfig {
    /// Parse JSON, reporting the JSON path of the first bad value.
    pub fn from_json_str(src: &str) -> Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(src);
        let config: Self = serde_path_to_error::deserialize(de).map_err(|err| GenError::Config {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&src)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(max_args) = overrides.max_args {
            self.max_args = max_args;
        }
        if let Some(target) = overrides.target {
            self.target = target;
        }
        if let Some(runtime_path) = overrides.runtime_path {
            self.runtime_path = runtime_path;
        }
        if let Some(guard) = overrides.include_guard {
            self.include_guard = Some(guard);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !RUST_PATH.is_match(&self.runtime_path) {
            return Err(GenError::InvalidIdentifier {
                field: "runtime_path",
                value: self.runtime_path.clone(),
            });
        }
        if let Some(guard) = &self.include_guard {
            if !C_IDENT.is_match(guard) {
                return Err(GenError::InvalidIdentifier {
                    field: "include_guard",
                    value: guard.clone(),
                });
            }
        }
        Ok(())
    }
}

// ------------------------------- Tests ------------------------------------ //
