use std::path::PathBuf;

use thiserror::Error;

use crate::ir::DeclKind;

#[derive(Debug, Error)]
pub enum GenError {
    /// Config file could not be read as a `GenConfig`.
    #[error("invalid config at {path}: {message}")]
    Config { path: String, message: String },

    #[error("`{field}` is not a valid identifier or path: {value:?}")]
    InvalidIdentifier { field: &'static str, value: String },

    /// Two declarations of the same kind claimed one name.
    #[error("generated {kind} name `{name}` is emitted twice")]
    NameCollision { kind: DeclKind, name: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;
