// Strongly-typed IR for codegen. Backends render this; they never invent names.

use serde::Serialize;

/// Whether a wrapper discards or captures the delegated call's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnMode {
    Void,
    Returning,
}

impl ReturnMode {
    /// Emission order within one arity: plain first, capturing second.
    pub const ALL: [ReturnMode; 2] = [ReturnMode::Void, ReturnMode::Returning];

    pub fn is_returning(self) -> bool {
        matches!(self, ReturnMode::Returning)
    }
}

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    #[default]
    Rust,
    Cpp,
}

/// (arity, return-mode): everything a declaration is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Key {
    pub arity: usize,
    pub mode: ReturnMode,
}

impl Key {
    pub fn new(arity: usize, mode: ReturnMode) -> Self {
        Self { arity, mode }
    }
}

/// Role of one generic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", content = "index", rename_all = "snake_case")]
pub enum Param {
    Object,
    Method,
    Slot(usize),
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericParam {
    pub param: Param,
    pub name: String,
}

/// How a field's type relates to the generic parameter it is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTy {
    /// Stored as the parameter itself.
    Value,
    /// Destination for a value of the parameter type (`R*`, `ResultSlot<R>`).
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub param: Param,
    pub ty: FieldTy,
}

/// One generated wrapper type plus its factory.
///
/// Field order doubles as constructor and factory parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub key: Key,
    pub type_name: String,
    pub factory_name: String,
    pub generics: Vec<GenericParam>,
    pub fields: Vec<Field>,
}

impl Descriptor {
    pub fn arity(&self) -> usize {
        self.key.arity
    }

    pub fn is_returning(&self) -> bool {
        self.key.mode.is_returning()
    }

    pub fn generic(&self, param: Param) -> Option<&GenericParam> {
        self.generics.iter().find(|g| g.param == param)
    }

    pub fn field(&self, param: Param) -> Option<&Field> {
        self.fields.iter().find(|f| f.param == param)
    }

    /// Name of the generic parameter a field is declared with.
    ///
    /// Panics if the field's role has no generic; `lower` never builds one.
    pub fn type_of(&self, field: &Field) -> &str {
        self.generic(field.param)
            .map(|g| g.name.as_str())
            .expect("field role has a generic")
    }

    pub fn slot_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| matches!(f.param, Param::Slot(_)))
    }

    pub fn generic_names(&self) -> Vec<&str> {
        self.generics.iter().map(|g| g.name.as_str()).collect()
    }
}

/// Which emitter produced a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Type,
    Factory,
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclKind::Type => f.write_str("type"),
            DeclKind::Factory => f.write_str("factory"),
        }
    }
}

impl std::fmt::Display for ReturnMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnMode::Void => f.write_str("void"),
            ReturnMode::Returning => f.write_str("returning"),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Rust => f.write_str("rust"),
            Target::Cpp => f.write_str("cpp"),
        }
    }
}
