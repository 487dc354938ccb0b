//! Generated identifiers as pure functions of (arity, return-mode, target).
//!
//! Nothing here consults state: the type emitter and the factory emitter agree
//! on names because they call the same functions with the same key.

use heck::{ToSnakeCase, ToUpperCamelCase};

use crate::ir::{Key, Param, ReturnMode, Target};

// ------------------------------- Stems ----------------------------------- //

const TYPE_STEM: &str = "runnable args";
const CPP_FACTORY_STEM: &str = "wrap runnable";
const RET_SUFFIX: &str = "ret";

// ------------------------------- Names ----------------------------------- //

fn stem_with(stem: &str, key: Key) -> String {
    match key.mode {
        ReturnMode::Void => format!("{stem} {}", key.arity),
        ReturnMode::Returning => format!("{stem} {} {RET_SUFFIX}", key.arity),
    }
}

/// `RunnableArgs2`, `RunnableArgs2Ret` (rust); `runnable_args2`, `runnable_args2_ret` (cpp).
pub fn type_name(key: Key, target: Target) -> String {
    let raw = stem_with(TYPE_STEM, key);
    match target {
        Target::Rust => raw.to_upper_camel_case(),
        Target::Cpp => glue_digits(&raw.to_snake_case()),
    }
}

/// `runnable_args2`, `runnable_args2_ret` (rust); `WrapRunnable2`, `WrapRunnable2Ret` (cpp).
pub fn factory_name(key: Key, target: Target) -> String {
    match target {
        Target::Rust => glue_digits(&stem_with(TYPE_STEM, key).to_snake_case()),
        Target::Cpp => stem_with(CPP_FACTORY_STEM, key).to_upper_camel_case(),
    }
}

/// Generic parameter name for a role: `C`, `M`, `A{i}`, `R`.
pub fn generic_name(param: Param) -> String {
    match param {
        Param::Object => "C".to_string(),
        Param::Method => "M".to_string(),
        Param::Slot(i) => format!("A{i}"),
        Param::Result => "R".to_string(),
    }
}

/// Field (and constructor parameter) name for a role.
///
/// C++ members carry the trailing underscore of the original header; Rust
/// fields are bare so struct literals can use shorthand.
pub fn field_name(param: Param, target: Target) -> String {
    let base = match (param, target) {
        (Param::Object, _) => "o".to_string(),
        (Param::Method, _) => "m".to_string(),
        (Param::Slot(i), _) => format!("a{i}"),
        (Param::Result, Target::Rust) => "out".to_string(),
        (Param::Result, Target::Cpp) => "r".to_string(),
    };
    match target {
        Target::Rust => base,
        Target::Cpp => format!("{base}_"),
    }
}

/// Constructor parameter name. Differs from the field name only in C++.
pub fn param_name(param: Param, target: Target) -> String {
    let field = field_name(param, target);
    match target {
        Target::Rust => field,
        Target::Cpp => field.trim_end_matches('_').to_string(),
    }
}

// heck splits letters from digits (`runnable_args_2`); the original names glue them.
fn glue_digits(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut chars = snake.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' && chars.peek().is_some_and(|n| n.is_ascii_digit()) {
            continue;
        }
        out.push(c);
    }
    out
}

// ------------------------------- Tests ------------------------------------ //
