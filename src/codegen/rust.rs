//! Rust dialect.
//!
//! Each wrapper is a plain struct with private fields, a private `new`, and a
//! `Runnable` impl whose `run` consumes the boxed wrapper. The factory is the
//! public construction path. Runtime items (`Runnable`, `Status`,
//! `ResultSlot`) are referenced through the configured runtime path.

use super::{comma, Backend, Codegen, GENERATED_BANNER};
use crate::ir::{Descriptor, Field, FieldTy, Param, Target};

/// Clippy's default `too_many_arguments` threshold.
const CLIPPY_MAX_ARGS: usize = 7;

/// Output of a plain-mode method. Bound only on the impl and factory; the
/// struct never stores it.
const DISCARDED_OUTPUT: &str = "O";

#[derive(Debug, Clone)]
pub struct RustBackend {
    runtime: String,
}

impl RustBackend {
    pub fn new(runtime_path: &str) -> Self {
        Self { runtime: runtime_path.to_string() }
    }

    fn rt(&self, item: &str) -> String {
        format!("{}::{item}", self.runtime)
    }

    fn field_ty(&self, d: &Descriptor, f: &Field) -> String {
        match f.ty {
            FieldTy::Value => d.type_of(f).to_string(),
            FieldTy::Output => format!("{}<{}>", self.rt("ResultSlot"), d.type_of(f)),
        }
    }

    fn typed_params(&self, d: &Descriptor) -> String {
        comma(d.fields.iter().map(|f| format!("{}: {}", f.name, self.field_ty(d, f))))
    }

    /// Generics of the `Runnable` impl and the factory: the struct's own,
    /// plus the discarded output in plain mode.
    fn bound_generics(d: &Descriptor) -> String {
        let mut names = d.generic_names();
        if !d.is_returning() {
            names.push(DISCARDED_OUTPUT);
        }
        comma(names)
    }

    fn self_ty(d: &Descriptor) -> String {
        format!("{}<{}>", d.type_name, comma(d.generic_names()))
    }

    fn call_args(d: &Descriptor) -> String {
        let mut args = vec!["&*o".to_string()];
        args.extend(d.slot_fields().map(|f| f.name.clone()));
        comma(args)
    }

    /// `where` clause shared by the `Runnable` impl and the factory.
    fn bounds(&self, cg: &mut Codegen, d: &Descriptor) {
        let slots = comma(d.slot_fields().map(|f| d.type_of(f).to_string()));
        let ret = d.generic(Param::Result).map_or(DISCARDED_OUTPUT, |g| g.name.as_str());
        cg.line("where");
        cg.indented(|cg| {
            cg.line("C: ::core::ops::Deref,");
            cg.line(format!("M: ::core::ops::FnOnce(&C::Target, {slots}) -> {ret},"));
        });
    }

    fn allow_many_args(cg: &mut Codegen, d: &Descriptor) {
        if d.fields.len() > CLIPPY_MAX_ARGS {
            cg.line("#[allow(clippy::too_many_arguments)]");
        }
    }
}

impl Backend for RustBackend {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn buffer(&self) -> Codegen {
        Codegen::new("    ")
    }

    fn prelude(&self, cg: &mut Codegen) {
        cg.line(format!("// {GENERATED_BANNER}"));
        cg.blank();
    }

    fn emit_type(&self, cg: &mut Codegen, d: &Descriptor) {
        let generics = comma(d.generic_names());
        let self_ty = Self::self_ty(d);
        let names = comma(d.fields.iter().map(|f| f.name.as_str()));

        cg.line(format!("// {} arguments --", d.arity()));
        if d.is_returning() {
            cg.line(format!(
                "/// Deferred method call with {} captured argument(s); the result goes to a `ResultSlot`.",
                d.arity()
            ));
        } else {
            cg.line(format!("/// Deferred method call with {} captured argument(s).", d.arity()));
        }
        cg.line(format!("pub struct {self_ty} {{"));
        cg.indented(|cg| {
            for f in &d.fields {
                cg.line(format!("{}: {},", f.name, self.field_ty(d, f)));
            }
        });
        cg.line("}");
        cg.blank();

        cg.line(format!("impl<{generics}> {self_ty} {{"));
        cg.indented(|cg| {
            Self::allow_many_args(cg, d);
            cg.line(format!("fn new({}) -> Self {{", self.typed_params(d)));
            cg.indented(|cg| cg.line(format!("Self {{ {names} }}")));
            cg.line("}");
        });
        cg.line("}");
        cg.blank();

        cg.line(format!("impl<{}> {} for {self_ty}", Self::bound_generics(d), self.rt("Runnable")));
        self.bounds(cg, d);
        cg.line("{");
        cg.indented(|cg| {
            cg.line(format!("fn run(self: ::std::boxed::Box<Self>) -> {} {{", self.rt("Status")));
            cg.indented(|cg| {
                cg.line(format!("let Self {{ {names} }} = *self;"));
                let call = format!("m({})", Self::call_args(d));
                let guard = self.rt("Status::guard");
                match d.field(Param::Result) {
                    Some(out) => cg.line(format!("{guard}(move || {}.put({call}))", out.name)),
                    None => {
                        cg.line(format!("{guard}(move || {{"));
                        cg.indented(|cg| cg.line(format!("let _ = {call};")));
                        cg.line("})");
                    }
                }
            });
            cg.line("}");
        });
        cg.line("}");
        cg.blank();
    }

    fn emit_factory(&self, cg: &mut Codegen, d: &Descriptor) {
        let generics = Self::bound_generics(d);
        let args = comma(d.fields.iter().map(|f| f.name.as_str()));

        cg.line(format!("// {} arguments --", d.arity()));
        cg.line(format!("/// Capture a call for later; see [`{}`].", d.type_name));
        cg.line("#[must_use = \"a runnable does nothing until it is run\"]");
        Self::allow_many_args(cg, d);
        cg.line(format!(
            "pub fn {}<{generics}>({}) -> ::std::boxed::Box<{}>",
            d.factory_name,
            self.typed_params(d),
            Self::self_ty(d),
        ));
        self.bounds(cg, d);
        cg.line("{");
        cg.indented(|cg| {
            cg.line(format!("::std::boxed::Box::new({}::new({args}))", d.type_name));
        });
        cg.line("}");
        cg.blank();
    }

    fn pass_separator(&self, cg: &mut Codegen) {
        cg.line("// factories --");
        cg.blank();
    }
}

// ------------------------------- Tests ------------------------------------ //
