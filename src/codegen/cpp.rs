//! C++ dialect: template classes deriving from `runnable_args_base`, in the
//! layout of the hand-maintained `runnable_utils_generated.h`.
//!
//! `Run()` always returns `NS_OK`; the returning variant writes through a
//! caller-owned `R*` with no synchronization of its own.

use super::{comma, Backend, Codegen, GENERATED_BANNER};
use crate::ir::{Descriptor, Field, FieldTy, Param, Target};
use crate::naming;

const BASE_CLASS: &str = "runnable_args_base";

#[derive(Debug, Clone, Default)]
pub struct CppBackend {
    include_guard: Option<String>,
}

impl CppBackend {
    pub fn new(include_guard: Option<String>) -> Self {
        Self { include_guard }
    }

    fn field_ty(d: &Descriptor, f: &Field) -> String {
        match f.ty {
            FieldTy::Value => d.type_of(f).to_string(),
            FieldTy::Output => format!("{}*", d.type_of(f)),
        }
    }

    fn param_name(f: &Field) -> String {
        naming::param_name(f.param, Target::Cpp)
    }

    fn typenames(d: &Descriptor) -> String {
        comma(d.generics.iter().map(|g| format!("typename {}", g.name)))
    }

    fn instance_ty(d: &Descriptor) -> String {
        format!("{}<{}>", d.type_name, comma(d.generic_names()))
    }

    fn ctor_params(d: &Descriptor) -> String {
        comma(d.fields.iter().map(|f| format!("{} {}", Self::field_ty(d, f), Self::param_name(f))))
    }

    fn slot_members(d: &Descriptor) -> String {
        comma(d.slot_fields().map(|f| f.name.as_str()))
    }
}

impl Backend for CppBackend {
    fn target(&self) -> Target {
        Target::Cpp
    }

    fn buffer(&self) -> Codegen {
        Codegen::new("  ")
    }

    fn prelude(&self, cg: &mut Codegen) {
        cg.line(format!("// {GENERATED_BANNER}"));
        cg.blank();
        if let Some(guard) = &self.include_guard {
            cg.line(format!("#ifndef {guard}"));
            cg.line(format!("#define {guard}"));
            cg.blank();
        }
    }

    fn emit_type(&self, cg: &mut Codegen, d: &Descriptor) {
        let inits = comma(d.fields.iter().map(|f| format!("{}({})", f.name, Self::param_name(f))));
        let call = format!("((*o_).*m_)({})", Self::slot_members(d));

        cg.line(format!("// {} arguments --", d.arity()));
        cg.line(format!(
            "template<{}> class {} : public {BASE_CLASS} {{",
            Self::typenames(d),
            d.type_name
        ));
        cg.line(" public:");
        cg.indented(|cg| {
            cg.line(format!("{}({}) :", d.type_name, Self::ctor_params(d)));
            cg.line(format!("  {inits}  {{}}"));
            cg.blank();
            cg.line("NS_IMETHOD Run() {");
            cg.indented(|cg| {
                match d.field(Param::Result) {
                    Some(out) => cg.line(format!("*{} = {call};", out.name)),
                    None => cg.line(format!("{call};")),
                }
                cg.line("return NS_OK;");
            });
            cg.line("}");
        });
        cg.blank();
        cg.line(" private:");
        cg.indented(|cg| {
            for f in &d.fields {
                cg.line(format!("{} {};", Self::field_ty(d, f), f.name));
            }
        });
        cg.line("};");
        cg.blank();
        cg.blank();
        cg.blank();
    }

    fn emit_factory(&self, cg: &mut Codegen, d: &Descriptor) {
        let instance = Self::instance_ty(d);
        let args = comma(d.fields.iter().map(Self::param_name));

        cg.line(format!("// {} arguments --", d.arity()));
        cg.line(format!("template<{}>", Self::typenames(d)));
        cg.line(format!("{instance}* {}({}) {{", d.factory_name, Self::ctor_params(d)));
        cg.indented(|cg| {
            cg.line(format!("return new {instance}"));
            cg.line(format!("  ({args});"));
        });
        cg.line("}");
        cg.blank();
    }

    fn pass_separator(&self, cg: &mut Codegen) {
        cg.blank();
        cg.blank();
        cg.blank();
    }

    fn epilogue(&self, cg: &mut Codegen) {
        if let Some(guard) = &self.include_guard {
            cg.line(format!("#endif  // {guard}"));
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Key, ReturnMode};
    use crate::lower::lower;

    fn render_type(arity: usize, mode: ReturnMode) -> String {
        let backend = CppBackend::default();
        let mut cg = backend.buffer();
        backend.emit_type(&mut cg, &lower(Key::new(arity, mode), Target::Cpp));
        cg.into_string()
    }

    #[test]
    fn void_class_matches_header_layout() {
        let expected = "\
// 2 arguments --
template<typename C, typename M, typename A0, typename A1> class runnable_args2 : public runnable_args_base {
 public:
  runnable_args2(C o, M m, A0 a0, A1 a1) :
    o_(o), m_(m), a0_(a0), a1_(a1)  {}

  NS_IMETHOD Run() {
    ((*o_).*m_)(a0_, a1_);
    return NS_OK;
  }

 private:
  C o_;
  M m_;
  A0 a0_;
  A1 a1_;
};



";
        assert_eq!(render_type(2, ReturnMode::Void), expected);
    }

    #[test]
    fn returning_class_stores_output_pointer_last() {
        let src = render_type(1, ReturnMode::Returning);
        assert!(src.contains("template<typename C, typename M, typename A0, typename R> class runnable_args1_ret"));
        assert!(src.contains("  runnable_args1_ret(C o, M m, A0 a0, R* r) :\n    o_(o), m_(m), a0_(a0), r_(r)  {}"));
        assert!(src.contains("    *r_ = ((*o_).*m_)(a0_);\n    return NS_OK;"));
        assert!(src.ends_with("  A0 a0_;\n  R* r_;\n};\n\n\n\n"));
    }

    #[test]
    fn factory_returns_new_instance() {
        let backend = CppBackend::default();
        let mut cg = backend.buffer();
        backend.emit_factory(&mut cg, &lower(Key::new(1, ReturnMode::Void), Target::Cpp));
        let expected = "\
// 1 arguments --
template<typename C, typename M, typename A0>
runnable_args1<C, M, A0>* WrapRunnable1(C o, M m, A0 a0) {
  return new runnable_args1<C, M, A0>
    (o, m, a0);
}

";
        assert_eq!(cg.into_string(), expected);
    }

    #[test]
    fn include_guard_wraps_output() {
        let backend = CppBackend::new(Some("runnable_utils_generated_h__".to_string()));
        let mut cg = backend.buffer();
        backend.prelude(&mut cg);
        backend.epilogue(&mut cg);
        let src = cg.into_string();
        assert!(src.contains("#ifndef runnable_utils_generated_h__\n#define runnable_utils_generated_h__\n"));
        assert!(src.ends_with("#endif  // runnable_utils_generated_h__\n"));
    }
}
