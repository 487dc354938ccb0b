//! Structural checks on the Rust dialect, parsed back with `syn`.

use std::collections::HashSet;

use proptest::prelude::*;
use runnable_gen::{generate, DeclKind, GenConfig, ReturnMode, Target};
use syn::{FnArg, GenericParam, Item, ItemFn, ItemStruct, Pat};

fn parse(max_args: usize) -> syn::File {
    let src = generate(&GenConfig { max_args, ..GenConfig::default() }).unwrap().render();
    syn::parse_file(&src).expect("generated Rust parses")
}

fn generic_idents(generics: &syn::Generics) -> Vec<String> {
    generics
        .params
        .iter()
        .map(|p| match p {
            GenericParam::Type(t) => t.ident.to_string(),
            other => panic!("unexpected generic parameter {other:?}"),
        })
        .collect()
}

fn structs(file: &syn::File) -> Vec<&ItemStruct> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn fns(file: &syn::File) -> Vec<&ItemFn> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Fn(f) => Some(f),
            _ => None,
        })
        .collect()
}

fn expected_generics(arity: usize, returning: bool) -> Vec<String> {
    let mut out = vec!["C".to_string(), "M".to_string()];
    out.extend((0..arity).map(|i| format!("A{i}")));
    if returning {
        out.push("R".to_string());
    }
    out
}

#[test]
fn every_struct_has_matching_generics_and_fields() {
    let file = parse(10);
    let structs = structs(&file);
    assert_eq!(structs.len(), 18);

    for arity in 1..10 {
        for returning in [false, true] {
            let name = if returning { format!("RunnableArgs{arity}Ret") } else { format!("RunnableArgs{arity}") };
            let s = structs.iter().find(|s| s.ident == name).unwrap_or_else(|| panic!("missing {name}"));

            let generics = generic_idents(&s.generics);
            assert_eq!(generics, expected_generics(arity, returning), "{name}");

            let fields: Vec<String> = s.fields.iter().map(|f| f.ident.as_ref().unwrap().to_string()).collect();
            assert_eq!(fields.len(), arity + 2 + usize::from(returning), "{name}");
            for (i, field) in fields.iter().skip(2).take(arity).enumerate() {
                assert_eq!(field, &format!("a{i}"));
            }
            assert!(s.fields.iter().all(|f| matches!(f.vis, syn::Visibility::Inherited)), "{name} fields are private");
        }
    }
}

#[test]
fn factories_take_constructor_parameters_in_order() {
    let file = parse(10);
    let fns = fns(&file);
    assert_eq!(fns.len(), 18);

    for f in fns {
        let name = f.sig.ident.to_string();
        let returning = name.ends_with("_ret");
        let arity: usize = name
            .trim_start_matches("runnable_args")
            .trim_end_matches("_ret")
            .parse()
            .unwrap();

        let mut generics = expected_generics(arity, returning);
        if !returning {
            generics.push("O".to_string());
        }
        assert_eq!(generic_idents(&f.sig.generics), generics, "{name}");

        let params: Vec<String> = f
            .sig
            .inputs
            .iter()
            .map(|arg| match arg {
                FnArg::Typed(t) => match t.pat.as_ref() {
                    Pat::Ident(ident) => ident.ident.to_string(),
                    other => panic!("unexpected pattern {other:?}"),
                },
                FnArg::Receiver(_) => panic!("factory {name} takes self"),
            })
            .collect();
        let mut expected = vec!["o".to_string(), "m".to_string()];
        expected.extend((0..arity).map(|i| format!("a{i}")));
        if returning {
            expected.push("out".to_string());
        }
        assert_eq!(params, expected, "{name}");
    }
}

#[test]
fn names_are_unique_across_the_set() {
    for target in [Target::Rust, Target::Cpp] {
        let generated = generate(&GenConfig { max_args: 10, target, ..GenConfig::default() }).unwrap();
        let mut seen = HashSet::new();
        for decl in generated.declarations() {
            assert!(seen.insert((decl.kind, decl.name.clone())), "{} {}", decl.kind, decl.name);
        }
        let types: HashSet<_> = generated.of_kind(DeclKind::Type).map(|d| d.key).collect();
        let factories: HashSet<_> = generated.of_kind(DeclKind::Factory).map(|d| d.key).collect();
        assert_eq!(types, factories);
        assert_eq!(types.len(), 18);
    }
}

#[test]
fn output_starts_with_generated_banner() {
    let src = generate(&GenConfig::default()).unwrap().render();
    assert!(src.starts_with("// @generated by runnable-gen."));
}

#[test]
fn cpp_output_keeps_original_class_shape() {
    let src = generate(&GenConfig { max_args: 10, target: Target::Cpp, ..GenConfig::default() })
        .unwrap()
        .render();
    assert_eq!(src.matches(": public runnable_args_base {").count(), 18);
    assert_eq!(src.matches("return NS_OK;").count(), 18);
    assert_eq!(src.matches("return new runnable_args").count(), 18);
    assert!(src.contains(
        "template<typename C, typename M, typename A0, typename A1, typename A2, typename A3, typename A4, \
         typename A5, typename A6, typename A7, typename A8> class runnable_args9 : public runnable_args_base {"
    ));
}

proptest! {
    #[test]
    fn declaration_count_follows_the_bound(max_args in 0usize..24, cpp in any::<bool>()) {
        let target = if cpp { Target::Cpp } else { Target::Rust };
        let config = GenConfig { max_args, target, ..GenConfig::default() };
        let generated = generate(&config).unwrap();
        let arities = max_args.saturating_sub(1);
        prop_assert_eq!(generated.declarations().len(), arities * 4);
        for mode in ReturnMode::ALL {
            prop_assert_eq!(generated.of_kind(DeclKind::Type).filter(|d| d.key.mode == mode).count(), arities);
        }
        prop_assert_eq!(generated.render(), generate(&config).unwrap().render());
    }

    #[test]
    fn rust_output_always_parses(max_args in 0usize..16) {
        let src = generate(&GenConfig { max_args, ..GenConfig::default() }).unwrap().render();
        prop_assert!(syn::parse_file(&src).is_ok());
    }
}
