use crate::ir::{Descriptor, Field, FieldTy, GenericParam, Key, Param, Target};
use crate::naming;

/// Canonical parameter order for a key: callee, method, slots, then result.
fn params(key: Key) -> Vec<Param> {
    let mut out = Vec::with_capacity(key.arity + 3);
    out.push(Param::Object);
    out.push(Param::Method);
    out.extend((0..key.arity).map(Param::Slot));
    if key.mode.is_returning() {
        out.push(Param::Result);
    }
    out
}

/// Build the descriptor both emitters render for `key`.
///
/// Generic parameters and fields share one role list, so their order can
/// never drift apart.
pub fn lower(key: Key, target: Target) -> Descriptor {
    let roles = params(key);

    let generics = roles
        .iter()
        .map(|&param| GenericParam { param, name: naming::generic_name(param) })
        .collect();

    let fields = roles
        .iter()
        .map(|&param| Field {
            name: naming::field_name(param, target),
            param,
            ty: if param == Param::Result { FieldTy::Output } else { FieldTy::Value },
        })
        .collect();

    Descriptor {
        key,
        type_name: naming::type_name(key, target),
        factory_name: naming::factory_name(key, target),
        generics,
        fields,
    }
}

// ------------------------------- Tests ------------------------------------ //
