//! Contains primitive type related helper functions.

pub(crate) fn is_numeric_primitive(ident: &syn::Ident) -> bool {
    is_signed_primitive(ident) || is_unsigned_primitive(ident)
}

pub(crate) fn is_signed_primitive(ident: &syn::Ident) -> bool {
    ident == "i8" || ident == "i16" || ident == "i32" || ident == "i64" || ident == "isize"
}

pub(crate) fn is_unsigned_primitive(ident: &syn::Ident) -> bool {
    ident == "u8" || ident == "u16" || ident == "u32" || ident == "u64" || ident == "usize"
}

/// `isize` and `usize` are measured on the machine running the generator.
pub(crate) fn primitive_bits(ident: &syn::Ident) -> Option<u32> {
    if ident == "i8" || ident == "u8" { Some(8) }
    else if ident == "i16" || ident == "u16" { Some(16) }
    else if ident == "i32" || ident == "u32" { Some(32) }
    else if ident == "i64" || ident == "u64" { Some(64) }
    else if ident == "isize" || ident == "usize" { Some(usize::BITS) }
    else { None }
}

/// Returns the inclusive value range of the primitive type `ident`.
pub(crate) fn primitive_range(ident: &syn::Ident) -> Option<(i128, i128)> {
    let bits = primitive_bits(ident)?;

    Some(if is_signed_primitive(ident) {
        (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1)
    } else {
        (0, (1i128 << bits) - 1)
    })
}

/// Converts `value` like an `as` cast to the primitive type `ident` would.
pub(crate) fn cast(value: i128, ident: &syn::Ident) -> Option<i128> {
    let bits = primitive_bits(ident)?;
    let truncated = value & ((1i128 << bits) - 1);

    Some(if is_signed_primitive(ident) && truncated >= 1i128 << (bits - 1) {
        truncated - (1i128 << bits)
    } else {
        truncated
    })
}

/// Returns the primitive type identifier of `ty`, if it is a numeric primitive.
pub(crate) fn numeric_primitive_of(ty: &syn::Type) -> Option<&syn::Ident> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.get_ident()
            .filter(|ident| is_numeric_primitive(ident)),
        syn::Type::Group(group) => numeric_primitive_of(&group.elem),
        syn::Type::Paren(paren) => numeric_primitive_of(&paren.elem),
        _ => None
    }
}
