use syn::spanned::Spanned;

use crate::eval::{Candidate, Evaluator, Key};

impl super::Enumeration {
    /// Finds the tuple struct `name` in `file` and evaluates all constants declared with its type.
    pub fn parse(file: &syn::File, name: &str) -> syn::Result<Self> {
        let item = file.items.iter()
            .find_map(|item| match item {
                syn::Item::Struct(s) if s.ident == name => Some(s),
                _ => None
            })
            .ok_or_else(|| syn::Error::new(
                file.span(), format!("cannot find type `{}`", name)
            ))?;

        if !item.generics.params.is_empty() {
            return Err(syn::Error::new(
                item.generics.span(), "expected type without generics"
            ));
        }

        let repr = match &item.fields {
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                crate::primitive::numeric_primitive_of(&fields.unnamed[0].ty).cloned()
            },
            _ => None
        }.ok_or_else(|| syn::Error::new(
            item.span(), "expected tuple struct with a single integer field"
        ))?;

        let mut evaluator = Evaluator::new(name, &repr);
        let mut group = Vec::new();

        for item in &file.items {
            match item {
                syn::Item::Const(c) => {
                    if is_type(&c.ty, name) {
                        let key = Key::free(&c.ident);
                        evaluator.insert(key.clone(), Candidate::group(&c.expr));
                        group.push((key, &c.ident, false));
                    } else if let Some(ty) = crate::primitive::numeric_primitive_of(&c.ty) {
                        evaluator.insert(Key::free(&c.ident), Candidate::scalar(&c.expr, ty));
                    }
                },

                syn::Item::Impl(i) if i.trait_.is_none() && is_type(&i.self_ty, name) => {
                    for impl_item in &i.items {
                        let c = match impl_item {
                            syn::ImplItem::Const(c) => c,
                            _ => continue
                        };

                        if is_self(&c.ty) || is_type(&c.ty, name) {
                            let key = Key::associated(&c.ident);
                            evaluator.insert(key.clone(), Candidate::group(&c.expr));
                            group.push((key, &c.ident, true));
                        } else if let Some(ty) = crate::primitive::numeric_primitive_of(&c.ty) {
                            evaluator.insert(Key::associated(&c.ident), Candidate::scalar(&c.expr, ty));
                        }
                    }
                },

                _ => {}
            }
        }

        if group.is_empty() {
            return Err(syn::Error::new(
                item.ident.span(), format!("cannot find constants of type `{}`", name)
            ));
        }

        let mut constants = Vec::with_capacity(group.len());
        for (key, ident, associated) in group {
            constants.push(super::Constant {
                value: evaluator.evaluate(&key, ident.span())?,
                ident: ident.clone(),
                name: ident.to_string(),
                associated
            });
        }

        Ok(Self {
            vis: item.vis.clone(),
            ident: item.ident.clone(),
            repr,
            constants
        })
    }
}

/// Returns `true` if the last segment of the type path `ty` is `name`.
fn is_type(ty: &syn::Type, name: &str) -> bool {
    match ty {
        syn::Type::Path(path) => path.qself.is_none() && path.path.segments.last()
            .map_or(false, |segment| segment.ident == name && segment.arguments.is_empty()),
        syn::Type::Group(group) => is_type(&group.elem, name),
        syn::Type::Paren(paren) => is_type(&paren.elem, name),
        _ => false
    }
}

fn is_self(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => path.qself.is_none() && path.path.is_ident("Self"),
        _ => false
    }
}
