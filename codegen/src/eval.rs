//! Contains the evaluator for integer constant expressions.
//!
//! All arithmetic is performed on `i128`; only the final value of a constant is checked against
//! the range of its type.

use std::collections::{HashMap, HashSet};

use syn::spanned::Spanned;

/// Identifies a constant by the way it is referenced.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Key {
    /// A top-level constant, `NAME`.
    Free(String),
    /// A constant in an `impl` block of the enumeration type, `Self::NAME` or `Type::NAME`.
    Associated(String)
}

impl Key {
    pub(crate) fn free(ident: &syn::Ident) -> Self { Self::Free(ident.to_string()) }

    pub(crate) fn associated(ident: &syn::Ident) -> Self { Self::Associated(ident.to_string()) }
}

impl core::fmt::Display for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Free(name) => f.write_str(name),
            Self::Associated(name) => write!(f, "Self::{}", name)
        }
    }
}

#[derive(Clone, Copy)]
enum Kind<'a> {
    /// A constant of the enumeration type.
    Group,
    /// A constant of an integer primitive type.
    Scalar(&'a syn::Ident)
}

/// An unevaluated constant.
#[derive(Clone, Copy)]
pub(crate) struct Candidate<'a> {
    expr: &'a syn::Expr,
    kind: Kind<'a>
}

impl<'a> Candidate<'a> {
    pub(crate) fn group(expr: &'a syn::Expr) -> Self {
        Self { expr, kind: Kind::Group }
    }

    pub(crate) fn scalar(expr: &'a syn::Expr, ty: &'a syn::Ident) -> Self {
        Self { expr, kind: Kind::Scalar(ty) }
    }
}

/// Lazily evaluates constants, so references may point to constants declared further down.
pub(crate) struct Evaluator<'a> {
    name: &'a str,
    repr: syn::Ident,
    candidates: HashMap<Key, Candidate<'a>>,
    values: HashMap<Key, i128>,
    visiting: HashSet<Key>
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(name: &'a str, repr: &syn::Ident) -> Self {
        Self {
            name,
            repr: repr.clone(),
            candidates: HashMap::new(),
            values: HashMap::new(),
            visiting: HashSet::new()
        }
    }

    pub(crate) fn insert(&mut self, key: Key, candidate: Candidate<'a>) {
        self.candidates.insert(key, candidate);
    }

    /// Returns the value of the constant `key`, `span` is used to report unknown constants.
    pub(crate) fn evaluate(&mut self, key: &Key, span: proc_macro2::Span) -> syn::Result<i128> {
        if let Some(value) = self.values.get(key) {
            return Ok(*value);
        }

        let candidate = *self.candidates.get(key).ok_or_else(|| syn::Error::new(
            span, format!("cannot find constant `{}`", key)
        ))?;

        if !self.visiting.insert(key.clone()) {
            return Err(syn::Error::new(
                span, format!("cycle detected when evaluating `{}`", key)
            ));
        }

        let value = match candidate.kind {
            Kind::Group => self.group(candidate.expr)?,
            Kind::Scalar(ty) => {
                let value = self.integer(candidate.expr)?;
                check_range(value, ty, candidate.expr.span())?
            }
        };

        self.visiting.remove(key);
        self.values.insert(key.clone(), value);

        Ok(value)
    }

    /// Evaluates the initializer of a constant of the enumeration type.
    fn group(&mut self, expr: &syn::Expr) -> syn::Result<i128> {
        match expr {
            syn::Expr::Call(call) if call.args.len() == 1 && self.is_constructor(&call.func) => {
                let arg = &call.args[0];
                let value = self.integer(arg)?;
                check_range(value, &self.repr, arg.span())
            },

            syn::Expr::Path(path) if path.qself.is_none() => match self.key_of(&path.path) {
                Some(key) if self.is_group(&key) => self.evaluate(&key, expr.span()),
                _ => Err(self.expected_group(expr))
            },

            syn::Expr::Paren(paren) => self.group(&paren.expr),
            syn::Expr::Group(group) => self.group(&group.expr),

            _ => Err(self.expected_group(expr))
        }
    }

    /// Evaluates an integer expression.
    fn integer(&mut self, expr: &syn::Expr) -> syn::Result<i128> {
        match expr {
            syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. }) => literal(lit, false, expr),

            syn::Expr::Unary(unary) => match (&unary.op, &*unary.expr) {
                // `-128i8` is in range, `128i8` is not.
                (syn::UnOp::Neg(_), syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. })) =>
                    literal(lit, true, expr),
                (syn::UnOp::Neg(_), operand) => self.integer(operand)?
                    .checked_neg()
                    .ok_or_else(|| overflow(expr)),
                _ => Err(unsupported(expr))
            },

            syn::Expr::Binary(binary) => {
                let left = self.integer(&binary.left)?;
                let right = self.integer(&binary.right)?;
                apply(&binary.op, left, right, expr)
            },

            syn::Expr::Cast(cast) => {
                let value = self.integer(&cast.expr)?;
                crate::primitive::numeric_primitive_of(&cast.ty)
                    .and_then(|ty| crate::primitive::cast(value, ty))
                    .ok_or_else(|| unsupported(expr))
            },

            syn::Expr::Path(path) if path.qself.is_none() => {
                if let Some(value) = primitive_bound(&path.path) {
                    return Ok(value);
                }

                let key = self.key_of(&path.path).ok_or_else(|| unsupported(expr))?;
                if self.is_group(&key) {
                    return Err(syn::Error::new(expr.span(), format!(
                        "expected an integer, found constant `{}` of type `{}`", key, self.name
                    )));
                }

                self.evaluate(&key, expr.span())
            },

            syn::Expr::Field(field) => match (&*field.base, &field.member) {
                (syn::Expr::Path(path), syn::Member::Unnamed(index)) if index.index == 0 && path.qself.is_none() => {
                    match self.key_of(&path.path) {
                        Some(key) if !self.is_scalar(&key) => self.evaluate(&key, expr.span()),
                        _ => Err(unsupported(expr))
                    }
                },
                _ => Err(unsupported(expr))
            },

            syn::Expr::Paren(paren) => self.integer(&paren.expr),
            syn::Expr::Group(group) => self.integer(&group.expr),

            _ => Err(unsupported(expr))
        }
    }

    /// Resolves a path to the key of the constant it references.
    fn key_of(&self, path: &syn::Path) -> Option<Key> {
        let segments: Vec<_> = path.segments.iter()
            .map(|segment| segment.ident.to_string())
            .skip_while(|segment| segment == "self" || segment == "crate" || segment == "super")
            .collect();

        match segments.as_slice() {
            [name] => Some(Key::Free(name.clone())),
            [ty, name] if ty == "Self" || ty == self.name => Some(Key::Associated(name.clone())),
            _ => None
        }
    }

    /// Returns `true` if `path` names `Self` or the enumeration type.
    fn is_constructor(&self, func: &syn::Expr) -> bool {
        match func {
            syn::Expr::Path(path) if path.qself.is_none() => path.path.is_ident("Self") ||
                path.path.segments.last().map_or(false, |segment| segment.ident == self.name),
            _ => false
        }
    }

    fn is_group(&self, key: &Key) -> bool {
        matches!(self.candidates.get(key), Some(Candidate { kind: Kind::Group, .. }))
    }

    fn is_scalar(&self, key: &Key) -> bool {
        matches!(self.candidates.get(key), Some(Candidate { kind: Kind::Scalar(_), .. }))
    }

    fn expected_group(&self, expr: &syn::Expr) -> syn::Error {
        syn::Error::new(expr.span(), format!(
            "expected `{0}(..)`, `Self(..)` or another constant of type `{0}`", self.name
        ))
    }
}

/// Evaluates `u8::MAX`, `i32::MIN` and so on.
fn primitive_bound(path: &syn::Path) -> Option<i128> {
    let mut segments = path.segments.iter();
    let (ty, bound) = (segments.next()?, segments.next()?);
    if segments.next().is_some() { return None; }

    let (min, max) = crate::primitive::primitive_range(&ty.ident)?;
    if bound.ident == "MIN" { Some(min) }
    else if bound.ident == "MAX" { Some(max) }
    else { None }
}

fn apply(op: &syn::BinOp, left: i128, right: i128, expr: &syn::Expr) -> syn::Result<i128> {
    let shift = || u32::try_from(right).ok();

    let value = match op {
        syn::BinOp::Add(_) => left.checked_add(right),
        syn::BinOp::Sub(_) => left.checked_sub(right),
        syn::BinOp::Mul(_) => left.checked_mul(right),
        syn::BinOp::Div(_) | syn::BinOp::Rem(_) if right == 0 => return Err(syn::Error::new(
            expr.span(), "attempt to divide by zero"
        )),
        syn::BinOp::Div(_) => left.checked_div(right),
        syn::BinOp::Rem(_) => left.checked_rem(right),
        syn::BinOp::BitAnd(_) => Some(left & right),
        syn::BinOp::BitOr(_) => Some(left | right),
        syn::BinOp::BitXor(_) => Some(left ^ right),
        syn::BinOp::Shl(_) => shift()
            .and_then(|shift| left.checked_shl(shift).filter(|value| value >> shift == left)),
        syn::BinOp::Shr(_) => shift().and_then(|shift| left.checked_shr(shift)),
        _ => return Err(unsupported(expr))
    };

    value.ok_or_else(|| overflow(expr))
}

/// Evaluates an integer literal, negated if `negative`, and checks it against its suffix.
fn literal(lit: &syn::LitInt, negative: bool, expr: &syn::Expr) -> syn::Result<i128> {
    let value = lit.base10_parse::<i128>()?;
    let value = if negative { value.checked_neg().ok_or_else(|| overflow(expr))? } else { value };

    if lit.suffix().is_empty() {
        return Ok(value);
    }

    check_range(value, &syn::Ident::new(lit.suffix(), lit.span()), expr.span())
}

fn check_range(value: i128, ty: &syn::Ident, span: proc_macro2::Span) -> syn::Result<i128> {
    match crate::primitive::primitive_range(ty) {
        Some((min, max)) if value < min || value > max => Err(syn::Error::new(
            span, format!("value {} out of range for `{}`", value, ty)
        )),
        _ => Ok(value)
    }
}

fn unsupported(expr: &syn::Expr) -> syn::Error {
    syn::Error::new(expr.span(), "unsupported constant expression")
}

fn overflow(expr: &syn::Expr) -> syn::Error {
    syn::Error::new(expr.span(), "arithmetic overflow")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(expr: &str) -> syn::Result<i128> {
        let expr: syn::Expr = syn::parse_str(expr).unwrap();
        let repr = syn::Ident::new("i64", proc_macro2::Span::call_site());
        Evaluator::new("A", &repr).integer(&expr)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7);
        assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9);
        assert_eq!(evaluate("-7 / 2").unwrap(), -3);
        assert_eq!(evaluate("-7 % 2").unwrap(), -1);
        assert_eq!(evaluate("0b1010 ^ 0xF").unwrap(), 5);
        assert_eq!(evaluate("1 << 10 >> 2").unwrap(), 256);
        assert_eq!(evaluate("0o17 & 6 | 16").unwrap(), 22);
        assert_eq!(evaluate("1_000i32").unwrap(), 1000);
    }

    #[test]
    fn casts_and_bounds() {
        assert_eq!(evaluate("-1 as u8").unwrap(), 255);
        assert_eq!(evaluate("(-1i64) as u16").unwrap(), 65_535);
        assert_eq!(evaluate("i8::MIN").unwrap(), -128);
        assert_eq!(evaluate("u16::MAX + 1").unwrap(), 65_536);
    }

    #[test]
    fn negative_literals() {
        assert_eq!(evaluate("-128i8").unwrap(), -128);
        assert_eq!(evaluate("-32768i16").unwrap(), -32_768);
        assert_eq!(evaluate("-2147483648i32").unwrap(), -2_147_483_648);
        assert_eq!(evaluate("-9223372036854775808i64").unwrap(), i64::MIN as i128);
        assert_eq!(evaluate("-(127i8)").unwrap(), -127);

        assert_eq!(evaluate("-129i8").unwrap_err().to_string(), "value -129 out of range for `i8`");
        assert_eq!(evaluate("-(128i8)").unwrap_err().to_string(), "value 128 out of range for `i8`");
        assert_eq!(evaluate("-1u8").unwrap_err().to_string(), "value -1 out of range for `u8`");
    }

    #[test]
    fn errors() {
        assert_eq!(evaluate("300u8").unwrap_err().to_string(), "value 300 out of range for `u8`");
        assert_eq!(evaluate("1 % 0").unwrap_err().to_string(), "attempt to divide by zero");
        assert_eq!(evaluate("1 << 200").unwrap_err().to_string(), "arithmetic overflow");
        assert_eq!(evaluate("!0").unwrap_err().to_string(), "unsupported constant expression");
        assert_eq!(evaluate("1 as f32").unwrap_err().to_string(), "unsupported constant expression");
        assert_eq!(evaluate("B").unwrap_err().to_string(), "cannot find constant `B`");
        assert_eq!(evaluate("A::B.0").unwrap_err().to_string(), "cannot find constant `Self::B`");
        assert_eq!(evaluate("x::y::Z").unwrap_err().to_string(), "unsupported constant expression");
    }

    #[test]
    fn memoized() {
        let file = syn::parse_file("const B: i64 = 2; const C: i64 = B * B;").unwrap();
        let repr = syn::Ident::new("i64", proc_macro2::Span::call_site());
        let mut evaluator = Evaluator::new("A", &repr);

        for item in &file.items {
            if let syn::Item::Const(c) = item {
                let ty = crate::primitive::numeric_primitive_of(&c.ty).unwrap();
                evaluator.insert(Key::free(&c.ident), Candidate::scalar(&c.expr, ty));
            }
        }

        let span = proc_macro2::Span::call_site();
        assert_eq!(evaluator.evaluate(&Key::Free("C".into()), span).unwrap(), 4);
        assert_eq!(evaluator.values.len(), 2);
        assert!(evaluator.visiting.is_empty());
    }
}
