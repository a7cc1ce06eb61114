//! Contains the type bounds for enumeration indices and names.

use core::fmt::Debug;
use core::hash::Hash;

/// Types which can be used as the numeric index of an enumeration member.
///
/// Implemented for all integer primitives up to 64 bits. New types wrapping an integer can opt in:
///
/// ```rust
/// #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// struct Color(i8);
///
/// impl enums::Numeric for Color {}
/// ```
pub trait Numeric: Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {}

/// Types which can be used as the symbolic name of an enumeration member.
pub trait Name: Clone + Eq + Hash + Debug + Default + Send + Sync + 'static {}

macro_rules! numeric {
    ($($primitive:ty),*) => { $(impl Numeric for $primitive {})* };
}

numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Name for &'static str {}
impl Name for String {}
impl Name for std::borrow::Cow<'static, str> {}
