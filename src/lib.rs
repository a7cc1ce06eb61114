//! # Enumerated constants for Rust
//!
//! Provides a generic enumeration type which pairs symbolic names with numeric indices, and the
//! runtime support for the code emitted by the `enumgen` generator of the `enums-codegen` crate.
//!
//! ## Description
//!
//! Constants are often grouped by a new type, which keeps them apart from other integers:
//!
//! ```rust
//! pub struct Color(i8);
//!
//! impl Color {
//!     pub const RED: Color = Color(1);
//!     pub const YELLOW: Color = Color(2);
//!     pub const GREEN: Color = Color(3);
//! }
//! ```
//!
//! The group by itself can not answer simple questions like "which name belongs to `2`?" or "is
//! `7` a valid color?". An [`Enum`] stores both sides of such a group and answers them in both
//! directions:
//!
//! ```rust
//! let color = enums::Enum::register(
//!     "traffic.color",
//!     [("Red", 1), ("Yellow", 2), ("Green", 3)],
//!     [enums::with_undefined_values(-1, "Unknown")]
//! ).unwrap();
//!
//! assert_eq!(color.index_of(&"Green"), 3);
//! assert_eq!(color.describe(2), "Yellow");
//! assert_eq!(color.describe(7), "Unknown");
//! assert!(color.index().validate(7).is_err());
//! ```
//!
//! Enumerations which live in a `static` are initialized once through a [`Registry`].
//!
//! ## Generated code
//!
//! `enumgen --type Color --source src/traffic.rs` writes `src/traffic_enum.rs`, which is meant to
//! be included right after the type with `include!("traffic_enum.rs");`. The generated `validate`
//! method returns this crate's [`Error`], and the optional `enumeration` accessor is backed by a
//! [`Registry`].

mod description;
mod enumeration;
mod error;
mod index;
mod numeric;
mod registry;

pub use description::Description;
pub use enumeration::{with_undefined_values, Enum, Setting};
pub use error::Error;
pub use index::Index;
pub use numeric::{Name, Numeric};
pub use registry::Registry;

/// A list of valid values which can check candidates against itself.
pub trait Enumerator<E> {
    fn list(&self) -> &[E];

    fn validate(&self, value: &E) -> Result<(), Error>;
}

/// Returns `true` if `value` equals `target` or any of `or`.
///
/// ```rust
/// assert!(enums::is(&3, &3, &[]));
/// assert!(!enums::is(&0, &3, &[2]));
/// ```
pub fn is<T: PartialEq>(value: &T, target: &T, or: &[T]) -> bool {
    value == target || or.iter().any(|other| value == other)
}
