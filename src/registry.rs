//! Contains the one-time initialization guard for enumerations stored in `static`s.

use once_cell::sync::OnceCell;

use crate::{Enum, Error, Name, Numeric, Setting};

/// Lazily registers an [`Enum`] exactly once.
///
/// ```rust
/// static LIGHT: enums::Registry<&'static str, i8> = enums::Registry::new();
///
/// fn light() -> &'static enums::Enum<&'static str, i8> {
///     LIGHT.get_or_register("traffic.light", [("Off", 0), ("On", 1)], [])
///         .expect("valid definition")
/// }
///
/// assert_eq!(light().index_of(&"On"), 1);
/// assert_eq!(light().describe(7), "");
/// ```
#[derive(Debug)]
pub struct Registry<S, N> {
    cell: OnceCell<Enum<S, N>>
}

impl<S, N> Registry<S, N> {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    /// Returns the enumeration if it has been registered already.
    pub fn get(&self) -> Option<&Enum<S, N>> {
        self.cell.get()
    }
}

impl<S: Name, N: Numeric> Registry<S, N> {
    /// Registers the enumeration on the first call and returns the stored one on every call.
    ///
    /// A failed registration leaves the registry empty, so the next call tries again.
    pub fn get_or_register<D, O>(&self, id: &str, definition: D, settings: O) -> Result<&Enum<S, N>, Error>
    where
        D: IntoIterator<Item = (S, N)>,
        O: IntoIterator<Item = Setting<S, N>>
    {
        self.cell.get_or_try_init(|| {
            tracing::debug!(id, "initializing enum");
            Enum::register(id, definition, settings)
        })
    }

    /// Like [`Registry::get_or_register`], for initializers which can not fail.
    pub fn get_or_init<F: FnOnce() -> Enum<S, N>>(&self, f: F) -> &Enum<S, N> {
        self.cell.get_or_init(f)
    }
}

impl<S, N> Default for Registry<S, N> {
    fn default() -> Self { Self::new() }
}
