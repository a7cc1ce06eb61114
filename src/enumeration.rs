//! Contains the enumeration type which pairs names with numeric indices.

use crate::{Description, Error, Index, Name, Numeric};

/// Adjusts a freshly registered enumeration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Setting<S, N> {
    /// Replaces the values returned by lookups which do not match any member.
    Undefined { index: N, name: S }
}

impl<S: Name, N: Numeric> Setting<S, N> {
    pub fn undefined(index: N, name: S) -> Self {
        Self::Undefined { index, name }
    }

    fn apply(self, enumeration: &mut Enum<S, N>) {
        match self {
            Self::Undefined { index, name } => {
                enumeration.index.undefined = index;
                enumeration.desc.undefined = name;
            }
        }
    }
}

/// Shorthand for [`Setting::undefined`].
pub fn with_undefined_values<S: Name, N: Numeric>(index: N, name: S) -> Setting<S, N> {
    Setting::undefined(index, name)
}

/// A set of symbolic names paired with a set of numeric indices.
///
/// The member at position `i` of [`Enum::desc`] and of [`Enum::index`] describe the same value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enum<S, N> {
    index: Index<N>,
    desc: Description<S>
}

impl<S: Name, N: Numeric> Enum<S, N> {
    /// Builds an enumeration from `(name, index)` pairs, keeping their order.
    ///
    /// ```rust
    /// let color = enums::Enum::register(
    ///     "traffic.color",
    ///     [("Red", 1), ("Yellow", 2), ("Green", 3)],
    ///     [enums::with_undefined_values(-1, "Unknown")]
    /// ).unwrap();
    ///
    /// assert_eq!(color.index_of(&"Yellow"), 2);
    /// assert_eq!(color.index_of(&"red"), -1);
    /// assert_eq!(color.describe(7), "Unknown");
    /// ```
    pub fn register<D, O>(id: &str, definition: D, settings: O) -> Result<Self, Error>
    where
        D: IntoIterator<Item = (S, N)>,
        O: IntoIterator<Item = Setting<S, N>>
    {
        if id.is_empty() {
            return Err(Error::failed_to_register(id, "id is required!"));
        }

        let (names, indexes): (Vec<S>, Vec<N>) = definition.into_iter().unzip();

        if names.is_empty() {
            return Err(Error::failed_to_register(id, "definition is required!"));
        }
        if !is_unique(&indexes) {
            return Err(Error::failed_to_register(id, "indexes must be unique!"));
        }
        if !is_unique(&names) {
            return Err(Error::failed_to_register(id, "names must be unique!"));
        }

        let mut enumeration = Self {
            index: Index::new(id, indexes),
            desc: Description::new(id, names)
        };

        for setting in settings {
            setting.apply(&mut enumeration);
        }

        tracing::debug!(
            id,
            members = enumeration.len(),
            names = enumeration.desc.type_name(),
            indexes = enumeration.index.type_name(),
            "registered enum"
        );

        Ok(enumeration)
    }

    pub fn id(&self) -> &str { self.index.id() }

    pub fn index(&self) -> &Index<N> { &self.index }

    pub fn desc(&self) -> &Description<S> { &self.desc }

    pub fn len(&self) -> usize { self.index.values.len() }

    pub fn is_empty(&self) -> bool { self.index.values.is_empty() }

    /// Iterates over all `(name, index)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, N)> + '_ {
        self.desc.values.iter().zip(self.index.values.iter().copied())
    }

    pub fn try_index_of(&self, desc: &S) -> Option<N> {
        self.desc.values.iter()
            .position(|name| name == desc)
            .map(|i| self.index.values[i])
    }

    /// Returns the index paired with `desc`, or the undefined index.
    pub fn index_of(&self, desc: &S) -> N {
        self.try_index_of(desc).unwrap_or(self.index.undefined)
    }

    pub fn try_describe(&self, index: N) -> Option<&S> {
        self.index.values.iter()
            .position(|value| *value == index)
            .map(|i| &self.desc.values[i])
    }

    /// Returns the name paired with `index`, or the undefined name.
    pub fn describe(&self, index: N) -> S {
        self.try_describe(index).unwrap_or(&self.desc.undefined).clone()
    }

    /// Alias of [`Enum::describe`].
    pub fn name_of(&self, index: N) -> S {
        self.describe(index)
    }
}

fn is_unique<T: Eq + core::hash::Hash>(values: &[T]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value))
}
