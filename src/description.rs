//! Contains the symbolic side of an enumeration.

/// The registered names of an enumeration, in registration order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Description<S> {
    pub(crate) id: String,
    pub(crate) type_name: &'static str,
    pub(crate) undefined: S,
    pub(crate) values: Vec<S>
}

impl<S: crate::Name> Description<S> {
    pub(crate) fn new(id: &str, values: Vec<S>) -> Self {
        Self {
            id: id.into(),
            type_name: core::any::type_name::<S>(),
            undefined: S::default(),
            values
        }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn type_name(&self) -> &'static str { self.type_name }

    /// The name returned by lookups of unknown indices.
    pub fn undefined(&self) -> &S { &self.undefined }

    /// Returns `true` if `name` equals `target` or any of `or`.
    pub fn is(&self, name: &S, target: &S, or: &[S]) -> bool {
        crate::is(name, target, or)
    }

    pub fn list(&self) -> &[S] { &self.values }

    pub fn contains(&self, name: &S) -> bool {
        self.values.contains(name)
    }

    pub fn validate(&self, name: &S) -> Result<(), crate::Error> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(crate::Error::invalid_value(&self.id, &self.values, name))
        }
    }
}

impl<S: crate::Name> crate::Enumerator<S> for Description<S> {
    fn list(&self) -> &[S] { Description::list(self) }

    fn validate(&self, value: &S) -> Result<(), crate::Error> {
        Description::validate(self, value)
    }
}
