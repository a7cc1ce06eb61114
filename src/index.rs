//! Contains the numeric side of an enumeration.

/// The registered numeric indices of an enumeration, in registration order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Index<N> {
    pub(crate) id: String,
    pub(crate) type_name: &'static str,
    pub(crate) undefined: N,
    pub(crate) values: Vec<N>
}

impl<N: crate::Numeric> Index<N> {
    pub(crate) fn new(id: &str, values: Vec<N>) -> Self {
        Self {
            id: id.into(),
            type_name: core::any::type_name::<N>(),
            undefined: N::default(),
            values
        }
    }

    /// The identifier the enumeration was registered with.
    pub fn id(&self) -> &str { &self.id }

    /// The fully qualified name of `N`.
    pub fn type_name(&self) -> &'static str { self.type_name }

    /// The index returned by lookups of unknown names.
    pub fn undefined(&self) -> N { self.undefined }

    /// Returns `true` if `index` equals `target` or any of `or`.
    pub fn is(&self, index: N, target: N, or: &[N]) -> bool {
        crate::is(&index, &target, or)
    }

    pub fn list(&self) -> &[N] { &self.values }

    pub fn contains(&self, index: N) -> bool {
        self.values.contains(&index)
    }

    pub fn validate(&self, index: N) -> Result<(), crate::Error> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(crate::Error::invalid_value(&self.id, &self.values, index))
        }
    }
}

impl<N: crate::Numeric> crate::Enumerator<N> for Index<N> {
    fn list(&self) -> &[N] { Index::list(self) }

    fn validate(&self, value: &N) -> Result<(), crate::Error> {
        Index::validate(self, *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> Index<i16> {
        Index::new("test.index", vec![1, 2, -3])
    }

    #[test]
    fn accessors() {
        let index = index();
        assert_eq!(index.id(), "test.index");
        assert_eq!(index.type_name(), "i16");
        assert_eq!(index.undefined(), 0);
        assert_eq!(index.list(), &[1, 2, -3]);
    }

    #[test]
    fn is() {
        let index = index();
        assert!(index.is(2, 2, &[]));
        assert!(index.is(-3, 1, &[2, -3]));
        assert!(!index.is(4, 1, &[2, -3]));
    }

    #[test]
    fn validate() {
        let index = index();
        assert_eq!(index.validate(-3), Ok(()));
        assert_eq!(
            index.validate(0).unwrap_err().to_string(),
            "[Enum] invalid enum value for test.index: must be one of [1, 2, -3], got 0"
        );
    }
}
