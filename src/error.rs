//! Contains the error type shared by the enumeration types and generated code.

/// Errors returned while registering an enumeration or validating one of its values.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The enumeration could not be registered.
    #[error("[Enum] failed to register {id:?}: {reason}")]
    FailedToRegister { id: String, reason: &'static str },

    /// The value is not one of the registered values of the enumeration.
    #[error("[Enum] invalid enum value for {id}: must be one of {expected}, got {got}")]
    InvalidValue { id: String, expected: String, got: String },
}

impl Error {
    pub fn failed_to_register(id: &str, reason: &'static str) -> Self {
        Self::FailedToRegister { id: id.into(), reason }
    }

    /// Used by generated `validate` implementations.
    pub fn invalid_value<E: core::fmt::Debug, G: core::fmt::Debug>(
        id: &str, expected: &[E], got: G
    ) -> Self {
        Self::InvalidValue {
            id: id.into(),
            expected: format!("{:?}", expected),
            got: format!("{:?}", got)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_to_register() {
        assert_eq!(
            Error::failed_to_register("traffic.color", "id is required!").to_string(),
            "[Enum] failed to register \"traffic.color\": id is required!"
        );
    }

    #[test]
    fn invalid_value() {
        assert_eq!(
            Error::invalid_value("traffic.color", &[1, 2, 3], 7).to_string(),
            "[Enum] invalid enum value for traffic.color: must be one of [1, 2, 3], got 7"
        );

        assert_eq!(
            Error::invalid_value("traffic.light", &["Off", "On"], "off").to_string(),
            "[Enum] invalid enum value for traffic.light: must be one of [\"Off\", \"On\"], got \"off\""
        );
    }
}
