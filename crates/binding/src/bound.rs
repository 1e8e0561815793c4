use fieldmark_validator::{Describe, FieldError};

/// A decoded value together with its rule failures.
///
/// The value is kept even when `errors` is not empty, so handlers can echo
/// what the client sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<T> {
    pub value: T,
    pub errors: Vec<FieldError>,
}

impl<T> Bound<T> {
    /// Wraps a value that was not validated.
    #[must_use]
    pub fn unchecked(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    /// `true` when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (T, Vec<FieldError>) {
        (self.value, self.errors)
    }
}

impl<T: Describe> Bound<T> {
    /// Validates `value` against the rules declared on `T`.
    #[must_use]
    pub fn checked(value: T) -> Self {
        let errors = fieldmark_validator::validate(&value);
        Self { value, errors }
    }
}
