use super::Error;

/// Error when an entity that requires a name has none.
#[derive(Debug)]
pub(super) struct MissingName {
    entity: &'static str,
}

impl std::error::Error for MissingName {}

impl core::fmt::Display for MissingName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no {} name", self.entity)
    }
}

impl Error {
    /// Creates a missing name error for the given kind of entity (`"table"`,
    /// `"field"`, ...).
    pub fn missing_name(entity: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingName(MissingName { entity }))
    }

    /// Returns `true` if this error is a missing name error.
    pub fn is_missing_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingName(_))
    }
}
