use super::Error;

/// Error when a table name is already registered in the schema by another
/// table.
///
/// Raised by table renames and by schema registration. The rejected operation
/// leaves both the table and the schema untouched.
#[derive(Debug)]
pub(super) struct NameConflict {
    name: Box<str>,
}

impl std::error::Error for NameConflict {}

impl core::fmt::Display for NameConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "can't use table name `{}`: table exists", self.name)
    }
}

impl Error {
    /// Creates a name conflict error for the contested table name.
    pub fn name_conflict(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NameConflict(NameConflict {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a table name conflict.
    pub fn is_name_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NameConflict(_))
    }
}
