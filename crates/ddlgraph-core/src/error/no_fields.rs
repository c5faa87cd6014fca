use super::Error;

/// Error when a table is validated without any fields.
#[derive(Debug)]
pub(super) struct NoFields {
    table: Box<str>,
}

impl std::error::Error for NoFields {}

impl core::fmt::Display for NoFields {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` has no fields", self.table)
    }
}

impl Error {
    pub fn no_fields(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoFields(NoFields {
            table: table.into().into(),
        }))
    }

    pub fn is_no_fields(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoFields(_))
    }
}
