use super::Error;

/// Error when a field is added to a table that already has a field of the same
/// name.
#[derive(Debug)]
pub(super) struct DuplicateField {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DuplicateField {}

impl core::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "can't use field name `{}`: field already exists in table `{}`",
            self.field, self.table
        )
    }
}

impl Error {
    pub fn duplicate_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateField(DuplicateField {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    pub fn is_duplicate_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateField(_))
    }
}
