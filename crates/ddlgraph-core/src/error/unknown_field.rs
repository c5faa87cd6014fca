use super::Error;

/// Error when a field name references a field the table does not have.
#[derive(Debug)]
pub(super) struct UnknownField {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UnknownField {}

impl core::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` does not exist in table `{}`",
            self.field, self.table
        )
    }
}

impl Error {
    pub fn unknown_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownField {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}
