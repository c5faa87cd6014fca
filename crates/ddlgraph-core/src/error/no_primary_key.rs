use super::Error;

#[derive(Debug)]
pub(super) struct NoPrimaryKey {
    table: Box<str>,
}

impl std::error::Error for NoPrimaryKey {}

impl core::fmt::Display for NoPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` has no primary key", self.table)
    }
}

impl Error {
    pub fn no_primary_key(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoPrimaryKey(NoPrimaryKey {
            table: table.into().into(),
        }))
    }

    pub fn is_no_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoPrimaryKey(_))
    }
}
