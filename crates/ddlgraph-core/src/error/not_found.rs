use super::Error;

/// Error when a lookup by exact name finds nothing.
#[derive(Debug)]
pub(super) struct NotFound {
    entity: &'static str,
    name: Box<str>,
}

impl std::error::Error for NotFound {}

impl core::fmt::Display for NotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} `{}` not found", self.entity, self.name)
    }
}

impl Error {
    pub fn not_found(entity: &'static str, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFound {
            entity,
            name: name.into().into(),
        }))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }
}
