use super::Error;

#[derive(Debug)]
pub(super) struct MissingConnection;

impl std::error::Error for MissingConnection {}

impl core::fmt::Display for MissingConnection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no connection and no connection parameters supplied")
    }
}

impl Error {
    /// Creates an error for an introspection run that was given neither a
    /// live connection nor the parameters to open one.
    pub fn missing_connection() -> Error {
        Error::from(super::ErrorKind::MissingConnection(MissingConnection))
    }

    pub fn is_missing_connection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingConnection(_))
    }
}
