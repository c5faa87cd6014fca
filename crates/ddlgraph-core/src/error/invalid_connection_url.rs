use super::Error;

/// Error when introspection connection parameters carry a URL that cannot be
/// parsed or that names no database vendor.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    url: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL `{}`: {}", self.url, self.reason)
    }
}

impl Error {
    pub fn invalid_connection_url(url: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            url: url.into().into(),
            reason: reason.into().into(),
        }))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
