use super::Error;

/// Error when a connection reports a database vendor outside the supported
/// set, or one no adapter is registered for.
#[derive(Debug)]
pub(super) struct UnsupportedVendor {
    vendor: Box<str>,
}

impl std::error::Error for UnsupportedVendor {}

impl core::fmt::Display for UnsupportedVendor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported database vendor `{}`", self.vendor)
    }
}

impl Error {
    pub fn unsupported_vendor(vendor: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedVendor(UnsupportedVendor {
            vendor: vendor.into().into(),
        }))
    }

    pub fn is_unsupported_vendor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedVendor(_))
    }
}
