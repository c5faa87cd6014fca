use super::Error;

/// Error when a value does not conform to the capability an operation
/// expects.
///
/// This occurs when:
/// - A schema handle no longer refers to a live schema
/// - A registered table is pointed at a schema other than its own
/// - An index or constraint kind is given as a string that names no known kind
#[derive(Debug)]
pub(super) struct TypeError {
    expected: &'static str,
    found: Box<str>,
}

impl std::error::Error for TypeError {}

impl core::fmt::Display for TypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl Error {
    /// Creates a type error describing what was expected and what was
    /// supplied instead.
    pub fn type_error(expected: &'static str, found: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeError(TypeError {
            expected,
            found: found.into().into(),
        }))
    }

    /// Returns `true` if this error is a type error.
    pub fn is_type_error(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeError(_))
    }
}
