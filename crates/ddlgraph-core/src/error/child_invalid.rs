use super::Error;

/// Error reported by a field, index or constraint validating itself.
///
/// The table validity cascade returns these unchanged, so the caller sees
/// which child failed and why.
#[derive(Debug)]
pub(super) struct ChildInvalid {
    child: &'static str,
    message: Box<str>,
}

impl std::error::Error for ChildInvalid {}

impl core::fmt::Display for ChildInvalid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid {}: {}", self.child, self.message)
    }
}

impl Error {
    /// Creates a child validity error. `child` names the kind of entity
    /// (`"field"`, `"index"`, `"constraint"`).
    pub fn child_invalid(child: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ChildInvalid(ChildInvalid {
            child,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error was reported by a child entity.
    pub fn is_child_invalid(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ChildInvalid(_))
    }

    /// The kind of child that reported this error, if it is a child validity
    /// error.
    pub fn child_kind(&self) -> Option<&'static str> {
        match self.kind() {
            super::ErrorKind::ChildInvalid(err) => Some(err.child),
            _ => None,
        }
    }
}
