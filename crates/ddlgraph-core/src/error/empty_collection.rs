use super::Error;

/// Reported when a collection accessor finds nothing to return.
///
/// This is not necessarily an invalid state: a table without indices is
/// perfectly valid. Callers distinguish it from hard failures with
/// [`Error::is_empty_collection`].
#[derive(Debug)]
pub(super) struct EmptyCollection {
    owner: Box<str>,
    items: &'static str,
}

impl std::error::Error for EmptyCollection {}

impl core::fmt::Display for EmptyCollection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} has no {}", self.owner, self.items)
    }
}

impl Error {
    /// Creates an empty collection error for one of a table's child
    /// collections (`"fields"`, `"indices"`, `"constraints"`).
    pub fn empty_collection(table: &str, items: &'static str) -> Error {
        Error::from(super::ErrorKind::EmptyCollection(EmptyCollection {
            owner: format!("table `{table}`").into(),
            items,
        }))
    }

    /// Creates an empty collection error for a schema without tables.
    pub fn empty_schema() -> Error {
        Error::from(super::ErrorKind::EmptyCollection(EmptyCollection {
            owner: "schema".into(),
            items: "tables",
        }))
    }

    /// Returns `true` if this error reports an empty collection.
    pub fn is_empty_collection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyCollection(_))
    }
}
