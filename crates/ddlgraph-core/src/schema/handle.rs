use super::TableId;

use indexmap::IndexMap;
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

/// Table names registered in a schema, mapped to the table holding each name.
pub(crate) type Registry = IndexMap<String, TableId>;

/// A non-owning handle from a table back to the schema it belongs to.
///
/// The handle only reaches the schema's name registry, which is all a table
/// needs to guard its own renames. It does not keep the schema alive.
#[derive(Clone, Default)]
pub struct SchemaRef {
    registry: Weak<RefCell<Registry>>,
}

impl SchemaRef {
    pub(crate) fn new(registry: &Rc<RefCell<Registry>>) -> SchemaRef {
        SchemaRef {
            registry: Rc::downgrade(registry),
        }
    }

    /// Returns `true` while the schema this handle points to is alive.
    pub fn is_live(&self) -> bool {
        self.registry.strong_count() > 0
    }

    /// Returns `true` if both handles point to the same schema.
    pub fn same_schema(&self, other: &SchemaRef) -> bool {
        self.registry.ptr_eq(&other.registry)
    }

    pub(crate) fn registry(&self) -> Option<Rc<RefCell<Registry>>> {
        self.registry.upgrade()
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_live() {
            fmt.write_str("SchemaRef(live)")
        } else {
            fmt.write_str("SchemaRef(dropped)")
        }
    }
}
