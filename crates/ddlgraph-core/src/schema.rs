mod constraint;
pub use constraint::{Constraint, ConstraintArg, ConstraintKind, ConstraintParams};

mod field;
pub use field::{Field, FieldArg, FieldParams};

mod handle;
pub use handle::SchemaRef;
use handle::Registry;

mod index;
pub use index::{Index, IndexArg, IndexKind, IndexParams};

mod names;
pub use names::{normalize_names, IntoNames};

mod table;
pub use table::{Table, TableArg, TableId, TableParams};

mod verify;

use crate::{Error, Result};

use std::{cell::RefCell, rc::Rc};

/// The registry of tables built during one translation run.
///
/// Table names are unique within a schema and compared case-sensitively.
/// Tables are kept in the order they were added.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schema {
    name: String,

    /// Name of the database flavor the schema was read from, if known.
    database: String,

    tables: Vec<Table>,

    /// Names claimed by the tables above. Tables reach this through their
    /// [`SchemaRef`] to guard renames.
    #[cfg_attr(feature = "serde", serde(skip))]
    registry: Rc<RefCell<Registry>>,
}

impl Schema {
    pub fn new() -> Schema {
        Schema::default()
    }

    pub fn named(name: impl Into<String>) -> Schema {
        Schema {
            name: name.into(),
            ..Schema::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn set_database(&mut self, database: impl Into<String>) {
        self.database = database.into();
    }

    /// Returns a non-owning handle to this schema.
    pub fn handle(&self) -> SchemaRef {
        SchemaRef::new(&self.registry)
    }

    /// Registers a table, either one built by the caller or one built from
    /// parameters.
    ///
    /// Fails without modifying the schema when the table has no name or the
    /// name is already taken.
    pub fn add_table(&mut self, table: impl Into<TableArg>) -> Result<&mut Table> {
        let mut table = match table.into() {
            TableArg::Existing(table) => table,
            TableArg::Params(params) => Table::from_params(params)?,
        };

        if table.name().is_empty() {
            return Err(Error::missing_name("table"));
        }

        {
            let mut registry = self.registry.borrow_mut();

            if registry.contains_key(table.name()) {
                return Err(Error::name_conflict(table.name()));
            }

            registry.insert(table.name().to_string(), table.id());
        }

        table.attach(self.handle());
        log::debug!("schema `{}`: added table `{}`", self.name, table.name());

        self.tables.push(table);
        let i = self.tables.len() - 1;
        Ok(&mut self.tables[i])
    }

    pub fn get_table(&self, name: &str) -> Result<&Table> {
        self.tables
            .iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| Error::not_found("table", name))
    }

    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .iter_mut()
            .find(|table| table.name() == name)
            .ok_or_else(|| Error::not_found("table", name))
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.registry.borrow().contains_key(name)
    }

    /// All tables, in the order they were added.
    pub fn get_tables(&self) -> Result<&[Table]> {
        if self.tables.is_empty() {
            return Err(Error::empty_schema());
        }

        Ok(&self.tables)
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(Table::name).collect()
    }

    /// Renames a registered table. Same rules as [`Table::set_name`].
    pub fn rename_table(&mut self, from: &str, to: impl Into<String>) -> Result<()> {
        self.get_table_mut(from)?.set_name(to)
    }

    /// Checks every table, then that every foreign key points at a table and
    /// fields that exist in this schema.
    pub fn is_valid(&self) -> Result<()> {
        let tables = self.get_tables()?;

        for table in tables {
            table.is_valid()?;
        }

        self.verify_foreign_keys()
    }

    /// Moves every table of `other` into this schema.
    ///
    /// All names are checked before anything moves; on conflict neither
    /// schema is modified.
    pub fn merge(&mut self, other: Schema) -> Result<()> {
        for table in &other.tables {
            if self.has_table(table.name()) {
                return Err(Error::name_conflict(table.name()));
            }
        }

        if self.database.is_empty() {
            self.database = other.database;
        }

        for table in other.tables {
            self.add_table(table)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_table_rejects_unnamed_table() {
        let mut schema = Schema::new();
        let err = schema.add_table(Table::default()).unwrap_err();

        assert!(err.is_missing_name());
        assert!(schema.get_tables().unwrap_err().is_empty_collection());
    }

    #[test]
    fn registry_follows_renames() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("orders")).unwrap();

        schema.rename_table("orders", "purchases").unwrap();

        assert!(schema.has_table("purchases"));
        assert!(!schema.has_table("orders"));
        assert!(schema.get_table("orders").unwrap_err().is_not_found());
    }

    #[test]
    fn renaming_to_own_name_is_allowed() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("orders")).unwrap();

        schema.rename_table("orders", "orders").unwrap();
        assert_eq!(schema.table_names(), ["orders"]);
    }

    #[test]
    fn merge_is_all_or_nothing() {
        let mut target = Schema::new();
        target.add_table(Table::new("users")).unwrap();

        let mut staged = Schema::new();
        staged.add_table(Table::new("orders")).unwrap();
        staged.add_table(Table::new("users")).unwrap();

        assert!(target.merge(staged).unwrap_err().is_name_conflict());
        assert_eq!(target.table_names(), ["users"]);
    }
}
