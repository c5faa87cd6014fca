use super::{
    Constraint, ConstraintArg, ConstraintKind, ConstraintParams, Field, FieldArg, Index, IndexArg,
    IntoNames, Schema, SchemaRef,
};
use crate::{Error, Result};

use indexmap::{map::Entry, IndexMap};
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// A database table and everything declared on it.
///
/// The table owns its fields, indices and constraints. It keeps a
/// non-owning [`SchemaRef`] to the schema it belongs to, which it uses to
/// reject renames that would collide with another table.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    /// Uniquely identifies a table
    id: TableId,

    /// Name of the table
    name: String,

    #[cfg_attr(feature = "serde", serde(skip))]
    schema: Option<SchemaRef>,

    /// The table's fields, keyed by name
    fields: IndexMap<String, Field>,

    /// Order value handed to the next field added.
    next_order: usize,

    indices: Vec<Index>,

    constraints: Vec<Constraint>,

    /// Vendor-specific table options (storage engine, charset, ...)
    options: Vec<String>,

    comments: Vec<String>,
}

/// Uniquely identifies a table for the life of the process.
///
/// Fields, indices and constraints refer back to their table by id.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableId(u64);

/// Construction parameters for a [`Table`].
#[derive(Debug, Clone, Default)]
pub struct TableParams {
    pub name: String,
    pub options: Vec<String>,
    pub comments: Vec<String>,
}

/// Argument accepted by [`Schema::add_table`].
#[derive(Debug)]
pub enum TableArg {
    Existing(Table),
    Params(TableParams),
}

impl Table {
    /// Creates a table that does not belong to any schema.
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            ..Table::default()
        }
    }

    /// Creates a table pointing back to `schema` and names it.
    ///
    /// Fails if `schema` already has a table called `name`. The new table is
    /// not registered; pass it to [`Schema::add_table`] for that.
    pub fn new_in(schema: &Schema, name: impl Into<String>) -> Result<Table> {
        let mut table = Table::default();
        table.set_schema(schema.handle())?;
        table.set_name(name)?;
        Ok(table)
    }

    pub fn from_params(params: TableParams) -> Result<Table> {
        let mut table = Table::default();
        table.set_name(params.name)?;
        table.add_options(params.options);
        table.comments = params.comments;
        Ok(table)
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    /// The table name, or `""` if it has never been set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the table.
    ///
    /// When the table belongs to a live schema and another table there is
    /// already called `name`, the rename is rejected and the current name is
    /// kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::missing_name("table"));
        }

        if let Some(registry) = self.schema.as_ref().and_then(SchemaRef::registry) {
            let mut registry = registry.borrow_mut();

            if let Some(owner) = registry.get(&name) {
                if *owner != self.id {
                    log::debug!("rejecting rename of `{}` to `{name}`", self.name);
                    return Err(Error::name_conflict(name));
                }
            }

            if registry.get(&self.name) == Some(&self.id) {
                registry.shift_remove(&self.name);
                registry.insert(name.clone(), self.id);
            }
        }

        self.name = name;
        Ok(())
    }

    pub fn schema(&self) -> Option<&SchemaRef> {
        self.schema.as_ref()
    }

    /// Points the table back at a schema.
    ///
    /// A table registered in a live schema stays bound to it; pointing it at
    /// another schema fails and keeps the current handle.
    pub fn set_schema(&mut self, schema: SchemaRef) -> Result<()> {
        if !schema.is_live() {
            return Err(Error::type_error(
                "a schema",
                "a handle to a schema that has been dropped",
            ));
        }

        if let Some(current) = &self.schema {
            if !current.same_schema(&schema) && self.is_registered_in(current) {
                return Err(Error::type_error(
                    "a handle to the schema the table is registered in",
                    format!("a handle to a different schema for table `{}`", self.name),
                ));
            }
        }

        self.schema = Some(schema);
        Ok(())
    }

    fn is_registered_in(&self, schema: &SchemaRef) -> bool {
        schema
            .registry()
            .is_some_and(|registry| registry.borrow().get(&self.name) == Some(&self.id))
    }

    /// Adds a field, either one built by the caller or one built from
    /// parameters.
    ///
    /// Fails without modifying the table when the name is empty or already
    /// used by another field.
    pub fn add_field(&mut self, field: impl Into<FieldArg>) -> Result<&Field> {
        let mut field = match field.into() {
            FieldArg::Existing(field) => field,
            FieldArg::Params(params) => Field::from_params(params)?,
        };

        if field.name().is_empty() {
            return Err(Error::missing_name("field"));
        }

        match self.fields.entry(field.name().to_string()) {
            Entry::Occupied(entry) => Err(Error::duplicate_field(&self.name, entry.key())),
            Entry::Vacant(entry) => {
                field.attach(self.id, self.next_order);
                self.next_order += 1;

                log::debug!("table `{}`: added field `{}`", self.name, entry.key());
                Ok(&*entry.insert(field))
            }
        }
    }

    pub fn get_field(&self, name: &str) -> Result<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| Error::not_found("field", name))
    }

    pub fn get_field_mut(&mut self, name: &str) -> Result<&mut Field> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| Error::not_found("field", name))
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All fields, in the order they were added.
    pub fn get_fields(&self) -> Result<Vec<&Field>> {
        if self.fields.is_empty() {
            return Err(Error::empty_collection(&self.name, "fields"));
        }

        let mut fields: Vec<_> = self.fields.values().collect();
        fields.sort_by_key(|field| field.order());
        Ok(fields)
    }

    /// Field names in field order. Empty if the table has no fields.
    pub fn field_names(&self) -> Vec<&str> {
        self.get_fields()
            .map(|fields| fields.into_iter().map(Field::name).collect())
            .unwrap_or_default()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn add_index(&mut self, index: impl Into<IndexArg>) -> Result<&Index> {
        let mut index = match index.into() {
            IndexArg::Existing(index) => index,
            IndexArg::Params(params) => Index::from_params(params)?,
        };

        index.attach(self.id);
        self.indices.push(index);

        let i = self.indices.len() - 1;
        Ok(&self.indices[i])
    }

    /// All indices, in the order they were added.
    pub fn get_indices(&self) -> Result<&[Index]> {
        if self.indices.is_empty() {
            return Err(Error::empty_collection(&self.name, "indices"));
        }

        Ok(&self.indices)
    }

    /// Adds a constraint.
    ///
    /// A table has at most one primary key: adding a primary key constraint
    /// when one exists appends its fields to the existing one, which is
    /// returned.
    pub fn add_constraint(&mut self, constraint: impl Into<ConstraintArg>) -> Result<&Constraint> {
        let mut constraint = match constraint.into() {
            ConstraintArg::Existing(constraint) => constraint,
            ConstraintArg::Params(params) => Constraint::from_params(params)?,
        };

        if constraint.is_primary_key() {
            if let Some(i) = self.constraints.iter().position(Constraint::is_primary_key) {
                log::debug!(
                    "table `{}`: merging primary key fields {:?}",
                    self.name,
                    constraint.fields()
                );
                self.constraints[i].add_fields(constraint.fields().to_vec());
                return Ok(&self.constraints[i]);
            }
        }

        constraint.attach(self.id);
        self.constraints.push(constraint);

        let i = self.constraints.len() - 1;
        Ok(&self.constraints[i])
    }

    /// All constraints, in the order they were added.
    pub fn get_constraints(&self) -> Result<&[Constraint]> {
        if self.constraints.is_empty() {
            return Err(Error::empty_collection(&self.name, "constraints"));
        }

        Ok(&self.constraints)
    }

    /// Declares primary key fields and returns the primary key constraint.
    ///
    /// Every named field must already exist. If the table has a primary key
    /// the names are appended to it as given, duplicates included; otherwise
    /// a new primary key constraint is created. With no names this only looks
    /// up the existing primary key.
    pub fn set_primary_key(&mut self, fields: impl IntoNames) -> Result<&Constraint> {
        let fields = fields.into_names();

        if !fields.is_empty() {
            for name in &fields {
                if self.get_field(name).is_err() {
                    return Err(Error::unknown_field(&self.name, name));
                }
            }

            match self.constraints.iter().position(Constraint::is_primary_key) {
                Some(i) => {
                    self.constraints[i].add_fields(fields);
                }
                None => {
                    self.add_constraint(ConstraintParams {
                        kind: ConstraintKind::PrimaryKey.to_string(),
                        fields,
                        ..Default::default()
                    })?;
                }
            }
        }

        self.primary_key()
    }

    /// The primary key constraint.
    pub fn primary_key(&self) -> Result<&Constraint> {
        self.constraints
            .iter()
            .find(|constraint| constraint.is_primary_key())
            .ok_or_else(|| Error::no_primary_key(&self.name))
    }

    /// Returns `true` if `field` is part of the primary key.
    pub fn is_primary_key_field(&self, field: &str) -> bool {
        self.primary_key()
            .map(|pk| pk.fields().iter().any(|name| name == field))
            .unwrap_or(false)
    }

    /// Appends table options and returns all options set so far.
    pub fn add_options(&mut self, options: impl IntoNames) -> &[String] {
        self.options.extend(options.into_names());
        &self.options
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Checks the table and then every field, index and constraint on it, in
    /// that order. The first failure is returned as reported by the child.
    pub fn is_valid(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::missing_name("table"));
        }

        let Ok(fields) = self.get_fields() else {
            return Err(Error::no_fields(&self.name));
        };

        for field in fields {
            field.is_valid()?;
        }

        for index in &self.indices {
            index.is_valid(self)?;
        }

        for constraint in &self.constraints {
            constraint.is_valid(self)?;
        }

        Ok(())
    }

    pub(super) fn attach(&mut self, schema: SchemaRef) {
        self.schema = Some(schema);
    }
}

impl Default for Table {
    fn default() -> Self {
        Table {
            id: TableId::next(),
            name: String::new(),
            schema: None,
            fields: IndexMap::new(),
            next_order: 1,
            indices: vec![],
            constraints: vec![],
            options: vec![],
            comments: vec![],
        }
    }
}

impl TableId {
    fn next() -> TableId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        TableId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}

impl From<Table> for TableArg {
    fn from(value: Table) -> Self {
        TableArg::Existing(value)
    }
}

impl From<TableParams> for TableArg {
    fn from(value: TableParams) -> Self {
        TableArg::Params(value)
    }
}
