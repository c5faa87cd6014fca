use super::TableId;
use crate::{Error, Result};

use indexmap::IndexMap;

/// A column of a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Name of the field, unique within its table.
    name: String,

    /// Database type name as reported by the source (`"varchar"`, `"int"`, ...).
    pub data_type: String,

    /// Size arguments of the type, e.g. `[10, 2]` for `decimal(10,2)`.
    pub size: Vec<u32>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Default value expression, verbatim.
    pub default_value: Option<String>,

    pub auto_increment: bool,

    pub comments: Vec<String>,

    /// Vendor-specific attributes (`"unsigned"`, `"character set"`, ...).
    pub extra: IndexMap<String, String>,

    /// Position of the field within its table. Assigned when the field is
    /// added.
    order: usize,

    /// The table this field belongs to. Set when the field is added.
    table: Option<TableId>,
}

/// Construction parameters for a [`Field`].
#[derive(Debug, Clone)]
pub struct FieldParams {
    pub name: String,
    pub data_type: String,
    pub size: Vec<u32>,
    pub nullable: bool,
    pub default_value: Option<String>,
    pub auto_increment: bool,
    pub comments: Vec<String>,
    pub extra: IndexMap<String, String>,
}

/// Argument accepted by [`Table::add_field`](super::Table::add_field).
#[derive(Debug)]
pub enum FieldArg {
    /// A field built by the caller; the table takes ownership of it.
    Existing(Field),

    /// Parameters the table builds the field from.
    Params(FieldParams),
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            data_type: data_type.into(),
            size: vec![],
            nullable: true,
            default_value: None,
            auto_increment: false,
            comments: vec![],
            extra: IndexMap::new(),
            order: 0,
            table: None,
        }
    }

    pub fn from_params(params: FieldParams) -> Result<Field> {
        if params.name.is_empty() {
            return Err(Error::missing_name("field"));
        }

        Ok(Field {
            name: params.name,
            data_type: params.data_type,
            size: params.size,
            nullable: params.nullable,
            default_value: params.default_value,
            auto_increment: params.auto_increment,
            comments: params.comments,
            extra: params.extra,
            order: 0,
            table: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn table(&self) -> Option<TableId> {
        self.table
    }

    /// Renders the type with its size arguments, e.g. `decimal(10,2)`.
    pub fn full_data_type(&self) -> String {
        if self.size.is_empty() {
            return self.data_type.clone();
        }

        let size = self
            .size
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({size})", self.data_type)
    }

    pub fn is_valid(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::child_invalid("field", "no field name"));
        }

        if self.table.is_none() {
            return Err(Error::child_invalid(
                "field",
                format!("field `{}` is not attached to a table", self.name),
            ));
        }

        if self.auto_increment && self.default_value.is_some() {
            return Err(Error::child_invalid(
                "field",
                format!(
                    "field `{}` is auto-increment and also has a default value",
                    self.name
                ),
            ));
        }

        Ok(())
    }

    pub(super) fn attach(&mut self, table: TableId, order: usize) {
        self.table = Some(table);
        self.order = order;
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        FieldParams {
            name: String::new(),
            data_type: String::new(),
            size: vec![],
            nullable: true,
            default_value: None,
            auto_increment: false,
            comments: vec![],
            extra: IndexMap::new(),
        }
    }
}

impl From<Field> for FieldArg {
    fn from(value: Field) -> Self {
        FieldArg::Existing(value)
    }
}

impl From<FieldParams> for FieldArg {
    fn from(value: FieldParams) -> Self {
        FieldArg::Params(value)
    }
}
