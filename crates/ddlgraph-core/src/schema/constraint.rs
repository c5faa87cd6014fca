use super::{IntoNames, Table, TableId};
use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// A named rule over one or more fields of a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Constraint {
    /// Constraint name. May be empty.
    pub name: String,

    kind: ConstraintKind,

    /// Constrained field names, in declaration order.
    fields: Vec<String>,

    /// Table referenced by a foreign key.
    pub reference_table: String,

    /// Fields of `reference_table` referenced by a foreign key. When empty, the
    /// referenced table's primary key is implied.
    pub reference_fields: Vec<String>,

    pub on_delete: String,

    pub on_update: String,

    pub match_type: String,

    pub deferrable: bool,

    /// Expression of a check constraint, verbatim.
    pub expression: String,

    pub options: Vec<String>,

    table: Option<TableId>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

/// Construction parameters for a [`Constraint`], as a source adapter reports
/// them.
#[derive(Debug, Clone)]
pub struct ConstraintParams {
    pub name: String,

    /// Kind name (`"PRIMARY KEY"`, `"foreign_key"`, ...), matched
    /// case-insensitively.
    pub kind: String,

    /// Field names; each entry may itself be comma-separated.
    pub fields: Vec<String>,

    pub reference_table: String,
    pub reference_fields: Vec<String>,
    pub on_delete: String,
    pub on_update: String,
    pub match_type: String,
    pub deferrable: bool,
    pub expression: String,
    pub options: Vec<String>,
}

/// Argument accepted by [`Table::add_constraint`](super::Table::add_constraint).
#[derive(Debug)]
pub enum ConstraintArg {
    Existing(Constraint),
    Params(ConstraintParams),
}

impl Constraint {
    pub fn new(kind: ConstraintKind, fields: impl IntoNames) -> Constraint {
        Constraint {
            name: String::new(),
            kind,
            fields: fields.into_names(),
            reference_table: String::new(),
            reference_fields: vec![],
            on_delete: String::new(),
            on_update: String::new(),
            match_type: String::new(),
            deferrable: true,
            expression: String::new(),
            options: vec![],
            table: None,
        }
    }

    pub fn primary_key(fields: impl IntoNames) -> Constraint {
        Constraint::new(ConstraintKind::PrimaryKey, fields)
    }

    pub fn unique(fields: impl IntoNames) -> Constraint {
        Constraint::new(ConstraintKind::Unique, fields)
    }

    pub fn foreign_key(
        fields: impl IntoNames,
        reference_table: impl Into<String>,
        reference_fields: impl IntoNames,
    ) -> Constraint {
        Constraint {
            reference_table: reference_table.into(),
            reference_fields: reference_fields.into_names(),
            ..Constraint::new(ConstraintKind::ForeignKey, fields)
        }
    }

    pub fn check(expression: impl Into<String>) -> Constraint {
        Constraint {
            expression: expression.into(),
            ..Constraint::new(ConstraintKind::Check, Vec::<String>::new())
        }
    }

    pub fn from_params(params: ConstraintParams) -> Result<Constraint> {
        let kind = params.kind.parse()?;

        Ok(Constraint {
            name: params.name,
            kind,
            fields: params.fields.into_names(),
            reference_table: params.reference_table,
            reference_fields: params.reference_fields.into_names(),
            on_delete: params.on_delete,
            on_update: params.on_update,
            match_type: params.match_type,
            deferrable: params.deferrable,
            expression: params.expression,
            options: params.options,
            table: None,
        })
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Appends field names. Names already present are appended again.
    pub fn add_fields(&mut self, fields: impl IntoNames) -> &[String] {
        self.fields.extend(fields.into_names());
        &self.fields
    }

    pub fn table(&self) -> Option<TableId> {
        self.table
    }

    pub fn is_primary_key(&self) -> bool {
        self.kind == ConstraintKind::PrimaryKey
    }

    pub fn is_foreign_key(&self) -> bool {
        self.kind == ConstraintKind::ForeignKey
    }

    /// Checks the constraint against the table that owns it.
    ///
    /// Foreign key targets are checked by [`Schema::is_valid`], which can see
    /// the referenced table.
    ///
    /// [`Schema::is_valid`]: crate::Schema::is_valid
    pub fn is_valid(&self, table: &Table) -> Result<()> {
        if self.table != Some(table.id()) {
            return Err(self.invalid(format!("not attached to table `{}`", table.name())));
        }

        match self.kind {
            ConstraintKind::Check => {
                if self.expression.trim().is_empty() {
                    return Err(self.invalid("no expression"));
                }
            }
            ConstraintKind::ForeignKey if self.reference_table.is_empty() => {
                return Err(self.invalid("no reference table"));
            }
            _ => {}
        }

        if self.kind != ConstraintKind::Check && self.fields.is_empty() {
            return Err(self.invalid("no fields"));
        }

        for field in &self.fields {
            if !table.has_field(field) {
                return Err(self.invalid(format!(
                    "field `{field}` does not exist in table `{}`",
                    table.name()
                )));
            }
        }

        Ok(())
    }

    pub(super) fn attach(&mut self, table: TableId) {
        self.table = Some(table);
    }

    pub(super) fn invalid(&self, reason: impl fmt::Display) -> Error {
        let name = if self.name.is_empty() {
            String::new()
        } else {
            format!(" `{}`", self.name)
        };

        Error::child_invalid("constraint", format!("{}{name}: {reason}", self.kind))
    }
}

impl FromStr for ConstraintKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_ascii_uppercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "PRIMARY KEY" => Ok(ConstraintKind::PrimaryKey),
            "UNIQUE" => Ok(ConstraintKind::Unique),
            "FOREIGN KEY" => Ok(ConstraintKind::ForeignKey),
            "CHECK" => Ok(ConstraintKind::Check),
            "NOT NULL" => Ok(ConstraintKind::NotNull),
            _ => Err(Error::type_error("a constraint kind", format!("`{s}`"))),
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintKind::PrimaryKey => "PRIMARY KEY",
            ConstraintKind::Unique => "UNIQUE",
            ConstraintKind::ForeignKey => "FOREIGN KEY",
            ConstraintKind::Check => "CHECK",
            ConstraintKind::NotNull => "NOT NULL",
        })
    }
}

impl Default for ConstraintParams {
    fn default() -> Self {
        ConstraintParams {
            name: String::new(),
            kind: String::new(),
            fields: vec![],
            reference_table: String::new(),
            reference_fields: vec![],
            on_delete: String::new(),
            on_update: String::new(),
            match_type: String::new(),
            deferrable: true,
            expression: String::new(),
            options: vec![],
        }
    }
}

impl From<Constraint> for ConstraintArg {
    fn from(value: Constraint) -> Self {
        ConstraintArg::Existing(value)
    }
}

impl From<ConstraintParams> for ConstraintArg {
    fn from(value: ConstraintParams) -> Self {
        ConstraintArg::Params(value)
    }
}
