use super::{IntoNames, Table, TableId};
use crate::{Error, Result};

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Index {
    /// Index name. May be empty, in which case the producer picks one.
    pub name: String,

    pub kind: IndexKind,

    /// Names of the indexed fields, in index order.
    pub fields: Vec<String>,

    /// Vendor-specific index options.
    pub options: Vec<String>,

    /// The table being indexed
    table: Option<TableId>,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IndexKind {
    #[default]
    Normal,
    Unique,
    FullText,
    Spatial,
}

/// Construction parameters for an [`Index`], as a source adapter reports
/// them.
#[derive(Debug, Clone, Default)]
pub struct IndexParams {
    pub name: String,

    /// Kind name, matched case-insensitively. Empty means `NORMAL`.
    pub kind: String,

    /// Field names; each entry may itself be comma-separated.
    pub fields: Vec<String>,

    pub options: Vec<String>,
}

/// Argument accepted by [`Table::add_index`](super::Table::add_index).
#[derive(Debug)]
pub enum IndexArg {
    Existing(Index),
    Params(IndexParams),
}

impl Index {
    pub fn new(kind: IndexKind, fields: impl IntoNames) -> Index {
        Index {
            name: String::new(),
            kind,
            fields: fields.into_names(),
            options: vec![],
            table: None,
        }
    }

    pub fn named(name: impl Into<String>, kind: IndexKind, fields: impl IntoNames) -> Index {
        Index {
            name: name.into(),
            ..Index::new(kind, fields)
        }
    }

    pub fn from_params(params: IndexParams) -> Result<Index> {
        let kind = if params.kind.trim().is_empty() {
            IndexKind::Normal
        } else {
            params.kind.parse()?
        };

        Ok(Index {
            name: params.name,
            kind,
            fields: params.fields.into_names(),
            options: params.options,
            table: None,
        })
    }

    pub fn table(&self) -> Option<TableId> {
        self.table
    }

    pub fn is_unique(&self) -> bool {
        self.kind == IndexKind::Unique
    }

    /// Checks the index against the table that owns it.
    pub fn is_valid(&self, table: &Table) -> Result<()> {
        if self.table != Some(table.id()) {
            return Err(Error::child_invalid(
                "index",
                format!(
                    "index {} is not attached to table `{}`",
                    self.display_name(),
                    table.name()
                ),
            ));
        }

        if self.fields.is_empty() {
            return Err(Error::child_invalid(
                "index",
                format!("index {} has no fields", self.display_name()),
            ));
        }

        for field in &self.fields {
            if !table.has_field(field) {
                return Err(Error::child_invalid(
                    "index",
                    format!(
                        "field `{field}` of index {} does not exist in table `{}`",
                        self.display_name(),
                        table.name()
                    ),
                ));
            }
        }

        Ok(())
    }

    pub(super) fn attach(&mut self, table: TableId) {
        self.table = Some(table);
    }

    fn display_name(&self) -> String {
        if self.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            format!("`{}`", self.name)
        }
    }
}

impl FromStr for IndexKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace(['_', ' '], "");

        match normalized.as_str() {
            "NORMAL" => Ok(IndexKind::Normal),
            "UNIQUE" => Ok(IndexKind::Unique),
            "FULLTEXT" => Ok(IndexKind::FullText),
            "SPATIAL" => Ok(IndexKind::Spatial),
            _ => Err(Error::type_error("an index kind", format!("`{s}`"))),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexKind::Normal => "NORMAL",
            IndexKind::Unique => "UNIQUE",
            IndexKind::FullText => "FULLTEXT",
            IndexKind::Spatial => "SPATIAL",
        })
    }
}

impl From<Index> for IndexArg {
    fn from(value: Index) -> Self {
        IndexArg::Existing(value)
    }
}

impl From<IndexParams> for IndexArg {
    fn from(value: IndexParams) -> Self {
        IndexArg::Params(value)
    }
}
