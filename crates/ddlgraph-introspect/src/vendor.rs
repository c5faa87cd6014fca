use ddlgraph_core::{Error, Result};

use std::{fmt, str::FromStr};

/// Database vendors an introspection adapter can be registered for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Vendor {
    DB2,
    MySQL,
    Oracle,
    Pg,
    SQLite,
    Sybase,
}

impl Vendor {
    pub const ALL: [Vendor; 6] = [
        Vendor::DB2,
        Vendor::MySQL,
        Vendor::Oracle,
        Vendor::Pg,
        Vendor::SQLite,
        Vendor::Sybase,
    ];

    /// Canonical driver name, as connections report it.
    pub fn driver_name(self) -> &'static str {
        match self {
            Vendor::DB2 => "DB2",
            Vendor::MySQL => "mysql",
            Vendor::Oracle => "Oracle",
            Vendor::Pg => "Pg",
            Vendor::SQLite => "SQLite",
            Vendor::Sybase => "Sybase",
        }
    }

    /// Resolves a driver name reported by a connection. The match is exact
    /// but ignores ASCII case.
    pub fn from_driver_name(name: &str) -> Result<Vendor> {
        Vendor::ALL
            .into_iter()
            .find(|vendor| vendor.driver_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unsupported_vendor(name))
    }

    /// Resolves the scheme of a connection URL.
    pub fn from_url_scheme(scheme: &str) -> Option<Vendor> {
        match scheme {
            "db2" => Some(Vendor::DB2),
            "mysql" => Some(Vendor::MySQL),
            "oracle" => Some(Vendor::Oracle),
            "postgres" | "postgresql" => Some(Vendor::Pg),
            "sqlite" => Some(Vendor::SQLite),
            "sybase" => Some(Vendor::Sybase),
            _ => None,
        }
    }
}

impl FromStr for Vendor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Vendor::from_driver_name(s)
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.driver_name())
    }
}
