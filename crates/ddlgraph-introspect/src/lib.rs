//! Vendor dispatch for loading a [`Schema`] from a live database.
//!
//! This crate does not talk to any database itself. Callers register a
//! [`Connector`] that opens connections and one [`Introspector`] per
//! supported [`Vendor`]; [`Introspect::load`] picks the adapter matching the
//! connection's driver and populates the schema.
//!
//! [`Schema`]: ddlgraph_core::Schema

mod connection;
pub use connection::{Connection, Connector};

mod introspect;
pub use introspect::{Introspect, Introspector, Source};

mod params;
pub use params::ConnectionParams;

mod vendor;
pub use vendor::Vendor;
