use crate::ConnectionParams;

use ddlgraph_core::Result;
use std::fmt::Debug;

/// A live database connection handed to an introspection adapter.
pub trait Connection: Debug {
    /// Driver identity reported by the connection (`"Pg"`, `"mysql"`, ...).
    fn driver_name(&self) -> &str;

    /// Releases the connection. Called once, after the adapter has returned.
    fn disconnect(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Opens connections from connection parameters.
pub trait Connector: Debug {
    fn connect(&self, params: &ConnectionParams) -> Result<Box<dyn Connection>>;
}
