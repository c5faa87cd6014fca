use crate::{Connection, ConnectionParams, Connector, Vendor};

use ddlgraph_core::{err, Error, Result, Schema};
use indexmap::IndexMap;
use std::fmt::Debug;

/// Reads tables from a connected database into a schema. One implementation
/// per vendor.
pub trait Introspector: Debug {
    fn load(&self, connection: &mut dyn Connection, schema: &mut Schema) -> Result<()>;
}

/// Where [`Introspect::load`] gets its connection from.
///
/// A supplied connection takes precedence over connection parameters.
#[derive(Debug, Default)]
pub struct Source {
    connection: Option<Box<dyn Connection>>,
    params: Option<ConnectionParams>,
}

/// Dispatches introspection to the adapter registered for the connection's
/// vendor.
#[derive(Debug, Default)]
pub struct Introspect {
    connector: Option<Box<dyn Connector>>,
    adapters: IndexMap<Vendor, Box<dyn Introspector>>,
}

impl Source {
    pub fn connection(connection: impl Connection + 'static) -> Source {
        Source {
            connection: Some(Box::new(connection)),
            params: None,
        }
    }

    pub fn params(params: ConnectionParams) -> Source {
        Source {
            connection: None,
            params: Some(params),
        }
    }

    /// Parses `url` into connection parameters.
    pub fn url(url: &str) -> Result<Source> {
        Ok(Source::params(ConnectionParams::from_url(url)?))
    }

    pub fn with_params(mut self, params: ConnectionParams) -> Source {
        self.params = Some(params);
        self
    }
}

impl Introspect {
    pub fn new() -> Introspect {
        Introspect::default()
    }

    /// Sets the connector used when a [`Source`] only carries parameters.
    pub fn connector(&mut self, connector: impl Connector + 'static) -> &mut Self {
        self.connector = Some(Box::new(connector));
        self
    }

    /// Registers the adapter for `vendor`, replacing any previous one.
    pub fn register(&mut self, vendor: Vendor, adapter: impl Introspector + 'static) -> &mut Self {
        self.adapters.insert(vendor, Box::new(adapter));
        self
    }

    pub fn supports(&self, vendor: Vendor) -> bool {
        self.adapters.contains_key(&vendor)
    }

    /// Loads the tables of the database behind `source` into `schema`.
    ///
    /// The adapter fills a staging schema which is merged into `schema` only
    /// once the adapter has succeeded, so a failed run leaves `schema` as it
    /// was. The connection is released before this returns, whatever the
    /// outcome.
    pub fn load(&self, schema: &mut Schema, source: Source) -> Result<()> {
        let mut connection = self.open(source)?;

        let staged = self.load_staged(connection.as_mut());

        if let Err(err) = connection.disconnect() {
            log::warn!(
                "failed to release {} connection: {err}",
                connection.driver_name()
            );
        }

        let staged = staged?;
        log::debug!(
            "merging {} introspected tables into schema `{}`",
            staged.table_names().len(),
            schema.name()
        );
        schema.merge(staged)
    }

    fn open(&self, source: Source) -> Result<Box<dyn Connection>> {
        if let Some(connection) = source.connection {
            return Ok(connection);
        }

        let Some(params) = source.params else {
            return Err(Error::missing_connection());
        };

        let Some(connector) = &self.connector else {
            return Err(err!(
                "connection parameters given for `{}` but no connector is registered",
                params.url().host_str().unwrap_or(params.url().scheme())
            ));
        };

        connector.connect(&params)
    }

    fn load_staged(&self, connection: &mut dyn Connection) -> Result<Schema> {
        let vendor = Vendor::from_driver_name(connection.driver_name())?;

        let Some(adapter) = self.adapters.get(&vendor) else {
            return Err(Error::unsupported_vendor(format!(
                "{vendor} (no adapter registered)"
            )));
        };

        let mut staged = Schema::new();
        staged.set_database(vendor.driver_name());

        adapter.load(connection, &mut staged).map_err(|err| {
            log::warn!("{vendor} introspection failed: {err}");
            err
        })?;

        Ok(staged)
    }
}
