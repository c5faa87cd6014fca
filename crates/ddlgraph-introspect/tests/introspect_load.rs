use ddlgraph_core::{bail, schema::Field, Result, Schema, Table};
use ddlgraph_introspect::{
    Connection, ConnectionParams, Connector, Introspect, Introspector, Source, Vendor,
};
use pretty_assertions::assert_eq;
use std::{cell::Cell, rc::Rc};
use std_util::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug)]
struct MockConnection {
    driver: String,
    released: Rc<Cell<u32>>,
}

impl MockConnection {
    fn new(driver: &str) -> (MockConnection, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let connection = MockConnection {
            driver: driver.to_string(),
            released: released.clone(),
        };
        (connection, released)
    }
}

impl Connection for MockConnection {
    fn driver_name(&self) -> &str {
        &self.driver
    }

    fn disconnect(&mut self) -> Result<()> {
        self.released.set(self.released.get() + 1);
        Ok(())
    }
}

#[derive(Debug)]
struct MockConnector {
    released: Rc<Cell<u32>>,
}

impl Connector for MockConnector {
    fn connect(&self, params: &ConnectionParams) -> Result<Box<dyn Connection>> {
        let driver = match params.vendor() {
            Some(vendor) => vendor.driver_name(),
            None => bail!("cannot connect to {}", params.url()),
        };

        Ok(Box::new(MockConnection {
            driver: driver.to_string(),
            released: self.released.clone(),
        }))
    }
}

/// Adds the listed tables, each with an `id` primary key. Fails after adding
/// `fail_after` tables when set.
#[derive(Debug)]
struct MockIntrospector {
    tables: Vec<&'static str>,
    fail_after: Option<usize>,
}

impl MockIntrospector {
    fn tables(tables: &[&'static str]) -> MockIntrospector {
        MockIntrospector {
            tables: tables.to_vec(),
            fail_after: None,
        }
    }
}

impl Introspector for MockIntrospector {
    fn load(&self, _connection: &mut dyn Connection, schema: &mut Schema) -> Result<()> {
        for (i, name) in self.tables.iter().enumerate() {
            if self.fail_after == Some(i) {
                bail!("catalog query failed on `{name}`");
            }

            let table = schema.add_table(Table::new(*name))?;
            table.add_field(Field::new("id", "integer"))?;
            table.set_primary_key("id")?;
        }

        Ok(())
    }
}

#[test]
fn loads_tables_through_the_matching_adapter() {
    init_logging();

    let mut introspect = Introspect::new();
    introspect
        .register(Vendor::Pg, MockIntrospector::tables(&["users", "orders"]))
        .register(Vendor::MySQL, MockIntrospector::tables(&["wrong"]));

    let (connection, released) = MockConnection::new("pg");
    let mut schema = Schema::named("shop");

    assert_ok!(introspect.load(&mut schema, Source::connection(connection)));

    assert_eq!(schema.table_names(), ["users", "orders"]);
    assert_eq!(schema.database(), "Pg");
    assert_eq!(released.get(), 1);
    assert_ok!(schema.is_valid());
}

#[test]
fn opens_a_connection_from_parameters() {
    init_logging();

    let released = Rc::new(Cell::new(0));
    let mut introspect = Introspect::new();
    introspect
        .connector(MockConnector {
            released: released.clone(),
        })
        .register(Vendor::SQLite, MockIntrospector::tables(&["notes"]));

    let mut schema = Schema::new();
    let source = assert_ok!(Source::url("sqlite:///tmp/notes.db"));
    assert_ok!(introspect.load(&mut schema, source));

    assert_eq!(schema.table_names(), ["notes"]);
    assert_eq!(released.get(), 1);
}

#[test]
fn no_connection_and_no_parameters() {
    let introspect = Introspect::new();
    let mut schema = Schema::new();

    assert_err!(
        introspect.load(&mut schema, Source::default()),
        is_missing_connection
    );
}

#[test]
fn parameters_without_connector() {
    let introspect = Introspect::new();
    let mut schema = Schema::new();
    let params = assert_ok!(ConnectionParams::from_url("mysql://db.internal/shop"));

    let err = assert_err!(introspect.load(&mut schema, Source::params(params)), is_adhoc);
    assert!(err.to_string().contains("no connector is registered"));
}

#[test]
fn unknown_driver_is_rejected_and_released() {
    init_logging();

    let mut introspect = Introspect::new();
    introspect.register(Vendor::Pg, MockIntrospector::tables(&["users"]));

    let (connection, released) = MockConnection::new("postgres");
    let mut schema = Schema::new();

    let err = assert_err!(
        introspect.load(&mut schema, Source::connection(connection)),
        is_unsupported_vendor
    );
    assert_eq!(err.to_string(), "unsupported database vendor `postgres`");
    assert_eq!(released.get(), 1);
}

#[test]
fn supported_vendor_without_adapter_is_rejected() {
    let introspect = Introspect::new();
    assert!(!introspect.supports(Vendor::Oracle));

    let (connection, released) = MockConnection::new("Oracle");
    let mut schema = Schema::new();

    assert_err!(
        introspect.load(&mut schema, Source::connection(connection)),
        is_unsupported_vendor
    );
    assert_eq!(released.get(), 1);
}

#[test]
fn adapter_failure_leaves_schema_untouched() {
    init_logging();

    let mut introspect = Introspect::new();
    introspect.register(
        Vendor::MySQL,
        MockIntrospector {
            tables: vec!["customers", "orders", "items"],
            fail_after: Some(2),
        },
    );

    let mut schema = Schema::new();
    assert_ok!(schema.add_table(Table::new("from_ddl")));

    let (connection, released) = MockConnection::new("mysql");
    let err = assert_err!(
        introspect.load(&mut schema, Source::connection(connection)),
        is_adhoc
    );

    assert_eq!(err.to_string(), "catalog query failed on `items`");
    assert_eq!(schema.table_names(), ["from_ddl"]);
    assert_eq!(released.get(), 1);
}

#[test]
fn name_clash_with_existing_tables_is_all_or_nothing() {
    let mut introspect = Introspect::new();
    introspect.register(Vendor::Pg, MockIntrospector::tables(&["audit", "users"]));

    let mut schema = Schema::new();
    assert_ok!(schema.add_table(Table::new("users")));

    let (connection, _released) = MockConnection::new("Pg");
    assert_err!(
        introspect.load(&mut schema, Source::connection(connection)),
        is_name_conflict
    );
    assert_eq!(schema.table_names(), ["users"]);
}
