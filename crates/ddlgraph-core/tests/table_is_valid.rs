use ddlgraph_core::schema::{
    Constraint, ConstraintParams, Field, Index, IndexKind, IndexParams, Table,
};
use std_util::prelude::*;

fn orders() -> Table {
    let mut table = Table::new("orders");
    assert_ok!(table.add_field(Field::new("id", "int")));
    assert_ok!(table.add_field(Field::new("customer_id", "int")));
    table
}

#[test]
fn unnamed_table_is_invalid() {
    let mut table = Table::default();
    assert_ok!(table.add_field(Field::new("id", "int")));

    assert_err!(table.is_valid(), is_missing_name);
}

#[test]
fn table_without_fields_is_invalid_until_one_is_added() {
    let mut table = Table::new("orders");
    let err = assert_err!(table.is_valid(), is_no_fields);
    assert_eq!(err.to_string(), "table `orders` has no fields");

    assert_ok!(table.add_field(Field::new("id", "int")));
    assert_ok!(table.is_valid());
}

#[test]
fn valid_children_make_a_valid_table() {
    let mut table = orders();
    assert_ok!(table.set_primary_key("id"));
    assert_ok!(table.add_index(Index::new(IndexKind::Normal, "customer_id")));
    assert_ok!(table.add_constraint(Constraint::foreign_key("customer_id", "customers", "id")));
    assert_ok!(table.add_constraint(Constraint::check("id > 0")));

    assert_ok!(table.is_valid());
}

#[test]
fn index_on_unknown_field_is_invalid() {
    let mut table = orders();
    assert_ok!(table.add_index(IndexParams {
        name: "idx_total".to_string(),
        kind: "unique".to_string(),
        fields: vec!["total".to_string()],
        ..Default::default()
    }));

    let err = assert_err!(table.is_valid(), is_child_invalid);
    assert_eq!(err.child_kind(), Some("index"));
    assert_eq!(
        err.to_string(),
        "invalid index: field `total` of index `idx_total` does not exist in table `orders`"
    );
}

#[test]
fn index_without_fields_is_invalid() {
    let mut table = orders();
    assert_ok!(table.add_index(Index::new(IndexKind::Unique, "")));

    let err = assert_err!(table.is_valid(), is_child_invalid);
    assert_eq!(err.to_string(), "invalid index: index (unnamed) has no fields");
}

#[test]
fn constraint_rules() {
    let mut check = orders();
    assert_ok!(check.add_constraint(Constraint::check("  ")));
    let err = assert_err!(check.is_valid(), is_child_invalid);
    assert_eq!(err.to_string(), "invalid constraint: CHECK: no expression");

    let mut fk = orders();
    assert_ok!(fk.add_constraint(ConstraintParams {
        kind: "foreign key".to_string(),
        fields: vec!["customer_id".to_string()],
        ..Default::default()
    }));
    let err = assert_err!(fk.is_valid(), is_child_invalid);
    assert_eq!(err.to_string(), "invalid constraint: FOREIGN KEY: no reference table");

    let mut unique = orders();
    assert_ok!(unique.add_constraint(Constraint::unique(Vec::<String>::new())));
    let err = assert_err!(unique.is_valid(), is_child_invalid);
    assert_eq!(err.to_string(), "invalid constraint: UNIQUE: no fields");
}

#[test]
fn field_errors_win_over_index_errors() {
    let mut table = orders();
    assert_ok!(table.add_index(Index::new(IndexKind::Normal, "missing")));

    let id = assert_ok!(table.get_field_mut("id"));
    id.auto_increment = true;
    id.default_value = Some("0".to_string());

    let err = assert_err!(table.is_valid(), is_child_invalid);
    assert_eq!(err.child_kind(), Some("field"));
    assert_eq!(
        err.to_string(),
        "invalid field: field `id` is auto-increment and also has a default value"
    );
}

#[test]
fn index_errors_win_over_constraint_errors() {
    let mut table = orders();
    assert_ok!(table.add_constraint(Constraint::unique("also_missing")));
    assert_ok!(table.add_index(Index::new(IndexKind::Normal, "missing")));

    let err = assert_err!(table.is_valid(), is_child_invalid);
    assert_eq!(err.child_kind(), Some("index"));
}

#[test]
fn rejected_children_leave_table_unchanged() {
    let mut table = orders();

    assert_err!(
        table.add_index(IndexParams {
            kind: "clustered".to_string(),
            fields: vec!["id".to_string()],
            ..Default::default()
        }),
        is_type_error
    );
    assert_err!(
        table.add_constraint(ConstraintParams {
            kind: "exclusion".to_string(),
            ..Default::default()
        }),
        is_type_error
    );

    assert_err!(table.get_indices(), is_empty_collection);
    assert_err!(table.get_constraints(), is_empty_collection);
    assert_ok!(table.is_valid());
}
