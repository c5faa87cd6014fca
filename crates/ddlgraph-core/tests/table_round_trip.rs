use ddlgraph_core::schema::{
    Constraint, ConstraintKind, ConstraintParams, Field, FieldParams, Index, IndexKind, Table,
};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

#[test]
fn children_read_back_as_built() {
    let field_names = ["id", "sku", "title", "price", "vendor_id"];
    let mut table = Table::new("products");

    for (i, name) in field_names.iter().enumerate() {
        if i % 2 == 0 {
            assert_ok!(table.add_field(Field::new(*name, "int")));
        } else {
            assert_ok!(table.add_field(FieldParams {
                name: name.to_string(),
                data_type: "varchar".to_string(),
                size: vec![255],
                ..Default::default()
            }));
        }
    }

    assert_ok!(table.add_index(Index::named("idx_sku", IndexKind::Unique, "sku")));
    assert_ok!(table.add_index(Index::named("idx_title", IndexKind::FullText, "title")));
    assert_ok!(table.add_index(Index::new(IndexKind::Normal, ["vendor_id", "price"])));

    assert_ok!(table.set_primary_key("id"));
    assert_ok!(table.add_constraint(Constraint::foreign_key("vendor_id", "vendors", "id")));
    assert_ok!(table.add_constraint(ConstraintParams {
        name: "price_positive".to_string(),
        kind: "check".to_string(),
        expression: "price > 0".to_string(),
        ..Default::default()
    }));

    let fields: Vec<_> = assert_ok!(table.get_fields())
        .into_iter()
        .map(|f| (f.name(), f.full_data_type()))
        .collect();
    assert_eq!(
        fields,
        [
            ("id", "int".to_string()),
            ("sku", "varchar(255)".to_string()),
            ("title", "int".to_string()),
            ("price", "varchar(255)".to_string()),
            ("vendor_id", "int".to_string()),
        ]
    );

    let indices: Vec<_> = assert_ok!(table.get_indices())
        .iter()
        .map(|i| (i.name.as_str(), i.kind, i.fields.clone()))
        .collect();
    assert_eq!(
        indices,
        [
            ("idx_sku", IndexKind::Unique, vec!["sku".to_string()]),
            ("idx_title", IndexKind::FullText, vec!["title".to_string()]),
            (
                "",
                IndexKind::Normal,
                vec!["vendor_id".to_string(), "price".to_string()]
            ),
        ]
    );

    let constraints: Vec<_> = assert_ok!(table.get_constraints())
        .iter()
        .map(|c| (c.kind(), c.fields().to_vec()))
        .collect();
    assert_eq!(
        constraints,
        [
            (ConstraintKind::PrimaryKey, vec!["id".to_string()]),
            (ConstraintKind::ForeignKey, vec!["vendor_id".to_string()]),
            (ConstraintKind::Check, vec![]),
        ]
    );

    let fk = &assert_ok!(table.get_constraints())[1];
    assert_eq!(fk.reference_table, "vendors");
    assert_eq!(fk.reference_fields, ["id"]);
    assert!(fk.deferrable);

    assert_ok!(table.is_valid());
}
