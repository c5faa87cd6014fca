use ddlgraph_core::Table;

#[test]
fn options_accumulate() {
    let mut table = Table::new("t");
    assert!(table.options().is_empty());

    assert_eq!(table.add_options(["a, b", "c"]), ["a", "b", "c"]);
    assert_eq!(table.add_options("d"), ["a", "b", "c", "d"]);
    assert_eq!(table.options(), ["a", "b", "c", "d"]);
}

#[test]
fn empty_options_change_nothing() {
    let mut table = Table::new("t");
    table.add_options("ENGINE=InnoDB");

    assert_eq!(table.add_options(Vec::<&str>::new()), ["ENGINE=InnoDB"]);
    assert_eq!(table.add_options(" "), ["ENGINE=InnoDB"]);
}

#[test]
fn repeated_options_are_kept() {
    let mut table = Table::new("t");
    table.add_options("x");
    assert_eq!(table.add_options(vec![String::from("x")]), ["x", "x"]);
}
