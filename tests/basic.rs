use trellis::prelude::*;

struct Employee;

fn employees() -> Table {
    Table::builder("employees")
        .column(integer::<Employee>("id").primary_key().autoincrement())
        .column(text::<Employee>("name").not_null())
        .column(
            text::<Employee>("email")
                .nullable()
                .unique()
                .via(Accessor::getter_setter::<Employee>("email", "set_email")),
        )
        .column(real_nullable::<Employee>("salary"))
        .column(integer::<Employee>("dept_id").references("departments", "id"))
        .build()
        .expect("valid definition")
}

#[test]
fn declaration_order_drives_every_listing() {
    let table = employees();
    assert_eq!(table.columns_count(), 5);
    assert_eq!(
        table.column_names(),
        ["id", "name", "email", "salary", "dept_id"]
    );

    let mut visited = Vec::new();
    table.for_each_column(|column| visited.push(column.name().to_owned()));
    assert_eq!(visited, table.column_names());
}

#[test]
fn traversal_filters_by_constraint_and_type() {
    let table = employees();

    let unique: Vec<_> = table
        .columns_with(ConstraintKind::Unique)
        .map(|c| c.name())
        .collect();
    assert_eq!(unique, ["email"]);

    let without_fk: Vec<_> = table
        .columns_except(ConstraintKind::ForeignKey)
        .map(|c| c.name())
        .collect();
    assert_eq!(without_fk, ["id", "name", "email", "salary"]);

    let integers: Vec<_> = table
        .columns_of_type(FieldType::INTEGER)
        .map(|c| c.name())
        .collect();
    assert_eq!(integers, ["id", "dept_id"]);

    assert_eq!(
        table.column_names_with(&[ConstraintKind::PrimaryKey, ConstraintKind::Unique]),
        ["id", "email"]
    );
}

#[test]
fn accessor_lookup_respects_variants() {
    let table = employees();

    assert_eq!(
        table.find_column_name(AccessorRef::field::<Employee>("id", FieldType::INTEGER)),
        Some("id")
    );
    assert_eq!(
        table.find_column_name(AccessorRef::getter::<Employee>(
            "email",
            FieldType::TEXT.nullable()
        )),
        Some("email")
    );
    assert_eq!(
        table.find_column_name(AccessorRef::setter::<Employee>(
            "set_email",
            FieldType::TEXT.nullable()
        )),
        Some("email")
    );
    // The email column is reached through functions, not a field slot.
    assert_eq!(
        table.find_column_name(AccessorRef::field::<Employee>(
            "email",
            FieldType::TEXT.nullable()
        )),
        None
    );
    // Unbound member: an explicit miss, never an empty name.
    assert_eq!(
        table.find_column_name(AccessorRef::field::<Employee>("badge", FieldType::TEXT)),
        None
    );
}

#[test]
fn without_rowid_produces_independent_copies() {
    let table = employees();
    let keyed = table.without_rowid();
    let again = keyed.without_rowid();

    assert!(!table.is_without_rowid());
    assert!(keyed.is_without_rowid());
    assert!(again.is_without_rowid());
    assert_eq!(keyed.column_names(), table.column_names());
    assert_eq!(again.columns(), keyed.columns());
}

#[test]
fn duplicate_bindings_fail_the_whole_definition() {
    let err = Table::builder("employees")
        .column(integer::<Employee>("id"))
        .column(text::<Employee>("badge").via(Accessor::field::<Employee>("id")))
        .build()
        .unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateAccessor { .. }));

    // Same name and same accessor: the name check fires first.
    let err = Table::builder("employees")
        .column(integer::<Employee>("id"))
        .column(integer::<Employee>("id"))
        .build()
        .unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateColumnName { .. }));
}
