use trellis::prelude::*;

struct Booking;

#[test]
fn rows_mirror_declaration_order_with_one_based_positions() {
    let table = Table::builder("bookings")
        .column(integer::<Booking>("id").primary_key())
        .column(text::<Booking>("guest").not_null())
        .column(boolean::<Booking>("confirmed").default_value("0"))
        .build()
        .unwrap();

    let info = table.table_info(&SqliteTypePrinter).unwrap();
    assert_eq!(info.len(), 3);
    assert_eq!(
        info.iter()
            .map(|row| (row.cid, row.name.as_str()))
            .collect::<Vec<_>>(),
        [(1, "id"), (2, "guest"), (3, "confirmed")]
    );
    assert_eq!(info[0].pk, 1);
    assert_eq!(info[1].pk, 0);
    assert_eq!(info[2].r#type, "INTEGER");
    assert_eq!(info[2].dflt_value.as_deref(), Some("0"));
}

#[test]
fn composite_key_ordinals_follow_constraint_order() {
    // Columns declared a-then-b, key declared over [b, a].
    let table = Table::builder("seats")
        .column(text::<Booking>("a"))
        .column(text::<Booking>("b"))
        .primary_key([
            AccessorRef::field::<Booking>("b", FieldType::TEXT),
            AccessorRef::field::<Booking>("a", FieldType::TEXT),
        ])
        .build()
        .unwrap();

    assert_eq!(table.primary_key_column_names(), ["b", "a"]);

    let info = table.table_info(&SqliteTypePrinter).unwrap();
    assert_eq!((info[0].name.as_str(), info[0].pk), ("a", 2));
    assert_eq!((info[1].name.as_str(), info[1].pk), ("b", 1));
}

#[test]
fn default_quoting_follows_the_type_printer() {
    let table = Table::builder("profiles")
        .column(text::<Booking>("handle").default_value("abc"))
        .column(integer::<Booking>("visits").default_value("0"))
        .column(
            Column::new(
                "token",
                Accessor::field::<Booking>("token"),
                FieldType::custom("UUID", true),
            )
            .default_value("00000000-0000-0000-0000-000000000000"),
        )
        .build()
        .unwrap();

    let info = table.table_info(&SqliteTypePrinter).unwrap();
    assert_eq!(info[0].dflt_value.as_deref(), Some("'abc'"));
    assert_eq!(info[1].dflt_value.as_deref(), Some("0"));
    assert_eq!(info[2].r#type, "UUID");
    assert_eq!(
        info[2].dflt_value.as_deref(),
        Some("'00000000-0000-0000-0000-000000000000'")
    );
}

#[test]
fn unmapped_tags_are_definition_errors_not_fallbacks() {
    /// Printer restricted to text, standing in for a narrower type system.
    struct TextOnlyPrinter;

    impl TypePrinter for TextOnlyPrinter {
        fn type_name(&self, ty: FieldType) -> Option<&'static str> {
            (ty.scalar() == ScalarType::Text).then_some("TEXT")
        }

        fn quotes_default(&self, _ty: FieldType) -> bool {
            true
        }
    }

    let table = Table::builder("notes")
        .column(text::<Booking>("body"))
        .column(integer::<Booking>("rank"))
        .build()
        .unwrap();

    assert!(table.check_types(&SqliteTypePrinter).is_ok());
    assert_eq!(
        table.check_types(&TextOnlyPrinter).unwrap_err(),
        SchemaError::UnmappedType {
            column: "rank".to_owned()
        }
    );
    assert!(table.table_info(&TextOnlyPrinter).is_err());
}
