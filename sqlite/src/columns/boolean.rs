//! Boolean column declarations, stored as INTEGER 0/1.
//!
//! See: <https://sqlite.org/datatype3.html#boolean_datatype>

use super::column_fn;

column_fn!(boolean, BOOLEAN, "boolean (INTEGER-backed)");

#[cfg(test)]
mod tests {
    use trellis_core::{FieldType, Table};

    use crate::SqliteTypePrinter;

    use super::*;

    struct Flagged;

    #[test]
    fn declares_a_boolean_field_column() {
        let column = boolean::<Flagged>("archived").build();
        assert_eq!(column.value_type(), FieldType::BOOLEAN);
    }

    #[test]
    fn booleans_render_as_integer_with_bare_defaults() {
        let table = Table::builder("flags")
            .column(boolean::<Flagged>("archived").default_value("0"))
            .build()
            .unwrap();
        let info = table.table_info(&SqliteTypePrinter).unwrap();
        assert_eq!(info[0].r#type, "INTEGER");
        assert_eq!(info[0].dflt_value.as_deref(), Some("0"));
    }
}
