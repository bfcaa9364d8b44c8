//! REAL column declarations.
//!
//! See: <https://sqlite.org/datatype3.html#real_datatype>

use super::column_fn;

column_fn!(real, REAL, "REAL");

#[cfg(test)]
mod tests {
    use trellis_core::{FieldType, Table};

    use crate::SqliteTypePrinter;

    use super::*;

    struct Reading;

    #[test]
    fn declares_a_real_field_column() {
        let column = real::<Reading>("celsius").build();
        assert_eq!(column.value_type(), FieldType::REAL);
    }

    #[test]
    fn real_defaults_render_bare() {
        let table = Table::builder("readings")
            .column(real::<Reading>("celsius").default_value("0.0"))
            .column(real_nullable::<Reading>("humidity"))
            .build()
            .unwrap();
        let info = table.table_info(&SqliteTypePrinter).unwrap();
        assert_eq!(info[0].dflt_value.as_deref(), Some("0.0"));
        assert_eq!(info[1].r#type, "REAL");
        assert!(!info[1].notnull);
    }
}
