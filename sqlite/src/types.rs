//! SQLite rendering of the type-printer seam.

use trellis_core::{FieldType, ScalarType, TypePrinter};

/// Maps value-type tags to SQLite's canonical type names and default-literal
/// quoting rule.
///
/// Total over the built-in tag set: booleans print through the integer
/// mapping (SQLite stores them as 0/1), and custom tags carry their own
/// canonical name. Text and textual custom types wrap rendered default
/// literals in single quotes; every other type renders them bare.
///
/// See: <https://sqlite.org/datatype3.html#storage_classes_and_datatypes>
///
/// # Examples
/// ```
/// use trellis_core::{FieldType, TypePrinter};
/// use trellis_sqlite::SqliteTypePrinter;
///
/// let printer = SqliteTypePrinter;
/// assert_eq!(printer.type_name(FieldType::INTEGER), Some("INTEGER"));
/// assert_eq!(printer.type_name(FieldType::BOOLEAN), Some("INTEGER"));
/// assert!(printer.quotes_default(FieldType::TEXT));
/// assert!(!printer.quotes_default(FieldType::REAL));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliteTypePrinter;

impl TypePrinter for SqliteTypePrinter {
    fn type_name(&self, ty: FieldType) -> Option<&'static str> {
        Some(match ty.scalar() {
            ScalarType::Integer | ScalarType::Boolean => "INTEGER",
            ScalarType::Real => "REAL",
            ScalarType::Text => "TEXT",
            ScalarType::Blob => "BLOB",
            ScalarType::Custom { name, .. } => name,
        })
    }

    fn quotes_default(&self, ty: FieldType) -> bool {
        match ty.scalar() {
            ScalarType::Text => true,
            ScalarType::Custom { textual, .. } => textual,
            ScalarType::Integer | ScalarType::Real | ScalarType::Blob | ScalarType::Boolean => {
                false
            }
        }
    }
}
