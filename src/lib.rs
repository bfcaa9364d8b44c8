//! # Trellis
//!
//! Schema reflection and column metadata for struct↔table mappings: declare
//! once how a record type maps onto a relational table, then query the
//! resulting catalogue — ordered column lists, primary-key structure (single
//! or composite), constraint-filtered traversal, and `PRAGMA
//! table_info`-style metadata rows.
//!
//! The catalogue is immutable after construction and does not touch a
//! database: executing SQL, migrations, and row (de)serialization belong to
//! the layers built on top of it.
//!
//! ## Quick Start
//!
//! ```
//! use trellis::prelude::*;
//!
//! struct User {
//!     id: i64,
//!     name: String,
//!     email: Option<String>,
//! }
//!
//! # fn main() -> trellis::Result<()> {
//! let users = Table::builder("users")
//!     .column(integer::<User>("id").primary_key().autoincrement())
//!     .column(text::<User>("name").not_null())
//!     .column(text_nullable::<User>("email").unique())
//!     .build()?;
//!
//! assert_eq!(users.column_names(), ["id", "name", "email"]);
//! assert_eq!(users.primary_key_column_names(), ["id"]);
//!
//! let info = users.table_info(&SqliteTypePrinter)?;
//! assert_eq!(info[0].r#type, "INTEGER");
//! assert_eq!(info[0].pk, 1);
//! assert!(!info[2].notnull);
//! # Ok(())
//! # }
//! ```

pub use trellis_core::*;
pub use trellis_sqlite as sqlite;

/// Commonly used items for declaring and querying table mappings.
pub mod prelude {
    pub use trellis_core::{
        Accessor, AccessorRef, Column, ColumnBuilder, ColumnFilter, Constraint, ConstraintKind,
        FieldType, ForeignKeyRef, Result, ScalarType, SchemaError, Table, TableConstraint,
        TableInfo, TypePrinter,
    };
    pub use trellis_sqlite::{
        SqliteTypePrinter, blob, blob_nullable, boolean, boolean_nullable, integer,
        integer_nullable, real, real_nullable, text, text_nullable,
    };
}
