//! Definition-time error taxonomy.

use thiserror::Error;

/// Errors detected while a table definition is constructed or rendered.
///
/// Every variant is a definition error: the whole definition step fails,
/// never a partial or degraded table. Lookup misses are not errors; they
/// surface as `Option::None` at the lookup boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Table declared with an empty name.
    #[error("table name must not be empty")]
    EmptyTableName,

    /// Two columns declared under the same name.
    #[error("duplicate column name `{name}`")]
    DuplicateColumnName {
        /// The colliding name.
        name: String,
    },

    /// Two columns bound to the same accessor identity.
    #[error("columns `{first}` and `{second}` are bound to the same accessor")]
    DuplicateAccessor {
        /// Name of the first column bound to the accessor.
        first: String,
        /// Name of the later column bound to the same accessor.
        second: String,
    },

    /// A column-level primary key co-declared with a table-level composite
    /// key.
    #[error("column `{column}` declares a primary key alongside a table-level composite key")]
    ConflictingPrimaryKey {
        /// A column carrying the column-level marker.
        column: String,
    },

    /// A table constraint references an accessor no declared column owns.
    #[error("table constraint of `{table}` references an accessor not bound to any column")]
    UnknownKeyReference {
        /// The table whose constraint failed to resolve.
        table: String,
    },

    /// The type printer has no mapping for a column's value type.
    #[error("no type mapping for column `{column}`")]
    UnmappedType {
        /// The column whose value type is unmapped.
        column: String,
    },
}

/// Result alias for definition-time operations.
pub type Result<T> = core::result::Result<T, SchemaError>;
