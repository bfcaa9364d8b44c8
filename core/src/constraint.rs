//! Column-level and table-level constraint markers.

use compact_str::CompactString;

use crate::accessor::AccessorRef;

/// Reference from a column to its parent column in another table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    table: CompactString,
    column: CompactString,
}

impl ForeignKeyRef {
    /// Reference to `column` of `table`.
    pub fn new(table: impl Into<CompactString>, column: impl Into<CompactString>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// The parent table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The parent column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }
}

/// A single column-level constraint, in the form it was declared.
///
/// Declaration order on a column is preserved but carries no meaning; the
/// builder accepts constraints in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Column-level primary-key marker.
    PrimaryKey,
    /// Explicit NOT NULL, independent of the value type's nullability.
    NotNull,
    /// AUTOINCREMENT marker.
    Autoincrement,
    /// UNIQUE marker.
    Unique,
    /// Default-value literal or expression, kept verbatim; the type printer
    /// decides quoting when it is rendered.
    Default(CompactString),
    /// Collation sequence name, e.g. `NOCASE`.
    Collate(CompactString),
    /// Column-level foreign-key reference.
    ForeignKey(ForeignKeyRef),
}

impl Constraint {
    /// The field-less discriminant of this constraint.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        match self {
            Self::PrimaryKey => ConstraintKind::PrimaryKey,
            Self::NotNull => ConstraintKind::NotNull,
            Self::Autoincrement => ConstraintKind::Autoincrement,
            Self::Unique => ConstraintKind::Unique,
            Self::Default(_) => ConstraintKind::Default,
            Self::Collate(_) => ConstraintKind::Collate,
            Self::ForeignKey(_) => ConstraintKind::ForeignKey,
        }
    }
}

/// Field-less discriminant of [`Constraint`], used to filter traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Column-level primary-key marker.
    PrimaryKey,
    /// Explicit NOT NULL.
    NotNull,
    /// AUTOINCREMENT marker.
    Autoincrement,
    /// UNIQUE marker.
    Unique,
    /// Default value.
    Default,
    /// Collation sequence.
    Collate,
    /// Foreign-key reference.
    ForeignKey,
}

/// Constraints declared on the table rather than on a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    /// Composite primary key; reference order is key order, independent of
    /// column declaration order.
    PrimaryKey(Vec<AccessorRef>),
    /// Table-level foreign key over one or more columns.
    ForeignKey {
        /// Local columns, by accessor reference.
        columns: Vec<AccessorRef>,
        /// Parent table name.
        parent_table: CompactString,
        /// Parent column names, positionally matching `columns`.
        parent_columns: Vec<CompactString>,
    },
}
