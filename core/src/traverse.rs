//! Filtered traversal over an ordered column sequence.
//!
//! One engine serves every filtered iteration in the crate; the table's
//! `for_each_*` visitors and name-collection operations are thin wrappers
//! over [`filtered`]. Consumers may rely only on "ordered sequence,
//! declaration order, possibly filtered" — never on a container type.

use crate::{column::Column, constraint::ConstraintKind, types::FieldType};

/// Predicate selecting a subset of a column sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFilter {
    /// Every column.
    All,
    /// Columns carrying a constraint of the given kind.
    With(ConstraintKind),
    /// Columns not carrying a constraint of the given kind.
    Without(ConstraintKind),
    /// Columns whose value type equals the given tag.
    OfType(FieldType),
}

impl ColumnFilter {
    /// Whether `column` passes this filter.
    #[must_use]
    pub fn admits(&self, column: &Column) -> bool {
        match self {
            Self::All => true,
            Self::With(kind) => column.has(*kind),
            Self::Without(kind) => !column.has(*kind),
            Self::OfType(ty) => column.value_type() == *ty,
        }
    }
}

/// Iterates `columns` in declaration order, yielding those `filter` admits.
pub fn filtered(columns: &[Column], filter: ColumnFilter) -> impl Iterator<Item = &Column> {
    columns.iter().filter(move |column| filter.admits(column))
}
