//! Column descriptors and their builder.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::{
    accessor::{Accessor, AccessorRef},
    constraint::{Constraint, ConstraintKind, ForeignKeyRef},
    types::FieldType,
};

/// One mapped column: name, accessor, value type, and declared constraints.
///
/// Immutable once built; every method is a query. Declared through
/// [`Column::new`], which returns a [`ColumnBuilder`] so constraints can be
/// attached in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: CompactString,
    accessor: Accessor,
    value_type: FieldType,
    constraints: SmallVec<[Constraint; 4]>,
}

impl Column {
    /// Starts declaring a column reached through `accessor`.
    pub fn new(
        name: impl Into<CompactString>,
        accessor: Accessor,
        value_type: FieldType,
    ) -> ColumnBuilder {
        ColumnBuilder {
            column: Column {
                name: name.into(),
                accessor,
                value_type,
                constraints: SmallVec::new(),
            },
        }
    }

    /// The column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The accessor this column is bound to.
    #[must_use]
    pub const fn accessor(&self) -> &Accessor {
        &self.accessor
    }

    /// The semantic type tag of the column's value.
    #[must_use]
    pub const fn value_type(&self) -> FieldType {
        self.value_type
    }

    /// Declared constraints, in declaration order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether any declared constraint is of `kind`.
    #[must_use]
    pub fn has(&self, kind: ConstraintKind) -> bool {
        self.constraints.iter().any(|c| c.kind() == kind)
    }

    /// A column rejects NULL when its value type has no nullable wrapper,
    /// or when NOT NULL was declared explicitly.
    #[must_use]
    pub fn is_not_null(&self) -> bool {
        !self.value_type.is_nullable() || self.has(ConstraintKind::NotNull)
    }

    /// The declared default literal, present iff a default-value constraint
    /// was declared.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Default(literal) => Some(literal.as_str()),
            _ => None,
        })
    }

    /// The declared collation sequence, if any.
    #[must_use]
    pub fn collation(&self) -> Option<&str> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Collate(sequence) => Some(sequence.as_str()),
            _ => None,
        })
    }

    /// The column-level foreign-key reference, if any.
    #[must_use]
    pub fn foreign_key(&self) -> Option<&ForeignKeyRef> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::ForeignKey(reference) => Some(reference),
            _ => None,
        })
    }

    /// Identity comparison of `candidate` against this column's accessor;
    /// see [`Accessor::matches`].
    #[must_use]
    pub fn matches(&self, candidate: AccessorRef) -> bool {
        self.accessor.matches(candidate)
    }
}

/// Chained declaration of one [`Column`].
///
/// # Examples
/// ```
/// use trellis_core::{Accessor, Column, ConstraintKind, FieldType};
///
/// struct User;
///
/// let id = Column::new("id", Accessor::field::<User>("id"), FieldType::INTEGER)
///     .primary_key()
///     .autoincrement()
///     .build();
/// assert!(id.has(ConstraintKind::PrimaryKey));
/// assert!(id.has(ConstraintKind::Autoincrement));
/// ```
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    column: Column,
}

impl ColumnBuilder {
    /// Attaches a column-level primary-key marker.
    #[must_use]
    pub fn primary_key(self) -> Self {
        self.constraint(Constraint::PrimaryKey)
    }

    /// Attaches an explicit NOT NULL constraint.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.constraint(Constraint::NotNull)
    }

    /// Attaches an AUTOINCREMENT marker.
    #[must_use]
    pub fn autoincrement(self) -> Self {
        self.constraint(Constraint::Autoincrement)
    }

    /// Attaches a UNIQUE marker.
    #[must_use]
    pub fn unique(self) -> Self {
        self.constraint(Constraint::Unique)
    }

    /// Attaches a default-value literal or expression, kept verbatim.
    #[must_use]
    pub fn default_value(self, literal: impl Into<CompactString>) -> Self {
        self.constraint(Constraint::Default(literal.into()))
    }

    /// Attaches a collation sequence.
    #[must_use]
    pub fn collate(self, sequence: impl Into<CompactString>) -> Self {
        self.constraint(Constraint::Collate(sequence.into()))
    }

    /// Attaches a column-level foreign-key reference.
    #[must_use]
    pub fn references(
        self,
        table: impl Into<CompactString>,
        column: impl Into<CompactString>,
    ) -> Self {
        self.constraint(Constraint::ForeignKey(ForeignKeyRef::new(table, column)))
    }

    /// Applies the nullable wrapper to the declared value type.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.column.value_type = self.column.value_type.nullable();
        self
    }

    /// Replaces the accessor, e.g. to map through a getter/setter pair
    /// instead of a field slot.
    #[must_use]
    pub fn via(mut self, accessor: Accessor) -> Self {
        self.column.accessor = accessor;
        self
    }

    /// Finishes the declaration.
    #[must_use]
    pub fn build(self) -> Column {
        self.column
    }

    fn constraint(mut self, constraint: Constraint) -> Self {
        self.column.constraints.push(constraint);
        self
    }
}

impl From<ColumnBuilder> for Column {
    fn from(builder: ColumnBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct User;

    fn text_column(name: &'static str) -> ColumnBuilder {
        Column::new(name, Accessor::field::<User>(name), FieldType::TEXT)
    }

    #[test]
    fn constraint_queries_ignore_declaration_order() {
        let a = text_column("a").not_null().unique().build();
        let b = text_column("b").unique().not_null().build();
        for column in [&a, &b] {
            assert!(column.has(ConstraintKind::NotNull));
            assert!(column.has(ConstraintKind::Unique));
            assert!(!column.has(ConstraintKind::PrimaryKey));
        }
    }

    #[test]
    fn default_value_present_iff_declared() {
        let plain = text_column("plain").build();
        let with_default = text_column("kind").default_value("guest").build();
        assert_eq!(plain.default_value(), None);
        assert_eq!(with_default.default_value(), Some("guest"));
        assert!(with_default.has(ConstraintKind::Default));
    }

    #[test]
    fn not_null_follows_type_unless_declared() {
        let required = text_column("required").build();
        let optional = text_column("optional").nullable().build();
        let forced = text_column("forced").nullable().not_null().build();
        assert!(required.is_not_null());
        assert!(!optional.is_not_null());
        assert!(forced.is_not_null());
    }

    #[test]
    fn via_replaces_the_accessor() {
        let column = text_column("name")
            .via(Accessor::getter_setter::<User>("name", "set_name"))
            .build();
        assert!(column.matches(AccessorRef::getter::<User>("name", FieldType::TEXT)));
        assert!(!column.matches(AccessorRef::field::<User>("name", FieldType::TEXT)));
    }

    #[test]
    fn collation_and_foreign_key_readers() {
        let column = text_column("code")
            .collate("NOCASE")
            .references("countries", "code")
            .build();
        assert_eq!(column.collation(), Some("NOCASE"));
        let fk = column.foreign_key().expect("declared reference");
        assert_eq!((fk.table(), fk.column()), ("countries", "code"));
    }
}
