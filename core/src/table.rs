//! Table descriptors: the ordered, validated column catalogue.

use compact_str::CompactString;
use hashbrown::{HashMap, HashSet};

use crate::{
    accessor::{AccessorRef, AccessorTarget},
    column::Column,
    constraint::{ConstraintKind, TableConstraint},
    error::{Result, SchemaError},
    table_info::{TableInfo, overlay_key_ordinals},
    traverse::{ColumnFilter, filtered},
    types::{FieldType, TypePrinter},
};

/// Immutable ordered catalogue of one mapped table: columns in declaration
/// order plus table-level constraints.
///
/// Declaration order is semantically significant — it is the positional
/// order generated statements bind and select in. All operations are pure
/// reads over owned data, so a built descriptor is safe to share across
/// threads without locking; transforms such as [`Table::without_rowid`]
/// produce independent copies and never mutate the receiver.
///
/// Built only through [`Table::builder`], which validates the whole
/// definition before producing a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: CompactString,
    columns: Vec<Column>,
    constraints: Vec<TableConstraint>,
    without_rowid: bool,
}

impl Table {
    /// Starts a table definition.
    pub fn builder(name: impl Into<CompactString>) -> TableBuilder {
        TableBuilder {
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
            without_rowid: false,
        }
    }

    /// The table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Table-level constraints in declaration order.
    #[must_use]
    pub fn table_constraints(&self) -> &[TableConstraint] {
        &self.constraints
    }

    /// Count of mapped columns; table-level constraints are not counted.
    #[must_use]
    pub fn columns_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in declaration order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    // --- traversal ---------------------------------------------------------

    /// Columns admitted by `filter`, in declaration order.
    pub fn columns_filtered(&self, filter: ColumnFilter) -> impl Iterator<Item = &Column> {
        filtered(&self.columns, filter)
    }

    /// Columns carrying a constraint of `kind`.
    pub fn columns_with(&self, kind: ConstraintKind) -> impl Iterator<Item = &Column> {
        self.columns_filtered(ColumnFilter::With(kind))
    }

    /// Columns not carrying a constraint of `kind`.
    pub fn columns_except(&self, kind: ConstraintKind) -> impl Iterator<Item = &Column> {
        self.columns_filtered(ColumnFilter::Without(kind))
    }

    /// Columns whose value type equals `ty`.
    pub fn columns_of_type(&self, ty: FieldType) -> impl Iterator<Item = &Column> {
        self.columns_filtered(ColumnFilter::OfType(ty))
    }

    /// Visits every column in declaration order.
    pub fn for_each_column(&self, mut visit: impl FnMut(&Column)) {
        self.columns_filtered(ColumnFilter::All)
            .for_each(|column| visit(column));
    }

    /// Visits columns carrying a constraint of `kind`, in declaration order.
    pub fn for_each_column_with(&self, kind: ConstraintKind, mut visit: impl FnMut(&Column)) {
        self.columns_with(kind).for_each(|column| visit(column));
    }

    /// Visits columns not carrying a constraint of `kind`, in declaration
    /// order.
    pub fn for_each_column_except(&self, kind: ConstraintKind, mut visit: impl FnMut(&Column)) {
        self.columns_except(kind).for_each(|column| visit(column));
    }

    /// Visits columns whose value type equals `ty`, in declaration order.
    pub fn for_each_column_with_field_type(&self, ty: FieldType, mut visit: impl FnMut(&Column)) {
        self.columns_of_type(ty).for_each(|column| visit(column));
    }

    // --- keys --------------------------------------------------------------

    /// Names of the primary-key columns, in key order.
    ///
    /// Column-level markers win over a table-level composite key; when more
    /// than one column carries the marker, all are returned in declaration
    /// order as an implicit composite. Without either form the result is
    /// empty and the storage engine's implicit row identifier applies.
    #[must_use]
    pub fn primary_key_column_names(&self) -> Vec<&str> {
        let names: Vec<&str> = self
            .columns_with(ConstraintKind::PrimaryKey)
            .map(Column::name)
            .collect();
        if !names.is_empty() {
            return names;
        }
        self.composite_key_column_names()
    }

    fn composite_key_column_names(&self) -> Vec<&str> {
        self.constraints
            .iter()
            .find_map(|constraint| match constraint {
                TableConstraint::PrimaryKey(refs) => Some(
                    refs.iter()
                        .filter_map(|candidate| self.find_column_name(*candidate))
                        .collect(),
                ),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Name of the column `candidate` is bound to, or `None` when no column
    /// matches.
    ///
    /// The scan is limited to columns whose value type equals the
    /// candidate's declared type, and identity comparison never crosses
    /// accessor variants. A miss is an explicit `None`, never an empty
    /// name.
    #[must_use]
    pub fn find_column_name(&self, candidate: AccessorRef) -> Option<&str> {
        self.columns_of_type(candidate.field_type())
            .find(|column| column.matches(candidate))
            .map(Column::name)
    }

    /// Names of columns carrying any of `kinds`.
    ///
    /// A column appears once, at the position of the first listed kind it
    /// matches; within one kind, declaration order is kept.
    #[must_use]
    pub fn column_names_with(&self, kinds: &[ConstraintKind]) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for &kind in kinds {
            for column in self.columns_with(kind) {
                if !names.contains(&column.name()) {
                    names.push(column.name());
                }
            }
        }
        names
    }

    // --- rendering ---------------------------------------------------------

    /// Renders one metadata row per column, in declaration order.
    ///
    /// `cid` is the 1-based position. `pk` carries the 1-based ordinal
    /// within [`primary_key_column_names`](Table::primary_key_column_names)
    /// for key columns and 0 elsewhere. Default literals are quoted per the
    /// printer's rule.
    pub fn table_info(&self, printer: &dyn TypePrinter) -> Result<Vec<TableInfo>> {
        let mut rows = Vec::with_capacity(self.columns.len());
        for (index, column) in self.columns.iter().enumerate() {
            let type_name = printer.type_name(column.value_type()).ok_or_else(|| {
                SchemaError::UnmappedType {
                    column: column.name().to_owned(),
                }
            })?;
            let dflt_value = column.default_value().map(|literal| {
                if printer.quotes_default(column.value_type()) {
                    format!("'{literal}'")
                } else {
                    literal.to_owned()
                }
            });
            rows.push(TableInfo {
                cid: (index + 1) as i32,
                name: column.name().to_owned(),
                r#type: type_name.to_owned(),
                notnull: column.is_not_null(),
                dflt_value,
                pk: 0,
            });
        }
        overlay_key_ordinals(&mut rows, &self.primary_key_column_names());
        Ok(rows)
    }

    /// Fails when `printer` lacks a mapping for any column's value type.
    ///
    /// Run right after [`TableBuilder::build`] to keep unmapped tags a
    /// definition-time failure even when rendering is deferred.
    pub fn check_types(&self, printer: &dyn TypePrinter) -> Result<()> {
        for column in &self.columns {
            if printer.type_name(column.value_type()).is_none() {
                return Err(SchemaError::UnmappedType {
                    column: column.name().to_owned(),
                });
            }
        }
        Ok(())
    }

    // --- transforms --------------------------------------------------------

    /// An independent copy with the WITHOUT ROWID flag set; the receiver is
    /// unchanged.
    #[must_use]
    pub fn without_rowid(&self) -> Table {
        let mut copy = self.clone();
        copy.without_rowid = true;
        copy
    }

    /// Whether the WITHOUT ROWID flag is set.
    #[must_use]
    pub const fn is_without_rowid(&self) -> bool {
        self.without_rowid
    }
}

/// Collects a table definition and validates it on
/// [`build`](TableBuilder::build).
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: CompactString,
    columns: Vec<Column>,
    constraints: Vec<TableConstraint>,
    without_rowid: bool,
}

impl TableBuilder {
    /// Appends a column; declaration order is kept.
    #[must_use]
    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Declares a table-level composite primary key; reference order is key
    /// order.
    #[must_use]
    pub fn primary_key<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = AccessorRef>,
    {
        self.constraints
            .push(TableConstraint::PrimaryKey(columns.into_iter().collect()));
        self
    }

    /// Declares a table-level foreign key; `parent_columns` positionally
    /// match `columns`.
    #[must_use]
    pub fn foreign_key<I, P, S>(
        mut self,
        columns: I,
        parent_table: impl Into<CompactString>,
        parent_columns: P,
    ) -> Self
    where
        I: IntoIterator<Item = AccessorRef>,
        P: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.constraints.push(TableConstraint::ForeignKey {
            columns: columns.into_iter().collect(),
            parent_table: parent_table.into(),
            parent_columns: parent_columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Sets the WITHOUT ROWID flag on the built table.
    #[must_use]
    pub fn without_rowid(mut self) -> Self {
        self.without_rowid = true;
        self
    }

    /// Validates the collected definition and produces the descriptor.
    ///
    /// Malformed definitions are rejected whole — no partially-valid table
    /// is ever produced, and none of the checks here are deferred to
    /// traversal time.
    pub fn build(self) -> Result<Table> {
        let table = Table {
            name: self.name,
            columns: self.columns,
            constraints: self.constraints,
            without_rowid: self.without_rowid,
        };
        table.validate()?;
        crate::trellis_trace_schema!(table.name(), table.columns_count());
        Ok(table)
    }
}

impl Table {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyTableName);
        }

        let mut names: HashSet<&str> = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !names.insert(column.name()) {
                return Err(SchemaError::DuplicateColumnName {
                    name: column.name().to_owned(),
                });
            }
        }

        let mut bound: HashMap<AccessorTarget, &str> = HashMap::with_capacity(self.columns.len());
        for column in &self.columns {
            for target in column.accessor().targets() {
                if let Some(first) = bound.insert(target, column.name()) {
                    return Err(SchemaError::DuplicateAccessor {
                        first: first.to_owned(),
                        second: column.name().to_owned(),
                    });
                }
            }
        }

        let has_composite = self
            .constraints
            .iter()
            .any(|constraint| matches!(constraint, TableConstraint::PrimaryKey(_)));
        if has_composite {
            if let Some(column) = self
                .columns
                .iter()
                .find(|column| column.has(ConstraintKind::PrimaryKey))
            {
                return Err(SchemaError::ConflictingPrimaryKey {
                    column: column.name().to_owned(),
                });
            }
        }

        for constraint in &self.constraints {
            let refs = match constraint {
                TableConstraint::PrimaryKey(refs) => refs.as_slice(),
                TableConstraint::ForeignKey { columns, .. } => columns.as_slice(),
            };
            for &candidate in refs {
                if self.find_column_name(candidate).is_none() {
                    return Err(SchemaError::UnknownKeyReference {
                        table: self.name().to_owned(),
                    });
                }
            }
        }

        Ok(())
    }
}
