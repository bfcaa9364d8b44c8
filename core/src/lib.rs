//! Dialect-independent schema reflection for struct↔table mappings.
//!
//! A [`Table`] is an immutable, ordered, validated catalogue of [`Column`]
//! descriptors plus table-level constraints. Columns are reached through
//! [`Accessor`] identities (field slot, getter, or getter/setter pair),
//! filtered traversal runs through one [`ColumnFilter`] engine, and the
//! catalogue renders into `PRAGMA table_info`-style [`TableInfo`] rows via a
//! pluggable [`TypePrinter`].
//!
//! Everything here is synchronous, in-memory, and read-only after
//! construction; descriptors can be shared across threads freely.

pub mod accessor;
pub mod column;
pub mod constraint;
pub mod error;
pub mod table;
pub mod table_info;
pub mod tracing;
pub mod traverse;
pub mod types;

pub use accessor::{Accessor, AccessorRef, AccessorTarget, MemberRef};
pub use column::{Column, ColumnBuilder};
pub use constraint::{Constraint, ConstraintKind, ForeignKeyRef, TableConstraint};
pub use error::{Result, SchemaError};
pub use table::{Table, TableBuilder};
pub use table_info::TableInfo;
pub use traverse::{ColumnFilter, filtered};
pub use types::{FieldType, ScalarType, TypePrinter};
