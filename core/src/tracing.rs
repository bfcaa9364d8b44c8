//! Tracing utilities for schema-definition observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate. The
//! macro no-ops when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event when a table descriptor is validated
/// and built.
///
/// ```ignore
/// trellis_trace_schema!(table.name(), table.columns_count());
/// ```
#[macro_export]
macro_rules! trellis_trace_schema {
    ($table:expr, $column_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %$table, columns = $column_count, "trellis.table");
    };
}
