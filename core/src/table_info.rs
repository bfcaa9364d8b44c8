//! Rendered, introspection-compatible table metadata.

/// One rendered metadata row per column, shaped like a `PRAGMA table_info`
/// result row.
///
/// Field order is fixed for interop with introspection tooling. The row set
/// is a derived, disposable view and holds no reference back to the table
/// descriptor it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    /// 1-based column position.
    pub cid: i32,
    /// Column name.
    pub name: String,
    /// Canonical type name rendered by the type printer.
    pub r#type: String,
    /// Whether the column rejects NULL.
    pub notnull: bool,
    /// Rendered default literal, quoted per the printer's rule.
    pub dflt_value: Option<String>,
    /// 0 for non-key columns, else the 1-based ordinal within the primary
    /// key.
    pub pk: i32,
}

/// Overlays 1-based key ordinals onto `rows` for every name in `key_names`,
/// in key order; rows for non-key columns keep `pk == 0`.
pub(crate) fn overlay_key_ordinals(rows: &mut [TableInfo], key_names: &[&str]) {
    for (ordinal, key_name) in key_names.iter().enumerate() {
        if let Some(row) = rows.iter_mut().find(|row| row.name == *key_name) {
            row.pk = (ordinal + 1) as i32;
        }
    }
}
