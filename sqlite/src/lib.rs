//! SQLite dialect for the trellis schema engine.
//!
//! Provides the SQLite rendering of the type-printer seam — canonical type
//! names and the default-literal quoting rule — plus per-type column
//! declaration helpers mirroring SQLite's storage classes.

pub mod columns;
pub mod types;

pub use columns::{
    blob, blob_nullable, boolean, boolean_nullable, integer, integer_nullable, real,
    real_nullable, text, text_nullable,
};
pub use types::SqliteTypePrinter;
