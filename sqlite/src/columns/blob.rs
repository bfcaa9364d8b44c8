//! BLOB column declarations.
//!
//! See: <https://sqlite.org/datatype3.html#blob_datatype>

use super::column_fn;

column_fn!(blob, BLOB, "BLOB");
