//! INTEGER column declarations.
//!
//! See: <https://sqlite.org/datatype3.html#integer_datatype>

use super::column_fn;

column_fn!(integer, INTEGER, "INTEGER");
