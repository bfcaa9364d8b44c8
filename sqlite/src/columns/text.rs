//! TEXT column declarations.
//!
//! See: <https://sqlite.org/datatype3.html#text_datatype>

use super::column_fn;

column_fn!(text, TEXT, "TEXT");
