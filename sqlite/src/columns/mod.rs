//! Per-type column declaration helpers, one module per storage class.
//!
//! Each helper returns a [`trellis_core::ColumnBuilder`] pre-bound to a
//! direct field accessor of the same name and the matching value-type tag,
//! so a declaration reads the way the table will:
//!
//! ```
//! use trellis_core::Table;
//! use trellis_sqlite::columns::{integer, text, text_nullable};
//!
//! struct User;
//!
//! let users = Table::builder("users")
//!     .column(integer::<User>("id").primary_key().autoincrement())
//!     .column(text::<User>("name").not_null())
//!     .column(text_nullable::<User>("email").unique())
//!     .build()
//!     .unwrap();
//! assert_eq!(users.column_names(), ["id", "name", "email"]);
//! ```

/// Generates the declaration-helper pair for one storage class.
macro_rules! column_fn {
    ($fn_name:ident, $tag:ident, $sql_name:literal) => {
        paste::paste! {
            #[doc = concat!("Declares a ", $sql_name, " column mapped to the field slot `name` of record type `R`.")]
            ///
            /// The accessor defaults to a direct field of the same name; use
            /// [`ColumnBuilder::via`](trellis_core::ColumnBuilder::via) to
            /// map through a getter or getter/setter pair instead.
            #[must_use]
            pub fn $fn_name<R: 'static>(name: &'static str) -> trellis_core::ColumnBuilder {
                trellis_core::Column::new(
                    name,
                    trellis_core::Accessor::field::<R>(name),
                    trellis_core::FieldType::$tag,
                )
            }

            #[doc = concat!(
                "Declares a nullable ", $sql_name, " column; shorthand for `",
                stringify!($fn_name), "(..).nullable()`.",
            )]
            #[must_use]
            pub fn [<$fn_name _nullable>]<R: 'static>(name: &'static str) -> trellis_core::ColumnBuilder {
                $fn_name::<R>(name).nullable()
            }
        }
    };
}
pub(crate) use column_fn;

mod blob;
mod boolean;
mod integer;
mod real;
mod text;

pub use blob::{blob, blob_nullable};
pub use boolean::{boolean, boolean_nullable};
pub use integer::{integer, integer_nullable};
pub use real::{real, real_nullable};
pub use text::{text, text_nullable};
