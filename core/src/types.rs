//! Semantic value-type tags and the type-printer seam.

/// Storage classes a mapped column's value can take.
///
/// `Custom` covers user-defined convertible types that serialize to one of
/// the engine's storage classes and carry their own canonical type name;
/// `textual` opts such a type into the text quoting rule for rendered
/// default literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Signed integer values.
    Integer,
    /// 8-byte IEEE floating point values.
    Real,
    /// UTF-8 text values.
    Text,
    /// Raw binary values.
    Blob,
    /// Boolean values.
    Boolean,
    /// User-defined convertible type.
    Custom {
        /// Canonical type name rendered into metadata.
        name: &'static str,
        /// Whether default literals follow the text quoting rule.
        textual: bool,
    },
}

/// Semantic type tag of a column's value, including nullability.
///
/// Two tags are equal only when both the storage class and the nullable
/// wrapper agree; traversal by field type and accessor lookup both rely on
/// that.
///
/// # Examples
/// ```
/// use trellis_core::FieldType;
///
/// let email = FieldType::TEXT.nullable();
/// assert!(email.is_nullable());
/// assert_ne!(email, FieldType::TEXT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldType {
    scalar: ScalarType,
    nullable: bool,
}

impl FieldType {
    /// Non-nullable integer tag.
    pub const INTEGER: Self = Self::new(ScalarType::Integer);
    /// Non-nullable floating-point tag.
    pub const REAL: Self = Self::new(ScalarType::Real);
    /// Non-nullable text tag.
    pub const TEXT: Self = Self::new(ScalarType::Text);
    /// Non-nullable blob tag.
    pub const BLOB: Self = Self::new(ScalarType::Blob);
    /// Non-nullable boolean tag.
    pub const BOOLEAN: Self = Self::new(ScalarType::Boolean);

    /// Non-nullable tag for `scalar`.
    #[must_use]
    pub const fn new(scalar: ScalarType) -> Self {
        Self {
            scalar,
            nullable: false,
        }
    }

    /// Tag for a user-defined convertible type.
    #[must_use]
    pub const fn custom(name: &'static str, textual: bool) -> Self {
        Self::new(ScalarType::Custom { name, textual })
    }

    /// The same tag with the nullable wrapper applied.
    #[must_use]
    pub const fn nullable(self) -> Self {
        Self {
            scalar: self.scalar,
            nullable: true,
        }
    }

    /// The underlying storage class.
    #[must_use]
    pub const fn scalar(&self) -> ScalarType {
        self.scalar
    }

    /// Whether the tag carries the nullable wrapper.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// Maps semantic value-type tags to a target type system's canonical names
/// and default-literal quoting rule.
///
/// Implementations must be total over the tag set they accept: `None` from
/// [`type_name`](TypePrinter::type_name) is a definition error, surfaced as
/// [`SchemaError::UnmappedType`](crate::SchemaError::UnmappedType) by the
/// rendering operations, never a silent fallback.
pub trait TypePrinter {
    /// Canonical SQL type name for `ty`, or `None` when the tag is unmapped.
    fn type_name(&self, ty: FieldType) -> Option<&'static str>;

    /// Whether rendered default literals of `ty` are wrapped in single
    /// quotes.
    fn quotes_default(&self, ty: FieldType) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_wrapper_changes_identity() {
        assert_ne!(FieldType::INTEGER, FieldType::INTEGER.nullable());
        assert_eq!(FieldType::INTEGER.nullable().scalar(), ScalarType::Integer);
        assert!(FieldType::INTEGER.nullable().is_nullable());
        assert!(!FieldType::INTEGER.is_nullable());
    }

    #[test]
    fn nullable_is_idempotent() {
        let once = FieldType::TEXT.nullable();
        assert_eq!(once, once.nullable());
    }

    #[test]
    fn custom_tags_compare_by_name_and_quoting() {
        let uuid = FieldType::custom("UUID", false);
        assert_eq!(uuid, FieldType::custom("UUID", false));
        assert_ne!(uuid, FieldType::custom("UUID", true));
        assert_ne!(uuid, FieldType::custom("ULID", false));
    }
}
