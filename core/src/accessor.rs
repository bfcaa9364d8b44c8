//! Accessor identities: how a column's value is reached on the host record.

use core::any::TypeId;

use smallvec::{SmallVec, smallvec};

use crate::types::FieldType;

/// Identity of one member of the host record type.
///
/// Two refs denote the same member iff they name the same member of the
/// same record type; the comparison never inspects the member itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberRef {
    record: TypeId,
    name: &'static str,
}

impl MemberRef {
    /// Identity of the member `name` on record type `R`.
    #[must_use]
    pub fn of<R: 'static>(name: &'static str) -> Self {
        Self {
            record: TypeId::of::<R>(),
            name,
        }
    }

    /// The member name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// How a column's value is read and written on the host record type.
///
/// Exactly one variant is active per column. Identity never crosses
/// variants: a getter over the member a field accessor covers is a distinct
/// accessor, so separately-declared paths to the same underlying value
/// cannot alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// Direct access to a field slot.
    Field(MemberRef),
    /// Read-only access through a getter function.
    Getter(MemberRef),
    /// Paired getter and setter functions.
    GetterSetter {
        /// Identity of the read function.
        get: MemberRef,
        /// Identity of the write function.
        set: MemberRef,
    },
}

impl Accessor {
    /// Accessor for the field slot `name` on record type `R`.
    #[must_use]
    pub fn field<R: 'static>(name: &'static str) -> Self {
        Self::Field(MemberRef::of::<R>(name))
    }

    /// Accessor for the getter function `name` on record type `R`.
    #[must_use]
    pub fn getter<R: 'static>(name: &'static str) -> Self {
        Self::Getter(MemberRef::of::<R>(name))
    }

    /// Accessor for a getter/setter pair on record type `R`.
    #[must_use]
    pub fn getter_setter<R: 'static>(get: &'static str, set: &'static str) -> Self {
        Self::GetterSetter {
            get: MemberRef::of::<R>(get),
            set: MemberRef::of::<R>(set),
        }
    }

    /// Whether `candidate` resolves to this accessor.
    ///
    /// A field candidate matches only a [`Field`](Self::Field) accessor over
    /// the same member; a getter candidate matches the getter ref of
    /// [`Getter`](Self::Getter) or [`GetterSetter`](Self::GetterSetter); a
    /// setter candidate matches only the setter ref of a
    /// [`GetterSetter`](Self::GetterSetter). Everything else is false.
    #[must_use]
    pub fn matches(&self, candidate: AccessorRef) -> bool {
        self.targets().contains(&candidate.target())
    }

    /// Whether some candidate handle could resolve to both accessors.
    ///
    /// Table validation uses this to reject two columns bound to the same
    /// field, getter, or setter.
    #[must_use]
    pub fn overlaps(&self, other: &Accessor) -> bool {
        let own = self.targets();
        other.targets().iter().any(|target| own.contains(target))
    }

    /// The candidate handles that resolve to this accessor.
    pub(crate) fn targets(&self) -> SmallVec<[AccessorTarget; 2]> {
        match self {
            Self::Field(member) => smallvec![AccessorTarget::Field(*member)],
            Self::Getter(member) => smallvec![AccessorTarget::Getter(*member)],
            Self::GetterSetter { get, set } => smallvec![
                AccessorTarget::Getter(*get),
                AccessorTarget::Setter(*set),
            ],
        }
    }
}

/// The access path a lookup candidate names: a field slot, a getter, or a
/// setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorTarget {
    /// A field slot.
    Field(MemberRef),
    /// A getter function.
    Getter(MemberRef),
    /// A setter function.
    Setter(MemberRef),
}

/// Lookup handle naming one access path and its declared value type.
///
/// Mirrors the three ways a caller can hold onto a mapped member; the
/// declared type narrows lookups to columns of the same value type before
/// identity comparison.
///
/// # Examples
/// ```
/// use trellis_core::{Accessor, AccessorRef, FieldType};
///
/// struct User;
///
/// let column = Accessor::getter_setter::<User>("email", "set_email");
/// let by_getter = AccessorRef::getter::<User>("email", FieldType::TEXT);
/// let by_setter = AccessorRef::setter::<User>("set_email", FieldType::TEXT);
/// assert!(column.matches(by_getter));
/// assert!(column.matches(by_setter));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessorRef {
    target: AccessorTarget,
    field_type: FieldType,
}

impl AccessorRef {
    /// Candidate naming the field slot `name` on record type `R`.
    #[must_use]
    pub fn field<R: 'static>(name: &'static str, field_type: FieldType) -> Self {
        Self {
            target: AccessorTarget::Field(MemberRef::of::<R>(name)),
            field_type,
        }
    }

    /// Candidate naming the getter function `name` on record type `R`.
    #[must_use]
    pub fn getter<R: 'static>(name: &'static str, field_type: FieldType) -> Self {
        Self {
            target: AccessorTarget::Getter(MemberRef::of::<R>(name)),
            field_type,
        }
    }

    /// Candidate naming the setter function `name` on record type `R`.
    #[must_use]
    pub fn setter<R: 'static>(name: &'static str, field_type: FieldType) -> Self {
        Self {
            target: AccessorTarget::Setter(MemberRef::of::<R>(name)),
            field_type,
        }
    }

    /// The declared value type of the named member.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The named access path.
    #[must_use]
    pub const fn target(&self) -> AccessorTarget {
        self.target
    }
}
