use crate::types::Field;
use std::fmt::{self, Display};

///
/// IndexKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexKind {
    /// `++field`: storage-assigned, auto-incrementing primary key.
    AutoIncrement,
    /// `&field`: unique primary key.
    Unique,
    /// `field`: plain secondary index.
    Plain,
}

impl IndexKind {
    const fn prefix(self) -> &'static str {
        match self {
            Self::AutoIncrement => "++",
            Self::Unique => "&",
            Self::Plain => "",
        }
    }
}

///
/// IndexDecl
/// One index over one field of a record type's table.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexDecl {
    pub field: Field,
    pub kind: IndexKind,
}

impl IndexDecl {
    #[must_use]
    pub const fn auto_increment(field: Field) -> Self {
        Self {
            field,
            kind: IndexKind::AutoIncrement,
        }
    }

    #[must_use]
    pub const fn unique(field: Field) -> Self {
        Self {
            field,
            kind: IndexKind::Unique,
        }
    }

    #[must_use]
    pub const fn plain(field: Field) -> Self {
        Self {
            field,
            kind: IndexKind::Plain,
        }
    }

    /// Whether no two records may share a value of this field.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        matches!(self.kind, IndexKind::AutoIncrement | IndexKind::Unique)
    }
}

impl Display for IndexDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.field)
    }
}

/// Render index declarations in the comma-separated storage format.
#[must_use]
pub fn render_indices(indices: &[IndexDecl]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_storage_declarations() {
        assert_eq!(render_indices(&[IndexDecl::auto_increment(Field::AutoId)]), "++autoId");
        assert_eq!(render_indices(&[IndexDecl::unique(Field::Key)]), "&key");
        assert_eq!(
            render_indices(&[IndexDecl::unique(Field::Id), IndexDecl::plain(Field::ParentId)]),
            "&id, parentId"
        );
    }

    #[test]
    fn plain_indices_are_not_unique() {
        assert!(IndexDecl::unique(Field::Id).is_unique());
        assert!(!IndexDecl::plain(Field::ParentId).is_unique());
    }
}
