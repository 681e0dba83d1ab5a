//! Relations between record types.
//!
//! Two kinds exist and are never conflated: a child's `parentId` link to its
//! parent template, and same-tier id lists such as a workout's exercises.

use crate::{
    record::Record,
    types::{Field, RecordType},
    validate::FieldError,
};
use serde_json::Value;

///
/// RelationKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RelationKind {
    /// Child result → parent template. Deleting the parent deletes its children.
    ParentChild,
    /// Ordered id list pointing at same-tier records. Never cascades.
    CrossReference,
}

///
/// Relation
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Relation {
    pub source: RecordType,
    pub field: Field,
    pub target: RecordType,
    pub kind: RelationKind,
}

impl Relation {
    #[must_use]
    pub const fn parent_child(child: RecordType, parent: RecordType) -> Self {
        Self {
            source: child,
            field: Field::ParentId,
            target: parent,
            kind: RelationKind::ParentChild,
        }
    }

    #[must_use]
    pub const fn cross_reference(source: RecordType, field: Field, target: RecordType) -> Self {
        Self {
            source,
            field,
            target,
            kind: RelationKind::CrossReference,
        }
    }

    #[must_use]
    pub const fn cascades_on_delete(&self) -> bool {
        matches!(self.kind, RelationKind::ParentChild)
    }

    /// Ids a record points at through this relation.
    /// Values of the wrong shape are ignored; the validator reports those.
    #[must_use]
    pub fn referenced_ids<'a>(&self, record: &'a Record) -> Vec<&'a str> {
        match record.field(self.field) {
            Some(Value::String(id)) => vec![id.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

/// Same-tier references; parent/child links come from the schema table.
pub const CROSS_REFERENCES: &[Relation] = &[
    Relation::cross_reference(RecordType::Workout, Field::ExerciseIds, RecordType::Exercise),
    Relation::cross_reference(
        RecordType::WorkoutResult,
        Field::ExerciseResultIds,
        RecordType::ExerciseResult,
    ),
];

///
/// RecordLookup
/// Existence check supplied by the storage collaborator.
///

pub trait RecordLookup {
    fn contains(&self, record_type: RecordType, id: &str) -> bool;
}

/// Dangling references of `record` across `relations`, one error per id.
pub fn dangling_references<'r>(
    relations: impl IntoIterator<Item = &'r Relation>,
    record: &Record,
    lookup: &dyn RecordLookup,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for relation in relations {
        for id in relation.referenced_ids(record) {
            if !lookup.contains(relation.target, id) {
                errors.push(FieldError::Reference {
                    field: relation.field,
                    target: relation.target,
                    id: id.to_string(),
                });
            }
        }
    }

    errors
}
