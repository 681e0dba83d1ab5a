//! Assembly-time consistency checks over the whole schema table.
//!
//! A violation here is a programming error in the static tables, never a
//! runtime condition. Every violation is collected so one failed assembly
//! reports the full picture.

use crate::{
    relation::Relation,
    schema::{TypeSchema, index::IndexKind},
    types::{Field, Group, RecordType},
};
use std::{collections::HashSet, fmt::Write as _};
use thiserror::Error as ThisError;

///
/// SchemaIntegrityError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaIntegrityError {
    #[error("{record_type}: default for '{field}' is rejected by its validator ({detail})")]
    DefaultRejected {
        record_type: RecordType,
        field: Field,
        detail: String,
    },

    #[error("{record_type}: defined {count} times")]
    DuplicateDefinition { record_type: RecordType, count: usize },

    #[error("{record_type}: field '{field}' appears more than once")]
    DuplicateField { record_type: RecordType, field: Field },

    #[error("{record_type}: identifier field '{field}' has an input binding")]
    EditableIdentifier { record_type: RecordType, field: Field },

    #[error("{record_type}: hidden column '{column}' does not carry an identifier field")]
    HiddenColumnNotIdentifier {
        record_type: RecordType,
        column: &'static str,
    },

    #[error("{record_type}: index on undeclared field '{field}'")]
    IndexFieldUndeclared { record_type: RecordType, field: Field },

    #[error("{record_type}: link to {linked} does not point back")]
    LinkNotSymmetric {
        record_type: RecordType,
        linked: RecordType,
    },

    #[error("{record_type}: linked type {linked} is not in group {expected}")]
    LinkWrongGroup {
        record_type: RecordType,
        linked: RecordType,
        expected: Group,
    },

    #[error("{record_type}: no definition")]
    MissingDefinition { record_type: RecordType },

    #[error("{record_type}: {group} type has no {link} type")]
    MissingLink {
        record_type: RecordType,
        group: Group,
        link: &'static str,
    },

    #[error("{record_type}: child type is not indexed by 'parentId'")]
    MissingParentIndex { record_type: RecordType },

    #[error("{record_type}: table is not uniquely indexed by 'id'")]
    MissingUniqueId { record_type: RecordType },

    #[error("{record_type}: relation field '{field}' is not declared")]
    RelationFieldUndeclared { record_type: RecordType, field: Field },

    #[error("{record_type}: standard columns do not match field descriptors")]
    StandardColumnsMismatch { record_type: RecordType },

    #[error("{record_type}: {group} type must not link to {linked}")]
    UnexpectedLink {
        record_type: RecordType,
        group: Group,
        linked: RecordType,
    },

    #[error("{record_type}: validator fields do not match field descriptors")]
    ValidatorMismatch { record_type: RecordType },

    #[error("{record_type}: visible column '{field}' has no table column")]
    VisibleColumnUnknown { record_type: RecordType, field: Field },
}

///
/// IntegrityErrors
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{}", render(.0))]
pub struct IntegrityErrors(pub Vec<SchemaIntegrityError>);

impl IntegrityErrors {
    #[must_use]
    pub fn errors(&self) -> &[SchemaIntegrityError] {
        &self.0
    }
}

fn render(errors: &[SchemaIntegrityError]) -> String {
    let mut out = format!("schema integrity check failed ({} errors)", errors.len());
    for err in errors {
        let _ = write!(out, "; {err}");
    }

    out
}

/// Run every check over `schemas` and `relations`.
pub(crate) fn check(
    schemas: &[TypeSchema],
    relations: &[Relation],
) -> Result<(), IntegrityErrors> {
    let mut errors = Vec::new();

    check_definitions(schemas, &mut errors);
    for schema in schemas {
        check_links(schema, schemas, &mut errors);
        check_fields(schema, &mut errors);
        check_columns(schema, &mut errors);
        check_indices(schema, &mut errors);
        check_defaults(schema, &mut errors);
    }
    check_relations(schemas, relations, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(IntegrityErrors(errors))
    }
}

//
// ============================================================================
// Checks
// ============================================================================
//

fn check_definitions(schemas: &[TypeSchema], errors: &mut Vec<SchemaIntegrityError>) {
    for record_type in RecordType::ALL.iter().copied() {
        match schemas.iter().filter(|s| s.record_type == record_type).count() {
            0 => errors.push(SchemaIntegrityError::MissingDefinition { record_type }),
            1 => {}
            count => {
                errors.push(SchemaIntegrityError::DuplicateDefinition { record_type, count });
            }
        }
    }
}

fn find(schemas: &[TypeSchema], record_type: RecordType) -> Option<&TypeSchema> {
    schemas.iter().find(|s| s.record_type == record_type)
}

fn check_links(
    schema: &TypeSchema,
    schemas: &[TypeSchema],
    errors: &mut Vec<SchemaIntegrityError>,
) {
    let record_type = schema.record_type;
    let group = schema.group;

    // (link that must be absent, link that must be present)
    let (forbidden, required) = match group {
        Group::Internal => ([schema.parent_type, schema.child_type], None),
        Group::Parent => (
            [schema.parent_type, None],
            Some(("child", schema.child_type, Group::Child)),
        ),
        Group::Child => (
            [schema.child_type, None],
            Some(("parent", schema.parent_type, Group::Parent)),
        ),
    };

    for linked in forbidden.into_iter().flatten() {
        errors.push(SchemaIntegrityError::UnexpectedLink {
            record_type,
            group,
            linked,
        });
    }

    let Some((link, target, expected)) = required else {
        return;
    };
    let Some(linked) = target else {
        errors.push(SchemaIntegrityError::MissingLink {
            record_type,
            group,
            link,
        });
        return;
    };
    let Some(other) = find(schemas, linked) else {
        // reported by check_definitions
        return;
    };

    if other.group != expected {
        errors.push(SchemaIntegrityError::LinkWrongGroup {
            record_type,
            linked,
            expected,
        });
    }

    let back = match group {
        Group::Parent => other.parent_type,
        _ => other.child_type,
    };
    if back != Some(record_type) {
        errors.push(SchemaIntegrityError::LinkNotSymmetric {
            record_type,
            linked,
        });
    }
}

fn check_fields(schema: &TypeSchema, errors: &mut Vec<SchemaIntegrityError>) {
    let record_type = schema.record_type;

    let mut seen = HashSet::new();
    for props in &schema.field_props {
        if !seen.insert(props.field) {
            errors.push(SchemaIntegrityError::DuplicateField {
                record_type,
                field: props.field,
            });
        }
        if props.field.is_identifier() && props.is_editable() {
            errors.push(SchemaIntegrityError::EditableIdentifier {
                record_type,
                field: props.field,
            });
        }
    }

    if !schema.validator.fields().eq(schema.fields()) {
        errors.push(SchemaIntegrityError::ValidatorMismatch { record_type });
    }
}

fn check_columns(schema: &TypeSchema, errors: &mut Vec<SchemaIntegrityError>) {
    let record_type = schema.record_type;

    let standard: Vec<Field> = schema
        .table_columns
        .iter()
        .filter(|c| !c.hidden)
        .map(|c| c.field)
        .collect();
    if !standard.iter().copied().eq(schema.fields()) {
        errors.push(SchemaIntegrityError::StandardColumnsMismatch { record_type });
    }

    for column in schema.table_columns.iter().filter(|c| c.hidden) {
        if !column.field.is_identifier() {
            errors.push(SchemaIntegrityError::HiddenColumnNotIdentifier {
                record_type,
                column: column.name,
            });
        }
    }

    for field in schema.visible_columns {
        if !standard.contains(field) {
            errors.push(SchemaIntegrityError::VisibleColumnUnknown {
                record_type,
                field: *field,
            });
        }
    }
}

fn check_indices(schema: &TypeSchema, errors: &mut Vec<SchemaIntegrityError>) {
    let record_type = schema.record_type;

    for index in schema.indices {
        if !schema.declares(index.field) {
            errors.push(SchemaIntegrityError::IndexFieldUndeclared {
                record_type,
                field: index.field,
            });
        }
    }

    if schema.group == Group::Internal {
        return;
    }

    let unique_id = schema
        .indices
        .iter()
        .any(|i| i.field == Field::Id && i.kind == IndexKind::Unique);
    if !unique_id {
        errors.push(SchemaIntegrityError::MissingUniqueId { record_type });
    }

    if schema.group == Group::Child && !schema.indices.iter().any(|i| i.field == Field::ParentId) {
        errors.push(SchemaIntegrityError::MissingParentIndex { record_type });
    }
}

fn check_defaults(schema: &TypeSchema, errors: &mut Vec<SchemaIntegrityError>) {
    for props in &schema.field_props {
        let Some(value) = props.default_value() else {
            continue;
        };

        if let Err(detail) = props.validator.apply(Some(&value)) {
            errors.push(SchemaIntegrityError::DefaultRejected {
                record_type: schema.record_type,
                field: props.field,
                detail,
            });
        }
    }
}

fn check_relations(
    schemas: &[TypeSchema],
    relations: &[Relation],
    errors: &mut Vec<SchemaIntegrityError>,
) {
    for relation in relations {
        let declared = find(schemas, relation.source).is_some_and(|s| s.declares(relation.field));
        if !declared {
            errors.push(SchemaIntegrityError::RelationFieldUndeclared {
                record_type: relation.source,
                field: relation.field,
            });
        }
    }
}
