//! Stateless conversions between entities and wire records.
//!
//! All three functions are total: missing input yields an empty record, a
//! default entity, or an `UNKNOWN` health status, never an error. No field is
//! validated here.

use crate::models::{Entity, HealthRule, HealthStatus, Record};

/// Entity → record with every declared field, in declaration (alphabetical)
/// order. Unset fields are emitted as null.
pub fn to_record<E: Entity>(entity: Option<&E>) -> Record {
    let Some(entity) = entity else {
        return Record::new();
    };

    let mut record = Record::with_capacity(E::FIELDS.len());
    for &name in E::FIELDS {
        record.insert(name, entity.field(name).map(str::to_string));
    }
    record
}

/// Record → entity. A declared key copies its text (null becomes `"null"`);
/// absent keys leave the field unset and undeclared keys are dropped.
pub fn from_record<E: Entity>(record: Option<&Record>) -> E {
    let mut entity = E::default();
    let Some(record) = record else {
        return entity;
    };

    for &name in E::FIELDS {
        if let Some(text) = record.text(name) {
            entity.set_field(name, Some(text));
        }
    }
    entity
}

/// Health derived from whether an entity reference was supplied. This is not a
/// liveness probe.
pub fn derive_health<E: Entity>(entity: Option<&E>) -> HealthStatus {
    match (E::HEALTH_RULE, entity) {
        (_, None) => HealthStatus::unknown(),
        (HealthRule::Presence, Some(_)) => HealthStatus::up(),
        (HealthRule::EntityStatus, Some(entity)) => match entity.field("status") {
            Some(status) => HealthStatus::new(status),
            None => HealthStatus::unknown(),
        },
    }
}
