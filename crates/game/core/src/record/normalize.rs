//! Attribute normalization from raw source data.
use super::{CreatureId, CreatureRecord, Generation, RawCreature, RawValue};

/// Canonical lookup key for a name: trimmed, lowercased, whitespace runs
/// collapsed into single hyphens.
pub fn canonical_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Converts a raw record into a [`CreatureRecord`].
///
/// Never fails. Unreadable fields degrade instead: non-numeric measurements
/// become NaN, a non-list `types` becomes the empty set, an unparseable
/// generation becomes unknown. `fallback_id` is used when the record carries
/// no usable identifier of its own (datasets keyed by id often omit it).
pub fn normalize(raw: &RawCreature, fallback_id: CreatureId) -> CreatureRecord {
    let id = raw.id.to_id().map(CreatureId).unwrap_or(fallback_id);
    let name = raw.name.to_text().unwrap_or_default();

    let types: Vec<String> = match &raw.types {
        RawValue::List(items) => items.iter().filter_map(RawValue::to_text).collect(),
        _ => Vec::new(),
    };

    let record = CreatureRecord::new(
        id,
        &name,
        raw.height.to_number(),
        raw.weight.to_number(),
        types,
        Generation::from_raw(&raw.generation),
    );

    match raw.img_url.to_text() {
        Some(image) if !image.is_empty() => record.with_image(image),
        _ => record,
    }
}
