//! Helpers over lists of JSON records

use serde_json::Value;

use crate::value::{Object, scalar_key};

/// Fields compared by [`filter_by`]
const FILTER_FIELDS: [&str; 3] = ["id", "name", "age"];

/// First record sharing at least one key/value pair with `condition`
///
/// `{id: 46}` finds the first record whose `id` is 46, `{name: 'Anna'}` the
/// first whose `name` is Anna.
#[must_use]
pub fn find_by<'a>(records: &'a [Value], condition: &Object) -> Option<&'a Value> {
    records.iter().find(|record| {
        record.as_object().is_some_and(|fields| {
            fields
                .iter()
                .any(|(key, value)| condition.get(key) == Some(value))
        })
    })
}

/// Records whose `id`, `name` or `age` equals the same field of `condition`
///
/// Unlike [`find_by`] only these three fields are compared, and a field
/// absent from both the record and the condition counts as equal.
#[must_use]
pub fn filter_by(records: &[Value], condition: &Object) -> Vec<Value> {
    records
        .iter()
        .filter(|record| {
            FILTER_FIELDS
                .iter()
                .any(|field| record.get(field) == condition.get(*field))
        })
        .cloned()
        .collect()
}

/// Records indexed by the string form of their `key` field
///
/// Records without a scalar `key` are skipped; a later record replaces an
/// earlier one with the same key.
#[must_use]
pub fn key_by(records: &[Value], key: &str) -> Object {
    let mut keyed = Object::new();
    for record in records {
        match record.get(key).and_then(scalar_key) {
            Some(name) => {
                keyed.insert(name, record.clone());
            }
            None => tracing::trace!("record without scalar '{}' skipped", key),
        }
    }
    keyed
}

/// Each record with `properties` added (overwriting existing keys)
#[must_use]
pub fn add_extra_properties(records: &[Value], properties: &Object) -> Vec<Value> {
    records
        .iter()
        .map(|record| match record {
            Value::Object(fields) => {
                let mut extended = fields.clone();
                extended.extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
                Value::Object(extended)
            }
            other => other.clone(),
        })
        .collect()
}

/// Each record without the listed keys
#[must_use]
pub fn remove_properties(records: &[Value], properties: &[&str]) -> Vec<Value> {
    records
        .iter()
        .map(|record| match record {
            Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .filter(|(key, _)| !properties.contains(&key.as_str()))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
            other => other.clone(),
        })
        .collect()
}

/// Records whose `id` is in `selected_ids` gain `selected: true`
#[must_use]
pub fn set_selected(records: &[Value], selected_ids: &[Value]) -> Vec<Value> {
    records
        .iter()
        .map(|record| match (record, record.get("id")) {
            (Value::Object(fields), Some(id)) if selected_ids.contains(id) => {
                let mut selected = fields.clone();
                selected.insert("selected".to_string(), Value::Bool(true));
                Value::Object(selected)
            }
            _ => record.clone(),
        })
        .collect()
}

/// Each record's `key` field, or the record itself where the field is absent
///
/// If no record has the field the records are returned unchanged.
#[must_use]
pub fn map_to(records: &[Value], key: &str) -> Vec<Value> {
    records
        .iter()
        .map(|record| record.get(key).unwrap_or(record).clone())
        .collect()
}

/// True if `predicate` holds for every record
pub fn are_items_valid<P>(records: &[Value], predicate: P) -> bool
where
    P: FnMut(&Value) -> bool,
{
    records.iter().all(predicate)
}

/// For each id, in order, the records of `data` whose `key` equals it
#[must_use]
pub fn populate(ids: &[Value], data: &[Value], key: &str) -> Vec<Value> {
    ids.iter()
        .flat_map(|id| {
            data.iter()
                .filter(move |record| record.get(key) == Some(id))
                .cloned()
        })
        .collect()
}
