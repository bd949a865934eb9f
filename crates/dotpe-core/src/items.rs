//! Ongoing-items payload handling and the accumulated per-store result map.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Returns `true` for payloads that count as "no items": JSON `null`, an
/// empty object, or an empty array.
///
/// Scalars, including `""`, `0`, and `false`, are kept as real payloads.
#[must_use]
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Store number → ongoing-items payload, ordered by store number.
///
/// The driver walks its range in ascending order, so key order is also
/// insertion order. Serializes as a JSON object whose keys are the
/// stringified store numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultMapping {
    entries: BTreeMap<u64, Value>,
}

impl ResultMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payload, replacing any earlier one for the same store number.
    pub fn insert(&mut self, store_number: u64, payload: Value) {
        self.entries.insert(store_number, payload);
    }

    #[must_use]
    pub fn get(&self, store_number: u64) -> Option<&Value> {
        self.entries.get(&store_number)
    }

    #[must_use]
    pub fn contains(&self, store_number: u64) -> bool {
        self.entries.contains_key(&store_number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store numbers in ascending order.
    pub fn store_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }

    /// Render the mapping as a human-readable JSON document with 4-space
    /// indentation.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
