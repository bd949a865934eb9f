use serde_json::{Number, Value};

use crate::ConfigError;

/// Inclusive range of public store numbers to walk, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreRange {
    start: u64,
    end: u64,
}

impl StoreRange {
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when `end < start`.
    pub fn new(start: u64, end: u64) -> Result<Self, ConfigError> {
        if end < start {
            return Err(ConfigError::Validation(format!(
                "end store number {end} is below start store number {start}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of store numbers covered, saturating at `u64::MAX` for the
    /// full `0..=u64::MAX` range.
    #[must_use]
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    /// Always `false`; a range holds at least one store number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Store numbers in ascending order.
    pub fn iter(&self) -> std::ops::RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// The vendor's internal store identifier, as returned at `store.storeID`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreId(String);

impl StoreId {
    /// Pull `store.storeID` out of a cstore lookup response.
    ///
    /// Non-empty strings are taken as-is (whitespace included) and non-zero
    /// numbers are rendered as their JSON text. A missing path, `null`, `""`,
    /// a zero, or any other JSON kind yields `None`.
    #[must_use]
    pub fn from_lookup_response(body: &Value) -> Option<Self> {
        match body.get("store")?.get("storeID")? {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) if !is_zero(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(n: &Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
