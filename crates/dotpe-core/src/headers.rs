use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// The fixed, operator-supplied header block sent with every DotPe request.
///
/// Values typically include a session cookie, so `Debug` only prints header
/// names.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: BTreeMap<String, String>,
}

impl RequestHeaders {
    /// Build a header block from name/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a name is blank or contains
    /// characters that cannot appear in an HTTP header name, if a value
    /// contains a line break, or if two names collide case-insensitively.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = BTreeMap::new();
        let mut seen = HashSet::new();

        for (name, value) in pairs {
            let name: String = name.into();
            let value: String = value.into();
            let name = name.trim().to_string();

            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "header name must be non-empty".to_string(),
                ));
            }

            if name
                .chars()
                .any(|c| c.is_whitespace() || c == ':' || c.is_control())
            {
                return Err(ConfigError::Validation(format!(
                    "header name '{name}' contains whitespace, ':' or control characters"
                )));
            }

            if value.contains(['\r', '\n']) {
                return Err(ConfigError::Validation(format!(
                    "header '{name}' has a value containing a line break"
                )));
            }

            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate header name: '{name}'"
                )));
            }

            entries.insert(name, value);
        }

        Ok(Self { entries })
    }

    /// Iterate `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Header names only, safe to print.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.keys().map(|k| (k, "[redacted]")))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct HeadersFile {
    headers: BTreeMap<String, String>,
}

/// Load and validate the fixed request headers from a YAML file.
///
/// The file has a single `headers:` mapping of header name to value:
///
/// ```yaml
/// headers:
///   accept: application/json, text/plain, */*
///   user-agent: Mozilla/5.0 (X11; Linux x86_64)
///   cookie: "session=..."
/// ```
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, is empty, or
/// fails header validation.
pub fn load_headers(path: &Path) -> Result<RequestHeaders, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::HeadersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: HeadersFile =
        serde_yaml::from_str(&content).map_err(ConfigError::HeadersFileParse)?;

    if file.headers.is_empty() {
        return Err(ConfigError::Validation(format!(
            "headers file {} defines no headers",
            path.display()
        )));
    }

    RequestHeaders::from_pairs(file.headers)
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod tests;
