//! Locale definition trees.
//!
//! A locale definition is a JSON object keyed category → subcategory →
//! field, for example `person.first_name` or `date.weekday.wide`. Leaves are
//! strings, numbers, booleans, lists of strings, or lists of weighted
//! entries (`{"value": "...", "weight": 3}`). A JSON `null` reads as missing.

mod bundled;
mod merge;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LocaleError;

pub use bundled::LocaleId;
pub use merge::merge_locales;

/// A hierarchical table of locale data.
///
/// # Example
///
/// ```
/// use synthetic_data::LocaleDefinition;
///
/// let locale = LocaleDefinition::from_json(
///     r#"{"title": "English", "location": {"city_name": ["Springfield"]}}"#,
/// )
/// .expect("valid locale");
///
/// assert_eq!(locale.title(), Some("English"));
/// assert!(locale.get("location.city_name").is_some());
/// assert!(locale.get("location.missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleDefinition {
    tree: Map<String, Value>,
}

impl LocaleDefinition {
    /// Parses a locale definition from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::ParseError`] if the JSON is malformed and
    /// [`LocaleError::NotAnObject`] if its root is not an object.
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        let value: Value = serde_json::from_str(json).map_err(|e| LocaleError::ParseError {
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Loads a locale definition from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, LocaleError> {
        let contents = fs::read_to_string(path).map_err(|e| LocaleError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    /// Wraps an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::NotAnObject`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, LocaleError> {
        match value {
            Value::Object(tree) => Ok(Self { tree }),
            _ => Err(LocaleError::NotAnObject),
        }
    }

    /// Looks up a dot-separated path such as `date.weekday.wide`.
    ///
    /// Returns `None` when any segment is missing, when an intermediate
    /// value is not an object, or when the value is `null`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.tree.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        if current.is_null() { None } else { Some(current) }
    }

    /// Returns the human-readable locale title, if defined.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// Returns the locale code, if defined.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.get("code").and_then(Value::as_str)
    }

    /// Returns the list separator used when joining words, if defined.
    #[must_use]
    pub fn separator(&self) -> Option<&str> {
        self.get("separator").and_then(Value::as_str)
    }

    /// Returns `true` if the definition has no top-level entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.tree
    }

    /// Looks up `path`, failing if it is missing.
    pub(crate) fn require(&self, path: &str) -> Result<&Value, LocaleError> {
        self.get(path).ok_or_else(|| LocaleError::MissingDefinition {
            path: path.to_owned(),
        })
    }

    /// Reads `path` as a list of plain or weighted entries.
    pub(crate) fn require_entries(&self, path: &str) -> Result<Entries<'_>, LocaleError> {
        match self.require(path)? {
            Value::Array(items) => Entries::parse(path, items),
            _ => Err(LocaleError::InvalidEntry {
                path: path.to_owned(),
            }),
        }
    }
}

impl From<Map<String, Value>> for LocaleDefinition {
    fn from(tree: Map<String, Value>) -> Self {
        Self { tree }
    }
}

/// Entries read from a locale list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Entries<'a> {
    /// Plain strings, picked uniformly.
    Plain(Vec<&'a str>),
    /// Strings with relative weights.
    Weighted(Vec<(&'a str, u32)>),
}

impl<'a> Entries<'a> {
    fn parse(path: &str, items: &'a [Value]) -> Result<Self, LocaleError> {
        let invalid = || LocaleError::InvalidEntry {
            path: path.to_owned(),
        };
        if items.iter().all(Value::is_string) {
            return Ok(Self::Plain(items.iter().filter_map(Value::as_str).collect()));
        }
        items
            .iter()
            .map(|item| {
                let value = item.get("value").and_then(Value::as_str);
                let weight = item
                    .get("weight")
                    .and_then(Value::as_u64)
                    .and_then(|w| u32::try_from(w).ok());
                value.zip(weight).ok_or_else(invalid)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Weighted)
    }
}
