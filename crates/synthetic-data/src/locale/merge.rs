//! Fallback resolution across an ordered list of locale definitions.

use serde_json::{Map, Value};

use crate::error::ConfigurationError;
use crate::locale::LocaleDefinition;

/// Merges `locales` into one definition, first definer wins per leaf path.
///
/// Objects are merged field by field at every depth, so a locale that
/// defines `location` without `location.city_name` still lets a later locale
/// supply `location.city_name`. Strings, numbers, booleans, and lists are
/// leaves and are taken whole from the first locale that defines them.
/// `null` counts as undefined. The inputs are left untouched.
///
/// # Errors
///
/// Returns [`ConfigurationError::EmptyLocaleList`] if `locales` is empty.
///
/// # Example
///
/// ```
/// use synthetic_data::{LocaleDefinition, merge_locales};
///
/// let regional = LocaleDefinition::from_json(r#"{"location": {"state": ["Oslo"]}}"#)
///     .expect("valid locale");
/// let fallback = LocaleDefinition::from_json(
///     r#"{"location": {"state": ["Ohio"], "city_name": ["Dayton"]}}"#,
/// )
/// .expect("valid locale");
///
/// let merged = merge_locales(&[regional, fallback]).expect("non-empty chain");
///
/// assert_eq!(merged.get("location.state"), Some(&serde_json::json!(["Oslo"])));
/// assert_eq!(merged.get("location.city_name"), Some(&serde_json::json!(["Dayton"])));
/// ```
pub fn merge_locales(locales: &[LocaleDefinition]) -> Result<LocaleDefinition, ConfigurationError> {
    if locales.is_empty() {
        return Err(ConfigurationError::EmptyLocaleList);
    }
    let mut merged = Map::new();
    for locale in locales {
        merge_into(&mut merged, locale.as_map());
    }
    Ok(LocaleDefinition::from(merged))
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        if incoming.is_null() {
            continue;
        }
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), detached(incoming));
            }
            Some(Value::Object(existing)) => {
                if let Value::Object(fields) = incoming {
                    merge_into(existing, fields);
                }
            }
            Some(_) => {}
        }
    }
}

/// Copies `value`, dropping `null` fields inside objects so they stay open
/// to later locales.
fn detached(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut copy = Map::new();
            merge_into(&mut copy, fields);
            Value::Object(copy)
        }
        other => other.clone(),
    }
}
