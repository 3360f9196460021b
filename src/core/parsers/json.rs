use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{KeySet, Locale};

/// Separator used to join nested keys into a flat key path.
pub const KEY_SEPARATOR: &str = ".";

/// Flattened locale document: dotted key path -> leaf value.
pub type FlatMessages = BTreeMap<String, Value>;

/// A warning from loading a locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleWarning {
    pub locale: Locale,
    pub file_path: String,
    pub error: String,
}

/// Result of loading one locale file.
///
/// A file that cannot be read or parsed yields empty `messages` and a
/// `warning`, so the rest of the analysis can still run.
#[derive(Debug, Default)]
pub struct LocaleLoad {
    pub messages: FlatMessages,
    pub warning: Option<LocaleWarning>,
}

impl LocaleLoad {
    pub fn keys(&self) -> KeySet {
        self.messages.keys().cloned().collect()
    }

    pub fn is_loaded(&self) -> bool {
        self.warning.is_none()
    }
}

/// Flatten a nested document into `path -> leaf` pairs.
///
/// Objects are descended into, every other JSON value is a leaf. Empty
/// objects produce no entries. Keys that contain `separator` are joined
/// as-is, so `{"a.b": 1}` and `{"a": {"b": 1}}` both produce `a.b`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use unused_i18n::core::parsers::json::{KEY_SEPARATOR, flatten};
///
/// let flat = flatten(&json!({"nav": {"home": "Home"}}), "", KEY_SEPARATOR);
/// assert_eq!(flat.get("nav.home"), Some(&json!("Home")));
/// ```
pub fn flatten(value: &Value, prefix: &str, separator: &str) -> FlatMessages {
    let mut result = FlatMessages::new();
    flatten_into(value, prefix.to_string(), separator, &mut result);
    result
}

fn flatten_into(value: &Value, prefix: String, separator: &str, result: &mut FlatMessages) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}{}{}", prefix, separator, key)
                };
                flatten_into(val, new_prefix, separator, result);
            }
        }
        leaf => {
            result.insert(prefix, leaf.clone());
        }
    }
}

/// Read a locale JSON file and flatten it.
pub fn parse_locale_file(path: &Path) -> Result<FlatMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    if !json.is_object() {
        bail!("Expected a JSON object at the top level of {:?}", path);
    }

    Ok(flatten(&json, "", KEY_SEPARATOR))
}

/// Load the keys of one locale, degrading to an empty set on any error.
pub fn load_locale_keys(path: &Path, locale: Locale) -> LocaleLoad {
    match parse_locale_file(path) {
        Ok(messages) => LocaleLoad {
            messages,
            warning: None,
        },
        Err(e) => LocaleLoad {
            messages: FlatMessages::new(),
            warning: Some(LocaleWarning {
                locale,
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        },
    }
}
