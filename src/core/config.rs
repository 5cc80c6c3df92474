//! JSON pointer editing for `slugkit config set`.

use serde_json::Value;

use crate::defaults::SlugkitConfig;
use crate::error::{Error, Result};

/// Set `new_value` at `pointer` inside `root`, creating intermediate objects.
pub(crate) fn set_json_pointer(root: &mut Value, pointer: &str, new_value: Value) -> Result<()> {
    let tokens = pointer_tokens(pointer)?;
    let Some((last, parents)) = tokens.split_last() else {
        *root = new_value;
        return Ok(());
    };

    let mut current = root;
    for token in parents {
        if current.is_null() {
            *current = Value::Object(serde_json::Map::new());
        }
        let Value::Object(map) = current else {
            return Err(Error::config_invalid_value(
                pointer,
                None,
                "Expected object at pointer",
            ));
        };
        current = map
            .entry(token.clone())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
    }

    if current.is_null() {
        *current = Value::Object(serde_json::Map::new());
    }
    match current {
        Value::Object(map) => {
            map.insert(last.clone(), new_value);
            Ok(())
        }
        _ => Err(Error::config_invalid_value(
            pointer,
            None,
            "Expected object at pointer",
        )),
    }
}

fn pointer_tokens(pointer: &str) -> Result<Vec<String>> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }

    if pointer == "/" || !pointer.starts_with('/') {
        return Err(Error::validation_invalid_argument(
            "pointer",
            format!("Invalid JSON pointer: {}", pointer),
            Some(pointer.to_string()),
        ));
    }

    Ok(pointer.split('/').skip(1).map(unescape_token).collect())
}

fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Apply a pointer edit to a config and re-validate the result.
pub fn apply_pointer(config: &SlugkitConfig, pointer: &str, value: Value) -> Result<SlugkitConfig> {
    let mut json = serde_json::to_value(config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize config".to_string())))?;

    set_json_pointer(&mut json, pointer, value)?;

    let updated: SlugkitConfig = serde_json::from_value(json).map_err(|e| {
        Error::config_invalid_value(pointer, None, format!("Config no longer valid: {}", e))
    })?;

    if updated.defaults.max_length == Some(0) {
        return Err(Error::config_invalid_value(
            pointer,
            Some("0".to_string()),
            "Max length must be at least 1",
        ));
    }

    Ok(updated)
}
