use indexmap::IndexMap;
use serde_json::Value;
use shared::error::UnserializableAttributeError;
use url::form_urlencoded;

/// Canonical wire form of a scalar value: strings pass through, numbers
/// render in decimal, booleans become `"1"`/`"0"`. Null and composite
/// values have no flat representation.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Flattens an ordered value map into canonical string pairs, failing on the
/// first key whose value has no flat representation.
pub fn canonical_pairs(
    map: &IndexMap<String, Value>,
) -> Result<Vec<(String, String)>, UnserializableAttributeError> {
    map.iter()
        .map(|(key, value)| {
            scalar_to_string(value)
                .map(|canonical| (key.clone(), canonical))
                .ok_or_else(|| UnserializableAttributeError::new(key))
        })
        .collect()
}

/// Percent-encodes pairs into an `&`-joined `key=value` query string.
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Decodes a query string back into an ordered map. Later duplicates win,
/// matching what the fragment listener sees when it parses the token.
pub fn decode(query: &str) -> IndexMap<String, String> {
    let mut decoded = IndexMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        decoded.insert(key.into_owned(), value.into_owned());
    }
    decoded
}

/// Compares canonical pairs against their decoded counterpart in order,
/// returning the first key that did not survive the round trip. Both sides
/// are compared in canonical string form.
pub fn first_lossy_key(
    pairs: &[(String, String)],
    decoded: &IndexMap<String, String>,
) -> Option<String> {
    if pairs.len() != decoded.len() {
        return pairs
            .iter()
            .find(|(key, _)| !decoded.contains_key(key))
            .map(|(key, _)| key.clone())
            .or_else(|| decoded.keys().next().cloned());
    }
    for ((key, value), (decoded_key, decoded_value)) in pairs.iter().zip(decoded.iter()) {
        if key != decoded_key || value != decoded_value {
            return Some(key.clone());
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/codec_tests.rs"]
mod tests;
