//! JSON and YAML (de)serialization helpers.
//!
//! Decoding is non-strict: unknown fields are ignored and absent fields take their default.
//! Errors are returned untransformed apart from being tagged with the payload format.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{DecodeError, EncodeError, Spec};

/// Parses JSON text into `T`.
pub fn load_json<T: DeserializeOwned>(payload: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(payload)?)
}

/// Renders `value` as compact JSON in field declaration order.
pub fn dump_json<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses YAML text into `T`.
pub fn load_yaml<T: DeserializeOwned>(payload: &str) -> Result<T, DecodeError> {
    Ok(serde_yaml::from_str(payload)?)
}

/// Deserializes `null` as the field's default value.
///
/// Payloads written by older brokers emit every field, so unset lists and strings arrive as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes an image label payload into specs.
///
/// The payload format is not declared by the image, so JSON is attempted first and YAML second.
/// Either format may hold a list of specs or a single spec. When both formats fail, the JSON error
/// is reported for text that opens like a JSON document and the YAML error otherwise.
pub fn decode_spec_payload(payload: &str) -> Result<Vec<Spec>, DecodeError> {
    let json_error = match decode_json_specs(payload) {
        Ok(specs) => return Ok(specs),
        Err(error) => error,
    };
    debug!(error = %json_error, payload_len = payload.len(), "spec payload is not JSON, trying YAML");

    match decode_yaml_specs(payload) {
        Ok(specs) => Ok(specs),
        Err(yaml_error) if looks_like_json(payload) => {
            debug!(error = %yaml_error, "YAML fallback failed, reporting JSON error");
            Err(json_error)
        }
        Err(yaml_error) => Err(yaml_error),
    }
}

fn looks_like_json(payload: &str) -> bool {
    matches!(payload.trim_start().chars().next(), Some('{' | '['))
}

fn decode_json_specs(payload: &str) -> Result<Vec<Spec>, DecodeError> {
    if payload.trim_start().starts_with('[') {
        load_json(payload)
    } else {
        Ok(vec![load_json::<Spec>(payload)?])
    }
}

fn decode_yaml_specs(payload: &str) -> Result<Vec<Spec>, DecodeError> {
    // Only the top-level kind is read from the generic document; the specs themselves are decoded
    // from the text so plain scalars such as `id: 1234` still land in string fields.
    let document: serde_yaml::Value = load_yaml(payload)?;
    if document.is_sequence() {
        load_yaml(payload)
    } else {
        Ok(vec![load_yaml::<Spec>(payload)?])
    }
}
