//! Error types for decoding, encoding, and validating descriptors.

use thiserror::Error;

/// Payload text was malformed or did not fit the requested shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML payload: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A value could not be rendered as JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural problems reported by the opt-in spec validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("spec id must not be empty")]
    EmptyId,

    #[error("spec {spec_id} declares a parameter without a name")]
    EmptyParameterName { spec_id: String },

    #[error("spec {spec_id} declares parameter {name} more than once")]
    DuplicateParameter { spec_id: String, name: String },

    #[error("spec id {id} appears more than once")]
    DuplicateSpecId { id: String },
}

impl ValidationError {
    /// Create an empty parameter name error.
    pub fn empty_parameter_name(spec_id: impl Into<String>) -> Self {
        Self::EmptyParameterName { spec_id: spec_id.into() }
    }

    /// Create a duplicate parameter error.
    pub fn duplicate_parameter(spec_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateParameter {
            spec_id: spec_id.into(),
            name: name.into(),
        }
    }

    /// Create a duplicate spec id error.
    pub fn duplicate_spec_id(id: impl Into<String>) -> Self {
        Self::DuplicateSpecId { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_wraps_json_source() {
        let source = serde_json::from_str::<serde_json::Value>("{not valid").expect_err("malformed json");
        let err = DecodeError::from(source);
        assert!(matches!(err, DecodeError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON payload"));
    }

    #[test]
    fn validation_error_messages_name_the_spec() {
        let err = ValidationError::duplicate_parameter("postgres", "db_name");
        assert_eq!(err.to_string(), "spec postgres declares parameter db_name more than once");

        let err = ValidationError::duplicate_spec_id("postgres");
        assert!(matches!(err, ValidationError::DuplicateSpecId { .. }));
    }
}
