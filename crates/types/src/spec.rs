//! Service offering descriptors advertised by Ansible App images.
//!
//! Field names and declaration order define the wire shape consumed by the broker catalog, so
//! they must not be reordered. Every field defaults when absent or `null` in the payload; unknown
//! fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Parameters, codec::null_as_default};

mod validation;

pub use validation::validate_specs;

/// Whether provisioning of a spec may, must, or cannot run asynchronously.
///
/// An empty string decodes as [`AsyncPolicy::Unsupported`], matching payloads that never set it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AsyncPolicy {
    /// Provisioning always runs asynchronously.
    Required,
    /// The broker may choose either mode.
    Optional,
    /// Provisioning is synchronous only.
    #[default]
    #[serde(alias = "")]
    Unsupported,
}

impl AsyncPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for AsyncPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configurable input of a service offering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ParameterDescriptor {
    /// Identifier used as the key in instance parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Human-readable help text.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Declared value type (for example, "string", "int", "boolean"); not enforced here.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Whether a value must be supplied at provision time.
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    /// Default value of any JSON shape; `null` when the author supplied none.
    pub default: Value,
}

/// A provisionable service offering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Spec {
    /// Key of the spec within a manifest.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Whether the service produces bind credentials.
    #[serde(deserialize_with = "null_as_default")]
    pub bindable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub r#async: AsyncPolicy,
    /// Parameters in documentation order.
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterDescriptor>,
}

impl Spec {
    /// Looks up a parameter descriptor by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    /// Builds a parameter map seeded with every non-null default, in declaration order.
    pub fn default_parameters(&self) -> Parameters {
        self.parameters
            .iter()
            .filter(|parameter| !parameter.default.is_null())
            .map(|parameter| (parameter.name.clone(), parameter.default.clone()))
            .collect()
    }
}
