//! Provisioned service instances.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Parameters, Spec, codec::null_as_default};

/// A provisioned binding of a spec with the parameter values chosen for it.
///
/// The spec is shared with the manifest that owns it. Parameters are not checked against the
/// spec's descriptors here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInstance {
    /// Generated at creation; rendered as the canonical hyphenated string.
    pub id: Uuid,
    pub spec: Arc<Spec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Parameters,
}

impl ServiceInstance {
    /// Creates an instance with a freshly generated id.
    pub fn new(spec: Arc<Spec>, parameters: Parameters) -> Self {
        Self::with_id(Uuid::new_v4(), spec, parameters)
    }

    /// Recreates an instance whose id is already known.
    pub fn with_id(id: Uuid, spec: Arc<Spec>, parameters: Parameters) -> Self {
        Self { id, spec, parameters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    use crate::{SpecManifest, dump_json, load_json};

    fn manifest() -> SpecManifest {
        SpecManifest::new(vec![Spec {
            id: "etherpad".to_string(),
            name: "ansibleapp/etherpad-apb".to_string(),
            ..Default::default()
        }])
    }

    #[test]
    fn new_instances_get_distinct_ids() {
        let manifest = manifest();
        let spec = manifest.get("etherpad").expect("spec present");
        let first = ServiceInstance::new(Arc::clone(spec), Parameters::new());
        let second = ServiceInstance::new(Arc::clone(spec), Parameters::new());
        assert_ne!(first.id, second.id);
        assert!(Arc::ptr_eq(&first.spec, &second.spec));
    }

    #[test]
    fn json_shape_matches_broker_contract() {
        let manifest = manifest();
        let spec = manifest.get("etherpad").expect("spec present");
        let id = Uuid::parse_str("6b0b9a9c-7c52-4b3b-9f0e-3f4b2a6c1d10").expect("parse uuid");
        let mut parameters = Parameters::new();
        parameters.insert("hostport".to_string(), json!(9001));
        parameters.insert("db".to_string(), json!({"user": "admin", "tls": false}));
        let instance = ServiceInstance::with_id(id, Arc::clone(spec), parameters);

        let payload = dump_json(&instance).expect("encode instance");
        let value: Value = load_json(&payload).expect("decode value");
        assert_eq!(value["id"], "6b0b9a9c-7c52-4b3b-9f0e-3f4b2a6c1d10");
        assert_eq!(value["spec"]["id"], "etherpad");
        assert_eq!(value["parameters"]["hostport"], 9001);
        assert_eq!(value["parameters"]["db"]["user"], "admin");

        let back: ServiceInstance = load_json(&payload).expect("decode instance");
        assert_eq!(back, instance);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let payload = r#"{"id":"not-a-uuid","spec":{"id":"a"},"parameters":{}}"#;
        assert!(load_json::<ServiceInstance>(payload).is_err());
    }

    #[test]
    fn missing_parameters_default_to_empty() {
        let payload = r#"{"id":"6b0b9a9c-7c52-4b3b-9f0e-3f4b2a6c1d10","spec":{"id":"a"}}"#;
        let instance: ServiceInstance = load_json(payload).expect("decode instance");
        assert!(instance.parameters.is_empty());
    }

    #[test]
    fn null_parameters_default_to_empty() {
        let payload = r#"{"id":"6b0b9a9c-7c52-4b3b-9f0e-3f4b2a6c1d10","spec":{"id":"a","parameters":null},"parameters":null}"#;
        let instance: ServiceInstance = load_json(payload).expect("decode instance");
        assert!(instance.parameters.is_empty());
        assert!(instance.spec.parameters.is_empty());
    }
}
