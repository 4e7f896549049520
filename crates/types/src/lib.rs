//! Typed descriptor model for Ansible App service offerings.
//!
//! A container image advertises the services it can provision through a label whose value is a
//! JSON or YAML payload of [`Spec`]s. The broker indexes those specs in a [`SpecManifest`] and
//! records every provisioned [`ServiceInstance`] against the spec it was created from. The
//! helpers in [`codec`] turn raw payload text into these types and back again.

use indexmap::IndexMap;
use serde_json::Value;

pub mod codec;
pub mod dump;
pub mod error;
pub mod image;
pub mod instance;
pub mod manifest;
pub mod spec;

pub use codec::{decode_spec_payload, dump_json, load_json, load_yaml};
pub use dump::{render_spec_dump, spec_log_dump, specs_log_dump};
pub use error::{DecodeError, EncodeError, ValidationError};
pub use image::{ImageData, collect_specs};
pub use instance::ServiceInstance;
pub use manifest::SpecManifest;
pub use spec::{AsyncPolicy, ParameterDescriptor, Spec, validate_specs};

/// Image label whose value carries the spec payload.
pub const ANSIBLE_APP_SPEC_LABEL: &str = "com.redhat.ansibleapp.spec";

/// Free-form parameter values keyed by parameter name, in insertion order.
pub type Parameters = IndexMap<String, Value>;
