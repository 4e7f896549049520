//! Scan results for container images that may carry a spec label.
//!
//! A scan failure for one image is recorded on that image's [`ImageData`] so a batch scan can
//! report partial results instead of stopping at the first bad image.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{ANSIBLE_APP_SPEC_LABEL, DecodeError, Spec, decode_spec_payload};

/// What the scanner learned about one image.
#[derive(Debug, Default)]
pub struct ImageData {
    pub name: String,
    pub tag: String,
    pub labels: IndexMap<String, String>,
    /// Layer digests in the order reported by the registry.
    pub layers: Vec<String>,
    /// Set when [`ANSIBLE_APP_SPEC_LABEL`] is among the labels.
    pub is_ansible_app: bool,
    /// Failure captured while scanning this image.
    pub error: Option<anyhow::Error>,
}

impl ImageData {
    pub fn new(name: impl Into<String>, tag: impl Into<String>, labels: IndexMap<String, String>, layers: Vec<String>) -> Self {
        let is_ansible_app = labels.contains_key(ANSIBLE_APP_SPEC_LABEL);
        Self {
            name: name.into(),
            tag: tag.into(),
            labels,
            layers,
            is_ansible_app,
            error: None,
        }
    }

    /// Records an image whose scan failed before labels could be read.
    pub fn failed(name: impl Into<String>, tag: impl Into<String>, error: impl Into<anyhow::Error>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// `name:tag` reference used in logs.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.name, self.tag)
    }

    /// Raw value of the spec label, if the image carries one.
    pub fn spec_payload(&self) -> Option<&str> {
        self.labels.get(ANSIBLE_APP_SPEC_LABEL).map(String::as_str)
    }

    /// Decodes the spec label. Images without the label yield no specs.
    pub fn specs(&self) -> Result<Vec<Spec>, DecodeError> {
        match self.spec_payload() {
            Some(payload) if self.is_ansible_app => decode_spec_payload(payload),
            _ => Ok(Vec::new()),
        }
    }
}

/// Gathers specs from a batch of scanned images.
///
/// Images with a captured scan error or an undecodable payload are logged and skipped; the rest
/// still contribute their specs in image order.
pub fn collect_specs(images: &[ImageData]) -> Vec<Spec> {
    let mut collected = Vec::new();
    for image in images {
        if let Some(error) = &image.error {
            warn!(image = %image.reference(), error = %error, "skipping image that failed to scan");
            continue;
        }
        if !image.is_ansible_app {
            continue;
        }
        match image.specs() {
            Ok(specs) => {
                debug!(image = %image.reference(), spec_count = specs.len(), "decoded spec label");
                collected.extend(specs);
            }
            Err(error) => {
                warn!(image = %image.reference(), error = %error, "skipping image with invalid spec payload");
            }
        }
    }
    collected
}
