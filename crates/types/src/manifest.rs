//! Id-keyed lookup table over specs.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::Spec;

/// Specs indexed by id.
///
/// Built once and read-only afterwards; to change the contents build a new manifest. Specs are
/// held behind `Arc` so service instances can share the spec they were provisioned from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpecManifest {
    specs: IndexMap<String, Arc<Spec>>,
}

impl SpecManifest {
    /// Indexes `specs` by id. A later spec with the same id replaces the earlier one.
    ///
    /// Ids are not validated; run [`crate::validate_specs`] beforehand when that matters.
    pub fn new(specs: impl IntoIterator<Item = Spec>) -> Self {
        specs.into_iter().map(Arc::new).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Spec>> {
        self.specs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.specs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Ids in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn specs(&self) -> impl Iterator<Item = &Arc<Spec>> {
        self.specs.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Spec>)> {
        self.specs.iter().map(|(id, spec)| (id.as_str(), spec))
    }
}

impl FromIterator<Arc<Spec>> for SpecManifest {
    fn from_iter<I: IntoIterator<Item = Arc<Spec>>>(iter: I) -> Self {
        let mut specs = IndexMap::new();
        for spec in iter {
            specs.insert(spec.id.clone(), spec);
        }
        Self { specs }
    }
}

impl FromIterator<Spec> for SpecManifest {
    fn from_iter<I: IntoIterator<Item = Spec>>(iter: I) -> Self {
        Self::new(iter)
    }
}
