//! Opt-in structural checks for specs.
//!
//! Manifest construction never validates; callers that need strict input run these routines
//! first. The checks cover identity only (ids and parameter names), not parameter values.

use std::collections::HashSet;

use super::Spec;
use crate::ValidationError;

impl Spec {
    /// Checks that the id is set and that parameter names are present and unique.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if parameter.name.trim().is_empty() {
                return Err(ValidationError::empty_parameter_name(&self.id));
            }
            if !seen.insert(parameter.name.as_str()) {
                return Err(ValidationError::duplicate_parameter(&self.id, &parameter.name));
            }
        }
        Ok(())
    }
}

/// Validates every spec and rejects ids that would collide in a manifest.
pub fn validate_specs(specs: &[Spec]) -> Result<(), ValidationError> {
    let mut seen_ids = HashSet::new();
    for spec in specs {
        spec.validate()?;
        if !seen_ids.insert(spec.id.as_str()) {
            return Err(ValidationError::duplicate_spec_id(&spec.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParameterDescriptor;

    fn spec_with_parameters(id: &str, names: &[&str]) -> Spec {
        Spec {
            id: id.to_string(),
            parameters: names
                .iter()
                .map(|name| ParameterDescriptor {
                    name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn well_formed_specs_pass() {
        let specs = vec![spec_with_parameters("a", &["p1", "p2"]), spec_with_parameters("b", &[])];
        assert!(validate_specs(&specs).is_ok());
    }

    #[test]
    fn blank_id_rejects() {
        assert_eq!(spec_with_parameters("  ", &[]).validate(), Err(ValidationError::EmptyId));
    }

    #[test]
    fn unnamed_parameter_rejects() {
        let err = spec_with_parameters("a", &["p1", ""]).validate().expect_err("unnamed parameter");
        assert_eq!(err, ValidationError::empty_parameter_name("a"));
    }

    #[test]
    fn repeated_parameter_rejects() {
        let err = spec_with_parameters("a", &["p1", "p1"]).validate().expect_err("duplicate parameter");
        assert_eq!(err, ValidationError::duplicate_parameter("a", "p1"));
    }

    #[test]
    fn colliding_ids_reject() {
        let specs = vec![spec_with_parameters("a", &[]), spec_with_parameters("a", &[])];
        assert_eq!(validate_specs(&specs), Err(ValidationError::duplicate_spec_id("a")));
    }
}
