//! # Persistence Name Validation
//!
//! Normalizes the volume names a job declares before aggregation: data
//! volumes default to everything configured, the outputs volume defaults
//! to the sole configured entry.

use crate::catalog::VolumeSettingsCatalog;
use crate::error::VolumeNotFoundError;

/// Validate and normalize a job's declared data volume names
///
/// `None` or an empty declaration means the job uses every configured data
/// volume. Explicitly declared names must exist in the catalog.
///
/// # Errors
///
/// Returns [`VolumeNotFoundError::Undeclared`] for any declared name absent
/// from the catalog.
pub fn validate_persistence_data(
    persistence_data: Option<&[String]>,
    catalog: &VolumeSettingsCatalog,
) -> Result<Vec<String>, VolumeNotFoundError> {
    match persistence_data {
        None | Some([]) => Ok(catalog.volume_names().map(str::to_string).collect()),
        Some(names) => {
            for name in names {
                if !catalog.contains(name) {
                    return Err(VolumeNotFoundError::Undeclared { name: name.clone() });
                }
            }
            Ok(names.to_vec())
        }
    }
}

/// Validate and normalize a job's declared outputs volume name
///
/// There is exactly one outputs volume per job. `None` selects the sole
/// configured outputs volume; this fails when zero or multiple volumes are
/// configured, since the choice would be ambiguous.
///
/// # Errors
///
/// Returns [`VolumeNotFoundError`] for an unknown explicit name or an
/// ambiguous default.
pub fn validate_persistence_outputs(
    persistence_outputs: Option<&str>,
    catalog: &VolumeSettingsCatalog,
) -> Result<String, VolumeNotFoundError> {
    match persistence_outputs.filter(|name| !name.is_empty()) {
        Some(name) => {
            if catalog.contains(name) {
                Ok(name.to_string())
            } else {
                Err(VolumeNotFoundError::Undeclared {
                    name: name.to_string(),
                })
            }
        }
        None => {
            let mut names = catalog.volume_names();
            match (names.next(), names.next()) {
                (Some(name), None) => Ok(name.to_string()),
                _ => Err(VolumeNotFoundError::AmbiguousDefault {
                    configured: catalog.len(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VolumeDefinition;

    fn catalog_of(names: &[&str]) -> VolumeSettingsCatalog {
        names
            .iter()
            .map(|name| ((*name).to_string(), VolumeDefinition::default()))
            .collect()
    }

    #[test]
    fn test_data_default_is_every_configured_volume() {
        let catalog = catalog_of(&["data2", "data1"]);

        let names = validate_persistence_data(None, &catalog).unwrap();
        assert_eq!(names, vec!["data1".to_string(), "data2".to_string()]);

        let names = validate_persistence_data(Some(&[]), &catalog).unwrap();
        assert_eq!(names, vec!["data1".to_string(), "data2".to_string()]);
    }

    #[test]
    fn test_data_declared_names_pass_through() {
        let catalog = catalog_of(&["data1", "data2"]);
        let declared = vec!["data2".to_string()];

        assert_eq!(
            validate_persistence_data(Some(&declared), &catalog).unwrap(),
            declared
        );
    }

    #[test]
    fn test_data_unknown_name_fails() {
        let catalog = catalog_of(&["data1"]);
        let declared = vec!["data1".to_string(), "missing".to_string()];

        assert_eq!(
            validate_persistence_data(Some(&declared), &catalog).unwrap_err(),
            VolumeNotFoundError::Undeclared {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_outputs_default_picks_the_sole_entry() {
        let catalog = catalog_of(&["outputs1"]);

        assert_eq!(
            validate_persistence_outputs(None, &catalog).unwrap(),
            "outputs1"
        );
    }

    #[test]
    fn test_outputs_default_fails_on_ambiguity() {
        assert_eq!(
            validate_persistence_outputs(None, &catalog_of(&[])).unwrap_err(),
            VolumeNotFoundError::AmbiguousDefault { configured: 0 }
        );
        assert_eq!(
            validate_persistence_outputs(None, &catalog_of(&["a", "b"])).unwrap_err(),
            VolumeNotFoundError::AmbiguousDefault { configured: 2 }
        );
    }

    #[test]
    fn test_outputs_explicit_name_must_exist() {
        let catalog = catalog_of(&["outputs1"]);

        assert_eq!(
            validate_persistence_outputs(Some("outputs1"), &catalog).unwrap(),
            "outputs1"
        );
        assert_eq!(
            validate_persistence_outputs(Some("missing"), &catalog).unwrap_err(),
            VolumeNotFoundError::Undeclared {
                name: "missing".to_string()
            }
        );
    }
}
