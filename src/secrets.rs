//! # Store Secret Aggregation
//!
//! Builds the deduplicated set of secret references a scheduled job must
//! mount, plus the per-mount-path credential metadata, from the job's
//! declared data volumes, its outputs volume, and any upstream outputs it
//! reads. All aggregation is fail-fast: the first invalid volume aborts
//! the whole call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use crate::catalog::VolumeSettingsCatalog;
use crate::error::VolumeNotFoundError;
use crate::paths::{validate_persistence_data, validate_persistence_outputs};
use crate::resolver::resolve_store_secret;
use crate::stores::StoreClass;

/// A (secret name, key-within-secret) pair identifying credentials without
/// embedding their value
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct SecretRef {
    pub secret: String,
    pub secret_key: String,
}

/// Unique secret references to mount; multiple volumes may share one secret
pub type SecretSet = BTreeSet<SecretRef>;

/// Credential metadata wired at a specific mount path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeyEntry {
    pub store: Option<StoreClass>,
    pub secret_key: String,
}

/// Mapping from local mount path to the credential metadata for that path
pub type SecretKeyMapping = BTreeMap<String, SecretKeyEntry>;

/// Mapping from volume name to local mount path, supplied by the caller
pub type PathMap = BTreeMap<String, String>;

/// An upstream job's output descriptor, for jobs that read other jobs'
/// outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputsReference {
    /// Volume name to resolve against the outputs catalog
    pub persistence: String,
    /// Local mount path for the upstream outputs
    pub path: String,
}

/// Aggregation result: the secrets to mount and where their keys apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSecrets {
    pub secrets: SecretSet,
    pub secret_keys: SecretKeyMapping,
}

impl StoreSecrets {
    fn add(&mut self, path: &str, store: Option<StoreClass>, secret_ref: SecretRef) {
        self.secret_keys.insert(
            path.to_string(),
            SecretKeyEntry {
                store,
                secret_key: secret_ref.secret_key.clone(),
            },
        );
        self.secrets.insert(secret_ref);
    }
}

/// Aggregate secret references for a job's declared data volumes
///
/// Volumes without credentials contribute nothing. A volume that resolves
/// to a secret but has no entry in `data_paths` is skipped as well; that
/// filtering is intentional but logged, since a misconfigured path map
/// would otherwise silently omit a needed secret.
///
/// # Errors
///
/// Propagates the first [`VolumeNotFoundError`] from validation or
/// resolution; there is no partial success.
pub fn get_data_store_secrets(
    persistence_data: Option<&[String]>,
    data_paths: &PathMap,
    catalog: &VolumeSettingsCatalog,
) -> Result<StoreSecrets, VolumeNotFoundError> {
    let persistence_data = validate_persistence_data(persistence_data, catalog)?;
    let mut result = StoreSecrets::default();

    for volume_name in &persistence_data {
        let resolved = resolve_store_secret(volume_name, catalog)?;
        let Some(secret_ref) = resolved.credentials() else {
            debug!(volume = %volume_name, "data volume is credential-less, nothing to mount");
            continue;
        };
        let Some(path) = data_paths.get(volume_name) else {
            warn!(
                volume = %volume_name,
                "data volume resolved to secret `{}` but has no mount path, skipping it",
                secret_ref.secret
            );
            continue;
        };
        result.add(path, resolved.store, secret_ref);
    }

    Ok(result)
}

/// Aggregate the secret reference for a job's single outputs volume
///
/// Returns empty results for a credential-less outputs backend.
///
/// # Errors
///
/// Propagates [`VolumeNotFoundError`] from validation or resolution.
pub fn get_outputs_store_secrets(
    persistence_outputs: Option<&str>,
    outputs_path: &str,
    catalog: &VolumeSettingsCatalog,
) -> Result<StoreSecrets, VolumeNotFoundError> {
    let persistence_outputs = validate_persistence_outputs(persistence_outputs, catalog)?;
    let resolved = resolve_store_secret(&persistence_outputs, catalog)?;
    let mut result = StoreSecrets::default();

    if let Some(secret_ref) = resolved.credentials() {
        result.add(outputs_path, resolved.store, secret_ref);
    } else {
        debug!(
            volume = %persistence_outputs,
            "outputs volume is credential-less, nothing to mount"
        );
    }

    Ok(result)
}

/// Aggregate secret references for upstream outputs a job reads
///
/// Absent or empty `refs` yields empty results. References sharing a
/// secret deduplicate via the set; references sharing a path overwrite the
/// mapping entry in input order, last one wins.
///
/// # Errors
///
/// Propagates the first [`VolumeNotFoundError`] from resolution.
pub fn get_outputs_refs_store_secrets(
    refs: Option<&[OutputsReference]>,
    catalog: &VolumeSettingsCatalog,
) -> Result<StoreSecrets, VolumeNotFoundError> {
    let mut result = StoreSecrets::default();
    let Some(refs) = refs else {
        return Ok(result);
    };

    for outputs_ref in refs {
        let resolved = resolve_store_secret(&outputs_ref.persistence, catalog)?;
        if let Some(secret_ref) = resolved.credentials() {
            result.add(&outputs_ref.path, resolved.store, secret_ref);
        } else {
            debug!(
                volume = %outputs_ref.persistence,
                path = %outputs_ref.path,
                "upstream outputs volume is credential-less, nothing to mount"
            );
        }
    }

    Ok(result)
}
