//! # Volume Definition Resolver
//!
//! Resolves a named volume against a settings catalog into the store class
//! and secret reference required to mount it, enforcing the catalog
//! invariants: a declared store class must be supported and must carry both
//! a secret and a secretKey.

use crate::catalog::VolumeSettingsCatalog;
use crate::error::VolumeNotFoundError;
use crate::secrets::SecretRef;
use crate::stores::StoreClass;

/// A resolved persistence volume
///
/// All three fields are absent for credential-less volumes. When `store`
/// is present, `secret` and `secret_key` are guaranteed present by the
/// resolution rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedVolume {
    pub store: Option<StoreClass>,
    pub secret: Option<String>,
    pub secret_key: Option<String>,
}

impl ResolvedVolume {
    /// The secret reference to mount, if this volume carries credentials
    #[must_use]
    pub fn credentials(&self) -> Option<SecretRef> {
        match (&self.secret, &self.secret_key) {
            (Some(secret), Some(secret_key)) => Some(SecretRef {
                secret: secret.clone(),
                secret_key: secret_key.clone(),
            }),
            _ => None,
        }
    }
}

/// Resolve a volume name against a settings catalog
///
/// # Errors
///
/// Returns [`VolumeNotFoundError`] when the volume is not in the catalog,
/// when its store class is outside the supported set, or when a store is
/// declared without a secret or secretKey.
pub fn resolve_store_secret(
    volume_name: &str,
    catalog: &VolumeSettingsCatalog,
) -> Result<ResolvedVolume, VolumeNotFoundError> {
    let definition =
        catalog
            .get(volume_name)
            .ok_or_else(|| VolumeNotFoundError::Undeclared {
                name: volume_name.to_string(),
            })?;

    let secret = definition.secret();
    let secret_key = definition.secret_key();

    let store = match definition.store() {
        Some(raw) => {
            let class =
                StoreClass::parse(raw).ok_or_else(|| VolumeNotFoundError::UnsupportedStore {
                    store: raw.to_string(),
                })?;

            if secret.is_none() {
                return Err(VolumeNotFoundError::MissingSecret {
                    store: raw.to_string(),
                });
            }

            if secret_key.is_none() {
                return Err(VolumeNotFoundError::MissingSecretKey {
                    store: raw.to_string(),
                });
            }

            Some(class)
        }
        None => None,
    };

    Ok(ResolvedVolume {
        store,
        secret: secret.map(str::to_string),
        secret_key: secret_key.map(str::to_string),
    })
}
