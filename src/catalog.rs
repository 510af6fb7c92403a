//! # Volume Settings Catalog
//!
//! Process-wide persistence configuration: a mapping from volume name to
//! its definition. The catalog is loaded and owned by an external
//! configuration collaborator; this crate only reads it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single persistence definition from the settings catalog
///
/// All fields are optional on the wire. A definition with no `store` is a
/// credential-less volume (e.g. a local or ephemeral backend). Empty
/// strings are treated the same as missing fields during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDefinition {
    /// Storage backend class identifier, validated at resolution time
    #[serde(default)]
    pub store: Option<String>,
    /// Secret resource name holding the backend credentials
    #[serde(default)]
    pub secret: Option<String>,
    /// Key within the secret
    #[serde(default)]
    pub secret_key: Option<String>,
}

impl VolumeDefinition {
    /// Declared store class, empty strings treated as undeclared
    #[must_use]
    pub fn store(&self) -> Option<&str> {
        self.store.as_deref().filter(|value| !value.is_empty())
    }

    /// Declared secret name, empty strings treated as undeclared
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|value| !value.is_empty())
    }

    /// Declared secret key, empty strings treated as undeclared
    #[must_use]
    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref().filter(|value| !value.is_empty())
    }
}

/// Mapping from volume name to its persistence definition
///
/// Backed by a `BTreeMap` so iteration order (and therefore default-volume
/// selection) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VolumeSettingsCatalog(BTreeMap<String, VolumeDefinition>);

impl VolumeSettingsCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from its YAML wire format
    ///
    /// ```yaml
    /// data1:
    ///   store: s3
    ///   secret: sec-a
    ///   secretKey: key-a
    /// scratch: {}
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Parse a catalog from JSON
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn insert(&mut self, name: impl Into<String>, definition: VolumeDefinition) {
        self.0.insert(name.into(), definition);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VolumeDefinition> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Configured volume names in deterministic (sorted) order
    pub fn volume_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, VolumeDefinition)> for VolumeSettingsCatalog {
    fn from_iter<I: IntoIterator<Item = (String, VolumeDefinition)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
