//! # Store Classes
//!
//! The fixed set of storage backend classes a persistence volume may declare.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VolumeNotFoundError;

/// Storage backend class backing a persistence volume
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StoreClass {
    VolumeClaim,
    HostPath,
    Gcs,
    S3,
    Azure,
}

impl StoreClass {
    /// All supported store classes
    pub const VALUES: [StoreClass; 5] = [
        StoreClass::VolumeClaim,
        StoreClass::HostPath,
        StoreClass::Gcs,
        StoreClass::S3,
        StoreClass::Azure,
    ];

    /// Parse a store class identifier, `None` for anything outside the supported set
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "volume_claim" => Some(StoreClass::VolumeClaim),
            "host_path" => Some(StoreClass::HostPath),
            "gcs" => Some(StoreClass::Gcs),
            "s3" => Some(StoreClass::S3),
            "azure" => Some(StoreClass::Azure),
            _ => None,
        }
    }

    /// The wire identifier for this store class
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StoreClass::VolumeClaim => "volume_claim",
            StoreClass::HostPath => "host_path",
            StoreClass::Gcs => "gcs",
            StoreClass::S3 => "s3",
            StoreClass::Azure => "azure",
        }
    }
}

impl fmt::Display for StoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreClass {
    type Err = VolumeNotFoundError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StoreClass::parse(value).ok_or_else(|| VolumeNotFoundError::UnsupportedStore {
            store: value.to_string(),
        })
    }
}
