//! # Errors
//!
//! The single error kind raised by volume resolution. Every variant names
//! the volume or store class that violated a rule, so callers can surface
//! a user-facing configuration error without further lookup.

use thiserror::Error;

/// A persistence volume could not be resolved against the settings catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VolumeNotFoundError {
    #[error("Volume with name `{name}` was defined in specification, but was not found")]
    Undeclared { name: String },
    #[error("Volume with store class `{store}` is not supported.")]
    UnsupportedStore { store: String },
    #[error("Volume with store class `{store}` does not define a secret.")]
    MissingSecret { store: String },
    #[error("Volume with store class `{store}` does not define a secretKey.")]
    MissingSecretKey { store: String },
    #[error("A default outputs volume could not be determined: {configured} volumes are configured")]
    AmbiguousDefault { configured: usize },
}
