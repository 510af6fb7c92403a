//! Persistence Resolver Library
//!
//! Resolves declarative persistence definitions (named logical volumes for
//! job data and job outputs) into the concrete secret references required
//! to mount backing storage for a scheduled workload.
//!
//! This is the validation and lookup layer between a job specification,
//! which names logical volumes, and a cluster secret store, which holds
//! credentials keyed by secret name and key. It consumes a read-only
//! settings catalog plus caller-supplied path mappings and produces a
//! deduplicated secret-reference set and per-mount-path credential
//! metadata. It performs no I/O, never reads secret values, and never
//! mutates external state; an external workload-spec builder injects the
//! returned references into the job's runtime environment.
//!
//! Every operation is a pure synchronous function over caller-supplied
//! snapshots, so concurrent calls are safe by construction.

pub mod catalog;
pub mod error;
pub mod paths;
pub mod resolver;
pub mod secrets;
pub mod stores;

pub use catalog::{VolumeDefinition, VolumeSettingsCatalog};
pub use error::VolumeNotFoundError;
pub use paths::{validate_persistence_data, validate_persistence_outputs};
pub use resolver::{resolve_store_secret, ResolvedVolume};
pub use secrets::{
    get_data_store_secrets, get_outputs_refs_store_secrets, get_outputs_store_secrets,
    OutputsReference, PathMap, SecretKeyEntry, SecretKeyMapping, SecretRef, SecretSet,
    StoreSecrets,
};
pub use stores::StoreClass;
