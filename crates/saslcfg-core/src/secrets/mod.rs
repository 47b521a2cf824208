//! Versioned secret access
//!
//! This module provides:
//! - `SecretStore` trait for point lookups of versioned secrets
//! - `GcpSecretStore` over the official Secret Manager client
//! - `MemorySecretStore` for tests

mod gcp_store;
mod memory_store;
mod traits;

pub use gcp_store::GcpSecretStore;
pub use memory_store::MemorySecretStore;
pub use traits::{SecretStore, SecretStoreError, SecretStoreResult, SecretVersionRef};
