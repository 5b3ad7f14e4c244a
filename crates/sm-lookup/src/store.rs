//! Secret store collaborator contract

use thiserror::Error;

/// Success shape of a single store read.
///
/// A real store returns at most one of the two payloads; when both are
/// somehow present the binary payload wins during decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretPayload {
    pub secret_string: Option<String>,
    pub secret_binary: Option<Vec<u8>>,
}

/// How a store read can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry under the requested id; not fatal to the resolution
    #[error("no such secret")]
    NotFound,

    /// The caller lacks permission to read the entry
    #[error("access denied")]
    AccessDenied,

    /// Anything else: throttling, connectivity, server faults
    #[error("{0}")]
    Service(String),
}

/// A remote secret store, reduced to the single read this backend performs.
///
/// The call blocks; the pipeline imposes no timeout of its own and relies on
/// the client's defaults.
pub trait SecretStore {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretPayload, StoreError>;
}

impl<S: SecretStore + ?Sized> SecretStore for &S {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretPayload, StoreError> {
        (**self).get_secret_value(secret_id)
    }
}
