//! AWS Secrets Manager lookup backend for hierarchical configuration
//!
//! This crate resolves a logical configuration key to a secret value stored
//! in AWS Secrets Manager, as one pluggable backend in a host's
//! configuration-lookup pipeline. Resolution is an ordered policy:
//!
//! 1. **Filter** - `confine_to_keys` decides whether the key is eligible for
//!    this backend at all (whole-key regex match).
//! 2. **Transform** - `strip_from_keys` deletes configured substrings, then
//!    `prefixes` fan the key out into an ordered candidate list.
//! 3. **Fetch** - candidates are looked up in priority order until one yields
//!    a value; "not found" moves on, permission and service failures abort.
//! 4. **Cache** - successful values are memoized under the original key for
//!    the rest of the lookup session.
//!
//! # Example
//!
//! ```rust,ignore
//! use sm_lookup::{AwsSecretStore, KeyResolver, LookupOptions, Resolution, Session};
//!
//! // Options arrive from the host as an untyped map
//! let options = LookupOptions::from_map(&host_options)?;
//!
//! let store = AwsSecretStore::connect(&options.client);
//! let resolver = KeyResolver::new(store);
//! let mut session = Session::new();
//!
//! match resolver.resolve("db_password", &options, &mut session)? {
//!     Resolution::Found(value) => { /* hand the value to the host */ }
//!     Resolution::NoValue => { /* backend answered: no such secret */ }
//!     Resolution::NotFound => { /* backend declines; host tries the next one */ }
//! }
//! ```
//!
//! # Features
//!
//! - `aws`: the real Secrets Manager client ([`AwsSecretStore`]). Off by
//!   default so hosts supplying their own [`SecretStore`] skip the SDK.

mod error;
mod filter;
mod options;
mod resolver;
mod session;
mod store;
mod transform;
mod value;

#[cfg(feature = "aws")]
mod aws;
#[cfg(feature = "aws")]
mod rt;

pub use error::{LookupError, Result};
pub use options::{ClientOptions, Credentials, LookupOptions, DEFAULT_DELIMITER};
pub use resolver::{KeyResolver, Resolution};
pub use session::{Session, SessionContext};
pub use store::{SecretPayload, SecretStore, StoreError};
pub use value::SecretValue;

#[cfg(feature = "aws")]
pub use aws::AwsSecretStore;
