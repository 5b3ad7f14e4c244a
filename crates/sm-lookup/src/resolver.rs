//! The key-resolution pipeline

use crate::error::{LookupError, Result};
use crate::filter::KeyFilter;
use crate::options::LookupOptions;
use crate::session::SessionContext;
use crate::store::{SecretStore, StoreError};
use crate::transform::candidate_keys;
use crate::value::SecretValue;

/// Outcome of one resolution.
///
/// `NotFound` and `NoValue` are deliberately distinct: the former means this
/// backend declines to answer for the key (the host should consult its other
/// backends), the latter means the backend answered and the secret does not
/// exist.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The backend produced a value
    Found(SecretValue),

    /// The backend answered: no such secret
    NoValue,

    /// The backend declines to answer for this key
    NotFound,
}

/// Resolves logical keys against one secret store.
///
/// Single pass per key: filter, transform into candidates, fetch candidates
/// in priority order until one yields a value, cache under the original key.
/// There are no retries; a fatal store error on any candidate aborts the
/// whole resolution.
pub struct KeyResolver<S> {
    store: S,
}

impl<S: SecretStore> KeyResolver<S> {
    /// Create a resolver over a caller-owned store client
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve one key within a lookup session.
    pub fn resolve<C: SessionContext>(
        &self,
        key: &str,
        options: &LookupOptions,
        session: &mut C,
    ) -> Result<Resolution> {
        if session.cache_has_key(key) {
            session.explain(|| format!("Returning cached value for {key}"));
            if let Some(value) = session.cached_value(key) {
                return Ok(Resolution::Found(value));
            }
        }

        let filter = KeyFilter::from_patterns(options.confine_to_keys.as_deref())?;
        if !filter.is_eligible(key) {
            session.explain(|| format!("Skipping backend as {key} doesn't match confine_to_keys"));
            return Ok(Resolution::NotFound);
        }

        for candidate in candidate_keys(key, options)? {
            session.explain(|| format!("Looking up {candidate}"));
            match self.fetch(&candidate, session)? {
                Some(value) => {
                    // Only successful results are cached; absent results
                    // re-fetch on repeated lookups within the session
                    session.cache(key, value.clone());
                    return Ok(Resolution::Found(value));
                }
                None => session.explain(|| format!("No data found for {candidate}")),
            }
        }

        if options.continue_if_not_found {
            Ok(Resolution::NotFound)
        } else {
            Ok(Resolution::NoValue)
        }
    }

    /// Fetch one candidate, classifying store errors.
    ///
    /// "Not found" is swallowed into an absent value; permission and service
    /// failures are fatal and name the offending candidate.
    fn fetch<C: SessionContext>(
        &self,
        candidate: &str,
        session: &C,
    ) -> Result<Option<SecretValue>> {
        let payload = match self.store.get_secret_value(candidate) {
            Ok(payload) => payload,
            Err(StoreError::NotFound) => return Ok(None),
            Err(StoreError::AccessDenied) => return Err(LookupError::access_denied(candidate)),
            Err(StoreError::Service(detail)) => {
                return Err(LookupError::service(candidate, detail))
            }
        };

        let value = SecretValue::decode(payload);
        match &value {
            Some(SecretValue::Binary(_)) => {
                session.explain(|| format!("{candidate} is a binary"))
            }
            Some(SecretValue::Plain(_)) => {
                session.explain(|| "Not a hashable result".to_string())
            }
            _ => {}
        }
        Ok(value)
    }
}
