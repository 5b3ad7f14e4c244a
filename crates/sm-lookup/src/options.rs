//! Lookup options, validated once at the host boundary

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{LookupError, Result};

/// Path separator used between a prefix and the key unless overridden
pub const DEFAULT_DELIMITER: &str = "/";

/// Per-backend configuration handed down by the host.
///
/// Hosts pass options as an untyped key/value map; [`LookupOptions::from_map`]
/// validates the known fields once, up front, so the resolution pipeline never
/// re-checks types. Unrecognized options are ignored (forward compatible).
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOptions {
    /// Only keys fully matching one of these patterns are looked up
    pub confine_to_keys: Option<Vec<String>>,

    /// Patterns whose first match is deleted from the key before lookup
    pub strip_from_keys: Option<Vec<String>>,

    /// Path prefixes tried in order; absent means the bare key is the sole candidate
    pub prefixes: Option<Vec<String>>,

    /// Separator joining prefix and key
    pub delimiter: String,

    /// When true, an absent result makes this backend decline instead of
    /// answering "no value"
    pub continue_if_not_found: bool,

    /// Connection parameters forwarded verbatim to the secret store client
    pub client: ClientOptions,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            confine_to_keys: None,
            strip_from_keys: None,
            prefixes: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
            continue_if_not_found: false,
            client: ClientOptions::default(),
        }
    }
}

impl LookupOptions {
    /// Build validated options from the host's opaque option map.
    ///
    /// Type mismatches on known options fail with
    /// [`LookupError::Configuration`]; unknown options are logged at debug
    /// level and skipped.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let mut options = Self::default();

        for (name, value) in map {
            match name.as_str() {
                "confine_to_keys" => {
                    options.confine_to_keys = Some(string_array("confine_to_keys", value)?);
                }
                "strip_from_keys" => {
                    options.strip_from_keys = Some(string_array("strip_from_keys", value)?);
                }
                "prefixes" => {
                    options.prefixes = Some(string_array("prefixes", value)?);
                }
                "delimiter" => {
                    options.delimiter = value
                        .as_str()
                        .ok_or_else(|| LookupError::configuration("delimiter must be a String"))?
                        .to_string();
                }
                "continue_if_not_found" => {
                    options.continue_if_not_found = value.as_bool().ok_or_else(|| {
                        LookupError::configuration("continue_if_not_found must be a Boolean")
                    })?;
                }
                "client_options" => {
                    options.client =
                        ClientOptions::deserialize(value.clone()).map_err(|err| {
                            LookupError::configuration(format!("client_options: {err}"))
                        })?;
                }
                other => {
                    tracing::debug!(option = other, "ignoring unrecognized lookup option");
                }
            }
        }

        Ok(options)
    }
}

fn string_array(name: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| LookupError::configuration(format!("{name} must be an array")))?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                LookupError::configuration(format!("{name} entries must be Strings"))
            })
        })
        .collect()
}

/// Connection parameters for the secret store, opaque to the pipeline.
///
/// Unknown fields are accepted and dropped so hosts can carry extra
/// client settings without breaking older backends.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub profile: Option<String>,
}

impl ClientOptions {
    /// Resolve the credential source once, before any fetch.
    ///
    /// Precedence: explicit key pair, then named profile, then the client's
    /// default chain.
    pub fn credentials(&self) -> Credentials {
        if let (Some(id), Some(secret)) = (&self.access_key_id, &self.secret_access_key) {
            return Credentials::Static {
                access_key_id: id.clone(),
                secret_access_key: secret.clone(),
                session_token: self.session_token.clone(),
            };
        }
        if let Some(profile) = &self.profile {
            return Credentials::Profile(profile.clone());
        }
        Credentials::DefaultChain
    }
}

/// Resolved credential source for the store client
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    /// Explicitly configured key pair
    Static {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },
    /// Named profile from the shared credentials file
    Profile(String),
    /// Whatever the client's environment provides
    DefaultChain,
}
