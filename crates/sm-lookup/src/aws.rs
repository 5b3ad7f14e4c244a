//! AWS Secrets Manager store client

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::config::Credentials as SdkCredentials;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;

use crate::options::{ClientOptions, Credentials};
use crate::rt;
use crate::store::{SecretPayload, SecretStore, StoreError};

/// [`SecretStore`] backed by the real AWS Secrets Manager API.
///
/// The client is built once per resolution session from the pass-through
/// connection parameters and owned by the caller; nothing here is shared
/// process-wide.
pub struct AwsSecretStore {
    client: Client,
}

impl AwsSecretStore {
    /// Build a client from the host's connection parameters.
    ///
    /// Region and endpoint overrides apply when present. Credentials follow
    /// the precedence resolved by [`ClientOptions::credentials`]: explicit
    /// key pair, then named profile, then the SDK default chain.
    pub fn connect(options: &ClientOptions) -> Self {
        let client = rt::sync_await(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());

            if let Some(region) = &options.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(endpoint) = &options.endpoint {
                loader = loader.endpoint_url(endpoint);
            }

            match options.credentials() {
                Credentials::Static {
                    access_key_id,
                    secret_access_key,
                    session_token,
                } => {
                    loader = loader.credentials_provider(SdkCredentials::from_keys(
                        access_key_id,
                        secret_access_key,
                        session_token,
                    ));
                }
                Credentials::Profile(name) => {
                    loader = loader.profile_name(&name);
                }
                Credentials::DefaultChain => {}
            }

            Client::new(&loader.load().await)
        });

        Self { client }
    }
}

impl SecretStore for AwsSecretStore {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretPayload, StoreError> {
        let client = self.client.clone();
        let secret_id = secret_id.to_owned();

        rt::sync_await(async move {
            match client.get_secret_value().secret_id(secret_id).send().await {
                Ok(output) => Ok(SecretPayload {
                    secret_string: output.secret_string().map(str::to_owned),
                    secret_binary: output.secret_binary().map(|blob| blob.as_ref().to_vec()),
                }),
                Err(err) => Err(classify(err)),
            }
        })
    }
}

/// Map SDK failures onto the store contract.
///
/// A missing secret is not an error for the pipeline; credential rejections
/// become `AccessDenied`; everything else carries the SDK's full diagnostic
/// chain so operators can tell throttling from connectivity.
fn classify(err: SdkError<GetSecretValueError>) -> StoreError {
    if let SdkError::ServiceError(context) = &err {
        let service_err = context.err();
        if service_err.is_resource_not_found_exception() {
            return StoreError::NotFound;
        }
        if matches!(
            service_err.code(),
            Some("AccessDeniedException") | Some("UnrecognizedClientException")
        ) {
            return StoreError::AccessDenied;
        }
    }
    StoreError::Service(DisplayErrorContext(err).to_string())
}
