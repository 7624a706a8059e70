use std::collections::BTreeSet;
use std::sync::Arc;

use tonic::codegen::InterceptedService;
use tonic::transport::Channel;
use tracing::{debug, warn};

use crate::auth::{CallCredentials, CredentialInterceptor};
use crate::config::SecurityConfig;
use crate::error::Result;
use crate::feature_ref::parse_feature_refs;
use crate::proto::feast::serving::serving_service_client::ServingServiceClient;
use crate::proto::feast::serving::*; // For request/response types
use crate::row::Row;

/// Project value that selects the server's default project.
pub const DEFAULT_PROJECT: &str = "";

type ServingStub = ServingServiceClient<InterceptedService<Channel, CredentialInterceptor>>;

/// Client for retrieving features from Feast Serving via gRPC.
///
/// Every call goes through a [`CredentialInterceptor`], so a client built with
/// credentials authenticates all of its requests.
///
/// # Cloning
/// The client is cheap to clone. Cloning creates a new handle to the same underlying connection.
#[derive(Clone, Debug)]
pub struct FeastClient {
    client: ServingStub,
}

impl FeastClient {
    /// Connect to Feast Serving at `host:port` over plaintext, without credentials.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        Self::connect_secure(host, port, SecurityConfig::default()).await
    }

    /// Connect to Feast Serving at `host:port` with the given security options.
    ///
    /// # Arguments
    /// * `host` - Hostname or IP address of the serving gRPC server.
    /// * `port` - Port of the serving gRPC server.
    /// * `config` - TLS and credential options. See [`SecurityConfig`].
    pub async fn connect_secure(host: &str, port: u16, config: SecurityConfig) -> Result<Self> {
        let endpoint = config.endpoint(host, port)?;
        debug!(host, port, tls = config.tls_enabled, "connecting to feast serving");
        let channel = endpoint.connect().await?;
        Ok(Self::new(channel, config.credentials))
    }

    /// Create a new client from an existing Tonic `Channel` and optional credentials.
    pub fn new(channel: Channel, credentials: Option<Arc<dyn CallCredentials>>) -> Self {
        let interceptor = CredentialInterceptor::new(credentials);
        Self {
            client: ServingServiceClient::with_interceptor(channel, interceptor),
        }
    }

    /// Obtains version and type information about Feast Serving.
    pub async fn get_feast_serving_info(&self) -> Result<GetFeastServingInfoResponse> {
        let req = GetFeastServingInfoRequest {};
        let resp = self.client.clone().get_feast_serving_info(req).await?;
        Ok(resp.into_inner())
    }

    /// Retrieves online features for the given entity rows.
    ///
    /// # Arguments
    /// * `feature_refs` - References in the form `table:feature` or `feature`.
    /// * `rows` - One row per entity, holding its key fields and lookup timestamp.
    /// * `project` - Project override. [`DEFAULT_PROJECT`] uses the server default.
    ///
    /// # Returns
    /// One row per input row, in the same order, holding the entity keys and the
    /// retrieved features, each with its [`FieldStatus`](crate::FieldStatus).
    ///
    /// A malformed reference fails before anything is sent. A failed call returns the
    /// server's status unchanged and no rows.
    pub async fn get_online_features<I, S>(
        &self,
        feature_refs: I,
        rows: &[Row],
        project: &str,
    ) -> Result<Vec<Row>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let req = online_features_request(feature_refs, rows, project)?;
        let resp = self.client.clone().get_online_features_v2(req).await?;

        let decoded = rows_from_response(resp.into_inner());
        if decoded.len() != rows.len() {
            warn!(
                requested = rows.len(),
                received = decoded.len(),
                "feast serving returned a different number of rows than requested"
            );
        }
        Ok(decoded)
    }
}

/// Builds the `GetOnlineFeaturesV2` request for `rows`.
pub fn online_features_request<I, S>(
    feature_refs: I,
    rows: &[Row],
    project: &str,
) -> Result<GetOnlineFeaturesRequestV2>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let features: Vec<FeatureReferenceV2> = parse_feature_refs(feature_refs)?
        .into_iter()
        .map(Into::into)
        .collect();

    let mut entity_refs = BTreeSet::new();
    let entity_rows: Vec<_> = rows
        .iter()
        .map(|row| {
            entity_refs.extend(row.fields().keys().map(String::as_str));
            row.to_entity_row()
        })
        .collect();

    debug!(
        features = features.len(),
        rows = entity_rows.len(),
        ?entity_refs,
        project,
        "built online features request"
    );

    Ok(GetOnlineFeaturesRequestV2 {
        features,
        entity_rows,
        project: project.to_string(),
    })
}

/// Decodes every entity's field values, keeping response order.
pub fn rows_from_response(response: GetOnlineFeaturesResponse) -> Vec<Row> {
    response
        .field_values
        .into_iter()
        .map(Row::from_field_values)
        .collect()
}
