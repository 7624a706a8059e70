mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use common::{spawn_server, AUTH_TOKEN, FEATURES, PROJECT};
use feast_client::{
    Error, FeastClient, FeastServingType, FieldStatus, JwtCallCredentials, Row, SecurityConfig,
    Value,
};
use tonic::transport::Endpoint;
use tonic::Code;

fn driver_rows() -> Vec<Row> {
    vec![Row::new()
        .set("driver_id", 1)
        .set_entity_timestamp(UNIX_EPOCH + Duration::from_secs(100))]
}

fn authenticated_config() -> SecurityConfig {
    SecurityConfig::default().with_credentials(Arc::new(JwtCallCredentials::new(AUTH_TOKEN).unwrap()))
}

async fn assert_driver_features(client: &FeastClient) {
    let rows = client
        .get_online_features(FEATURES, &driver_rows(), PROJECT)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let expected_fields: HashMap<String, Value> = [
        ("driver_id", Value::from(1)),
        ("driver:name", Value::from("david")),
        ("driver:rating", Value::from(3)),
        ("driver:null_value", Value::default()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    let expected_statuses: HashMap<String, FieldStatus> = [
        ("driver_id", FieldStatus::Present),
        ("driver:name", FieldStatus::Present),
        ("driver:rating", FieldStatus::Present),
        ("driver:null_value", FieldStatus::NullValue),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    assert_eq!(rows[0].fields(), &expected_fields);
    assert_eq!(rows[0].statuses(), &expected_statuses);
}

#[tokio::test]
async fn test_get_online_features() {
    let addr = spawn_server(false).await;
    let client = FeastClient::connect("127.0.0.1", addr.port()).await.unwrap();
    assert_driver_features(&client).await;
}

#[tokio::test]
async fn test_authenticated_client_gets_online_features() {
    let addr = spawn_server(true).await;
    let client = FeastClient::connect_secure("127.0.0.1", addr.port(), authenticated_config())
        .await
        .unwrap();
    assert_driver_features(&client).await;
}

#[tokio::test]
async fn test_unauthenticated_client_is_rejected() {
    let addr = spawn_server(true).await;
    let client = FeastClient::connect("127.0.0.1", addr.port()).await.unwrap();

    let err = client
        .get_online_features(FEATURES, &driver_rows(), PROJECT)
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code()), Some(Code::Unauthenticated));
}

#[tokio::test]
async fn test_client_from_channel_with_credentials() {
    let addr = spawn_server(true).await;
    let channel = Endpoint::from_shared(format!("http://{addr}"))
        .unwrap()
        .connect()
        .await
        .unwrap();
    let creds = Arc::new(JwtCallCredentials::new(AUTH_TOKEN).unwrap());
    let client = FeastClient::new(channel, Some(creds));
    assert_driver_features(&client).await;
}

#[tokio::test]
async fn test_remote_failure_is_returned_unmodified() {
    let addr = spawn_server(false).await;
    let client = FeastClient::connect("127.0.0.1", addr.port()).await.unwrap();

    let err = client
        .get_online_features(FEATURES, &driver_rows(), "other_project")
        .await
        .unwrap_err();
    let status = err.status().expect("remote status");
    assert_eq!(status.code(), Code::FailedPrecondition);
    assert_eq!(status.message(), "unexpected online features request");
}

#[tokio::test]
async fn test_malformed_reference_fails_before_call() {
    let addr = spawn_server(false).await;
    let client = FeastClient::connect("127.0.0.1", addr.port()).await.unwrap();

    let err = client
        .get_online_features(["driver:name", "driver:"], &driver_rows(), PROJECT)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn test_get_feast_serving_info() {
    let addr = spawn_server(false).await;
    let client = FeastClient::connect("127.0.0.1", addr.port()).await.unwrap();

    let info = client.get_feast_serving_info().await.unwrap();
    assert_eq!(info.version, "0.10.0");
    assert_eq!(info.r#type(), FeastServingType::Online);
}
