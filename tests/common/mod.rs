#![allow(dead_code)]

use std::net::SocketAddr;

use feast_client::proto::feast::serving::get_online_features_request_v2::EntityRow;
use feast_client::proto::feast::serving::get_online_features_response::{FieldStatus, FieldValues};
use feast_client::proto::feast::serving::serving_service_server::{ServingService, ServingServiceServer};
use feast_client::proto::feast::serving::*;
use feast_client::Value;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

pub const AUTH_TOKEN: &str = "test token";
pub const PROJECT: &str = "driver_project";
pub const FEATURES: [&str; 3] = ["driver:name", "driver:rating", "driver:null_value"];

/// Serving stub that only answers the driver lookup it expects.
pub struct MockServing;

#[tonic::async_trait]
impl ServingService for MockServing {
    async fn get_feast_serving_info(
        &self,
        _request: Request<GetFeastServingInfoRequest>,
    ) -> Result<Response<GetFeastServingInfoResponse>, Status> {
        Ok(Response::new(GetFeastServingInfoResponse {
            version: "0.10.0".to_string(),
            r#type: FeastServingType::Online as i32,
            job_staging_location: String::new(),
        }))
    }

    async fn get_online_features_v2(
        &self,
        request: Request<GetOnlineFeaturesRequestV2>,
    ) -> Result<Response<GetOnlineFeaturesResponse>, Status> {
        if request.into_inner() != expected_request() {
            return Err(Status::failed_precondition("unexpected online features request"));
        }
        Ok(Response::new(driver_response()))
    }
}

fn require_token(request: Request<()>) -> Result<Request<()>, Status> {
    let expected = format!("Bearer {AUTH_TOKEN}");
    match request.metadata().get("authorization") {
        Some(value) if value.to_str().ok() == Some(expected.as_str()) => Ok(request),
        _ => Err(Status::unauthenticated("missing or invalid bearer token")),
    }
}

/// Serves [`MockServing`] on an ephemeral local port.
pub async fn spawn_server(require_auth: bool) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let incoming = TcpListenerStream::new(listener);

    if require_auth {
        let service = ServingServiceServer::with_interceptor(MockServing, require_token);
        tokio::spawn(Server::builder().add_service(service).serve_with_incoming(incoming));
    } else {
        let service = ServingServiceServer::new(MockServing);
        tokio::spawn(Server::builder().add_service(service).serve_with_incoming(incoming));
    }

    addr
}

pub fn expected_request() -> GetOnlineFeaturesRequestV2 {
    let feature = |name: &str| FeatureReferenceV2 {
        feature_table: "driver".to_string(),
        name: name.to_string(),
    };
    GetOnlineFeaturesRequestV2 {
        features: vec![feature("name"), feature("rating"), feature("null_value")],
        entity_rows: vec![EntityRow {
            timestamp: Some(prost_types::Timestamp { seconds: 100, nanos: 0 }),
            fields: [("driver_id".to_string(), Value::from(1))].into_iter().collect(),
        }],
        project: PROJECT.to_string(),
    }
}

pub fn driver_response() -> GetOnlineFeaturesResponse {
    let entries = [
        ("driver_id", Value::from(1), FieldStatus::Present),
        ("driver:name", Value::from("david"), FieldStatus::Present),
        ("driver:rating", Value::from(3), FieldStatus::Present),
        ("driver:null_value", Value::default(), FieldStatus::NullValue),
    ];

    let mut values = FieldValues::default();
    for (name, value, status) in entries {
        values.fields.insert(name.to_string(), value);
        values.statuses.insert(name.to_string(), status as i32);
    }
    GetOnlineFeaturesResponse {
        field_values: vec![values],
    }
}
