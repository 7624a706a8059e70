//! # Feast Rust Client
//!
//! An async Rust client for retrieving online features from Feast Serving over gRPC.
//!
//! ## Overview
//!
//! This crate wraps the `ServingService` gRPC API with a small row-oriented interface:
//! - Feature references parsed from `table:feature` (or bare `feature`) strings
//! - [`Row`] values carrying entity keys on the way in and feature values with
//!   per-field [`FieldStatus`] on the way out
//! - Optional call credentials attached to every request through an interceptor
//! - A [`blocking`] facade for callers without an async runtime
//!
//! ## Example
//!
//! ```rust,no_run
//! use feast_client::{FeastClient, Row};
//! use std::time::SystemTime;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeastClient::connect("localhost", 6566).await?;
//!
//!     let rows = vec![
//!         Row::new().set("driver_id", 123).set_entity_timestamp(SystemTime::now()),
//!         Row::new().set("driver_id", 456).set_entity_timestamp(SystemTime::now()),
//!     ];
//!
//!     let features = client
//!         .get_online_features(["driver:rating", "driver:trips_today"], &rows, "")
//!         .await?;
//!
//!     for row in &features {
//!         println!("{:?}", row.fields());
//!     }
//!     Ok(())
//! }
//! ```

pub mod proto {
    #![allow(clippy::all)] // Suppress warnings in generated code

    pub mod feast {
        pub mod types {
            tonic::include_proto!("feast.types");
        }

        pub mod serving {
            tonic::include_proto!("feast.serving");
        }
    }
}

pub mod auth;
pub mod blocking;
mod client;
mod config;
mod error;
mod feature_ref;
mod row;
mod value;

pub use auth::{CallCredentials, CredentialInterceptor, JwtCallCredentials};
pub use client::*;
pub use config::SecurityConfig;
pub use error::{Error, Result};
pub use feature_ref::{parse_feature_refs, FeatureReference};
pub use row::Row;

// Re-export proto types that are part of the public API
pub use crate::proto::feast::serving::get_online_features_response::FieldStatus;
pub use crate::proto::feast::serving::{FeastServingType, GetFeastServingInfoResponse};
pub use crate::proto::feast::types::Value;
