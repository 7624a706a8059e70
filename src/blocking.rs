//! Synchronous facade over [`FeastClient`].
//!
//! Each call blocks the current thread on a runtime owned by the client. Do not
//! use it from inside an async context; use [`FeastClient`] there instead.

use tokio::runtime::{Builder, Runtime};

use crate::client::FeastClient;
use crate::config::SecurityConfig;
use crate::error::Result;
use crate::proto::feast::serving::GetFeastServingInfoResponse;
use crate::row::Row;

#[derive(Debug)]
pub struct BlockingFeastClient {
    inner: FeastClient,
    rt: Runtime,
}

impl BlockingFeastClient {
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        Self::connect_secure(host, port, SecurityConfig::default())
    }

    pub fn connect_secure(host: &str, port: u16, config: SecurityConfig) -> Result<Self> {
        let rt = Builder::new_multi_thread().enable_all().build()?;
        let inner = rt.block_on(FeastClient::connect_secure(host, port, config))?;
        Ok(Self { inner, rt })
    }

    pub fn get_feast_serving_info(&self) -> Result<GetFeastServingInfoResponse> {
        self.rt.block_on(self.inner.get_feast_serving_info())
    }

    /// See [`FeastClient::get_online_features`].
    pub fn get_online_features<I, S>(
        &self,
        feature_refs: I,
        rows: &[Row],
        project: &str,
    ) -> Result<Vec<Row>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rt
            .block_on(self.inner.get_online_features(feature_refs, rows, project))
    }
}
