use std::path::{Path, PathBuf};
use std::sync::Arc;

use tonic::transport::{Certificate, ClientTlsConfig, Endpoint};

use crate::auth::CallCredentials;
use crate::error::Result;

/// Security options for connecting to Feast Serving.
///
/// The default is a plaintext connection without credentials.
#[derive(Clone, Debug, Default)]
pub struct SecurityConfig {
    /// Connect over TLS.
    pub tls_enabled: bool,
    /// PEM file holding the CA certificate to trust. When unset, native roots are used.
    pub certificate_path: Option<PathBuf>,
    /// Credential attached to every call.
    pub credentials: Option<Arc<dyn CallCredentials>>,
}

impl SecurityConfig {
    pub fn with_tls(mut self, enabled: bool) -> Self {
        self.tls_enabled = enabled;
        self
    }

    /// Trusts the CA in `path`. Implies TLS.
    pub fn with_certificate_path(mut self, path: impl AsRef<Path>) -> Self {
        self.tls_enabled = true;
        self.certificate_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CallCredentials>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub(crate) fn uri(&self, host: &str, port: u16) -> String {
        let scheme = if self.tls_enabled { "https" } else { "http" };
        format!("{scheme}://{host}:{port}")
    }

    /// Builds the endpoint for `host:port`, configuring TLS if enabled.
    pub(crate) fn endpoint(&self, host: &str, port: u16) -> Result<Endpoint> {
        let endpoint = Endpoint::from_shared(self.uri(host, port))?;
        if !self.tls_enabled {
            return Ok(endpoint);
        }

        let tls = match &self.certificate_path {
            Some(path) => {
                let pem = std::fs::read(path)?;
                ClientTlsConfig::new().ca_certificate(Certificate::from_pem(pem))
            }
            None => ClientTlsConfig::new().with_native_roots(),
        };
        Ok(endpoint.tls_config(tls.domain_name(host))?)
    }
}
