//! Call credentials and the interceptor that attaches them.
//!
//! A client holds at most one credential, fixed at construction. The
//! [`CredentialInterceptor`] applies it to the metadata of every outgoing call.

use std::fmt;
use std::sync::Arc;

use tonic::metadata::{Ascii, MetadataMap, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

use crate::error::{Error, Result};

const AUTHORIZATION: &str = "authorization";

/// A pre-built credential that decorates outgoing call metadata.
pub trait CallCredentials: Send + Sync + fmt::Debug {
    fn apply(&self, metadata: &mut MetadataMap) -> std::result::Result<(), Status>;
}

/// Bearer-token credentials carrying a JWT in the `authorization` header.
#[derive(Clone)]
pub struct JwtCallCredentials {
    header: MetadataValue<Ascii>,
}

impl JwtCallCredentials {
    /// Wraps an already acquired token. Fails if the token is not valid header text.
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        let header = format!("Bearer {}", token.as_ref())
            .parse()
            .map_err(|_| Error::InvalidCredential("token contains invalid header characters".into()))?;
        Ok(Self { header })
    }
}

impl CallCredentials for JwtCallCredentials {
    fn apply(&self, metadata: &mut MetadataMap) -> std::result::Result<(), Status> {
        metadata.insert(AUTHORIZATION, self.header.clone());
        Ok(())
    }
}

impl fmt::Debug for JwtCallCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCallCredentials")
            .field("header", &"Bearer <redacted>")
            .finish()
    }
}

/// Tonic interceptor applying an optional credential to every request.
#[derive(Clone, Debug, Default)]
pub struct CredentialInterceptor {
    credentials: Option<Arc<dyn CallCredentials>>,
}

impl CredentialInterceptor {
    pub fn new(credentials: Option<Arc<dyn CallCredentials>>) -> Self {
        Self { credentials }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

impl Interceptor for CredentialInterceptor {
    fn call(&mut self, mut request: Request<()>) -> std::result::Result<Request<()>, Status> {
        if let Some(credentials) = &self.credentials {
            credentials.apply(request.metadata_mut())?;
        }
        Ok(request)
    }
}
