//! Channel assembly and the typed service handle.

use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::Streaming;
use tracing::{debug, info};

use chainstream_core::{Credential, SessionError};
use chainstream_pb::v1 as pb;
use chainstream_pb::v1::stream_client::StreamClient;

use crate::auth::AuthInterceptor;

/// Builds an authenticated [`StreamSession`] against a single endpoint.
///
/// Construction performs no network I/O. The channel is lazy, so name
/// resolution, TLS, and connection failures surface on the first call
/// rather than here.
pub struct SessionBuilder {
    endpoint: String,
    credential: Option<Credential>,
    plaintext: bool,
}

impl SessionBuilder {
    /// Targets `endpoint`, either a bare `host:port` or a full URI.
    ///
    /// Bare authorities get an `https://` scheme (or `http://` when
    /// [`plaintext`](Self::plaintext) is set); an explicit scheme always
    /// wins over the flag.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential: None,
            plaintext: false,
        }
    }

    /// The bearer credential every call on this session will carry.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Connect over h2c instead of TLS. Intended for local endpoints.
    pub fn plaintext(mut self, plaintext: bool) -> Self {
        self.plaintext = plaintext;
        self
    }

    /// Assembles the channel and binds the typed service handle.
    pub fn build(self) -> Result<StreamSession, SessionError> {
        let credential = self.credential.ok_or(SessionError::EmptyCredential)?;
        let uri = normalize_endpoint(&self.endpoint, self.plaintext);

        let mut endpoint = Endpoint::from_shared(uri.clone()).map_err(|source| {
            SessionError::InvalidEndpoint {
                endpoint: uri.clone(),
                source,
            }
        })?;
        if uri.starts_with("https://") {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(|source| SessionError::InvalidEndpoint {
                    endpoint: uri.clone(),
                    source,
                })?;
        }

        let interceptor = AuthInterceptor::new(&credential)?;
        let channel = endpoint.connect_lazy();
        debug!(endpoint = %uri, plaintext = self.plaintext, "session channel assembled");

        Ok(StreamSession {
            client: StreamClient::with_interceptor(channel, interceptor),
            endpoint: uri,
        })
    }
}

fn normalize_endpoint(endpoint: &str, plaintext: bool) -> String {
    if endpoint.contains("://") {
        endpoint.to_owned()
    } else if plaintext {
        format!("http://{endpoint}")
    } else {
        format!("https://{endpoint}")
    }
}

/// An authenticated, typed handle on the block streaming service.
///
/// Holds one lazy channel bound to one endpoint and credential. Opening
/// the stream is the first point at which the network is touched.
#[derive(Debug)]
pub struct StreamSession {
    client: StreamClient<InterceptedService<Channel, AuthInterceptor>>,
    endpoint: String,
}

impl StreamSession {
    /// The normalized endpoint URI this session points at.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Opens the server-streaming `Blocks` call.
    ///
    /// Because the channel is lazy, connection problems surface here as
    /// transport errors, distinct from failures of an already-open stream.
    pub async fn open(
        &mut self,
        request: pb::Request,
    ) -> Result<Streaming<pb::Response>, SessionError> {
        info!(
            endpoint = %self.endpoint,
            start = request.start_block_num,
            stop = request.stop_block_num,
            "opening block stream"
        );
        let response = self
            .client
            .blocks(request)
            .await
            .map_err(|source| SessionError::Connect { source })?;
        Ok(response.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainstream_core::ErrorKind;

    fn credential() -> Credential {
        Credential::new("test-token").unwrap()
    }

    #[tokio::test]
    async fn build_touches_no_network() {
        // Nothing listens on this port; a lazy channel must not care.
        let session = SessionBuilder::new("localhost:1")
            .credential(credential())
            .plaintext(true)
            .build()
            .unwrap();
        assert_eq!(session.endpoint(), "http://localhost:1");
    }

    #[tokio::test]
    async fn bare_authority_defaults_to_tls() {
        let session = SessionBuilder::new("api.streamingfast.io:443")
            .credential(credential())
            .build()
            .unwrap();
        assert_eq!(session.endpoint(), "https://api.streamingfast.io:443");
    }

    #[tokio::test]
    async fn explicit_scheme_wins_over_the_plaintext_flag() {
        let session = SessionBuilder::new("http://127.0.0.1:9000")
            .credential(credential())
            .build()
            .unwrap();
        assert_eq!(session.endpoint(), "http://127.0.0.1:9000");
    }

    #[test]
    fn unparseable_endpoint_is_a_configuration_error() {
        let err = SessionBuilder::new("not a uri")
            .credential(credential())
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn missing_credential_is_rejected() {
        let err = SessionBuilder::new("localhost:1").build().unwrap_err();
        assert!(matches!(err, SessionError::EmptyCredential));
    }

    #[test]
    fn normalization_leaves_full_uris_alone() {
        assert_eq!(
            normalize_endpoint("https://example.com:443", false),
            "https://example.com:443"
        );
        assert_eq!(normalize_endpoint("example.com:443", false), "https://example.com:443");
        assert_eq!(normalize_endpoint("example.com:9000", true), "http://example.com:9000");
    }
}
