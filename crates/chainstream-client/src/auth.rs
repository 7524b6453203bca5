//! Per-call bearer authentication.

use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

use chainstream_core::{Credential, SessionError};

/// Attaches `authorization: Bearer <token>` to every outgoing request.
///
/// The header value is validated once, at construction, so interception
/// itself is infallible.
#[derive(Clone, Debug)]
pub struct AuthInterceptor {
    header: MetadataValue<Ascii>,
}

impl AuthInterceptor {
    /// Builds the interceptor from a resolved credential.
    ///
    /// Fails if the token cannot travel as an ASCII header value.
    pub fn new(credential: &Credential) -> Result<Self, SessionError> {
        let header = credential
            .bearer()
            .parse::<MetadataValue<Ascii>>()
            .map_err(|source| SessionError::MalformedToken { source })?;
        Ok(Self { header })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert("authorization", self.header.clone());
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_call_carries_the_bearer_header() {
        let credential = Credential::new("tok-123").unwrap();
        let mut interceptor = AuthInterceptor::new(&credential).unwrap();

        let request = interceptor.call(Request::new(())).unwrap();
        let value = request.metadata().get("authorization").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn tokens_with_control_bytes_are_rejected() {
        let credential = Credential::new("tok\nwith-newline").unwrap();
        let err = AuthInterceptor::new(&credential).unwrap_err();
        assert_eq!(err.kind(), chainstream_core::ErrorKind::Configuration);
    }
}
