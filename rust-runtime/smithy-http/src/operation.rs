/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::response::ParseStrictResponse;
use crate::result::{BoxError, SdkError, SdkSuccess};
use bytes::Bytes;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// An error occurred while turning an input into an [`Operation`].
#[non_exhaustive]
#[derive(Debug)]
pub enum BuildError {
    /// A field that the request cannot be built without was not set
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    /// The endpoint could not be turned into a URI
    InvalidUri {
        uri: String,
        err: http::uri::InvalidUri,
    },
    /// The request could not be assembled
    Other(BoxError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingField { field, details } => {
                write!(f, "`{}` was missing. {}", field, details)
            }
            BuildError::InvalidUri { uri, err } => {
                write!(f, "`{}` is not a valid URI: {}", uri, err)
            }
            BuildError::Other(inner) => write!(f, "error during request construction: {}", inner),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::MissingField { .. } => None,
            BuildError::InvalidUri { err, .. } => Some(err),
            BuildError::Other(inner) => Some(inner.as_ref()),
        }
    }
}

impl<E> From<BuildError> for SdkError<E> {
    fn from(err: BuildError) -> Self {
        SdkError::ConstructionFailure(Box::new(err))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A fully serialized request paired with the handler that knows how to parse its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<Bytes>,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<Bytes>, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &http::Request<Bytes> {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut http::Request<Bytes> {
        &mut self.request
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }

    pub fn into_request_response(self) -> (http::Request<Bytes>, Parts<H>) {
        (self.request, self.parts)
    }
}

impl<H, T, E> Operation<H>
where
    H: ParseStrictResponse<Output = Result<T, E>>,
{
    /// Parses a response the caller received for this operation's request.
    pub fn parse_response(
        &self,
        response: http::Response<Bytes>,
    ) -> Result<SdkSuccess<T>, SdkError<E>> {
        let operation = self.metadata().map(|m| m.name()).unwrap_or("unknown");
        let span = tracing::debug_span!("parse_response", operation = operation);
        let _enter = span.enter();
        tracing::trace!(status = %response.status(), body = ?response.body(), "parsing response");
        match self.parts.response_handler.parse(&response) {
            Ok(parsed) => Ok(SdkSuccess {
                raw: response,
                parsed,
            }),
            Err(err) => {
                tracing::debug!(status = %response.status(), "response was an error");
                Err(SdkError::ServiceError { raw: response, err })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::operation::{BuildError, Metadata, Operation};
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use http::Response;

    struct EchoStatus;

    impl ParseStrictResponse for EchoStatus {
        type Output = Result<u16, String>;
        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(response.status().as_u16())
            } else {
                Err(String::from_utf8_lossy(response.body()).into_owned())
            }
        }
    }

    fn operation() -> Operation<EchoStatus> {
        let request = http::Request::builder()
            .uri("https://example.com/")
            .body(Bytes::new())
            .unwrap();
        Operation::new(request, EchoStatus).with_metadata(Metadata::new("Echo", "test"))
    }

    #[test]
    fn success_keeps_raw_response() {
        let op = operation();
        assert_eq!(op.metadata().unwrap().name(), "Echo");
        let response = Response::builder().status(200).body(Bytes::new()).unwrap();
        let success = op.parse_response(response).expect("2xx is a success");
        assert_eq!(success.parsed, 200);
        assert_eq!(success.raw.status(), 200);
    }

    #[test]
    fn failure_is_a_service_error() {
        let op = operation();
        let response = Response::builder()
            .status(400)
            .body(Bytes::from_static(b"bad"))
            .unwrap();
        match op.parse_response(response) {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, "bad");
                assert_eq!(raw.status(), 400);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn build_errors_become_construction_failures() {
        let err: SdkError<String> = BuildError::MissingField {
            field: "region",
            details: "no endpoint was configured",
        }
        .into();
        match err {
            SdkError::ConstructionFailure(inner) => assert_eq!(
                inner.to_string(),
                "`region` was missing. no endpoint was configured"
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
