/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseStrictResponse` parses structured data out of a fully loaded HTTP response.
///
/// `Output` is unconstrained. For request/response style operations it is typically something
/// like `Result<CreateClusterOutput, Error>`.
///
/// Taking the body as `Bytes` keeps parsing pure and sync: reading the body off the wire is
/// the caller's job.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

#[cfg(test)]
mod test {
    use crate::response::ParseStrictResponse;
    use bytes::Bytes;
    use http::Response;

    #[test]
    fn parses_loaded_response() {
        struct StatusOnly;
        impl ParseStrictResponse for StatusOnly {
            type Output = u16;
            fn parse(&self, response: &Response<Bytes>) -> u16 {
                response.status().as_u16()
            }
        }
        let response = Response::builder()
            .status(404)
            .body(Bytes::from_static(b""))
            .unwrap();
        assert_eq!(StatusOnly.parse(&response), 404);
    }
}
