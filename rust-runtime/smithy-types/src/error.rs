/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Generic error metadata for Smithy codegen

use std::collections::HashMap;
use std::fmt;

/// Generic Error type
///
/// Services only partially model their errors. When a response can't be matched to a modeled
/// error, the SDK still exposes the `code`, `message` and `request_id` carried by the response.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: HashMap<&'static str, String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID the error happened for.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Set a custom field on the error metadata, eg. the fault `Type` of a Query protocol error.
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner.extras.insert(key, value.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID the error occurred for, if it's available.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras.get(key).map(|v| v.as_str())
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        let mut extras: Vec<_> = self.extras.iter().collect();
        extras.sort();
        for (k, v) in extras {
            fmt.field(k, &v);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display_lists_present_fields() {
        let err = Error::builder()
            .code("ClusterNotFound")
            .message("Cluster examplecluster not found.")
            .request_id("f1a2")
            .custom("type", "Sender")
            .build();
        assert_eq!(
            format!("{}", err),
            r#"Error { code: "ClusterNotFound", message: "Cluster examplecluster not found.", request_id: "f1a2", type: "Sender" }"#
        );
        assert_eq!(err.extra("type"), Some("Sender"));
        assert_eq!(Error::builder().build().code(), None);
    }
}
