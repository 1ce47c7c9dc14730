/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Successful outcome of an operation, with the raw response it was parsed from.
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<Bytes>,
    pub parsed: O,
}

#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was never handed to a transport.
    ConstructionFailure(BoxError),

    /// A response was received and the service (or the response parser) reported an error
    ServiceError {
        raw: http::Response<Bytes>,
        err: E,
    },
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "{}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}
