/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified on a request. It may be configured globally or on a
/// per-client basis unless otherwise noted. A full list of regions is found in the
/// "Regions and Endpoints" document.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Load a region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`
#[derive(Debug)]
#[non_exhaustive]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }

    pub fn region(&self) -> Option<Region> {
        let region = self
            .env
            .get("AWS_REGION")
            .or_else(|| self.env.get("AWS_DEFAULT_REGION"))
            .map(Region::new);
        tracing::debug!(region = ?region, "loaded region from the environment");
        region
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{EnvironmentProvider, Region};

    #[test]
    fn load_region() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[("AWS_REGION", "us-east-1")]));
        assert_eq!(provider.region(), Some(Region::new("us-east-1")));
    }

    #[test]
    fn load_default_region() {
        let provider =
            EnvironmentProvider::with_env(Env::from_slice(&[("AWS_DEFAULT_REGION", "us-east-1")]));
        assert_eq!(provider.region(), Some(Region::new("us-east-1")));
    }

    #[test]
    fn no_region() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[]));
        assert_eq!(provider.region(), None);
    }

    #[test]
    fn blank_region_falls_back_to_default_region() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "us-east-2"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("us-east-2")));
    }

    #[test]
    fn prioritize_aws_region() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[
            ("AWS_REGION", "us-east-1"),
            ("AWS_DEFAULT_REGION", "us-east-2"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("us-east-1")));
    }
}
