/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process environment access that can be faked in tests

use std::collections::HashMap;
use std::sync::Arc;

/// Environment variable source
///
/// Reads either the real process environment or a fixed set of variables, so that region
/// loading can be tested without mutating global process state.
///
/// A variable that is set but blank is reported as unset.
#[derive(Clone, Debug)]
pub struct Env(Arc<Source>);

#[derive(Debug)]
enum Source {
    Process,
    Fixed(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl Env {
    /// Returns the trimmed value of `key`, or `None` when it is unset, blank or not unicode.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match self.0.as_ref() {
            Source::Process => std::env::var(key).ok(),
            Source::Fixed(vars) => vars.get(key).cloned(),
        }?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[("AWS_REGION", "us-west-2"), ("AWS_DEFAULT_REGION", "")]);
    /// assert_eq!(mock_env.get("AWS_REGION").as_deref(), Some("us-west-2"));
    /// assert_eq!(mock_env.get("AWS_DEFAULT_REGION"), None);
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        Self(Arc::new(Source::Fixed(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Create an environment backed by [`std::env::var`](std::env::var).
    pub fn real() -> Self {
        Self(Arc::new(Source::Process))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;

    #[test]
    fn fixed_variables() {
        let env = Env::from_slice(&[("AWS_REGION", "us-east-1")]);
        assert_eq!(env.get("AWS_REGION").as_deref(), Some("us-east-1"));
        assert_eq!(env.get("AWS_DEFAULT_REGION"), None);
    }

    #[test]
    fn blank_values_are_unset() {
        let env = Env::from_slice(&[("AWS_REGION", "  "), ("AWS_DEFAULT_REGION", " eu-west-1\n")]);
        assert_eq!(env.get("AWS_REGION"), None);
        assert_eq!(env.get("AWS_DEFAULT_REGION").as_deref(), Some("eu-west-1"));
    }
}
