/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Request;
use pretty_assertions::Comparison;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing form param: expected `{expected}`, found {found:?}")]
    MissingFormParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden form param present: `{expected}`")]
    ForbiddenFormParam { expected: String },
    #[error("required form param missing: `{expected}`")]
    RequiredFormParam { expected: String },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },

    #[error("body did not match. hint:\n{hint}")]
    BodyDidNotMatch { hint: String },
    #[error("body was not valid UTF-8")]
    InvalidBodyFormat,
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    match inp {
        Ok(_) => (),
        Err(e) => {
            eprintln!("{}", e);
            panic!("Protocol test failed");
        }
    }
}

/// The key of a `key=value` (or bare `key`) form parameter
fn param_key(param: &str) -> &str {
    param.split('=').next().unwrap_or_default()
}

fn extract_params(body: &str) -> HashSet<&str> {
    body.split('&').filter(|param| !param.is_empty()).collect()
}

fn body_str<B: AsRef<[u8]>>(request: &Request<B>) -> Result<&str, ProtocolTestFailure> {
    std::str::from_utf8(request.body().as_ref()).map_err(|_| ProtocolTestFailure::InvalidBodyFormat)
}

/// Check that every `key=value` pair in `expected_params` was sent in the urlencoded form body
pub fn validate_form_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(body_str(request)?);
    for param in expected_params {
        if !actual_params.contains(param) {
            let mut found: Vec<String> = actual_params.iter().map(|s| s.to_string()).collect();
            found.sort();
            return Err(ProtocolTestFailure::MissingFormParam {
                expected: param.to_string(),
                found,
            });
        }
    }
    Ok(())
}

pub fn forbid_form_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(body_str(request)?)
        .into_iter()
        .map(param_key)
        .collect();
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenFormParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_form_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(body_str(request)?)
        .into_iter()
        .map(param_key)
        .collect();
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredFormParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Compare two urlencoded form bodies, ignoring parameter order
pub fn validate_form_body<B: AsRef<[u8]>>(
    request: &Request<B>,
    expected_body: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = body_str(request)?;
    let mut actual: Vec<&str> = extract_params(actual_body).into_iter().collect();
    let mut expected: Vec<&str> = extract_params(expected_body).into_iter().collect();
    actual.sort_unstable();
    expected.sort_unstable();
    if actual == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyDidNotMatch {
            hint: format!("{}", Comparison::new(&expected, &actual)),
        })
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-ascii header>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_form_params, require_form_params, validate_form_body, validate_form_params,
        validate_headers, ProtocolTestFailure,
    };
    use http::Request;

    fn form(body: &'static str) -> Request<&'static [u8]> {
        Request::builder()
            .uri("/")
            .body(body.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_validate_empty_form() {
        let request = form("");
        validate_form_params(&request, &[]).expect("no required params should pass");
        validate_form_params(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_form_params() {
        let request = form("a=b&c&d=efg&hello=a%20b");
        validate_form_params(&request, &["a=b"]).expect("a=b is in the body");
        validate_form_params(&request, &["c", "a=b"]).expect("both params are in the body");
        validate_form_params(&request, &["a=b", "c", "d=efg", "hello=a%20b"])
            .expect("all params are in the body");
        validate_form_params(&request, &[]).expect("no required params should pass");

        validate_form_params(&request, &["a"]).expect_err("no parameter should match");
        validate_form_params(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_form_params(&request, &["hell=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_form_param() {
        let request = form("a=b&c&d=efg&hello=a%20b");
        forbid_form_params(&request, &["a"]).expect_err("a is a form param");
        forbid_form_params(&request, &["not_included"]).expect("param not included");
        forbid_form_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_form_params(&request, &["c"]).expect_err("c is a form param");
    }

    #[test]
    fn test_require_form_param() {
        let request = form("a=b&c&d=efg&hello=a%20b");
        require_form_params(&request, &["a"]).expect("a is a form param");
        require_form_params(&request, &["not_included"]).expect_err("param not included");
        require_form_params(&request, &["a=b"]).expect_err("should be matching against keys");
        require_form_params(&request, &["c"]).expect("c is a form param");
    }

    #[test]
    fn test_validate_form_body() {
        let request = form("Action=DescribeTags&Version=2012-12-01&Marker=abc");
        validate_form_body(&request, "Version=2012-12-01&Marker=abc&Action=DescribeTags")
            .expect("order does not matter");
        match validate_form_body(&request, "Action=DescribeTags&Version=2012-12-01") {
            Err(ProtocolTestFailure::BodyDidNotMatch { .. }) => {}
            other => panic!("expected a mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }
}
