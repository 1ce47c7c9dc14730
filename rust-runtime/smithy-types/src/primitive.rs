/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Text encoding and decoding of Smithy primitives as they appear on the wire.

use crate::Number;
use std::fmt;

/// An error during primitive parsing
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveParseError(&'static str);

impl fmt::Display for PrimitiveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse input as {}", self.0)
    }
}

impl std::error::Error for PrimitiveParseError {}

/// Sealed trait for custom parsing of primitive types
pub trait Parse: Sized {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError>;
}

impl Parse for bool {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        match input {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(PrimitiveParseError("bool")),
        }
    }
}

macro_rules! parse_from_str {
    ($t: ty, $name: expr) => {
        impl Parse for $t {
            fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                input.parse().map_err(|_| PrimitiveParseError($name))
            }
        }
    };
}

parse_from_str!(i8, "i8");
parse_from_str!(i16, "i16");
parse_from_str!(i32, "i32");
parse_from_str!(i64, "i64");

impl Parse for f64 {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        match input {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => match other.parse::<f64>() {
                // `inf` and `nan` spellings are not part of the wire format
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(PrimitiveParseError("f64")),
            },
        }
    }
}

/// Encodes booleans and numbers into their canonical wire strings.
///
/// Infinite and `NaN` floats are written as `Infinity`, `-Infinity` and `NaN`.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum Encoder {
    Bool(bool),
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Encoder {
    pub fn encode(&self) -> String {
        match self {
            Encoder::Bool(true) => "true".to_string(),
            Encoder::Bool(false) => "false".to_string(),
            Encoder::PosInt(v) => itoa::Buffer::new().format(*v).to_string(),
            Encoder::NegInt(v) => itoa::Buffer::new().format(*v).to_string(),
            Encoder::Float(v) => {
                if v.is_nan() {
                    "NaN".to_string()
                } else if v.is_infinite() {
                    if v.is_sign_positive() {
                        "Infinity".to_string()
                    } else {
                        "-Infinity".to_string()
                    }
                } else {
                    ryu::Buffer::new().format_finite(*v).to_string()
                }
            }
        }
    }
}

impl From<bool> for Encoder {
    fn from(value: bool) -> Self {
        Encoder::Bool(value)
    }
}

impl From<Number> for Encoder {
    fn from(value: Number) -> Self {
        match value {
            Number::PosInt(v) => Encoder::PosInt(v),
            Number::NegInt(v) => Encoder::NegInt(v),
            Number::Float(v) => Encoder::Float(v),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Encoder, Parse};
    use crate::Number;

    #[test]
    fn bool_parse() {
        assert_eq!(bool::parse_smithy_primitive("true"), Ok(true));
        assert_eq!(bool::parse_smithy_primitive("false"), Ok(false));
        assert!(bool::parse_smithy_primitive("True").is_err());
    }

    #[test]
    fn integer_parse() {
        assert_eq!(i32::parse_smithy_primitive("5439"), Ok(5439));
        assert_eq!(i64::parse_smithy_primitive("-12"), Ok(-12));
        assert!(i32::parse_smithy_primitive("1.5").is_err());
        assert!(i32::parse_smithy_primitive("").is_err());
    }

    #[test]
    fn float_parse() {
        assert_eq!(f64::parse_smithy_primitive("0.25"), Ok(0.25));
        assert_eq!(f64::parse_smithy_primitive("Infinity"), Ok(f64::INFINITY));
        assert!(f64::parse_smithy_primitive("NaN").unwrap().is_nan());
        assert!(f64::parse_smithy_primitive("inf").is_err());
        assert!(f64::parse_smithy_primitive("nan").is_err());
    }

    #[test]
    fn encodes_primitives() {
        assert_eq!(Encoder::from(true).encode(), "true");
        assert_eq!(Encoder::from(Number::from(1200)).encode(), "1200");
        assert_eq!(Encoder::from(Number::from(-7)).encode(), "-7");
        assert_eq!(Encoder::from(Number::Float(0.5)).encode(), "0.5");
        assert_eq!(Encoder::from(Number::Float(f64::NAN)).encode(), "NaN");
        assert_eq!(
            Encoder::from(Number::Float(f64::NEG_INFINITY)).encode(),
            "-Infinity"
        );
    }
}
