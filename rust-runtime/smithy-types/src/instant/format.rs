/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum DateParseError {
    Invalid(&'static str),
    IntParseError,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Invalid(reason) => write!(f, "invalid timestamp: {}", reason),
            DateParseError::IntParseError => write!(f, "failed to parse integer in timestamp"),
        }
    }
}

impl std::error::Error for DateParseError {}

pub mod date_time {
    use super::DateParseError;
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat, Utc};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Ok: "2019-12-16T15:48:18-08:00"
    pub fn parse(s: &str) -> Result<Instant, DateParseError> {
        let parsed = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|_| DateParseError::Invalid("not an RFC-3339 date-time"))?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }

    pub fn format(instant: &Instant) -> String {
        let date_time =
            match DateTime::<Utc>::from_timestamp(instant.seconds, instant.subsecond_nanos) {
                Some(date_time) => date_time,
                // unreachable for anything produced by `parse`; clamp rather than panic
                None => DateTime::<Utc>::MAX_UTC,
            };
        if instant.subsecond_nanos == 0 {
            return date_time.to_rfc3339_opts(SecondsFormat::Secs, true);
        }
        let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
        let mut trimmed = rfc3339
            .trim_end_matches('Z')
            .trim_end_matches('0')
            .to_owned();
        trimmed.push('Z');
        trimmed
    }
}

pub mod epoch_seconds {
    use super::DateParseError;
    use crate::Instant;

    pub fn parse(s: &str) -> Result<Instant, DateParseError> {
        let s = s.trim();
        match s.split_once('.') {
            None => s
                .parse::<i64>()
                .map(Instant::from_epoch_seconds)
                .map_err(|_| DateParseError::IntParseError),
            Some((seconds, fraction)) => {
                if fraction.is_empty() || fraction.len() > 9 {
                    return Err(DateParseError::Invalid("bad fractional seconds"));
                }
                let seconds = seconds
                    .parse::<i64>()
                    .map_err(|_| DateParseError::IntParseError)?;
                let digits = fraction
                    .parse::<u32>()
                    .map_err(|_| DateParseError::IntParseError)?;
                let nanos = digits * 10_u32.pow(9 - fraction.len() as u32);
                Ok(Instant::from_secs_and_nanos(seconds, nanos))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::date_time;
    use super::DateParseError;
    use crate::Instant;
    use proptest::prelude::*;

    #[test]
    fn date_time_format() {
        let basic = "2019-12-16T23:48:18Z";
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(date_time::format(&instant), basic);
        assert_eq!(date_time::parse(basic), Ok(instant));
    }

    #[test]
    fn date_time_fractional() {
        let fractional = "2019-12-16T23:48:18.402Z";
        let instant = Instant::from_secs_and_nanos(1576540098, 402_000_000);
        assert_eq!(date_time::parse(fractional), Ok(instant));
        assert_eq!(date_time::format(&instant), fractional);
    }

    #[test]
    fn date_time_offset() {
        let offset = "2019-12-16T15:48:18-08:00";
        assert_eq!(
            date_time::parse(offset),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
    }

    #[test]
    fn seconds_ending_in_zero_are_kept() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(date_time::format(&instant), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            date_time::parse("Mon, 16 Dec 2019 23:48:18 GMT"),
            Err(DateParseError::Invalid("not an RFC-3339 date-time"))
        );
        assert!(date_time::parse("").is_err());
    }

    proptest! {
        #[test]
        fn date_time_roundtrip(secs in 0_i64..253402300799, nanos in 0_u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = date_time::format(&instant);
            prop_assert_eq!(date_time::parse(&formatted), Ok(instant));
        }
    }
}
