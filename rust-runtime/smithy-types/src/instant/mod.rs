/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::time::{SystemTime, UNIX_EPOCH};

mod format;

pub use format::DateParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, stored relative to the Unix epoch.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant {
                    seconds,
                    subsecond_nanos: nanos,
                }
            }
        }
    }

    /// Parses an `Instant` from `s` in the given wire `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => format::date_time::format(self),
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

/// Wire representations of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC-3339 / ISO-8601 date-time, eg. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Seconds since the Unix epoch, optionally fractional
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn system_time_before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
    }

    #[test]
    fn epoch_seconds_format() {
        let instant = Instant::from_secs_and_nanos(1576540098, 120_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.12");
        assert_eq!(
            Instant::from_str("1576540098.12", Format::EpochSeconds),
            Ok(instant)
        );
    }
}
