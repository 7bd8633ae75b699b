// src/domain/timestamps.rs

use crate::errors::TimestampError;
use chrono::NaiveDateTime;

/// morph.io writes history timestamps in UTC with an explicit offset...
const WITH_OFFSET: &str = "%Y-%m-%dT%H:%M:%S.%6f+00:00";
/// ...but older scrapers stored them without one.
const WITHOUT_OFFSET: &str = "%Y-%m-%dT%H:%M:%S.%6f";

/// Parses a history timestamp such as `2017-03-01T09:15:02.123456+00:00`.
///
/// The `+00:00` suffix is optional and is the only offset accepted; no other
/// timezone normalisation happens. The result is a naive UTC wall-clock time.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, TimestampError> {
    NaiveDateTime::parse_from_str(input, WITH_OFFSET)
        .or_else(|_| NaiveDateTime::parse_from_str(input, WITHOUT_OFFSET))
        .map_err(|source| TimestampError {
            input: input.to_string(),
            source,
        })
}
