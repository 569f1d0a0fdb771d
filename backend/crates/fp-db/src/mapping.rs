//! Column decoding shared by the repositories.
//!
//! Ids are stored as TEXT, timestamps as INTEGER milliseconds since the
//! epoch, enums as their kebab-case string, and embedded lists as JSON text.

use crate::{DbError, Result as DbErrorResult};

use std::fmt::Display;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Corrupt {
        message: format!("Invalid UUID in {column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Corrupt {
        message: format!("Invalid timestamp in {column}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_enum<T>(value: &str, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    T::from_str(value).map_err(|e| DbError::Corrupt {
        message: format!("Invalid value in {column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_count(value: i64, column: &str) -> DbErrorResult<u32> {
    u32::try_from(value).map_err(|_| DbError::Corrupt {
        message: format!("Out of range count in {column}: {value}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn from_json<T: DeserializeOwned>(value: &str) -> DbErrorResult<T> {
    Ok(serde_json::from_str(value)?)
}

#[track_caller]
pub(crate) fn to_json<T: Serialize>(value: &T) -> DbErrorResult<String> {
    Ok(serde_json::to_string(value)?)
}
