use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::server::error::AppError;

/// Converts a Unix timestamp in milliseconds to a UTC datetime
///
/// # Arguments
/// - `field` - Name of the field the value came from, used in the error message
/// - `millis` - Milliseconds since the Unix epoch
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The corresponding instant
/// - `Err(AppError::BadRequest)` - The value is outside chrono's representable range
pub fn parse_unix_millis(field: &str, millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        AppError::BadRequest(format!("{} is not a valid timestamp: {}", field, millis))
    })
}

/// Parses a multipart text value into the target type
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - The value could not be parsed, naming the field
pub fn parse_form_value<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| AppError::BadRequest(format!("Invalid value for {}: {}", field, value)))
}

/// Parses an optional ISO `YYYY-MM-DD` query value, treating an empty string as absent
///
/// # Returns
/// - `Ok(Some(NaiveDate))` - Successfully parsed date
/// - `Ok(None)` - The value is missing or empty
/// - `Err(AppError::BadRequest)` - The value is not a valid date
pub fn parse_query_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid date for {}: {}", field, value))),
    }
}

/// First instant of the given day in UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Last millisecond of the given day in UTC.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + TimeDelta::days(1) - TimeDelta::milliseconds(1)
}
