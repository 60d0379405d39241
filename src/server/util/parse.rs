//! Parsing of untrusted query-string values.
//!
//! Each helper treats a missing or blank value as absent and rejects a malformed one with
//! `AppError::BadRequest`, so a filter the client believes was applied is never silently
//! dropped.

use chrono::NaiveDate;

use crate::server::{
    data::query::{MAX_LIMIT, MAX_PAGE},
    error::AppError,
};

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses `page`, which must be an integer between 1 and `MAX_PAGE`.
pub fn parse_page(value: Option<&str>) -> Result<Option<u64>, AppError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };

    match value.parse::<u64>() {
        Ok(page) if (1..=MAX_PAGE).contains(&page) => Ok(Some(page)),
        _ => Err(AppError::BadRequest(format!(
            "page must be an integer between 1 and {}",
            MAX_PAGE
        ))),
    }
}

/// Parses `limit`, which must be an integer between 1 and `MAX_LIMIT`.
pub fn parse_limit(value: Option<&str>) -> Result<Option<u64>, AppError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };

    match value.parse::<u64>() {
        Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(Some(limit)),
        _ => Err(AppError::BadRequest(format!(
            "limit must be an integer between 1 and {}",
            MAX_LIMIT
        ))),
    }
}

/// Parses a positive integer id such as `gameId`.
pub fn parse_id(field: &str, value: Option<&str>) -> Result<Option<i32>, AppError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };

    match value.parse::<i32>() {
        Ok(id) if id >= 1 => Ok(Some(id)),
        _ => Err(AppError::BadRequest(format!(
            "{} must be a positive integer",
            field
        ))),
    }
}

/// Parses a required positive integer path segment.
pub fn parse_path_id(field: &str, value: &str) -> Result<i32, AppError> {
    parse_id(field, Some(value))?
        .ok_or_else(|| AppError::BadRequest(format!("{} must be a positive integer", field)))
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };

    let well_formed = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });

    let date = well_formed
        .then(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
        .flatten()
        .ok_or_else(|| {
            AppError::BadRequest(format!("{} must be a valid date (YYYY-MM-DD)", field))
        })?;

    Ok(Some(date))
}

/// Parses `startDate` and `endDate` and checks they are in order.
pub fn parse_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), AppError> {
    let start = parse_date("startDate", start)?;
    let end = parse_date("endDate", end)?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(AppError::BadRequest(
                "startDate must not be after endDate".to_string(),
            ));
        }
    }

    Ok((start, end))
}
