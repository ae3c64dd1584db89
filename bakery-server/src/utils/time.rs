//! Delivery date helpers

use chrono::{NaiveDate, Utc};

use super::{AppError, AppResult, ErrorCode};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid date format: {date}"),
        )
        .with_detail("field", "deliveryDate")
    })
}

/// Delivery dates may not lie before today (UTC)
pub fn validate_delivery_date(date: &str) -> AppResult<NaiveDate> {
    let parsed = parse_date(date)?;
    let today = Utc::now().date_naive();
    if parsed < today {
        return Err(AppError::validation(format!(
            "Delivery date {parsed} is in the past (today is {today})"
        ))
        .with_detail("field", "deliveryDate"));
    }
    Ok(parsed)
}
