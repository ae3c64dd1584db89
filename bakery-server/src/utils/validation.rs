//! Input validation helpers
//!
//! Centralized text length limits and validation functions shared by the
//! catalog repositories and order placement.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::utils::{AppError, ErrorCode};

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: cake, category, add-on, customer
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, reasons, messages, instructions
pub const MAX_NOTE_LEN: usize = 500;

/// Short labels: size weight, flavour, color, delivery time, add-on type
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// http(s) image URLs
pub const MAX_URL_LEN: usize = 2048;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Embedded image payload limit used when none is configured (2 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Upper bound for any single price or charge
pub const MAX_PRICE: f64 = 10_000_000.0;

/// Customer phone numbers are exactly this many digits
pub const PHONE_DIGITS: usize = 10;

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Every entry must be a non-empty label
pub fn validate_labels(values: &[String], field: &str) -> Result<(), AppError> {
    for v in values {
        validate_required_text(v, field, MAX_SHORT_TEXT_LEN)?;
    }
    Ok(())
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Prices are finite, non-negative and bounded
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 || value > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!("{field} must be a number between 0 and {MAX_PRICE}, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

// ── Identity ────────────────────────────────────────────────────────

/// Phone numbers are exactly ten ASCII digits
pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(AppError::required("customerPhone"));
    }
    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::new(ErrorCode::InvalidCustomerPhone).with_detail("field", "customerPhone"));
    }
    Ok(())
}

// ── Images ──────────────────────────────────────────────────────────

/// Accept an http(s) URL or a base64 `data:image/*` URL within `max_bytes`
pub fn validate_image(value: &str, field: &str, max_bytes: usize) -> Result<(), AppError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        return validate_len(value, field, MAX_URL_LEN);
    }

    let Some(rest) = value.strip_prefix("data:image/") else {
        return Err(unsupported_image(field));
    };
    let Some((media, payload)) = rest.split_once(',') else {
        return Err(unsupported_image(field));
    };
    let Some(subtype) = media.strip_suffix(";base64") else {
        return Err(unsupported_image(field));
    };
    if subtype.is_empty() {
        return Err(unsupported_image(field));
    }

    // Reject oversized payloads before decoding them
    let estimated = payload.len() / 4 * 3;
    if estimated > max_bytes + 2 {
        return Err(image_too_large(field, estimated, max_bytes));
    }
    let decoded = STANDARD
        .decode(payload)
        .map_err(|_| unsupported_image(field))?;
    if decoded.len() > max_bytes {
        return Err(image_too_large(field, decoded.len(), max_bytes));
    }
    Ok(())
}

fn unsupported_image(field: &str) -> AppError {
    AppError::new(ErrorCode::UnsupportedImageFormat).with_detail("field", field)
}

fn image_too_large(field: &str, size: usize, max_bytes: usize) -> AppError {
    AppError::with_message(
        ErrorCode::ImageTooLarge,
        format!("{field} is too large ({size} bytes, max {max_bytes})"),
    )
    .with_detail("field", field)
    .with_detail("maxBytes", max_bytes)
}
