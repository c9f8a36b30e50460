use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from a String stored by the server itself
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a Discord ID supplied by a client
///
/// # Returns
/// - `Ok(u64)` - A non-zero snowflake
/// - `Err(AppError::BadRequest)` - Not a positive integer
pub fn parse_snowflake(value: &str) -> Result<u64, AppError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!(
            "'{}' is not a valid Discord ID",
            value
        ))),
    }
}
