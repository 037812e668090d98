use sea_orm::DbErr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
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

/// Parses a Discord snowflake stored as a string column.
///
/// Used at the repository boundary where failures surface as `DbErr` alongside
/// other storage errors.
///
/// # Arguments
/// - `value` - The stored column value
/// - `column` - Column name included in the error message
///
/// # Returns
/// - `Ok(u64)` - Parsed snowflake
/// - `Err(DbErr::Custom)` - Value is not a valid u64
pub fn parse_snowflake(value: &str, column: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

/// Parses an optional snowflake column, keeping `None` as `None`.
pub fn parse_optional_snowflake(value: Option<&str>, column: &str) -> Result<Option<u64>, DbErr> {
    value.map(|v| parse_snowflake(v, column)).transpose()
}

/// Parses snowflake columns and sorts them numerically.
///
/// String columns order by their text, which puts "3001" after "10000000". Sorting
/// after parsing gives the numeric order.
pub fn parse_sorted_snowflakes<'a>(
    values: impl IntoIterator<Item = &'a str>,
    column: &str,
) -> Result<Vec<u64>, DbErr> {
    let mut ids = values
        .into_iter()
        .map(|value| parse_snowflake(value, column))
        .collect::<Result<Vec<_>, _>>()?;
    ids.sort_unstable();

    Ok(ids)
}
