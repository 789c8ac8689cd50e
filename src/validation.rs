//! Validation helpers for raw user input
//!
//! The course store accepts whatever it is given; these helpers are used by
//! the dashboard handlers before anything reaches the store.

use crate::course::ResourceType;
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// Clamp a progress value into [0, 100]
pub fn clamp_progress(progress: i64) -> u8 {
    progress.clamp(0, 100) as u8
}

/// Parse a resource type (article, video, book, other)
pub fn parse_resource_type(type_str: &str) -> Result<ResourceType> {
    match type_str.trim().to_lowercase().parse::<ResourceType>() {
        Ok(kind) => Ok(kind),
        Err(e) => bail!(e),
    }
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ),
    }
}

/// Parse a YYYY-MM month into its first day
pub fn parse_month(month_str: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(&format!("{}-01", month_str.trim()), "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!(
            "Invalid month format '{}'. Use YYYY-MM (e.g., '2025-03')",
            month_str
        ),
    }
}

/// Require a non-blank value for a named field, returning it trimmed
pub fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail!("{} is required", field);
    }
    Ok(trimmed.to_string())
}

/// Accept an http(s) URL
pub fn validate_url(url: &str) -> Result<String> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => bail!("Must be a valid URL: '{}'", url),
    }
}

/// Accept an empty string or a valid URL (course links are optional)
pub fn validate_optional_url(url: &str) -> Result<String> {
    if url.trim().is_empty() {
        return Ok(String::new());
    }
    validate_url(url)
}

/// Study session length in minutes; must be positive
pub fn parse_duration(duration_str: &str) -> Result<u32> {
    match duration_str.trim().parse::<u32>() {
        Ok(0) | Err(_) => bail!(
            "Invalid duration '{}'. Use a positive number of minutes",
            duration_str
        ),
        Ok(minutes) => Ok(minutes),
    }
}

/// Normalize an id by trimming surrounding whitespace
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(150), 100);
        assert_eq!(clamp_progress(-5), 0);
        assert_eq!(clamp_progress(42), 42);
    }

    #[test]
    fn test_parse_resource_type_is_case_insensitive() {
        assert_eq!(parse_resource_type(" Video ").unwrap(), ResourceType::video);
        let err = parse_resource_type("podcast").unwrap_err();
        assert!(err.to_string().contains("Valid options"));
    }

    #[test]
    fn test_parse_date_and_month() {
        assert_eq!(
            parse_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_date("15/03/2025").is_err());
        assert_eq!(
            parse_month("2025-03").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_month("2025-13").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://react.dev").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("https://").is_err());
        assert_eq!(validate_optional_url("  ").unwrap(), "");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("60").unwrap(), 60);
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-15").is_err());
    }

    #[test]
    fn test_require() {
        assert_eq!(require("Title", "  Rust ").unwrap(), "Rust");
        assert_eq!(
            require("Title", " ").unwrap_err().to_string(),
            "Title is required"
        );
    }
}
