use crate::utils::error::{QuoteError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> QuoteError {
    QuoteError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Lookup endpoints must be absolute http(s) URLs.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("reference.countries_endpoint", "https://example.com").is_ok());
        assert!(validate_url("reference.countries_endpoint", "http://example.com").is_ok());
        assert!(validate_url("reference.countries_endpoint", "").is_err());
        assert!(validate_url("reference.countries_endpoint", "invalid-url").is_err());
        assert!(validate_url("reference.countries_endpoint", "ftp://example.com").is_err());
        assert!(validate_url("reference.countries_endpoint", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("defaults.tax_percent", 15.0, 0.0, 100.0).is_ok());
        assert!(validate_range("defaults.tax_percent", -1.0, 0.0, 100.0).is_err());
        assert!(validate_range("defaults.tax_percent", 120.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_path_and_text() {
        assert!(validate_path("output.path", "./quotes").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "   ").is_err());
        assert!(validate_non_empty_string("defaults.currency", "  ").is_err());
        assert!(validate_non_empty_string("defaults.currency", "USD").is_ok());
    }
}
