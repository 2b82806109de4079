use crate::utils::error::{Result, StudioError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(StudioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(StudioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(StudioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(StudioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 檢查檔案副檔名 (不分大小寫)
pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
    {
        Some(extension) if allowed_set.contains(extension.as_str()) => Ok(()),
        Some(extension) => Err(StudioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(StudioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(StudioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 也會落在這裡
    if !(value >= min && value <= max) {
        return Err(StudioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_url("api.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("generation.max_output_tokens", 2048, 1).is_ok());
        assert!(validate_positive_number("generation.max_output_tokens", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["jpg", "jpeg", "png"];
        assert!(validate_file_extension("image", "beach.jpg", &allowed).is_ok());
        assert!(validate_file_extension("image", "BEACH.PNG", &allowed).is_ok());
        assert!(validate_file_extension("image", "notes.txt", &allowed).is_err());
        assert!(validate_file_extension("image", "no_extension", &allowed).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("generation.temperature", 0.9, 0.0, 2.0).is_ok());
        assert!(validate_range("generation.temperature", 2.5, 0.0, 2.0).is_err());
        assert!(validate_range("generation.temperature", f64::NAN, 0.0, 2.0).is_err());
    }

    #[test]
    fn test_blank_strings() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t"));
        assert!(!is_blank(" x "));
        assert!(validate_non_empty_string("api.model", "  ").is_err());
    }
}
