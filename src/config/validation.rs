use crate::error::AppError;
use std::path::Path;

/// Settings checked by [`validate_config`].
pub struct ConfigFields<'a> {
    pub api_base_url: &'a str,
    pub api_key: &'a str,
    pub default_league: &'a str,
    pub log_file_path: &'a Option<String>,
    pub http_timeout_seconds: u64,
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - API key and default league cannot be blank
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(fields: &ConfigFields<'_>) -> Result<(), AppError> {
    let base = fields.api_base_url.trim();
    if base.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }
    if base.trim_start_matches("https://").trim_start_matches("http://").is_empty() {
        return Err(AppError::config_error("API base URL has no host"));
    }

    if fields.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if fields.default_league.trim().is_empty() {
        return Err(AppError::config_error("Default league cannot be empty"));
    }

    if fields.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = fields.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields<'a>(base: &'a str, log: &'a Option<String>) -> ConfigFields<'a> {
        ConfigFields {
            api_base_url: base,
            api_key: "123",
            default_league: "Spanish La Liga",
            log_file_path: log,
            http_timeout_seconds: 30,
        }
    }

    #[test]
    fn test_accepts_http_and_https() {
        let none = None;
        assert!(validate_config(&fields("https://www.thesportsdb.com/api/v1/json", &none)).is_ok());
        assert!(validate_config(&fields("http://localhost:8080", &none)).is_ok());
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        let none = None;
        for base in ["", "   ", "www.thesportsdb.com", "ftp://example.com", "https://"] {
            let result = validate_config(&fields(base, &none));
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "expected {base:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_blank_key_league_and_zero_timeout() {
        let none = None;
        let mut f = fields("https://api.example.com", &none);
        f.api_key = " ";
        assert!(validate_config(&f).is_err());

        let mut f = fields("https://api.example.com", &none);
        f.default_league = "";
        assert!(validate_config(&f).is_err());

        let mut f = fields("https://api.example.com", &none);
        f.http_timeout_seconds = 0;
        assert!(validate_config(&f).is_err());
    }

    #[test]
    fn test_log_path_rules() {
        let empty = Some(String::new());
        assert!(validate_config(&fields("https://api.example.com", &empty)).is_err());

        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("app.log");
        let log = Some(nested.to_string_lossy().to_string());
        assert!(validate_config(&fields("https://api.example.com", &log)).is_ok());
        assert!(nested.parent().unwrap().exists());
    }
}
