/// Validation utilities for request paths and the backend origin

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a request path appended to the base origin
pub fn validate_path(path: &str) -> ValidationResult {
    if path.is_empty() {
        return ValidationResult::err("Path is required");
    }

    if !path.starts_with('/') {
        return ValidationResult::err(format!("Path must begin with '/': {}", path));
    }

    if path.starts_with("//") {
        return ValidationResult::err(format!("Path must not begin with '//': {}", path));
    }

    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return ValidationResult::err(format!("Path contains whitespace or control characters: {:?}", path));
    }

    ValidationResult::ok()
}

/// Validate the backend base URL
pub fn validate_base_url(base_url: &str) -> ValidationResult {
    if base_url.is_empty() {
        return ValidationResult::err("Base URL is required");
    }

    let url = match reqwest::Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => return ValidationResult::err(format!("Invalid base URL '{}': {}", base_url, e)),
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return ValidationResult::err(format!("Base URL must use http or https: {}", base_url));
    }

    if url.host_str().is_none() {
        return ValidationResult::err(format!("Base URL has no host: {}", base_url));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return ValidationResult::err(format!(
            "Base URL must not carry a query or fragment: {}",
            base_url
        ));
    }

    ValidationResult::ok()
}
