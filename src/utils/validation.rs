use crate::domain::model::DraftField;
use crate::utils::error::{DeskError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Required form fields only need to be non-empty; whitespace counts as content.
pub fn validate_required_field(field: DraftField, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DeskError::MissingRequiredField { field });
    }
    Ok(())
}

/// A bare host name: `https://<host>/` must parse back to the same host with
/// no path, query, fragment, port or credentials.
pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    let invalid = |reason: &str| DeskError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: host.to_string(),
        reason: reason.to_string(),
    };

    if host.is_empty() {
        return Err(invalid("Host cannot be empty"));
    }

    let url = Url::parse(&format!("https://{}/", host))
        .map_err(|e| invalid(&format!("Invalid host: {}", e)))?;

    let bare = url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.port().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && url.host_str().is_some_and(|h| h.eq_ignore_ascii_case(host));
    if !bare {
        return Err(invalid("Expected a host name without path, query, fragment or port"));
    }
    Ok(())
}

/// 目的地識別碼：數字，可選 `+` 前綴
pub fn validate_destination_identifier(field_name: &str, value: &str) -> Result<()> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9]+$").expect("static pattern"));

    if !re.is_match(value) {
        return Err(DeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected digits, optionally prefixed with '+'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskError::InvalidConfigValueError {
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
    if value < min || value > max {
        return Err(DeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I, T>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a T>,
    T: std::hash::Hash + Eq + std::fmt::Display + 'a + ?Sized,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(DeskError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate value".to_string(),
            });
        }
    }
    Ok(())
}
