//! Field-level payload checks shared by the entity modules.

use crate::errors::ModelError;

/// Trimmed value of a required text field.
pub fn required(field: &str, value: &str) -> Result<String, ModelError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ModelError::invalid(field, "is required"));
    }
    Ok(v.to_string())
}

pub fn validate_email(field: &str, value: &str) -> Result<String, ModelError> {
    let email = required(field, value)?;
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ModelError::invalid(field, "must be a valid email address"));
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(ModelError::invalid(field, "must be a valid email address"));
    }
    Ok(email)
}

pub fn non_negative(field: &str, value: f64) -> Result<f64, ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::invalid(field, "must be a non-negative number"));
    }
    Ok(value)
}

pub fn positive(field: &str, value: i32) -> Result<i32, ModelError> {
    if value < 1 {
        return Err(ModelError::invalid(field, "must be at least 1"));
    }
    Ok(value)
}

pub fn id_ref(field: &str, value: i32) -> Result<i32, ModelError> {
    if value < 1 {
        return Err(ModelError::invalid(field, "is required"));
    }
    Ok(value)
}

/// Blank optional text becomes the given default.
pub fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("name", "  Ada ").unwrap(), "Ada");
        let err = required("name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "validation error: name: is required");
    }

    #[test]
    fn email_format() {
        assert!(validate_email("email", "guest@example.com").is_ok());
        assert!(validate_email("email", "guest.example.com").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "guest@localhost").is_err());
        assert!(validate_email("email", "gu est@example.com").is_err());
        assert!(validate_email("email", "a@b@c.com").is_err());
    }

    #[test]
    fn numeric_bounds() {
        assert!(non_negative("total_price", 0.0).is_ok());
        assert!(non_negative("total_price", -0.01).is_err());
        assert!(non_negative("total_price", f64::NAN).is_err());
        assert!(positive("quantity", 1).is_ok());
        assert!(positive("quantity", 0).is_err());
    }

    #[test]
    fn blank_optional_uses_default() {
        assert_eq!(or_default(None, "medium"), "medium");
        assert_eq!(or_default(Some("  "), "medium"), "medium");
        assert_eq!(or_default(Some("high"), "medium"), "high");
    }
}
