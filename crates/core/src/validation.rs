//! Required-field validation for form submissions.
//!
//! Both submission endpoints and login apply the same rule: a required
//! field that is absent or empty rejects the whole request before any
//! database write. The helpers here return [`CoreError::Validation`] so
//! the API layer can map every violation to a 400 uniformly.

use crate::error::CoreError;

/// Extract a required field, rejecting when it is absent or empty.
///
/// `label` is the client-facing field name used in the error message.
pub fn required(label: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!(
            "Field '{label}' is required"
        ))),
    }
}

/// Extract an optional field, substituting the empty string when absent.
///
/// Used for the project submission's reference-links field, which is
/// stored as `''` when the client omits it.
pub fn optional_or_empty(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_present() {
        let value = required("clientName", Some("Ada Lovelace")).expect("should pass");
        assert_eq!(value, "Ada Lovelace");
    }

    #[test]
    fn test_required_absent() {
        let err = required("clientEmail", None).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("clientEmail"));
    }

    #[test]
    fn test_required_empty() {
        // An empty string counts as missing, same as the form sending nothing.
        let err = required("subject", Some("")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_optional_or_empty() {
        assert_eq!(optional_or_empty(Some("https://example.com")), "https://example.com");
        assert_eq!(optional_or_empty(None), "");
    }
}
