//! Common validation utilities.

use validator::ValidationError;

/// Returns true when a text field is missing or contains only whitespace.
///
/// The API treats a blank string the same as an absent field, matching the
/// submission contract of the complaint form.
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        Some(text) => text.trim().is_empty(),
        None => true,
    }
}

/// Validates that every listed required field is present and non-blank.
///
/// On failure the error message names all required fields, e.g.
/// "Missing required fields: name, email, complaint_type, and description
/// are required".
pub fn validate_required_fields(
    fields: &[(&'static str, Option<&str>)],
) -> Result<(), ValidationError> {
    if fields.iter().any(|(_, value)| is_blank(*value)) {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let mut err = ValidationError::new("missing_required_fields");
        err.message = Some(
            format!(
                "Missing required fields: {} are required",
                oxford_join(&names)
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}

fn oxford_join(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} and {}", first, second),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_none() {
        assert!(is_blank(None));
    }

    #[test]
    fn test_is_blank_empty() {
        assert!(is_blank(Some("")));
    }

    #[test]
    fn test_is_blank_whitespace() {
        assert!(is_blank(Some("   \t")));
    }

    #[test]
    fn test_is_blank_text() {
        assert!(!is_blank(Some("Billing")));
    }

    #[test]
    fn test_validate_required_fields_all_present() {
        let result = validate_required_fields(&[
            ("name", Some("Jane")),
            ("email", Some("jane@example.com")),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_required_fields_message_names_every_field() {
        let err = validate_required_fields(&[
            ("name", Some("Jane")),
            ("email", None),
            ("complaint_type", Some("Billing")),
            ("description", Some("text")),
        ])
        .unwrap_err();

        assert_eq!(err.code, "missing_required_fields");
        assert_eq!(
            err.message.unwrap(),
            "Missing required fields: name, email, complaint_type, and description are required"
        );
    }

    #[test]
    fn test_validate_required_fields_blank_counts_as_missing() {
        assert!(validate_required_fields(&[("name", Some("  "))]).is_err());
    }

    #[test]
    fn test_oxford_join_shapes() {
        assert_eq!(oxford_join(&["a"]), "a");
        assert_eq!(oxford_join(&["a", "b"]), "a and b");
        assert_eq!(oxford_join(&["a", "b", "c"]), "a, b, and c");
    }
}
