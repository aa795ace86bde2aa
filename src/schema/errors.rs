//! Validation failure types
//!
//! A rejected write body produces a `ValidationErrors` holding every issue
//! found, so a form can highlight all bad fields at once. These are response
//! payloads, serialized as-is into the 400 body.

use std::fmt;

use serde::Serialize;

/// Machine-readable issue codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Field missing, or present with the wrong JSON type
    InvalidType,
    /// Value outside a closed set
    InvalidEnumValue,
    /// Body could not be parsed as JSON
    InvalidJson,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::InvalidEnumValue => "invalid_enum_value",
            IssueCode::InvalidJson => "invalid_json",
        }
    }
}

/// One field-level problem with a submitted body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// Path from the body root; empty for the body itself
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(IssueCode::InvalidType, vec![field.to_string()], "Required")
    }

    pub fn type_mismatch(field: &str, expected: &str, actual: &str) -> Self {
        Self::new(
            IssueCode::InvalidType,
            vec![field.to_string()],
            format!("Expected {}, received {}", expected, actual),
        )
    }

    pub fn invalid_enum(field: &str, allowed: &[&str], actual: &str) -> Self {
        let options = allowed
            .iter()
            .map(|v| format!("'{}'", v))
            .collect::<Vec<_>>()
            .join(" | ");
        Self::new(
            IssueCode::InvalidEnumValue,
            vec![field.to_string()],
            format!("Invalid enum value. Expected {}, received '{}'", options, actual),
        )
    }

    /// The body as a whole is not an object
    pub fn root_mismatch(actual: &str) -> Self {
        Self::new(
            IssueCode::InvalidType,
            Vec::new(),
            format!("Expected object, received {}", actual),
        )
    }

    pub fn malformed_json(reason: impl Into<String>) -> Self {
        Self::new(IssueCode::InvalidJson, Vec::new(), reason)
    }

    /// Dotted path, `$root` for the body itself
    pub fn field(&self) -> String {
        if self.path.is_empty() {
            "$root".to_string()
        } else {
            self.path.join(".")
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message)
    }
}

/// All issues found in one body; never empty when returned as an error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(issue: ValidationIssue) -> Self {
        Self { issues: vec![issue] }
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// True if any issue points at the named top-level field
    pub fn mentions(&self, field: &str) -> bool {
        self.issues
            .iter()
            .any(|i| i.path.first().map(String::as_str) == Some(field))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.issues.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_shape() {
        let issue = ValidationIssue::missing_field("message");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["code"], "invalid_type");
        assert_eq!(json["path"], serde_json::json!(["message"]));
        assert_eq!(json["message"], "Required");
    }

    #[test]
    fn test_enum_message_lists_options() {
        let issue = ValidationIssue::invalid_enum("targetLevel", &["university", "school"], "college");
        assert_eq!(
            issue.message,
            "Invalid enum value. Expected 'university' | 'school', received 'college'"
        );
        assert_eq!(issue.code.as_str(), "invalid_enum_value");
    }

    #[test]
    fn test_root_issue_field_name() {
        let issue = ValidationIssue::root_mismatch("array");
        assert_eq!(issue.field(), "$root");
        assert_eq!(issue.to_string(), "$root: Expected object, received array");
    }

    #[test]
    fn test_mentions() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationIssue::missing_field("email"));
        errors.push(ValidationIssue::type_mismatch("phone", "string", "number"));

        assert_eq!(errors.len(), 2);
        assert!(errors.mentions("email"));
        assert!(errors.mentions("phone"));
        assert!(!errors.mentions("message"));
    }
}
