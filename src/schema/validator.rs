//! Shape validation for submitted contact and enrollment bodies
//!
//! Validation semantics:
//! - Body must be a JSON object
//! - Required fields are present and are strings
//! - Optional fields are absent, null, or of their declared type
//! - `targetLevel` is one of the `TargetLevel` values (exact, lowercase)
//! - Undeclared fields are ignored
//!
//! Every issue is collected before returning. Validation never touches the
//! store and never mutates its input.

use serde_json::{Map, Value};

use super::errors::{ValidationErrors, ValidationIssue};
use super::types::{NewContact, NewEnrollment, TargetLevel};

/// Result of validating a write body
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Validates a contact form body.
pub fn validate_contact(body: &Value) -> ValidationResult<NewContact> {
    let mut reader = FieldReader::new(body)?;

    let contact = NewContact {
        first_name: reader.required_str("firstName"),
        last_name: reader.required_str("lastName"),
        email: reader.required_str("email"),
        phone: reader.optional_str("phone"),
        course_interest: reader.optional_str("courseInterest"),
        target_level: reader.target_level("targetLevel"),
        preferred_schedule: reader.optional_str("preferredSchedule"),
        message: reader.required_str("message"),
    };

    reader.finish(contact)
}

/// Validates a class enrollment body.
pub fn validate_enrollment(body: &Value) -> ValidationResult<NewEnrollment> {
    let mut reader = FieldReader::new(body)?;

    let enrollment = NewEnrollment {
        first_name: reader.required_str("firstName"),
        last_name: reader.required_str("lastName"),
        email: reader.required_str("email"),
        phone: reader.required_str("phone"),
        course_id: reader.required_str("courseId"),
        target_level: reader.target_level("targetLevel"),
        institution: reader.optional_str("institution"),
        grade: reader.optional_str("grade"),
        year_of_study: reader.optional_str("yearOfStudy"),
        preferred_schedule: reader.required_str("preferredSchedule"),
        has_zoom_access: reader.optional_bool("hasZoomAccess"),
        emergency_contact: reader.optional_str("emergencyContact"),
        special_requirements: reader.optional_str("specialRequirements"),
    };

    reader.finish(enrollment)
}

/// Reads typed fields out of a body object, recording an issue for each
/// field that does not fit. Placeholder values are returned for bad fields;
/// `finish` discards the built record whenever any issue was recorded.
struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    fn new(body: &'a Value) -> ValidationResult<Self> {
        let obj = body.as_object().ok_or_else(|| {
            ValidationErrors::single(ValidationIssue::root_mismatch(json_type_name(Some(body))))
        })?;

        Ok(Self {
            obj,
            errors: ValidationErrors::new(),
        })
    }

    fn required_str(&mut self, field: &str) -> String {
        match self.obj.get(field) {
            Some(Value::String(s)) => s.clone(),
            None => {
                self.errors.push(ValidationIssue::missing_field(field));
                String::new()
            }
            Some(other) => {
                self.errors.push(ValidationIssue::type_mismatch(
                    field,
                    "string",
                    json_type_name(Some(other)),
                ));
                String::new()
            }
        }
    }

    fn optional_str(&mut self, field: &str) -> Option<String> {
        match self.obj.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.errors.push(ValidationIssue::type_mismatch(
                    field,
                    "string",
                    json_type_name(Some(other)),
                ));
                None
            }
        }
    }

    fn optional_bool(&mut self, field: &str) -> Option<bool> {
        match self.obj.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => {
                self.errors.push(ValidationIssue::type_mismatch(
                    field,
                    "boolean",
                    json_type_name(Some(other)),
                ));
                None
            }
        }
    }

    fn target_level(&mut self, field: &str) -> TargetLevel {
        let raw = match self.obj.get(field) {
            Some(Value::String(s)) => s,
            None => {
                self.errors.push(ValidationIssue::missing_field(field));
                return TargetLevel::University;
            }
            Some(other) => {
                self.errors.push(ValidationIssue::type_mismatch(
                    field,
                    "string",
                    json_type_name(Some(other)),
                ));
                return TargetLevel::University;
            }
        };

        match raw.parse::<TargetLevel>() {
            Ok(level) => level,
            Err(_) => {
                self.errors
                    .push(ValidationIssue::invalid_enum(field, &TargetLevel::VALUES, raw));
                TargetLevel::University
            }
        }
    }

    fn finish<T>(self, record: T) -> ValidationResult<T> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(self.errors)
        }
    }
}

/// JSON type name as reported in issue messages
fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::errors::IssueCode;
    use serde_json::json;

    fn valid_contact() -> Value {
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "targetLevel": "university",
            "message": "Do you run evening classes?"
        })
    }

    fn valid_enrollment() -> Value {
        json!({
            "firstName": "Alan",
            "lastName": "Turing",
            "email": "alan@example.com",
            "phone": "+44 20 7946 0000",
            "courseId": "Advanced Data Structures & Algorithms",
            "targetLevel": "university",
            "preferredSchedule": "weekday-evening"
        })
    }

    #[test]
    fn test_valid_contact() {
        let contact = validate_contact(&valid_contact()).unwrap();
        assert_eq!(contact.first_name, "Grace");
        assert_eq!(contact.target_level, TargetLevel::University);
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_contact_missing_message() {
        let mut body = valid_contact();
        body.as_object_mut().unwrap().remove("message");

        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.mentions("message"));
        assert_eq!(errors.issues()[0].message, "Required");
    }

    #[test]
    fn test_contact_collects_every_issue() {
        let body = json!({
            "firstName": 7,
            "email": "x@example.com",
            "targetLevel": "college",
            "message": "hi",
            "phone": false
        });

        let errors = validate_contact(&body).unwrap_err();
        assert!(errors.mentions("firstName"));
        assert!(errors.mentions("lastName"));
        assert!(errors.mentions("targetLevel"));
        assert!(errors.mentions("phone"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_optional_fields_accept_null() {
        let mut body = valid_contact();
        body["phone"] = Value::Null;
        body["courseInterest"] = json!("Cybersecurity");

        let contact = validate_contact(&body).unwrap();
        assert!(contact.phone.is_none());
        assert_eq!(contact.course_interest.as_deref(), Some("Cybersecurity"));
    }

    #[test]
    fn test_required_field_rejects_null() {
        let mut body = valid_contact();
        body["email"] = Value::Null;

        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.issues()[0].message, "Expected string, received null");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut body = valid_contact();
        body["isConfirmed"] = json!(true);
        body["id"] = json!("caller-chosen");

        assert!(validate_contact(&body).is_ok());
    }

    #[test]
    fn test_non_object_body() {
        let errors = validate_contact(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.issues()[0].path.is_empty());
        assert_eq!(errors.issues()[0].code, IssueCode::InvalidType);
    }

    #[test]
    fn test_target_level_is_exact() {
        let mut body = valid_contact();
        body["targetLevel"] = json!("University");

        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.issues()[0].code, IssueCode::InvalidEnumValue);
    }

    #[test]
    fn test_valid_enrollment_defaults() {
        let enrollment = validate_enrollment(&valid_enrollment()).unwrap();
        assert_eq!(enrollment.phone, "+44 20 7946 0000");
        assert!(enrollment.has_zoom_access.is_none());
        assert!(enrollment.institution.is_none());
    }

    #[test]
    fn test_enrollment_zoom_access_must_be_bool() {
        let mut body = valid_enrollment();
        body["hasZoomAccess"] = json!("yes");

        let errors = validate_enrollment(&body).unwrap_err();
        assert!(errors.mentions("hasZoomAccess"));
        assert_eq!(errors.issues()[0].message, "Expected boolean, received string");
    }

    #[test]
    fn test_enrollment_requires_phone_and_schedule() {
        let mut body = valid_enrollment();
        let obj = body.as_object_mut().unwrap();
        obj.remove("phone");
        obj.remove("preferredSchedule");

        let errors = validate_enrollment(&body).unwrap_err();
        assert!(errors.mentions("phone"));
        assert!(errors.mentions("preferredSchedule"));
        assert_eq!(errors.len(), 2);
    }
}
