//! Record types for the catalog and inquiry collections
//!
//! Stored records carry a store-assigned `id`. The `New*` types are the
//! insert shapes: what a caller supplies before the store assigns identity
//! and timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audience a course or inquiry is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLevel {
    University,
    School,
}

impl TargetLevel {
    /// All accepted values, in wire form
    pub const VALUES: [&'static str; 2] = ["university", "school"];

    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLevel::University => "university",
            TargetLevel::School => "school",
        }
    }

    /// Case-insensitive comparison against a free-text level
    pub fn matches(&self, level: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(level)
    }
}

impl fmt::Display for TargetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetLevel {
    type Err = String;

    /// Exact, lowercase match only. Filtering is case-insensitive, input is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "university" => Ok(TargetLevel::University),
            "school" => Ok(TargetLevel::School),
            other => Err(format!("unknown target level '{}'", other)),
        }
    }
}

// ==================
// Catalog
// ==================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_level: TargetLevel,
    pub duration: String,
    pub price: String,
    pub original_price: Option<String>,
    pub rating: String,
    pub students_count: u32,
    pub image_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_level: TargetLevel,
    pub duration: String,
    pub price: String,
    pub original_price: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub experience: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub rating: String,
    pub students_count: u32,
    pub courses_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstructor {
    pub name: String,
    pub title: String,
    pub experience: String,
    pub bio: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub position: String,
    pub content: String,
    pub image_url: Option<String>,
    /// Star rating, 1 to 5
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub position: String,
    pub content: String,
    pub image_url: Option<String>,
}

// ==================
// Inquiries
// ==================

/// A general inquiry from the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course_interest: Option<String>,
    pub target_level: TargetLevel,
    pub preferred_schedule: Option<String>,
    pub message: String,
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course_interest: Option<String>,
    pub target_level: TargetLevel,
    pub preferred_schedule: Option<String>,
    pub message: String,
}

/// A registration for a specific class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Free-text course reference, not checked against the catalog
    pub course_id: String,
    pub target_level: TargetLevel,
    pub institution: Option<String>,
    pub grade: Option<String>,
    pub year_of_study: Option<String>,
    pub preferred_schedule: String,
    pub has_zoom_access: bool,
    pub emergency_contact: Option<String>,
    pub special_requirements: Option<String>,
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub course_id: String,
    pub target_level: TargetLevel,
    pub institution: Option<String>,
    pub grade: Option<String>,
    pub year_of_study: Option<String>,
    pub preferred_schedule: String,
    /// `None` means the submitter left it unset; stored as `true`
    pub has_zoom_access: Option<bool>,
    pub emergency_contact: Option<String>,
    pub special_requirements: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_level_wire_form() {
        assert_eq!(
            serde_json::to_value(TargetLevel::University).unwrap(),
            json!("university")
        );
        assert_eq!("school".parse::<TargetLevel>(), Ok(TargetLevel::School));
        assert!("School".parse::<TargetLevel>().is_err());
    }

    #[test]
    fn test_target_level_matches_ignores_case() {
        assert!(TargetLevel::University.matches("UNIVERSITY"));
        assert!(TargetLevel::School.matches("School"));
        assert!(!TargetLevel::School.matches("university"));
    }

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = Contact {
            id: "c1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            course_interest: Some("Programming".to_string()),
            target_level: TargetLevel::University,
            preferred_schedule: None,
            message: "Hello".to_string(),
            is_confirmed: false,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["courseInterest"], "Programming");
        assert_eq!(value["targetLevel"], "university");
        assert_eq!(value["isConfirmed"], false);
        assert!(value["phone"].is_null());
        assert!(value["createdAt"].is_string());
    }
}
