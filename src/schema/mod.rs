//! Record schema for techedu
//!
//! Defines the five record types (courses, instructors, testimonials,
//! contacts, enrollments), their insert shapes, and the validation that
//! turns an untrusted JSON body into a typed insert.
//!
//! Validation runs before any store mutation. A body that fails validation
//! never reaches the store.

mod errors;
mod types;
mod validator;

pub use errors::{IssueCode, ValidationErrors, ValidationIssue};
pub use types::{
    Contact, Course, Enrollment, Instructor, NewContact, NewCourse, NewEnrollment,
    NewInstructor, NewTestimonial, TargetLevel, Testimonial,
};
pub use validator::{validate_contact, validate_enrollment, ValidationResult};
