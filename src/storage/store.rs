//! The `Storage` trait: every read and write the HTTP layer performs

use crate::schema::{
    Contact, Course, Enrollment, Instructor, NewContact, NewCourse, NewEnrollment, NewInstructor,
    NewTestimonial, Testimonial,
};

use super::errors::StorageResult;

/// Record store backing the API.
///
/// Courses, instructors and testimonials are written only at startup
/// (seeding). Contacts and enrollments grow through the public forms.
/// No operation updates or deletes a record.
pub trait Storage: Send + Sync {
    // ==================
    // Courses
    // ==================

    /// Active courses, insertion order
    fn list_courses(&self) -> StorageResult<Vec<Course>>;

    /// Active courses whose category matches, ignoring case
    fn list_courses_by_category(&self, category: &str) -> StorageResult<Vec<Course>>;

    /// Active courses whose target level matches, ignoring case.
    /// Unknown levels match nothing.
    fn list_courses_by_level(&self, level: &str) -> StorageResult<Vec<Course>>;

    fn create_course(&self, course: NewCourse) -> StorageResult<Course>;

    // ==================
    // Instructors & testimonials
    // ==================

    fn list_instructors(&self) -> StorageResult<Vec<Instructor>>;

    fn create_instructor(&self, instructor: NewInstructor) -> StorageResult<Instructor>;

    fn list_testimonials(&self) -> StorageResult<Vec<Testimonial>>;

    fn create_testimonial(&self, testimonial: NewTestimonial) -> StorageResult<Testimonial>;

    // ==================
    // Inquiries
    // ==================

    /// Stores a contact submission, assigning id, `created_at` and
    /// `is_confirmed = false`
    fn create_contact(&self, contact: NewContact) -> StorageResult<Contact>;

    /// All contacts, most recent first
    fn list_contacts(&self) -> StorageResult<Vec<Contact>>;

    fn count_contacts(&self) -> StorageResult<usize>;

    /// Stores an enrollment, assigning id, `created_at` and
    /// `is_confirmed = false`. Unset zoom access is stored as `true`.
    fn create_enrollment(&self, enrollment: NewEnrollment) -> StorageResult<Enrollment>;

    /// All enrollments, most recent first
    fn list_enrollments(&self) -> StorageResult<Vec<Enrollment>>;

    fn count_enrollments(&self) -> StorageResult<usize>;
}
