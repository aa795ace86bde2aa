//! In-memory store
//!
//! Holds the five collections for the lifetime of the process. Nothing is
//! persisted; a restart brings back the seed catalog and empty inquiries.

use chrono::Utc;

use crate::schema::{
    Contact, Course, Enrollment, Instructor, NewContact, NewCourse, NewEnrollment, NewInstructor,
    NewTestimonial, Testimonial,
};

use super::collection::Collection;
use super::errors::StorageResult;
use super::seed;
use super::store::Storage;

/// Map-backed implementation of `Storage`
pub struct MemoryStore {
    pub(super) courses: Collection<Course>,
    pub(super) instructors: Collection<Instructor>,
    pub(super) testimonials: Collection<Testimonial>,
    pub(super) contacts: Collection<Contact>,
    pub(super) enrollments: Collection<Enrollment>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            courses: Collection::new("courses"),
            instructors: Collection::new("instructors"),
            testimonials: Collection::new("testimonials"),
            contacts: Collection::new("contacts"),
            enrollments: Collection::new("enrollments"),
        }
    }

    /// Store pre-populated with the sample catalog
    pub fn seeded() -> StorageResult<Self> {
        let store = Self::new();
        seed::populate(&store)?;
        Ok(store)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStore {
    fn list_courses(&self) -> StorageResult<Vec<Course>> {
        self.courses.filtered(|c| c.is_active)
    }

    fn list_courses_by_category(&self, category: &str) -> StorageResult<Vec<Course>> {
        let wanted = category.to_lowercase();
        self.courses
            .filtered(|c| c.is_active && c.category.to_lowercase() == wanted)
    }

    fn list_courses_by_level(&self, level: &str) -> StorageResult<Vec<Course>> {
        self.courses
            .filtered(|c| c.is_active && c.target_level.matches(level))
    }

    fn create_course(&self, course: NewCourse) -> StorageResult<Course> {
        self.courses.insert_with(|id| Course {
            id,
            title: course.title,
            description: course.description,
            category: course.category,
            target_level: course.target_level,
            duration: course.duration,
            price: course.price,
            original_price: course.original_price,
            rating: "0".to_string(),
            students_count: 0,
            image_url: course.image_url,
            is_active: true,
        })
    }

    fn list_instructors(&self) -> StorageResult<Vec<Instructor>> {
        self.instructors.all()
    }

    fn create_instructor(&self, instructor: NewInstructor) -> StorageResult<Instructor> {
        self.instructors.insert_with(|id| Instructor {
            id,
            name: instructor.name,
            title: instructor.title,
            experience: instructor.experience,
            bio: instructor.bio,
            image_url: instructor.image_url,
            rating: "0".to_string(),
            students_count: 0,
            courses_count: 0,
        })
    }

    fn list_testimonials(&self) -> StorageResult<Vec<Testimonial>> {
        self.testimonials.all()
    }

    fn create_testimonial(&self, testimonial: NewTestimonial) -> StorageResult<Testimonial> {
        self.testimonials.insert_with(|id| Testimonial {
            id,
            name: testimonial.name,
            position: testimonial.position,
            content: testimonial.content,
            image_url: testimonial.image_url,
            rating: 5,
        })
    }

    fn create_contact(&self, contact: NewContact) -> StorageResult<Contact> {
        self.contacts.insert_with(|id| Contact {
            id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
            course_interest: contact.course_interest,
            target_level: contact.target_level,
            preferred_schedule: contact.preferred_schedule,
            message: contact.message,
            is_confirmed: false,
            created_at: Utc::now(),
        })
    }

    fn list_contacts(&self) -> StorageResult<Vec<Contact>> {
        self.contacts.newest_first(|c| c.created_at)
    }

    fn count_contacts(&self) -> StorageResult<usize> {
        self.contacts.len()
    }

    fn create_enrollment(&self, enrollment: NewEnrollment) -> StorageResult<Enrollment> {
        self.enrollments.insert_with(|id| Enrollment {
            id,
            first_name: enrollment.first_name,
            last_name: enrollment.last_name,
            email: enrollment.email,
            phone: enrollment.phone,
            course_id: enrollment.course_id,
            target_level: enrollment.target_level,
            institution: enrollment.institution,
            grade: enrollment.grade,
            year_of_study: enrollment.year_of_study,
            preferred_schedule: enrollment.preferred_schedule,
            has_zoom_access: enrollment.has_zoom_access.unwrap_or(true),
            emergency_contact: enrollment.emergency_contact,
            special_requirements: enrollment.special_requirements,
            is_confirmed: false,
            created_at: Utc::now(),
        })
    }

    fn list_enrollments(&self) -> StorageResult<Vec<Enrollment>> {
        self.enrollments.newest_first(|e| e.created_at)
    }

    fn count_enrollments(&self) -> StorageResult<usize> {
        self.enrollments.len()
    }
}
