//! Sample catalog loaded at startup
//!
//! Seeded records keep their published ratings and enrollment counts, so they
//! are inserted directly rather than through the `create_*` operations (which
//! reset those to zero).

use crate::schema::{Course, Instructor, TargetLevel, Testimonial};

use super::errors::StorageResult;
use super::memory::MemoryStore;

const COURSE_IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&h=400";
const PORTRAIT_IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=300&h=300";
const AVATAR_IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=100&h=100";

struct CourseSeed {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    target_level: TargetLevel,
    duration: &'static str,
    price: &'static str,
    original_price: &'static str,
    rating: &'static str,
    students_count: u32,
    photo: &'static str,
}

const COURSES: &[CourseSeed] = &[
    // University level
    CourseSeed {
        title: "Advanced Data Structures & Algorithms",
        description: "Master complex algorithms and data structures for competitive programming and software engineering interviews.",
        category: "Programming",
        target_level: TargetLevel::University,
        duration: "16 weeks",
        price: "399.00",
        original_price: "549.00",
        rating: "4.9",
        students_count: 245,
        photo: "photo-1531482615713-2afd69097998",
    },
    CourseSeed {
        title: "Machine Learning & AI Engineering",
        description: "Build production-ready ML models using TensorFlow, PyTorch, and modern MLOps practices.",
        category: "Data Science",
        target_level: TargetLevel::University,
        duration: "20 weeks",
        price: "599.00",
        original_price: "799.00",
        rating: "4.8",
        students_count: 189,
        photo: "photo-1551434678-e076c223a692",
    },
    CourseSeed {
        title: "Cybersecurity & Ethical Hacking",
        description: "Advanced penetration testing, network security, and vulnerability assessment techniques.",
        category: "Cybersecurity",
        target_level: TargetLevel::University,
        duration: "18 weeks",
        price: "699.00",
        original_price: "899.00",
        rating: "4.9",
        students_count: 156,
        photo: "photo-1550751827-4bd374c3f58b",
    },
    // School level
    CourseSeed {
        title: "Programming Basics with Scratch & Python",
        description: "Learn programming fundamentals through visual coding and simple Python projects.",
        category: "Programming",
        target_level: TargetLevel::School,
        duration: "8 weeks",
        price: "199.00",
        original_price: "299.00",
        rating: "4.8",
        students_count: 389,
        photo: "photo-1522202176988-66273c2fd55f",
    },
    CourseSeed {
        title: "Web Design & Development for Teens",
        description: "Create your first website using HTML, CSS, and JavaScript with fun projects.",
        category: "Web Development",
        target_level: TargetLevel::School,
        duration: "10 weeks",
        price: "249.00",
        original_price: "349.00",
        rating: "4.7",
        students_count: 267,
        photo: "photo-1571019613454-1cb2f99b2d8b",
    },
    CourseSeed {
        title: "Digital Safety & Computer Literacy",
        description: "Essential computer skills, online safety, and digital citizenship for young learners.",
        category: "Digital Literacy",
        target_level: TargetLevel::School,
        duration: "6 weeks",
        price: "149.00",
        original_price: "199.00",
        rating: "4.9",
        students_count: 198,
        photo: "photo-1515879218367-8466d910aaa4",
    },
];

struct InstructorSeed {
    name: &'static str,
    title: &'static str,
    experience: &'static str,
    bio: &'static str,
    rating: &'static str,
    students_count: u32,
    courses_count: u32,
    photo: &'static str,
}

const INSTRUCTORS: &[InstructorSeed] = &[
    InstructorSeed {
        name: "Dr. Michael Chen",
        title: "Senior Software Architect",
        experience: "15+ years at Google, Microsoft",
        bio: "Specialized in distributed systems and cloud architecture. Published researcher in machine learning.",
        rating: "4.9",
        students_count: 1250,
        courses_count: 8,
        photo: "photo-1507003211169-0a1dd7228f2d",
    },
    InstructorSeed {
        name: "Sarah Johnson",
        title: "Cybersecurity Expert",
        experience: "12+ years at Amazon, Tesla",
        bio: "Ethical hacking specialist and penetration testing expert. Former security consultant for Fortune 500 companies.",
        rating: "4.8",
        students_count: 890,
        courses_count: 5,
        photo: "photo-1494790108755-2616b2e4bd45",
    },
    InstructorSeed {
        name: "David Rodriguez",
        title: "Data Science Lead",
        experience: "10+ years at Netflix, Uber",
        bio: "Machine learning engineer and data scientist. Expert in Python, TensorFlow, and big data technologies.",
        rating: "4.9",
        students_count: 760,
        courses_count: 6,
        photo: "photo-1472099645785-5658abf4ff4e",
    },
];

struct TestimonialSeed {
    name: &'static str,
    position: &'static str,
    content: &'static str,
    photo: &'static str,
}

const TESTIMONIALS: &[TestimonialSeed] = &[
    TestimonialSeed {
        name: "Alex Thompson",
        position: "Software Engineer at Meta",
        content: "TechEdu Academy completely transformed my career. Within 6 months of completing the Full-Stack program, I landed my dream job at Meta with a 150% salary increase.",
        photo: "photo-1539571696357-5a69c17a67c6",
    },
    TestimonialSeed {
        name: "Maria Garcia",
        position: "Data Scientist at Google",
        content: "The Machine Learning course was incredible. The hands-on projects and expert guidance helped me transition from marketing to data science at Google.",
        photo: "photo-1438761681033-6461ffad8d80",
    },
    TestimonialSeed {
        name: "James Wilson",
        position: "Security Analyst at Microsoft",
        content: "The Cybersecurity program gave me the practical skills I needed. I'm now protecting critical infrastructure at Microsoft and loving every minute of it.",
        photo: "photo-1507591064344-4c6ce005b128",
    },
];

fn image_url(photo: &str, params: &str) -> Option<String> {
    Some(format!("https://images.unsplash.com/{}{}", photo, params))
}

/// Inserts the sample courses, instructors and testimonials
pub(super) fn populate(store: &MemoryStore) -> StorageResult<()> {
    for seed in COURSES {
        store.courses.insert_with(|id| Course {
            id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            target_level: seed.target_level,
            duration: seed.duration.to_string(),
            price: seed.price.to_string(),
            original_price: Some(seed.original_price.to_string()),
            rating: seed.rating.to_string(),
            students_count: seed.students_count,
            image_url: image_url(seed.photo, COURSE_IMAGE_PARAMS),
            is_active: true,
        })?;
    }

    for seed in INSTRUCTORS {
        store.instructors.insert_with(|id| Instructor {
            id,
            name: seed.name.to_string(),
            title: seed.title.to_string(),
            experience: seed.experience.to_string(),
            bio: seed.bio.to_string(),
            image_url: image_url(seed.photo, PORTRAIT_IMAGE_PARAMS),
            rating: seed.rating.to_string(),
            students_count: seed.students_count,
            courses_count: seed.courses_count,
        })?;
    }

    for seed in TESTIMONIALS {
        store.testimonials.insert_with(|id| Testimonial {
            id,
            name: seed.name.to_string(),
            position: seed.position.to_string(),
            content: seed.content.to_string(),
            image_url: image_url(seed.photo, AVATAR_IMAGE_PARAMS),
            rating: 5,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::storage::{MemoryStore, Storage};

    #[test]
    fn test_seed_counts() {
        let store = MemoryStore::seeded().unwrap();
        assert_eq!(store.list_courses().unwrap().len(), 6);
        assert_eq!(store.list_instructors().unwrap().len(), 3);
        assert_eq!(store.list_testimonials().unwrap().len(), 3);
        assert_eq!(store.count_contacts().unwrap(), 0);
        assert_eq!(store.count_enrollments().unwrap(), 0);
    }

    #[test]
    fn test_seed_keeps_published_figures() {
        let store = MemoryStore::seeded().unwrap();
        let courses = store.list_courses().unwrap();

        assert_eq!(courses[0].title, "Advanced Data Structures & Algorithms");
        assert_eq!(courses[0].rating, "4.9");
        assert_eq!(courses[0].students_count, 245);
        assert_eq!(courses[0].original_price.as_deref(), Some("549.00"));
        assert!(courses
            .iter()
            .all(|c| c.image_url.as_deref().map_or(false, |u| u.starts_with("https://"))));
    }

    #[test]
    fn test_seed_image_urls() {
        let store = MemoryStore::seeded().unwrap();

        let course = store.list_courses().unwrap().remove(0);
        assert_eq!(
            course.image_url.as_deref(),
            Some("https://images.unsplash.com/photo-1531482615713-2afd69097998?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&h=400")
        );

        let avatar = store.list_testimonials().unwrap().remove(2);
        assert_eq!(
            avatar.image_url.as_deref(),
            Some("https://images.unsplash.com/photo-1507591064344-4c6ce005b128?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=100&h=100")
        );
    }

    #[test]
    fn test_seed_levels_split_evenly() {
        let store = MemoryStore::seeded().unwrap();
        assert_eq!(store.list_courses_by_level("school").unwrap().len(), 3);
        assert_eq!(store.list_courses_by_level("university").unwrap().len(), 3);
    }

    #[test]
    fn test_seed_ratings_in_range() {
        let store = MemoryStore::seeded().unwrap();
        assert!(store
            .list_testimonials()
            .unwrap()
            .iter()
            .all(|t| (1..=5).contains(&t.rating)));
    }
}
