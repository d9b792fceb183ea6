//! Domain layer - School entities as exposed by the API.
//!
//! This crate contains the response shapes for users, courses and
//! enrollments, plus the user-facing messages shared by every service.
//! It has no infrastructure dependencies.

pub mod constants;
pub mod course;
pub mod enrollment;
pub mod user;

pub use constants::*;
pub use course::Course;
pub use enrollment::{CourseEnrollments, EnrollmentEntry};
pub use user::User;
