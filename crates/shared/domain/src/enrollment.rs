//! Enrollment (matrícula) types.

use serde::{Deserialize, Serialize};

/// One enrolled student, joined with the course name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EnrollmentEntry {
    pub user_id: i32,
    pub nome: String,
    pub email: String,
    /// Name of the course the student is enrolled in
    pub curso: String,
}

/// Students enrolled in a single course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseEnrollments {
    /// Requested course identifier
    pub curso_id: i32,
    pub alunos_matriculados: Vec<EnrollmentEntry>,
    /// Always equal to `alunos_matriculados.len()`
    pub total: usize,
}

impl CourseEnrollments {
    /// Build the enrollment list for a course, deriving the total.
    pub fn new(curso_id: i32, alunos_matriculados: Vec<EnrollmentEntry>) -> Self {
        let total = alunos_matriculados.len();
        Self {
            curso_id,
            alunos_matriculados,
            total,
        }
    }
}
