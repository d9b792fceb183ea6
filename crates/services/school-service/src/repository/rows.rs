//! Typed row decoders for the raw SQL queries.
//!
//! Each struct binds to result columns by name, so a renamed or retyped
//! column surfaces as a decode error instead of a silently shifted field.

use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;

use domain::{Course, EnrollmentEntry, User};

#[derive(Debug, Clone, FromQueryResult)]
pub struct UserRow {
    pub user_id: i32,
    pub nome: String,
    pub idade: i32,
    pub username: String,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct CourseRow {
    pub curso_id: i32,
    pub nome: String,
    pub descricao: String,
    pub ativo: bool,
}

/// Enrollment joined with user and course; `curso` is the aliased course name.
#[derive(Debug, Clone, FromQueryResult)]
pub struct EnrollmentRow {
    pub user_id: i32,
    pub nome: String,
    pub email: String,
    pub curso: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            user_id: row.user_id,
            nome: row.nome,
            idade: row.idade,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            curso_id: row.curso_id,
            nome: row.nome,
            descricao: row.descricao,
            ativo: row.ativo,
        }
    }
}

impl From<EnrollmentRow> for EnrollmentEntry {
    fn from(row: EnrollmentRow) -> Self {
        EnrollmentEntry {
            user_id: row.user_id,
            nome: row.nome,
            email: row.email,
            curso: row.curso,
        }
    }
}
