//! School repository - raw parameterized SQL over the `escola` schema.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};

use super::rows::{CourseRow, EnrollmentRow, UserRow};
use common::{AppError, AppResult};
use domain::{Course, EnrollmentEntry, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub(crate) const SQL_LIST_USERS: &str = r#"
    SELECT user_id, nome, idade, username, email, created_at
    FROM users
    ORDER BY user_id
"#;

pub(crate) const SQL_FIND_USER: &str = r#"
    SELECT user_id, nome, idade, username, email, created_at
    FROM users
    WHERE user_id = $1
"#;

pub(crate) const SQL_LIST_COURSES: &str =
    "SELECT curso_id, nome, descricao, ativo FROM cursos ORDER BY curso_id";

pub(crate) const SQL_LIST_ENROLLMENTS: &str = r#"
    SELECT u.user_id, u.nome, u.email, c.nome AS curso
    FROM matriculas m
    JOIN users u ON m.user_id = u.user_id
    JOIN cursos c ON m.curso_id = c.curso_id
    WHERE m.curso_id = $1
    ORDER BY u.nome
"#;

const SQL_PING: &str = "SELECT 1";

/// Read-only access to users, courses and enrollments.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// All users, ordered by `user_id`
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// User by primary key
    async fn find_user(&self, user_id: i32) -> AppResult<Option<User>>;

    /// All courses, ordered by `curso_id`
    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    /// Students enrolled in a course, ordered by name
    async fn list_enrollments(&self, curso_id: i32) -> AppResult<Vec<EnrollmentEntry>>;

    /// Round-trip a trivial query to check connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// Postgres implementation of SchoolRepository
pub struct PgSchoolStore {
    db: DatabaseConnection,
}

impl PgSchoolStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement(&self, sql: &str, values: Vec<sea_orm::Value>) -> Statement {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }
}

#[async_trait]
impl SchoolRepository for PgSchoolStore {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        tracing::debug!("Listing users");
        let rows = UserRow::find_by_statement(self.statement(SQL_LIST_USERS, vec![]))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_user(&self, user_id: i32) -> AppResult<Option<User>> {
        tracing::debug!(user_id, "Fetching user");
        let row = UserRow::find_by_statement(self.statement(SQL_FIND_USER, vec![user_id.into()]))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(User::from))
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        tracing::debug!("Listing courses");
        let rows = CourseRow::find_by_statement(self.statement(SQL_LIST_COURSES, vec![]))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn list_enrollments(&self, curso_id: i32) -> AppResult<Vec<EnrollmentEntry>> {
        tracing::debug!(curso_id, "Listing enrollments");
        let rows = EnrollmentRow::find_by_statement(
            self.statement(SQL_LIST_ENROLLMENTS, vec![curso_id.into()]),
        )
        .all(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(EnrollmentEntry::from).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(self.statement(SQL_PING, vec![]))
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
