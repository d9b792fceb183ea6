//! School service - read-only queries over users, courses and enrollments.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppResult, OptionExt};
use domain::{Course, CourseEnrollments, User, MSG_USER_NOT_FOUND};

use crate::repository::SchoolRepository;

/// School service trait for dependency injection.
#[async_trait]
pub trait SchoolService: Send + Sync {
    /// List all users ordered by identifier
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get a user by identifier, `NotFound` when absent
    async fn get_user(&self, user_id: i32) -> AppResult<User>;

    /// List all courses ordered by identifier
    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    /// Students enrolled in a course, with their count
    async fn course_enrollments(&self, curso_id: i32) -> AppResult<CourseEnrollments>;

    /// Check that the backing store is reachable
    async fn health(&self) -> AppResult<()>;
}

/// Concrete implementation of SchoolService using repository.
pub struct SchoolManager {
    repo: Arc<dyn SchoolRepository>,
}

impl SchoolManager {
    /// Create new school service instance with repository
    pub fn new(repo: Arc<dyn SchoolRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SchoolService for SchoolManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list_users().await
    }

    async fn get_user(&self, user_id: i32) -> AppResult<User> {
        self.repo
            .find_user(user_id)
            .await?
            .ok_or_not_found(MSG_USER_NOT_FOUND)
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.repo.list_courses().await
    }

    async fn course_enrollments(&self, curso_id: i32) -> AppResult<CourseEnrollments> {
        let entries = self.repo.list_enrollments(curso_id).await?;
        Ok(CourseEnrollments::new(curso_id, entries))
    }

    async fn health(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use common::AppError;
    use domain::EnrollmentEntry;

    use super::*;
    use crate::repository::MockSchoolRepository;

    fn create_test_user(user_id: i32) -> User {
        User {
            user_id,
            nome: "Test User".to_string(),
            idade: 30,
            username: "test".to_string(),
            email: "test@escola.pt".to_string(),
            created_at: None,
        }
    }

    fn create_test_entry(user_id: i32, nome: &str) -> EnrollmentEntry {
        EnrollmentEntry {
            user_id,
            nome: nome.to_string(),
            email: "aluno@escola.pt".to_string(),
            curso: "Física".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_find_user()
            .with(eq(5))
            .returning(|id| Ok(Some(create_test_user(id))));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.get_user(5).await;

        assert_eq!(result.unwrap().user_id, 5);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_find_user().returning(|_| Ok(None));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.get_user(999).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::NotFound(ref msg) if msg == MSG_USER_NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_get_user_propagates_connection_error() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_find_user()
            .returning(|_| Err(AppError::ConnectionUnavailable("refused".to_string())));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.get_user(1).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::ConnectionUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![create_test_user(1), create_test_user(2)]));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.list_users().await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_course_enrollments_counts_entries() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_list_enrollments()
            .with(eq(4))
            .returning(|_| Ok(vec![create_test_entry(1, "Ana"), create_test_entry(2, "Rui")]));

        let service = SchoolManager::new(Arc::new(repo));
        let enrollments = service.course_enrollments(4).await.unwrap();

        assert_eq!(enrollments.curso_id, 4);
        assert_eq!(enrollments.total, 2);
        assert_eq!(enrollments.alunos_matriculados[0].nome, "Ana");
    }

    #[tokio::test]
    async fn test_course_enrollments_empty_course() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_list_enrollments().returning(|_| Ok(vec![]));

        let service = SchoolManager::new(Arc::new(repo));
        let enrollments = service.course_enrollments(77).await.unwrap();

        assert_eq!(enrollments.curso_id, 77);
        assert_eq!(enrollments.total, 0);
    }

    #[tokio::test]
    async fn test_health_delegates_to_ping() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_ping()
            .returning(|| Err(AppError::Query("timeout".to_string())));

        let service = SchoolManager::new(Arc::new(repo));
        assert!(service.health().await.is_err());
    }
}
