//! Domain-level constants.
//!
//! User-facing messages returned in response bodies.

// =============================================================================
// Welcome document
// =============================================================================

/// Greeting returned by the root endpoint
pub const MSG_WELCOME: &str = "Bem-vindo à API da Escola!";

pub const DESC_USERS: &str = "Lista todos os utilizadores";
pub const DESC_USER_BY_ID: &str = "Dados de um utilizador específico";
pub const DESC_COURSES: &str = "Lista todos os cursos";
pub const DESC_ENROLLMENTS: &str = "Alunos matriculados num curso";

// =============================================================================
// Errors
// =============================================================================

/// Returned when no database connection could be obtained
pub const MSG_DB_CONNECTION_ERROR: &str = "Erro de ligação à BD";

/// Returned by the user lookup when no row matches
pub const MSG_USER_NOT_FOUND: &str = "Utilizador não encontrado";

/// Returned for unknown routes and malformed path parameters
pub const MSG_ROUTE_NOT_FOUND: &str = "Recurso não encontrado";
