//! Course entity.

use serde::{Deserialize, Serialize};

/// A course offered by the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Course {
    pub curso_id: i32,
    pub nome: String,
    pub descricao: String,
    /// Whether the course is currently running
    pub ativo: bool,
}
