//! User entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A school user, serialized with the column names of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Primary key
    pub user_id: i32,
    /// Full name
    pub nome: String,
    /// Age in years
    pub idade: i32,
    pub username: String,
    pub email: String,
    /// Creation timestamp (ISO-8601), null when the row has none
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(created_at: Option<NaiveDateTime>) -> User {
        User {
            user_id: 7,
            nome: "Ana Silva".to_string(),
            idade: 21,
            username: "ana".to_string(),
            email: "ana@escola.pt".to_string(),
            created_at,
        }
    }

    #[test]
    fn test_serializes_timestamp_as_iso8601() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap();
        let json = serde_json::to_value(sample(Some(ts))).unwrap();

        assert_eq!(json["user_id"], 7);
        assert_eq!(json["created_at"], "2024-03-05T14:30:00");
    }

    #[test]
    fn test_missing_timestamp_is_null() {
        let json = serde_json::to_value(sample(None)).unwrap();

        assert!(json["created_at"].is_null());
        assert_eq!(
            json.as_object().unwrap().len(),
            6,
            "user exposes exactly six fields"
        );
    }

    #[cfg(feature = "openapi")]
    #[test]
    fn test_openapi_schema_lists_columns() {
        use utoipa::openapi::{RefOr, Schema};

        let (name, schema) = <User as utoipa::ToSchema>::schema();
        assert_eq!(name, "User");
        match schema {
            RefOr::T(Schema::Object(object)) => {
                assert_eq!(object.properties.len(), 6);
                assert!(object.properties.contains_key("created_at"));
            }
            other => panic!("expected an object schema, got {:?}", other),
        }
    }
}
