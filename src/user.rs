//! User records as exchanged with the backend.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Role assigned to a user account.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user account.
    #[default]
    User,
    /// Administrator account.
    Admin,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A user record. Owned by the backend; the client's copy is a transient
/// snapshot that is replaced wholesale on every refetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Which column the dashboard search inspects.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SearchColumn {
    #[default]
    Name,
    Email,
}

impl SearchColumn {
    /// Cycle to the other searchable column.
    pub fn toggle(self) -> Self {
        match self {
            SearchColumn::Name => SearchColumn::Email,
            SearchColumn::Email => SearchColumn::Name,
        }
    }
}

impl User {
    /// The field value the given search column refers to.
    pub fn field(&self, column: SearchColumn) -> &str {
        match column {
            SearchColumn::Name => &self.name,
            SearchColumn::Email => &self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_wire_shape() {
        let json = r#"{"_id":"abc123","name":"Alice","email":"a@x.com","role":"admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "abc123");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn user_serializes_id_as_underscore_id() {
        let user = User {
            id: "u1".to_string(),
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            role: Role::User,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["_id"], "u1");
        assert_eq!(value["role"], "user");
    }

    #[test]
    fn search_column_selects_field() {
        let user = User {
            id: "u1".to_string(),
            name: "Carol".to_string(),
            email: "c@x.com".to_string(),
            role: Role::User,
        };
        assert_eq!(user.field(SearchColumn::Name), "Carol");
        assert_eq!(user.field(SearchColumn::Email), "c@x.com");
    }

    #[test]
    fn search_column_toggles() {
        assert_eq!(SearchColumn::Name.toggle(), SearchColumn::Email);
        assert_eq!(SearchColumn::Email.toggle(), SearchColumn::Name);
    }
}
