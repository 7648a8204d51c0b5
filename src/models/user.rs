use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Admin,
}

/// Usuario autenticado. Se persiste serializado en localStorage bajo "user".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Iniciales para el avatar (p.ej. "Доктор Иванов" -> "ДИ")
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials.to_uppercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        let user = User {
            id: "1".into(),
            name: "Доктор Иванов".into(),
            email: "ivanov@university.edu".into(),
            role: Role::Teacher,
            avatar: None,
        };
        assert_eq!(user.initials(), "ДИ");
    }

    #[test]
    fn initials_fall_back_for_empty_name() {
        let user = User {
            id: "1".into(),
            name: "".into(),
            email: "x@y.z".into(),
            role: Role::Admin,
            avatar: None,
        };
        assert_eq!(user.initials(), "U");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
