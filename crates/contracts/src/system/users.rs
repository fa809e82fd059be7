use serde::{Deserialize, Serialize};

/// Signed-in user as embedded in the page bootstrap payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = User {
            user_id: 1,
            username: "admin".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: None,
        };
        assert_eq!(user.display_name(), "admin");

        user.first_name = "Ada".to_string();
        assert_eq!(user.display_name(), "Ada");

        user.last_name = "Lovelace".to_string();
        assert_eq!(user.display_name(), "Ada Lovelace");
    }
}
