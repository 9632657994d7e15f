use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authorization::Role;

/// UI language for bilingual fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
}

/// Authenticated user context, produced by the authentication layer.
///
/// The permission evaluator never reads ambient session state: callers
/// resolve the session themselves and pass the user (or `None` for an
/// anonymous request) explicitly on every check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Arabic display name
    pub name_ar: String,
    /// Latin display name
    pub name_en: String,
    pub email: String,
    pub role: Role,
    /// Deactivated accounts keep their record but lose all access
    pub active: bool,
}

impl User {
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar => &self.name_ar,
            Locale::En => &self.name_en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_per_locale() {
        let user = User {
            id: Uuid::new_v4(),
            name_ar: "ليلى حداد".to_string(),
            name_en: "Layla Haddad".to_string(),
            email: "layla@mizan-legal.com".to_string(),
            role: Role::Lawyer,
            active: true,
        };

        assert_eq!(user.display_name(Locale::Ar), "ليلى حداد");
        assert_eq!(user.display_name(Locale::En), "Layla Haddad");
    }
}
