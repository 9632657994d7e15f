use serde::{Deserialize, Serialize};

/// Operation categories subject to access control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Export,
    Import,
    /// Superset action: granting manage on a resource grants every other
    /// action on it as well
    Manage,
}

impl Action {
    /// Get all available actions in display order
    pub fn all() -> Vec<Action> {
        vec![
            Action::View,
            Action::Create,
            Action::Edit,
            Action::Delete,
            Action::Export,
            Action::Import,
            Action::Manage,
        ]
    }

    /// Convert to string for policy entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Import => "import",
            Action::Manage => "manage",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Action> {
        match s.to_lowercase().as_str() {
            "view" => Some(Action::View),
            "create" => Some(Action::Create),
            "edit" => Some(Action::Edit),
            "delete" => Some(Action::Delete),
            "export" => Some(Action::Export),
            "import" => Some(Action::Import),
            "manage" => Some(Action::Manage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_actions() {
        for action in Action::all() {
            assert_eq!(Action::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(Action::from_str("VIEW"), Some(Action::View));
        assert_eq!(Action::from_str("Manage"), Some(Action::Manage));
    }

    #[test]
    fn test_unknown_action() {
        assert_eq!(Action::from_str("approve"), None);
        assert_eq!(Action::from_str(""), None);
    }
}
