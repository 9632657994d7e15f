use serde::{Deserialize, Serialize};

/// Privilege tiers, declared in ascending order so the derived ordering
/// expresses "is at least"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Staff,
    Lawyer,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Get all roles in ascending privilege order
    pub fn all() -> Vec<Role> {
        vec![Role::Staff, Role::Lawyer, Role::Admin, Role::SuperAdmin]
    }

    /// Convert to string for policy entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Lawyer => "lawyer",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "staff" => Some(Role::Staff),
            "lawyer" => Some(Role::Lawyer),
            "admin" => Some(Role::Admin),
            "super_admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    /// True if this role's privilege tier is at or above `other`
    pub fn is_at_least(&self, other: Role) -> bool {
        *self >= other
    }

    /// The roles whose privilege tier this role subsumes, itself included
    pub fn implied_roles(&self) -> Vec<Role> {
        Role::all()
            .into_iter()
            .filter(|role| self.is_at_least(*role))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_order() {
        assert!(Role::SuperAdmin > Role::Admin);
        assert!(Role::Admin > Role::Lawyer);
        assert!(Role::Lawyer > Role::Staff);
    }

    #[test]
    fn test_is_at_least() {
        assert!(Role::SuperAdmin.is_at_least(Role::Admin));
        assert!(Role::Admin.is_at_least(Role::Admin));
        assert!(!Role::Staff.is_at_least(Role::Lawyer));
    }

    #[test]
    fn test_implied_roles() {
        assert_eq!(
            Role::Admin.implied_roles(),
            vec![Role::Staff, Role::Lawyer, Role::Admin]
        );
        assert_eq!(Role::Staff.implied_roles(), vec![Role::Staff]);
    }

    #[test]
    fn test_round_trip_all_roles() {
        for role in Role::all() {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("owner"), None);
    }
}
