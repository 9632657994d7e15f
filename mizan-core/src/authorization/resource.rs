use serde::{Deserialize, Serialize};

/// Entity types subject to access control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Users,
    Clients,
    Cases,
    Hearings,
    Invoices,
    Lawyers,
    Documents,
    PowersOfAttorney,
    Attendance,
    AdminWork,
    Contacts,
    Reports,
    Dashboard,
    SystemSettings,
}

impl Resource {
    /// Get all manageable resources in display order
    pub fn all() -> Vec<Resource> {
        vec![
            Resource::Users,
            Resource::Clients,
            Resource::Cases,
            Resource::Hearings,
            Resource::Invoices,
            Resource::Lawyers,
            Resource::Documents,
            Resource::PowersOfAttorney,
            Resource::Attendance,
            Resource::AdminWork,
            Resource::Contacts,
            Resource::Reports,
            Resource::Dashboard,
            Resource::SystemSettings,
        ]
    }

    /// Convert to string for policy entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Clients => "clients",
            Resource::Cases => "cases",
            Resource::Hearings => "hearings",
            Resource::Invoices => "invoices",
            Resource::Lawyers => "lawyers",
            Resource::Documents => "documents",
            Resource::PowersOfAttorney => "powers_of_attorney",
            Resource::Attendance => "attendance",
            Resource::AdminWork => "admin_work",
            Resource::Contacts => "contacts",
            Resource::Reports => "reports",
            Resource::Dashboard => "dashboard",
            Resource::SystemSettings => "system_settings",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Resource> {
        match s.to_lowercase().as_str() {
            "users" => Some(Resource::Users),
            "clients" => Some(Resource::Clients),
            "cases" => Some(Resource::Cases),
            "hearings" => Some(Resource::Hearings),
            "invoices" => Some(Resource::Invoices),
            "lawyers" => Some(Resource::Lawyers),
            "documents" => Some(Resource::Documents),
            "powers_of_attorney" => Some(Resource::PowersOfAttorney),
            "attendance" => Some(Resource::Attendance),
            "admin_work" => Some(Resource::AdminWork),
            "contacts" => Some(Resource::Contacts),
            "reports" => Some(Resource::Reports),
            "dashboard" => Some(Resource::Dashboard),
            "system_settings" => Some(Resource::SystemSettings),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_resources() {
        for resource in Resource::all() {
            assert_eq!(Resource::from_str(resource.as_str()), Some(resource));
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Resource::PowersOfAttorney).unwrap(),
            "\"powers_of_attorney\""
        );
        assert_eq!(
            serde_json::from_str::<Resource>("\"admin_work\"").unwrap(),
            Resource::AdminWork
        );
    }

    #[test]
    fn test_unknown_resource() {
        assert_eq!(Resource::from_str("archives"), None);
        assert_eq!(Resource::from_str("case"), None);
    }
}
