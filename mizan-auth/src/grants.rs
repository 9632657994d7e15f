use std::collections::{BTreeMap, HashSet};

use mizan_core::authorization::{Action, Permission, Resource, Role};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One entry in a role's grant list: a single permission, every action on
/// one resource, or everything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantSpec {
    /// Every action on every resource (`*`)
    All,
    /// Every action on one resource (`cases:*`)
    Resource(Resource),
    /// A single permission (`cases:edit`)
    One(Permission),
}

impl GrantSpec {
    /// Convert to the policy-file string form
    pub fn as_policy_string(&self) -> String {
        match self {
            GrantSpec::All => "*".to_string(),
            GrantSpec::Resource(resource) => format!("{}:*", resource.as_str()),
            GrantSpec::One(permission) => permission.to_string(),
        }
    }

    /// Parse from the policy-file string form
    pub fn parse(s: &str) -> Option<GrantSpec> {
        if s == "*" {
            return Some(GrantSpec::All);
        }

        let (resource, action) = s.split_once(':')?;
        let resource = Resource::from_str(resource)?;

        if action == "*" {
            return Some(GrantSpec::Resource(resource));
        }

        Action::from_str(action).map(|action| GrantSpec::One(Permission::new(resource, action)))
    }

    /// Expand into concrete permissions. A `manage` grant carries every
    /// other action on its resource with it.
    fn permissions(&self) -> Vec<Permission> {
        match self {
            GrantSpec::All => Resource::all()
                .into_iter()
                .flat_map(|resource| {
                    Action::all()
                        .into_iter()
                        .map(move |action| Permission::new(resource, action))
                })
                .collect(),
            GrantSpec::Resource(resource) => Action::all()
                .into_iter()
                .map(|action| Permission::new(*resource, action))
                .collect(),
            GrantSpec::One(permission) if permission.action == Action::Manage => Action::all()
                .into_iter()
                .map(|action| Permission::new(permission.resource, action))
                .collect(),
            GrantSpec::One(permission) => vec![*permission],
        }
    }
}

/// Grants and description for one role, the policy-file unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleGrants {
    #[serde(with = "grant_serde")]
    pub permissions: Vec<GrantSpec>,
    pub description: String,
}

/// The on-disk policy document: a grant list per role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub roles: BTreeMap<Role, RoleGrants>,
}

impl AccessPolicy {
    /// Built-in policy used when no policy file exists
    pub fn builtin() -> AccessPolicy {
        let manage = |resource| GrantSpec::One(Permission::new(resource, Action::Manage));
        let grant = |resource, action| GrantSpec::One(Permission::new(resource, action));

        AccessPolicy {
            roles: BTreeMap::from([
                (
                    Role::SuperAdmin,
                    RoleGrants {
                        permissions: vec![GrantSpec::All],
                        description: "Unrestricted access".to_string(),
                    },
                ),
                (
                    Role::Admin,
                    RoleGrants {
                        permissions: vec![
                            manage(Resource::Clients),
                            manage(Resource::Cases),
                            manage(Resource::Hearings),
                            manage(Resource::Invoices),
                            manage(Resource::Lawyers),
                            manage(Resource::Documents),
                            manage(Resource::PowersOfAttorney),
                            manage(Resource::Attendance),
                            manage(Resource::AdminWork),
                            manage(Resource::Contacts),
                            grant(Resource::Users, Action::View),
                            grant(Resource::Users, Action::Create),
                            grant(Resource::Users, Action::Edit),
                            grant(Resource::Reports, Action::View),
                            grant(Resource::Reports, Action::Export),
                            grant(Resource::Dashboard, Action::View),
                            grant(Resource::SystemSettings, Action::View),
                            grant(Resource::SystemSettings, Action::Edit),
                        ],
                        description: "Office administration".to_string(),
                    },
                ),
                (
                    Role::Lawyer,
                    RoleGrants {
                        permissions: vec![
                            grant(Resource::Clients, Action::View),
                            grant(Resource::Clients, Action::Create),
                            grant(Resource::Clients, Action::Edit),
                            grant(Resource::Cases, Action::View),
                            grant(Resource::Cases, Action::Create),
                            grant(Resource::Cases, Action::Edit),
                            grant(Resource::Hearings, Action::View),
                            grant(Resource::Hearings, Action::Create),
                            grant(Resource::Hearings, Action::Edit),
                            grant(Resource::Documents, Action::View),
                            grant(Resource::Documents, Action::Create),
                            grant(Resource::Documents, Action::Edit),
                            grant(Resource::PowersOfAttorney, Action::View),
                            grant(Resource::PowersOfAttorney, Action::Create),
                            grant(Resource::PowersOfAttorney, Action::Edit),
                            grant(Resource::Contacts, Action::View),
                            grant(Resource::Contacts, Action::Create),
                            grant(Resource::Contacts, Action::Edit),
                            grant(Resource::AdminWork, Action::View),
                            grant(Resource::AdminWork, Action::Create),
                            grant(Resource::AdminWork, Action::Edit),
                            grant(Resource::Reports, Action::View),
                            grant(Resource::Reports, Action::Export),
                            grant(Resource::Invoices, Action::View),
                            grant(Resource::Lawyers, Action::View),
                            grant(Resource::Attendance, Action::View),
                            grant(Resource::Dashboard, Action::View),
                        ],
                        description: "Case work, no deletions".to_string(),
                    },
                ),
                (
                    Role::Staff,
                    RoleGrants {
                        permissions: vec![
                            grant(Resource::Clients, Action::View),
                            grant(Resource::Cases, Action::View),
                            grant(Resource::Hearings, Action::View),
                            grant(Resource::Lawyers, Action::View),
                            grant(Resource::Documents, Action::View),
                            grant(Resource::Contacts, Action::View),
                            grant(Resource::Dashboard, Action::View),
                            grant(Resource::Attendance, Action::View),
                            grant(Resource::Attendance, Action::Create),
                        ],
                        description: "Front-office, read-mostly".to_string(),
                    },
                ),
            ]),
        }
    }
}

/// Custom serde module for grant-list serialization
pub mod grant_serde {
    use super::GrantSpec;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use tracing::warn;

    pub fn serialize<S>(grants: &Vec<GrantSpec>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let strings: Vec<String> = grants.iter().map(|g| g.as_policy_string()).collect();
        strings.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<GrantSpec>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let strings: Vec<String> = Vec::deserialize(deserializer)?;
        Ok(strings
            .into_iter()
            .filter_map(|s| {
                let parsed = GrantSpec::parse(&s);
                if parsed.is_none() {
                    // Unknown grants are dropped, never widened: the table
                    // must fail closed.
                    warn!("Ignoring unknown grant '{}' in access policy", s);
                }
                parsed
            })
            .collect())
    }
}

/// Compiled role → permission lookup. Immutable once built; configuration
/// reloads swap the whole table instead of mutating entries.
#[derive(Debug, Clone, Default)]
pub struct RolePermissionTable {
    by_role: BTreeMap<Role, HashSet<Permission>>,
}

impl RolePermissionTable {
    /// Compile a policy document, expanding wildcards and the manage closure
    pub fn from_policy(policy: &AccessPolicy) -> Self {
        let mut by_role = BTreeMap::new();

        for (role, grants) in &policy.roles {
            let mut permissions = HashSet::new();
            for grant in &grants.permissions {
                permissions.extend(grant.permissions());
            }
            by_role.insert(*role, permissions);
        }

        Self { by_role }
    }

    /// The table compiled from the built-in policy
    pub fn builtin() -> &'static RolePermissionTable {
        static BUILTIN: Lazy<RolePermissionTable> =
            Lazy::new(|| RolePermissionTable::from_policy(&AccessPolicy::builtin()));
        &BUILTIN
    }

    /// Membership probe. A role the policy does not mention holds nothing.
    pub fn contains(&self, role: Role, permission: Permission) -> bool {
        self.by_role
            .get(&role)
            .map(|permissions| permissions.contains(&permission))
            .unwrap_or(false)
    }

    /// A role's permissions, sorted for stable listings
    pub fn permissions(&self, role: Role) -> Vec<Permission> {
        let mut permissions: Vec<Permission> = self
            .by_role
            .get(&role)
            .map(|permissions| permissions.iter().copied().collect())
            .unwrap_or_default();
        permissions.sort();
        permissions
    }

    /// Number of roles the table knows about
    pub fn role_count(&self) -> usize {
        self.by_role.len()
    }

    /// Total number of compiled permissions across all roles
    pub fn grant_count(&self) -> usize {
        self.by_role.values().map(|permissions| permissions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_spec_parse_forms() {
        assert_eq!(GrantSpec::parse("*"), Some(GrantSpec::All));
        assert_eq!(
            GrantSpec::parse("cases:*"),
            Some(GrantSpec::Resource(Resource::Cases))
        );
        assert_eq!(
            GrantSpec::parse("cases:edit"),
            Some(GrantSpec::One(Permission::new(Resource::Cases, Action::Edit)))
        );
        assert_eq!(GrantSpec::parse("cases"), None);
        assert_eq!(GrantSpec::parse("archives:view"), None);
        assert_eq!(GrantSpec::parse("cases:frobnicate"), None);
    }

    #[test]
    fn test_grant_spec_string_round_trip() {
        for s in ["*", "cases:*", "clients:edit"] {
            assert_eq!(GrantSpec::parse(s).unwrap().as_policy_string(), s);
        }
    }

    #[test]
    fn test_manage_closure_is_compiled_in() {
        let policy = AccessPolicy {
            roles: BTreeMap::from([(
                Role::Admin,
                RoleGrants {
                    permissions: vec![GrantSpec::One(Permission::new(
                        Resource::Cases,
                        Action::Manage,
                    ))],
                    description: "test".to_string(),
                },
            )]),
        };

        let table = RolePermissionTable::from_policy(&policy);
        for action in Action::all() {
            assert!(table.contains(Role::Admin, Permission::new(Resource::Cases, action)));
        }
        assert!(!table.contains(Role::Admin, Permission::new(Resource::Clients, Action::View)));
    }

    #[test]
    fn test_unmentioned_role_holds_nothing() {
        let table = RolePermissionTable::from_policy(&AccessPolicy {
            roles: BTreeMap::new(),
        });
        assert!(!table.contains(Role::SuperAdmin, Permission::new(Resource::Cases, Action::View)));
        assert!(table.permissions(Role::SuperAdmin).is_empty());
    }

    #[test]
    fn test_builtin_wildcard_covers_everything() {
        let table = RolePermissionTable::builtin();
        for resource in Resource::all() {
            for action in Action::all() {
                assert!(table.contains(Role::SuperAdmin, Permission::new(resource, action)));
            }
        }
    }
}
