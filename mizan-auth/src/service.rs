use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use tracing::{debug, info};

use mizan_core::authorization::{Action, Permission, Resource, Role};
use mizan_core::users::User;

use crate::config::ConfigManager;
use crate::grants::RolePermissionTable;

/// The single decision point for authorization questions.
///
/// Holds the compiled permission table behind a read/write lock: checks take
/// a shared read, [`reload`](AccessControlService::reload) swaps the whole
/// table. The decision API is synchronous and never fails — an absent user,
/// a deactivated account, or a capability the policy does not grant all
/// evaluate to denied.
pub struct AccessControlService {
    table: RwLock<Arc<RolePermissionTable>>,
    policy_path: Option<PathBuf>,
}

impl AccessControlService {
    /// Create a service from a policy file. A missing file falls back to the
    /// built-in grants; a broken file is an error.
    pub async fn from_policy_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let policy = ConfigManager::load_policy(&path).await?;
        let table = RolePermissionTable::from_policy(&policy);

        info!(
            "Access control initialized with {} roles, {} compiled grants",
            table.role_count(),
            table.grant_count()
        );

        Ok(Self {
            table: RwLock::new(Arc::new(table)),
            policy_path: Some(path),
        })
    }

    /// Create a service backed by the built-in grants only
    pub fn with_builtin_grants() -> Self {
        Self {
            table: RwLock::new(Arc::new(RolePermissionTable::builtin().clone())),
            policy_path: None,
        }
    }

    /// Re-read the policy file and swap in the recompiled table. Entries are
    /// never mutated in place; in-flight checks keep the snapshot they took.
    pub async fn reload(&self) -> Result<()> {
        let table = match &self.policy_path {
            Some(path) => {
                let policy = ConfigManager::load_policy(path).await?;
                RolePermissionTable::from_policy(&policy)
            }
            None => RolePermissionTable::builtin().clone(),
        };

        info!(
            "Access policy reloaded: {} roles, {} compiled grants",
            table.role_count(),
            table.grant_count()
        );

        *self.table.write() = Arc::new(table);
        Ok(())
    }

    fn snapshot(&self) -> Arc<RolePermissionTable> {
        Arc::clone(&self.table.read())
    }

    /// True iff the user is present, active, and granted `permission`
    pub fn has_permission(&self, user: Option<&User>, permission: Permission) -> bool {
        let user = match user {
            Some(user) => user,
            None => return false,
        };

        if !user.active {
            debug!(
                "Permission denied: account {} is deactivated ({})",
                user.email, permission
            );
            return false;
        }

        let allowed = self.snapshot().contains(user.role, permission);
        if !allowed {
            debug!(
                "Permission denied: {} ({}) lacks {}",
                user.email,
                user.role.as_str(),
                permission
            );
        }
        allowed
    }

    /// Sugar for [`has_permission`](AccessControlService::has_permission)
    /// over a (resource, action) pair
    pub fn can_access(&self, user: Option<&User>, resource: Resource, action: Action) -> bool {
        self.has_permission(user, Permission::new(resource, action))
    }

    /// True iff the user's role is one of `roles`
    pub fn has_role(&self, user: Option<&User>, roles: &[Role]) -> bool {
        match user {
            Some(user) if user.active => roles.contains(&user.role),
            _ => false,
        }
    }

    /// True iff the user's role is at or above `role` in the privilege order
    pub fn has_role_at_least(&self, user: Option<&User>, role: Role) -> bool {
        match user {
            Some(user) if user.active => user.role.is_at_least(role),
            _ => false,
        }
    }

    /// AND-composition of permission checks. An empty list is vacuously true.
    pub fn has_all_permissions(&self, user: Option<&User>, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(user, *permission))
    }

    /// OR-composition of permission checks. An empty list has nothing to
    /// satisfy and is false.
    pub fn has_any_permission(&self, user: Option<&User>, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(user, *permission))
    }

    /// The user's effective permissions, sorted, for UI gating payloads
    pub fn permissions_for(&self, user: Option<&User>) -> Vec<Permission> {
        match user {
            Some(user) if user.active => self.snapshot().permissions(user.role),
            _ => Vec::new(),
        }
    }

    /// Per-resource view of the decision API
    pub fn resource(&self, resource: Resource) -> ResourceScope<'_> {
        ResourceScope {
            service: self,
            resource,
        }
    }
}

impl std::fmt::Debug for AccessControlService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessControlService")
            .field("policy_path", &self.policy_path)
            .finish_non_exhaustive()
    }
}

/// Derived per-resource predicates (`can_view`, `can_manage`, ...): one set
/// of methods over the action enum instead of hand-written accessors per
/// resource
pub struct ResourceScope<'a> {
    service: &'a AccessControlService,
    resource: Resource,
}

impl ResourceScope<'_> {
    fn check(&self, user: Option<&User>, action: Action) -> bool {
        self.service.can_access(user, self.resource, action)
    }

    pub fn can_view(&self, user: Option<&User>) -> bool {
        self.check(user, Action::View)
    }

    pub fn can_create(&self, user: Option<&User>) -> bool {
        self.check(user, Action::Create)
    }

    pub fn can_edit(&self, user: Option<&User>) -> bool {
        self.check(user, Action::Edit)
    }

    pub fn can_delete(&self, user: Option<&User>) -> bool {
        self.check(user, Action::Delete)
    }

    pub fn can_export(&self, user: Option<&User>) -> bool {
        self.check(user, Action::Export)
    }

    pub fn can_import(&self, user: Option<&User>) -> bool {
        self.check(user, Action::Import)
    }

    pub fn can_manage(&self, user: Option<&User>) -> bool {
        self.check(user, Action::Manage)
    }
}
