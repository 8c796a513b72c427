//! Permission checks.
//!
//! Plain set-membership lookups over the roles and permissions granted to
//! the signed-in account. Screens ask the policy; they never re-derive
//! membership themselves.

use std::collections::BTreeSet;

use cmms_model::{CrudAction, Permission, RecordKind, Role, UserAccount};

#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    roles: BTreeSet<String>,
    permissions: BTreeSet<Permission>,
}

impl AccessPolicy {
    /// Resolve a user's effective policy from the role catalog. Unknown
    /// role codes on the account are ignored.
    pub fn for_user(user: &UserAccount, roles: &[Role]) -> Self {
        let mut policy = Self::default();
        for code in &user.roles {
            let Some(role) = roles.iter().find(|role| &role.code == code) else {
                continue;
            };
            policy.roles.insert(role.code.clone());
            policy.permissions.extend(role.permissions.iter().copied());
        }
        policy
    }

    /// Policy that allows everything; used when no account is configured.
    pub fn unrestricted() -> Self {
        let mut permissions = BTreeSet::new();
        for kind in RecordKind::all() {
            permissions.extend(Permission::full(*kind));
        }
        Self {
            roles: BTreeSet::new(),
            permissions,
        }
    }

    pub fn has_role(&self, code: &str) -> bool {
        self.roles.contains(code)
    }

    pub fn has_any_role(&self, codes: &[&str]) -> bool {
        codes.iter().any(|code| self.has_role(code))
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn allows(&self, kind: RecordKind, action: CrudAction) -> bool {
        self.has_permission(Permission::new(kind, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn role(code: &str, permissions: &[Permission]) -> Role {
        Role {
            id: Uuid::from_u128(1),
            code: code.to_string(),
            name: code.to_string(),
            description: String::new(),
            permissions: permissions.iter().copied().collect(),
        }
    }

    fn user(roles: &[&str]) -> UserAccount {
        UserAccount {
            id: Uuid::from_u128(2),
            username: "m.keller".to_string(),
            display_name: "M. Keller".to_string(),
            org_id: None,
            roles: roles.iter().map(|code| (*code).to_string()).collect(),
            active: true,
        }
    }

    #[test]
    fn policy_unions_role_permissions() {
        let roles = vec![
            role(
                "viewer",
                &[Permission::new(RecordKind::Equipment, CrudAction::View)],
            ),
            role(
                "maintainer",
                &[
                    Permission::new(RecordKind::WorkOrders, CrudAction::Edit),
                    Permission::new(RecordKind::WorkOrders, CrudAction::Create),
                ],
            ),
        ];
        let policy = AccessPolicy::for_user(&user(&["viewer", "maintainer"]), &roles);

        assert!(policy.has_role("viewer"));
        assert!(policy.allows(RecordKind::Equipment, CrudAction::View));
        assert!(policy.allows(RecordKind::WorkOrders, CrudAction::Edit));
        assert!(!policy.allows(RecordKind::Equipment, CrudAction::Delete));
    }

    #[test]
    fn unknown_role_codes_are_ignored() {
        let policy = AccessPolicy::for_user(&user(&["ghost"]), &[]);
        assert!(!policy.has_role("ghost"));
        assert!(!policy.allows(RecordKind::Equipment, CrudAction::View));
    }

    #[test]
    fn unrestricted_allows_everything() {
        let policy = AccessPolicy::unrestricted();
        for kind in RecordKind::all() {
            for action in CrudAction::all() {
                assert!(policy.allows(*kind, *action));
            }
        }
    }
}
