use serde::{Deserialize, Serialize};

/// Project and workspace roles. Discriminants follow the server's numeric roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest = 5,
    #[default]
    Member = 15,
    Admin = 20,
}

impl UserRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "guest" | "5" => Some(UserRole::Guest),
            "member" | "15" => Some(UserRole::Member),
            "admin" | "20" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    Workspace,
    Project,
}

/// Roles allowed to create labels inline, checked at project level.
pub const LABEL_CREATE_ROLES: &[UserRole] = &[UserRole::Admin];

pub trait PermissionOracle: Send + Sync {
    fn allow_permissions(&self, roles: &[UserRole], level: PermissionLevel) -> bool;
}

/// Answers permission queries from the actor's known roles.
#[derive(Debug, Clone, Default)]
pub struct RolePermissions {
    pub workspace_role: Option<UserRole>,
    pub project_role: Option<UserRole>,
}

impl RolePermissions {
    pub fn new(workspace_role: Option<UserRole>, project_role: Option<UserRole>) -> Self {
        Self { workspace_role, project_role }
    }

    pub fn project(role: UserRole) -> Self {
        Self {
            workspace_role: None,
            project_role: Some(role),
        }
    }
}

impl PermissionOracle for RolePermissions {
    fn allow_permissions(&self, roles: &[UserRole], level: PermissionLevel) -> bool {
        let held = match level {
            PermissionLevel::Workspace => self.workspace_role,
            PermissionLevel::Project => self.project_role,
        };
        held.map(|role| roles.contains(&role)).unwrap_or(false)
    }
}

pub fn can_create_label(oracle: &dyn PermissionOracle) -> bool {
    oracle.allow_permissions(LABEL_CREATE_ROLES, PermissionLevel::Project)
}
