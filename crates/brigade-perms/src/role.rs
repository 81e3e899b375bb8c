//! Staff identities and roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed enumeration of staff roles. The role alone determines the
/// capability set via [`crate::policy::may_perform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Waiter,
    Chef,
}

impl Role {
    /// Stable label used in audit entries.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Waiter => "waiter",
            Role::Chef => "chef",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff member: identifier, display name, and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl Staff {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    pub fn manager(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Manager)
    }

    pub fn waiter(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Waiter)
    }

    pub fn chef(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Chef)
    }
}
