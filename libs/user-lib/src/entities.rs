use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Role {
    pub id: Uuid,
    pub role_name: String,
}

impl Role {
    /// Builds a role with a freshly generated id.
    pub fn new(role_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), role_name)
    }

    pub fn with_id(id: Uuid, role_name: impl Into<String>) -> Self {
        Self {
            id,
            role_name: role_name.into(),
        }
    }
}

/// A user and the roles attached to it.
///
/// The user owns the association: roles are held as snapshots of persisted
/// roles and a role never points back at its users. The set is keyed on the
/// role id, so adding a role twice or removing a role the user does not hold
/// leaves it untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub roles: BTreeSet<Role>,
}

impl User {
    /// Builds a user with a freshly generated id and no roles.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, email)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            roles: BTreeSet::new(),
        }
    }

    pub fn has_role(&self, role_id: Uuid) -> bool {
        self.roles.iter().any(|r| r.id == role_id)
    }

    /// Returns `false` when the user already held the role.
    pub fn add_role(&mut self, role: Role) -> bool {
        if self.has_role(role.id) {
            return false;
        }
        self.roles.insert(role)
    }

    /// Returns `false` when the user did not hold the role.
    pub fn remove_role(&mut self, role_id: Uuid) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r.id != role_id);
        self.roles.len() != before
    }
}
