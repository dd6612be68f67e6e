//! User entity and request payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, UserId};

/// Role of a managed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Manager,
}

impl UserRole {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Manager => "manager",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles a caller may request when creating a user. Admins are never created
/// through the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatableRole {
    User,
    Manager,
}

impl From<CreatableRole> for UserRole {
    fn from(role: CreatableRole) -> Self {
        match role {
            CreatableRole::User => UserRole::User,
            CreatableRole::Manager => UserRole::Manager,
        }
    }
}

/// A user as stored by the resource backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: UserRole,
    pub department: String,
    pub join_date: NaiveDate,
    pub is_active: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Builds a freshly created user from a create request.
    pub fn from_request(id: UserId, request: CreateUserRequest, now: Timestamp) -> Self {
        Self {
            id,
            name: request.name,
            email: request.email,
            avatar: None,
            role: request.role.map(UserRole::from).unwrap_or_default(),
            department: request.department,
            join_date: now.as_datetime().date_naive(),
            is_active: true,
            skills: request.skills.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields present in `changes`, leaving the id untouched.
    pub fn apply(&mut self, changes: UpdateUserRequest, now: Timestamp) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        if let Some(department) = changes.department {
            self.department = department;
        }
        if let Some(skills) = changes.skills {
            self.skills = skills;
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
    }
}

/// Payload for `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<CreatableRole>,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Payload for `PUT`/`PATCH /users/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    /// A patch that only flips the activity flag.
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Default::default()
        }
    }
}

/// Read access to the validated fields of a user payload.
pub trait UserFields {
    fn name(&self) -> Option<&str>;
    fn email(&self) -> Option<&str>;
    fn department(&self) -> Option<&str>;
}

impl UserFields for CreateUserRequest {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn department(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl UserFields for UpdateUserRequest {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
}
