//! Seed data and mutable state for the three mock handler sets.
//!
//! Each set owns its own collection; nothing is shared between them, so a
//! user created through `/api/msw/users` never shows up under `/users`.

use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::latency::Latency;
use crate::domain::api::ApiUser;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::{User, UserRole};

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150";

/// All mock collections.
#[derive(Debug, Clone, PartialEq)]
pub struct MockDatabase {
    /// Backing data for `/api/users`
    pub basic_users: Vec<ApiUser>,
    /// Backing data for `/api/msw/users`
    pub msw_users: Vec<ApiUser>,
    /// Backing data for the JSON-Server style `/users`
    pub resource_users: Vec<User>,
}

impl MockDatabase {
    /// A database holding the initial seed data of every set.
    pub fn seeded() -> Self {
        Self {
            basic_users: seed_basic_users(),
            msw_users: seed_msw_users(),
            resource_users: seed_resource_users(),
        }
    }

    /// A database with no users at all.
    pub fn empty() -> Self {
        Self {
            basic_users: Vec::new(),
            msw_users: Vec::new(),
            resource_users: Vec::new(),
        }
    }

    /// Restores every collection to its seed data.
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    /// Restores only the MSW collection.
    pub fn reset_msw(&mut self) {
        self.msw_users = seed_msw_users();
    }

    /// Next id for the MSW set: one past the largest id, or 1 when empty.
    pub fn next_msw_id(&self) -> u64 {
        self.msw_users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    /// Next id for the resource set: one past the largest numeric id.
    ///
    /// Ids that are not numeric are skipped.
    pub fn next_resource_id(&self) -> UserId {
        let max = self
            .resource_users
            .iter()
            .filter_map(|u| u.id.as_seq())
            .max()
            .unwrap_or(0);
        UserId::from_seq(max + 1)
    }
}

impl Default for MockDatabase {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Shared state handed to every mock handler.
#[derive(Debug, Clone)]
pub struct MockState {
    db: Arc<RwLock<MockDatabase>>,
    latency: Latency,
}

impl MockState {
    pub fn new(db: MockDatabase, latency: Latency) -> Self {
        Self {
            db: Arc::new(RwLock::new(db)),
            latency,
        }
    }

    /// Seeded state with the given latency policy.
    pub fn seeded(latency: Latency) -> Self {
        Self::new(MockDatabase::seeded(), latency)
    }

    pub fn db(&self) -> &Arc<RwLock<MockDatabase>> {
        &self.db
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Restores every collection to its seed data.
    pub async fn reset(&self) {
        self.db.write().await.reset();
        tracing::info!("Mock data reset to initial state");
    }
}

fn seed_time(unix_secs: i64) -> Timestamp {
    Timestamp::from_datetime(
        Utc.timestamp_opt(unix_secs, 0)
            .single()
            .unwrap_or_default(),
    )
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn basic_user(id: u64, name: &str, email: &str) -> ApiUser {
    ApiUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        avatar: Some(PLACEHOLDER_AVATAR.to_string()),
        role: UserRole::User,
        created_at: None,
        updated_at: None,
    }
}

fn seed_basic_users() -> Vec<ApiUser> {
    vec![
        basic_user(1, "John Doe", "john@example.com"),
        basic_user(2, "Jane Smith", "jane@example.com"),
        basic_user(3, "Bob Johnson", "bob@example.com"),
    ]
}

fn msw_user(id: u64, name: &str, email: &str, role: UserRole, created_at: i64) -> ApiUser {
    ApiUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        avatar: None,
        role,
        created_at: Some(seed_time(created_at)),
        updated_at: None,
    }
}

fn seed_msw_users() -> Vec<ApiUser> {
    vec![
        // 2024-01-01T10:00:00Z
        msw_user(1, "MSW User 1", "msw1@example.com", UserRole::User, 1_704_103_200),
        // 2024-01-02T11:00:00Z
        msw_user(2, "MSW User 2", "msw2@example.com", UserRole::Manager, 1_704_193_200),
        // 2024-01-03T12:00:00Z
        msw_user(3, "MSW Admin", "admin@msw.com", UserRole::Admin, 1_704_283_200),
    ]
}

struct ResourceSeed {
    name: &'static str,
    email: &'static str,
    role: UserRole,
    department: &'static str,
    joined: (i32, u32, u32),
    is_active: bool,
    skills: &'static [&'static str],
}

const RESOURCE_SEEDS: [ResourceSeed; 6] = [
    ResourceSeed {
        name: "Alice Chen",
        email: "alice.chen@example.com",
        role: UserRole::Admin,
        department: "Engineering",
        joined: (2021, 3, 15),
        is_active: true,
        skills: &["Rust", "TypeScript", "PostgreSQL"],
    },
    ResourceSeed {
        name: "Brian Walker",
        email: "brian.walker@example.com",
        role: UserRole::Manager,
        department: "Product",
        joined: (2020, 7, 1),
        is_active: true,
        skills: &["Roadmapping", "Analytics"],
    },
    ResourceSeed {
        name: "Chloe Martin",
        email: "chloe.martin@example.com",
        role: UserRole::User,
        department: "Design",
        joined: (2022, 1, 10),
        is_active: true,
        skills: &["Figma", "Prototyping"],
    },
    ResourceSeed {
        name: "David Kim",
        email: "david.kim@example.com",
        role: UserRole::User,
        department: "Engineering",
        joined: (2022, 6, 20),
        is_active: false,
        skills: &["Vue", "TypeScript"],
    },
    ResourceSeed {
        name: "Emma Lopez",
        email: "emma.lopez@example.com",
        role: UserRole::Manager,
        department: "Operations",
        joined: (2019, 11, 5),
        is_active: true,
        skills: &["Logistics"],
    },
    ResourceSeed {
        name: "Farah Ahmed",
        email: "farah.ahmed@example.com",
        role: UserRole::User,
        department: "Human Resources",
        joined: (2023, 2, 14),
        is_active: true,
        skills: &["Recruiting", "Onboarding"],
    },
];

fn seed_resource_users() -> Vec<User> {
    // 2024-01-01T00:00:00Z
    let created_at = seed_time(1_704_067_200);

    RESOURCE_SEEDS
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let (year, month, day) = seed.joined;
            User {
                id: UserId::from_seq(index as u64 + 1),
                name: seed.name.to_string(),
                email: seed.email.to_string(),
                avatar: None,
                role: seed.role,
                department: seed.department.to_string(),
                join_date: seed_date(year, month, day),
                is_active: seed.is_active,
                skills: seed.skills.iter().map(|s| s.to_string()).collect(),
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}
