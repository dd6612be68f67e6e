//! Client-side user search.
//!
//! Filtering runs over the complete user list in a single pass with no
//! indexing, then the filtered list is paginated by slicing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{User, UserRole};
use crate::domain::api::{PageWindow, PaginatedResponse, PaginationParams, SortOrder};

/// Criteria for [`search_users`]. Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    /// Case-insensitive substring over name, email and department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Exact department match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// One page of matching users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchResult {
    pub users: Vec<User>,
    /// Number of users matching the filters, before pagination.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Applies the filter criteria of `params`, ignoring pagination.
pub fn filter_users(users: Vec<User>, params: &UserSearchParams) -> Vec<User> {
    let needle = params
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let department = params.department.as_deref().filter(|d| !d.is_empty());

    users
        .into_iter()
        .filter(|user| match &needle {
            Some(needle) => {
                user.name.to_lowercase().contains(needle)
                    || user.email.to_lowercase().contains(needle)
                    || user.department.to_lowercase().contains(needle)
            }
            None => true,
        })
        .filter(|user| params.role.map_or(true, |role| user.role == role))
        .filter(|user| department.map_or(true, |d| user.department == d))
        .filter(|user| params.is_active.map_or(true, |active| user.is_active == active))
        .collect()
}

/// Filters then paginates. Page defaults to 1 and limit to 10.
pub fn search_users(users: Vec<User>, params: &UserSearchParams) -> UserSearchResult {
    let filtered = filter_users(users, params);
    let window = PageWindow::new(params.page, params.limit);
    let total = filtered.len();

    UserSearchResult {
        users: window.slice(filtered),
        total,
        page: window.page(),
        total_pages: window.total_pages(total),
    }
}

/// Sorts by the camelCase field named in `sort_by`. Unknown fields keep the
/// list order.
pub fn sort_users(users: &mut [User], sort_by: &str, order: SortOrder) {
    let compare: fn(&User, &User) -> Ordering = match sort_by {
        "id" => |a, b| a.id.cmp(&b.id),
        "name" => |a, b| a.name.cmp(&b.name),
        "email" => |a, b| a.email.cmp(&b.email),
        "role" => |a, b| a.role.as_str().cmp(b.role.as_str()),
        "department" => |a, b| a.department.cmp(&b.department),
        "joinDate" => |a, b| a.join_date.cmp(&b.join_date),
        "createdAt" => |a, b| a.created_at.cmp(&b.created_at),
        _ => return,
    };
    match order {
        SortOrder::Asc => users.sort_by(compare),
        SortOrder::Desc => users.sort_by(|a, b| compare(b, a)),
    }
}

/// Sorts (when asked) then cuts one page with its metadata.
pub fn paginate_users(mut users: Vec<User>, params: &PaginationParams) -> PaginatedResponse<User> {
    if let Some(sort_by) = params.sort_by.as_deref() {
        sort_users(&mut users, sort_by, params.order.unwrap_or_default());
    }
    PaginatedResponse::paginate(users, params.window())
}
