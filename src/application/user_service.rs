//! UserService - user queries, validation and stats over a resource client.
//!
//! Filtering, pagination, validation and statistics are the pure functions
//! in [`crate::domain::user`]; this service only fetches the full user list
//! and feeds it through them.

use crate::domain::api::{PaginatedResponse, PaginationParams};
use crate::domain::user::{
    filter_users, paginate_users, search_users, user_stats, validate_email, validate_emails, validate_user,
    CreateUserRequest, EmailValidationResult, UpdateUserRequest, User, UserFields, UserRole,
    UserSearchParams, UserSearchResult, UserStats, UserValidationResult,
};
use crate::ports::{ClientError, ResourceApi};

/// Errors returned by [`UserService`].
#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    /// The payload failed validation; nothing was sent.
    #[error("User validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// User operations over any [`ResourceApi<User>`].
#[derive(Debug, Clone)]
pub struct UserService<R> {
    resource: R,
}

impl<R> UserService<R>
where
    R: ResourceApi<User>,
{
    pub fn new(resource: R) -> Self {
        Self { resource }
    }

    /// The underlying resource client, for plain CRUD calls.
    pub fn resource(&self) -> &R {
        &self.resource
    }

    async fn all_users(&self) -> Result<Vec<User>, ClientError> {
        self.resource.list(&[]).await
    }

    // ════════════════════════════════════════════════════════════════════
    // Queries
    // ════════════════════════════════════════════════════════════════════

    /// Fetches every user, then filters and paginates locally.
    pub async fn search_users(
        &self,
        params: &UserSearchParams,
    ) -> Result<UserSearchResult, UserServiceError> {
        let users = self.all_users().await?;
        let result = search_users(users, params);
        tracing::debug!(
            total = result.total,
            page = result.page,
            total_pages = result.total_pages,
            "User search completed"
        );
        Ok(result)
    }

    /// One sorted page of all users with its pagination metadata.
    pub async fn users_page(
        &self,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<User>, UserServiceError> {
        Ok(paginate_users(self.all_users().await?, params))
    }

    pub async fn users_by_department(&self, department: &str) -> Result<Vec<User>, UserServiceError> {
        let params = UserSearchParams {
            department: Some(department.to_string()),
            ..Default::default()
        };
        Ok(filter_users(self.all_users().await?, &params))
    }

    pub async fn users_by_role(&self, role: UserRole) -> Result<Vec<User>, UserServiceError> {
        let params = UserSearchParams {
            role: Some(role),
            ..Default::default()
        };
        Ok(filter_users(self.all_users().await?, &params))
    }

    pub async fn active_users(&self) -> Result<Vec<User>, UserServiceError> {
        let params = UserSearchParams {
            is_active: Some(true),
            ..Default::default()
        };
        Ok(filter_users(self.all_users().await?, &params))
    }

    pub async fn user_stats(&self) -> Result<UserStats, UserServiceError> {
        let users = self.all_users().await?;
        Ok(user_stats(&users))
    }

    // ════════════════════════════════════════════════════════════════════
    // Validation
    // ════════════════════════════════════════════════════════════════════

    pub fn validate_user(&self, fields: &impl UserFields) -> UserValidationResult {
        validate_user(fields)
    }

    pub fn validate_email(&self, email: &str) -> EmailValidationResult {
        validate_email(email)
    }

    pub fn validate_emails<S: AsRef<str>>(&self, emails: &[S]) -> Vec<EmailValidationResult> {
        validate_emails(emails)
    }

    // ════════════════════════════════════════════════════════════════════
    // Commands
    // ════════════════════════════════════════════════════════════════════

    /// Validates, then creates. Invalid payloads are never sent.
    pub async fn create_user_with_validation(
        &self,
        request: &CreateUserRequest,
    ) -> Result<User, UserServiceError> {
        ensure_valid(request)?;
        Ok(self.resource.create(request).await?)
    }

    /// Validates, then replaces with `PUT`. Invalid payloads are never sent.
    pub async fn update_user_with_validation(
        &self,
        id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, UserServiceError> {
        ensure_valid(request)?;
        Ok(self.resource.update(id, request).await?)
    }

    pub async fn deactivate_user(&self, id: &str) -> Result<User, UserServiceError> {
        Ok(self.resource.patch(id, &UpdateUserRequest::active(false)).await?)
    }

    pub async fn activate_user(&self, id: &str) -> Result<User, UserServiceError> {
        Ok(self.resource.patch(id, &UpdateUserRequest::active(true)).await?)
    }
}

fn ensure_valid(fields: &impl UserFields) -> Result<(), UserServiceError> {
    let validation = validate_user(fields);
    if validation.is_valid {
        Ok(())
    } else {
        tracing::debug!(errors = ?validation.errors, "Rejected invalid user payload");
        Err(UserServiceError::Validation(validation.errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api::SortOrder;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::user::CreatableRole;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde::Serialize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockUserResource {
        users: Mutex<Vec<User>>,
        writes: AtomicUsize,
        fail_with: Option<u16>,
    }

    impl MockUserResource {
        fn with_users(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(users),
                writes: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                ..Self::with_users(Vec::new())
            }
        }

        fn check(&self) -> Result<(), ClientError> {
            match self.fail_with {
                Some(status) => Err(ClientError::Status {
                    status,
                    url: "http://localhost:3001/users".to_string(),
                    body: String::new(),
                }),
                None => Ok(()),
            }
        }

        fn not_found(id: &str) -> ClientError {
            ClientError::Status {
                status: 404,
                url: format!("http://localhost:3001/users/{}", id),
                body: String::new(),
            }
        }

        fn apply<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<User, ClientError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let changes: UpdateUserRequest =
                serde_json::from_value(serde_json::to_value(body).unwrap()).unwrap();
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id.as_str() == id)
                .ok_or_else(|| Self::not_found(id))?;
            user.apply(changes, Timestamp::now());
            Ok(user.clone())
        }
    }

    #[async_trait]
    impl ResourceApi<User> for MockUserResource {
        async fn list(&self, _params: &[(String, String)]) -> Result<Vec<User>, ClientError> {
            self.check()?;
            Ok(self.users.lock().unwrap().clone())
        }

        async fn get(&self, id: &str) -> Result<User, ClientError> {
            self.check()?;
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id.as_str() == id)
                .cloned()
                .ok_or_else(|| Self::not_found(id))
        }

        async fn create<B>(&self, body: &B) -> Result<User, ClientError>
        where
            B: Serialize + Send + Sync + ?Sized,
        {
            self.check()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            let request: CreateUserRequest =
                serde_json::from_value(serde_json::to_value(body).unwrap()).unwrap();
            let mut users = self.users.lock().unwrap();
            let user = User::from_request(
                UserId::from_seq(users.len() as u64 + 1),
                request,
                Timestamp::now(),
            );
            users.push(user.clone());
            Ok(user)
        }

        async fn update<B>(&self, id: &str, body: &B) -> Result<User, ClientError>
        where
            B: Serialize + Send + Sync + ?Sized,
        {
            self.check()?;
            self.apply(id, body)
        }

        async fn patch<B>(&self, id: &str, body: &B) -> Result<User, ClientError>
        where
            B: Serialize + Send + Sync + ?Sized,
        {
            self.check()?;
            self.apply(id, body)
        }

        async fn delete(&self, id: &str) -> Result<(), ClientError> {
            self.check()?;
            self.users.lock().unwrap().retain(|u| u.id.as_str() != id);
            Ok(())
        }

        async fn batch_delete(&self, ids: &[String]) -> Result<(), ClientError> {
            self.check()?;
            self.users
                .lock()
                .unwrap()
                .retain(|u| !ids.iter().any(|id| id == u.id.as_str()));
            Ok(())
        }

        async fn exists(&self, id: &str) -> bool {
            self.get(id).await.is_ok()
        }
    }

    fn user(id: u64, name: &str, role: UserRole, department: &str, is_active: bool) -> User {
        User {
            id: UserId::from_seq(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            avatar: None,
            role,
            department: department.to_string(),
            join_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            is_active,
            skills: Vec::new(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn service() -> UserService<MockUserResource> {
        UserService::new(MockUserResource::with_users(vec![
            user(1, "Alice Chen", UserRole::Admin, "Engineering", true),
            user(2, "Brian Walker", UserRole::Manager, "Product", true),
            user(3, "Chloe Martin", UserRole::User, "Design", false),
            user(4, "David Kim", UserRole::User, "Engineering", true),
        ]))
    }

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            role: Some(CreatableRole::Manager),
            department: "Engineering".to_string(),
            skills: None,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn search_filters_then_paginates() {
        let params = UserSearchParams {
            department: Some("Engineering".to_string()),
            page: Some(2),
            limit: Some(1),
            ..Default::default()
        };

        let result = service().search_users(&params).await.unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.page, 2);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.users.len(), 1);
        assert_eq!(result.users[0].name, "David Kim");
    }

    #[tokio::test]
    async fn users_page_sorts_and_reports_meta() {
        let params = PaginationParams {
            page: Some(1),
            limit: Some(3),
            sort_by: Some("name".to_string()),
            order: Some(SortOrder::Desc),
        };

        let page = service().users_page(&params).await.unwrap();

        let names: Vec<_> = page.data.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["David Kim", "Chloe Martin", "Brian Walker"]);
        assert_eq!(page.pagination.total, 4);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn search_text_is_case_insensitive() {
        let params = UserSearchParams {
            search: Some("CHLOE".to_string()),
            ..Default::default()
        };
        let result = service().search_users(&params).await.unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.page, 1);
    }

    #[tokio::test]
    async fn department_role_and_active_lookups() {
        let service = service();

        let engineering = service.users_by_department("Engineering").await.unwrap();
        assert_eq!(engineering.len(), 2);
        assert!(engineering.iter().all(|u| u.department == "Engineering"));

        let managers = service.users_by_role(UserRole::Manager).await.unwrap();
        assert_eq!(managers.len(), 1);

        let active = service.active_users().await.unwrap();
        assert_eq!(active.len(), 3);
    }

    #[tokio::test]
    async fn stats_count_every_dimension() {
        let stats = service().user_stats().await.unwrap();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.by_role[&UserRole::User], 2);
        assert_eq!(stats.by_department["Engineering"], 2);
    }

    #[tokio::test]
    async fn client_errors_are_propagated() {
        let service = UserService::new(MockUserResource::failing(500));
        let err = service.active_users().await.unwrap_err();
        assert!(matches!(
            err,
            UserServiceError::Client(ClientError::Status { status: 500, .. })
        ));
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_with_validation_sends_valid_payload() {
        let service = service();
        let created = service
            .create_user_with_validation(&valid_request())
            .await
            .unwrap();

        assert_eq!(created.name, "Grace Hopper");
        assert_eq!(created.role, UserRole::Manager);
        assert!(created.is_active);
        assert_eq!(service.resource().writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_with_validation_rejects_without_sending() {
        let service = service();
        let request = CreateUserRequest {
            name: "G".to_string(),
            email: "not-an-email".to_string(),
            ..valid_request()
        };

        let err = service
            .create_user_with_validation(&request)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "User validation failed: Name must be at least 2 characters, Email format is invalid"
        );
        assert_eq!(service.resource().writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_with_validation_checks_only_present_fields() {
        let service = service();
        let changes = UpdateUserRequest {
            department: Some("Design".to_string()),
            ..Default::default()
        };

        let updated = service
            .update_user_with_validation("1", &changes)
            .await
            .unwrap();
        assert_eq!(updated.department, "Design");
        assert_eq!(updated.name, "Alice Chen");

        let bad = UpdateUserRequest {
            department: Some("Marketing".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update_user_with_validation("1", &bad).await,
            Err(UserServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn activation_round_trip() {
        let service = service();

        let user = service.deactivate_user("2").await.unwrap();
        assert!(!user.is_active);

        let user = service.activate_user("2").await.unwrap();
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn activation_of_unknown_user_is_not_found() {
        let err = service().deactivate_user("99").await.unwrap_err();
        match err {
            UserServiceError::Client(e) => assert!(e.is_not_found()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_helpers_delegate_to_domain_rules() {
        let service = service();
        assert!(service.validate_email("a@b.co").is_valid);
        assert!(!service.validate_email("").is_valid);
        assert_eq!(service.validate_emails(&["a@b.co", "nope"]).len(), 2);
        assert!(service.validate_user(&valid_request()).is_valid);
    }
}
