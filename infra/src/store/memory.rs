//! HashMap-backed repository implementations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use fk_core::domain::entities::{Account, Feedback, ServiceRequest};
use fk_core::errors::{DomainError, DomainResult};
use fk_core::repositories::{
    AccountRepository, FeedbackRepository, RequestFilter, ServiceRequestRepository,
};
use fk_shared::types::Pagination;

/// In-memory account collection keyed by account id
pub struct MemoryAccountStore {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountStore {
    async fn find_by_identifier(&self, identifier: &str) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.identifier == identifier)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn insert(&self, account: Account) -> DomainResult<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| a.identifier == account.identifier)
        {
            return Err(DomainError::Conflict {
                resource: "account identifier".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> DomainResult<Account> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::NotFound {
                resource: "account".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}

/// In-memory service request collection
pub struct MemoryRequestStore {
    requests: Arc<RwLock<HashMap<Uuid, ServiceRequest>>>,
}

impl MemoryRequestStore {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryRequestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceRequestRepository for MemoryRequestStore {
    async fn insert(&self, request: ServiceRequest) -> DomainResult<ServiceRequest> {
        let mut requests = self.requests.write().await;
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ServiceRequest>> {
        let requests = self.requests.read().await;
        Ok(requests.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<ServiceRequest>> {
        let requests = self.requests.read().await;
        let mut result: Vec<ServiceRequest> = requests
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn find_all(
        &self,
        filter: RequestFilter,
        page: Pagination,
    ) -> DomainResult<Vec<ServiceRequest>> {
        let requests = self.requests.read().await;
        let mut result: Vec<ServiceRequest> = requests
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result.into_iter().skip(page.skip).take(page.limit).collect())
    }

    async fn update(&self, request: ServiceRequest) -> DomainResult<ServiceRequest> {
        let mut requests = self.requests.write().await;

        if !requests.contains_key(&request.id) {
            return Err(DomainError::NotFound {
                resource: "service request".to_string(),
            });
        }

        requests.insert(request.id, request.clone());
        Ok(request)
    }
}

/// In-memory feedback collection, unique per service request
pub struct MemoryFeedbackStore {
    feedback: Arc<RwLock<HashMap<Uuid, Feedback>>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self {
            feedback: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryFeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackStore {
    async fn insert(&self, feedback: Feedback) -> DomainResult<Feedback> {
        let mut entries = self.feedback.write().await;

        if entries
            .values()
            .any(|f| f.service_request_id == feedback.service_request_id)
        {
            return Err(DomainError::Conflict {
                resource: "feedback for this request".to_string(),
            });
        }

        entries.insert(feedback.id, feedback.clone());
        Ok(feedback)
    }

    async fn find_by_request(&self, request_id: Uuid) -> DomainResult<Option<Feedback>> {
        let entries = self.feedback.read().await;
        Ok(entries
            .values()
            .find(|f| f.service_request_id == request_id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Feedback>> {
        let entries = self.feedback.read().await;
        let mut result: Vec<Feedback> = entries
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn find_all(&self, page: Pagination) -> DomainResult<Vec<Feedback>> {
        let entries = self.feedback.read().await;
        let mut result: Vec<Feedback> = entries.values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result.into_iter().skip(page.skip).take(page.limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use fk_shared::types::{RequestStatus, ServiceType};

    fn request(user_id: Uuid, service_type: ServiceType, age_minutes: i64) -> ServiceRequest {
        let mut request = ServiceRequest::create(
            user_id,
            fk_core::domain::entities::NewServiceRequest {
                service_type,
                name: "Ali Raza".to_string(),
                address: "House 12, Street 4, Lahore".to_string(),
                contact_number: "03001234567".to_string(),
                preferred_time: Utc::now(),
                issue_description: "needs attention".to_string(),
                hours_required: None,
            },
        );
        request.created_at = Utc::now() - Duration::minutes(age_minutes);
        request
    }

    #[tokio::test]
    async fn test_account_insert_conflict() {
        let store = MemoryAccountStore::new();
        store
            .insert(Account::new_user("03001234567", "hash"))
            .await
            .unwrap();

        let err = store
            .insert(Account::new_user("03001234567", "other-hash"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_account_lookup_by_identifier() {
        let store = MemoryAccountStore::new();
        let stored = store
            .insert(Account::new_user("03001234567", "hash"))
            .await
            .unwrap();

        let found = store.find_by_identifier("03001234567").await.unwrap();
        assert_eq!(found.unwrap().id, stored.id);
        assert!(store
            .find_by_identifier("03009999999")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_account_update_missing_is_not_found() {
        let store = MemoryAccountStore::new();
        let err = store
            .update(Account::new_user("03001234567", "hash"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_requests_sorted_newest_first() {
        let store = MemoryRequestStore::new();
        let user = Uuid::new_v4();

        let old = store
            .insert(request(user, ServiceType::Plumber, 60))
            .await
            .unwrap();
        let new = store
            .insert(request(user, ServiceType::Electrician, 5))
            .await
            .unwrap();

        let listed = store.find_by_user(user).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, new.id);
        assert_eq!(listed[1].id, old.id);
    }

    #[tokio::test]
    async fn test_find_all_filter_skip_limit() {
        let store = MemoryRequestStore::new();
        let user = Uuid::new_v4();

        for age in [10, 20, 30] {
            store
                .insert(request(user, ServiceType::Plumber, age))
                .await
                .unwrap();
        }
        let mut cancelled = request(user, ServiceType::Driver, 1);
        cancelled.status = RequestStatus::Cancelled;
        store.insert(cancelled).await.unwrap();

        let filter = RequestFilter {
            status: Some(RequestStatus::Pending),
            service_type: None,
        };
        let all = store
            .find_all(filter, Pagination::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let paged = store.find_all(filter, Pagination::new(1, 1)).await.unwrap();
        assert_eq!(paged.len(), 1);
        assert_eq!(paged[0].id, all[1].id);
    }

    #[tokio::test]
    async fn test_feedback_unique_per_request() {
        let store = MemoryFeedbackStore::new();
        let user = Uuid::new_v4();
        let service_request = request(user, ServiceType::Plumber, 1);

        store
            .insert(Feedback::new(&service_request, user, 5, None))
            .await
            .unwrap();

        let err = store
            .insert(Feedback::new(&service_request, user, 4, None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }
}
