//! Service request and feedback repository traits.

use async_trait::async_trait;
use fk_shared::types::{Pagination, RequestStatus, ServiceType};
use uuid::Uuid;

use crate::domain::entities::{Feedback, ServiceRequest};
use crate::errors::DomainResult;

/// Filter for administrator service-request listings
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub service_type: Option<ServiceType>,
}

impl RequestFilter {
    pub fn matches(&self, request: &ServiceRequest) -> bool {
        self.status.map_or(true, |s| request.status == s)
            && self
                .service_type
                .map_or(true, |t| request.service_type == t)
    }
}

/// Repository contract for service requests
#[async_trait]
pub trait ServiceRequestRepository: Send + Sync {
    async fn insert(&self, request: ServiceRequest) -> DomainResult<ServiceRequest>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ServiceRequest>>;

    /// All requests filed by one account, newest first
    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<ServiceRequest>>;

    /// Filtered listing across all accounts, newest first, paged
    async fn find_all(
        &self,
        filter: RequestFilter,
        page: Pagination,
    ) -> DomainResult<Vec<ServiceRequest>>;

    /// Replace a stored request; `NotFound` when absent
    async fn update(&self, request: ServiceRequest) -> DomainResult<ServiceRequest>;
}

/// Repository contract for feedback records
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Insert feedback
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - The request already has feedback
    async fn insert(&self, feedback: Feedback) -> DomainResult<Feedback>;

    async fn find_by_request(&self, request_id: Uuid) -> DomainResult<Option<Feedback>>;

    /// All feedback left by one account, newest first
    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Feedback>>;

    /// All feedback, newest first, paged
    async fn find_all(&self, page: Pagination) -> DomainResult<Vec<Feedback>>;
}
