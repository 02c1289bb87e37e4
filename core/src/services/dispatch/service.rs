//! Main dispatch service implementation.
//!
//! The dispatch layer is the downstream consumer of the auth core: every
//! operation takes an already-decoded `TokenData` and enforces ownership or
//! the admin role on top of it. Status changes fan out to the customer as
//! SMS notifications through the notifier capability.

use std::sync::Arc;

use fk_shared::types::{Pagination, UserRole};
use fk_shared::utils::phone::mask_phone;
use uuid::Uuid;

use crate::domain::entities::{
    Feedback, NewServiceRequest, ServiceRequest, ServiceRequestUpdate, TokenData,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    AccountRepository, FeedbackRepository, RequestFilter, ServiceRequestRepository,
};
use crate::services::notification::{
    status_update_message, technician_en_route_message, Notifier,
};

/// Valid star-rating range for feedback
const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Maximum bookable hours for hourly services
const MAX_BOOKED_HOURS: u32 = 24;

pub struct DispatchService<A, S, F, N>
where
    A: AccountRepository,
    S: ServiceRequestRepository,
    F: FeedbackRepository,
    N: Notifier,
{
    accounts: Arc<A>,
    requests: Arc<S>,
    feedback: Arc<F>,
    notifier: Arc<N>,
}

impl<A, S, F, N> DispatchService<A, S, F, N>
where
    A: AccountRepository,
    S: ServiceRequestRepository,
    F: FeedbackRepository,
    N: Notifier,
{
    pub fn new(accounts: Arc<A>, requests: Arc<S>, feedback: Arc<F>, notifier: Arc<N>) -> Self {
        Self {
            accounts,
            requests,
            feedback,
            notifier,
        }
    }

    /// File a new service request for the authenticated customer.
    ///
    /// Hourly services (driver/helper) must carry a booked-hours count in
    /// `1..=24`; helper bookings are priced up front.
    pub async fn create_request(
        &self,
        actor: &TokenData,
        new: NewServiceRequest,
    ) -> DomainResult<ServiceRequest> {
        let user_id = actor.subject_uuid()?;

        match new.hours_required {
            None if new.service_type.is_hourly() => {
                return Err(DomainError::Invalid {
                    message: format!("{} bookings require hours_required", new.service_type),
                });
            }
            Some(hours) if hours == 0 || hours > MAX_BOOKED_HOURS => {
                return Err(DomainError::Invalid {
                    message: format!("hours_required must be between 1 and {MAX_BOOKED_HOURS}"),
                });
            }
            _ => {}
        }

        let request = ServiceRequest::create(user_id, new);
        tracing::info!(
            request_id = %request.id,
            service_type = %request.service_type,
            event = "request_created",
            "service request filed"
        );
        self.requests.insert(request).await
    }

    /// All requests filed by the authenticated customer, newest first.
    pub async fn list_requests(&self, actor: &TokenData) -> DomainResult<Vec<ServiceRequest>> {
        self.requests.find_by_user(actor.subject_uuid()?).await
    }

    /// A single request, scoped to its owner.
    ///
    /// Administrators may read any request; for everyone else a foreign
    /// request is indistinguishable from a missing one.
    pub async fn get_request(&self, actor: &TokenData, id: Uuid) -> DomainResult<ServiceRequest> {
        let request = self.find_request(id).await?;
        if !actor.has_role(UserRole::Admin) && request.user_id != actor.subject_uuid()? {
            return Err(not_found());
        }
        Ok(request)
    }

    /// Admin listing across all customers with filter and pagination.
    pub async fn list_all_requests(
        &self,
        actor: &TokenData,
        filter: RequestFilter,
        page: Pagination,
    ) -> DomainResult<Vec<ServiceRequest>> {
        actor.require_role(UserRole::Admin)?;
        self.requests.find_all(filter, page.validate()).await
    }

    /// Admin triage update: status transition, technician assignment,
    /// response text, announced arrival time.
    ///
    /// The customer is notified over SMS about the response and about an
    /// announced arrival. Notification failures are logged and never fail
    /// the update itself.
    pub async fn update_request(
        &self,
        actor: &TokenData,
        id: Uuid,
        update: ServiceRequestUpdate,
    ) -> DomainResult<ServiceRequest> {
        actor.require_role(UserRole::Admin)?;

        let mut request = self.find_request(id).await?;
        request.apply(&update);
        let request = self.requests.update(request).await?;

        tracing::info!(
            request_id = %request.id,
            status = %request.status,
            event = "request_updated",
            "service request updated"
        );

        if update.admin_response.is_some() || update.estimated_arrival_time.is_some() {
            let recipient = self.customer_phone(&request).await;

            if let Some(response) = &update.admin_response {
                self.notify(&recipient, &status_update_message(request.service_type, response))
                    .await;
            }
            if let Some(eta) = &update.estimated_arrival_time {
                let technician = update
                    .technician_name
                    .as_deref()
                    .or(request.technician_name.as_deref());
                self.notify(&recipient, &technician_en_route_message(technician, eta))
                    .await;
            }
        }

        Ok(request)
    }

    /// Submit feedback for a completed request: one per request, rating 1-5.
    pub async fn submit_feedback(
        &self,
        actor: &TokenData,
        request_id: Uuid,
        rating: u8,
        comment: Option<String>,
    ) -> DomainResult<Feedback> {
        let user_id = actor.subject_uuid()?;

        if !RATING_RANGE.contains(&rating) {
            return Err(DomainError::Invalid {
                message: "rating must be between 1 and 5".to_string(),
            });
        }

        let request = self.find_request(request_id).await?;
        if request.user_id != user_id {
            return Err(not_found());
        }
        if !request.is_completed() {
            return Err(DomainError::Invalid {
                message: "feedback is only accepted for completed requests".to_string(),
            });
        }
        if self.feedback.find_by_request(request_id).await?.is_some() {
            return Err(DomainError::Conflict {
                resource: "feedback for this request".to_string(),
            });
        }

        self.feedback
            .insert(Feedback::new(&request, user_id, rating, comment))
            .await
    }

    /// All feedback left by the authenticated customer, newest first.
    pub async fn list_feedback(&self, actor: &TokenData) -> DomainResult<Vec<Feedback>> {
        self.feedback.find_by_user(actor.subject_uuid()?).await
    }

    /// Admin listing of all feedback, newest first, paged.
    pub async fn list_all_feedback(
        &self,
        actor: &TokenData,
        page: Pagination,
    ) -> DomainResult<Vec<Feedback>> {
        actor.require_role(UserRole::Admin)?;
        self.feedback.find_all(page.validate()).await
    }

    async fn find_request(&self, id: Uuid) -> DomainResult<ServiceRequest> {
        self.requests.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// Notifications go to the filer's registered phone number; the contact
    /// number on the request is the fallback when the account is gone.
    async fn customer_phone(&self, request: &ServiceRequest) -> String {
        match self.accounts.find_by_id(request.user_id).await {
            Ok(Some(account)) => account.identifier,
            _ => request.contact_number.clone(),
        }
    }

    async fn notify(&self, phone: &str, message: &str) {
        if let Err(err) = self.notifier.send(phone, message).await {
            tracing::warn!(
                phone = %mask_phone(phone),
                error = %err,
                event = "notification_failed",
                "status SMS failed"
            );
        }
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound {
        resource: "service request".to_string(),
    }
}
