//! Service request and feedback entities.

use chrono::{DateTime, Utc};
use fk_shared::types::{RequestStatus, ServiceType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed hourly rate for helper bookings, in PKR
pub const HELPER_HOURLY_RATE_PKR: f64 = 600.0;

/// A customer's request for a home service visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: Uuid,

    /// Account that filed the request
    pub user_id: Uuid,

    pub service_type: ServiceType,

    /// Contact name given on the request
    pub name: String,

    pub address: String,

    pub contact_number: String,

    /// When the customer would like the visit
    pub preferred_time: DateTime<Utc>,

    pub issue_description: String,

    /// Hours booked for hourly services (driver/helper)
    pub hours_required: Option<u32>,

    pub hourly_rate: Option<f64>,

    pub total_cost: Option<f64>,

    pub status: RequestStatus,

    /// Free-text response from the triaging administrator
    pub admin_response: Option<String>,

    pub technician_name: Option<String>,

    pub technician_phone: Option<String>,

    /// Announced arrival time, as shown to the customer
    pub estimated_arrival_time: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    pub completed_at: Option<DateTime<Utc>>,
}

/// Fields a customer supplies when filing a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewServiceRequest {
    pub service_type: ServiceType,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub preferred_time: DateTime<Utc>,
    pub issue_description: String,
    pub hours_required: Option<u32>,
}

/// Fields an administrator may change during triage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceRequestUpdate {
    pub status: Option<RequestStatus>,
    pub admin_response: Option<String>,
    pub technician_name: Option<String>,
    pub technician_phone: Option<String>,
    pub estimated_arrival_time: Option<String>,
}

impl ServiceRequest {
    /// Creates a pending request from customer input.
    ///
    /// Helper bookings carry the fixed hourly rate and a precomputed total;
    /// other services are priced after triage.
    pub fn create(user_id: Uuid, new: NewServiceRequest) -> Self {
        let (hourly_rate, total_cost) = match (new.service_type, new.hours_required) {
            (ServiceType::Helper, Some(hours)) => (
                Some(HELPER_HOURLY_RATE_PKR),
                Some(hours as f64 * HELPER_HOURLY_RATE_PKR),
            ),
            _ => (None, None),
        };

        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            service_type: new.service_type,
            name: new.name,
            address: new.address,
            contact_number: new.contact_number,
            preferred_time: new.preferred_time,
            issue_description: new.issue_description,
            hours_required: new.hours_required,
            hourly_rate,
            total_cost,
            status: RequestStatus::Pending,
            admin_response: None,
            technician_name: None,
            technician_phone: None,
            estimated_arrival_time: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Applies an admin update, stamping `updated_at` and `completed_at`
    /// when the request transitions to completed.
    pub fn apply(&mut self, update: &ServiceRequestUpdate) {
        self.updated_at = Utc::now();

        if let Some(status) = update.status {
            self.status = status;
            if status == RequestStatus::Completed {
                self.completed_at = Some(self.updated_at);
            }
        }
        if let Some(response) = &update.admin_response {
            self.admin_response = Some(response.clone());
        }
        if let Some(name) = &update.technician_name {
            self.technician_name = Some(name.clone());
        }
        if let Some(phone) = &update.technician_phone {
            self.technician_phone = Some(phone.clone());
        }
        if let Some(eta) = &update.estimated_arrival_time {
            self.estimated_arrival_time = Some(eta.clone());
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == RequestStatus::Completed
    }
}

/// Customer feedback on a completed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub service_request_id: Uuid,
    pub user_id: Uuid,
    pub technician_name: String,
    pub service_type: ServiceType,
    /// Star rating, 1 through 5
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        request: &ServiceRequest,
        user_id: Uuid,
        rating: u8,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_request_id: request.id,
            user_id,
            technician_name: request
                .technician_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            service_type: request.service_type,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_request(service_type: ServiceType, hours: Option<u32>) -> NewServiceRequest {
        NewServiceRequest {
            service_type,
            name: "Ali Raza".to_string(),
            address: "House 12, Street 4, Lahore".to_string(),
            contact_number: "03001234567".to_string(),
            preferred_time: Utc::now(),
            issue_description: "Kitchen sink is leaking".to_string(),
            hours_required: hours,
        }
    }

    #[test]
    fn test_helper_booking_priced_up_front() {
        let request = ServiceRequest::create(Uuid::new_v4(), new_request(ServiceType::Helper, Some(4)));
        assert_eq!(request.hourly_rate, Some(HELPER_HOURLY_RATE_PKR));
        assert_eq!(request.total_cost, Some(2400.0));
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn test_non_helper_unpriced() {
        let request = ServiceRequest::create(Uuid::new_v4(), new_request(ServiceType::Plumber, None));
        assert_eq!(request.hourly_rate, None);
        assert_eq!(request.total_cost, None);

        // Drivers book hours but are not priced at creation
        let request = ServiceRequest::create(Uuid::new_v4(), new_request(ServiceType::Driver, Some(2)));
        assert_eq!(request.hourly_rate, None);
    }

    #[test]
    fn test_apply_completion_stamps_timestamp() {
        let mut request =
            ServiceRequest::create(Uuid::new_v4(), new_request(ServiceType::Plumber, None));
        assert!(request.completed_at.is_none());

        request.apply(&ServiceRequestUpdate {
            status: Some(RequestStatus::Completed),
            ..Default::default()
        });

        assert!(request.is_completed());
        assert!(request.completed_at.is_some());
    }

    #[test]
    fn test_apply_assignment() {
        let mut request =
            ServiceRequest::create(Uuid::new_v4(), new_request(ServiceType::Electrician, None));

        request.apply(&ServiceRequestUpdate {
            status: Some(RequestStatus::Assigned),
            technician_name: Some("Usman".to_string()),
            technician_phone: Some("03111234567".to_string()),
            ..Default::default()
        });

        assert_eq!(request.status, RequestStatus::Assigned);
        assert_eq!(request.technician_name.as_deref(), Some("Usman"));
        assert!(request.completed_at.is_none());
    }

    #[test]
    fn test_feedback_captures_technician() {
        let mut request =
            ServiceRequest::create(Uuid::new_v4(), new_request(ServiceType::Plumber, None));
        request.technician_name = Some("Usman".to_string());

        let feedback = Feedback::new(&request, request.user_id, 5, None);
        assert_eq!(feedback.technician_name, "Usman");
        assert_eq!(feedback.service_request_id, request.id);

        request.technician_name = None;
        let feedback = Feedback::new(&request, request.user_id, 3, Some("ok".to_string()));
        assert_eq!(feedback.technician_name, "Unknown");
    }
}
