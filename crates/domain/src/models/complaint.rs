//! Complaint domain models and HTTP DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidationError;

use shared::validation::validate_required_fields;

/// Lifecycle status of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    // Labels are matched exactly; the status values are part of the wire
    // contract, including the space in "In Progress".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ComplaintStatus::Pending),
            "In Progress" => Ok(ComplaintStatus::InProgress),
            "Resolved" => Ok(ComplaintStatus::Resolved),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A complaint record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub complaint_type: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a complaint.
///
/// Produced from [`CreateComplaintRequest::into_new_complaint`]; existence
/// of the required fields has already been checked.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub complaint_type: String,
    pub description: String,
}

/// Request payload for creating a complaint.
///
/// All fields deserialize as optional so that an absent field surfaces as a
/// 400 with the contract's missing-fields message instead of a body-decode
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComplaintRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub complaint_type: Option<String>,
    pub description: Option<String>,
}

impl CreateComplaintRequest {
    /// Validates the required fields and converts into a [`NewComplaint`].
    pub fn into_new_complaint(self) -> Result<NewComplaint, ValidationError> {
        validate_required_fields(&[
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("complaint_type", self.complaint_type.as_deref()),
            ("description", self.description.as_deref()),
        ])?;

        Ok(NewComplaint {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            complaint_type: self.complaint_type.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Request payload for a full update.
///
/// The caller must resend the full representation: omitted fields are bound
/// as NULL rather than merged with the stored row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComplaintRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub complaint_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Request payload for a status-only update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Response for creating a complaint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateComplaintResponse {
    pub message: String,
    #[serde(rename = "complaintId")]
    pub complaint_id: i64,
}

/// Generic success response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a status-only update.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateResponse {
    pub message: String,
    pub status: ComplaintStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateComplaintRequest {
        CreateComplaintRequest {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            complaint_type: Some("Billing".to_string()),
            description: Some("Charged twice for the same invoice".to_string()),
        }
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(ComplaintStatus::Pending.as_str(), "Pending");
        assert_eq!(ComplaintStatus::InProgress.as_str(), "In Progress");
        assert_eq!(ComplaintStatus::Resolved.as_str(), "Resolved");
    }

    #[test]
    fn test_status_from_str_valid() {
        assert_eq!(
            "Pending".parse::<ComplaintStatus>().unwrap(),
            ComplaintStatus::Pending
        );
        assert_eq!(
            "In Progress".parse::<ComplaintStatus>().unwrap(),
            ComplaintStatus::InProgress
        );
        assert_eq!(
            "Resolved".parse::<ComplaintStatus>().unwrap(),
            ComplaintStatus::Resolved
        );
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!("Bogus".parse::<ComplaintStatus>().is_err());
        assert!("".parse::<ComplaintStatus>().is_err());
        // Case-sensitive, matching the original contract
        assert!("pending".parse::<ComplaintStatus>().is_err());
        assert!("in progress".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn test_status_serde_labels() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let status: ComplaintStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, ComplaintStatus::InProgress);
    }

    #[test]
    fn test_into_new_complaint_valid() {
        let new = full_request().into_new_complaint().unwrap();
        assert_eq!(new.name, "Ada Lovelace");
        assert_eq!(new.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_into_new_complaint_missing_field() {
        let mut request = full_request();
        request.email = None;
        let err = request.into_new_complaint().unwrap_err();
        assert_eq!(err.code, "missing_required_fields");
        assert!(err.message.unwrap().contains("complaint_type"));
    }

    #[test]
    fn test_into_new_complaint_blank_field() {
        let mut request = full_request();
        request.description = Some("   ".to_string());
        assert!(request.into_new_complaint().is_err());
    }

    #[test]
    fn test_into_new_complaint_empty_phone_becomes_none() {
        let mut request = full_request();
        request.phone = Some("".to_string());
        let new = request.into_new_complaint().unwrap();
        assert!(new.phone.is_none());
    }

    #[test]
    fn test_create_response_uses_camel_case_id() {
        let response = CreateComplaintResponse {
            message: "Complaint registered successfully!".to_string(),
            complaint_id: 7,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"complaintId\":7"));
    }

    #[test]
    fn test_complaint_serialization_shape() {
        let complaint = Complaint {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            complaint_type: "Technical".to_string(),
            description: "App crashes on login".to_string(),
            status: ComplaintStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&complaint).unwrap();
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["complaint_type"], "Technical");
        assert!(json["phone"].is_null());
    }
}
