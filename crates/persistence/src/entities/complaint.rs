//! Complaint entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Complaint, ComplaintStatus};
use sqlx::FromRow;

/// Database enum mapping for the `complaint_status` PostgreSQL type.
///
/// The enum labels carry the wire spelling, including the space in
/// "In Progress", so the three-value invariant is enforced by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "complaint_status")]
pub enum ComplaintStatusDb {
    Pending,
    #[sqlx(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl From<ComplaintStatusDb> for ComplaintStatus {
    fn from(status: ComplaintStatusDb) -> Self {
        match status {
            ComplaintStatusDb::Pending => ComplaintStatus::Pending,
            ComplaintStatusDb::InProgress => ComplaintStatus::InProgress,
            ComplaintStatusDb::Resolved => ComplaintStatus::Resolved,
        }
    }
}

impl From<ComplaintStatus> for ComplaintStatusDb {
    fn from(status: ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Pending => ComplaintStatusDb::Pending,
            ComplaintStatus::InProgress => ComplaintStatusDb::InProgress,
            ComplaintStatus::Resolved => ComplaintStatusDb::Resolved,
        }
    }
}

/// Database row mapping for the complaints table.
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub complaint_type: String,
    pub description: String,
    pub status: ComplaintStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ComplaintEntity> for Complaint {
    fn from(entity: ComplaintEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            complaint_type: entity.complaint_type,
            description: entity.description,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_db_round_trip() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ] {
            let db: ComplaintStatusDb = status.into();
            let back: ComplaintStatus = db.into();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_entity_converts_to_domain_model() {
        let now = Utc::now();
        let entity = ComplaintEntity {
            id: 42,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            complaint_type: "Service".to_string(),
            description: "Support ticket ignored for a week".to_string(),
            status: ComplaintStatusDb::InProgress,
            created_at: now,
            updated_at: now,
        };

        let complaint: Complaint = entity.into();
        assert_eq!(complaint.id, 42);
        assert_eq!(complaint.status, ComplaintStatus::InProgress);
        assert_eq!(complaint.created_at, now);
    }
}
