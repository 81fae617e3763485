//! Complaint CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::complaint::{
    Complaint, ComplaintStatus, CreateComplaintRequest, CreateComplaintResponse, MessageResponse,
    StatusUpdateResponse, UpdateComplaintRequest, UpdateStatusRequest,
};
use persistence::repositories::ComplaintRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// Register a new complaint.
///
/// POST /api/complaints
///
/// Status defaults to Pending; timestamps are set by the store.
pub async fn create_complaint(
    State(state): State<AppState>,
    Json(request): Json<CreateComplaintRequest>,
) -> Result<(StatusCode, Json<CreateComplaintResponse>), ApiError> {
    let new_complaint = request.into_new_complaint()?;

    let repo = ComplaintRepository::new(state.pool.clone());
    let complaint_id = repo
        .insert(&new_complaint)
        .await
        .map_err(|e| ApiError::store("Failed to register complaint", e))?;

    info!(
        complaint_id,
        complaint_type = %new_complaint.complaint_type,
        "Complaint registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateComplaintResponse {
            message: "Complaint registered successfully!".to_string(),
            complaint_id,
        }),
    ))
}

/// List every complaint, most recent first.
///
/// GET /api/complaints
///
/// No pagination; status filtering happens in the client.
pub async fn list_complaints(
    State(state): State<AppState>,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    let repo = ComplaintRepository::new(state.pool.clone());
    let complaints: Vec<Complaint> = repo
        .list_all()
        .await
        .map_err(|e| ApiError::store("Failed to fetch complaints", e))?
        .into_iter()
        .map(Complaint::from)
        .collect();

    Ok(Json(complaints))
}

/// Fetch a single complaint.
///
/// GET /api/complaints/:id
pub async fn get_complaint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Complaint>, ApiError> {
    let repo = ComplaintRepository::new(state.pool.clone());
    let complaint = repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::store("Failed to fetch complaint", e))?
        .ok_or_else(|| ApiError::NotFound("Complaint not found".to_string()))?;

    Ok(Json(Complaint::from(complaint)))
}

/// Overwrite all mutable fields of a complaint.
///
/// PUT /api/complaints/:id
///
/// The caller resends the full representation; omitted fields are cleared,
/// not merged. Zero rows updated is the not-found signal.
pub async fn update_complaint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateComplaintRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ComplaintRepository::new(state.pool.clone());
    let rows_affected = repo
        .update(
            id,
            request.name.as_deref(),
            request.email.as_deref(),
            request.phone.as_deref(),
            request.complaint_type.as_deref(),
            request.description.as_deref(),
            request.status.as_deref(),
        )
        .await
        .map_err(|e| ApiError::store("Failed to update complaint", e))?;

    if rows_affected == 0 {
        return Err(ApiError::NotFound("Complaint not found".to_string()));
    }

    info!(complaint_id = id, "Complaint updated");

    Ok(Json(MessageResponse {
        message: "Complaint updated successfully!".to_string(),
    }))
}

/// Update only the status of a complaint.
///
/// PATCH /api/complaints/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<StatusUpdateResponse>, ApiError> {
    let status: ComplaintStatus = request
        .status
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| {
            ApiError::Validation(
                "Invalid status. Must be: Pending, In Progress, or Resolved".to_string(),
            )
        })?;

    let repo = ComplaintRepository::new(state.pool.clone());
    let rows_affected = repo
        .update_status(id, status.into())
        .await
        .map_err(|e| ApiError::store("Failed to update complaint status", e))?;

    if rows_affected == 0 {
        return Err(ApiError::NotFound("Complaint not found".to_string()));
    }

    info!(complaint_id = id, status = %status, "Complaint status updated");

    Ok(Json(StatusUpdateResponse {
        message: "Complaint status updated successfully!".to_string(),
        status,
    }))
}

/// Permanently delete a complaint.
///
/// DELETE /api/complaints/:id
///
/// Hard delete; a second delete of the same id is a 404.
pub async fn delete_complaint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ComplaintRepository::new(state.pool.clone());
    let rows_affected = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::store("Failed to delete complaint", e))?;

    if rows_affected == 0 {
        return Err(ApiError::NotFound("Complaint not found".to_string()));
    }

    info!(complaint_id = id, "Complaint deleted");

    Ok(Json(MessageResponse {
        message: "Complaint deleted successfully!".to_string(),
    }))
}
