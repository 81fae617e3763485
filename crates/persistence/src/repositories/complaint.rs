//! Complaint repository for database operations.

use domain::models::NewComplaint;
use sqlx::PgPool;

use crate::entities::{ComplaintEntity, ComplaintStatusDb};
use crate::metrics::QueryTimer;

/// Repository for complaint database operations.
///
/// Mutating operations are single conditional statements; an affected-row
/// count of zero is the not-found signal, so no separate existence read is
/// needed.
#[derive(Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    /// Creates a new ComplaintRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new complaint and return its generated id.
    ///
    /// Status and timestamps are set by the store defaults.
    pub async fn insert(&self, complaint: &NewComplaint) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("insert_complaint");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO complaints (name, email, phone, complaint_type, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&complaint.name)
        .bind(&complaint.email)
        .bind(complaint.phone.as_deref())
        .bind(&complaint.complaint_type)
        .bind(&complaint.description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Fetch every complaint, most recent first.
    pub async fn list_all(&self) -> Result<Vec<ComplaintEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_complaints");
        let result = sqlx::query_as::<_, ComplaintEntity>(
            r#"
            SELECT id, name, email, phone, complaint_type, description, status, created_at, updated_at
            FROM complaints
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a complaint by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ComplaintEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_complaint_by_id");
        let result = sqlx::query_as::<_, ComplaintEntity>(
            r#"
            SELECT id, name, email, phone, complaint_type, description, status, created_at, updated_at
            FROM complaints
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Overwrite all mutable columns of a complaint.
    ///
    /// Fields arrive as the caller sent them; an omitted field binds as
    /// NULL, which the NOT NULL columns reject. The status text is cast by
    /// the store, so an unknown label is rejected there as well. Returns
    /// the number of rows updated.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        complaint_type: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("update_complaint");
        let result = sqlx::query(
            r#"
            UPDATE complaints
            SET name = $2, email = $3, phone = $4, complaint_type = $5,
                description = $6, status = $7::complaint_status, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(complaint_type)
        .bind(description)
        .bind(status)
        .execute(&self.pool)
        .await
        .map(|done| done.rows_affected());
        timer.record();
        result
    }

    /// Update only the status column. Returns the number of rows updated.
    pub async fn update_status(
        &self,
        id: i64,
        status: ComplaintStatusDb,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("update_complaint_status");
        let result = sqlx::query(
            r#"
            UPDATE complaints
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await
        .map(|done| done.rows_affected());
        timer.record();
        result
    }

    /// Permanently delete a complaint. Returns the number of rows deleted.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_complaint");
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|done| done.rows_affected());
        timer.record();
        result
    }
}
