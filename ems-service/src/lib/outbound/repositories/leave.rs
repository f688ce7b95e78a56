use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::employee::models::EmployeeId;
use crate::domain::leave::errors::LeaveError;
use crate::domain::leave::models::LeaveId;
use crate::domain::leave::models::LeaveRequest;
use crate::domain::leave::models::LeaveStatus;
use crate::domain::leave::models::NewLeaveRequest;
use crate::domain::leave::ports::LeaveRepository;

const SELECT_LEAVE: &str = r#"
    SELECT id, employee_id, reason, start_date, end_date, status
    FROM leave_requests
"#;

#[derive(sqlx::FromRow)]
struct LeaveRow {
    id: i64,
    employee_id: i64,
    reason: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
}

impl TryFrom<LeaveRow> for LeaveRequest {
    type Error = LeaveError;

    fn try_from(row: LeaveRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<LeaveStatus>().map_err(|_| {
            LeaveError::DatabaseError(format!("unknown leave status stored: {}", row.status))
        })?;

        Ok(LeaveRequest {
            id: LeaveId(row.id),
            employee_id: EmployeeId(row.employee_id),
            reason: row.reason,
            start_date: row.start_date,
            end_date: row.end_date,
            status,
        })
    }
}

fn map_write_error(e: sqlx::Error, employee_id: EmployeeId) -> LeaveError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return LeaveError::UnknownEmployee(employee_id.0);
        }
    }
    LeaveError::DatabaseError(e.to_string())
}

pub struct PostgresLeaveRepository {
    pool: PgPool,
}

impl PostgresLeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaveRepository for PostgresLeaveRepository {
    async fn create(&self, request: NewLeaveRequest) -> Result<LeaveRequest, LeaveError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO leave_requests (employee_id, reason, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(request.employee_id.0)
        .bind(&request.reason)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(LeaveStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, request.employee_id))?;

        Ok(LeaveRequest {
            id: LeaveId(id),
            employee_id: request.employee_id,
            reason: request.reason,
            start_date: request.start_date,
            end_date: request.end_date,
            status: LeaveStatus::Pending,
        })
    }

    async fn find_by_id(&self, id: LeaveId) -> Result<Option<LeaveRequest>, LeaveError> {
        let sql = format!("{SELECT_LEAVE} WHERE id = $1");
        let row: Option<LeaveRow> = sqlx::query_as(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| LeaveError::DatabaseError(e.to_string()))?;

        row.map(LeaveRequest::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<LeaveRequest>, LeaveError> {
        let sql = format!("{SELECT_LEAVE} ORDER BY id");
        let rows: Vec<LeaveRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| LeaveError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(LeaveRequest::try_from).collect()
    }

    async fn update_status(
        &self,
        id: LeaveId,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, LeaveError> {
        // Only a pending request takes a decision; a concurrent decision wins
        let row: Option<LeaveRow> = sqlx::query_as(
            r#"
            UPDATE leave_requests
            SET status = $2
            WHERE id = $1 AND status = $3
            RETURNING id, employee_id, reason, start_date, end_date, status
            "#,
        )
        .bind(id.0)
        .bind(status.as_str())
        .bind(LeaveStatus::Pending.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| LeaveError::DatabaseError(e.to_string()))?;

        if let Some(row) = row {
            return LeaveRequest::try_from(row);
        }

        match self.find_by_id(id).await? {
            Some(current) => Err(LeaveError::AlreadyDecided {
                id: id.0,
                status: current.status,
            }),
            None => Err(LeaveError::NotFound(id.0)),
        }
    }
}
