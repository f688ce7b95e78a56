use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::Attendance;
use crate::domain::attendance::models::AttendanceId;
use crate::domain::attendance::models::AttendanceMark;
use crate::domain::attendance::ports::AttendanceRepository;
use crate::domain::employee::models::EmployeeId;

#[derive(sqlx::FromRow)]
struct AttendanceRow {
    id: i64,
    employee_id: i64,
    date: NaiveDate,
    present: bool,
}

impl From<AttendanceRow> for Attendance {
    fn from(row: AttendanceRow) -> Self {
        Attendance {
            id: AttendanceId(row.id),
            employee_id: EmployeeId(row.employee_id),
            date: row.date,
            present: row.present,
        }
    }
}

pub struct PostgresAttendanceRepository {
    pool: PgPool,
}

impl PostgresAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PostgresAttendanceRepository {
    async fn upsert(&self, mark: AttendanceMark) -> Result<Attendance, AttendanceError> {
        let row: AttendanceRow = sqlx::query_as(
            r#"
            INSERT INTO attendance (employee_id, date, present)
            VALUES ($1, $2, $3)
            ON CONFLICT ON CONSTRAINT attendance_employee_date_key
            DO UPDATE SET present = EXCLUDED.present
            RETURNING id, employee_id, date, present
            "#,
        )
        .bind(mark.employee_id.0)
        .bind(mark.date)
        .bind(mark.present)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                AttendanceError::EmployeeNotFound(mark.employee_id.0)
            }
            _ => AttendanceError::DatabaseError(e.to_string()),
        })?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Attendance>, AttendanceError> {
        let rows: Vec<AttendanceRow> = sqlx::query_as(
            "SELECT id, employee_id, date, present FROM attendance ORDER BY date DESC, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AttendanceError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Attendance::from).collect())
    }
}
