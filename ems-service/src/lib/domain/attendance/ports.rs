use async_trait::async_trait;

use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::Attendance;
use crate::domain::attendance::models::AttendanceMark;

/// Port for attendance tracking.
#[async_trait]
pub trait AttendanceServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `EmployeeNotFound` - Employee does not exist
    async fn mark_attendance(&self, mark: AttendanceMark) -> Result<Attendance, AttendanceError>;

    /// All records, most recent day first.
    async fn list_attendance(&self) -> Result<Vec<Attendance>, AttendanceError>;
}

/// Persistence operations for attendance records.
#[async_trait]
pub trait AttendanceRepository: Send + Sync + 'static {
    /// Insert the mark, or overwrite the record for the same employee and date.
    async fn upsert(&self, mark: AttendanceMark) -> Result<Attendance, AttendanceError>;

    /// Retrieve all records ordered by date descending, then id.
    async fn list_all(&self) -> Result<Vec<Attendance>, AttendanceError>;
}
