use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::Attendance;
use crate::domain::attendance::models::AttendanceMark;
use crate::domain::attendance::ports::AttendanceRepository;
use crate::domain::attendance::ports::AttendanceServicePort;
use crate::domain::employee::ports::EmployeeRepository;

pub struct AttendanceService<TR, ER>
where
    TR: AttendanceRepository,
    ER: EmployeeRepository,
{
    repository: Arc<TR>,
    employees: Arc<ER>,
}

impl<TR, ER> AttendanceService<TR, ER>
where
    TR: AttendanceRepository,
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<TR>, employees: Arc<ER>) -> Self {
        Self {
            repository,
            employees,
        }
    }
}

#[async_trait]
impl<TR, ER> AttendanceServicePort for AttendanceService<TR, ER>
where
    TR: AttendanceRepository,
    ER: EmployeeRepository,
{
    async fn mark_attendance(&self, mark: AttendanceMark) -> Result<Attendance, AttendanceError> {
        if self.employees.find_by_id(mark.employee_id).await?.is_none() {
            return Err(AttendanceError::EmployeeNotFound(mark.employee_id.0));
        }

        let attendance = self.repository.upsert(mark).await?;
        tracing::info!(
            employee_id = %attendance.employee_id,
            date = %attendance.date,
            present = attendance.present,
            "Attendance marked"
        );
        Ok(attendance)
    }

    async fn list_attendance(&self) -> Result<Vec<Attendance>, AttendanceError> {
        self.repository.list_all().await
    }
}
