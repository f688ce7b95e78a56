use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::leave::errors::LeaveError;
use crate::domain::leave::models::LeaveId;
use crate::domain::leave::models::LeaveRequest;
use crate::domain::leave::models::LeaveStatus;
use crate::domain::leave::models::NewLeaveRequest;
use crate::domain::leave::ports::LeaveRepository;
use crate::domain::leave::ports::LeaveServicePort;

/// Domain service implementation for the leave workflow.
pub struct LeaveService<LR, ER>
where
    LR: LeaveRepository,
    ER: EmployeeRepository,
{
    repository: Arc<LR>,
    employees: Arc<ER>,
}

impl<LR, ER> LeaveService<LR, ER>
where
    LR: LeaveRepository,
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<LR>, employees: Arc<ER>) -> Self {
        Self {
            repository,
            employees,
        }
    }
}

#[async_trait]
impl<LR, ER> LeaveServicePort for LeaveService<LR, ER>
where
    LR: LeaveRepository,
    ER: EmployeeRepository,
{
    async fn request_leave(&self, request: NewLeaveRequest) -> Result<LeaveRequest, LeaveError> {
        let employee_id = request.employee_id;
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(LeaveError::UnknownEmployee(employee_id.0));
        }

        let leave = self.repository.create(request).await?;
        tracing::info!(leave_id = %leave.id, employee_id = %employee_id, "Leave requested");
        Ok(leave)
    }

    async fn list_leaves(&self) -> Result<Vec<LeaveRequest>, LeaveError> {
        self.repository.list_all().await
    }

    async fn update_leave_status(
        &self,
        id: LeaveId,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, LeaveError> {
        let mut leave = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(LeaveError::NotFound(id.0))?;
        leave.decide(status)?;

        let leave = self.repository.update_status(id, status).await?;
        tracing::info!(leave_id = %id, status = %status, "Leave decided");
        Ok(leave)
    }
}
