pub mod list_leaves;
pub mod request_leave;
pub mod update_leave_status;

use chrono::NaiveDate;
pub use list_leaves::list_leaves;
pub use request_leave::request_leave;
use serde::Deserialize;
use serde::Serialize;
pub use update_leave_status::update_leave_status;

use crate::domain::leave::models::LeaveRequest;
use crate::domain::leave::models::LeaveStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveData {
    pub id: i64,
    pub employee_id: i64,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

impl From<&LeaveRequest> for LeaveData {
    fn from(leave: &LeaveRequest) -> Self {
        Self {
            id: leave.id.0,
            employee_id: leave.employee_id.0,
            reason: leave.reason.clone(),
            start_date: leave.start_date,
            end_date: leave.end_date,
            status: leave.status,
        }
    }
}

/// Body of a status change; parsed into the domain status by the handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaveStatusRequestBody {
    status: String,
}
