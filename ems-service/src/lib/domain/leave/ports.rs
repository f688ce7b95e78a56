use async_trait::async_trait;

use crate::domain::leave::errors::LeaveError;
use crate::domain::leave::models::LeaveId;
use crate::domain::leave::models::LeaveRequest;
use crate::domain::leave::models::LeaveStatus;
use crate::domain::leave::models::NewLeaveRequest;

/// Port for the leave workflow handled by HR.
#[async_trait]
pub trait LeaveServicePort: Send + Sync + 'static {
    /// File a pending leave request.
    ///
    /// # Errors
    /// * `UnknownEmployee` - Employee does not exist
    async fn request_leave(&self, request: NewLeaveRequest) -> Result<LeaveRequest, LeaveError>;

    async fn list_leaves(&self) -> Result<Vec<LeaveRequest>, LeaveError>;

    /// # Errors
    /// * `NotFound` - Leave request does not exist
    /// * `InvalidStatus` - Decision is `Pending`
    /// * `AlreadyDecided` - Request is no longer pending
    async fn update_leave_status(
        &self,
        id: LeaveId,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, LeaveError>;
}

/// Persistence operations for leave requests.
#[async_trait]
pub trait LeaveRepository: Send + Sync + 'static {
    async fn create(&self, request: NewLeaveRequest) -> Result<LeaveRequest, LeaveError>;

    async fn find_by_id(&self, id: LeaveId) -> Result<Option<LeaveRequest>, LeaveError>;

    /// Retrieve all leave requests ordered by id.
    async fn list_all(&self) -> Result<Vec<LeaveRequest>, LeaveError>;

    /// Store a decision for a request that is still pending.
    ///
    /// # Errors
    /// * `NotFound` - Leave request does not exist
    /// * `AlreadyDecided` - Another decision was stored first
    async fn update_status(
        &self,
        id: LeaveId,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, LeaveError>;
}
