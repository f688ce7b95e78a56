use async_trait::async_trait;

use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentCommand;
use crate::domain::department::models::DepartmentId;

/// Port for department domain service operations.
#[async_trait]
pub trait DepartmentServicePort: Send + Sync + 'static {
    async fn create_department(
        &self,
        command: DepartmentCommand,
    ) -> Result<Department, DepartmentError>;

    async fn list_departments(&self) -> Result<Vec<Department>, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    async fn get_department(&self, id: DepartmentId) -> Result<Department, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    async fn update_department(
        &self,
        id: DepartmentId,
        command: DepartmentCommand,
    ) -> Result<Department, DepartmentError>;

    /// Delete a department. Employees of the department become unassigned.
    ///
    /// # Errors
    /// * `NotFound` - Department does not exist
    async fn delete_department(&self, id: DepartmentId) -> Result<(), DepartmentError>;
}

/// Persistence operations for departments.
#[async_trait]
pub trait DepartmentRepository: Send + Sync + 'static {
    /// Persist a new department, assigning its id.
    async fn create(&self, command: DepartmentCommand) -> Result<Department, DepartmentError>;

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, DepartmentError>;

    /// Retrieve all departments ordered by id.
    async fn list_all(&self) -> Result<Vec<Department>, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    async fn update(&self, department: Department) -> Result<Department, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    async fn delete(&self, id: DepartmentId) -> Result<(), DepartmentError>;
}
