use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Create a new employee.
    ///
    /// # Errors
    /// * `UnknownDepartment` - Referenced department does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, EmployeeError>;

    /// Replace all fields of an employee.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `UnknownDepartment` - Referenced department does not exist
    async fn update_employee(
        &self,
        id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, EmployeeError>;

    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError>;

    /// Five most recent hires, newest first.
    async fn recent_hires(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Headcount per department name.
    async fn department_counts(&self) -> Result<BTreeMap<String, u64>, EmployeeError>;

    /// Headcount per position.
    async fn position_counts(&self) -> Result<BTreeMap<String, u64>, EmployeeError>;

    /// Average salary per department name.
    async fn salary_by_department(&self) -> Result<BTreeMap<String, f64>, EmployeeError>;

    /// Average salary per position.
    async fn salary_by_position(&self) -> Result<BTreeMap<String, f64>, EmployeeError>;
}

/// Persistence operations for employees.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee, assigning its id.
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    /// Retrieve all employees ordered by id.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// # Errors
    /// * `NotFound` - Employee does not exist
    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeError>;
}
