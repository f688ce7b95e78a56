pub mod analytics;
pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod list_employees;
pub mod update_employee;

pub use analytics::department_count;
pub use analytics::position_count;
pub use analytics::recent_hires;
pub use analytics::salary_by_department;
pub use analytics::salary_by_position;
use chrono::NaiveDate;
pub use create_employee::create_employee;
pub use delete_employee::delete_employee;
pub use get_employee::get_employee;
pub use list_employees::list_employees;
use serde::Deserialize;
use serde::Serialize;
pub use update_employee::update_employee;

use crate::domain::department::models::DepartmentId;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;

/// Body accepted by create and full update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployeeRequestBody {
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    position: Option<String>,
    salary: Option<f64>,
    hire_date: Option<NaiveDate>,
    department_id: Option<i64>,
}

impl EmployeeRequestBody {
    fn try_into_details(self) -> Result<EmployeeDetails, EmployeeError> {
        Ok(EmployeeDetails {
            first_name: PersonName::new(self.first_name, "first_name")?,
            last_name: PersonName::new(self.last_name, "last_name")?,
            email: EmailAddress::new(self.email)?,
            phone: self.phone,
            position: self.position,
            salary: self.salary,
            hire_date: self.hire_date,
            department_id: self.department_id.map(DepartmentId),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub department_id: Option<i64>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.0,
            first_name: employee.first_name.as_str().to_string(),
            last_name: employee.last_name.as_str().to_string(),
            email: employee.email.as_str().to_string(),
            phone: employee.phone.clone(),
            position: employee.position.clone(),
            salary: employee.salary,
            hire_date: employee.hire_date,
            department_id: employee.department_id.map(|d| d.0),
        }
    }
}
