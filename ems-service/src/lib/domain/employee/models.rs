use std::fmt;

use chrono::NaiveDate;

use crate::domain::department::models::DepartmentId;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;

/// Employee entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub department_id: Option<DepartmentId>,
}

impl Employee {
    pub fn from_details(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self {
            id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone: details.phone,
            position: details.position,
            salary: details.salary,
            hire_date: details.hire_date,
            department_id: details.department_id,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Employee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated employee fields, used for both create and full update.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub department_id: Option<DepartmentId>,
}
