pub mod create_department;
pub mod delete_department;
pub mod get_department;
pub mod list_departments;
pub mod update_department;

pub use create_department::create_department;
pub use delete_department::delete_department;
pub use get_department::get_department;
pub use list_departments::list_departments;
use serde::Deserialize;
use serde::Serialize;
pub use update_department::update_department;

use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentCommand;
use crate::domain::shared::PersonName;

/// Body accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentRequestBody {
    name: String,
}

impl DepartmentRequestBody {
    fn try_into_command(self) -> Result<DepartmentCommand, DepartmentError> {
        Ok(DepartmentCommand {
            name: PersonName::new(self.name, "name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentData {
    pub id: i64,
    pub name: String,
}

impl From<&Department> for DepartmentData {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id.0,
            name: department.name.as_str().to_string(),
        }
    }
}
