pub mod create_hr;
pub mod delete_hr;
pub mod get_hr;
pub mod list_hr_employees;
pub mod list_hrs;
pub mod update_hr;

pub use create_hr::create_hr;
pub use delete_hr::delete_hr;
pub use get_hr::get_hr;
pub use list_hr_employees::list_hr_employees;
pub use list_hrs::list_hrs;
use serde::Serialize;
pub use update_hr::update_hr;

use crate::domain::hr::models::Hr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HrData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub account_id: i64,
}

impl From<&Hr> for HrData {
    fn from(hr: &Hr) -> Self {
        Self {
            id: hr.id.0,
            name: hr.name.as_str().to_string(),
            email: hr.email.as_str().to_string(),
            account_id: hr.account_id.0,
        }
    }
}
