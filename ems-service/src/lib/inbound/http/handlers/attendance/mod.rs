pub mod list_attendance;
pub mod mark_attendance;

use chrono::NaiveDate;
pub use list_attendance::list_attendance;
pub use mark_attendance::mark_attendance;
use serde::Serialize;

use crate::domain::attendance::models::Attendance;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceData {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub present: bool,
}

impl From<&Attendance> for AttendanceData {
    fn from(attendance: &Attendance) -> Self {
        Self {
            id: attendance.id.0,
            employee_id: attendance.employee_id.0,
            date: attendance.date,
            present: attendance.present,
        }
    }
}
