use std::fmt;

use chrono::NaiveDate;

use crate::domain::employee::models::EmployeeId;

/// Presence of one employee on one day. At most one record per employee and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub id: AttendanceId,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub present: bool,
}

/// Attendance record unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttendanceId(pub i64);

impl fmt::Display for AttendanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to mark an employee present or absent. Marking the same day again
/// overwrites the earlier mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceMark {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub present: bool,
}
