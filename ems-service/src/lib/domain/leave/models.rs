use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::errors::LeaveError;
use crate::domain::employee::models::EmployeeId;

/// Leave request filed for an employee and decided by HR.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id: LeaveId,
    pub employee_id: EmployeeId,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

/// Leave request unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeaveId(pub i64);

impl fmt::Display for LeaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Decision state of a leave request.
///
/// `Pending` is the only state that can still change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }
}

impl FromStr for LeaveStatus {
    type Err = LeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(LeaveStatus::Pending),
            "APPROVED" => Ok(LeaveStatus::Approved),
            "REJECTED" => Ok(LeaveStatus::Rejected),
            _ => Err(LeaveError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LeaveRequest {
    /// Record an HR decision.
    ///
    /// # Errors
    /// * `InvalidStatus` - `decision` is `Pending`
    /// * `AlreadyDecided` - The request is no longer pending
    pub fn decide(&mut self, decision: LeaveStatus) -> Result<(), LeaveError> {
        if decision == LeaveStatus::Pending {
            return Err(LeaveError::InvalidStatus(decision.to_string()));
        }
        if self.status != LeaveStatus::Pending {
            return Err(LeaveError::AlreadyDecided {
                id: self.id.0,
                status: self.status,
            });
        }

        self.status = decision;
        Ok(())
    }
}

/// Validated leave request before an id is assigned. Always starts pending.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeaveRequest {
    pub employee_id: EmployeeId,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewLeaveRequest {
    const MAX_REASON_LENGTH: usize = 500;

    /// # Errors
    /// * `InvalidRequest` - Blank or overlong reason, or a range ending before it starts
    pub fn new(
        employee_id: EmployeeId,
        reason: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, LeaveError> {
        let reason = reason.trim().to_string();
        if reason.is_empty() {
            return Err(LeaveError::InvalidRequest(
                "reason must not be empty".to_string(),
            ));
        }
        if reason.chars().count() > Self::MAX_REASON_LENGTH {
            return Err(LeaveError::InvalidRequest(format!(
                "reason longer than {} characters",
                Self::MAX_REASON_LENGTH
            )));
        }
        if end_date < start_date {
            return Err(LeaveError::InvalidRequest(format!(
                "end_date {} is before start_date {}",
                end_date, start_date
            )));
        }

        Ok(Self {
            employee_id,
            reason,
            start_date,
            end_date,
        })
    }
}
