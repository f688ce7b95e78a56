//! In-process repositories used when no database is configured and by the
//! integration tests.
//!
//! Each table is a `BTreeMap` keyed by id behind a `RwLock`, so listings come
//! back in id order like the SQL queries. Uniqueness checks run under the
//! write lock.

use std::collections::BTreeMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::NewAccount;
use crate::domain::account::ports::AccountRepository;
use crate::domain::attendance::errors::AttendanceError;
use crate::domain::attendance::models::Attendance;
use crate::domain::attendance::models::AttendanceId;
use crate::domain::attendance::models::AttendanceMark;
use crate::domain::attendance::ports::AttendanceRepository;
use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentCommand;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::ports::DepartmentRepository;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::hr::errors::HrError;
use crate::domain::hr::models::Hr;
use crate::domain::hr::models::HrId;
use crate::domain::hr::models::NewHr;
use crate::domain::hr::ports::HrRepository;
use crate::domain::leave::errors::LeaveError;
use crate::domain::leave::models::LeaveId;
use crate::domain::leave::models::LeaveRequest;
use crate::domain::leave::models::LeaveStatus;
use crate::domain::leave::models::NewLeaveRequest;
use crate::domain::leave::ports::LeaveRepository;
use crate::domain::recruitment::errors::RecruitmentError;
use crate::domain::recruitment::models::Applicant;
use crate::domain::recruitment::models::ApplicantId;
use crate::domain::recruitment::models::ApplicantStatus;
use crate::domain::recruitment::models::NewApplicant;
use crate::domain::recruitment::ports::ApplicantRepository;

struct Table<T> {
    next_id: AtomicI64,
    rows: RwLock<BTreeMap<i64, T>>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn get(&self, id: i64) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.read().await.values().find(|row| predicate(row)).cloned()
    }

    async fn all(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    /// Returns false when no row with this id exists.
    async fn remove(&self, id: i64) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }
}

pub struct InMemoryAccountRepository {
    table: Table<Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let mut rows = self.table.rows.write().await;
        if rows.values().any(|a| a.username == account.username) {
            return Err(AccountError::UsernameAlreadyExists(
                account.username.to_string(),
            ));
        }

        let account = Account {
            id: AccountId(self.table.allocate_id()),
            username: account.username,
            password_hash: account.password_hash,
            role: account.role,
            created_at: account.created_at,
        };
        rows.insert(account.id.0, account.clone());

        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError> {
        Ok(self.table.get(id.0).await)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
        Ok(self.table.find(|a| a.username.as_str() == username).await)
    }

    async fn update(&self, account: Account) -> Result<Account, AccountError> {
        let mut rows = self.table.rows.write().await;
        if !rows.contains_key(&account.id.0) {
            return Err(AccountError::NotFound(account.id.to_string()));
        }
        if rows
            .values()
            .any(|a| a.id != account.id && a.username == account.username)
        {
            return Err(AccountError::UsernameAlreadyExists(
                account.username.to_string(),
            ));
        }

        rows.insert(account.id.0, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: AccountId) -> Result<(), AccountError> {
        if self.table.remove(id.0).await {
            Ok(())
        } else {
            Err(AccountError::NotFound(id.to_string()))
        }
    }
}

pub struct InMemoryDepartmentRepository {
    table: Table<Department>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryDepartmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn create(&self, command: DepartmentCommand) -> Result<Department, DepartmentError> {
        let department = Department {
            id: DepartmentId(self.table.allocate_id()),
            name: command.name,
        };
        self.table
            .rows
            .write()
            .await
            .insert(department.id.0, department.clone());

        Ok(department)
    }

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, DepartmentError> {
        Ok(self.table.get(id.0).await)
    }

    async fn list_all(&self) -> Result<Vec<Department>, DepartmentError> {
        Ok(self.table.all().await)
    }

    async fn update(&self, department: Department) -> Result<Department, DepartmentError> {
        let mut rows = self.table.rows.write().await;
        match rows.get_mut(&department.id.0) {
            Some(row) => {
                *row = department.clone();
                Ok(department)
            }
            None => Err(DepartmentError::NotFound(department.id.0)),
        }
    }

    async fn delete(&self, id: DepartmentId) -> Result<(), DepartmentError> {
        if self.table.remove(id.0).await {
            Ok(())
        } else {
            Err(DepartmentError::NotFound(id.0))
        }
    }
}

pub struct InMemoryEmployeeRepository {
    table: Table<Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError> {
        let employee = Employee::from_details(EmployeeId(self.table.allocate_id()), details);
        self.table
            .rows
            .write()
            .await
            .insert(employee.id.0, employee.clone());

        Ok(employee)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        Ok(self.table.get(id.0).await)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.table.all().await)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let mut rows = self.table.rows.write().await;
        match rows.get_mut(&employee.id.0) {
            Some(row) => {
                *row = employee.clone();
                Ok(employee)
            }
            None => Err(EmployeeError::NotFound(employee.id.0)),
        }
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        if self.table.remove(id.0).await {
            Ok(())
        } else {
            Err(EmployeeError::NotFound(id.0))
        }
    }
}

pub struct InMemoryHrRepository {
    table: Table<Hr>,
}

impl InMemoryHrRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryHrRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HrRepository for InMemoryHrRepository {
    async fn create(&self, hr: NewHr) -> Result<Hr, HrError> {
        let mut rows = self.table.rows.write().await;
        if rows.values().any(|h| h.email == hr.email) {
            return Err(HrError::EmailAlreadyExists(hr.email.to_string()));
        }

        let hr = Hr {
            id: HrId(self.table.allocate_id()),
            name: hr.name,
            email: hr.email,
            account_id: hr.account_id,
        };
        rows.insert(hr.id.0, hr.clone());

        Ok(hr)
    }

    async fn find_by_id(&self, id: HrId) -> Result<Option<Hr>, HrError> {
        Ok(self.table.get(id.0).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Hr>, HrError> {
        Ok(self.table.find(|h| h.email.as_str() == email).await)
    }

    async fn list_all(&self) -> Result<Vec<Hr>, HrError> {
        Ok(self.table.all().await)
    }

    async fn update(&self, hr: Hr) -> Result<Hr, HrError> {
        let mut rows = self.table.rows.write().await;
        if !rows.contains_key(&hr.id.0) {
            return Err(HrError::NotFound(hr.id.0));
        }
        if rows.values().any(|h| h.id != hr.id && h.email == hr.email) {
            return Err(HrError::EmailAlreadyExists(hr.email.to_string()));
        }

        rows.insert(hr.id.0, hr.clone());
        Ok(hr)
    }

    async fn delete(&self, id: HrId) -> Result<(), HrError> {
        if self.table.remove(id.0).await {
            Ok(())
        } else {
            Err(HrError::NotFound(id.0))
        }
    }
}

/// Leave and attendance rows hold a bare employee id. Deleting an employee
/// does not cascade to them here, unlike the SQL schema.
pub struct InMemoryLeaveRepository {
    table: Table<LeaveRequest>,
}

impl InMemoryLeaveRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryLeaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeaveRepository for InMemoryLeaveRepository {
    async fn create(&self, request: NewLeaveRequest) -> Result<LeaveRequest, LeaveError> {
        let leave = LeaveRequest {
            id: LeaveId(self.table.allocate_id()),
            employee_id: request.employee_id,
            reason: request.reason,
            start_date: request.start_date,
            end_date: request.end_date,
            status: LeaveStatus::Pending,
        };
        self.table
            .rows
            .write()
            .await
            .insert(leave.id.0, leave.clone());

        Ok(leave)
    }

    async fn find_by_id(&self, id: LeaveId) -> Result<Option<LeaveRequest>, LeaveError> {
        Ok(self.table.get(id.0).await)
    }

    async fn list_all(&self) -> Result<Vec<LeaveRequest>, LeaveError> {
        Ok(self.table.all().await)
    }

    async fn update_status(
        &self,
        id: LeaveId,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, LeaveError> {
        let mut rows = self.table.rows.write().await;
        let leave = rows.get_mut(&id.0).ok_or(LeaveError::NotFound(id.0))?;
        leave.decide(status)?;

        Ok(leave.clone())
    }
}

pub struct InMemoryAttendanceRepository {
    table: Table<Attendance>,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryAttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn upsert(&self, mark: AttendanceMark) -> Result<Attendance, AttendanceError> {
        let mut rows = self.table.rows.write().await;
        if let Some(existing) = rows
            .values_mut()
            .find(|a| a.employee_id == mark.employee_id && a.date == mark.date)
        {
            existing.present = mark.present;
            return Ok(existing.clone());
        }

        let attendance = Attendance {
            id: AttendanceId(self.table.allocate_id()),
            employee_id: mark.employee_id,
            date: mark.date,
            present: mark.present,
        };
        rows.insert(attendance.id.0, attendance.clone());

        Ok(attendance)
    }

    async fn list_all(&self) -> Result<Vec<Attendance>, AttendanceError> {
        let mut records = self.table.all().await;
        records.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        Ok(records)
    }
}

pub struct InMemoryApplicantRepository {
    table: Table<Applicant>,
}

impl InMemoryApplicantRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryApplicantRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicantRepository for InMemoryApplicantRepository {
    async fn create(&self, applicant: NewApplicant) -> Result<Applicant, RecruitmentError> {
        let applicant = Applicant {
            id: ApplicantId(self.table.allocate_id()),
            first_name: applicant.first_name,
            last_name: applicant.last_name,
            email: applicant.email,
            job_title: applicant.job_title,
            experience: applicant.experience,
            resume_url: applicant.resume_url,
            status: ApplicantStatus::Pending,
        };
        self.table
            .rows
            .write()
            .await
            .insert(applicant.id.0, applicant.clone());

        Ok(applicant)
    }

    async fn find_by_id(&self, id: ApplicantId) -> Result<Option<Applicant>, RecruitmentError> {
        Ok(self.table.get(id.0).await)
    }

    async fn list_all(&self) -> Result<Vec<Applicant>, RecruitmentError> {
        Ok(self.table.all().await)
    }

    async fn update_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RecruitmentError> {
        let mut rows = self.table.rows.write().await;
        let applicant = rows.get_mut(&id.0).ok_or(RecruitmentError::NotFound(id.0))?;
        applicant.status = status;

        Ok(applicant.clone())
    }
}

#[cfg(test)]
mod tests {
    use auth::Role;
    use chrono::NaiveDate;
    use chrono::Utc;

    use super::*;
    use crate::domain::account::models::Username;
    use crate::domain::shared::PersonName;

    fn new_account(username: &str) -> NewAccount {
        NewAccount {
            username: Username::new(username.to_string()).unwrap(),
            password_hash: "$argon2id$hash".to_string(),
            role: Role::Employee,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_account_ids_are_sequential() {
        let repository = InMemoryAccountRepository::new();

        let first = repository.create(new_account("first")).await.unwrap();
        let second = repository.create(new_account("second")).await.unwrap();

        assert_eq!(first.id, AccountId(1));
        assert_eq!(second.id, AccountId(2));
    }

    #[tokio::test]
    async fn test_account_username_is_unique() {
        let repository = InMemoryAccountRepository::new();
        repository.create(new_account("jane")).await.unwrap();

        let result = repository.create(new_account("jane")).await;
        assert!(matches!(
            result,
            Err(AccountError::UsernameAlreadyExists(name)) if name == "jane"
        ));
    }

    #[tokio::test]
    async fn test_account_rename_onto_taken_username() {
        let repository = InMemoryAccountRepository::new();
        repository.create(new_account("jane")).await.unwrap();
        let mut john = repository.create(new_account("john")).await.unwrap();

        john.username = Username::new("jane".to_string()).unwrap();
        let result = repository.update(john).await;

        assert!(matches!(result, Err(AccountError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_department() {
        let repository = InMemoryDepartmentRepository::new();

        let result = repository.delete(DepartmentId(1)).await;
        assert!(matches!(result, Err(DepartmentError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_departments_listed_in_id_order() {
        let repository = InMemoryDepartmentRepository::new();
        for name in ["Sales", "Engineering", "Finance"] {
            repository
                .create(DepartmentCommand {
                    name: PersonName::new(name.to_string(), "name").unwrap(),
                })
                .await
                .unwrap();
        }

        let ids: Vec<i64> = repository
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|d| d.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_second_leave_decision_is_refused() {
        let repository = InMemoryLeaveRepository::new();
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let leave = repository
            .create(NewLeaveRequest::new(EmployeeId(1), "Trip".to_string(), day, day).unwrap())
            .await
            .unwrap();

        repository
            .update_status(leave.id, LeaveStatus::Approved)
            .await
            .unwrap();
        let result = repository
            .update_status(leave.id, LeaveStatus::Rejected)
            .await;

        assert!(matches!(
            result,
            Err(LeaveError::AlreadyDecided {
                status: LeaveStatus::Approved,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_attendance_upsert_keeps_one_record_per_day() {
        let repository = InMemoryAttendanceRepository::new();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let mark = |date, present| AttendanceMark {
            employee_id: EmployeeId(4),
            date,
            present,
        };

        let first = repository.upsert(mark(monday, true)).await.unwrap();
        let second = repository.upsert(mark(monday, false)).await.unwrap();
        repository.upsert(mark(tuesday, true)).await.unwrap();

        assert_eq!(first.id, second.id);
        let records = repository.list_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, tuesday);
        assert!(!records[1].present);
    }
}
