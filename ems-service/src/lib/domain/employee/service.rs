use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::department::models::DepartmentId;
use crate::domain::department::ports::DepartmentRepository;
use crate::domain::employee::analytics;
use crate::domain::employee::analytics::DepartmentNames;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;

/// Domain service implementation for employee operations.
///
/// Holds the department repository to check references and to resolve
/// department names for the analytics views.
pub struct EmployeeService<ER, DR>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
{
    repository: Arc<ER>,
    departments: Arc<DR>,
}

impl<ER, DR> EmployeeService<ER, DR>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
{
    pub fn new(repository: Arc<ER>, departments: Arc<DR>) -> Self {
        Self {
            repository,
            departments,
        }
    }

    async fn ensure_department_exists(
        &self,
        department_id: Option<DepartmentId>,
    ) -> Result<(), EmployeeError> {
        let Some(id) = department_id else {
            return Ok(());
        };

        match self.departments.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(EmployeeError::UnknownDepartment(id.0)),
        }
    }

    async fn department_names(&self) -> Result<DepartmentNames, EmployeeError> {
        let departments = self.departments.list_all().await?;
        Ok(DepartmentNames::new(&departments))
    }
}

#[async_trait]
impl<ER, DR> EmployeeServicePort for EmployeeService<ER, DR>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
{
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError> {
        self.ensure_department_exists(details.department_id).await?;

        let employee = self.repository.create(details).await?;
        tracing::info!(employee_id = %employee.id, name = %employee.full_name(), "Employee created");
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list_all().await
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id.0))
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, EmployeeError> {
        self.get_employee(id).await?;
        self.ensure_department_exists(details.department_id).await?;

        let employee = self
            .repository
            .update(Employee::from_details(id, details))
            .await?;
        tracing::info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        self.repository.delete(id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    async fn recent_hires(&self) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.repository.list_all().await?;
        Ok(analytics::recent_hires(
            employees,
            analytics::RECENT_HIRES_LIMIT,
        ))
    }

    async fn department_counts(&self) -> Result<BTreeMap<String, u64>, EmployeeError> {
        let employees = self.repository.list_all().await?;
        let names = self.department_names().await?;
        Ok(analytics::count_by(&employees, |e| names.label(e)))
    }

    async fn position_counts(&self) -> Result<BTreeMap<String, u64>, EmployeeError> {
        let employees = self.repository.list_all().await?;
        Ok(analytics::count_by(&employees, analytics::position_label))
    }

    async fn salary_by_department(&self) -> Result<BTreeMap<String, f64>, EmployeeError> {
        let employees = self.repository.list_all().await?;
        let names = self.department_names().await?;
        Ok(analytics::average_salary_by(&employees, |e| names.label(e)))
    }

    async fn salary_by_position(&self) -> Result<BTreeMap<String, f64>, EmployeeError> {
        let employees = self.repository.list_all().await?;
        Ok(analytics::average_salary_by(
            &employees,
            analytics::position_label,
        ))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::department::errors::DepartmentError;
    use crate::domain::department::models::Department;
    use crate::domain::department::models::DepartmentCommand;
    use crate::domain::shared::EmailAddress;
    use crate::domain::shared::PersonName;

    mock! {
        pub TestEmployeeRepository {}

        #[async_trait]
        impl EmployeeRepository for TestEmployeeRepository {
            async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;
            async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError>;
            async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;
            async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError>;
            async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeError>;
        }
    }

    mock! {
        pub TestDepartmentRepository {}

        #[async_trait]
        impl DepartmentRepository for TestDepartmentRepository {
            async fn create(&self, command: DepartmentCommand) -> Result<Department, DepartmentError>;
            async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, DepartmentError>;
            async fn list_all(&self) -> Result<Vec<Department>, DepartmentError>;
            async fn update(&self, department: Department) -> Result<Department, DepartmentError>;
            async fn delete(&self, id: DepartmentId) -> Result<(), DepartmentError>;
        }
    }

    fn details(department_id: Option<i64>) -> EmployeeDetails {
        EmployeeDetails {
            first_name: PersonName::new("Jane".to_string(), "first_name").unwrap(),
            last_name: PersonName::new("Doe".to_string(), "last_name").unwrap(),
            email: EmailAddress::new("jane@example.com".to_string()).unwrap(),
            phone: None,
            position: Some("Engineer".to_string()),
            salary: Some(90_000.0),
            hire_date: None,
            department_id: department_id.map(DepartmentId),
        }
    }

    fn department(id: DepartmentId, name: &str) -> Department {
        Department {
            id,
            name: PersonName::new(name.to_string(), "name").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_employee_with_unknown_department() {
        let mut employees = MockTestEmployeeRepository::new();
        employees.expect_create().times(0);

        let mut departments = MockTestDepartmentRepository::new();
        departments
            .expect_find_by_id()
            .withf(|id| *id == DepartmentId(42))
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(employees), Arc::new(departments));

        let result = service.create_employee(details(Some(42))).await;
        assert!(matches!(result, Err(EmployeeError::UnknownDepartment(42))));
    }

    #[tokio::test]
    async fn test_create_employee_with_known_department() {
        let mut employees = MockTestEmployeeRepository::new();
        employees
            .expect_create()
            .times(1)
            .returning(|details| Ok(Employee::from_details(EmployeeId(1), details)));

        let mut departments = MockTestDepartmentRepository::new();
        departments
            .expect_find_by_id()
            .returning(|id| Ok(Some(department(id, "Engineering"))));

        let service = EmployeeService::new(Arc::new(employees), Arc::new(departments));

        let employee = service.create_employee(details(Some(1))).await.unwrap();
        assert_eq!(employee.id, EmployeeId(1));
        assert_eq!(employee.department_id, Some(DepartmentId(1)));
    }

    #[tokio::test]
    async fn test_create_employee_without_department_skips_lookup() {
        let mut employees = MockTestEmployeeRepository::new();
        employees
            .expect_create()
            .times(1)
            .returning(|details| Ok(Employee::from_details(EmployeeId(5), details)));

        let mut departments = MockTestDepartmentRepository::new();
        departments.expect_find_by_id().times(0);

        let service = EmployeeService::new(Arc::new(employees), Arc::new(departments));

        let employee = service.create_employee(details(None)).await.unwrap();
        assert_eq!(employee.department_id, None);
    }

    #[tokio::test]
    async fn test_update_missing_employee() {
        let mut employees = MockTestEmployeeRepository::new();
        employees.expect_find_by_id().returning(|_| Ok(None));
        employees.expect_update().times(0);

        let departments = MockTestDepartmentRepository::new();

        let service = EmployeeService::new(Arc::new(employees), Arc::new(departments));

        let result = service.update_employee(EmployeeId(9), details(None)).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_department_counts_use_department_names() {
        let mut employees = MockTestEmployeeRepository::new();
        employees.expect_list_all().returning(|| {
            Ok(vec![
                Employee::from_details(EmployeeId(1), details(Some(1))),
                Employee::from_details(EmployeeId(2), details(Some(1))),
                Employee::from_details(EmployeeId(3), details(None)),
            ])
        });

        let mut departments = MockTestDepartmentRepository::new();
        departments
            .expect_list_all()
            .returning(|| Ok(vec![department(DepartmentId(1), "Engineering")]));

        let service = EmployeeService::new(Arc::new(employees), Arc::new(departments));

        let counts = service.department_counts().await.unwrap();
        assert_eq!(counts.get("Engineering"), Some(&2));
        assert_eq!(counts.get("Unassigned"), Some(&1));
    }
}
