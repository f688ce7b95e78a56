use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentCommand;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::ports::DepartmentRepository;
use crate::domain::department::ports::DepartmentServicePort;

/// Domain service implementation for department operations.
pub struct DepartmentService<DR>
where
    DR: DepartmentRepository,
{
    repository: Arc<DR>,
}

impl<DR> DepartmentService<DR>
where
    DR: DepartmentRepository,
{
    pub fn new(repository: Arc<DR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<DR> DepartmentServicePort for DepartmentService<DR>
where
    DR: DepartmentRepository,
{
    async fn create_department(
        &self,
        command: DepartmentCommand,
    ) -> Result<Department, DepartmentError> {
        let department = self.repository.create(command).await?;
        tracing::info!(department_id = %department.id, name = %department.name, "Department created");
        Ok(department)
    }

    async fn list_departments(&self) -> Result<Vec<Department>, DepartmentError> {
        self.repository.list_all().await
    }

    async fn get_department(&self, id: DepartmentId) -> Result<Department, DepartmentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DepartmentError::NotFound(id.0))
    }

    async fn update_department(
        &self,
        id: DepartmentId,
        command: DepartmentCommand,
    ) -> Result<Department, DepartmentError> {
        let mut department = self.get_department(id).await?;
        department.name = command.name;
        self.repository.update(department).await
    }

    async fn delete_department(&self, id: DepartmentId) -> Result<(), DepartmentError> {
        self.repository.delete(id).await?;
        tracing::info!(department_id = %id, "Department deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::shared::PersonName;

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

    fn name(value: &str) -> PersonName {
        PersonName::new(value.to_string(), "name").unwrap()
    }

    #[tokio::test]
    async fn test_get_department_not_found() {
        let mut repository = MockTestDepartmentRepository::new();
        repository.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = DepartmentService::new(Arc::new(repository));

        let result = service.get_department(DepartmentId(3)).await;
        assert!(matches!(result, Err(DepartmentError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_update_department_renames() {
        let mut repository = MockTestDepartmentRepository::new();
        repository.expect_find_by_id().times(1).returning(|id| {
            Ok(Some(Department {
                id,
                name: name("Engineering"),
            }))
        });
        repository
            .expect_update()
            .withf(|department| department.name.as_str() == "Platform")
            .times(1)
            .returning(Ok);

        let service = DepartmentService::new(Arc::new(repository));

        let department = service
            .update_department(
                DepartmentId(1),
                DepartmentCommand {
                    name: name("Platform"),
                },
            )
            .await
            .unwrap();

        assert_eq!(department.id, DepartmentId(1));
        assert_eq!(department.name.as_str(), "Platform");
    }

    #[tokio::test]
    async fn test_update_missing_department_does_not_write() {
        let mut repository = MockTestDepartmentRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = DepartmentService::new(Arc::new(repository));

        let result = service
            .update_department(
                DepartmentId(9),
                DepartmentCommand {
                    name: name("Platform"),
                },
            )
            .await;
        assert!(matches!(result, Err(DepartmentError::NotFound(9))));
    }
}
