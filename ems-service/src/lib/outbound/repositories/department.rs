use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentCommand;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::ports::DepartmentRepository;
use crate::domain::shared::PersonName;

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: i64,
    name: String,
}

impl TryFrom<DepartmentRow> for Department {
    type Error = DepartmentError;

    fn try_from(row: DepartmentRow) -> Result<Self, Self::Error> {
        Ok(Department {
            id: DepartmentId(row.id),
            name: PersonName::new(row.name, "name")?,
        })
    }
}

pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn create(&self, command: DepartmentCommand) -> Result<Department, DepartmentError> {
        let (id,): (i64,) = sqlx::query_as("INSERT INTO departments (name) VALUES ($1) RETURNING id")
            .bind(command.name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DepartmentError::DatabaseError(e.to_string()))?;

        Ok(Department {
            id: DepartmentId(id),
            name: command.name,
        })
    }

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, DepartmentError> {
        let row: Option<DepartmentRow> =
            sqlx::query_as("SELECT id, name FROM departments WHERE id = $1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DepartmentError::DatabaseError(e.to_string()))?;

        row.map(Department::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Department>, DepartmentError> {
        let rows: Vec<DepartmentRow> = sqlx::query_as("SELECT id, name FROM departments ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DepartmentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Department::try_from).collect()
    }

    async fn update(&self, department: Department) -> Result<Department, DepartmentError> {
        let result = sqlx::query("UPDATE departments SET name = $2 WHERE id = $1")
            .bind(department.id.0)
            .bind(department.name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DepartmentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DepartmentError::NotFound(department.id.0));
        }

        Ok(department)
    }

    async fn delete(&self, id: DepartmentId) -> Result<(), DepartmentError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| DepartmentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DepartmentError::NotFound(id.0));
        }

        Ok(())
    }
}
