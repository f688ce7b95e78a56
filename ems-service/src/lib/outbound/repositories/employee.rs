use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::department::models::DepartmentId;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;

const SELECT_EMPLOYEE: &str = r#"
    SELECT id, first_name, last_name, email, phone, position, salary, hire_date, department_id
    FROM employees
"#;

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    position: Option<String>,
    salary: Option<f64>,
    hire_date: Option<NaiveDate>,
    department_id: Option<i64>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: EmployeeId(row.id),
            first_name: PersonName::new(row.first_name, "first_name")?,
            last_name: PersonName::new(row.last_name, "last_name")?,
            email: EmailAddress::new(row.email)?,
            phone: row.phone,
            position: row.position,
            salary: row.salary,
            hire_date: row.hire_date,
            department_id: row.department_id.map(DepartmentId),
        })
    }
}

/// The service checks department references up front; a department removed
/// in between still surfaces as `UnknownDepartment`.
fn map_write_error(e: sqlx::Error, department_id: Option<DepartmentId>) -> EmployeeError {
    if let (Some(db_err), Some(id)) = (e.as_database_error(), department_id) {
        if db_err.is_foreign_key_violation() {
            return EmployeeError::UnknownDepartment(id.0);
        }
    }
    EmployeeError::DatabaseError(e.to_string())
}

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO employees
                (first_name, last_name, email, phone, position, salary, hire_date, department_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(details.first_name.as_str())
        .bind(details.last_name.as_str())
        .bind(details.email.as_str())
        .bind(details.phone.as_deref())
        .bind(details.position.as_deref())
        .bind(details.salary)
        .bind(details.hire_date)
        .bind(details.department_id.map(|d| d.0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, details.department_id))?;

        Ok(Employee::from_details(EmployeeId(id), details))
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE id = $1");
        let row: Option<EmployeeRow> = sqlx::query_as(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let sql = format!("{SELECT_EMPLOYEE} ORDER BY id");
        let rows: Vec<EmployeeRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4, phone = $5,
                position = $6, salary = $7, hire_date = $8, department_id = $9
            WHERE id = $1
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.email.as_str())
        .bind(employee.phone.as_deref())
        .bind(employee.position.as_deref())
        .bind(employee.salary)
        .bind(employee.hire_date)
        .bind(employee.department_id.map(|d| d.0))
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, employee.department_id))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(employee.id.0));
        }

        Ok(employee)
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(id.0));
        }

        Ok(())
    }
}
