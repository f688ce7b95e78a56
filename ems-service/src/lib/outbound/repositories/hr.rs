use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::account::models::AccountId;
use crate::domain::hr::errors::HrError;
use crate::domain::hr::models::Hr;
use crate::domain::hr::models::HrId;
use crate::domain::hr::models::NewHr;
use crate::domain::hr::ports::HrRepository;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;

#[derive(sqlx::FromRow)]
struct HrRow {
    id: i64,
    name: String,
    email: String,
    account_id: i64,
}

impl TryFrom<HrRow> for Hr {
    type Error = HrError;

    fn try_from(row: HrRow) -> Result<Self, Self::Error> {
        Ok(Hr {
            id: HrId(row.id),
            name: PersonName::new(row.name, "name")?,
            email: EmailAddress::new(row.email)?,
            account_id: AccountId(row.account_id),
        })
    }
}

fn map_write_error(e: sqlx::Error, email: &EmailAddress) -> HrError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("hrs_email_key") {
            return HrError::EmailAlreadyExists(email.as_str().to_string());
        }
    }
    HrError::DatabaseError(e.to_string())
}

pub struct PostgresHrRepository {
    pool: PgPool,
}

impl PostgresHrRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HrRepository for PostgresHrRepository {
    async fn create(&self, hr: NewHr) -> Result<Hr, HrError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO hrs (name, email, account_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(hr.name.as_str())
        .bind(hr.email.as_str())
        .bind(hr.account_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &hr.email))?;

        Ok(Hr {
            id: HrId(id),
            name: hr.name,
            email: hr.email,
            account_id: hr.account_id,
        })
    }

    async fn find_by_id(&self, id: HrId) -> Result<Option<Hr>, HrError> {
        let row: Option<HrRow> =
            sqlx::query_as("SELECT id, name, email, account_id FROM hrs WHERE id = $1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| HrError::DatabaseError(e.to_string()))?;

        row.map(Hr::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Hr>, HrError> {
        let row: Option<HrRow> =
            sqlx::query_as("SELECT id, name, email, account_id FROM hrs WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| HrError::DatabaseError(e.to_string()))?;

        row.map(Hr::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Hr>, HrError> {
        let rows: Vec<HrRow> =
            sqlx::query_as("SELECT id, name, email, account_id FROM hrs ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| HrError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Hr::try_from).collect()
    }

    async fn update(&self, hr: Hr) -> Result<Hr, HrError> {
        let result = sqlx::query("UPDATE hrs SET name = $2, email = $3 WHERE id = $1")
            .bind(hr.id.0)
            .bind(hr.name.as_str())
            .bind(hr.email.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &hr.email))?;

        if result.rows_affected() == 0 {
            return Err(HrError::NotFound(hr.id.0));
        }

        Ok(hr)
    }

    async fn delete(&self, id: HrId) -> Result<(), HrError> {
        let result = sqlx::query("DELETE FROM hrs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| HrError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(HrError::NotFound(id.0));
        }

        Ok(())
    }
}
