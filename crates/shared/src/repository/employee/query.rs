use crate::{
    abstract_trait::employee::repository::query::EmployeeQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::employee::EmployeeModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct EmployeeQueryRepository {
    db: ConnectionPool,
}

impl EmployeeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl EmployeeQueryRepositoryTrait for EmployeeQueryRepository {
    async fn find_by_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<EmployeeModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let employee = sqlx::query_as::<_, EmployeeModel>(
            r#"
            SELECT
                employee_id,
                full_name,
                email,
                created_at
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch employee {employee_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(employee)
    }
}
