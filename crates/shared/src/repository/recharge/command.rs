use crate::{
    abstract_trait::recharge::repository::command::RechargeCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::recharge::CreateRechargeRequest,
    errors::RepositoryError, model::recharge::RechargeModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct RechargeCommandRepository {
    db: ConnectionPool,
}

impl RechargeCommandRepository {
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
impl RechargeCommandRepositoryTrait for RechargeCommandRepository {
    async fn create(&self, req: &CreateRechargeRequest) -> Result<RechargeModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let recharge = sqlx::query_as::<_, RechargeModel>(
            r#"
            INSERT INTO recharges (recharge_no, card_id, amount, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING
                recharge_id,
                recharge_no,
                card_id,
                amount,
                created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.card_id)
        .bind(req.amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::ForeignKey("recharge references a missing card".to_string())
            }
            _ => {
                error!("❌ Failed to create recharge for card {}: {e:?}", req.card_id);
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(recharge)
    }
}
