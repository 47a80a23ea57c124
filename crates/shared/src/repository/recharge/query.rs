use crate::{
    abstract_trait::recharge::repository::query::RechargeQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::recharge::RechargeModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct RechargeQueryRepository {
    db: ConnectionPool,
}

impl RechargeQueryRepository {
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
impl RechargeQueryRepositoryTrait for RechargeQueryRepository {
    async fn find_by_card_id(&self, card_id: i32) -> Result<Vec<RechargeModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let recharges = sqlx::query_as::<_, RechargeModel>(
            r#"
            SELECT
                recharge_id,
                recharge_no,
                card_id,
                amount,
                created_at
            FROM recharges
            WHERE card_id = $1
            ORDER BY recharge_id
            "#,
        )
        .bind(card_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch recharges for card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(recharges)
    }
}
