use crate::{
    abstract_trait::purchase::repository::query::PurchaseQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::purchase::PurchaseModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct PurchaseQueryRepository {
    db: ConnectionPool,
}

impl PurchaseQueryRepository {
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
impl PurchaseQueryRepositoryTrait for PurchaseQueryRepository {
    async fn find_by_card_id(&self, card_id: i32) -> Result<Vec<PurchaseModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let purchases = sqlx::query_as::<_, PurchaseModel>(
            r#"
            SELECT
                purchase_id,
                purchase_no,
                card_id,
                amount,
                created_at
            FROM purchases
            WHERE card_id = $1
            ORDER BY purchase_id
            "#,
        )
        .bind(card_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch purchases for card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(purchases)
    }
}
