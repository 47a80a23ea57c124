use crate::{
    abstract_trait::purchase::repository::command::PurchaseCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::purchase::CreatePurchaseRequest,
    errors::RepositoryError, model::purchase::PurchaseModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct PurchaseCommandRepository {
    db: ConnectionPool,
}

impl PurchaseCommandRepository {
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
impl PurchaseCommandRepositoryTrait for PurchaseCommandRepository {
    async fn create(&self, req: &CreatePurchaseRequest) -> Result<PurchaseModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let purchase = sqlx::query_as::<_, PurchaseModel>(
            r#"
            INSERT INTO purchases (purchase_no, card_id, amount, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING
                purchase_id,
                purchase_no,
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
                RepositoryError::ForeignKey("purchase references a missing card".to_string())
            }
            _ => {
                error!("❌ Failed to create purchase for card {}: {e:?}", req.card_id);
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(purchase)
    }
}
