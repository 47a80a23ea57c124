use crate::{
    abstract_trait::card::repository::query::CardQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::card::{CardType, FindCardByDetails},
    errors::RepositoryError,
    model::card::CardModel,
};
use async_trait::async_trait;
use tracing::error;

const CARD_COLUMNS: &str = r#"
    card_id,
    employee_id,
    card_number,
    cardholder_name,
    security_code,
    expiration_date,
    password,
    is_virtual,
    is_blocked,
    card_type,
    created_at,
    updated_at
"#;

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
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
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_by_id(&self, card_id: i32) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE card_id = $1"
        ))
        .bind(card_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }

    async fn find_by_details(
        &self,
        req: &FindCardByDetails,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(&format!(
            r#"
            SELECT {CARD_COLUMNS} FROM cards
            WHERE card_number = $1
              AND cardholder_name = $2
              AND expiration_date = $3
            "#
        ))
        .bind(&req.card_number)
        .bind(&req.cardholder_name)
        .bind(&req.expiration_date)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card by details: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }

    async fn find_by_type_and_employee(
        &self,
        card_type: CardType,
        employee_id: i32,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(&format!(
            r#"
            SELECT {CARD_COLUMNS} FROM cards
            WHERE card_type = $1
              AND employee_id = $2
            "#
        ))
        .bind(card_type.as_str())
        .bind(employee_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card for employee {employee_id} type {card_type}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }
}
