use crate::{
    abstract_trait::card::repository::command::CardCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::card::CardDraft,
    errors::RepositoryError,
    model::card::CardModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
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
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn create(
        &self,
        draft: &CardDraft,
        security_code_hash: &str,
    ) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(
            r#"
            INSERT INTO cards (
                employee_id,
                card_number,
                cardholder_name,
                security_code,
                expiration_date,
                is_virtual,
                is_blocked,
                card_type,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
            RETURNING
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
            "#,
        )
        .bind(draft.employee_id)
        .bind(&draft.card_number)
        .bind(&draft.cardholder_name)
        .bind(security_code_hash)
        .bind(&draft.expiration_date)
        .bind(draft.is_virtual)
        .bind(draft.is_blocked)
        .bind(draft.card_type.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::AlreadyExists(
                "a card of this type already exists for the employee".to_string(),
            ),
            _ => {
                error!("❌ Failed to create card: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(card)
    }

    async fn set_password(
        &self,
        card_id: i32,
        password_hash: &str,
    ) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(
            r#"
            UPDATE cards
            SET
                password = $2,
                updated_at = NOW()
            WHERE card_id = $1
            RETURNING
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
            "#,
        )
        .bind(card_id)
        .bind(password_hash)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to set password on card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        card.ok_or(RepositoryError::NotFound)
    }
}
