use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Debit entry in the purchase ledger. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PurchaseModel {
    pub purchase_id: i32,
    pub purchase_no: Uuid,
    pub card_id: i32,
    pub amount: i64,
    pub created_at: Option<NaiveDateTime>,
}
