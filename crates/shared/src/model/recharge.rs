use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Credit entry in the recharge ledger. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RechargeModel {
    pub recharge_id: i32,
    pub recharge_no: Uuid,
    pub card_id: i32,
    pub amount: i64,
    pub created_at: Option<NaiveDateTime>,
}
