use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted card row. `security_code` and `password` hold bcrypt digests,
/// never plaintext; `password` is `None` until the card is activated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub card_id: i32,
    pub employee_id: i32,
    pub card_number: String,
    pub cardholder_name: String,
    pub security_code: String,
    pub expiration_date: String,
    pub password: Option<String>,
    pub is_virtual: bool,
    pub is_blocked: bool,
    pub card_type: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl CardModel {
    pub fn is_active(&self) -> bool {
        self.password.is_some()
    }
}
