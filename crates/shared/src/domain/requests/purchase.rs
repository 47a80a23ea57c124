use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct CreatePurchaseRequest {
    #[validate(range(min = 1, message = "Card id must be positive"))]
    pub card_id: i32,

    #[validate(length(min = 4, max = 4, message = "Password must be 4 digits"))]
    pub password: String,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,
}

impl fmt::Debug for CreatePurchaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatePurchaseRequest")
            .field("card_id", &self.card_id)
            .field("password", &"<redacted>")
            .field("amount", &self.amount)
            .finish()
    }
}
