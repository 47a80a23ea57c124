use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct CreateRechargeRequest {
    #[validate(range(min = 1, message = "Card id must be positive"))]
    pub card_id: i32,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,
}
