use crate::model::purchase::PurchaseModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PurchaseResponse {
    pub id: i32,
    pub purchase_no: String,
    pub card_id: i32,
    pub amount: i64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

impl From<PurchaseModel> for PurchaseResponse {
    fn from(model: PurchaseModel) -> Self {
        Self {
            id: model.purchase_id,
            purchase_no: model.purchase_no.to_string(),
            card_id: model.card_id,
            amount: model.amount,
            created_at: model.created_at.map(|dt| dt.to_string()),
        }
    }
}
