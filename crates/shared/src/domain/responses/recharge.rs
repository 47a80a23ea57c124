use crate::model::recharge::RechargeModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RechargeResponse {
    pub id: i32,
    pub recharge_no: String,
    pub card_id: i32,
    pub amount: i64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

impl From<RechargeModel> for RechargeResponse {
    fn from(model: RechargeModel) -> Self {
        Self {
            id: model.recharge_id,
            recharge_no: model.recharge_no.to_string(),
            card_id: model.card_id,
            amount: model.amount,
            created_at: model.created_at.map(|dt| dt.to_string()),
        }
    }
}
