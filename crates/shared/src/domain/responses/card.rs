use crate::model::card::CardModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PurchaseResponse, RechargeResponse};

/// Card as exposed to clients. Neither the security-code hash nor the
/// password hash ever crosses this boundary; activation state is exposed as
/// the derived `is_active` flag instead.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CardResponse {
    pub id: i32,
    pub employee_id: i32,
    pub card_number: String,
    pub cardholder_name: String,
    pub expiration_date: String,
    pub is_virtual: bool,
    pub is_blocked: bool,
    pub is_active: bool,
    pub card_type: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        Self {
            id: model.card_id,
            employee_id: model.employee_id,
            card_number: model.card_number,
            cardholder_name: model.cardholder_name,
            expiration_date: model.expiration_date,
            is_virtual: model.is_virtual,
            is_blocked: model.is_blocked,
            is_active: model.password.is_some(),
            card_type: model.card_type,
            created_at: model.created_at.map(|dt| dt.to_string()),
            updated_at: model.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CardBalanceResponse {
    pub balance: i64,
    pub transactions: Vec<PurchaseResponse>,
    pub recharges: Vec<RechargeResponse>,
}
