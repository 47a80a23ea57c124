use crate::{
    domain::responses::{ApiResponse, CardBalanceResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardBalanceService = Arc<dyn CardBalanceServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardBalanceServiceTrait {
    /// Running balance for a card: recharges minus purchases, with both
    /// ledgers returned alongside.
    async fn calculate_balance(
        &self,
        card_id: i32,
    ) -> Result<ApiResponse<CardBalanceResponse>, ServiceError>;
}
