use crate::{
    domain::responses::{ApiResponse, RechargeResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRechargeQueryService = Arc<dyn RechargeQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait RechargeQueryServiceTrait {
    async fn find_by_card_id(
        &self,
        card_id: i32,
    ) -> Result<ApiResponse<Vec<RechargeResponse>>, ServiceError>;
}
