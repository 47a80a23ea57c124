use crate::{
    domain::responses::{ApiResponse, PurchaseResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseQueryService = Arc<dyn PurchaseQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseQueryServiceTrait {
    async fn find_by_card_id(
        &self,
        card_id: i32,
    ) -> Result<ApiResponse<Vec<PurchaseResponse>>, ServiceError>;
}
