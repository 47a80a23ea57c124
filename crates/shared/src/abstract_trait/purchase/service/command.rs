use crate::{
    domain::{
        requests::purchase::CreatePurchaseRequest,
        responses::{ApiResponse, PurchaseResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseCommandService = Arc<dyn PurchaseCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseCommandServiceTrait {
    /// Spend authorization: card must exist, be unexpired, the password must
    /// verify and the running balance must cover the amount.
    async fn create(
        &self,
        req: &CreatePurchaseRequest,
    ) -> Result<ApiResponse<PurchaseResponse>, ServiceError>;
}
