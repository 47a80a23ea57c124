use crate::{
    domain::{
        requests::recharge::CreateRechargeRequest,
        responses::{ApiResponse, RechargeResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRechargeCommandService = Arc<dyn RechargeCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait RechargeCommandServiceTrait {
    /// Appends a credit to an existing, non-expired card's ledger.
    async fn create(
        &self,
        req: &CreateRechargeRequest,
    ) -> Result<ApiResponse<RechargeResponse>, ServiceError>;
}
