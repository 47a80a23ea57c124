use crate::{
    domain::requests::recharge::CreateRechargeRequest, errors::RepositoryError,
    model::recharge::RechargeModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRechargeCommandRepository = Arc<dyn RechargeCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RechargeCommandRepositoryTrait {
    async fn create(&self, req: &CreateRechargeRequest) -> Result<RechargeModel, RepositoryError>;
}
