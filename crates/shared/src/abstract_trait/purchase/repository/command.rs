use crate::{
    domain::requests::purchase::CreatePurchaseRequest, errors::RepositoryError,
    model::purchase::PurchaseModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseCommandRepository = Arc<dyn PurchaseCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseCommandRepositoryTrait {
    async fn create(&self, req: &CreatePurchaseRequest) -> Result<PurchaseModel, RepositoryError>;
}
