use crate::{errors::RepositoryError, model::purchase::PurchaseModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseQueryRepository = Arc<dyn PurchaseQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseQueryRepositoryTrait {
    /// Full ledger scan for one card; legitimately empty for a fresh card.
    async fn find_by_card_id(&self, card_id: i32) -> Result<Vec<PurchaseModel>, RepositoryError>;
}
