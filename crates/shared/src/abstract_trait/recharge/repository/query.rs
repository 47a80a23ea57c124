use crate::{errors::RepositoryError, model::recharge::RechargeModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRechargeQueryRepository = Arc<dyn RechargeQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RechargeQueryRepositoryTrait {
    /// Full ledger scan for one card; legitimately empty for a fresh card.
    async fn find_by_card_id(&self, card_id: i32) -> Result<Vec<RechargeModel>, RepositoryError>;
}
