use crate::{
    domain::requests::card::{CardType, FindCardByDetails},
    errors::RepositoryError,
    model::card::CardModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;

/// Card lookups. Absence is a value here, not a failure; callers decide
/// whether a missing card is an error.
#[async_trait]
pub trait CardQueryRepositoryTrait {
    async fn find_by_id(&self, card_id: i32) -> Result<Option<CardModel>, RepositoryError>;

    async fn find_by_details(
        &self,
        req: &FindCardByDetails,
    ) -> Result<Option<CardModel>, RepositoryError>;

    async fn find_by_type_and_employee(
        &self,
        card_type: CardType,
        employee_id: i32,
    ) -> Result<Option<CardModel>, RepositoryError>;
}
