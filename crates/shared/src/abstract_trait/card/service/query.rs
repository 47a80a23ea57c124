use crate::{
    domain::{
        requests::card::{CardType, FindCardByDetails},
        responses::{ApiResponse, CardResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryService = Arc<dyn CardQueryServiceTrait + Send + Sync>;

/// Boundary-facing lookups. Unlike the repository trait, absence here is
/// reported as `NotFound("Card")`.
#[async_trait]
pub trait CardQueryServiceTrait {
    async fn find_by_id(&self, card_id: i32) -> Result<ApiResponse<CardResponse>, ServiceError>;

    async fn find_by_details(
        &self,
        req: &FindCardByDetails,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;

    async fn find_by_type_and_employee(
        &self,
        card_type: CardType,
        employee_id: i32,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;
}
