use crate::{
    domain::{
        requests::card::{ActivateCardRequest, CardDraft, CreateCardRequest},
        responses::{ApiResponse, CardResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandService = Arc<dyn CardCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandServiceTrait {
    /// Assembles an unsaved draft: resolves the employee, enforces the
    /// one-card-per-type rule, generates number/security code, derives the
    /// cardholder name and the five-year expiration date.
    async fn build_card_data(&self, req: &CreateCardRequest) -> Result<CardDraft, ServiceError>;

    /// Hashes the draft's security code and persists it.
    async fn create(&self, draft: &CardDraft) -> Result<ApiResponse<CardResponse>, ServiceError>;

    /// One-time activation: sets the password after the ordered validation
    /// chain (exists, not active, not expired, security code matches).
    async fn activate(
        &self,
        req: &ActivateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;
}
