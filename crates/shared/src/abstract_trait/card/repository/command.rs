use crate::{
    domain::requests::card::CardDraft, errors::RepositoryError, model::card::CardModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

/// Card mutations. The security-code and password digests are produced by
/// the hashing capability before they reach this seam; plaintext never does.
#[async_trait]
pub trait CardCommandRepositoryTrait {
    async fn create(
        &self,
        draft: &CardDraft,
        security_code_hash: &str,
    ) -> Result<CardModel, RepositoryError>;

    async fn set_password(
        &self,
        card_id: i32,
        password_hash: &str,
    ) -> Result<CardModel, RepositoryError>;
}
