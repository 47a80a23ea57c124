use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynHashing = Arc<dyn HashingTrait + Send + Sync>;

/// One-way hashing capability used for security codes and passwords. Secrets
/// only ever cross this seam as plaintext; everything stored or compared
/// beyond it is a digest.
#[async_trait]
pub trait HashingTrait {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError>;
    async fn compare_password(&self, hashed: &str, password: &str) -> Result<bool, ServiceError>;
}
