use anyhow::Result;
use std::sync::Arc;

pub type DynCardDetailsGenerator = Arc<dyn CardDetailsGeneratorTrait + Send + Sync>;

/// Opaque generator for card numbers and security codes, injected so the
/// card service stays deterministic under test.
pub trait CardDetailsGeneratorTrait {
    fn card_number(&self) -> Result<String>;
    fn security_code(&self) -> String;
}
