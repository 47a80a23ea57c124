use crate::{
    abstract_trait::generator::CardDetailsGeneratorTrait,
    utils::{random_card_number, random_security_code},
};
use anyhow::Result;

/// rand-backed implementation of the generator capability.
#[derive(Debug, Clone, Default)]
pub struct CardDetailsGenerator;

impl CardDetailsGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CardDetailsGeneratorTrait for CardDetailsGenerator {
    fn card_number(&self) -> Result<String> {
        random_card_number()
    }

    fn security_code(&self) -> String {
        random_security_code()
    }
}
