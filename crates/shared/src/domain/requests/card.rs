use crate::utils::mask_card_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Spending category a card is issued for. An employee holds at most one
/// card per category.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Groceries,
    Restaurants,
    Transport,
    Education,
    Health,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Groceries => "groceries",
            CardType::Restaurants => "restaurants",
            CardType::Transport => "transport",
            CardType::Education => "education",
            CardType::Health => "health",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct CreateCardRequest {
    #[validate(range(min = 1, message = "Employee id must be positive"))]
    pub employee_id: i32,

    pub card_type: CardType,
}

/// Unsaved card data produced by `build_card_data`. Carries the plaintext
/// security code until `create` hashes it; Debug output redacts the secret
/// and masks the number so neither can leak through logs.
#[derive(Clone)]
pub struct CardDraft {
    pub employee_id: i32,
    pub card_number: String,
    pub cardholder_name: String,
    pub security_code: String,
    pub expiration_date: String,
    pub is_virtual: bool,
    pub is_blocked: bool,
    pub card_type: CardType,
}

impl fmt::Debug for CardDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDraft")
            .field("employee_id", &self.employee_id)
            .field("card_number", &mask_card_number(&self.card_number))
            .field("cardholder_name", &self.cardholder_name)
            .field("security_code", &"<redacted>")
            .field("expiration_date", &self.expiration_date)
            .field("is_virtual", &self.is_virtual)
            .field("is_blocked", &self.is_blocked)
            .field("card_type", &self.card_type)
            .finish()
    }
}

#[derive(Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct ActivateCardRequest {
    #[validate(range(min = 1, message = "Card id must be positive"))]
    pub card_id: i32,

    #[validate(length(min = 3, max = 3, message = "Security code must be 3 digits"))]
    pub security_code: String,

    #[validate(length(min = 4, max = 4, message = "Password must be 4 digits"))]
    pub password: String,
}

impl fmt::Debug for ActivateCardRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivateCardRequest")
            .field("card_id", &self.card_id)
            .field("security_code", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize, Serialize, Validate, IntoParams, Clone)]
pub struct FindCardByDetails {
    #[validate(length(min = 1, message = "Card number is required"))]
    pub card_number: String,

    #[validate(length(min = 1, message = "Cardholder name is required"))]
    pub cardholder_name: String,

    #[validate(length(min = 1, message = "Expiration date is required"))]
    pub expiration_date: String,
}
