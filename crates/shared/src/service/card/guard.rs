//! Guard predicates composing the validation chains of the card, recharge
//! and purchase flows. Each guard raises exactly one typed failure; the
//! chains run them in a fixed order (existence, state, secret) and
//! short-circuit on the first failure.

use crate::{
    abstract_trait::{
        card::repository::query::DynCardQueryRepository,
        employee::repository::query::DynEmployeeQueryRepository, hashing::DynHashing,
    },
    errors::ServiceError,
    model::{card::CardModel, employee::EmployeeModel},
    utils::months_until_expiration,
};
use chrono::Utc;
use tracing::warn;

pub async fn ensure_employee_exists(
    query: &DynEmployeeQueryRepository,
    employee_id: i32,
) -> Result<EmployeeModel, ServiceError> {
    match query.find_by_id(employee_id).await? {
        Some(employee) => Ok(employee),
        None => {
            warn!("👤 Employee {employee_id} not found");
            Err(ServiceError::NotFound("Employee".to_string()))
        }
    }
}

pub async fn ensure_card_exists(
    query: &DynCardQueryRepository,
    card_id: i32,
) -> Result<CardModel, ServiceError> {
    match query.find_by_id(card_id).await? {
        Some(card) => Ok(card),
        None => {
            warn!("🔍 Card {card_id} not found");
            Err(ServiceError::NotFound("Card".to_string()))
        }
    }
}

pub fn ensure_card_is_not_active(card: &CardModel) -> Result<(), ServiceError> {
    if card.is_active() {
        warn!("⚡ Card {} already has a password set", card.card_id);
        return Err(ServiceError::Conflict("Password".to_string()));
    }

    Ok(())
}

pub fn ensure_card_is_not_expired(card: &CardModel) -> Result<(), ServiceError> {
    let today = Utc::now().date_naive();

    let months_left = months_until_expiration(&card.expiration_date, today).ok_or_else(|| {
        ServiceError::Custom(format!(
            "card {} carries an unparseable expiration date '{}'",
            card.card_id, card.expiration_date
        ))
    })?;

    if months_left < 0 {
        warn!(
            "⛔ Card {} expired {} months ago",
            card.card_id, -months_left
        );
        return Err(ServiceError::Forbidden("Card".to_string()));
    }

    Ok(())
}

pub async fn ensure_security_code_matches(
    hashing: &DynHashing,
    card: &CardModel,
    security_code: &str,
) -> Result<(), ServiceError> {
    let valid = hashing
        .compare_password(&card.security_code, security_code)
        .await?;

    if !valid {
        warn!("🔐 Security code mismatch for card {}", card.card_id);
        return Err(ServiceError::Unauthorized("CVC".to_string()));
    }

    Ok(())
}

pub async fn ensure_password_matches(
    hashing: &DynHashing,
    card: &CardModel,
    password: &str,
) -> Result<(), ServiceError> {
    // A card that was never activated has no password and can never
    // authorize a spend.
    let Some(hashed) = card.password.as_deref() else {
        warn!("🔐 Card {} has no password set", card.card_id);
        return Err(ServiceError::Unauthorized("Password".to_string()));
    };

    let valid = hashing.compare_password(hashed, password).await?;

    if !valid {
        warn!("🔐 Password mismatch for card {}", card.card_id);
        return Err(ServiceError::Unauthorized("Password".to_string()));
    }

    Ok(())
}

pub fn ensure_sufficient_balance(balance: i64, amount: i64) -> Result<(), ServiceError> {
    if balance < amount {
        warn!("💸 Insufficient balance: have {balance}, need {amount}");
        return Err(ServiceError::Forbidden("Balance".to_string()));
    }

    Ok(())
}
