use crate::{
    abstract_trait::{
        card::{
            repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
            service::command::CardCommandServiceTrait,
        },
        employee::repository::query::DynEmployeeQueryRepository,
        generator::DynCardDetailsGenerator,
        hashing::DynHashing,
    },
    domain::{
        requests::card::{ActivateCardRequest, CardDraft, CreateCardRequest},
        responses::{ApiResponse, CardResponse},
    },
    errors::{ServiceError, format_validation_errors},
    service::card::guard,
    utils::{cardholder_name, expiration_date, mask_card_number},
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};
use validator::Validate;

pub struct CardCommandService {
    pub employee_query: DynEmployeeQueryRepository,
    pub query: DynCardQueryRepository,
    pub command: DynCardCommandRepository,
    pub hashing: DynHashing,
    pub generator: DynCardDetailsGenerator,
}

pub struct CardCommandServiceDeps {
    pub employee_query: DynEmployeeQueryRepository,
    pub query: DynCardQueryRepository,
    pub command: DynCardCommandRepository,
    pub hashing: DynHashing,
    pub generator: DynCardDetailsGenerator,
}

impl CardCommandService {
    pub fn new(deps: CardCommandServiceDeps) -> Self {
        let CardCommandServiceDeps {
            employee_query,
            query,
            command,
            hashing,
            generator,
        } = deps;

        Self {
            employee_query,
            query,
            command,
            hashing,
            generator,
        }
    }
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn build_card_data(&self, req: &CreateCardRequest) -> Result<CardDraft, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!(
            "🆕 Building card data for employee_id={} type={}",
            req.employee_id, req.card_type
        );

        let employee = guard::ensure_employee_exists(&self.employee_query, req.employee_id).await?;

        match self
            .query
            .find_by_type_and_employee(req.card_type, req.employee_id)
            .await
        {
            Ok(None) => {}
            Ok(Some(existing)) => {
                error!(
                    "💳 Employee {} already holds a {} card (card_id={})",
                    req.employee_id, req.card_type, existing.card_id
                );
                return Err(ServiceError::Conflict("Card".to_string()));
            }
            Err(e) => {
                error!(
                    "💳 Failed to check existing cards for employee {}: {e:?}",
                    req.employee_id
                );
                return Err(ServiceError::Repo(e));
            }
        }

        let card_number = self.generator.card_number().map_err(|e| {
            error!("💥 Failed to generate card number: {e:?}");
            ServiceError::InternalServerError("Failed to generate card number".to_string())
        })?;
        let security_code = self.generator.security_code();

        let expiration_date = expiration_date(Utc::now()).ok_or_else(|| {
            ServiceError::InternalServerError("Expiration date out of range".to_string())
        })?;

        let draft = CardDraft {
            employee_id: req.employee_id,
            card_number,
            cardholder_name: cardholder_name(&employee.full_name),
            security_code,
            expiration_date,
            is_virtual: false,
            is_blocked: false,
            card_type: req.card_type,
        };

        info!(
            "✅ Card data ready for employee_id={}: {}",
            req.employee_id,
            mask_card_number(&draft.card_number)
        );

        Ok(draft)
    }

    async fn create(&self, draft: &CardDraft) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!(
            "🆕 Creating card {} for employee_id={}",
            mask_card_number(&draft.card_number),
            draft.employee_id
        );

        // The plaintext security code stops here: only the digest is handed
        // to the repository.
        let security_code_hash = self.hashing.hash_password(&draft.security_code).await?;

        let card = match self.command.create(draft, &security_code_hash).await {
            Ok(card) => card,
            Err(e) => {
                error!(
                    "💥 Failed to persist card for employee_id {}: {e:?}",
                    draft.employee_id
                );
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Card created successfully with card_id={}", card.card_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Card created successfully".to_string(),
            data: CardResponse::from(card),
        })
    }

    async fn activate(
        &self,
        req: &ActivateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!("🔓 Activating card_id={}", req.card_id);

        // Fixed order: existence, state, expiry, secret. The first failure
        // wins, so a wrong code on an already-active card reports Conflict,
        // never Unauthorized.
        let card = guard::ensure_card_exists(&self.query, req.card_id).await?;
        guard::ensure_card_is_not_active(&card)?;
        guard::ensure_card_is_not_expired(&card)?;
        guard::ensure_security_code_matches(&self.hashing, &card, &req.security_code).await?;

        let password_hash = self.hashing.hash_password(&req.password).await?;

        let updated = match self.command.set_password(req.card_id, &password_hash).await {
            Ok(card) => card,
            Err(e) => {
                error!("💥 Failed to set password on card {}: {e:?}", req.card_id);
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Card {} activated", updated.card_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Card activated successfully".to_string(),
            data: CardResponse::from(updated),
        })
    }
}
