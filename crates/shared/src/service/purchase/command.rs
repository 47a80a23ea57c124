use crate::{
    abstract_trait::{
        card::repository::query::DynCardQueryRepository,
        hashing::DynHashing,
        purchase::{
            repository::{command::DynPurchaseCommandRepository, query::DynPurchaseQueryRepository},
            service::command::PurchaseCommandServiceTrait,
        },
        recharge::repository::query::DynRechargeQueryRepository,
    },
    domain::{
        requests::purchase::CreatePurchaseRequest,
        responses::{ApiResponse, PurchaseResponse},
    },
    errors::{ServiceError, format_validation_errors},
    service::card::{balance::ledger_balance, guard},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct PurchaseCommandService {
    pub card_query: DynCardQueryRepository,
    pub recharge_query: DynRechargeQueryRepository,
    pub query: DynPurchaseQueryRepository,
    pub command: DynPurchaseCommandRepository,
    pub hashing: DynHashing,
}

pub struct PurchaseCommandServiceDeps {
    pub card_query: DynCardQueryRepository,
    pub recharge_query: DynRechargeQueryRepository,
    pub query: DynPurchaseQueryRepository,
    pub command: DynPurchaseCommandRepository,
    pub hashing: DynHashing,
}

impl PurchaseCommandService {
    pub fn new(deps: PurchaseCommandServiceDeps) -> Self {
        let PurchaseCommandServiceDeps {
            card_query,
            recharge_query,
            query,
            command,
            hashing,
        } = deps;

        Self {
            card_query,
            recharge_query,
            query,
            command,
            hashing,
        }
    }
}

#[async_trait]
impl PurchaseCommandServiceTrait for PurchaseCommandService {
    async fn create(
        &self,
        req: &CreatePurchaseRequest,
    ) -> Result<ApiResponse<PurchaseResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!(
            "🛒 Authorizing purchase of {} on card_id={}",
            req.amount, req.card_id
        );

        // Same ordering contract as activation: existence, state, secret,
        // then the balance policy check.
        let card = guard::ensure_card_exists(&self.card_query, req.card_id).await?;
        guard::ensure_card_is_not_expired(&card)?;
        guard::ensure_password_matches(&self.hashing, &card, &req.password).await?;

        let recharges = match self.recharge_query.find_by_card_id(card.card_id).await {
            Ok(recharges) => recharges,
            Err(e) => {
                error!("💥 Failed to fetch recharges for card {}: {e:?}", req.card_id);
                return Err(ServiceError::Repo(e));
            }
        };

        let purchases = match self.query.find_by_card_id(card.card_id).await {
            Ok(purchases) => purchases,
            Err(e) => {
                error!("💥 Failed to fetch purchases for card {}: {e:?}", req.card_id);
                return Err(ServiceError::Repo(e));
            }
        };

        guard::ensure_sufficient_balance(ledger_balance(&recharges, &purchases), req.amount)?;

        let purchase = match self.command.create(req).await {
            Ok(purchase) => purchase,
            Err(e) => {
                error!("💥 Failed to persist purchase for card {}: {e:?}", req.card_id);
                return Err(ServiceError::Repo(e));
            }
        };

        info!(
            "✅ Purchase {} recorded for card {}",
            purchase.purchase_no, purchase.card_id
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Purchase recorded successfully".to_string(),
            data: PurchaseResponse::from(purchase),
        })
    }
}
