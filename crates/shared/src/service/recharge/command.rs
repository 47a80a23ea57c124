use crate::{
    abstract_trait::{
        card::repository::query::DynCardQueryRepository,
        recharge::{
            repository::command::DynRechargeCommandRepository,
            service::command::RechargeCommandServiceTrait,
        },
    },
    domain::{
        requests::recharge::CreateRechargeRequest,
        responses::{ApiResponse, RechargeResponse},
    },
    errors::{ServiceError, format_validation_errors},
    service::card::guard,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct RechargeCommandService {
    pub card_query: DynCardQueryRepository,
    pub command: DynRechargeCommandRepository,
}

impl RechargeCommandService {
    pub fn new(card_query: DynCardQueryRepository, command: DynRechargeCommandRepository) -> Self {
        Self {
            card_query,
            command,
        }
    }
}

#[async_trait]
impl RechargeCommandServiceTrait for RechargeCommandService {
    async fn create(
        &self,
        req: &CreateRechargeRequest,
    ) -> Result<ApiResponse<RechargeResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!(
            "💰 Recharging card_id={} with amount={}",
            req.card_id, req.amount
        );

        let card = guard::ensure_card_exists(&self.card_query, req.card_id).await?;
        guard::ensure_card_is_not_expired(&card)?;

        let recharge = match self.command.create(req).await {
            Ok(recharge) => recharge,
            Err(e) => {
                error!("💥 Failed to persist recharge for card {}: {e:?}", req.card_id);
                return Err(ServiceError::Repo(e));
            }
        };

        info!(
            "✅ Recharge {} recorded for card {}",
            recharge.recharge_no, recharge.card_id
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Recharge recorded successfully".to_string(),
            data: RechargeResponse::from(recharge),
        })
    }
}
