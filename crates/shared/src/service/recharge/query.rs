use crate::{
    abstract_trait::{
        card::repository::query::DynCardQueryRepository,
        recharge::{
            repository::query::DynRechargeQueryRepository,
            service::query::RechargeQueryServiceTrait,
        },
    },
    domain::responses::{ApiResponse, RechargeResponse},
    errors::ServiceError,
    service::card::guard,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct RechargeQueryService {
    pub card_query: DynCardQueryRepository,
    pub query: DynRechargeQueryRepository,
}

impl RechargeQueryService {
    pub fn new(card_query: DynCardQueryRepository, query: DynRechargeQueryRepository) -> Self {
        Self { card_query, query }
    }
}

#[async_trait]
impl RechargeQueryServiceTrait for RechargeQueryService {
    async fn find_by_card_id(
        &self,
        card_id: i32,
    ) -> Result<ApiResponse<Vec<RechargeResponse>>, ServiceError> {
        info!("🔍 Fetching recharges for card_id={card_id}");

        let card = guard::ensure_card_exists(&self.card_query, card_id).await?;

        let recharges = match self.query.find_by_card_id(card.card_id).await {
            Ok(recharges) => recharges,
            Err(e) => {
                error!("💥 Failed to fetch recharges for card {card_id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        info!(
            "✅ Fetched {} recharges for card {card_id}",
            recharges.len()
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Recharges fetched successfully".to_string(),
            data: recharges.into_iter().map(Into::into).collect(),
        })
    }
}
