use crate::{
    abstract_trait::{
        card::repository::query::DynCardQueryRepository,
        purchase::{
            repository::query::DynPurchaseQueryRepository,
            service::query::PurchaseQueryServiceTrait,
        },
    },
    domain::responses::{ApiResponse, PurchaseResponse},
    errors::ServiceError,
    service::card::guard,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct PurchaseQueryService {
    pub card_query: DynCardQueryRepository,
    pub query: DynPurchaseQueryRepository,
}

impl PurchaseQueryService {
    pub fn new(card_query: DynCardQueryRepository, query: DynPurchaseQueryRepository) -> Self {
        Self { card_query, query }
    }
}

#[async_trait]
impl PurchaseQueryServiceTrait for PurchaseQueryService {
    async fn find_by_card_id(
        &self,
        card_id: i32,
    ) -> Result<ApiResponse<Vec<PurchaseResponse>>, ServiceError> {
        info!("🔍 Fetching purchases for card_id={card_id}");

        let card = guard::ensure_card_exists(&self.card_query, card_id).await?;

        let purchases = match self.query.find_by_card_id(card.card_id).await {
            Ok(purchases) => purchases,
            Err(e) => {
                error!("💥 Failed to fetch purchases for card {card_id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        info!(
            "✅ Fetched {} purchases for card {card_id}",
            purchases.len()
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Purchases fetched successfully".to_string(),
            data: purchases.into_iter().map(Into::into).collect(),
        })
    }
}
