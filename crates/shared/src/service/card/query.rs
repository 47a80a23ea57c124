use crate::{
    abstract_trait::card::{
        repository::query::DynCardQueryRepository, service::query::CardQueryServiceTrait,
    },
    domain::{
        requests::card::{CardType, FindCardByDetails},
        responses::{ApiResponse, CardResponse},
    },
    errors::{ServiceError, format_validation_errors},
    model::card::CardModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct CardQueryService {
    pub query: DynCardQueryRepository,
}

impl CardQueryService {
    pub fn new(query: DynCardQueryRepository) -> Self {
        Self { query }
    }

    fn found(card: CardModel) -> ApiResponse<CardResponse> {
        ApiResponse {
            status: "success".to_string(),
            message: "Card fetched successfully".to_string(),
            data: CardResponse::from(card),
        }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    async fn find_by_id(&self, card_id: i32) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!("🔍 Fetching card by id={card_id}");

        match self.query.find_by_id(card_id).await {
            Ok(Some(card)) => Ok(Self::found(card)),
            Ok(None) => Err(ServiceError::NotFound("Card".to_string())),
            Err(e) => {
                error!("💥 Failed to fetch card {card_id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_details(
        &self,
        req: &FindCardByDetails,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!("🔍 Fetching card by details");

        match self.query.find_by_details(req).await {
            Ok(Some(card)) => Ok(Self::found(card)),
            Ok(None) => Err(ServiceError::NotFound("Card".to_string())),
            Err(e) => {
                error!("💥 Failed to fetch card by details: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_type_and_employee(
        &self,
        card_type: CardType,
        employee_id: i32,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!("🔍 Fetching {card_type} card for employee_id={employee_id}");

        match self
            .query
            .find_by_type_and_employee(card_type, employee_id)
            .await
        {
            Ok(Some(card)) => Ok(Self::found(card)),
            Ok(None) => Err(ServiceError::NotFound("Card".to_string())),
            Err(e) => {
                error!(
                    "💥 Failed to fetch {card_type} card for employee {employee_id}: {e:?}"
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
