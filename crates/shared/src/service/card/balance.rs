use crate::{
    abstract_trait::{
        card::{
            repository::query::DynCardQueryRepository, service::balance::CardBalanceServiceTrait,
        },
        purchase::repository::query::DynPurchaseQueryRepository,
        recharge::repository::query::DynRechargeQueryRepository,
    },
    domain::responses::{ApiResponse, CardBalanceResponse},
    errors::ServiceError,
    model::{purchase::PurchaseModel, recharge::RechargeModel},
    service::card::guard,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Running balance over the two ledgers, starting from zero. Both lists may
/// legitimately be empty.
pub fn ledger_balance(recharges: &[RechargeModel], purchases: &[PurchaseModel]) -> i64 {
    let credited: i64 = recharges.iter().map(|recharge| recharge.amount).sum();
    let debited: i64 = purchases.iter().map(|purchase| purchase.amount).sum();

    credited - debited
}

pub struct CardBalanceService {
    pub query: DynCardQueryRepository,
    pub recharge_query: DynRechargeQueryRepository,
    pub purchase_query: DynPurchaseQueryRepository,
}

pub struct CardBalanceServiceDeps {
    pub query: DynCardQueryRepository,
    pub recharge_query: DynRechargeQueryRepository,
    pub purchase_query: DynPurchaseQueryRepository,
}

impl CardBalanceService {
    pub fn new(deps: CardBalanceServiceDeps) -> Self {
        let CardBalanceServiceDeps {
            query,
            recharge_query,
            purchase_query,
        } = deps;

        Self {
            query,
            recharge_query,
            purchase_query,
        }
    }
}

#[async_trait]
impl CardBalanceServiceTrait for CardBalanceService {
    async fn calculate_balance(
        &self,
        card_id: i32,
    ) -> Result<ApiResponse<CardBalanceResponse>, ServiceError> {
        info!("🧮 Calculating balance for card_id={card_id}");

        let card = guard::ensure_card_exists(&self.query, card_id).await?;

        // Two independent reads, no snapshot: a concurrent recharge or
        // purchase between them can show through transiently.
        let recharges = match self.recharge_query.find_by_card_id(card.card_id).await {
            Ok(recharges) => recharges,
            Err(e) => {
                error!("💥 Failed to fetch recharges for card {card_id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        let purchases = match self.purchase_query.find_by_card_id(card.card_id).await {
            Ok(purchases) => purchases,
            Err(e) => {
                error!("💥 Failed to fetch purchases for card {card_id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        let balance = ledger_balance(&recharges, &purchases);

        info!(
            "✅ Balance for card {card_id}: {balance} ({} recharges, {} purchases)",
            recharges.len(),
            purchases.len()
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Balance calculated successfully".to_string(),
            data: CardBalanceResponse {
                balance,
                transactions: purchases.into_iter().map(Into::into).collect(),
                recharges: recharges.into_iter().map(Into::into).collect(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn recharge(amount: i64) -> RechargeModel {
        RechargeModel {
            recharge_id: 1,
            recharge_no: Uuid::new_v4(),
            card_id: 1,
            amount,
            created_at: None,
        }
    }

    fn purchase(amount: i64) -> PurchaseModel {
        PurchaseModel {
            purchase_id: 1,
            purchase_no: Uuid::new_v4(),
            card_id: 1,
            amount,
            created_at: None,
        }
    }

    #[test]
    fn sums_credits_and_subtracts_debits() {
        let recharges = vec![recharge(100), recharge(50)];
        let purchases = vec![purchase(30)];

        assert_eq!(ledger_balance(&recharges, &purchases), 120);
    }

    #[test]
    fn empty_ledgers_balance_to_zero() {
        assert_eq!(ledger_balance(&[], &[]), 0);
    }

    #[test]
    fn balance_can_go_negative() {
        let recharges = vec![recharge(10)];
        let purchases = vec![purchase(25)];

        assert_eq!(ledger_balance(&recharges, &purchases), -15);
    }
}
