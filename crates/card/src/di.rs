use shared::{
    abstract_trait::{
        card::{
            repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
            service::{
                balance::DynCardBalanceService, command::DynCardCommandService,
                query::DynCardQueryService,
            },
        },
        employee::repository::query::DynEmployeeQueryRepository,
        generator::DynCardDetailsGenerator,
        hashing::DynHashing,
        purchase::{
            repository::{
                command::DynPurchaseCommandRepository, query::DynPurchaseQueryRepository,
            },
            service::{command::DynPurchaseCommandService, query::DynPurchaseQueryService},
        },
        recharge::{
            repository::{
                command::DynRechargeCommandRepository, query::DynRechargeQueryRepository,
            },
            service::{command::DynRechargeCommandService, query::DynRechargeQueryService},
        },
    },
    config::ConnectionPool,
    repository::{
        card::{command::CardCommandRepository, query::CardQueryRepository},
        employee::query::EmployeeQueryRepository,
        purchase::{command::PurchaseCommandRepository, query::PurchaseQueryRepository},
        recharge::{command::RechargeCommandRepository, query::RechargeQueryRepository},
    },
    service::{
        card::{
            balance::{CardBalanceService, CardBalanceServiceDeps},
            command::{CardCommandService, CardCommandServiceDeps},
            query::CardQueryService,
        },
        purchase::{
            command::{PurchaseCommandService, PurchaseCommandServiceDeps},
            query::PurchaseQueryService,
        },
        recharge::{command::RechargeCommandService, query::RechargeQueryService},
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_query: DynCardQueryService,
    pub card_command: DynCardCommandService,
    pub card_balance: DynCardBalanceService,
    pub recharge_query: DynRechargeQueryService,
    pub recharge_command: DynRechargeCommandService,
    pub purchase_query: DynPurchaseQueryService,
    pub purchase_command: DynPurchaseCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("card_query", &"DynCardQueryService")
            .field("card_command", &"DynCardCommandService")
            .field("card_balance", &"DynCardBalanceService")
            .field("recharge_query", &"DynRechargeQueryService")
            .field("recharge_command", &"DynRechargeCommandService")
            .field("purchase_query", &"DynPurchaseQueryService")
            .field("purchase_command", &"DynPurchaseCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub generator: DynCardDetailsGenerator,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            generator,
        } = deps;

        let employee_query =
            Arc::new(EmployeeQueryRepository::new(pool.clone())) as DynEmployeeQueryRepository;

        let card_query_repo =
            Arc::new(CardQueryRepository::new(pool.clone())) as DynCardQueryRepository;
        let card_command_repo =
            Arc::new(CardCommandRepository::new(pool.clone())) as DynCardCommandRepository;

        let recharge_query_repo =
            Arc::new(RechargeQueryRepository::new(pool.clone())) as DynRechargeQueryRepository;
        let recharge_command_repo =
            Arc::new(RechargeCommandRepository::new(pool.clone())) as DynRechargeCommandRepository;

        let purchase_query_repo =
            Arc::new(PurchaseQueryRepository::new(pool.clone())) as DynPurchaseQueryRepository;
        let purchase_command_repo =
            Arc::new(PurchaseCommandRepository::new(pool)) as DynPurchaseCommandRepository;

        let card_query =
            Arc::new(CardQueryService::new(card_query_repo.clone())) as DynCardQueryService;

        let card_command = Arc::new(CardCommandService::new(CardCommandServiceDeps {
            employee_query,
            query: card_query_repo.clone(),
            command: card_command_repo,
            hashing: hash.clone(),
            generator,
        })) as DynCardCommandService;

        let card_balance = Arc::new(CardBalanceService::new(CardBalanceServiceDeps {
            query: card_query_repo.clone(),
            recharge_query: recharge_query_repo.clone(),
            purchase_query: purchase_query_repo.clone(),
        })) as DynCardBalanceService;

        let recharge_query = Arc::new(RechargeQueryService::new(
            card_query_repo.clone(),
            recharge_query_repo.clone(),
        )) as DynRechargeQueryService;

        let recharge_command = Arc::new(RechargeCommandService::new(
            card_query_repo.clone(),
            recharge_command_repo,
        )) as DynRechargeCommandService;

        let purchase_query = Arc::new(PurchaseQueryService::new(
            card_query_repo.clone(),
            purchase_query_repo.clone(),
        )) as DynPurchaseQueryService;

        let purchase_command = Arc::new(PurchaseCommandService::new(PurchaseCommandServiceDeps {
            card_query: card_query_repo,
            recharge_query: recharge_query_repo,
            query: purchase_query_repo,
            command: purchase_command_repo,
            hashing: hash,
        })) as DynPurchaseCommandService;

        Self {
            card_query,
            card_command,
            card_balance,
            recharge_query,
            recharge_command,
            purchase_query,
            purchase_command,
        }
    }
}
