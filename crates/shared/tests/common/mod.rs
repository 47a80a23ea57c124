#![allow(dead_code)]

use async_trait::async_trait;
use shared::{
    abstract_trait::{
        card::repository::{
            command::{CardCommandRepositoryTrait, DynCardCommandRepository},
            query::{CardQueryRepositoryTrait, DynCardQueryRepository},
        },
        employee::repository::query::{DynEmployeeQueryRepository, EmployeeQueryRepositoryTrait},
        generator::{CardDetailsGeneratorTrait, DynCardDetailsGenerator},
        hashing::{DynHashing, HashingTrait},
        purchase::repository::{
            command::{DynPurchaseCommandRepository, PurchaseCommandRepositoryTrait},
            query::{DynPurchaseQueryRepository, PurchaseQueryRepositoryTrait},
        },
        recharge::repository::{
            command::{DynRechargeCommandRepository, RechargeCommandRepositoryTrait},
            query::{DynRechargeQueryRepository, RechargeQueryRepositoryTrait},
        },
    },
    domain::requests::{
        card::{CardDraft, CardType, CreateCardRequest, FindCardByDetails},
        purchase::CreatePurchaseRequest,
        recharge::CreateRechargeRequest,
    },
    domain::responses::CardResponse,
    errors::{RepositoryError, ServiceError},
    model::{
        card::CardModel, employee::EmployeeModel, purchase::PurchaseModel,
        recharge::RechargeModel,
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
use shared::abstract_trait::card::service::command::CardCommandServiceTrait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI32, Ordering},
};
use uuid::Uuid;

pub const EXPIRED: &str = "01/20";

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: Mutex<Vec<EmployeeModel>>,
}

impl InMemoryEmployeeRepository {
    pub fn push(&self, employee_id: i32, full_name: &str, email: &str) {
        self.employees.lock().unwrap().push(EmployeeModel {
            employee_id,
            full_name: full_name.to_string(),
            email: email.to_string(),
            created_at: None,
        });
    }
}

#[async_trait]
impl EmployeeQueryRepositoryTrait for InMemoryEmployeeRepository {
    async fn find_by_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<EmployeeModel>, RepositoryError> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|employee| employee.employee_id == employee_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryCardRepository {
    cards: Mutex<Vec<CardModel>>,
    next_id: AtomicI32,
}

impl InMemoryCardRepository {
    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn stored(&self, card_id: i32) -> Option<CardModel> {
        self.cards
            .lock()
            .unwrap()
            .iter()
            .find(|card| card.card_id == card_id)
            .cloned()
    }

    /// Rewrites a card's expiration date so tests can age cards on demand.
    pub fn set_expiration(&self, card_id: i32, value: &str) {
        let mut cards = self.cards.lock().unwrap();
        if let Some(card) = cards.iter_mut().find(|card| card.card_id == card_id) {
            card.expiration_date = value.to_string();
        }
    }
}

#[async_trait]
impl CardQueryRepositoryTrait for InMemoryCardRepository {
    async fn find_by_id(&self, card_id: i32) -> Result<Option<CardModel>, RepositoryError> {
        Ok(self.stored(card_id))
    }

    async fn find_by_details(
        &self,
        req: &FindCardByDetails,
    ) -> Result<Option<CardModel>, RepositoryError> {
        Ok(self
            .cards
            .lock()
            .unwrap()
            .iter()
            .find(|card| {
                card.card_number == req.card_number
                    && card.cardholder_name == req.cardholder_name
                    && card.expiration_date == req.expiration_date
            })
            .cloned())
    }

    async fn find_by_type_and_employee(
        &self,
        card_type: CardType,
        employee_id: i32,
    ) -> Result<Option<CardModel>, RepositoryError> {
        Ok(self
            .cards
            .lock()
            .unwrap()
            .iter()
            .find(|card| {
                card.card_type == card_type.as_str() && card.employee_id == employee_id
            })
            .cloned())
    }
}

#[async_trait]
impl CardCommandRepositoryTrait for InMemoryCardRepository {
    async fn create(
        &self,
        draft: &CardDraft,
        security_code_hash: &str,
    ) -> Result<CardModel, RepositoryError> {
        let card = CardModel {
            card_id: self.next_id(),
            employee_id: draft.employee_id,
            card_number: draft.card_number.clone(),
            cardholder_name: draft.cardholder_name.clone(),
            security_code: security_code_hash.to_string(),
            expiration_date: draft.expiration_date.clone(),
            password: None,
            is_virtual: draft.is_virtual,
            is_blocked: draft.is_blocked,
            card_type: draft.card_type.as_str().to_string(),
            created_at: None,
            updated_at: None,
        };

        self.cards.lock().unwrap().push(card.clone());
        Ok(card)
    }

    async fn set_password(
        &self,
        card_id: i32,
        password_hash: &str,
    ) -> Result<CardModel, RepositoryError> {
        let mut cards = self.cards.lock().unwrap();
        let card = cards
            .iter_mut()
            .find(|card| card.card_id == card_id)
            .ok_or(RepositoryError::NotFound)?;

        card.password = Some(password_hash.to_string());
        Ok(card.clone())
    }
}

#[derive(Default)]
pub struct InMemoryRechargeRepository {
    rows: Mutex<Vec<RechargeModel>>,
    next_id: AtomicI32,
}

#[async_trait]
impl RechargeQueryRepositoryTrait for InMemoryRechargeRepository {
    async fn find_by_card_id(&self, card_id: i32) -> Result<Vec<RechargeModel>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.card_id == card_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RechargeCommandRepositoryTrait for InMemoryRechargeRepository {
    async fn create(&self, req: &CreateRechargeRequest) -> Result<RechargeModel, RepositoryError> {
        let recharge = RechargeModel {
            recharge_id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            recharge_no: Uuid::new_v4(),
            card_id: req.card_id,
            amount: req.amount,
            created_at: None,
        };

        self.rows.lock().unwrap().push(recharge.clone());
        Ok(recharge)
    }
}

#[derive(Default)]
pub struct InMemoryPurchaseRepository {
    rows: Mutex<Vec<PurchaseModel>>,
    next_id: AtomicI32,
}

#[async_trait]
impl PurchaseQueryRepositoryTrait for InMemoryPurchaseRepository {
    async fn find_by_card_id(&self, card_id: i32) -> Result<Vec<PurchaseModel>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.card_id == card_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PurchaseCommandRepositoryTrait for InMemoryPurchaseRepository {
    async fn create(&self, req: &CreatePurchaseRequest) -> Result<PurchaseModel, RepositoryError> {
        let purchase = PurchaseModel {
            purchase_id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            purchase_no: Uuid::new_v4(),
            card_id: req.card_id,
            amount: req.amount,
            created_at: None,
        };

        self.rows.lock().unwrap().push(purchase.clone());
        Ok(purchase)
    }
}

/// Transparent stand-in for bcrypt: digests are recognizable prefixed
/// strings, comparison is plain equality.
pub struct PlainHasher;

#[async_trait]
impl HashingTrait for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        Ok(format!("hashed::{password}"))
    }

    async fn compare_password(&self, hashed: &str, password: &str) -> Result<bool, ServiceError> {
        Ok(hashed == format!("hashed::{password}"))
    }
}

/// Deterministic generator: sequential card numbers, fixed security code.
#[derive(Default)]
pub struct SequenceGenerator {
    counter: AtomicI32,
}

pub const TEST_SECURITY_CODE: &str = "123";

impl CardDetailsGeneratorTrait for SequenceGenerator {
    fn card_number(&self) -> anyhow::Result<String> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("5{n:015}"))
    }

    fn security_code(&self) -> String {
        TEST_SECURITY_CODE.to_string()
    }
}

pub struct TestContext {
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub cards: Arc<InMemoryCardRepository>,
    pub recharges: Arc<InMemoryRechargeRepository>,
    pub purchases: Arc<InMemoryPurchaseRepository>,
    pub card_command: CardCommandService,
    pub card_query: CardQueryService,
    pub card_balance: CardBalanceService,
    pub recharge_command: RechargeCommandService,
    pub recharge_query: RechargeQueryService,
    pub purchase_command: PurchaseCommandService,
    pub purchase_query: PurchaseQueryService,
}

pub fn setup() -> TestContext {
    let employees = Arc::new(InMemoryEmployeeRepository::default());
    let cards = Arc::new(InMemoryCardRepository::default());
    let recharges = Arc::new(InMemoryRechargeRepository::default());
    let purchases = Arc::new(InMemoryPurchaseRepository::default());

    employees.push(1, "Ana Maria Souza Oliveira", "ana.oliveira@corp.example");
    employees.push(2, "Ana Souza", "ana.souza@corp.example");

    let employee_query: DynEmployeeQueryRepository = employees.clone();
    let card_query_repo: DynCardQueryRepository = cards.clone();
    let card_command_repo: DynCardCommandRepository = cards.clone();
    let recharge_query_repo: DynRechargeQueryRepository = recharges.clone();
    let recharge_command_repo: DynRechargeCommandRepository = recharges.clone();
    let purchase_query_repo: DynPurchaseQueryRepository = purchases.clone();
    let purchase_command_repo: DynPurchaseCommandRepository = purchases.clone();
    let hashing: DynHashing = Arc::new(PlainHasher);
    let generator: DynCardDetailsGenerator = Arc::new(SequenceGenerator::default());

    let card_command = CardCommandService::new(CardCommandServiceDeps {
        employee_query,
        query: card_query_repo.clone(),
        command: card_command_repo,
        hashing: hashing.clone(),
        generator,
    });

    let card_query = CardQueryService::new(card_query_repo.clone());

    let card_balance = CardBalanceService::new(CardBalanceServiceDeps {
        query: card_query_repo.clone(),
        recharge_query: recharge_query_repo.clone(),
        purchase_query: purchase_query_repo.clone(),
    });

    let recharge_command =
        RechargeCommandService::new(card_query_repo.clone(), recharge_command_repo);
    let recharge_query =
        RechargeQueryService::new(card_query_repo.clone(), recharge_query_repo.clone());

    let purchase_command = PurchaseCommandService::new(PurchaseCommandServiceDeps {
        card_query: card_query_repo.clone(),
        recharge_query: recharge_query_repo,
        query: purchase_query_repo.clone(),
        command: purchase_command_repo,
        hashing,
    });
    let purchase_query = PurchaseQueryService::new(card_query_repo, purchase_query_repo);

    TestContext {
        employees,
        cards,
        recharges,
        purchases,
        card_command,
        card_query,
        card_balance,
        recharge_command,
        recharge_query,
        purchase_command,
        purchase_query,
    }
}

/// Builds and persists a card for the employee, returning the stored
/// response and the draft (whose plaintext security code activation needs).
pub async fn issue_card(
    ctx: &TestContext,
    employee_id: i32,
    card_type: CardType,
) -> (CardResponse, CardDraft) {
    let draft = ctx
        .card_command
        .build_card_data(&CreateCardRequest {
            employee_id,
            card_type,
        })
        .await
        .expect("draft should build");

    let created = ctx
        .card_command
        .create(&draft)
        .await
        .expect("card should persist");

    (created.data, draft)
}
