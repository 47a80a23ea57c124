use crate::{errors::RepositoryError, model::employee::EmployeeModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynEmployeeQueryRepository = Arc<dyn EmployeeQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait EmployeeQueryRepositoryTrait {
    async fn find_by_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<EmployeeModel>, RepositoryError>;
}
