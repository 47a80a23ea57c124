use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeModel {
    pub employee_id: i32,
    pub full_name: String,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}
