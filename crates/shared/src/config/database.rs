use anyhow::{Context, Result};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

const CREATE_EMPLOYEES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    employee_id SERIAL PRIMARY KEY,
    full_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    created_at TIMESTAMP DEFAULT NOW()
)
"#;

const CREATE_CARDS: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    card_id SERIAL PRIMARY KEY,
    employee_id INT NOT NULL REFERENCES employees (employee_id),
    card_number TEXT NOT NULL UNIQUE,
    cardholder_name TEXT NOT NULL,
    security_code TEXT NOT NULL,
    expiration_date TEXT NOT NULL,
    password TEXT,
    is_virtual BOOLEAN NOT NULL DEFAULT FALSE,
    is_blocked BOOLEAN NOT NULL DEFAULT FALSE,
    card_type TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT NOW(),
    updated_at TIMESTAMP DEFAULT NOW(),
    UNIQUE (employee_id, card_type)
)
"#;

const CREATE_RECHARGES: &str = r#"
CREATE TABLE IF NOT EXISTS recharges (
    recharge_id SERIAL PRIMARY KEY,
    recharge_no UUID NOT NULL UNIQUE,
    card_id INT NOT NULL REFERENCES cards (card_id),
    amount BIGINT NOT NULL CHECK (amount > 0),
    created_at TIMESTAMP DEFAULT NOW()
)
"#;

const CREATE_PURCHASES: &str = r#"
CREATE TABLE IF NOT EXISTS purchases (
    purchase_id SERIAL PRIMARY KEY,
    purchase_no UUID NOT NULL UNIQUE,
    card_id INT NOT NULL REFERENCES cards (card_id),
    amount BIGINT NOT NULL CHECK (amount > 0),
    created_at TIMESTAMP DEFAULT NOW()
)
"#;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(database_url: &str, run_migrations: bool) -> Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;

        if run_migrations {
            Self::run_migrations(&pool).await?;
        }

        Ok(pool)
    }

    async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
        info!("Running schema migrations");

        for statement in [
            CREATE_EMPLOYEES,
            CREATE_CARDS,
            CREATE_RECHARGES,
            CREATE_PURCHASES,
        ] {
            sqlx::query(statement)
                .execute(pool)
                .await
                .context("Failed to run schema migration")?;
        }

        Ok(())
    }
}
