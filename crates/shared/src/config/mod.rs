mod database;
mod generator;
mod hashing;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::generator::CardDetailsGenerator;
pub use self::hashing::Hashing;
pub use self::myconfig::Config;
