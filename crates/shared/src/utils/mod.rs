mod cardholder;
mod expiration;
mod logs;
mod mark;
mod random_card_number;

pub use self::cardholder::cardholder_name;
pub use self::expiration::{expiration_date, months_until_expiration};
pub use self::logs::Logger;
pub use self::mark::mask_card_number;
pub use self::random_card_number::{random_card_number, random_security_code};
