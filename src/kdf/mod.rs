mod pbkdf2;

pub use pbkdf2::{des_key_from_password, pbkdf2};
