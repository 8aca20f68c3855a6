//! Accounts Module
//!
//! User accounts with bcrypt password hashes and signed session tokens.

mod password;
mod store;
mod token;

pub use password::{hash_password, verify_password};
pub use store::{Account, AccountStore, NewAccount};
pub use token::{Claims, TokenIssuer};
