//! Account Store Module
//!
//! In-memory user accounts keyed by id, with a unique email index.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{BookshelfError, Result};

// == Account ==
/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    /// bcrypt hash, never the plain password
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Name shown on the user's reviews.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Fields of an account about to be created.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
}

// == Account Store ==
/// Registered accounts.
#[derive(Debug)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
    by_email: HashMap<String, String>,
    bcrypt_cost: u32,
}

impl AccountStore {
    /// Creates an empty store hashing passwords at `bcrypt_cost`.
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            accounts: HashMap::new(),
            by_email: HashMap::new(),
            bcrypt_cost,
        }
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    pub fn email_taken(&self, email: &str) -> bool {
        self.by_email.contains_key(email)
    }

    // == Insert ==
    /// Stores a new account; fails if the email is already registered.
    pub fn insert(&mut self, new: NewAccount) -> Result<Account> {
        if self.email_taken(&new.email) {
            return Err(BookshelfError::InvalidRequest(
                "Email already exists".to_string(),
            ));
        }

        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            surname: new.surname,
            email: new.email,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };
        self.by_email
            .insert(account.email.clone(), account.id.clone());
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.by_email
            .get(email)
            .and_then(|id| self.accounts.get(id))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
