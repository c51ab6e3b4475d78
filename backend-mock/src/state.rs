/// In-memory bank state behind the mock endpoints.
///
/// Mirrors the real backend's controller rules: accounts belong to users,
/// bearer tokens gate every account endpoint, money operations must be
/// positive, withdrawals need sufficient funds, transfers record an OUT
/// and an IN row.
use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::types::{AccountResponse, TransactionResponse};

#[derive(Debug)]
pub enum StateError {
    Unauthorized(String),
    NotFound(String),
    Forbidden(String),
    BadRequest(String),
    Conflict(String),
}

struct User {
    id: i64,
    email: String,
    full_name: String,
    password: String,
}

struct Account {
    id: i64,
    owner_name: String,
    balance: f64,
    user_id: i64,
}

struct TransactionRow {
    id: i64,
    account_id: i64,
    kind: &'static str,
    amount: f64,
    created_at: chrono::DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    accounts: Vec<Account>,
    transactions: Vec<TransactionRow>,
    tokens: HashMap<String, i64>,
    next_user_id: i64,
    next_account_id: i64,
    next_transaction_id: i64,
}

pub struct BankState {
    inner: Mutex<Inner>,
}

impl BankState {
    /// Empty bank with no users or accounts.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Bank pre-seeded with the demo user (`demo@mankat.dev` / `password`)
    /// owning two accounts, mirroring the dev database tests ran against.
    pub fn seeded() -> Self {
        let state = Self::new();
        {
            let mut inner = state.inner.lock().unwrap();
            let user_id = inner.add_user("demo@mankat.dev", "Demo User", "password");
            inner.add_account("Demo User", user_id, 300.0);
            inner.add_account("Demo User", user_id, 120.5);
        }
        state
    }

    pub fn register(
        &self,
        email: &str,
        full_name: &str,
        password: &str,
    ) -> Result<(i64, String, String), StateError> {
        if email.trim().is_empty() || full_name.trim().is_empty() || password.trim().is_empty() {
            return Err(StateError::BadRequest(
                "email, fullName and password are required".to_string(),
            ));
        }
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.email == email) {
            return Err(StateError::Conflict("Email already in use".to_string()));
        }
        let user_id = inner.add_user(email, full_name, password);
        // every new user starts with one default account
        inner.add_account(full_name, user_id, 0.0);
        Ok((user_id, email.to_string(), full_name.to_string()))
    }

    pub fn login(&self, email: &str, password: &str) -> Result<(i64, String), StateError> {
        let mut inner = self.inner.lock().unwrap();
        let user_id = inner
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .map(|u| u.id)
            .ok_or_else(|| StateError::Unauthorized("Invalid credentials".to_string()))?;

        let token = Uuid::new_v4().to_string();
        inner.tokens.insert(token.clone(), user_id);
        Ok((user_id, token))
    }

    pub fn logout(&self, token: &str) -> Result<(), StateError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .tokens
            .remove(token)
            .map(|_| ())
            .ok_or_else(|| StateError::Unauthorized("Unknown or revoked token".to_string()))
    }

    pub fn authenticate(&self, token: &str) -> Result<i64, StateError> {
        let inner = self.inner.lock().unwrap();
        inner
            .tokens
            .get(token)
            .copied()
            .ok_or_else(|| StateError::Unauthorized("Unknown or revoked token".to_string()))
    }

    pub fn list_accounts(&self, user_id: i64) -> Vec<AccountResponse> {
        let inner = self.inner.lock().unwrap();
        inner
            .accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(account_response)
            .collect()
    }

    pub fn get_account(&self, user_id: i64, id: i64) -> Result<AccountResponse, StateError> {
        let inner = self.inner.lock().unwrap();
        inner.owned_account(user_id, id).map(account_response)
    }

    pub fn transactions(
        &self,
        user_id: i64,
        id: i64,
    ) -> Result<Vec<TransactionResponse>, StateError> {
        let inner = self.inner.lock().unwrap();
        inner.owned_account(user_id, id)?;
        Ok(inner
            .transactions
            .iter()
            .filter(|t| t.account_id == id)
            .map(|t| TransactionResponse {
                id: t.id,
                kind: t.kind.to_string(),
                amount: t.amount,
                created_at: t.created_at,
            })
            .collect())
    }

    pub fn deposit(
        &self,
        user_id: i64,
        id: i64,
        amount: f64,
    ) -> Result<AccountResponse, StateError> {
        let mut inner = self.inner.lock().unwrap();
        inner.owned_account(user_id, id)?;
        require_positive(amount)?;

        let account = inner.account_mut(id)?;
        account.balance += amount;
        let response = account_response(&*account);
        inner.record(id, "DEPOSIT", amount);
        Ok(response)
    }

    pub fn withdraw(
        &self,
        user_id: i64,
        id: i64,
        amount: f64,
    ) -> Result<AccountResponse, StateError> {
        let mut inner = self.inner.lock().unwrap();
        inner.owned_account(user_id, id)?;
        require_positive(amount)?;

        let account = inner.account_mut(id)?;
        if account.balance < amount {
            return Err(StateError::BadRequest("Insufficient funds".to_string()));
        }
        account.balance -= amount;
        let response = account_response(&*account);
        inner.record(id, "WITHDRAW", amount);
        Ok(response)
    }

    pub fn transfer(
        &self,
        user_id: i64,
        from_id: i64,
        to_id: i64,
        amount: f64,
    ) -> Result<(), StateError> {
        let mut inner = self.inner.lock().unwrap();
        require_positive(amount)?;
        if from_id == to_id {
            return Err(StateError::BadRequest(
                "Cannot transfer to the same account".to_string(),
            ));
        }

        inner.owned_account(user_id, from_id)?;
        if !inner.accounts.iter().any(|a| a.id == to_id) {
            return Err(StateError::NotFound(format!(
                "To account not found: {}",
                to_id
            )));
        }

        let from = inner.account_mut(from_id)?;
        if from.balance < amount {
            return Err(StateError::BadRequest("Insufficient funds".to_string()));
        }
        from.balance -= amount;
        inner.account_mut(to_id)?.balance += amount;

        inner.record(from_id, "TRANSFER_OUT", amount);
        inner.record(to_id, "TRANSFER_IN", amount);
        Ok(())
    }
}

impl Default for BankState {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn add_user(&mut self, email: &str, full_name: &str, password: &str) -> i64 {
        self.next_user_id += 1;
        let id = self.next_user_id;
        self.users.push(User {
            id,
            email: email.to_string(),
            full_name: full_name.to_string(),
            password: password.to_string(),
        });
        id
    }

    fn add_account(&mut self, owner_name: &str, user_id: i64, balance: f64) -> i64 {
        self.next_account_id += 1;
        let id = self.next_account_id;
        self.accounts.push(Account {
            id,
            owner_name: owner_name.to_string(),
            balance,
            user_id,
        });
        id
    }

    fn owned_account(&self, user_id: i64, id: i64) -> Result<&Account, StateError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| StateError::NotFound(format!("Account not found: {}", id)))?;
        if account.user_id != user_id {
            return Err(StateError::Forbidden("Forbidden".to_string()));
        }
        Ok(account)
    }

    fn account_mut(&mut self, id: i64) -> Result<&mut Account, StateError> {
        self.accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StateError::NotFound(format!("Account not found: {}", id)))
    }

    fn record(&mut self, account_id: i64, kind: &'static str, amount: f64) {
        self.next_transaction_id += 1;
        self.transactions.push(TransactionRow {
            id: self.next_transaction_id,
            account_id,
            kind,
            amount,
            created_at: Utc::now(),
        });
    }
}

fn account_response(account: &Account) -> AccountResponse {
    AccountResponse {
        id: account.id,
        owner_name: account.owner_name.clone(),
        balance: account.balance,
        user_id: Some(account.user_id),
    }
}

fn require_positive(amount: f64) -> Result<(), StateError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(StateError::BadRequest(
            "Amount must be positive".to_string(),
        ));
    }
    Ok(())
}
