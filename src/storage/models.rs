use serde::{Deserialize, Serialize};

/// Every demo record is denominated in this currency.
pub const CURRENCY: &str = "GBP";

/// The single aggregate cash balance shown as the user's main account.
///
/// Field names on the wire stay camelCase so stored JSON matches what the
/// browser build wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub currency: String,
}

impl Wallet {
    /// Seed value written on first read.
    pub fn seed() -> Self {
        Self {
            id: "wallet".to_string(),
            name: "MankatBank".to_string(),
            balance: 0.0,
            currency: CURRENCY.to_string(),
        }
    }
}

/// A fake externally-linked bank balance, independent of the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub bank_name: String,
    pub masked: String,
    pub current_balance: f64,
    pub currency: String,
}

/// The two fixed demo banks seeded on first read. Insertion order is
/// display order.
pub fn seed_accounts() -> Vec<BankAccount> {
    vec![
        BankAccount {
            id: "demo-bos".to_string(),
            bank_name: "Fake Bank of Scotland".to_string(),
            masked: "5678".to_string(),
            current_balance: 5000.0,
            currency: CURRENCY.to_string(),
        },
        BankAccount {
            id: "demo-barclays".to_string(),
            bank_name: "Fake Barclays".to_string(),
            masked: "4242".to_string(),
            current_balance: 7500.0,
            currency: CURRENCY.to_string(),
        },
    ]
}

/// Cached profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_seed_is_empty_gbp() {
        let wallet = Wallet::seed();
        assert_eq!(wallet.id, "wallet");
        assert_eq!(wallet.balance, 0.0);
        assert_eq!(wallet.currency, "GBP");
    }

    #[test]
    fn seed_accounts_keep_browser_wire_shape() {
        let accounts = seed_accounts();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "demo-bos");
        assert_eq!(accounts[1].id, "demo-barclays");

        let json = serde_json::to_value(&accounts[0]).unwrap();
        assert_eq!(json["bankName"], "Fake Bank of Scotland");
        assert_eq!(json["currentBalance"], 5000.0);
    }
}
