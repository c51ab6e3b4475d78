/// View models and the mapping layer from raw backend records.
///
/// The backend keeps accounts minimal (`id`, `ownerName`, `balance`); the
/// pages were written against a much richer account shape, so the adapter
/// derives the missing fields here: a zero-padded mask, the composite
/// `acc-<id>` reference, and fixed institution/type tags.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::types::{AccountRecord, TransactionRecord};
use crate::error::ApiError;

/// Prefix of the composite reference bridging numeric backend ids into the
/// string-keyed id convention the pages use.
pub const REFERENCE_PREFIX: &str = "acc-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: String,
    pub name: String,
    pub official_name: String,
    pub institution_id: String,
    pub mask: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub subtype: String,
    pub available_balance: f64,
    pub current_balance: f64,
    pub reference: String,
    pub shareable_id: String,
}

/// Whether a transaction moved money out of the account or into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Credit,
    Debit,
}

/// Transaction kind, classified once at the adapter boundary instead of
/// string-matching the free-text type everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    TransferIn,
    TransferOut,
    Other,
}

impl TransactionKind {
    /// Classify the backend's free-text type. The backend writes values
    /// like `DEPOSIT`, `WITHDRAW`, `TRANSFER_OUT`; substring matching also
    /// absorbs variants such as `WITHDRAWAL`.
    pub fn classify(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        if upper.contains("TRANSFER_OUT") {
            Self::TransferOut
        } else if upper.contains("TRANSFER_IN") {
            Self::TransferIn
        } else if upper.contains("WITHDRAW") {
            Self::Withdraw
        } else if upper.contains("DEPOSIT") {
            Self::Deposit
        } else {
            Self::Other
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::Withdraw | Self::TransferOut => Direction::Debit,
            Self::Deposit | Self::TransferIn | Self::Other => Direction::Credit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub payment_channel: String,
    pub category: String,
    pub direction: Direction,
}

/// What the accounts overview page renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsSummary {
    pub accounts: Vec<AccountView>,
    pub total_accounts: usize,
    pub total_balance: f64,
}

/// What the single-account page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetail {
    pub account: AccountView,
    pub transactions: Vec<TransactionView>,
}

/// Parse the numeric id out of a composite `acc-<id>` reference. A bare
/// numeric id is accepted too.
pub fn parse_reference(reference: &str) -> Result<i64, ApiError> {
    let digits = reference.strip_prefix(REFERENCE_PREFIX).unwrap_or(reference);
    digits
        .parse()
        .map_err(|_| ApiError::InvalidReference(reference.to_string()))
}

pub(crate) fn account_view(raw: &AccountRecord) -> AccountView {
    let reference = format!("{}{}", REFERENCE_PREFIX, raw.id);
    AccountView {
        id: raw.id.to_string(),
        name: format!("{}'s Account", raw.owner_name),
        official_name: "MankatBank Account".to_string(),
        institution_id: "mankatbank".to_string(),
        mask: format!("{:04}", raw.id),
        account_type: "depository".to_string(),
        subtype: "checking".to_string(),
        available_balance: raw.balance,
        current_balance: raw.balance,
        shareable_id: reference.clone(),
        reference,
    }
}

pub(crate) fn transaction_view(raw: TransactionRecord) -> TransactionView {
    let raw_kind = raw.kind.unwrap_or_else(|| "Transaction".to_string());
    let kind = TransactionKind::classify(&raw_kind);
    TransactionView {
        id: raw
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: raw_kind.clone(),
        amount: raw.amount.unwrap_or(0.0),
        date: raw.created_at.unwrap_or_else(Utc::now),
        payment_channel: "internal".to_string(),
        category: raw_kind.to_lowercase(),
        direction: kind.direction(),
    }
}

/// Map and order a raw transaction listing, newest first. The ordering is
/// a post-condition of the adapter, not an assumption about the backend.
pub(crate) fn transaction_views(raw: Vec<TransactionRecord>) -> Vec<TransactionView> {
    let mut views: Vec<TransactionView> = raw.into_iter().map(transaction_view).collect();
    views.sort_by(|a, b| b.date.cmp(&a.date));
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn account_view_derives_mask_and_reference() {
        let view = account_view(&AccountRecord {
            id: 7,
            owner_name: "Ada".to_string(),
            balance: 120.5,
        });
        assert_eq!(view.id, "7");
        assert_eq!(view.mask, "0007");
        assert_eq!(view.reference, "acc-7");
        assert_eq!(view.shareable_id, "acc-7");
        assert_eq!(view.name, "Ada's Account");
        assert_eq!(view.account_type, "depository");
        assert_eq!(view.current_balance, 120.5);
        assert_eq!(view.available_balance, 120.5);
    }

    #[test]
    fn reference_parsing() {
        assert_eq!(parse_reference("acc-7").unwrap(), 7);
        assert_eq!(parse_reference("42").unwrap(), 42);
        assert!(matches!(
            parse_reference("not-a-ref"),
            Err(ApiError::InvalidReference(_))
        ));
        assert!(matches!(
            parse_reference("acc-"),
            Err(ApiError::InvalidReference(_))
        ));
    }

    #[test]
    fn classification_absorbs_free_text_variants() {
        assert_eq!(
            TransactionKind::classify("WITHDRAWAL"),
            TransactionKind::Withdraw
        );
        assert_eq!(
            TransactionKind::classify("TRANSFER_OUT"),
            TransactionKind::TransferOut
        );
        assert_eq!(
            TransactionKind::classify("TRANSFER_IN"),
            TransactionKind::TransferIn
        );
        assert_eq!(TransactionKind::classify("deposit"), TransactionKind::Deposit);
        assert_eq!(TransactionKind::classify("FEE"), TransactionKind::Other);

        assert_eq!(TransactionKind::Withdraw.direction(), Direction::Debit);
        assert_eq!(TransactionKind::TransferOut.direction(), Direction::Debit);
        assert_eq!(TransactionKind::Deposit.direction(), Direction::Credit);
        assert_eq!(TransactionKind::Other.direction(), Direction::Credit);
    }

    #[test]
    fn listing_is_reordered_newest_first() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        let views = transaction_views(vec![
            TransactionRecord {
                id: Some(1),
                kind: Some("WITHDRAWAL".to_string()),
                amount: Some(25.0),
                created_at: Some(t1),
            },
            TransactionRecord {
                id: Some(2),
                kind: Some("DEPOSIT".to_string()),
                amount: Some(100.0),
                created_at: Some(t2),
            },
        ]);

        assert_eq!(views[0].id, "2");
        assert_eq!(views[0].direction, Direction::Credit);
        assert_eq!(views[1].id, "1");
        assert_eq!(views[1].direction, Direction::Debit);
        assert_eq!(views[1].category, "withdrawal");
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let view = transaction_view(TransactionRecord::default());
        assert!(!view.id.is_empty());
        assert_eq!(view.name, "Transaction");
        assert_eq!(view.amount, 0.0);
        assert_eq!(view.category, "transaction");
        assert_eq!(view.direction, Direction::Credit);
        assert_eq!(view.payment_channel, "internal");
    }
}
