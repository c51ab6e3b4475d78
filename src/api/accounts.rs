/// Account reads and money operations against the backend.
use crate::api::client::ApiClient;
use crate::api::model::{
    self, AccountDetail, AccountsSummary, TransactionView,
};
use crate::api::types::{AccountRecord, MoneyRequest, TransactionRecord, TransferRequest};
use crate::error::ApiError;
use crate::storage::KeyValue;

impl<S: KeyValue> ApiClient<S> {
    /// Fetch all accounts and fold them into the overview summary.
    pub async fn accounts_summary(&self) -> Result<AccountsSummary, ApiError> {
        let records: Vec<AccountRecord> = self.get_json("/accounts").await?;
        let accounts: Vec<_> = records.iter().map(model::account_view).collect();
        let total_balance = accounts.iter().map(|a| a.current_balance).sum();
        Ok(AccountsSummary {
            total_accounts: accounts.len(),
            total_balance,
            accounts,
        })
    }

    /// The never-crash variant used directly by pages: any failure is
    /// logged and rendered as the zero-value summary, so backend
    /// unavailability never takes the overview page down.
    pub async fn accounts_summary_or_empty(&self) -> AccountsSummary {
        match self.accounts_summary().await {
            Ok(summary) => summary,
            Err(e) => {
                log::error!("Failed to fetch accounts summary: {}", e);
                AccountsSummary::default()
            }
        }
    }

    /// Fetch one account (by its composite `acc-<id>` reference) together
    /// with its transactions, newest first.
    ///
    /// The transactions endpoint is optional on older backends; its
    /// failure degrades to an empty listing rather than failing the call.
    pub async fn account_detail(&self, reference: &str) -> Result<AccountDetail, ApiError> {
        let id = model::parse_reference(reference)?;

        let record: AccountRecord = self.get_json(&format!("/accounts/{}", id)).await?;
        let transactions = self.transactions_or_empty(id).await;

        Ok(AccountDetail {
            account: model::account_view(&record),
            transactions,
        })
    }

    /// Swallow-policy wrapper mirroring `accounts_summary_or_empty`.
    pub async fn account_detail_or_empty(&self, reference: &str) -> Option<AccountDetail> {
        match self.account_detail(reference).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                log::error!("Failed to fetch account {}: {}", reference, e);
                None
            }
        }
    }

    async fn transactions_or_empty(&self, id: i64) -> Vec<TransactionView> {
        match self
            .get_json::<Vec<TransactionRecord>>(&format!("/accounts/{}/transactions", id))
            .await
        {
            Ok(records) => model::transaction_views(records),
            Err(e) => {
                log::warn!("No transactions for account {}: {}", id, e);
                Vec::new()
            }
        }
    }

    /// Submit a deposit. Validation is the backend's responsibility; the
    /// updated account record is returned as the backend saved it.
    pub async fn deposit(&self, id: i64, amount: f64) -> Result<AccountRecord, ApiError> {
        self.post_json(&format!("/accounts/{}/deposit", id), &MoneyRequest { amount })
            .await
    }

    pub async fn withdraw(&self, id: i64, amount: f64) -> Result<AccountRecord, ApiError> {
        self.post_json(
            &format!("/accounts/{}/withdraw", id),
            &MoneyRequest { amount },
        )
        .await
    }

    /// Move money between two backend accounts.
    pub async fn transfer(&self, from_id: i64, to_id: i64, amount: f64) -> Result<(), ApiError> {
        self.post_json_no_response(
            "/accounts/transfer",
            &TransferRequest {
                from_id,
                to_id,
                amount,
            },
        )
        .await
    }
}
