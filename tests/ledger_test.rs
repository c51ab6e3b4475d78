/// Demo ledger tests over the file-backed store.
use mankat_client::{DemoLedger, FileStore, LedgerError, TRANSFER_CEILING};
use tempfile::TempDir;

fn ledger_in(dir: &TempDir) -> DemoLedger<FileStore> {
    DemoLedger::new(FileStore::new(dir.path()))
}

fn total(ledger: &DemoLedger<FileStore>) -> f64 {
    let banks: f64 = ledger
        .bank_accounts()
        .iter()
        .map(|a| a.current_balance)
        .sum();
    banks + ledger.wallet().balance
}

#[test]
fn state_survives_reopening_the_store() {
    let dir = TempDir::new().unwrap();

    {
        let ledger = ledger_in(&dir);
        assert_eq!(ledger.wallet().balance, 0.0);
        ledger.transfer_to_wallet("demo-bos", 500.0).unwrap();
    }

    // a fresh store over the same directory sees the mutated state
    let reopened = ledger_in(&dir);
    assert_eq!(reopened.wallet().balance, 500.0);
    let accounts = reopened.bank_accounts();
    assert_eq!(accounts[0].current_balance, 4500.0);
    assert_eq!(accounts[1].current_balance, 7500.0);
}

#[test]
fn funds_are_conserved_across_transfers() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);
    let before = total(&ledger);

    ledger.transfer_to_wallet("demo-bos", 1000.0).unwrap();
    ledger.transfer_to_wallet("demo-barclays", 750.0).unwrap();
    ledger.transfer_to_bank("demo-bos", 300.0).unwrap();
    ledger.transfer_to_wallet("demo-bos", 42.5).unwrap();

    assert_eq!(total(&ledger), before);
}

#[test]
fn bank_side_insufficiency_needs_a_drained_account() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    // the ceiling caps each transfer, so drain demo-bos in slices
    for _ in 0..5 {
        ledger
            .transfer_to_wallet("demo-bos", TRANSFER_CEILING)
            .unwrap();
    }
    assert_eq!(ledger.bank_accounts()[0].current_balance, 0.0);
    let wallet_before = ledger.wallet().balance;

    let err = ledger.transfer_to_wallet("demo-bos", 50.0).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));

    // failed transfer left both sides untouched
    assert_eq!(ledger.bank_accounts()[0].current_balance, 0.0);
    assert_eq!(ledger.wallet().balance, wallet_before);
}

#[test]
fn manager_surfaces_store_operations() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let wallet = ledger.adjust_wallet_balance(-10.0).unwrap();
    assert_eq!(wallet.balance, 0.0);

    let account = ledger.adjust_bank_balance("demo-barclays", -500.0).unwrap();
    assert_eq!(account.current_balance, 7000.0);

    assert!(matches!(
        ledger.adjust_bank_balance("unknown", 1.0),
        Err(LedgerError::NotFound(_))
    ));

    let mut wallet = ledger.wallet();
    wallet.balance = 123.0;
    ledger.set_wallet(&wallet).unwrap();
    assert_eq!(ledger.wallet().balance, 123.0);
}
