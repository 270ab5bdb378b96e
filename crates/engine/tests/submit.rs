use std::{
    io,
    sync::{Arc, Mutex},
    time::Duration,
};

use api_types::transaction::{TransactionRecord, TransactionType};
use engine::{
    CancelReason, EngineError, OutcomeState, PinState, SubmitPolicy, TransactionFlow,
    TransactionStore, TransactionSubmitter, forms,
};

#[derive(Clone, Default)]
struct RecordingStore {
    records: Arc<Mutex<Vec<TransactionRecord>>>,
    fail: bool,
}

impl RecordingStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn writes(&self) -> Vec<TransactionRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl TransactionStore for RecordingStore {
    type Error = io::Error;

    async fn create_transaction(&self, record: &TransactionRecord) -> Result<(), io::Error> {
        if self.fail {
            return Err(io::Error::other("connection refused"));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

fn submitter(store: RecordingStore) -> TransactionSubmitter<RecordingStore> {
    TransactionSubmitter::new(
        store,
        SubmitPolicy {
            latency: Duration::ZERO,
            ..SubmitPolicy::default()
        },
    )
}

fn airtime_flow(amount: &str) -> TransactionFlow {
    let mut flow = TransactionFlow::airtime();
    flow.set_field(forms::airtime::PHONE, "08012345678");
    flow.set_field(forms::airtime::NETWORK, "mtn");
    flow.set_field(forms::airtime::AMOUNT, amount);
    flow
}

fn transfer_flow(amount: &str) -> TransactionFlow {
    let mut flow = TransactionFlow::transfer();
    flow.set_field(forms::transfer::ACCOUNT_NUMBER, "0123456789");
    flow.set_field(forms::transfer::BANK_NAME, "Zenith");
    flow.set_field(forms::transfer::RECIPIENT_NAME, "Ada Obi");
    flow.set_field(forms::transfer::AMOUNT, amount);
    flow
}

fn enter_pin(flow: &mut TransactionFlow, pin: &str) {
    flow.request_confirmation().unwrap();
    for c in pin.chars() {
        flow.pin_mut().push_digit(c);
    }
}

#[tokio::test]
async fn airtime_purchase_succeeds_and_clears_form() {
    let store = RecordingStore::default();
    let submitter = submitter(store.clone());
    let mut flow = airtime_flow("5000");
    enter_pin(&mut flow, "1234");

    let receipt = submitter.submit(&mut flow).await.unwrap();

    let OutcomeState::Success(message) = flow.outcome() else {
        panic!("expected success, got {:?}", flow.outcome());
    };
    assert!(message.contains("₦5,000"));
    assert!(message.contains("+2348012345678"));
    assert!(flow.form().is_blank());
    assert!(!flow.is_processing());

    let writes = store.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], receipt.record);
    assert_eq!(writes[0].kind, TransactionType::Debit);
    assert_eq!(writes[0].amount, 5000);
    assert_eq!(writes[0].description, "Airtime purchase to +2348012345678 (MTN)");
}

#[tokio::test]
async fn amount_over_ceiling_never_reaches_the_store() {
    let store = RecordingStore::default();
    let submitter = submitter(store.clone());
    let mut flow = airtime_flow("150000");
    enter_pin(&mut flow, "1234");

    let err = submitter.submit(&mut flow).await.unwrap_err();

    assert!(matches!(err, EngineError::AmountOverCeiling { .. }));
    assert_eq!(
        flow.outcome(),
        &OutcomeState::Error("Amount exceeds single-transaction limit.".into())
    );
    assert_eq!(flow.form().get(forms::airtime::AMOUNT), "150000");
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn store_failure_keeps_fields() {
    let submitter = submitter(RecordingStore::failing());
    let mut flow = transfer_flow("2500");
    enter_pin(&mut flow, "123456");

    let err = submitter.submit(&mut flow).await.unwrap_err();

    assert!(matches!(err, EngineError::StoreWriteFailed(_)));
    assert_eq!(
        flow.outcome(),
        &OutcomeState::Error("Transaction failed to save.".into())
    );
    assert_eq!(flow.form().get(forms::transfer::RECIPIENT_NAME), "Ada Obi");
}

#[tokio::test]
async fn transfer_records_recipient_and_account() {
    let store = RecordingStore::default();
    let submitter = submitter(store.clone());
    let mut flow = transfer_flow("2500");
    enter_pin(&mut flow, "4321");

    let receipt = submitter.submit(&mut flow).await.unwrap();

    assert_eq!(
        receipt.message,
        "Transfer of ₦2,500 to Ada Obi (0123456789) was successful."
    );
    assert_eq!(store.writes()[0].description, "Transfer to Ada Obi (0123456789)");
}

#[tokio::test]
async fn escape_cancel_keeps_fields_and_skips_the_store() {
    let store = RecordingStore::default();
    let mut flow = airtime_flow("5000");
    enter_pin(&mut flow, "12");

    flow.cancel_pin(CancelReason::Escape);

    assert_eq!(flow.pin().state(), PinState::Cancelled(CancelReason::Escape));
    assert!(flow.pin().is_empty());
    assert_eq!(flow.form().get(forms::airtime::PHONE), "08012345678");
    assert!(flow.outcome().is_none());
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn pin_must_be_four_to_six_digits() {
    let store = RecordingStore::default();
    let submitter = submitter(store.clone());

    let mut flow = airtime_flow("5000");
    enter_pin(&mut flow, "123");
    let err = submitter.submit(&mut flow).await.unwrap_err();
    assert_eq!(err, EngineError::PinFormatInvalid);
    assert!(flow.pin().is_open());
    assert_eq!(flow.pin().error(), Some("Enter a 4-6 digit PIN."));
    assert!(store.writes().is_empty());

    assert!(!engine::pin::is_valid_pin("1234567"));

    for pin in ["1234", "123456"] {
        let mut flow = airtime_flow("5000");
        enter_pin(&mut flow, pin);
        submitter.submit(&mut flow).await.unwrap();
    }
    assert_eq!(store.writes().len(), 2);
}

#[tokio::test]
async fn every_empty_required_field_is_reported() {
    let mut flow = TransactionFlow::transfer();
    let err = flow.request_confirmation().unwrap_err();
    let EngineError::ValidationFailed(errors) = err else {
        panic!("expected validation failure");
    };
    let names: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        [
            forms::transfer::ACCOUNT_NUMBER,
            forms::transfer::BANK_NAME,
            forms::transfer::RECIPIENT_NAME,
            forms::transfer::AMOUNT,
        ]
    );
    assert_eq!(flow.pin().state(), PinState::Closed);
}
