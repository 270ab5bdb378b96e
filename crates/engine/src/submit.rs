//! Simulated commit of a confirmed transaction.

use std::{future::Future, time::Duration};

use api_types::transaction::{TransactionRecord, TransactionType};
use chrono::Utc;
use chrono_tz::Tz;

use crate::{
    EngineError,
    flow::{PendingCommit, TransactionFlow},
};

/// Write side of the transaction store.
pub trait TransactionStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn create_transaction(
        &self,
        record: &TransactionRecord,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<S: TransactionStore> TransactionStore for std::sync::Arc<S> {
    type Error = S::Error;

    fn create_transaction(
        &self,
        record: &TransactionRecord,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).create_transaction(record)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitPolicy {
    /// Simulated processing delay, awaited once per attempt.
    pub latency: Duration,
    /// Zone used for the record's calendar date.
    pub timezone: Tz,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1200),
            timezone: chrono_tz::Africa::Lagos,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitReceipt {
    pub record: TransactionRecord,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct TransactionSubmitter<S> {
    store: S,
    policy: SubmitPolicy,
}

impl<S: TransactionStore> TransactionSubmitter<S> {
    pub fn new(store: S, policy: SubmitPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    /// Runs one commit attempt: latency, ceiling check, then a single store
    /// write. There is no retry.
    pub async fn commit(&self, pending: PendingCommit) -> Result<CommitReceipt, EngineError> {
        tokio::time::sleep(self.policy.latency).await;

        if pending.amount > pending.ceiling {
            tracing::info!(
                amount = pending.amount.naira(),
                ceiling = pending.ceiling.naira(),
                "amount over single-transaction ceiling"
            );
            return Err(EngineError::AmountOverCeiling {
                amount: pending.amount,
                ceiling: pending.ceiling,
            });
        }

        let now = Utc::now();
        let record = TransactionRecord {
            id: now.timestamp_millis(),
            kind: TransactionType::Debit,
            amount: pending.amount.naira(),
            description: pending.draft.description,
            date: now.with_timezone(&self.policy.timezone).date_naive(),
        };

        if let Err(err) = self.store.create_transaction(&record).await {
            tracing::error!(error = %err, "failed to save transaction");
            return Err(EngineError::StoreWriteFailed(err.to_string()));
        }

        tracing::info!(id = record.id, amount = record.amount, "transaction saved");
        Ok(CommitReceipt {
            record,
            message: pending.draft.success_message,
        })
    }

    /// Confirms the flow's PIN, commits inline and applies the result.
    ///
    /// A rejected PIN leaves the challenge open and never reaches the store.
    pub async fn submit(&self, flow: &mut TransactionFlow) -> Result<CommitReceipt, EngineError> {
        let pending = flow.confirm_pin()?;
        let result = self.commit(pending).await;
        let shown = match &result {
            Ok(receipt) => Ok(receipt.message.clone()),
            Err(err) => Err(err.clone()),
        };
        flow.finish(shown, std::time::Instant::now());
        result
    }
}
