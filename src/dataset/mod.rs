
use std::collections::HashSet;
use std::io;

use thiserror::Error;
use tokio::task::JoinError;

use crate::models::{RecordError, Transaction};
use crate::types::TransactionId;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Dataset reader task failed: {0}")]
    Reader(#[from] JoinError)
}

/// An immutable, fully loaded set of transactions.
///
/// Rows keep their arrival order; reports sort their own working copies as
/// needed. `push` enforces the two invariants the external import cannot
/// guarantee: unique transaction IDs and non-negative amounts.
#[derive(Debug, Default)]
pub struct Dataset {
    rows: Vec<Transaction>,
    seen: HashSet<TransactionId>
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            seen: HashSet::new()
        }
    }

    /// Appends a transaction, rejecting rows that violate the dataset
    /// invariants.
    pub fn push(&mut self, transaction: Transaction) -> Result<(), RecordError> {
        if transaction.amount.is_sign_negative() {
            return Err(RecordError::NegativeAmount {
                transaction_id: transaction.transaction_id,
                amount: transaction.amount
            });
        }

        if !self.seen.insert(transaction.transaction_id) {
            return Err(RecordError::DuplicateTransaction {
                transaction_id: transaction.transaction_id
            });
        }

        self.rows.push(transaction);

        Ok(())
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
