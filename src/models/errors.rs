use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::TransactionId;

/// Invariant violations caught while assembling the dataset. Offending
/// rows are discarded; the rest of the load continues.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Duplicate transaction [{transaction_id}] was discarded")]
    DuplicateTransaction {
        transaction_id: TransactionId
    },
    #[error("Negative amount [{amount}] for transaction [{transaction_id}] was discarded")]
    NegativeAmount {
        transaction_id: TransactionId,
        amount: Decimal
    }
}
